use crate::game_state::game_state::GameState;
use crate::moves::chess_move::ChessMove;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MoveAnnotations {
    pub gives_check: bool,
    pub is_checkmate: bool,
}

/// A legal move together with the independent state it leads to.
#[derive(Debug, Clone)]
pub struct GeneratedMove {
    pub chess_move: ChessMove,
    pub game_after_move: GameState,
    pub annotations: MoveAnnotations,
}

/// Copy-per-branch move generation. Implementations never mutate the
/// caller's state; every `GeneratedMove` owns its own successor.
pub trait MoveGenerator: Send + Sync {
    fn generate_legal_moves(&self, game_state: &GameState) -> Vec<GeneratedMove>;
}
