//! Engine abstraction for pluggable move choosers.
//!
//! Defines common input parameters and output payloads so different engine
//! strategies can be swapped behind a single trait interface.

use crate::errors::ChessResult;
use crate::game_state::game_state::GameState;
use crate::moves::chess_move::ChessMove;
use crate::search::board_scoring::Score;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GoParams {
    /// Overrides the engine's configured depth for one choice.
    pub depth: Option<u8>,
}

#[derive(Debug, Clone, Default)]
pub struct EngineOutput {
    pub best_move: Option<ChessMove>,
    pub score: Option<Score>,
    pub info_lines: Vec<String>,
}

pub trait Engine: Send {
    fn name(&self) -> &str;

    fn new_game(&mut self) {}

    /// Pick a move for the side to move. Errors with
    /// [`ChessError::NoLegalMoves`](crate::errors::ChessError::NoLegalMoves)
    /// when the game is already over.
    fn choose_move(&mut self, game_state: &GameState, params: &GoParams) -> ChessResult<EngineOutput>;
}
