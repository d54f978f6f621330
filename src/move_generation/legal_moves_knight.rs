use crate::game_state::chess_types::{BoardLocation, GameState, Piece};
use crate::move_generation::legal_move_shared::push_step;
use crate::moves::chess_move::ChessMove;
use crate::moves::knight_moves::knight_targets;

pub fn generate_knight_moves(
    game_state: &GameState,
    from: BoardLocation,
    knight: Piece,
    out: &mut Vec<ChessMove>,
) {
    for to in knight_targets(from) {
        push_step(&game_state.board, from, knight, to, out);
    }
}
