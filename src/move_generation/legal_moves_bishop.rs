use crate::game_state::chess_types::{BoardLocation, GameState, Piece};
use crate::move_generation::legal_move_shared::push_ray;
use crate::moves::bishop_moves::bishop_rays;
use crate::moves::chess_move::ChessMove;

pub fn generate_bishop_moves(
    game_state: &GameState,
    from: BoardLocation,
    bishop: Piece,
    out: &mut Vec<ChessMove>,
) {
    for ray in bishop_rays(from) {
        push_ray(&game_state.board, from, bishop, ray, out);
    }
}
