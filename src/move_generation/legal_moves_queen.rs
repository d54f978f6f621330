use crate::game_state::chess_types::{BoardLocation, GameState, Piece};
use crate::move_generation::legal_move_shared::push_ray;
use crate::moves::chess_move::ChessMove;
use crate::moves::move_tables::ray;
use crate::moves::queen_moves::QUEEN_DIRECTIONS;

pub fn generate_queen_moves(
    game_state: &GameState,
    from: BoardLocation,
    queen: Piece,
    out: &mut Vec<ChessMove>,
) {
    for direction in QUEEN_DIRECTIONS {
        push_ray(&game_state.board, from, queen, ray(from, direction), out);
    }
}
