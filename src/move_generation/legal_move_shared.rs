use crate::game_state::board::Board;
use crate::game_state::chess_types::{BoardLocation, Piece};
use crate::moves::chess_move::ChessMove;

/// Push a single-step move if `to` is empty or holds an enemy piece.
#[inline]
pub fn push_step(
    board: &Board,
    from: BoardLocation,
    piece: Piece,
    to: BoardLocation,
    out: &mut Vec<ChessMove>,
) {
    if board.color_at(to) != Some(piece.color) {
        out.push(ChessMove::new(from, to, piece, board));
    }
}

/// Walk a ray, pushing every empty square and the first enemy piece, and
/// stopping at the edge, an own piece, or that first capture.
pub fn push_ray(
    board: &Board,
    from: BoardLocation,
    piece: Piece,
    ray: impl Iterator<Item = BoardLocation>,
    out: &mut Vec<ChessMove>,
) {
    for to in ray {
        match board.color_at(to) {
            None => out.push(ChessMove::new(from, to, piece, board)),
            Some(color) if color != piece.color => {
                out.push(ChessMove::new(from, to, piece, board));
                break;
            }
            Some(_) => break,
        }
    }
}
