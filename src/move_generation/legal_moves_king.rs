//! King steps and castling.
//!
//! Castling is produced only when the king stands unattacked on its home
//! square, the matching right is still held, an own rook sits on the corner,
//! every square between them is empty, and neither the square the king
//! crosses nor its destination is attacked.

use crate::game_state::chess_rules::{KING_SIDE_ROOK_COL, KING_START_COL, QUEEN_SIDE_ROOK_COL};
use crate::game_state::chess_types::{BoardLocation, GameState, Piece, PieceKind};
use crate::move_generation::legal_move_checks::is_square_attacked;
use crate::move_generation::legal_move_shared::push_step;
use crate::moves::chess_move::ChessMove;
use crate::moves::king_moves::king_targets;

pub fn generate_king_moves(
    game_state: &GameState,
    from: BoardLocation,
    king: Piece,
    out: &mut Vec<ChessMove>,
) {
    for to in king_targets(from) {
        push_step(&game_state.board, from, king, to, out);
    }
}

/// Castling moves for the side to move.
pub fn generate_castle_moves(game_state: &GameState, out: &mut Vec<ChessMove>) {
    let side = game_state.side_to_move;
    let king = Piece::new(side, PieceKind::King);
    let king_from = game_state.king_location(side);
    let home_row = side.home_row();

    if king_from.row != home_row || king_from.col != KING_START_COL {
        return;
    }
    if game_state.board.get(king_from) != Some(king) {
        return;
    }
    // Cannot castle out of check.
    if is_square_attacked(game_state, king_from, side.opposite()) {
        return;
    }

    let rights = game_state.castling_rights;
    if rights.king_side(side) {
        push_castle_if_clear(game_state, king, king_from, KING_SIDE_ROOK_COL, 1, out);
    }
    if rights.queen_side(side) {
        push_castle_if_clear(game_state, king, king_from, QUEEN_SIDE_ROOK_COL, -1, out);
    }
}

fn push_castle_if_clear(
    game_state: &GameState,
    king: Piece,
    king_from: BoardLocation,
    rook_col: u8,
    step: i8,
    out: &mut Vec<ChessMove>,
) {
    let side = king.color;
    let board = &game_state.board;
    let row = king_from.row;

    let rook_square = BoardLocation { row, col: rook_col };
    if board.get(rook_square) != Some(Piece::new(side, PieceKind::Rook)) {
        return;
    }

    let (low, high) = if rook_col > king_from.col {
        (king_from.col + 1, rook_col)
    } else {
        (rook_col + 1, king_from.col)
    };
    if (low..high).any(|col| !board.is_empty_at(BoardLocation { row, col })) {
        return;
    }

    let (Some(crossed), Some(king_to)) = (king_from.offset(0, step), king_from.offset(0, 2 * step))
    else {
        return;
    };
    let enemy = side.opposite();
    if is_square_attacked(game_state, crossed, enemy) || is_square_attacked(game_state, king_to, enemy) {
        return;
    }

    out.push(ChessMove::castle(king_from, king_to, king));
}
