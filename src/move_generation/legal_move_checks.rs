//! Attack queries.
//!
//! A square counts as attacked when a piece of the attacking color could move
//! onto it as a capture: pawns on their diagonals only, sliders up to the
//! first occupied square. The lookup runs outward from the queried square.

use crate::game_state::board::Board;
use crate::game_state::chess_types::{BoardLocation, Color, GameState, Piece, PieceKind};
use crate::moves::bishop_moves::bishop_rays;
use crate::moves::king_moves::king_targets;
use crate::moves::knight_moves::knight_targets;
use crate::moves::pawn_moves::pawn_attack_sources;
use crate::moves::rook_moves::rook_rays;

pub fn is_square_attacked(game_state: &GameState, square: BoardLocation, attacker: Color) -> bool {
    let board = &game_state.board;
    let holds = |location: BoardLocation, kind: PieceKind| {
        board
            .get(location)
            .is_some_and(|piece| piece.color == attacker && piece.kind == kind)
    };

    if pawn_attack_sources(attacker, square).any(|from| holds(from, PieceKind::Pawn)) {
        return true;
    }
    if knight_targets(square).any(|from| holds(from, PieceKind::Knight)) {
        return true;
    }
    if king_targets(square).any(|from| holds(from, PieceKind::King)) {
        return true;
    }

    for ray in rook_rays(square) {
        if let Some(piece) = first_piece(board, ray) {
            if piece.color == attacker && matches!(piece.kind, PieceKind::Rook | PieceKind::Queen) {
                return true;
            }
        }
    }
    for ray in bishop_rays(square) {
        if let Some(piece) = first_piece(board, ray) {
            if piece.color == attacker && matches!(piece.kind, PieceKind::Bishop | PieceKind::Queen) {
                return true;
            }
        }
    }

    false
}

#[inline]
fn first_piece(board: &Board, mut ray: impl Iterator<Item = BoardLocation>) -> Option<Piece> {
    ray.find_map(|location| board.get(location))
}

/// Whether `color`'s king is attacked in the current position.
#[inline]
pub fn is_king_in_check(game_state: &GameState, color: Color) -> bool {
    is_square_attacked(game_state, game_state.king_location(color), color.opposite())
}
