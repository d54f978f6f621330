//! Reversible move application.
//!
//! `make_move` is the only mutator of board, rights, and turn state during a
//! game. It pushes one `UndoState` and one move-log entry per ply, and
//! `undo_move` pops both, so any make/undo pair leaves the state unchanged.

use tracing::debug;

use crate::game_state::chess_types::*;
use crate::moves::chess_move::ChessMove;
use crate::search::zobrist::{castling_key, en_passant_key, piece_square_key, side_to_move_key};

pub fn make_move(game_state: &mut GameState, mv: ChessMove) {
    let mover = mv.piece_moved.color;

    game_state.undo_stack.push(UndoState {
        prev_castling_rights: game_state.castling_rights,
        prev_en_passant_square: game_state.en_passant_square,
        prev_halfmove_clock: game_state.halfmove_clock,
        prev_fullmove_number: game_state.fullmove_number,
        prev_zobrist_key: game_state.zobrist_key,
    });

    let mut key = game_state.zobrist_key;

    // Lift the mover and remove any captured piece.
    game_state.board.set(mv.start, None);
    key ^= piece_square_key(mv.piece_moved, mv.start);

    if let Some(captured) = mv.piece_captured {
        let capture_location = mv.capture_location();
        game_state.board.set(capture_location, None);
        key ^= piece_square_key(captured, capture_location);
    }

    let placed = mv.piece_placed();
    game_state.board.set(mv.end, Some(placed));
    key ^= piece_square_key(placed, mv.end);

    if mv.piece_moved.kind == PieceKind::King {
        game_state.king_locations[mover.index()] = mv.end;
    }

    if mv.is_castle {
        let (rook_from, rook_to) = castle_rook_squares(mv);
        let rook = Piece::new(mover, PieceKind::Rook);
        game_state.board.set(rook_from, None);
        game_state.board.set(rook_to, Some(rook));
        key ^= piece_square_key(rook, rook_from) ^ piece_square_key(rook, rook_to);
    }

    key ^= en_passant_key(game_state.en_passant_square);
    game_state.en_passant_square = if mv.piece_moved.kind == PieceKind::Pawn
        && mv.start.row.abs_diff(mv.end.row) == 2
    {
        Some(BoardLocation {
            row: (mv.start.row + mv.end.row) / 2,
            col: mv.start.col,
        })
    } else {
        None
    };
    key ^= en_passant_key(game_state.en_passant_square);

    key ^= castling_key(game_state.castling_rights);
    update_castling_rights(&mut game_state.castling_rights, mv);
    key ^= castling_key(game_state.castling_rights);

    if mv.piece_moved.kind == PieceKind::Pawn || mv.is_capture() {
        game_state.halfmove_clock = 0;
    } else {
        game_state.halfmove_clock = game_state.halfmove_clock.saturating_add(1);
    }
    if mover == Color::Black {
        game_state.fullmove_number = game_state.fullmove_number.saturating_add(1);
    }

    game_state.move_log.push(mv);
    game_state.side_to_move = mover.opposite();
    key ^= side_to_move_key();
    game_state.zobrist_key = key;

    game_state.clear_terminal_flags();
}

/// Revert the last move. A no-op when the history is empty.
pub fn undo_move(game_state: &mut GameState) {
    let (Some(mv), Some(undo)) = (game_state.move_log.pop(), game_state.undo_stack.pop()) else {
        debug!("undo requested with empty move history");
        return;
    };

    game_state.side_to_move = mv.piece_moved.color;

    game_state.board.set(mv.end, None);
    game_state.board.set(mv.start, Some(mv.piece_moved));
    if let Some(captured) = mv.piece_captured {
        game_state.board.set(mv.capture_location(), Some(captured));
    }

    if mv.is_castle {
        let (rook_from, rook_to) = castle_rook_squares(mv);
        game_state.board.set(rook_to, None);
        game_state
            .board
            .set(rook_from, Some(Piece::new(mv.piece_moved.color, PieceKind::Rook)));
    }

    if mv.piece_moved.kind == PieceKind::King {
        game_state.king_locations[mv.piece_moved.color.index()] = mv.start;
    }

    game_state.castling_rights = undo.prev_castling_rights;
    game_state.en_passant_square = undo.prev_en_passant_square;
    game_state.halfmove_clock = undo.prev_halfmove_clock;
    game_state.fullmove_number = undo.prev_fullmove_number;
    game_state.zobrist_key = undo.prev_zobrist_key;

    game_state.clear_terminal_flags();
}

/// Rook origin and destination for a castle move. King side: the rook jumps
/// from beside the king's destination (toward h) to the square on its other
/// side. Queen side mirrors this toward the a-file.
fn castle_rook_squares(mv: ChessMove) -> (BoardLocation, BoardLocation) {
    let row = mv.end.row;
    if mv.end.col > mv.start.col {
        (
            BoardLocation { row, col: mv.end.col + 1 },
            BoardLocation { row, col: mv.end.col - 1 },
        )
    } else {
        (
            BoardLocation { row, col: mv.end.col - 2 },
            BoardLocation { row, col: mv.end.col + 1 },
        )
    }
}

fn update_castling_rights(rights: &mut CastlingRights, mv: ChessMove) {
    match mv.piece_moved.kind {
        PieceKind::King => rights.clear_color(mv.piece_moved.color),
        PieceKind::Rook => rights.clear_rook_corner(mv.start),
        _ => {}
    }

    // A rook captured on its corner takes the right with it.
    if matches!(mv.piece_captured, Some(piece) if piece.kind == PieceKind::Rook) {
        rights.clear_rook_corner(mv.end);
    }
}
