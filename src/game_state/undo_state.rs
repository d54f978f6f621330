use crate::game_state::chess_types::*;

/// Pre-move snapshot pushed by `make_move` and popped by `undo_move`.
///
/// The move itself lives in the parallel move log.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UndoState {
    pub prev_castling_rights: CastlingRights,
    pub prev_en_passant_square: Option<BoardLocation>,
    pub prev_halfmove_clock: u16,
    pub prev_fullmove_number: u16,
    pub prev_zobrist_key: u64,
}
