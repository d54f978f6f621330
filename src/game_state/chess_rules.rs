//! Canonical chess-rule constants.
//!
//! Rows follow the board grid: row 0 is black's back rank, row 7 is white's.

/// Standard chess starting position in Forsyth-Edwards Notation (FEN).
pub const STARTING_POSITION_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

pub const WHITE_HOME_ROW: u8 = 7;
pub const BLACK_HOME_ROW: u8 = 0;
pub const WHITE_PAWN_START_ROW: u8 = 6;
pub const BLACK_PAWN_START_ROW: u8 = 1;

/// Column of both kings before they move.
pub const KING_START_COL: u8 = 4;
pub const KING_SIDE_ROOK_COL: u8 = 7;
pub const QUEEN_SIDE_ROOK_COL: u8 = 0;

/// Fixed search depth in plies.
pub const SEARCH_DEPTH: u8 = 2;
