//! Square conversions for coordinate notation.
//!
//! Files `a`-`h` map to columns 0-7; rank `8` is row 0 and rank `1` is row 7.

use crate::errors::{ChessError, ChessResult};
use crate::game_state::chess_types::BoardLocation;

/// Convert a square such as "e4" to a board location.
#[inline]
pub fn algebraic_to_location(square: &str) -> ChessResult<BoardLocation> {
    let bytes = square.as_bytes();
    if bytes.len() != 2 {
        return Err(ChessError::InvalidAlgebraic(format!("invalid square: {square}")));
    }

    let file = bytes[0];
    let rank = bytes[1];

    if !(b'a'..=b'h').contains(&file) {
        return Err(ChessError::InvalidAlgebraic(format!("invalid file: {}", file as char)));
    }
    if !(b'1'..=b'8').contains(&rank) {
        return Err(ChessError::InvalidAlgebraic(format!("invalid rank: {}", rank as char)));
    }

    Ok(BoardLocation {
        row: b'8' - rank,
        col: file - b'a',
    })
}

/// Convert a board location to a square such as "e4".
#[inline]
pub fn location_to_algebraic(location: BoardLocation) -> String {
    let file_char = char::from(b'a' + location.col);
    let rank_char = char::from(b'8' - location.row);
    format!("{file_char}{rank_char}")
}
