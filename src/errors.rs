//! Errors used throughout the chess engine.
//!
//! Rule outcomes (an illegal request, an empty undo, a finished game) are not
//! errors; they surface as `None`, a no-op, or terminal flags. `ChessError`
//! covers malformed textual input, supplied positions that break board
//! invariants, and engine calls that cannot produce a move.

use thiserror::Error;

use crate::game_state::chess_types::Color;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ChessError {
    /// The FEN string could not be parsed.
    #[error("invalid FEN: {0}")]
    InvalidFen(String),

    /// A square or move in coordinate notation could not be parsed.
    #[error("invalid algebraic notation: {0}")]
    InvalidAlgebraic(String),

    /// A supplied position does not hold exactly one king of this color.
    #[error("position must contain exactly one {0:?} king")]
    MissingKing(Color),

    /// A supplied position no game could reach, such as the side that just
    /// moved being left in check.
    #[error("invalid position: {0}")]
    InvalidPosition(String),

    /// A well-formed move that is not in the current legal-move list.
    #[error("illegal move: {0}")]
    IllegalMove(String),

    #[error("no legal moves available")]
    NoLegalMoves,
}

pub type ChessResult<T> = Result<T, ChessError>;
