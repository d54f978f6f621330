//! The move record produced by generation and consumed by make/undo.
//!
//! Equality deliberately compares only the start and end coordinates, so two
//! records that differ only in capture or promotion data compare equal. This
//! is what lets a raw `(start, end)` request match an entry of the legal list.

use std::fmt;
use std::hash::{Hash, Hasher};

use crate::game_state::board::Board;
use crate::game_state::chess_types::{BoardLocation, Piece, PieceKind};
use crate::utils::algebraic::location_to_algebraic;

#[derive(Debug, Clone, Copy)]
pub struct ChessMove {
    pub start: BoardLocation,
    pub end: BoardLocation,
    pub piece_moved: Piece,
    pub piece_captured: Option<Piece>,
    /// Set when a pawn lands on its last row; it always becomes a queen.
    pub is_promotion: bool,
    pub is_en_passant: bool,
    pub is_castle: bool,
}

impl ChessMove {
    /// Ordinary move or capture of `piece_moved`, capturing whatever stands on
    /// `end`. Promotion is inferred from the destination row.
    pub fn new(start: BoardLocation, end: BoardLocation, piece_moved: Piece, board: &Board) -> Self {
        let is_promotion =
            piece_moved.kind == PieceKind::Pawn && end.row == piece_moved.color.promotion_row();
        Self {
            start,
            end,
            piece_moved,
            piece_captured: board.get(end),
            is_promotion,
            is_en_passant: false,
            is_castle: false,
        }
    }

    /// Build from a board lookup; `None` when `start` is empty.
    pub fn from_board(start: BoardLocation, end: BoardLocation, board: &Board) -> Option<Self> {
        board
            .get(start)
            .map(|piece_moved| Self::new(start, end, piece_moved, board))
    }

    /// Diagonal pawn capture onto the en-passant target. The captured pawn
    /// stands beside the mover, not on `end`.
    pub fn en_passant(start: BoardLocation, end: BoardLocation, piece_moved: Piece) -> Self {
        Self {
            start,
            end,
            piece_moved,
            piece_captured: Some(Piece::new(piece_moved.color.opposite(), PieceKind::Pawn)),
            is_promotion: false,
            is_en_passant: true,
            is_castle: false,
        }
    }

    /// Two-file king move; the rook relocation happens in `make_move`.
    pub fn castle(start: BoardLocation, end: BoardLocation, king: Piece) -> Self {
        Self {
            start,
            end,
            piece_moved: king,
            piece_captured: None,
            is_promotion: false,
            is_en_passant: false,
            is_castle: true,
        }
    }

    /// Coordinate-only identity: `start.row, start.col, end.row, end.col` as
    /// decimal digits.
    #[inline]
    pub const fn move_id(&self) -> u16 {
        self.start.row as u16 * 1000
            + self.start.col as u16 * 100
            + self.end.row as u16 * 10
            + self.end.col as u16
    }

    #[inline]
    pub fn is_capture(&self) -> bool {
        self.piece_captured.is_some()
    }

    /// The piece standing on `end` after the move.
    #[inline]
    pub fn piece_placed(&self) -> Piece {
        if self.is_promotion {
            Piece::new(self.piece_moved.color, PieceKind::Queen)
        } else {
            self.piece_moved
        }
    }

    /// Square the captured piece is removed from.
    #[inline]
    pub fn capture_location(&self) -> BoardLocation {
        if self.is_en_passant {
            BoardLocation {
                row: self.start.row,
                col: self.end.col,
            }
        } else {
            self.end
        }
    }

    /// Coordinate notation such as `e2e4`.
    pub fn chess_notation(&self) -> String {
        format!(
            "{}{}",
            location_to_algebraic(self.start),
            location_to_algebraic(self.end)
        )
    }
}

impl PartialEq for ChessMove {
    fn eq(&self, other: &Self) -> bool {
        self.move_id() == other.move_id()
    }
}

impl Eq for ChessMove {}

impl Hash for ChessMove {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.move_id().hash(state);
    }
}

impl fmt::Display for ChessMove {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.chess_notation())?;
        if self.is_promotion {
            f.write_str("q")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::ChessMove;
    use crate::game_state::board::Board;
    use crate::game_state::chess_types::{BoardLocation, Color, Piece, PieceKind};

    fn loc(row: u8, col: u8) -> BoardLocation {
        BoardLocation { row, col }
    }

    #[test]
    fn pawn_reaching_last_row_promotes_to_queen() {
        let mut board = Board::empty();
        let pawn = Piece::new(Color::White, PieceKind::Pawn);
        board.set(loc(1, 0), Some(pawn));

        let mv = ChessMove::new(loc(1, 0), loc(0, 0), pawn, &board);
        assert!(mv.is_promotion);
        assert_eq!(mv.piece_placed(), Piece::new(Color::White, PieceKind::Queen));
        assert_eq!(mv.to_string(), "a7a8q");
    }

    #[test]
    fn equality_ignores_everything_but_coordinates() {
        let board = Board::standard();
        let normal = ChessMove::from_board(loc(6, 4), loc(4, 4), &board).expect("pawn on e2");
        let mut flagged = normal;
        flagged.is_castle = true;
        flagged.piece_captured = Some(Piece::new(Color::Black, PieceKind::Rook));

        assert_eq!(normal, flagged);
        assert_eq!(normal.move_id(), 6444);
        assert_eq!(normal.chess_notation(), "e2e4");
    }

    #[test]
    fn en_passant_capture_square_is_beside_the_mover() {
        let pawn = Piece::new(Color::White, PieceKind::Pawn);
        let mv = ChessMove::en_passant(loc(3, 4), loc(2, 3), pawn);
        assert!(mv.is_capture());
        assert_eq!(mv.capture_location(), loc(3, 3));
        assert_eq!(mv.piece_captured, Some(Piece::new(Color::Black, PieceKind::Pawn)));
    }

    #[test]
    fn empty_start_square_builds_nothing() {
        let board = Board::standard();
        assert!(ChessMove::from_board(loc(4, 4), loc(3, 4), &board).is_none());
    }
}
