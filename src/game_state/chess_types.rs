//! Core value types shared by the board model, move generation, and search.

use crate::game_state::chess_rules::{BLACK_HOME_ROW, BLACK_PAWN_START_ROW, WHITE_HOME_ROW, WHITE_PAWN_START_ROW};

pub use crate::game_state::game_state::GameState;
pub use crate::game_state::undo_state::UndoState;

/// Side to move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    White,
    Black,
}

impl Color {
    #[inline]
    pub const fn index(self) -> usize {
        match self {
            Color::White => 0,
            Color::Black => 1,
        }
    }

    #[inline]
    pub const fn opposite(self) -> Self {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }

    /// Row step of a forward pawn advance. White advances toward row 0.
    #[inline]
    pub const fn pawn_direction(self) -> i8 {
        match self {
            Color::White => -1,
            Color::Black => 1,
        }
    }

    #[inline]
    pub const fn pawn_start_row(self) -> u8 {
        match self {
            Color::White => WHITE_PAWN_START_ROW,
            Color::Black => BLACK_PAWN_START_ROW,
        }
    }

    /// Row on which this side's pawns promote.
    #[inline]
    pub const fn promotion_row(self) -> u8 {
        match self {
            Color::White => BLACK_HOME_ROW,
            Color::Black => WHITE_HOME_ROW,
        }
    }

    #[inline]
    pub const fn home_row(self) -> u8 {
        match self {
            Color::White => WHITE_HOME_ROW,
            Color::Black => BLACK_HOME_ROW,
        }
    }
}

/// Piece kind (color is carried separately by [`Piece`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

impl PieceKind {
    #[inline]
    pub const fn index(self) -> usize {
        match self {
            PieceKind::Pawn => 0,
            PieceKind::Knight => 1,
            PieceKind::Bishop => 2,
            PieceKind::Rook => 3,
            PieceKind::Queen => 4,
            PieceKind::King => 5,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    pub color: Color,
    pub kind: PieceKind,
}

impl Piece {
    #[inline]
    pub const fn new(color: Color, kind: PieceKind) -> Self {
        Self { color, kind }
    }
}

/// A square coordinate on the 8x8 grid. `col` 0 is the a-file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BoardLocation {
    pub row: u8,
    pub col: u8,
}

impl BoardLocation {
    /// Build a location, rejecting coordinates off the board.
    #[inline]
    pub const fn new(row: u8, col: u8) -> Option<Self> {
        if row < 8 && col < 8 {
            Some(Self { row, col })
        } else {
            None
        }
    }

    /// Step by `(d_row, d_col)`, returning `None` when the result leaves the board.
    #[inline]
    pub const fn offset(self, d_row: i8, d_col: i8) -> Option<Self> {
        let row = self.row as i8 + d_row;
        let col = self.col as i8 + d_col;
        if is_on_board(row, col) {
            Some(Self {
                row: row as u8,
                col: col as u8,
            })
        } else {
            None
        }
    }

    /// Index in `0..64`, row-major from row 0.
    #[inline]
    pub const fn index(self) -> usize {
        self.row as usize * 8 + self.col as usize
    }

    #[inline]
    pub const fn from_index(index: usize) -> Self {
        Self {
            row: (index / 8) as u8,
            col: (index % 8) as u8,
        }
    }
}

/// Coordinate validity check (0-7 on both axes).
#[inline]
pub const fn is_on_board(row: i8, col: i8) -> bool {
    row >= 0 && row < 8 && col >= 0 && col < 8
}

/// The four independent castling permissions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct CastlingRights {
    pub white_king_side: bool,
    pub white_queen_side: bool,
    pub black_king_side: bool,
    pub black_queen_side: bool,
}

impl CastlingRights {
    pub const ALL: Self = Self {
        white_king_side: true,
        white_queen_side: true,
        black_king_side: true,
        black_queen_side: true,
    };

    pub const NONE: Self = Self {
        white_king_side: false,
        white_queen_side: false,
        black_king_side: false,
        black_queen_side: false,
    };

    #[inline]
    pub const fn king_side(self, color: Color) -> bool {
        match color {
            Color::White => self.white_king_side,
            Color::Black => self.black_king_side,
        }
    }

    #[inline]
    pub const fn queen_side(self, color: Color) -> bool {
        match color {
            Color::White => self.white_queen_side,
            Color::Black => self.black_queen_side,
        }
    }

    pub fn clear_color(&mut self, color: Color) {
        match color {
            Color::White => {
                self.white_king_side = false;
                self.white_queen_side = false;
            }
            Color::Black => {
                self.black_king_side = false;
                self.black_queen_side = false;
            }
        }
    }

    /// Clear the right tied to a rook standing on `location`, if it is a
    /// rook corner.
    pub fn clear_rook_corner(&mut self, location: BoardLocation) {
        match (location.row, location.col) {
            (WHITE_HOME_ROW, 0) => self.white_queen_side = false,
            (WHITE_HOME_ROW, 7) => self.white_king_side = false,
            (BLACK_HOME_ROW, 0) => self.black_queen_side = false,
            (BLACK_HOME_ROW, 7) => self.black_king_side = false,
            _ => {}
        }
    }

    /// Four-bit packing used for hashing.
    #[inline]
    pub const fn bits(self) -> u8 {
        (self.white_king_side as u8)
            | ((self.white_queen_side as u8) << 1)
            | ((self.black_king_side as u8) << 2)
            | ((self.black_queen_side as u8) << 3)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn offset_rejects_steps_off_the_board() {
        let corner = BoardLocation::new(0, 0).expect("a8 is on the board");
        assert_eq!(corner.offset(-1, 0), None);
        assert_eq!(corner.offset(0, -1), None);
        assert_eq!(corner.offset(1, 1), BoardLocation::new(1, 1));
        assert_eq!(BoardLocation::new(8, 0), None);
    }

    #[test]
    fn index_round_trips() {
        for index in 0..64 {
            assert_eq!(BoardLocation::from_index(index).index(), index);
        }
    }

    #[test]
    fn rook_corner_clears_only_its_own_right() {
        let mut rights = CastlingRights::ALL;
        rights.clear_rook_corner(BoardLocation { row: 7, col: 7 });
        assert!(!rights.white_king_side);
        assert!(rights.white_queen_side);
        assert!(rights.black_king_side);
        assert_eq!(rights.bits(), 0b1110);

        rights.clear_rook_corner(BoardLocation { row: 3, col: 7 });
        assert_eq!(rights.bits(), 0b1110);
    }
}
