//! The 8x8 square grid.
//!
//! Pure storage: accessors and mutators only, no rule knowledge. Row 0 is
//! black's back rank and column 0 is the a-file.

use crate::game_state::chess_types::{BoardLocation, Color, Piece, PieceKind};

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Board {
    squares: [[Option<Piece>; 8]; 8],
}

impl Default for Board {
    fn default() -> Self {
        Self::empty()
    }
}

impl Board {
    pub const fn empty() -> Self {
        Self {
            squares: [[None; 8]; 8],
        }
    }

    pub fn standard() -> Self {
        const BACK_RANK: [PieceKind; 8] = [
            PieceKind::Rook,
            PieceKind::Knight,
            PieceKind::Bishop,
            PieceKind::Queen,
            PieceKind::King,
            PieceKind::Bishop,
            PieceKind::Knight,
            PieceKind::Rook,
        ];

        let mut board = Self::empty();
        for (col, kind) in BACK_RANK.into_iter().enumerate() {
            board.squares[0][col] = Some(Piece::new(Color::Black, kind));
            board.squares[1][col] = Some(Piece::new(Color::Black, PieceKind::Pawn));
            board.squares[6][col] = Some(Piece::new(Color::White, PieceKind::Pawn));
            board.squares[7][col] = Some(Piece::new(Color::White, kind));
        }
        board
    }

    #[inline]
    pub fn get(&self, location: BoardLocation) -> Option<Piece> {
        self.squares[location.row as usize][location.col as usize]
    }

    #[inline]
    pub fn set(&mut self, location: BoardLocation, content: Option<Piece>) {
        self.squares[location.row as usize][location.col as usize] = content;
    }

    #[inline]
    pub fn is_empty_at(&self, location: BoardLocation) -> bool {
        self.get(location).is_none()
    }

    #[inline]
    pub fn color_at(&self, location: BoardLocation) -> Option<Color> {
        self.get(location).map(|piece| piece.color)
    }

    /// Row-major view of the grid for read-only consumers.
    #[inline]
    pub fn rows(&self) -> &[[Option<Piece>; 8]; 8] {
        &self.squares
    }

    /// Every occupied square with its piece, in row-major order.
    pub fn occupied(&self) -> impl Iterator<Item = (BoardLocation, Piece)> + '_ {
        self.squares.iter().enumerate().flat_map(|(row, cells)| {
            cells.iter().enumerate().filter_map(move |(col, cell)| {
                cell.map(|piece| {
                    (
                        BoardLocation {
                            row: row as u8,
                            col: col as u8,
                        },
                        piece,
                    )
                })
            })
        })
    }

    pub fn find(&self, piece: Piece) -> impl Iterator<Item = BoardLocation> + '_ {
        self.occupied()
            .filter(move |(_, found)| *found == piece)
            .map(|(location, _)| location)
    }
}
