//! Static position evaluation.
//!
//! Scores are integers in hundredths of a pawn, positive favoring white.
//! Each piece contributes its base value plus a positional bonus read from a
//! per-kind table. Black reads the same tables mirrored through the center.

use crate::game_state::board::Board;
use crate::game_state::chess_types::*;
use crate::game_state::game_state::GameState;

pub type Score = i32;

/// Centipawns per pawn.
pub const PAWN_UNIT: Score = 100;

/// Base score for a checkmate, before the remaining-depth bonus.
pub const MATE_SCORE: Score = 1000 * PAWN_UNIT;

pub const STALEMATE_SCORE: Score = 0;

pub trait BoardScorer: Send + Sync {
    /// Score of the position, positive favoring white.
    fn score(&self, game_state: &GameState) -> Score;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct MaterialScorer;

impl MaterialScorer {
    /// King 0, queen 10, rook 5, bishop 3, knight 3, pawn 1 (in pawns).
    #[inline]
    pub const fn piece_value(piece: PieceKind) -> Score {
        match piece {
            PieceKind::Pawn => PAWN_UNIT,
            PieceKind::Knight => 3 * PAWN_UNIT,
            PieceKind::Bishop => 3 * PAWN_UNIT,
            PieceKind::Rook => 5 * PAWN_UNIT,
            PieceKind::Queen => 10 * PAWN_UNIT,
            PieceKind::King => 0,
        }
    }
}

impl BoardScorer for MaterialScorer {
    #[inline]
    fn score(&self, game_state: &GameState) -> Score {
        material_score(&game_state.board)
    }
}

/// Signed material plus positional score of `board`.
pub fn material_score(board: &Board) -> Score {
    board
        .occupied()
        .map(|(location, piece)| {
            let value = MaterialScorer::piece_value(piece.kind) + positional_bonus(piece, location);
            match piece.color {
                Color::White => value,
                Color::Black => -value,
            }
        })
        .sum()
}

/// Table bonus for `piece` on `location`, read from white's point of view.
#[inline]
pub fn positional_bonus(piece: Piece, location: BoardLocation) -> Score {
    let (row, col) = match piece.color {
        Color::White => (location.row as usize, location.col as usize),
        Color::Black => (7 - location.row as usize, 7 - location.col as usize),
    };
    piece_square_table(piece.kind)[row][col]
}

#[inline]
pub fn score_to_pawns(score: Score) -> f64 {
    f64::from(score) / f64::from(PAWN_UNIT)
}

type PieceSquareTable = [[Score; 8]; 8];

const fn piece_square_table(kind: PieceKind) -> &'static PieceSquareTable {
    match kind {
        PieceKind::Pawn => &PAWN_TABLE,
        PieceKind::Knight => &KNIGHT_TABLE,
        PieceKind::Bishop => &BISHOP_TABLE,
        PieceKind::Rook => &ROOK_TABLE,
        PieceKind::Queen => &QUEEN_TABLE,
        PieceKind::King => &KING_TABLE,
    }
}

#[rustfmt::skip]
const PAWN_TABLE: PieceSquareTable = [
    [ 0,  0,   0,   0,   0,   0,  0, 0],
    [50, 50,  50,  50,  50,  50, 50, 50],
    [10, 10,  20,  30,  30,  20, 10, 10],
    [ 5,  5,  10,  25,  25,  10,  5,  5],
    [ 0,  0,   0,  20,  20,   0,  0,  0],
    [ 5, -5, -10,   0,   0, -10, -5,  5],
    [ 5, 10,  10, -20, -20,  10, 10,  5],
    [ 0,  0,   0,   0,   0,   0,  0,  0],
];

#[rustfmt::skip]
const KNIGHT_TABLE: PieceSquareTable = [
    [-50, -40, -30, -30, -30, -30, -40, -50],
    [-40, -20,   0,   0,   0,   0, -20, -40],
    [-30,   0,  10,  15,  15,  10,   0, -30],
    [-30,   5,  15,  20,  20,  15,   5, -30],
    [-30,   0,  15,  20,  20,  15,   0, -30],
    [-30,   5,  10,  15,  15,  10,   5, -30],
    [-40, -20,   0,   5,   5,   0, -20, -40],
    [-50, -40, -30, -30, -30, -30, -40, -50],
];

#[rustfmt::skip]
const BISHOP_TABLE: PieceSquareTable = [
    [-20, -10, -10, -10, -10, -10, -10, -20],
    [-10,   0,   0,   0,   0,   0,   0, -10],
    [-10,   0,   5,  10,  10,   5,   0, -10],
    [-10,   5,   5,  10,  10,   5,   5, -10],
    [-10,   0,  10,  10,  10,  10,   0, -10],
    [-10,  10,  10,  10,  10,  10,  10, -10],
    [-10,   5,   0,   0,   0,   0,   5, -10],
    [-20, -10, -10, -10, -10, -10, -10, -20],
];

#[rustfmt::skip]
const ROOK_TABLE: PieceSquareTable = [
    [ 0,  0, 0, 0, 0, 0,  0,  0],
    [ 5, 10, 10, 10, 10, 10, 10, 5],
    [-5,  0, 0, 0, 0, 0,  0, -5],
    [-5,  0, 0, 0, 0, 0,  0, -5],
    [-5,  0, 0, 0, 0, 0,  0, -5],
    [-5,  0, 0, 0, 0, 0,  0, -5],
    [-5,  0, 0, 0, 0, 0,  0, -5],
    [ 0,  0, 0, 5, 5, 0,  0,  0],
];

#[rustfmt::skip]
const QUEEN_TABLE: PieceSquareTable = [
    [-20, -10, -10, -5, -5, -10, -10, -20],
    [-10,   0,   0,  0,  0,   0,   0, -10],
    [-10,   0,   5,  5,  5,   5,   0, -10],
    [ -5,   0,   5,  5,  5,   5,   0,  -5],
    [  0,   0,   5,  5,  5,   5,   0,  -5],
    [-10,   5,   5,  5,  5,   5,   0, -10],
    [-10,   0,   5,  0,  0,   0,   0, -10],
    [-20, -10, -10, -5, -5, -10, -10, -20],
];

#[rustfmt::skip]
const KING_TABLE: PieceSquareTable = [
    [20, 30, 10, 0, 0, 10, 30, 20],
    [20, 30, 10, 0, 0, 10, 30, 20],
    [10, 20,  0, 0, 0,  0, 20, 10],
    [ 0,  0,  0, 0, 0,  0,  0,  0],
    [ 0,  0,  0, 0, 0,  0,  0,  0],
    [10, 20,  0, 0, 0,  0, 20, 10],
    [20, 30, 10, 0, 0, 10, 30, 20],
    [20, 30, 10, 0, 0, 10, 30, 20],
];
