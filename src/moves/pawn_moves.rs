//! Pawn geometry, mirrored for the two colors.

use crate::game_state::chess_types::{BoardLocation, Color};

/// Diagonal steps a pawn of `color` captures along.
#[inline]
pub const fn pawn_capture_offsets(color: Color) -> [(i8, i8); 2] {
    let dir = color.pawn_direction();
    [(dir, -1), (dir, 1)]
}

/// Squares a pawn of `color` standing on `from` attacks.
pub fn pawn_attack_targets(color: Color, from: BoardLocation) -> impl Iterator<Item = BoardLocation> {
    pawn_capture_offsets(color)
        .into_iter()
        .filter_map(move |(d_row, d_col)| from.offset(d_row, d_col))
}

/// Squares from which a pawn of `attacker` would attack `target`.
pub fn pawn_attack_sources(
    attacker: Color,
    target: BoardLocation,
) -> impl Iterator<Item = BoardLocation> {
    pawn_capture_offsets(attacker)
        .into_iter()
        .filter_map(move |(d_row, d_col)| target.offset(-d_row, -d_col))
}
