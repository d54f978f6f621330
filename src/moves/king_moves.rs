//! King step table.
//!
//! Castling is not a step move; it is generated with its safety checks in
//! `legal_moves_king`.

use crate::game_state::chess_types::BoardLocation;
use crate::moves::move_tables::{generate_step_targets, mask_locations};

pub const KING_OFFSETS: [(i8, i8); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

pub const KING_TARGETS: [u64; 64] = generate_step_targets(&KING_OFFSETS);

#[inline]
pub fn king_targets(from: BoardLocation) -> impl Iterator<Item = BoardLocation> {
    mask_locations(KING_TARGETS[from.index()])
}
