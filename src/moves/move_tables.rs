//! Compile-time target tables for fixed-offset pieces.
//!
//! A table maps each square index (`row * 8 + col`) to a 64-bit mask of the
//! in-board squares reachable by one of the given offsets.

use crate::game_state::chess_types::BoardLocation;

pub const fn generate_step_targets(offsets: &[(i8, i8)]) -> [u64; 64] {
    let mut table = [0u64; 64];
    let mut sq = 0usize;

    while sq < 64 {
        let row = (sq / 8) as i8;
        let col = (sq % 8) as i8;
        let mut targets = 0u64;

        let mut i = 0usize;
        while i < offsets.len() {
            targets |= set_if_valid(row + offsets[i].0, col + offsets[i].1);
            i += 1;
        }

        table[sq] = targets;
        sq += 1;
    }

    table
}

const fn set_if_valid(row: i8, col: i8) -> u64 {
    if row < 0 || row > 7 || col < 0 || col > 7 {
        return 0;
    }

    1u64 << (row as usize * 8 + col as usize)
}

/// Iterate the squares set in a target mask, lowest index first.
pub fn mask_locations(mut mask: u64) -> impl Iterator<Item = BoardLocation> {
    std::iter::from_fn(move || {
        if mask == 0 {
            return None;
        }
        let index = mask.trailing_zeros() as usize;
        mask &= mask - 1;
        Some(BoardLocation::from_index(index))
    })
}

/// Squares along one direction from `from` (exclusive) up to the board edge.
pub fn ray(from: BoardLocation, direction: (i8, i8)) -> impl Iterator<Item = BoardLocation> {
    let (d_row, d_col) = direction;
    std::iter::successors(from.offset(d_row, d_col), move |loc| loc.offset(d_row, d_col))
}
