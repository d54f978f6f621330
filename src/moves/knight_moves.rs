use crate::game_state::chess_types::BoardLocation;
use crate::moves::move_tables::{generate_step_targets, mask_locations};

pub const KNIGHT_OFFSETS: [(i8, i8); 8] = [
    (-2, -1),
    (-1, -2),
    (1, -2),
    (2, -1),
    (2, 1),
    (1, 2),
    (-1, 2),
    (-2, 1),
];

pub const KNIGHT_TARGETS: [u64; 64] = generate_step_targets(&KNIGHT_OFFSETS);

#[inline]
pub fn knight_targets(from: BoardLocation) -> impl Iterator<Item = BoardLocation> {
    mask_locations(KNIGHT_TARGETS[from.index()])
}

#[cfg(test)]
mod tests {
    use super::{knight_targets, KNIGHT_TARGETS};
    use crate::game_state::chess_types::BoardLocation;

    #[test]
    fn knight_on_d4_has_eight_targets() {
        let d4 = BoardLocation { row: 4, col: 3 };
        assert_eq!(KNIGHT_TARGETS[d4.index()].count_ones(), 8);
        assert_eq!(knight_targets(d4).count(), 8);
    }

    #[test]
    fn knight_in_corner_has_two_targets() {
        let h1 = BoardLocation { row: 7, col: 7 };
        let mut targets: Vec<_> = knight_targets(h1).collect();
        targets.sort();
        assert_eq!(
            targets,
            vec![BoardLocation { row: 5, col: 6 }, BoardLocation { row: 6, col: 5 }]
        );
    }
}
