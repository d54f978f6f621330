use crate::game_state::chess_types::BoardLocation;
use crate::moves::move_tables::ray;

/// Up-left, down-left, up-right, down-right.
pub const BISHOP_DIRECTIONS: [(i8, i8); 4] = [(-1, -1), (1, -1), (-1, 1), (1, 1)];

/// Rays in all four diagonal directions, ignoring occupancy.
pub fn bishop_rays(
    from: BoardLocation,
) -> impl Iterator<Item = impl Iterator<Item = BoardLocation>> {
    BISHOP_DIRECTIONS.into_iter().map(move |direction| ray(from, direction))
}

#[cfg(test)]
mod tests {
    use super::bishop_rays;
    use crate::game_state::chess_types::BoardLocation;

    #[test]
    fn bishop_in_center_sees_thirteen_squares() {
        let d4 = BoardLocation { row: 4, col: 3 };
        let total: usize = bishop_rays(d4).map(Iterator::count).sum();
        assert_eq!(total, 13);
    }

    #[test]
    fn bishop_in_corner_sees_one_diagonal() {
        let a8 = BoardLocation { row: 0, col: 0 };
        let lengths: Vec<usize> = bishop_rays(a8).map(Iterator::count).collect();
        assert_eq!(lengths, vec![0, 0, 0, 7]);
    }
}
