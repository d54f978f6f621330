use crate::moves::bishop_moves::BISHOP_DIRECTIONS;
use crate::moves::rook_moves::ROOK_DIRECTIONS;

/// Union of the rook and bishop directions.
pub const QUEEN_DIRECTIONS: [(i8, i8); 8] = [
    ROOK_DIRECTIONS[0],
    ROOK_DIRECTIONS[1],
    ROOK_DIRECTIONS[2],
    ROOK_DIRECTIONS[3],
    BISHOP_DIRECTIONS[0],
    BISHOP_DIRECTIONS[1],
    BISHOP_DIRECTIONS[2],
    BISHOP_DIRECTIONS[3],
];

#[cfg(test)]
mod tests {
    use super::QUEEN_DIRECTIONS;

    #[test]
    fn queen_directions_are_distinct_unit_steps() {
        for (i, a) in QUEEN_DIRECTIONS.iter().enumerate() {
            assert!(a.0.abs() <= 1 && a.1.abs() <= 1 && *a != (0, 0));
            for b in &QUEEN_DIRECTIONS[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }
}
