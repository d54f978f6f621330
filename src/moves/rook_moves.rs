use crate::game_state::chess_types::BoardLocation;
use crate::moves::move_tables::ray;

/// Up, left, down, right.
pub const ROOK_DIRECTIONS: [(i8, i8); 4] = [(-1, 0), (0, -1), (1, 0), (0, 1)];

/// Rays in all four orthogonal directions, ignoring occupancy.
pub fn rook_rays(from: BoardLocation) -> impl Iterator<Item = impl Iterator<Item = BoardLocation>> {
    ROOK_DIRECTIONS.into_iter().map(move |direction| ray(from, direction))
}
