use crate::game_state::chess_types::{BoardLocation, GameState, Piece};
use crate::move_generation::legal_move_shared::push_ray;
use crate::moves::chess_move::ChessMove;
use crate::moves::rook_moves::rook_rays;

pub fn generate_rook_moves(
    game_state: &GameState,
    from: BoardLocation,
    rook: Piece,
    out: &mut Vec<ChessMove>,
) {
    for ray in rook_rays(from) {
        push_ray(&game_state.board, from, rook, ray, out);
    }
}

#[cfg(test)]
mod tests {
    use super::generate_rook_moves;
    use crate::game_state::chess_types::{BoardLocation, Color, GameState, Piece, PieceKind};

    #[test]
    fn rook_stops_at_own_and_enemy_pieces() {
        let game = GameState::from_fen("4k3/8/8/8/p2R1P2/8/8/4K3 w - - 0 1").expect("FEN should parse");
        let mut out = Vec::new();
        let d4 = BoardLocation { row: 4, col: 3 };
        generate_rook_moves(&game, d4, Piece::new(Color::White, PieceKind::Rook), &mut out);

        // 4 up, 3 down, 3 left (incl. capture on a4), 1 right before own pawn on f4.
        assert_eq!(out.len(), 11);
        assert_eq!(out.iter().filter(|m| m.is_capture()).count(), 1);
    }
}
