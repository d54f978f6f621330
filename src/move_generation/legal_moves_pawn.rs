//! Pseudo-legal pawn moves.
//!
//! Single and double advances onto empty squares, diagonal captures of enemy
//! pieces, and the en-passant capture onto the current target square when the
//! enemy pawn that just advanced stands beside the capturer.
//! Offsets are mirrored by color; promotion is inferred by `ChessMove::new`.

use crate::game_state::chess_types::{BoardLocation, GameState, Piece, PieceKind};
use crate::moves::chess_move::ChessMove;
use crate::moves::pawn_moves::pawn_attack_targets;

pub fn generate_pawn_moves(
    game_state: &GameState,
    from: BoardLocation,
    pawn: Piece,
    out: &mut Vec<ChessMove>,
) {
    let board = &game_state.board;
    let dir = pawn.color.pawn_direction();

    if let Some(one_step) = from.offset(dir, 0) {
        if board.is_empty_at(one_step) {
            out.push(ChessMove::new(from, one_step, pawn, board));

            if from.row == pawn.color.pawn_start_row() {
                if let Some(two_step) = one_step.offset(dir, 0) {
                    if board.is_empty_at(two_step) {
                        out.push(ChessMove::new(from, two_step, pawn, board));
                    }
                }
            }
        }
    }

    let passed_pawn = Piece::new(pawn.color.opposite(), PieceKind::Pawn);
    for to in pawn_attack_targets(pawn.color, from) {
        match board.color_at(to) {
            Some(color) if color != pawn.color => {
                out.push(ChessMove::new(from, to, pawn, board));
            }
            None if game_state.en_passant_square == Some(to)
                && board.get(BoardLocation { row: from.row, col: to.col }) == Some(passed_pawn) =>
            {
                out.push(ChessMove::en_passant(from, to, pawn));
            }
            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::generate_pawn_moves;
    use crate::game_state::chess_types::{BoardLocation, Color, GameState, Piece, PieceKind};

    fn pawn_moves(fen: &str, from: BoardLocation, color: Color) -> Vec<crate::moves::chess_move::ChessMove> {
        let game = GameState::from_fen(fen).expect("FEN should parse");
        let mut out = Vec::new();
        generate_pawn_moves(&game, from, Piece::new(color, PieceKind::Pawn), &mut out);
        out
    }

    #[test]
    fn start_row_pawn_has_single_and_double_advance() {
        let game = GameState::new_game();
        let mut out = Vec::new();
        let e2 = BoardLocation { row: 6, col: 4 };
        generate_pawn_moves(&game, e2, Piece::new(Color::White, PieceKind::Pawn), &mut out);
        let notations: Vec<String> = out.iter().map(|m| m.chess_notation()).collect();
        assert_eq!(notations, vec!["e2e3", "e2e4"]);
    }

    #[test]
    fn blocked_pawn_cannot_jump() {
        let out = pawn_moves(
            "4k3/8/8/8/8/4n3/4P3/4K3 w - - 0 1",
            BoardLocation { row: 6, col: 4 },
            Color::White,
        );
        assert!(out.is_empty());
    }

    #[test]
    fn en_passant_only_onto_target_square() {
        let with_target = pawn_moves(
            "4k3/8/8/3pP3/8/8/8/4K3 w - d6 0 1",
            BoardLocation { row: 3, col: 4 },
            Color::White,
        );
        assert!(with_target.iter().any(|m| m.is_en_passant && m.chess_notation() == "e5d6"));

        let without_target = pawn_moves(
            "4k3/8/8/3pP3/8/8/8/4K3 w - - 0 1",
            BoardLocation { row: 3, col: 4 },
            Color::White,
        );
        assert!(without_target.iter().all(|m| !m.is_en_passant));
        assert_eq!(without_target.len(), 1);
    }

    #[test]
    fn en_passant_needs_the_passed_pawn_beside_the_capturer() {
        // The target survives a position edit that removed the d5 pawn.
        let mut game = GameState::from_fen("4k3/8/8/3pP3/8/8/8/4K3 w - d6 0 1").expect("FEN should parse");
        game.board.set(BoardLocation { row: 3, col: 3 }, None);

        let mut out = Vec::new();
        let e5 = BoardLocation { row: 3, col: 4 };
        generate_pawn_moves(&game, e5, Piece::new(Color::White, PieceKind::Pawn), &mut out);
        assert!(out.iter().all(|m| !m.is_en_passant));
        assert_eq!(out.len(), 1);
    }

    #[test]
    fn black_capture_onto_last_row_promotes() {
        let out = pawn_moves(
            "4k3/8/8/8/8/8/6p1/4K2R b - - 0 1",
            BoardLocation { row: 6, col: 6 },
            Color::Black,
        );
        assert_eq!(out.len(), 2);
        assert!(out.iter().all(|m| m.is_promotion));
        assert!(out.iter().any(|m| m.is_capture()));
    }
}
