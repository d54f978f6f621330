//! Coordinate move notation ("e2e4", "e7e8q") matched against legal moves.

use crate::errors::{ChessError, ChessResult};
use crate::moves::chess_move::ChessMove;
use crate::utils::algebraic::algebraic_to_location;

/// Coordinate notation of `mv`, with a trailing `q` on promotions.
#[inline]
pub fn move_to_long_algebraic(mv: &ChessMove) -> String {
    mv.to_string()
}

/// Parse `long_algebraic` and return the matching entry of `legal_moves`.
///
/// Promotion always yields a queen, so a promotion suffix is optional and
/// only `q` is accepted.
pub fn long_algebraic_to_move(long_algebraic: &str, legal_moves: &[ChessMove]) -> ChessResult<ChessMove> {
    let trimmed = long_algebraic.trim();
    if !trimmed.is_ascii() || (trimmed.len() != 4 && trimmed.len() != 5) {
        return Err(ChessError::InvalidAlgebraic(format!("invalid move: {long_algebraic}")));
    }

    let from = algebraic_to_location(&trimmed[0..2])?;
    let to = algebraic_to_location(&trimmed[2..4])?;
    let promotion = trimmed[4..].chars().next();
    if let Some(piece) = promotion {
        if piece.to_ascii_lowercase() != 'q' {
            return Err(ChessError::InvalidAlgebraic(format!(
                "unsupported promotion piece '{piece}' in {long_algebraic}"
            )));
        }
    }

    let mv = legal_moves
        .iter()
        .copied()
        .find(|mv| mv.start == from && mv.end == to)
        .ok_or_else(|| ChessError::IllegalMove(trimmed.to_owned()))?;

    if promotion.is_some() && !mv.is_promotion {
        return Err(ChessError::InvalidAlgebraic(format!(
            "promotion suffix on a non-promoting move: {long_algebraic}"
        )));
    }
    Ok(mv)
}

#[cfg(test)]
mod tests {
    use super::{long_algebraic_to_move, move_to_long_algebraic};
    use crate::errors::ChessError;
    use crate::game_state::game_state::GameState;

    #[test]
    fn simple_move_round_trip() {
        let mut game = GameState::new_game();
        let legal = game.legal_moves();
        let mv = long_algebraic_to_move("e2e4", &legal).expect("move should parse");
        assert_eq!(move_to_long_algebraic(&mv), "e2e4");
    }

    #[test]
    fn promotion_suffix_is_optional_but_must_be_queen() {
        let mut game = GameState::from_fen("8/P7/8/8/8/8/8/k6K w - - 0 1").expect("FEN should parse");
        let legal = game.legal_moves();
        let with_suffix = long_algebraic_to_move("a7a8q", &legal).expect("move should parse");
        let without_suffix = long_algebraic_to_move("a7a8", &legal).expect("move should parse");
        assert!(with_suffix.is_promotion);
        assert_eq!(with_suffix, without_suffix);
        assert_eq!(move_to_long_algebraic(&with_suffix), "a7a8q");
        assert!(matches!(
            long_algebraic_to_move("a7a8n", &legal),
            Err(ChessError::InvalidAlgebraic(_))
        ));
    }

    #[test]
    fn castling_and_en_passant_are_found_by_coordinates() {
        let mut game =
            GameState::from_fen("r3k2r/8/8/3pP3/8/8/8/R3K2R w KQkq d6 0 1").expect("FEN should parse");
        let legal = game.legal_moves();
        assert!(long_algebraic_to_move("e1g1", &legal).expect("castle").is_castle);
        assert!(long_algebraic_to_move("e1c1", &legal).expect("castle").is_castle);
        assert!(long_algebraic_to_move("e5d6", &legal).expect("en passant").is_en_passant);
    }

    #[test]
    fn moves_outside_the_legal_list_are_rejected() {
        let mut game = GameState::new_game();
        let legal = game.legal_moves();
        assert_eq!(
            long_algebraic_to_move("e2e5", &legal),
            Err(ChessError::IllegalMove("e2e5".to_owned()))
        );
        assert!(matches!(
            long_algebraic_to_move("e2", &legal),
            Err(ChessError::InvalidAlgebraic(_))
        ));
    }
}
