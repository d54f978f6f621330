use std::sync::Arc;
use std::thread;

use crate::game_state::game_state::GameState;
use crate::move_generation::move_generator::{GeneratedMove, MoveGenerator};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PerftCounts {
    pub nodes: usize,
    pub captures: usize,
    pub en_passant: usize,
    pub castles: usize,
    pub promotions: usize,
    pub checks: usize,
    pub checkmates: usize,
}

impl PerftCounts {
    fn merge(&mut self, rhs: PerftCounts) {
        self.nodes += rhs.nodes;
        self.captures += rhs.captures;
        self.en_passant += rhs.en_passant;
        self.castles += rhs.castles;
        self.promotions += rhs.promotions;
        self.checks += rhs.checks;
        self.checkmates += rhs.checkmates;
    }
}

pub fn perft<G: MoveGenerator>(generator: &G, game_state: &GameState, depth: u8) -> PerftCounts {
    if depth == 0 {
        return PerftCounts {
            nodes: 1,
            ..PerftCounts::default()
        };
    }

    let mut total = PerftCounts::default();
    for mv in generator.generate_legal_moves(game_state) {
        perft_recurse(generator, &mv, depth, 1, &mut total);
    }
    total
}

/// Perft with one worker thread per root move. Each worker owns the
/// successor state it was handed.
pub fn perft_multi_threaded(
    generator: Arc<dyn MoveGenerator>,
    game_state: &GameState,
    depth: u8,
) -> PerftCounts {
    if depth == 0 {
        return PerftCounts {
            nodes: 1,
            ..PerftCounts::default()
        };
    }

    let root_moves = generator.generate_legal_moves(game_state);
    let handles: Vec<_> = root_moves
        .into_iter()
        .map(|mv| {
            let generator_ref = Arc::clone(&generator);
            thread::spawn(move || {
                let mut local = PerftCounts::default();
                perft_recurse(generator_ref.as_ref(), &mv, depth, 1, &mut local);
                local
            })
        })
        .collect();

    let mut total = PerftCounts::default();
    for handle in handles {
        match handle.join() {
            Ok(local) => total.merge(local),
            Err(panic) => std::panic::resume_unwind(panic),
        }
    }
    total
}

fn perft_recurse<G: MoveGenerator + ?Sized>(
    generator: &G,
    mv: &GeneratedMove,
    search_depth: u8,
    current_depth: u8,
    counts: &mut PerftCounts,
) {
    if current_depth == search_depth {
        let chess_move = mv.chess_move;
        counts.nodes += 1;
        counts.captures += usize::from(chess_move.is_capture());
        counts.en_passant += usize::from(chess_move.is_en_passant);
        counts.castles += usize::from(chess_move.is_castle);
        counts.promotions += usize::from(chess_move.is_promotion);
        counts.checks += usize::from(mv.annotations.gives_check);
        counts.checkmates += usize::from(mv.annotations.is_checkmate);
        return;
    }

    for child in generator.generate_legal_moves(&mv.game_after_move) {
        perft_recurse(generator, &child, search_depth, current_depth + 1, counts);
    }
}
