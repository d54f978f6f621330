//! Random-move engine.
//!
//! Selects uniformly from legal moves; used for diagnostics and as a weak
//! self-play opponent.

use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use rand::SeedableRng;

use crate::engines::engine_trait::{Engine, EngineOutput, GoParams};
use crate::errors::{ChessError, ChessResult};
use crate::game_state::game_state::GameState;

pub struct RandomEngine {
    rng: StdRng,
}

impl RandomEngine {
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_os_rng(),
        }
    }

    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for RandomEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl Engine for RandomEngine {
    fn name(&self) -> &str {
        "Ember Random"
    }

    fn choose_move(&mut self, game_state: &GameState, params: &GoParams) -> ChessResult<EngineOutput> {
        let legal_moves = game_state.clone().legal_moves();

        let mut out = EngineOutput::default();
        out.info_lines
            .push(format!("info string random_engine legal_moves {}", legal_moves.len()));
        if let Some(depth) = params.depth {
            out.info_lines
                .push(format!("info string random_engine requested_depth {depth}"));
        }

        let picked = legal_moves
            .choose(&mut self.rng)
            .copied()
            .ok_or(ChessError::NoLegalMoves)?;
        out.best_move = Some(picked);
        Ok(out)
    }
}
