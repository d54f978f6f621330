//! Alpha-beta engine.
//!
//! Wraps a [`Searcher`] and falls back to a random legal move when the
//! search produces none.

use crate::engines::engine_trait::{Engine, EngineOutput, GoParams};
use crate::errors::{ChessError, ChessResult};
use crate::game_state::game_state::GameState;
use crate::search::minimax::{SearchConfig, Searcher};

pub struct MinimaxEngine {
    searcher: Searcher,
}

impl MinimaxEngine {
    pub fn new(config: SearchConfig) -> Self {
        Self {
            searcher: Searcher::new(config),
        }
    }

    pub fn with_seed(config: SearchConfig, seed: u64) -> Self {
        Self {
            searcher: Searcher::with_seed(config, seed),
        }
    }
}

impl Default for MinimaxEngine {
    fn default() -> Self {
        Self::new(SearchConfig::default())
    }
}

impl Engine for MinimaxEngine {
    fn name(&self) -> &str {
        "Ember Minimax"
    }

    fn new_game(&mut self) {
        self.searcher.clear_cache();
    }

    fn choose_move(&mut self, game_state: &GameState, params: &GoParams) -> ChessResult<EngineOutput> {
        let legal_moves = game_state.clone().legal_moves();
        if legal_moves.is_empty() {
            return Err(ChessError::NoLegalMoves);
        }

        let depth = params.depth.unwrap_or(self.searcher.config().depth);
        let result = self.searcher.search_to_depth(game_state, &legal_moves, depth);

        let mut out = EngineOutput {
            score: Some(result.best_score),
            ..EngineOutput::default()
        };
        out.info_lines.push(format!(
            "info depth {} nodes {} score cp {}",
            result.depth, result.nodes, result.best_score
        ));

        out.best_move = match result.best_move {
            Some(mv) => Some(mv),
            None => {
                out.info_lines
                    .push("info string minimax_engine random_fallback".to_owned());
                self.searcher.find_random_move(&legal_moves)
            }
        };
        Ok(out)
    }
}
