//! Fixed-depth minimax search with alpha-beta pruning.
//!
//! White maximizes and black minimizes over white-positive scores. Branches
//! are explored with make/undo on a private copy of the caller's state, and
//! interior results are memoized in the searcher's transposition cache.

use rand::rngs::StdRng;
use rand::seq::{IndexedRandom, SliceRandom};
use rand::SeedableRng;
use tracing::{debug, trace};

use crate::game_state::chess_rules::SEARCH_DEPTH;
use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_checks::is_king_in_check;
use crate::move_generation::legal_move_generator::legal_moves as generate_legal_moves;
use crate::moves::chess_move::ChessMove;
use crate::search::board_scoring::{BoardScorer, MaterialScorer, Score, MATE_SCORE, STALEMATE_SCORE};
use crate::search::transposition_table::{Bound, TTEntry, TranspositionTable};

/// Wider than any reachable score, mate bonuses included.
pub const SCORE_INFINITY: Score = 2 * MATE_SCORE;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchConfig {
    /// Plies searched from the root.
    pub depth: u8,
    pub tt_size_mb: usize,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            depth: SEARCH_DEPTH,
            tt_size_mb: 16,
        }
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct SearchResult {
    pub best_move: Option<ChessMove>,
    pub best_score: Score,
    pub depth: u8,
    pub nodes: u64,
}

pub struct Searcher<S: BoardScorer = MaterialScorer> {
    config: SearchConfig,
    scorer: S,
    tt: TranspositionTable,
    rng: StdRng,
    nodes: u64,
}

impl Searcher<MaterialScorer> {
    /// Material scorer, entropy-seeded move shuffling.
    pub fn new(config: SearchConfig) -> Self {
        Self::with_scorer(config, MaterialScorer, StdRng::from_os_rng())
    }

    /// Material scorer with reproducible move shuffling.
    pub fn with_seed(config: SearchConfig, seed: u64) -> Self {
        Self::with_scorer(config, MaterialScorer, StdRng::seed_from_u64(seed))
    }
}

impl Default for Searcher<MaterialScorer> {
    fn default() -> Self {
        Self::new(SearchConfig::default())
    }
}

impl<S: BoardScorer> Searcher<S> {
    pub fn with_scorer(config: SearchConfig, scorer: S, rng: StdRng) -> Self {
        Self {
            config,
            scorer,
            tt: TranspositionTable::new_with_mb(config.tt_size_mb),
            rng,
            nodes: 0,
        }
    }

    #[inline]
    pub fn config(&self) -> SearchConfig {
        self.config
    }

    #[inline]
    pub fn transposition_table(&self) -> &TranspositionTable {
        &self.tt
    }

    /// Forget every cached position.
    pub fn clear_cache(&mut self) {
        self.tt.clear();
    }

    /// Alpha-beta minimax value of `game_state`, whose legal moves are
    /// `legal_moves`. The state is restored before returning.
    ///
    /// Depth 0 is always the static evaluation. Below that, a side with no
    /// legal moves is mated (scored against it, sooner mates larger) or
    /// stalemated (scored 0).
    ///
    /// Only interior nodes are cached. Depth-0 entries could never satisfy a
    /// probe, and mate scores depend on the remaining depth, so leaves and
    /// terminal positions are recomputed instead of stored.
    pub fn minimax(
        &mut self,
        game_state: &mut GameState,
        legal_moves: &[ChessMove],
        depth: u8,
        mut alpha: Score,
        mut beta: Score,
        maximizing: bool,
    ) -> Score {
        self.nodes += 1;

        if depth == 0 {
            return self.scorer.score(game_state);
        }
        if legal_moves.is_empty() {
            return terminal_score(game_state, depth);
        }

        let key = game_state.zobrist_key;
        if let Some(entry) = self.tt.probe(key) {
            if entry.usable(depth, alpha, beta) {
                trace!(key, depth, score = entry.score, bound = ?entry.bound, "cache hit");
                return entry.score;
            }
        }

        let (alpha_orig, beta_orig) = (alpha, beta);
        let mut best = if maximizing {
            -SCORE_INFINITY
        } else {
            SCORE_INFINITY
        };

        for &mv in legal_moves {
            game_state.make_move(mv);
            let replies = generate_legal_moves(game_state);
            let score = self.minimax(game_state, &replies, depth - 1, alpha, beta, !maximizing);
            game_state.undo_move();

            if maximizing {
                best = best.max(score);
                alpha = alpha.max(score);
            } else {
                best = best.min(score);
                beta = beta.min(score);
            }
            if beta <= alpha {
                break;
            }
        }

        let bound = if best <= alpha_orig {
            Bound::Upper
        } else if best >= beta_orig {
            Bound::Lower
        } else {
            Bound::Exact
        };
        self.tt.store(TTEntry {
            key,
            depth,
            score: best,
            bound,
        });

        best
    }

    /// Root search at the configured depth.
    pub fn search(&mut self, game_state: &GameState, legal_moves: &[ChessMove]) -> SearchResult {
        self.search_to_depth(game_state, legal_moves, self.config.depth)
    }

    /// Root search: shuffle the candidates, score each with one ply already
    /// consumed, and keep the first strictly best for the side to move.
    pub fn search_to_depth(
        &mut self,
        game_state: &GameState,
        legal_moves: &[ChessMove],
        depth: u8,
    ) -> SearchResult {
        self.nodes = 0;
        self.tt.new_generation();
        let tt_before = self.tt.stats();

        let maximizing = game_state.side_to_move == Color::White;
        let mut best_score = if maximizing {
            -SCORE_INFINITY
        } else {
            SCORE_INFINITY
        };
        let mut best_move = None;

        let mut candidates = legal_moves.to_vec();
        candidates.shuffle(&mut self.rng);

        let mut state = game_state.clone();
        let child_depth = depth.saturating_sub(1);
        for mv in candidates {
            state.make_move(mv);
            let replies = generate_legal_moves(&mut state);
            let score = self.minimax(
                &mut state,
                &replies,
                child_depth,
                -SCORE_INFINITY,
                SCORE_INFINITY,
                !maximizing,
            );
            state.undo_move();

            if (maximizing && score > best_score) || (!maximizing && score < best_score) {
                best_score = score;
                best_move = Some(mv);
            }
        }

        let tt_after = self.tt.stats();
        debug!(
            depth,
            nodes = self.nodes,
            tt_probes = tt_after.probes - tt_before.probes,
            tt_hits = tt_after.hits - tt_before.hits,
            tt_stores = tt_after.stores - tt_before.stores,
            best_move = %best_move.map_or_else(|| "none".to_owned(), |mv| mv.to_string()),
            score = best_score,
            "search complete"
        );

        SearchResult {
            best_move,
            best_score,
            depth,
            nodes: self.nodes,
        }
    }

    /// Best move for the side to move, or `None` when there are no legal
    /// moves.
    pub fn find_best_move(&mut self, game_state: &GameState, legal_moves: &[ChessMove]) -> Option<ChessMove> {
        self.search(game_state, legal_moves).best_move
    }

    /// Uniformly random choice; `None` on an empty list.
    pub fn find_random_move(&mut self, legal_moves: &[ChessMove]) -> Option<ChessMove> {
        legal_moves.choose(&mut self.rng).copied()
    }
}

/// Score of a position whose side to move has no legal moves.
fn terminal_score(game_state: &GameState, depth: u8) -> Score {
    let side = game_state.side_to_move;
    if is_king_in_check(game_state, side) {
        let mate = MATE_SCORE + Score::from(depth);
        match side {
            Color::White => -mate,
            Color::Black => mate,
        }
    } else {
        STALEMATE_SCORE
    }
}

#[cfg(test)]
mod tests {
    use super::{SearchConfig, Searcher, SCORE_INFINITY};
    use crate::game_state::chess_types::{Color, GameState};
    use crate::move_generation::legal_move_generator::legal_moves;
    use crate::moves::chess_move::ChessMove;
    use crate::search::board_scoring::{material_score, Score, MATE_SCORE};

    fn small_config(depth: u8) -> SearchConfig {
        SearchConfig { depth, tt_size_mb: 1 }
    }

    /// Plain minimax with the same terminal rules and no pruning or cache.
    fn unpruned(game: &mut GameState, depth: u8, maximizing: bool) -> Score {
        if depth == 0 {
            return material_score(game.board());
        }
        let moves = legal_moves(game);
        if moves.is_empty() {
            let side = game.side_to_move();
            return if crate::move_generation::legal_move_checks::is_king_in_check(game, side) {
                let mate = MATE_SCORE + Score::from(depth);
                if side == Color::White { -mate } else { mate }
            } else {
                0
            };
        }
        let scores = moves.into_iter().map(|mv| {
            game.make_move(mv);
            let score = unpruned(game, depth - 1, !maximizing);
            game.undo_move();
            score
        });
        if maximizing {
            scores.max().unwrap_or(-SCORE_INFINITY)
        } else {
            scores.min().unwrap_or(SCORE_INFINITY)
        }
    }

    #[test]
    fn depth_zero_is_the_static_evaluation_for_any_window() {
        let mut searcher = Searcher::with_seed(small_config(2), 1);
        let mut game = GameState::from_fen("r1bqkbnr/pppp1ppp/2n5/4p3/4P3/5N2/PPPP1PPP/RNBQKB1R w KQkq - 2 3")
            .expect("FEN should parse");
        let legal = legal_moves(&mut game);
        let expected = material_score(game.board());
        for (alpha, beta) in [(-SCORE_INFINITY, SCORE_INFINITY), (0, 1), (500, 900)] {
            assert_eq!(searcher.minimax(&mut game, &legal, 0, alpha, beta, true), expected);
        }
    }

    #[test]
    fn only_interior_nodes_are_cached() {
        let mut searcher = Searcher::with_seed(small_config(1), 3);
        let mut game = GameState::new_game();
        let legal = legal_moves(&mut game);
        searcher.minimax(&mut game, &legal, 1, -SCORE_INFINITY, SCORE_INFINITY, true);
        assert_eq!(searcher.transposition_table().stats().stores, 1);

        let mut mated = GameState::from_fen("R5k1/5ppp/8/8/8/8/8/6K1 b - - 0 1").expect("FEN should parse");
        let replies = legal_moves(&mut mated);
        assert!(replies.is_empty());
        searcher.clear_cache();
        let score = searcher.minimax(&mut mated, &replies, 2, -SCORE_INFINITY, SCORE_INFINITY, false);
        assert_eq!(score, MATE_SCORE + 2);
        assert_eq!(searcher.transposition_table().stats().stores, 0);
    }

    #[test]
    fn pruned_search_matches_unpruned_minimax() {
        for (fen, depth) in [
            ("r1bqkbnr/pppp1ppp/2n5/4p3/4P3/5N2/PPPP1PPP/RNBQKB1R w KQkq - 2 3", 2),
            ("r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1", 2),
            ("8/2p5/3p4/KP5r/1R3p1k/8/4P1P1/8 w - - 0 1", 3),
            ("6k1/5ppp/8/8/8/8/5PPP/R5K1 b - - 0 1", 3),
        ] {
            let mut game = GameState::from_fen(fen).expect("FEN should parse");
            let maximizing = game.side_to_move() == Color::White;
            let legal = legal_moves(&mut game);
            let before = game.get_fen();

            let mut searcher = Searcher::with_seed(small_config(depth), 7);
            let pruned = searcher.minimax(&mut game, &legal, depth, -SCORE_INFINITY, SCORE_INFINITY, maximizing);
            assert_eq!(game.get_fen(), before, "search must restore the state");

            let reference = unpruned(&mut game, depth, maximizing);
            assert_eq!(pruned, reference, "{fen}");
        }
    }

    #[test]
    fn root_choice_scores_like_unpruned_search() {
        let mut game = GameState::from_fen("r1bqkbnr/pppp1ppp/2n5/4p3/4P3/5N2/PPPP1PPP/RNBQKB1R w KQkq - 2 3")
            .expect("FEN should parse");
        let legal = legal_moves(&mut game);
        let mut searcher = Searcher::with_seed(small_config(2), 3);
        let result = searcher.search(&game, &legal);
        let chosen: ChessMove = result.best_move.expect("a move is available");

        let best_reference = legal
            .iter()
            .map(|&mv| {
                game.make_move(mv);
                let score = unpruned(&mut game, 1, false);
                game.undo_move();
                score
            })
            .max()
            .expect("legal moves exist");
        assert_eq!(result.best_score, best_reference);

        game.make_move(chosen);
        assert_eq!(unpruned(&mut game, 1, false), best_reference);
    }

    #[test]
    fn finds_back_rank_mate_in_one() {
        let mut game = GameState::from_fen("6k1/5ppp/8/8/8/8/8/R5K1 w - - 0 1").expect("FEN should parse");
        let legal = legal_moves(&mut game);
        for seed in 0..4 {
            let mut searcher = Searcher::with_seed(small_config(2), seed);
            let mv = searcher.find_best_move(&game, &legal).expect("a move is available");
            assert_eq!(mv.chess_notation(), "a1a8");
        }
    }

    #[test]
    fn black_minimizes_and_takes_a_free_queen() {
        let mut game = GameState::from_fen("3qk3/8/8/8/8/8/8/3Q3K b - - 0 1").expect("FEN should parse");
        let legal = legal_moves(&mut game);
        let mut searcher = Searcher::with_seed(small_config(2), 11);
        let mv = searcher.find_best_move(&game, &legal).expect("a move is available");
        assert_eq!(mv.chess_notation(), "d8d1");
    }

    #[test]
    fn empty_move_lists_yield_none() {
        let game = GameState::from_fen("7k/5Q2/6K1/8/8/8/8/8 b - - 0 1").expect("FEN should parse");
        let mut searcher = Searcher::with_seed(small_config(2), 0);
        assert!(searcher.find_best_move(&game, &[]).is_none());
        assert!(searcher.find_random_move(&[]).is_none());
    }

    #[test]
    fn random_move_is_drawn_from_the_list() {
        let mut game = GameState::new_game();
        let legal = legal_moves(&mut game);
        let mut searcher = Searcher::with_seed(small_config(2), 42);
        for _ in 0..16 {
            let mv = searcher.find_random_move(&legal).expect("list is non-empty");
            assert!(legal.contains(&mv));
        }
    }

    #[test]
    fn stalemate_scores_zero_and_cache_is_used() {
        // Qf7 is stalemate, Qf8 is mate; white must prefer the mate.
        let mut game = GameState::from_fen("7k/8/6K1/8/8/8/8/5Q2 w - - 0 1").expect("FEN should parse");
        let legal = legal_moves(&mut game);
        let mut searcher = Searcher::with_seed(small_config(2), 5);
        let result = searcher.search(&game, &legal);
        assert!(result.best_score > MATE_SCORE);
        assert!(searcher.transposition_table().stats().stores > 0);
    }
}
