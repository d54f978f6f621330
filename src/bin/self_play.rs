//! Engine-vs-engine self-play driver.
//!
//! Run with:
//! `cargo run --release --bin self_play`
//! `cargo run --release --bin self_play -- --vs-random`
//!
//! Environment overrides: `EMBER_MAX_PLIES`, `EMBER_DEPTH`, `EMBER_SEED`,
//! `EMBER_FEN`. Log verbosity follows `RUST_LOG` (default `info`).

use std::error::Error;
use std::str::FromStr;

use tracing::info;
use tracing_subscriber::EnvFilter;

use ember_chess::engines::engine_minimax::MinimaxEngine;
use ember_chess::engines::engine_random::RandomEngine;
use ember_chess::engines::engine_trait::{Engine, GoParams};
use ember_chess::game_state::chess_rules::STARTING_POSITION_FEN;
use ember_chess::game_state::chess_types::Color;
use ember_chess::game_state::game_state::GameState;
use ember_chess::search::board_scoring::score_to_pawns;
use ember_chess::search::minimax::SearchConfig;
use ember_chess::utils::pgn::{result_token, write_pgn};
use ember_chess::utils::render_game_state::render_game_state;

fn env_or<T: FromStr>(name: &str, default: T) -> Result<T, String> {
    match std::env::var(name) {
        Ok(value) => value
            .trim()
            .parse::<T>()
            .map_err(|_| format!("{name} has an invalid value: {value}")),
        Err(_) => Ok(default),
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let vs_random = std::env::args().any(|a| a == "--vs-random");
    let max_plies: usize = env_or("EMBER_MAX_PLIES", 200)?;
    let depth: u8 = env_or("EMBER_DEPTH", SearchConfig::default().depth)?;
    let seed: Option<u64> = match std::env::var("EMBER_SEED") {
        Ok(value) => Some(value.trim().parse().map_err(|_| format!("EMBER_SEED has an invalid value: {value}"))?),
        Err(_) => None,
    };
    let fen = std::env::var("EMBER_FEN").unwrap_or_else(|_| STARTING_POSITION_FEN.to_owned());

    let config = SearchConfig {
        depth,
        ..SearchConfig::default()
    };
    let make_minimax = |offset: u64| -> Box<dyn Engine> {
        match seed {
            Some(seed) => Box::new(MinimaxEngine::with_seed(config, seed.wrapping_add(offset))),
            None => Box::new(MinimaxEngine::new(config)),
        }
    };
    let white = make_minimax(0);
    let black: Box<dyn Engine> = if vs_random {
        match seed {
            Some(seed) => Box::new(RandomEngine::with_seed(seed.wrapping_add(1))),
            None => Box::new(RandomEngine::new()),
        }
    } else {
        make_minimax(1)
    };
    let mut engines = [white, black];

    let initial = GameState::from_fen(&fen)?;
    let mut game = initial.clone();
    info!(
        white = engines[0].name(),
        black = engines[1].name(),
        depth,
        max_plies,
        "starting self-play"
    );

    let params = GoParams::default();
    for _ in 0..max_plies {
        game.legal_moves_and_terminal_status();
        if game.is_game_over() {
            break;
        }

        let mover = game.side_to_move();
        let engine = match mover {
            Color::White => &mut engines[0],
            Color::Black => &mut engines[1],
        };
        let output = engine.choose_move(&game, &params)?;
        let Some(mv) = output.best_move else {
            break;
        };

        info!(
            ply = game.move_log().len() + 1,
            side = ?mover,
            mv = %mv,
            score = output.score.map(score_to_pawns),
            "move"
        );
        game.make_move(mv);
    }
    game.legal_moves_and_terminal_status();

    println!("{}", render_game_state(&game));
    println!("{}", game.get_fen());
    println!();
    println!("{}", write_pgn(&initial, game.move_log(), result_token(&game)));

    Ok(())
}
