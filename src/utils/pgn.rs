//! PGN export of a game's move history.
//!
//! Moves are written in coordinate notation ("e2e4", "e7e8q") with move
//! numbers. Positions that do not start from the standard setup carry
//! `SetUp`/`FEN` headers.

use std::collections::BTreeMap;

use chrono::Local;

use crate::game_state::chess_rules::STARTING_POSITION_FEN;
use crate::game_state::chess_types::Color;
use crate::game_state::game_state::GameState;
use crate::moves::chess_move::ChessMove;
use crate::utils::long_algebraic::move_to_long_algebraic;

/// PGN result token for a state whose terminal flags are current.
pub fn result_token(game_state: &GameState) -> &'static str {
    if game_state.is_checkmate() {
        match game_state.side_to_move() {
            Color::White => "0-1",
            Color::Black => "1-0",
        }
    } else if game_state.is_stalemate() {
        "1/2-1/2"
    } else {
        "*"
    }
}

pub fn write_pgn(initial_state: &GameState, move_history: &[ChessMove], result: &str) -> String {
    let mut headers = BTreeMap::<String, String>::new();
    headers.insert("Event".to_owned(), "Ember Chess Game".to_owned());
    headers.insert("Site".to_owned(), "Local".to_owned());
    headers.insert("Date".to_owned(), Local::now().format("%Y.%m.%d").to_string());
    headers.insert("Round".to_owned(), "-".to_owned());
    headers.insert("White".to_owned(), "White".to_owned());
    headers.insert("Black".to_owned(), "Black".to_owned());
    headers.insert("Result".to_owned(), normalize_result(result).to_owned());

    let initial_fen = initial_state.get_fen();
    if initial_fen != STARTING_POSITION_FEN {
        headers.insert("SetUp".to_owned(), "1".to_owned());
        headers.insert("FEN".to_owned(), initial_fen);
    }

    write_pgn_with_headers(initial_state, move_history, &headers)
}

pub fn write_pgn_with_headers(
    initial_state: &GameState,
    move_history: &[ChessMove],
    headers: &BTreeMap<String, String>,
) -> String {
    let mut out = String::new();

    for (key, value) in headers {
        out.push_str(&format!("[{} \"{}\"]\n", key, escape_pgn_value(value)));
    }
    out.push('\n');

    // Black to move first means the opening number is written as "N...".
    let black_first = initial_state.side_to_move() == Color::Black;
    let first_number = usize::from(initial_state.fullmove_number().max(1));

    let mut movetext_parts = Vec::<String>::with_capacity(move_history.len() + 1);
    for (ply, mv) in move_history.iter().enumerate() {
        let lan = move_to_long_algebraic(mv);
        let offset_ply = ply + usize::from(black_first);
        let number = first_number + offset_ply / 2;
        if offset_ply % 2 == 0 {
            movetext_parts.push(format!("{number}. {lan}"));
        } else if ply == 0 {
            movetext_parts.push(format!("{number}... {lan}"));
        } else {
            movetext_parts.push(lan);
        }
    }

    let result = headers
        .get("Result")
        .map(|x| normalize_result(x))
        .unwrap_or("*");
    movetext_parts.push(result.to_owned());
    out.push_str(&movetext_parts.join(" "));
    out.push('\n');

    out
}

fn is_result_token(token: &str) -> bool {
    matches!(token, "1-0" | "0-1" | "1/2-1/2" | "*")
}

fn normalize_result(result: &str) -> &str {
    if is_result_token(result) {
        result
    } else {
        "*"
    }
}

fn escape_pgn_value(value: &str) -> String {
    value.replace('"', "\\\"")
}
