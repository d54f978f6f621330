//! Zobrist hashing for position identity in the transposition cache.
//!
//! Keys are generated from a fixed seed so hashes are deterministic across
//! runs. `make_move` maintains the key incrementally; `compute_zobrist_key`
//! rebuilds it from scratch and is used at setup and for verification.

use std::sync::OnceLock;

use crate::game_state::chess_types::*;

#[derive(Debug)]
struct ZobristTables {
    piece_square: [[[u64; 64]; 6]; 2],
    side_to_move: u64,
    castling: [u64; 16],
    en_passant_file: [u64; 8],
}

static TABLES: OnceLock<ZobristTables> = OnceLock::new();

#[inline]
fn tables() -> &'static ZobristTables {
    TABLES.get_or_init(build_tables)
}

fn build_tables() -> ZobristTables {
    let mut seed: u64 = 0x9E37_79B9_7F4A_7C15;

    let mut piece_square = [[[0u64; 64]; 6]; 2];
    for color in &mut piece_square {
        for piece in color {
            for sq in piece {
                *sq = next_random_u64(&mut seed);
            }
        }
    }

    let side_to_move = next_random_u64(&mut seed);

    let mut castling = [0u64; 16];
    for key in &mut castling {
        *key = next_random_u64(&mut seed);
    }

    let mut en_passant_file = [0u64; 8];
    for key in &mut en_passant_file {
        *key = next_random_u64(&mut seed);
    }

    ZobristTables {
        piece_square,
        side_to_move,
        castling,
        en_passant_file,
    }
}

#[inline]
fn next_random_u64(state: &mut u64) -> u64 {
    // splitmix64
    *state = state.wrapping_add(0x9E37_79B9_7F4A_7C15);
    let mut z = *state;
    z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
    z ^ (z >> 31)
}

/// Key for a piece standing on `location`.
#[inline]
pub fn piece_square_key(piece: Piece, location: BoardLocation) -> u64 {
    tables().piece_square[piece.color.index()][piece.kind.index()][location.index()]
}

#[inline]
pub fn castling_key(castling_rights: CastlingRights) -> u64 {
    tables().castling[castling_rights.bits() as usize]
}

/// Key contribution of an en-passant target; only its file matters.
#[inline]
pub fn en_passant_key(en_passant_square: Option<BoardLocation>) -> u64 {
    en_passant_square.map_or(0, |square| tables().en_passant_file[square.col as usize])
}

/// Toggle key, xored in when black is to move.
#[inline]
pub fn side_to_move_key() -> u64 {
    tables().side_to_move
}

/// Compute the full position key from the complete game state.
pub fn compute_zobrist_key(game_state: &GameState) -> u64 {
    let mut key = game_state
        .board
        .occupied()
        .fold(0u64, |acc, (location, piece)| acc ^ piece_square_key(piece, location));

    if game_state.side_to_move == Color::Black {
        key ^= side_to_move_key();
    }
    key ^= castling_key(game_state.castling_rights);
    key ^= en_passant_key(game_state.en_passant_square);

    key
}
