//! FEN-to-GameState parser.
//!
//! Builds a fully populated state from a Forsyth-Edwards Notation string,
//! including king tracking, rights, clocks, and the position key.

use crate::errors::{ChessError, ChessResult};
use crate::game_state::board::Board;
use crate::game_state::chess_types::*;
use crate::game_state::game_state::GameState;
use crate::utils::algebraic::algebraic_to_location;

fn invalid(msg: impl Into<String>) -> ChessError {
    ChessError::InvalidFen(msg.into())
}

pub fn parse_fen(fen: &str) -> ChessResult<GameState> {
    let mut parts = fen.split_whitespace();

    let board_part = parts.next().ok_or_else(|| invalid("missing board layout"))?;
    let side_part = parts.next().ok_or_else(|| invalid("missing side to move"))?;
    let castling_part = parts.next().ok_or_else(|| invalid("missing castling rights"))?;
    let en_passant_part = parts.next().ok_or_else(|| invalid("missing en-passant square"))?;
    let halfmove_part = parts.next().ok_or_else(|| invalid("missing halfmove clock"))?;
    let fullmove_part = parts.next().ok_or_else(|| invalid("missing fullmove number"))?;

    if parts.next().is_some() {
        return Err(invalid("extra trailing fields"));
    }

    let board = parse_board(board_part)?;
    let side_to_move = parse_side_to_move(side_part)?;
    let castling_rights = parse_castling_rights(castling_part)?;
    let en_passant_square = parse_en_passant_square(en_passant_part)?;
    let halfmove_clock = halfmove_part
        .parse::<u16>()
        .map_err(|_| invalid(format!("invalid halfmove clock: {halfmove_part}")))?;
    let fullmove_number = fullmove_part
        .parse::<u16>()
        .map_err(|_| invalid(format!("invalid fullmove number: {fullmove_part}")))?;

    GameState::from_position(
        board,
        side_to_move,
        castling_rights,
        en_passant_square,
        halfmove_clock,
        fullmove_number,
    )
}

fn parse_board(board_part: &str) -> ChessResult<Board> {
    let ranks: Vec<&str> = board_part.split('/').collect();
    if ranks.len() != 8 {
        return Err(invalid("board layout must contain 8 ranks"));
    }

    let mut board = Board::empty();
    // FEN lists rank 8 first, which is row 0.
    for (row, rank_str) in (0u8..).zip(ranks) {
        let mut col = 0u8;

        for ch in rank_str.chars() {
            if let Some(empty_count) = ch.to_digit(10) {
                if !(1..=8).contains(&empty_count) {
                    return Err(invalid(format!("invalid empty-square count '{ch}'")));
                }
                col += empty_count as u8;
                if col > 8 {
                    return Err(invalid("board rank has too many files"));
                }
                continue;
            }

            let piece = piece_from_fen_char(ch)
                .ok_or_else(|| invalid(format!("invalid piece character '{ch}' in board layout")))?;
            let location = BoardLocation::new(row, col)
                .ok_or_else(|| invalid("board rank has too many files"))?;
            board.set(location, Some(piece));
            col += 1;
        }

        if col != 8 {
            return Err(invalid("board rank does not sum to 8 files"));
        }
    }

    Ok(board)
}

fn parse_side_to_move(side_part: &str) -> ChessResult<Color> {
    match side_part {
        "w" => Ok(Color::White),
        "b" => Ok(Color::Black),
        _ => Err(invalid(format!("invalid side-to-move field: {side_part}"))),
    }
}

fn parse_castling_rights(castling_part: &str) -> ChessResult<CastlingRights> {
    let mut rights = CastlingRights::NONE;
    if castling_part == "-" {
        return Ok(rights);
    }

    for ch in castling_part.chars() {
        match ch {
            'K' => rights.white_king_side = true,
            'Q' => rights.white_queen_side = true,
            'k' => rights.black_king_side = true,
            'q' => rights.black_queen_side = true,
            _ => return Err(invalid(format!("invalid castling rights character: {ch}"))),
        }
    }

    Ok(rights)
}

fn parse_en_passant_square(en_passant_part: &str) -> ChessResult<Option<BoardLocation>> {
    if en_passant_part == "-" {
        return Ok(None);
    }

    let location = algebraic_to_location(en_passant_part)
        .map_err(|_| invalid(format!("invalid en-passant square: {en_passant_part}")))?;
    Ok(Some(location))
}

pub(crate) fn piece_from_fen_char(ch: char) -> Option<Piece> {
    let color = if ch.is_ascii_uppercase() {
        Color::White
    } else if ch.is_ascii_lowercase() {
        Color::Black
    } else {
        return None;
    };

    let kind = match ch.to_ascii_lowercase() {
        'p' => PieceKind::Pawn,
        'n' => PieceKind::Knight,
        'b' => PieceKind::Bishop,
        'r' => PieceKind::Rook,
        'q' => PieceKind::Queen,
        'k' => PieceKind::King,
        _ => return None,
    };

    Some(Piece::new(color, kind))
}
