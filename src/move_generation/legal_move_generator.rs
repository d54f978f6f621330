//! Full legal move generation pipeline.
//!
//! Dispatches pseudo-legal generation by piece kind, adds castling, then
//! filters out every candidate that leaves the mover's king attacked by
//! making it, testing the king, and undoing it.

use tracing::info;

use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_apply::{make_move, undo_move};
use crate::move_generation::legal_move_checks::is_king_in_check;
use crate::move_generation::legal_moves_bishop::generate_bishop_moves;
use crate::move_generation::legal_moves_king::{generate_castle_moves, generate_king_moves};
use crate::move_generation::legal_moves_knight::generate_knight_moves;
use crate::move_generation::legal_moves_pawn::generate_pawn_moves;
use crate::move_generation::legal_moves_queen::generate_queen_moves;
use crate::move_generation::legal_moves_rook::generate_rook_moves;
use crate::move_generation::move_generator::{GeneratedMove, MoveAnnotations, MoveGenerator};
use crate::moves::chess_move::ChessMove;

/// Annotates every move with check and checkmate information.
pub struct LegalMoveGenerator;

/// Same moves as [`LegalMoveGenerator`], without annotations.
pub struct FastLegalMoveGenerator;

impl MoveGenerator for LegalMoveGenerator {
    fn generate_legal_moves(&self, game_state: &GameState) -> Vec<GeneratedMove> {
        generate_with_successors(game_state, true)
    }
}

impl MoveGenerator for FastLegalMoveGenerator {
    fn generate_legal_moves(&self, game_state: &GameState) -> Vec<GeneratedMove> {
        generate_with_successors(game_state, false)
    }
}

fn generate_with_successors(game_state: &GameState, annotate: bool) -> Vec<GeneratedMove> {
    let mut scratch = game_state.clone();
    let legal = legal_moves(&mut scratch);

    legal
        .into_iter()
        .map(|chess_move| {
            let mut next = game_state.clone();
            make_move(&mut next, chess_move);

            let annotations = if annotate {
                let gives_check = is_king_in_check(&next, next.side_to_move);
                MoveAnnotations {
                    gives_check,
                    is_checkmate: gives_check && legal_moves(&mut next).is_empty(),
                }
            } else {
                MoveAnnotations::default()
            };

            GeneratedMove {
                chess_move,
                game_after_move: next,
                annotations,
            }
        })
        .collect()
}

/// Moves obeying piece geometry and occupancy for the side to move. Castling
/// is not included.
pub fn pseudo_legal_moves(game_state: &GameState) -> Vec<ChessMove> {
    let side = game_state.side_to_move;
    let mut out = Vec::with_capacity(64);

    for (from, piece) in game_state.board.occupied() {
        if piece.color != side {
            continue;
        }
        match piece.kind {
            PieceKind::Pawn => generate_pawn_moves(game_state, from, piece, &mut out),
            PieceKind::Knight => generate_knight_moves(game_state, from, piece, &mut out),
            PieceKind::Bishop => generate_bishop_moves(game_state, from, piece, &mut out),
            PieceKind::Rook => generate_rook_moves(game_state, from, piece, &mut out),
            PieceKind::Queen => generate_queen_moves(game_state, from, piece, &mut out),
            PieceKind::King => generate_king_moves(game_state, from, piece, &mut out),
        }
    }

    out
}

/// Pseudo-legal moves plus castling, minus anything that leaves the mover in
/// check. The state is restored before returning.
pub fn legal_moves(game_state: &mut GameState) -> Vec<ChessMove> {
    let mover = game_state.side_to_move;
    let mut moves = pseudo_legal_moves(game_state);
    generate_castle_moves(game_state, &mut moves);

    moves.retain(|&mv| {
        make_move(game_state, mv);
        let keeps_king_safe = !is_king_in_check(game_state, mover);
        undo_move(game_state);
        keeps_king_safe
    });

    moves
}

/// Legal moves for the side to move, refreshing the check, checkmate and
/// stalemate flags.
pub fn legal_moves_and_terminal_status(game_state: &mut GameState) -> Vec<ChessMove> {
    let moves = legal_moves(game_state);
    let side = game_state.side_to_move;

    game_state.in_check = is_king_in_check(game_state, side);
    game_state.checkmate = moves.is_empty() && game_state.in_check;
    game_state.stalemate = moves.is_empty() && !game_state.in_check;

    if game_state.checkmate {
        info!(loser = ?side, plies = game_state.move_log.len(), "checkmate");
    } else if game_state.stalemate {
        info!(side = ?side, plies = game_state.move_log.len(), "stalemate");
    }

    moves
}

/// Find the legal move with these coordinates, if any.
pub fn match_legal_move(
    start: BoardLocation,
    end: BoardLocation,
    legal: &[ChessMove],
) -> Option<ChessMove> {
    legal
        .iter()
        .copied()
        .find(|mv| mv.start == start && mv.end == end)
}
