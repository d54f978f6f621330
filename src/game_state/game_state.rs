//! Authoritative game state.
//!
//! `GameState` owns the board, turn, rights, en-passant target, king
//! tracking, clocks, the move log with its parallel undo stack, and the
//! terminal flags computed by `legal_moves_and_terminal_status`. It is
//! mutated in place by `make_move`/`undo_move`; search works on clones.

use crate::errors::{ChessError, ChessResult};
use crate::game_state::board::Board;
use crate::game_state::chess_rules::{BLACK_HOME_ROW, KING_START_COL, WHITE_HOME_ROW};
use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_apply;
use crate::move_generation::legal_move_checks::is_king_in_check;
use crate::move_generation::legal_move_generator;
use crate::moves::chess_move::ChessMove;
use crate::search::zobrist::compute_zobrist_key;
use crate::utils::fen_generator::generate_fen;
use crate::utils::algebraic::location_to_algebraic;
use crate::utils::fen_parser::parse_fen;

#[derive(Debug, Clone)]
pub struct GameState {
    pub(crate) board: Board,
    pub(crate) side_to_move: Color,
    pub(crate) castling_rights: CastlingRights,
    pub(crate) en_passant_square: Option<BoardLocation>,

    // [White, Black]
    pub(crate) king_locations: [BoardLocation; 2],

    pub(crate) halfmove_clock: u16,
    pub(crate) fullmove_number: u16,

    pub(crate) zobrist_key: u64,

    // One entry each per ply.
    pub(crate) move_log: Vec<ChessMove>,
    pub(crate) undo_stack: Vec<UndoState>,

    pub(crate) in_check: bool,
    pub(crate) checkmate: bool,
    pub(crate) stalemate: bool,
}

impl Default for GameState {
    fn default() -> Self {
        Self::new_game()
    }
}

impl GameState {
    /// Standard starting position, white to move.
    pub fn new_game() -> Self {
        let king_locations = [
            BoardLocation {
                row: WHITE_HOME_ROW,
                col: KING_START_COL,
            },
            BoardLocation {
                row: BLACK_HOME_ROW,
                col: KING_START_COL,
            },
        ];
        Self::assemble(
            Board::standard(),
            Color::White,
            CastlingRights::ALL,
            None,
            king_locations,
            0,
            1,
        )
    }

    /// Build a state from its position fields. Exactly one king of each
    /// color must be on the board, the side that just moved must not be in
    /// check, and an en-passant target must sit behind a just-advanced enemy
    /// pawn.
    pub fn from_position(
        board: Board,
        side_to_move: Color,
        castling_rights: CastlingRights,
        en_passant_square: Option<BoardLocation>,
        halfmove_clock: u16,
        fullmove_number: u16,
    ) -> ChessResult<Self> {
        let white_king = single_king(&board, Color::White)?;
        let black_king = single_king(&board, Color::Black)?;
        if let Some(target) = en_passant_square {
            check_en_passant_target(&board, side_to_move, target)?;
        }

        let game_state = Self::assemble(
            board,
            side_to_move,
            castling_rights,
            en_passant_square,
            [white_king, black_king],
            halfmove_clock,
            fullmove_number,
        );
        if is_king_in_check(&game_state, side_to_move.opposite()) {
            return Err(ChessError::InvalidPosition(format!(
                "{:?} is in check but it is {:?} to move",
                side_to_move.opposite(),
                side_to_move
            )));
        }
        Ok(game_state)
    }

    fn assemble(
        board: Board,
        side_to_move: Color,
        castling_rights: CastlingRights,
        en_passant_square: Option<BoardLocation>,
        king_locations: [BoardLocation; 2],
        halfmove_clock: u16,
        fullmove_number: u16,
    ) -> Self {
        let mut game_state = Self {
            board,
            side_to_move,
            castling_rights,
            en_passant_square,
            king_locations,
            halfmove_clock,
            fullmove_number,
            zobrist_key: 0,
            move_log: Vec::new(),
            undo_stack: Vec::new(),
            in_check: false,
            checkmate: false,
            stalemate: false,
        };
        game_state.zobrist_key = compute_zobrist_key(&game_state);
        game_state
    }

    #[inline]
    pub fn from_fen(fen: &str) -> ChessResult<Self> {
        parse_fen(fen)
    }

    #[inline]
    pub fn get_fen(&self) -> String {
        generate_fen(self)
    }

    #[inline]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[inline]
    pub fn side_to_move(&self) -> Color {
        self.side_to_move
    }

    #[inline]
    pub fn castling_rights(&self) -> CastlingRights {
        self.castling_rights
    }

    #[inline]
    pub fn en_passant_square(&self) -> Option<BoardLocation> {
        self.en_passant_square
    }

    #[inline]
    pub fn king_location(&self, color: Color) -> BoardLocation {
        self.king_locations[color.index()]
    }

    #[inline]
    pub fn halfmove_clock(&self) -> u16 {
        self.halfmove_clock
    }

    #[inline]
    pub fn fullmove_number(&self) -> u16 {
        self.fullmove_number
    }

    #[inline]
    pub fn zobrist_key(&self) -> u64 {
        self.zobrist_key
    }

    /// Moves played so far, oldest first.
    #[inline]
    pub fn move_log(&self) -> &[ChessMove] {
        &self.move_log
    }

    /// Valid after `legal_moves_and_terminal_status`; reset by make/undo.
    #[inline]
    pub fn is_in_check(&self) -> bool {
        self.in_check
    }

    #[inline]
    pub fn is_checkmate(&self) -> bool {
        self.checkmate
    }

    #[inline]
    pub fn is_stalemate(&self) -> bool {
        self.stalemate
    }

    #[inline]
    pub fn is_game_over(&self) -> bool {
        self.checkmate || self.stalemate
    }

    #[inline]
    pub fn make_move(&mut self, mv: ChessMove) {
        legal_move_apply::make_move(self, mv);
    }

    #[inline]
    pub fn undo_move(&mut self) {
        legal_move_apply::undo_move(self);
    }

    /// Legal moves for the side to move without touching terminal flags.
    #[inline]
    pub fn legal_moves(&mut self) -> Vec<ChessMove> {
        legal_move_generator::legal_moves(self)
    }

    /// Legal moves for the side to move; also refreshes the check,
    /// checkmate and stalemate flags.
    #[inline]
    pub fn legal_moves_and_terminal_status(&mut self) -> Vec<ChessMove> {
        legal_move_generator::legal_moves_and_terminal_status(self)
    }

    /// Match a raw `(start, end)` request against the current legal moves.
    pub fn find_legal_move(&mut self, start: BoardLocation, end: BoardLocation) -> Option<ChessMove> {
        let legal = self.legal_moves();
        legal_move_generator::match_legal_move(start, end, &legal)
    }

    /// Apply a raw `(start, end)` request if it is legal. Returns the move
    /// that was played, or `None` when the request was rejected.
    pub fn try_play(&mut self, start: BoardLocation, end: BoardLocation) -> Option<ChessMove> {
        let mv = self.find_legal_move(start, end)?;
        self.make_move(mv);
        Some(mv)
    }

    pub(crate) fn clear_terminal_flags(&mut self) {
        self.in_check = false;
        self.checkmate = false;
        self.stalemate = false;
    }
}

fn single_king(board: &Board, color: Color) -> ChessResult<BoardLocation> {
    let king = Piece::new(color, PieceKind::King);
    let mut kings = board.find(king);
    match (kings.next(), kings.next()) {
        (Some(location), None) => Ok(location),
        _ => Err(ChessError::MissingKing(color)),
    }
}

/// The target lies on the third rank from the mover's opponent, is empty, and
/// has the opponent's pawn directly beyond it.
fn check_en_passant_target(board: &Board, side_to_move: Color, target: BoardLocation) -> ChessResult<()> {
    let expected_row = match side_to_move {
        Color::White => 2,
        Color::Black => 5,
    };
    let enemy_pawn = Piece::new(side_to_move.opposite(), PieceKind::Pawn);
    let pushed_pawn = target
        .offset(-side_to_move.pawn_direction(), 0)
        .and_then(|location| board.get(location));

    if target.row != expected_row || !board.is_empty_at(target) || pushed_pawn != Some(enemy_pawn) {
        return Err(ChessError::InvalidFen(format!(
            "en-passant target {} has no pawn that just advanced past it",
            location_to_algebraic(target)
        )));
    }
    Ok(())
}
