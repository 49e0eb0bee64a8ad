//! The game state machine.
//!
//! `Game` owns the single current `Position`, validates move requests
//! against the legal-move set, and classifies the result after every ply.
//! The three terminal states have no transitions out. All side effects end
//! at the returned values; presentation belongs to the caller.

use crate::board::chess_move::Move;
use crate::board::piece::{Color, Piece, PieceKind};
use crate::board::position::Position;
use crate::board::square::Square;
use crate::errors::{LayoutError, MoveRejected};
use crate::move_generation::attack_checks::is_king_in_check;
use crate::move_generation::legal_move_filter::{legal_moves, legal_moves_for_color};
use crate::utils::board_text::parse_board_layout;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameState {
    InProgress,
    Checkmate(Color),
    Stalemate,
    DrawByFiftyMoveRule,
}

#[derive(Debug, Clone)]
pub struct Game {
    position: Position,
    state: GameState,
}

impl Game {
    /// Starts a game from explicit placements, White to move. Panics on a
    /// malformed setup (doubled square, missing king), like
    /// `Position::from_pieces`.
    pub fn new(pieces: &[(Piece, Square)]) -> Self {
        Game::from_position(Position::from_pieces(pieces))
    }

    pub fn standard_setup() -> Self {
        Game::from_position(Position::standard_setup())
    }

    /// Starts a game from a text-board diagram (see `utils::board_text`).
    pub fn from_layout(rows: &[&str]) -> Result<Self, LayoutError> {
        Ok(Game::new(&parse_board_layout(rows)?))
    }

    /// Wraps an already-built position, classifying it immediately so a
    /// pre-built mate or stalemate reports as such.
    pub fn from_position(position: Position) -> Self {
        let state = classify(&position);
        Game { position, state }
    }

    #[inline]
    pub fn position(&self) -> &Position {
        &self.position
    }

    #[inline]
    pub fn state(&self) -> GameState {
        self.state
    }

    #[inline]
    pub fn side_to_move(&self) -> Color {
        self.position.side_to_move
    }

    #[inline]
    pub fn halfmove_clock(&self) -> u32 {
        self.position.halfmove_clock
    }

    pub fn all_pieces(&self) -> Vec<(Piece, Square)> {
        self.position.all_pieces()
    }

    /// Legal moves for the piece on `from`, regardless of whose turn it
    /// is; empty for an empty square.
    pub fn legal_moves(&self, from: Square) -> Vec<Move> {
        legal_moves(&self.position, from)
    }

    /// Validates and applies a move request. On success the applied move
    /// is returned (with its capture/castling payload filled in) and the
    /// game advances and reclassifies.
    pub fn try_move(
        &mut self,
        from: Square,
        to: Square,
        promotion: Option<PieceKind>,
    ) -> Result<Move, MoveRejected> {
        let piece = self
            .position
            .piece_at(from)
            .ok_or(MoveRejected::NoSuchPiece(from))?;
        if piece.color != self.position.side_to_move {
            return Err(MoveRejected::WrongTurn(from));
        }
        if self.state != GameState::InProgress {
            return Err(MoveRejected::IllegalMove(from, to, promotion));
        }
        let chosen = legal_moves(&self.position, from)
            .into_iter()
            .find(|candidate| candidate.matches_request(from, to, promotion))
            .ok_or(MoveRejected::IllegalMove(from, to, promotion))?;

        self.position = self.position.apply(&chosen);
        self.state = classify(&self.position);
        Ok(chosen)
    }
}

/// Terminal classification for the side now to move. Mate outranks the
/// fifty-move draw, the draw outranks stalemate.
fn classify(position: &Position) -> GameState {
    let to_move = position.side_to_move;
    let replies = legal_moves_for_color(position, to_move);
    if replies.is_empty() && is_king_in_check(position, to_move) {
        return GameState::Checkmate(to_move.opposite());
    }
    if position.halfmove_clock >= 100 {
        return GameState::DrawByFiftyMoveRule;
    }
    if replies.is_empty() {
        return GameState::Stalemate;
    }
    GameState::InProgress
}
