//! Error types returned by the engine.
//!
//! These cover expected, caller-recoverable failures: a rejected move
//! request or a malformed test-board diagram. Internal invariant
//! violations (a missing king, a doubled square) are programming errors
//! and panic instead of surfacing here.

use crate::board::piece::PieceKind;
use crate::board::square::Square;

/// Why `Game::try_move` refused a request. The caller owns presentation;
/// the engine never recovers from these on its own.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveRejected {
    /// The `from` square is empty.
    NoSuchPiece(Square),
    /// The piece on `from` belongs to the side not to move.
    WrongTurn(Square),
    /// No legal move of the mover matches `(from, to, promotion)`. Covers
    /// moving into or staying in check, bad castling paths, stale en
    /// passant, and unavailable promotion kinds.
    IllegalMove(Square, Square, Option<PieceKind>),
}

/// A text-board diagram failed to parse.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LayoutError {
    /// The diagram does not have exactly 8 rows.
    WrongRowCount(usize),
    /// A row does not have exactly 8 characters.
    WrongRowLength { rank: usize, len: usize },
    /// A square character is not one of `kqrbnp`/`KQRBNP`/space.
    InvalidPieceChar(char),
}
