//! The seam between the rules engine and anything that picks moves.

use crate::board::chess_move::Move;
use crate::game::game::Game;

/// A move chooser for the side to move. Implementations read the game,
/// never mutate it; the caller applies the chosen move via `try_move`.
pub trait MoveSelector {
    /// Picks one legal move, or `None` when the game is over.
    fn select_move(&mut self, game: &Game) -> Option<Move>;
}
