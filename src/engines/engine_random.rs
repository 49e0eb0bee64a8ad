//! A trivial random engine, used as a test opponent and API exercise.
//!
//! Picks uniformly among the legal moves of the side to move. No search,
//! no evaluation; it exists so harnesses and UIs have a cheap opponent
//! and so the crate's own tests can drive full random games.

use rand::rngs::StdRng;
use rand::seq::IteratorRandom;
use rand::SeedableRng;

use crate::board::chess_move::Move;
use crate::engines::engine_trait::MoveSelector;
use crate::game::game::{Game, GameState};
use crate::move_generation::legal_move_filter::legal_moves_for_color;

pub struct EngineRandom {
    rng: StdRng,
}

impl EngineRandom {
    pub fn new() -> Self {
        EngineRandom {
            rng: StdRng::from_os_rng(),
        }
    }

    /// Seeded variant for reproducible tests.
    pub fn from_seed(seed: u64) -> Self {
        EngineRandom {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for EngineRandom {
    fn default() -> Self {
        EngineRandom::new()
    }
}

impl MoveSelector for EngineRandom {
    fn select_move(&mut self, game: &Game) -> Option<Move> {
        if game.state() != GameState::InProgress {
            return None;
        }
        legal_moves_for_color(game.position(), game.side_to_move())
            .into_iter()
            .choose(&mut self.rng)
    }
}
