//! Crate root module declarations for the Quince chess rules engine.
//!
//! This file exposes all top-level subsystems (board model, move generation,
//! game state machine, toy engines, and utility helpers) so tests, benches,
//! and external tooling can import stable module paths.
//!
//! The engine is deliberately pure: a `Position` is an immutable snapshot,
//! applying a move produces a brand-new `Position`, and legality checking
//! simulates candidates against scratch copies. Rendering, input handling,
//! and search all live outside this crate.

pub mod board {
    pub mod chess_move;
    pub mod piece;
    pub mod position;
    pub mod square;
}

pub mod move_generation {
    pub mod attack_checks;
    pub mod legal_move_filter;
    pub mod perft;
    pub mod raw_move_generator;
    pub mod raw_move_shared;
    pub mod raw_moves_bishop;
    pub mod raw_moves_king;
    pub mod raw_moves_knight;
    pub mod raw_moves_pawn;
    pub mod raw_moves_queen;
    pub mod raw_moves_rook;
}

pub mod game {
    pub mod game;
}

pub mod engines {
    pub mod engine_random;
    pub mod engine_trait;
}

pub mod utils {
    pub mod board_text;
}

pub mod errors;
