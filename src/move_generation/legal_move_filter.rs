//! Legality filtering over raw candidates.
//!
//! Each raw move is applied to a scratch successor (cheap, since positions
//! are plain values) and rejected if the mover's own king ends up
//! attacked. Castling gets two extra pre-move conditions: the king may not
//! currently be in check and may not cross an attacked square.

use crate::board::chess_move::Move;
use crate::board::piece::Color;
use crate::board::position::Position;
use crate::board::square::Square;
use crate::move_generation::attack_checks::{is_king_in_check, is_square_attacked};
use crate::move_generation::raw_move_generator::raw_moves;

/// Legal moves for the piece on `from`; empty when the square is empty.
pub fn legal_moves(position: &Position, from: Square) -> Vec<Move> {
    raw_moves(position, from)
        .into_iter()
        .filter(|candidate| is_legal(position, candidate))
        .collect()
}

/// Union of `legal_moves` over every square `color` occupies.
pub fn legal_moves_for_color(position: &Position, color: Color) -> Vec<Move> {
    let mut out = Vec::with_capacity(48);
    for from in position.occupied_squares(color) {
        out.extend(
            raw_moves(position, from)
                .into_iter()
                .filter(|candidate| is_legal(position, candidate)),
        );
    }
    out
}

fn is_legal(position: &Position, candidate: &Move) -> bool {
    let mover_color = candidate.mover.color;

    if candidate.castle_rook.is_some() {
        // Castling out of or through check is illegal; landing in check is
        // caught by the simulation below like any other king move.
        if is_king_in_check(position, mover_color) {
            return false;
        }
        let transit = candidate.from + (candidate.to - candidate.from).clamp_unit();
        if is_square_attacked(position, transit, mover_color.opposite()) {
            return false;
        }
    }

    !is_king_in_check(&position.apply(candidate), mover_color)
}
