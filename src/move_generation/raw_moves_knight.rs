//! Raw knight move generation: eight fixed offsets.

use crate::board::chess_move::Move;
use crate::board::piece::Piece;
use crate::board::position::Position;
use crate::board::square::{Offset, Square};
use crate::move_generation::raw_move_shared::push_step;

pub const KNIGHT_OFFSETS: [Offset; 8] = [
    Offset::new(1, 2),
    Offset::new(2, 1),
    Offset::new(2, -1),
    Offset::new(1, -2),
    Offset::new(-1, -2),
    Offset::new(-2, -1),
    Offset::new(-2, 1),
    Offset::new(-1, 2),
];

pub fn generate_knight_moves(position: &Position, knight: Piece, from: Square, out: &mut Vec<Move>) {
    for offset in KNIGHT_OFFSETS {
        push_step(position, knight, from, offset, out);
    }
}
