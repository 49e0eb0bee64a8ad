//! Raw queen move generation: union of the rook and bishop ray sets.

use crate::board::chess_move::Move;
use crate::board::piece::Piece;
use crate::board::position::Position;
use crate::board::square::Square;
use crate::move_generation::raw_move_shared::{
    slide_ray, DIAGONAL_DIRECTIONS, ORTHOGONAL_DIRECTIONS,
};

pub fn generate_queen_moves(position: &Position, queen: Piece, from: Square, out: &mut Vec<Move>) {
    for direction in ORTHOGONAL_DIRECTIONS {
        slide_ray(position, queen, from, direction, out);
    }
    for direction in DIAGONAL_DIRECTIONS {
        slide_ray(position, queen, from, direction, out);
    }
}
