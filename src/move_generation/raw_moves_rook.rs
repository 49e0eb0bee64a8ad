//! Raw rook move generation: the four orthogonal rays.

use crate::board::chess_move::Move;
use crate::board::piece::Piece;
use crate::board::position::Position;
use crate::board::square::Square;
use crate::move_generation::raw_move_shared::{slide_ray, ORTHOGONAL_DIRECTIONS};

pub fn generate_rook_moves(position: &Position, rook: Piece, from: Square, out: &mut Vec<Move>) {
    for direction in ORTHOGONAL_DIRECTIONS {
        slide_ray(position, rook, from, direction, out);
    }
}
