//! Raw bishop move generation: the four diagonal rays.

use crate::board::chess_move::Move;
use crate::board::piece::Piece;
use crate::board::position::Position;
use crate::board::square::Square;
use crate::move_generation::raw_move_shared::{slide_ray, DIAGONAL_DIRECTIONS};

pub fn generate_bishop_moves(position: &Position, bishop: Piece, from: Square, out: &mut Vec<Move>) {
    for direction in DIAGONAL_DIRECTIONS {
        slide_ray(position, bishop, from, direction, out);
    }
}
