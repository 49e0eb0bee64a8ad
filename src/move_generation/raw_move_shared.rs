//! Helpers shared by the per-piece raw move generators.

use crate::board::chess_move::Move;
use crate::board::piece::Piece;
use crate::board::position::Position;
use crate::board::square::{Offset, Square};

pub const ORTHOGONAL_DIRECTIONS: [Offset; 4] = [
    Offset::new(1, 0),
    Offset::new(-1, 0),
    Offset::new(0, 1),
    Offset::new(0, -1),
];

pub const DIAGONAL_DIRECTIONS: [Offset; 4] = [
    Offset::new(1, 1),
    Offset::new(1, -1),
    Offset::new(-1, 1),
    Offset::new(-1, -1),
];

/// Walks one sliding ray from `from`, pushing a move per empty square and
/// a final capture on the first enemy piece. Own pieces and the board edge
/// end the ray without a move.
pub fn slide_ray(position: &Position, mover: Piece, from: Square, direction: Offset, out: &mut Vec<Move>) {
    let mut target = from + direction;
    while target.within_board() {
        match position.piece_at(target) {
            None => out.push(Move::regular(mover, from, target, None)),
            Some(blocker) => {
                if blocker.color != mover.color {
                    out.push(Move::regular(mover, from, target, Some((blocker, target))));
                }
                return;
            }
        }
        target = target + direction;
    }
}

/// Pushes a single fixed-offset step (knight/king) if the target is on the
/// board and not blocked by a friendly piece.
pub fn push_step(position: &Position, mover: Piece, from: Square, offset: Offset, out: &mut Vec<Move>) {
    let target = from + offset;
    if !target.within_board() {
        return;
    }
    match position.piece_at(target) {
        None => out.push(Move::regular(mover, from, target, None)),
        Some(blocker) => {
            if blocker.color != mover.color {
                out.push(Move::regular(mover, from, target, Some((blocker, target))));
            }
        }
    }
}
