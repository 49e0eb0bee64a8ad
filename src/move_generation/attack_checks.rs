//! Attack detection by reverse scanning.
//!
//! `is_square_attacked` asks, for each piece kind able to reach the target
//! in one move, whether an enemy piece of that kind actually stands on a
//! reachable square. This is deliberately independent from legal-move
//! generation: legality filtering calls in here, and nothing here calls
//! back out, which is what keeps the recursion from becoming mutual.

use crate::board::piece::{Color, PieceKind};
use crate::board::position::Position;
use crate::board::square::{Offset, Square};
use crate::move_generation::raw_move_shared::{DIAGONAL_DIRECTIONS, ORTHOGONAL_DIRECTIONS};
use crate::move_generation::raw_moves_king::KING_OFFSETS;
use crate::move_generation::raw_moves_knight::KNIGHT_OFFSETS;

/// True when any piece of `attacker` could capture on `target` next ply.
pub fn is_square_attacked(position: &Position, target: Square, attacker: Color) -> bool {
    // Pawn capture sources sit one rank behind the target from the
    // attacker's point of view.
    let pawn_rank_step = -attacker.forward();
    for file_step in [-1, 1] {
        let source = target + Offset::new(file_step, pawn_rank_step);
        if source.within_board() {
            if let Some(piece) = position.piece_at(source) {
                if piece.kind == PieceKind::Pawn && piece.color == attacker {
                    return true;
                }
            }
        }
    }

    if offset_attacker_present(position, target, attacker, &KNIGHT_OFFSETS, PieceKind::Knight) {
        return true;
    }
    if offset_attacker_present(position, target, attacker, &KING_OFFSETS, PieceKind::King) {
        return true;
    }

    for direction in ORTHOGONAL_DIRECTIONS {
        if ray_attacker_present(position, target, attacker, direction, PieceKind::Rook) {
            return true;
        }
    }
    for direction in DIAGONAL_DIRECTIONS {
        if ray_attacker_present(position, target, attacker, direction, PieceKind::Bishop) {
            return true;
        }
    }
    false
}

/// True when `color`'s king stands on a square attacked by the opponent.
/// Panics if the king is missing; every position is built with one.
pub fn is_king_in_check(position: &Position, color: Color) -> bool {
    is_square_attacked(position, position.king_square(color), color.opposite())
}

fn offset_attacker_present(
    position: &Position,
    target: Square,
    attacker: Color,
    offsets: &[Offset],
    kind: PieceKind,
) -> bool {
    offsets.iter().any(|&offset| {
        let source = target + offset;
        source.within_board()
            && matches!(
                position.piece_at(source),
                Some(piece) if piece.kind == kind && piece.color == attacker
            )
    })
}

/// Walks one ray outward from the target; the first occupied square
/// decides. `slider` is the non-queen kind that moves along `direction`.
fn ray_attacker_present(
    position: &Position,
    target: Square,
    attacker: Color,
    direction: Offset,
    slider: PieceKind,
) -> bool {
    let mut source = target + direction;
    while source.within_board() {
        if let Some(piece) = position.piece_at(source) {
            return piece.color == attacker
                && (piece.kind == slider || piece.kind == PieceKind::Queen);
        }
        source = source + direction;
    }
    false
}
