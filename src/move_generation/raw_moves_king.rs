//! Raw king move generation: eight fixed offsets plus castling candidates.
//!
//! Castling candidates only check the geometric preconditions (both pieces
//! unmoved, the corridor empty). Whether the king is in, passes through,
//! or lands in check is the legality filter's business, since that needs
//! attack detection the raw layer does not perform.

use crate::board::chess_move::Move;
use crate::board::piece::{Piece, PieceKind};
use crate::board::position::Position;
use crate::board::square::{Offset, Square};
use crate::move_generation::raw_move_shared::push_step;

pub const KING_OFFSETS: [Offset; 8] = [
    Offset::new(1, 0),
    Offset::new(1, 1),
    Offset::new(0, 1),
    Offset::new(-1, 1),
    Offset::new(-1, 0),
    Offset::new(-1, -1),
    Offset::new(0, -1),
    Offset::new(1, -1),
];

pub fn generate_king_moves(position: &Position, king: Piece, from: Square, out: &mut Vec<Move>) {
    for offset in KING_OFFSETS {
        push_step(position, king, from, offset, out);
    }
    if !king.has_moved {
        push_castling_candidate(position, king, from, 1, out);
        push_castling_candidate(position, king, from, -1, out);
    }
}

/// One castling side: `file_step` is +1 toward the h-file rook, -1 toward
/// the a-file rook. Requires an unmoved same-color rook on the corner and
/// an empty corridor strictly between king and rook. The rook's recorded
/// destination is the square the king steps across.
fn push_castling_candidate(
    position: &Position,
    king: Piece,
    from: Square,
    file_step: i8,
    out: &mut Vec<Move>,
) {
    let corner_file = if file_step > 0 { 7 } else { 0 };
    let corner = Square::new(corner_file, from.rank);
    let rook = match position.piece_at(corner) {
        Some(piece)
            if piece.kind == PieceKind::Rook
                && piece.color == king.color
                && !piece.has_moved =>
        {
            piece
        }
        _ => return,
    };

    let mut between = from + Offset::new(file_step, 0);
    while between != corner {
        if position.piece_at(between).is_some() {
            return;
        }
        between = between + Offset::new(file_step, 0);
    }

    // An unmoved king placed near the corner in a constructed position
    // would otherwise hop off the board.
    let destination = from + Offset::new(file_step, 0) * 2;
    if !destination.within_board() {
        return;
    }
    let mut mv = Move::regular(king, from, destination, None);
    mv.castle_rook = Some((rook, corner, from + Offset::new(file_step, 0)));
    out.push(mv);
}
