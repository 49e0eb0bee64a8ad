//! Raw pawn move generation.
//!
//! Pawns are the one kind whose capture moves differ from their quiet
//! moves: forward pushes, an initial double step, diagonal captures, the
//! en-passant capture keyed off the previous ply, and the four-way
//! promotion fan-out when the far rank is reached.

use crate::board::chess_move::Move;
use crate::board::piece::{Piece, PieceKind, PROMOTION_KINDS};
use crate::board::position::Position;
use crate::board::square::{Offset, Square};

pub fn generate_pawn_moves(position: &Position, pawn: Piece, from: Square, out: &mut Vec<Move>) {
    let forward = Offset::new(0, pawn.color.forward());

    let one = from + forward;
    if one.within_board() && position.piece_at(one).is_none() {
        push_pawn_candidate(pawn, from, one, None, out);
        let two = one + forward;
        if !pawn.has_moved && two.within_board() && position.piece_at(two).is_none() {
            // A double step can never reach the far rank, so no fan-out.
            out.push(Move::regular(pawn, from, two, None));
        }
    }

    for file_step in [-1, 1] {
        let target = from + Offset::new(file_step, pawn.color.forward());
        if !target.within_board() {
            continue;
        }
        match position.piece_at(target) {
            Some(occupant) if occupant.color != pawn.color => {
                push_pawn_candidate(pawn, from, target, Some((occupant, target)), out);
            }
            Some(_) => {}
            None => {
                if let Some(victim_square) = en_passant_victim(position, pawn, from, target) {
                    let victim = position
                        .piece_at(victim_square)
                        .expect("en-passant victim vanished from last_move.to");
                    out.push(Move::regular(pawn, from, target, Some((victim, victim_square))));
                }
            }
        }
    }
}

/// En passant is open for exactly one ply: the previous move must have been
/// an enemy pawn double step landing beside this pawn, and the capture
/// removes that pawn from its landing square, not from the diagonal target.
fn en_passant_victim(
    position: &Position,
    pawn: Piece,
    from: Square,
    target: Square,
) -> Option<Square> {
    let last = position.last_move?;
    let was_double_pawn_step = last.mover.kind == PieceKind::Pawn
        && last.mover.color != pawn.color
        && (last.to - last.from).abs().rank == 2;
    if was_double_pawn_step && last.to.rank == from.rank && last.to.file == target.file {
        Some(last.to)
    } else {
        None
    }
}

fn push_pawn_candidate(
    pawn: Piece,
    from: Square,
    to: Square,
    captured: Option<(Piece, Square)>,
    out: &mut Vec<Move>,
) {
    if to.rank == pawn.color.promotion_rank() {
        // One candidate per promotable kind, never a silent queen default.
        for kind in PROMOTION_KINDS {
            let mut mv = Move::regular(pawn, from, to, captured);
            mv.promotion = Some(kind);
            out.push(mv);
        }
    } else {
        out.push(Move::regular(pawn, from, to, captured));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::move_generation::raw_move_generator::raw_moves;
    use crate::utils::board_text::parse_board_layout;

    #[test]
    fn unmoved_pawn_offers_single_and_double_push() {
        let position = Position::standard_setup();
        let moves = raw_moves(&position, Square::new(4, 1));
        assert_eq!(moves.len(), 2);
        assert!(moves.iter().any(|m| m.to == Square::new(4, 2)));
        assert!(moves.iter().any(|m| m.to == Square::new(4, 3)));
    }

    #[test]
    fn double_push_needs_both_squares_empty() {
        let layout = [
            "    K   ",
            "    P   ",
            "        ",
            "    n   ",
            "        ",
            "        ",
            "        ",
            "    k   ",
        ];
        let position = Position::from_pieces(&parse_board_layout(&layout).unwrap());
        let moves = raw_moves(&position, Square::new(4, 1));
        assert_eq!(moves.len(), 1);
        assert_eq!(moves[0].to, Square::new(4, 2));
    }

    #[test]
    fn pawn_captures_diagonally_not_straight_ahead() {
        let layout = [
            "    K   ",
            "        ",
            "        ",
            "    P   ",
            "   qpn  ",
            "        ",
            "        ",
            "    k   ",
        ];
        let position = Position::from_pieces(&parse_board_layout(&layout).unwrap());
        let moves = raw_moves(&position, Square::new(4, 3));
        // Blocked straight ahead by the enemy pawn; both diagonals capture.
        assert_eq!(moves.len(), 2);
        assert!(moves
            .iter()
            .all(|m| m.captured.is_some() && m.to.rank == 4));
    }

    #[test]
    fn en_passant_opens_for_exactly_one_ply() {
        let layout = [
            "    K   ",
            "    P   ",
            "        ",
            "   p    ",
            "        ",
            "        ",
            "       p",
            "    k   ",
        ];
        let start = Position::from_pieces(&parse_board_layout(&layout).unwrap());

        let white_pawn = start.piece_at(Square::new(4, 1)).unwrap();
        let double = Move::regular(white_pawn, Square::new(4, 1), Square::new(4, 3), None);
        let after_double = start.apply(&double);

        let replies = raw_moves(&after_double, Square::new(3, 3));
        let ep = replies
            .iter()
            .find(|m| m.to == Square::new(4, 2))
            .expect("en passant should be offered right after the double step");
        // The victim is removed from the landing square of the double step.
        assert_eq!(ep.captured.unwrap().1, Square::new(4, 3));

        // One quiet ply per side later the window has closed.
        let black_pawn = after_double.piece_at(Square::new(7, 6)).unwrap();
        let black_quiet =
            Move::regular(black_pawn, Square::new(7, 6), Square::new(7, 5), None);
        let after_black = after_double.apply(&black_quiet);
        let king = after_black.piece_at(Square::new(4, 0)).unwrap();
        let king_step = Move::regular(king, Square::new(4, 0), Square::new(3, 0), None);
        let after_king = after_black.apply(&king_step);

        let late = raw_moves(&after_king, Square::new(3, 3));
        assert!(!late.iter().any(|m| m.to == Square::new(4, 2)));
    }

    #[test]
    fn far_rank_moves_fan_out_into_four_promotions() {
        let layout = [
            "K       ",
            "        ",
            "        ",
            "        ",
            "        ",
            "        ",
            "   P    ",
            "  r   k ",
        ];
        let position = Position::from_pieces(&parse_board_layout(&layout).unwrap());
        let moves = raw_moves(&position, Square::new(3, 6));
        // Quiet push to d8 and the rook capture on c8, four kinds each.
        assert_eq!(moves.len(), 8);
        for target in [Square::new(3, 7), Square::new(2, 7)] {
            for kind in PROMOTION_KINDS {
                assert!(moves
                    .iter()
                    .any(|m| m.to == target && m.promotion == Some(kind)));
            }
        }
    }
}
