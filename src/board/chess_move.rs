//! The move representation.
//!
//! A `Move` carries its mover and any side data needed to apply it: the
//! captured piece (whose square differs from `to` only under en passant),
//! the rook transition for castling, and the promotion kind. Castling is a
//! first-class field rather than a re-derived special case so that `apply`
//! never has to guess what a move meant.

use crate::board::piece::{Color, Piece, PieceKind};
use crate::board::square::Square;

#[derive(Debug, Clone, Copy)]
pub struct Move {
    /// The piece being moved, as it stood before the move.
    pub mover: Piece,
    pub from: Square,
    pub to: Square,
    /// Captured piece and the square it is removed from.
    pub captured: Option<(Piece, Square)>,
    /// Castling only: the rook, its origin corner, and its destination.
    pub castle_rook: Option<(Piece, Square, Square)>,
    /// Promotion kind for a pawn reaching the far rank. `None` at
    /// apply-time promotes to a queen.
    pub promotion: Option<PieceKind>,
}

impl Move {
    /// A plain move or capture with no special bookkeeping.
    #[inline]
    pub fn regular(mover: Piece, from: Square, to: Square, captured: Option<(Piece, Square)>) -> Self {
        Move {
            mover,
            from,
            to,
            captured,
            castle_rook: None,
            promotion: None,
        }
    }

    /// The identity key moves are compared by. Capture and rook data are
    /// derived from the position, so a caller can name a move with
    /// `(from, to, promotion)` alone.
    #[inline]
    fn identity(&self) -> (PieceKind, Color, Square, Square, Option<PieceKind>) {
        (
            self.mover.kind,
            self.mover.color,
            self.from,
            self.to,
            self.promotion,
        )
    }

    /// True when this move answers a `(from, to, promotion)` request. An
    /// unspecified promotion matches the queen candidate, the apply-time
    /// default.
    #[inline]
    pub fn matches_request(&self, from: Square, to: Square, promotion: Option<PieceKind>) -> bool {
        if self.from != from || self.to != to {
            return false;
        }
        match (self.promotion, promotion) {
            (got, want) if got == want => true,
            (Some(PieceKind::Queen), None) => true,
            _ => false,
        }
    }
}

impl PartialEq for Move {
    fn eq(&self, other: &Self) -> bool {
        self.identity() == other.identity()
    }
}

impl Eq for Move {}

#[cfg(test)]
mod tests {
    use super::*;

    fn pawn_move(captured: Option<(Piece, Square)>) -> Move {
        Move::regular(
            Piece::new(PieceKind::Pawn, Color::White),
            Square::new(4, 1),
            Square::new(4, 2),
            captured,
        )
    }

    #[test]
    fn equality_ignores_derived_capture_data() {
        let plain = pawn_move(None);
        let with_capture = pawn_move(Some((
            Piece::new(PieceKind::Knight, Color::Black),
            Square::new(4, 2),
        )));
        assert_eq!(plain, with_capture);
    }

    #[test]
    fn equality_distinguishes_promotion_kind() {
        let mut queen = pawn_move(None);
        queen.promotion = Some(PieceKind::Queen);
        let mut rook = queen;
        rook.promotion = Some(PieceKind::Rook);
        assert_ne!(queen, rook);
    }

    #[test]
    fn unspecified_promotion_request_matches_queen_only() {
        let mut queen = pawn_move(None);
        queen.promotion = Some(PieceKind::Queen);
        let mut knight = queen;
        knight.promotion = Some(PieceKind::Knight);

        assert!(queen.matches_request(queen.from, queen.to, None));
        assert!(!knight.matches_request(knight.from, knight.to, None));
        assert!(knight.matches_request(knight.from, knight.to, Some(PieceKind::Knight)));
    }
}
