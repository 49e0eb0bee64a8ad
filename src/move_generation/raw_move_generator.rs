//! Raw (pseudo-legal) move generation entry point.
//!
//! Dispatches on the piece-kind tag into the per-kind generator modules.
//! Raw moves respect board edges and blocking but ignore whether the
//! mover's own king is left in check; that filtering happens in
//! `legal_move_filter`.

use crate::board::chess_move::Move;
use crate::board::piece::PieceKind;
use crate::board::position::Position;
use crate::board::square::Square;
use crate::move_generation::raw_moves_bishop::generate_bishop_moves;
use crate::move_generation::raw_moves_king::generate_king_moves;
use crate::move_generation::raw_moves_knight::generate_knight_moves;
use crate::move_generation::raw_moves_pawn::generate_pawn_moves;
use crate::move_generation::raw_moves_queen::generate_queen_moves;
use crate::move_generation::raw_moves_rook::generate_rook_moves;

/// Every geometrically possible move for the piece on `from`; empty when
/// the square is empty.
pub fn raw_moves(position: &Position, from: Square) -> Vec<Move> {
    let Some(piece) = position.piece_at(from) else {
        return Vec::new();
    };
    let mut out = Vec::with_capacity(16);
    match piece.kind {
        PieceKind::Pawn => generate_pawn_moves(position, piece, from, &mut out),
        PieceKind::Knight => generate_knight_moves(position, piece, from, &mut out),
        PieceKind::Bishop => generate_bishop_moves(position, piece, from, &mut out),
        PieceKind::Rook => generate_rook_moves(position, piece, from, &mut out),
        PieceKind::Queen => generate_queen_moves(position, piece, from, &mut out),
        PieceKind::King => generate_king_moves(position, piece, from, &mut out),
    }
    out
}
