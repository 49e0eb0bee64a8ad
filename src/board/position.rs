//! Immutable board snapshot and the pure move-application function.
//!
//! A `Position` is never mutated once built: `apply` returns a brand-new
//! snapshot, which is what makes speculative move simulation during
//! legality filtering safe without any rollback logic. `last_move` exists
//! solely to validate en passant for the immediately following ply.

use crate::board::chess_move::Move;
use crate::board::piece::{Color, Piece, PieceKind};
use crate::board::square::Square;

#[derive(Debug, Clone)]
pub struct Position {
    // [file][rank]
    board: [[Option<Piece>; 8]; 8],
    pub side_to_move: Color,
    pub last_move: Option<Move>,
    /// Plies since the last pawn move or capture.
    pub halfmove_clock: u32,
}

/// Back-rank piece order shared by the standard setup and the text loader.
pub const BACK_RANK: [PieceKind; 8] = [
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Queen,
    PieceKind::King,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Rook,
];

impl Position {
    /// Builds a position from explicit piece placements, White to move.
    ///
    /// Panics on a duplicated square or if either side does not have
    /// exactly one king; those are construction bugs, not runtime errors.
    pub fn from_pieces(pieces: &[(Piece, Square)]) -> Self {
        let mut board: [[Option<Piece>; 8]; 8] = [[None; 8]; 8];
        let mut kings = [0usize; 2];
        for &(piece, square) in pieces {
            assert!(
                square.within_board(),
                "piece placed off the board at {:?}",
                square
            );
            let slot = &mut board[square.file as usize][square.rank as usize];
            assert!(slot.is_none(), "two pieces placed on {:?}", square);
            *slot = Some(piece);
            if piece.kind == PieceKind::King {
                kings[piece.color.index()] += 1;
            }
        }
        assert!(
            kings == [1, 1],
            "each side needs exactly one king, got {:?}",
            kings
        );
        Position {
            board,
            side_to_move: Color::White,
            last_move: None,
            halfmove_clock: 0,
        }
    }

    /// The standard starting position.
    pub fn standard_setup() -> Self {
        let mut pieces = Vec::with_capacity(32);
        for color in [Color::White, Color::Black] {
            let home = color.home_rank();
            let pawn_rank = home + color.forward();
            for (file, &kind) in BACK_RANK.iter().enumerate() {
                pieces.push((Piece::new(kind, color), Square::new(file as i8, home)));
            }
            for file in 0..8 {
                pieces.push((
                    Piece::new(PieceKind::Pawn, color),
                    Square::new(file, pawn_rank),
                ));
            }
        }
        Position::from_pieces(&pieces)
    }

    #[inline]
    pub fn piece_at(&self, square: Square) -> Option<Piece> {
        self.board[square.file as usize][square.rank as usize]
    }

    /// Every piece on the board with its square, file-major order.
    pub fn all_pieces(&self) -> Vec<(Piece, Square)> {
        let mut out = Vec::with_capacity(32);
        for file in 0..8 {
            for rank in 0..8 {
                if let Some(piece) = self.board[file as usize][rank as usize] {
                    out.push((piece, Square::new(file, rank)));
                }
            }
        }
        out
    }

    /// Squares occupied by `color`, file-major order.
    pub fn occupied_squares(&self, color: Color) -> Vec<Square> {
        let mut out = Vec::with_capacity(16);
        for file in 0..8 {
            for rank in 0..8 {
                if let Some(piece) = self.board[file as usize][rank as usize] {
                    if piece.color == color {
                        out.push(Square::new(file, rank));
                    }
                }
            }
        }
        out
    }

    /// Locates `color`'s king. Panics if it is missing, which violates the
    /// one-king-per-color construction invariant.
    pub fn king_square(&self, color: Color) -> Square {
        for file in 0..8 {
            for rank in 0..8 {
                if let Some(piece) = self.board[file as usize][rank as usize] {
                    if piece.kind == PieceKind::King && piece.color == color {
                        return Square::new(file, rank);
                    }
                }
            }
        }
        panic!("position has no {:?} king", color);
    }

    /// Applies `mv`, returning the successor position. Pure: `self` is
    /// left untouched.
    pub fn apply(&self, mv: &Move) -> Position {
        debug_assert_eq!(self.piece_at(mv.from), Some(mv.mover));

        let mut board = self.board;
        if let Some((_, capture_square)) = mv.captured {
            board[capture_square.file as usize][capture_square.rank as usize] = None;
        }
        board[mv.from.file as usize][mv.from.rank as usize] = None;

        let mut placed = mv.mover.as_moved();
        if mv.mover.kind == PieceKind::Pawn && mv.to.rank == mv.mover.color.promotion_rank() {
            placed = placed.promoted_to(mv.promotion.unwrap_or(PieceKind::Queen));
        }
        debug_assert!(board[mv.to.file as usize][mv.to.rank as usize].is_none());
        board[mv.to.file as usize][mv.to.rank as usize] = Some(placed);

        if let Some((rook, rook_from, rook_to)) = mv.castle_rook {
            board[rook_from.file as usize][rook_from.rank as usize] = None;
            board[rook_to.file as usize][rook_to.rank as usize] = Some(rook.as_moved());
        }

        let resets_clock = mv.mover.kind == PieceKind::Pawn || mv.captured.is_some();
        Position {
            board,
            side_to_move: self.side_to_move.opposite(),
            last_move: Some(*mv),
            halfmove_clock: if resets_clock {
                0
            } else {
                self.halfmove_clock + 1
            },
        }
    }
}
