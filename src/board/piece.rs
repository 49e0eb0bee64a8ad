//! Piece and color value types.
//!
//! A `Piece` is an immutable value: "moving" or "promoting" a piece means
//! producing a transformed copy with `as_moved`/`promoted_to`. The
//! `has_moved` flag is tracked on every piece for uniformity but only
//! matters for kings and rooks (castling rights) and pawns (double-step).

/// Side to move / piece ownership.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    White,
    Black,
}

impl Color {
    #[inline]
    pub const fn opposite(self) -> Self {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }

    #[inline]
    pub const fn index(self) -> usize {
        match self {
            Color::White => 0,
            Color::Black => 1,
        }
    }

    /// Rank direction this color's pawns advance in.
    #[inline]
    pub const fn forward(self) -> i8 {
        match self {
            Color::White => 1,
            Color::Black => -1,
        }
    }

    /// The back rank this color starts on.
    #[inline]
    pub const fn home_rank(self) -> i8 {
        match self {
            Color::White => 0,
            Color::Black => 7,
        }
    }

    /// The rank this color's pawns promote on.
    #[inline]
    pub const fn promotion_rank(self) -> i8 {
        match self {
            Color::White => 7,
            Color::Black => 0,
        }
    }
}

/// Piece kind tag. Move generation dispatches on this rather than on a
/// class hierarchy, keeping the per-kind logic in free functions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

impl PieceKind {
    #[inline]
    pub const fn index(self) -> usize {
        match self {
            PieceKind::Pawn => 0,
            PieceKind::Knight => 1,
            PieceKind::Bishop => 2,
            PieceKind::Rook => 3,
            PieceKind::Queen => 4,
            PieceKind::King => 5,
        }
    }
}

/// The kinds a pawn may promote to, in the order candidates are generated.
pub const PROMOTION_KINDS: [PieceKind; 4] = [
    PieceKind::Queen,
    PieceKind::Rook,
    PieceKind::Bishop,
    PieceKind::Knight,
];

/// An immutable piece value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Piece {
    pub kind: PieceKind,
    pub color: Color,
    pub has_moved: bool,
}

impl Piece {
    #[inline]
    pub const fn new(kind: PieceKind, color: Color) -> Self {
        Piece {
            kind,
            color,
            has_moved: false,
        }
    }

    /// Copy of this piece with the moved flag set.
    #[inline]
    pub const fn as_moved(self) -> Self {
        Piece {
            has_moved: true,
            ..self
        }
    }

    /// Copy of this piece with a new kind, keeping color and moved flag.
    #[inline]
    pub const fn promoted_to(self, kind: PieceKind) -> Self {
        Piece { kind, ..self }
    }
}
