//! Board coordinates and coordinate arithmetic.
//!
//! A `Square` is a `(file, rank)` pair, each nominally in `0..8`; an
//! `Offset` is a displacement between squares. Both are plain value types:
//! every operation returns a new value, and off-board squares are
//! representable so that ray walking can step off the edge and test
//! `within_board` afterwards.

use std::ops::{Add, Mul, Sub};

/// A board coordinate. `file` runs a..h as 0..8, `rank` runs 0..8 with
/// rank 0 as White's home rank.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Square {
    pub file: i8,
    pub rank: i8,
}

/// A displacement between two squares.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Offset {
    pub file: i8,
    pub rank: i8,
}

impl Square {
    #[inline]
    pub const fn new(file: i8, rank: i8) -> Self {
        Square { file, rank }
    }

    /// True when both coordinates fall inside the 8x8 board.
    #[inline]
    pub const fn within_board(self) -> bool {
        self.file >= 0 && self.file < 8 && self.rank >= 0 && self.rank < 8
    }
}

impl Offset {
    #[inline]
    pub const fn new(file: i8, rank: i8) -> Self {
        Offset { file, rank }
    }

    /// Component-wise absolute value.
    #[inline]
    pub const fn abs(self) -> Self {
        Offset {
            file: self.file.abs(),
            rank: self.rank.abs(),
        }
    }

    /// Component-wise clamp to `[-1, 1]`, reducing any displacement to the
    /// unit step of its direction. Used to derive a ray direction from a
    /// from/to pair (e.g. the king's castling hop).
    #[inline]
    pub const fn clamp_unit(self) -> Self {
        Offset {
            file: clamp_i8(self.file),
            rank: clamp_i8(self.rank),
        }
    }
}

#[inline]
const fn clamp_i8(x: i8) -> i8 {
    if x > 1 {
        1
    } else if x < -1 {
        -1
    } else {
        x
    }
}

impl Add<Offset> for Square {
    type Output = Square;

    #[inline]
    fn add(self, rhs: Offset) -> Square {
        Square::new(self.file + rhs.file, self.rank + rhs.rank)
    }
}

impl Sub for Square {
    type Output = Offset;

    #[inline]
    fn sub(self, rhs: Square) -> Offset {
        Offset::new(self.file - rhs.file, self.rank - rhs.rank)
    }
}

impl Mul<i8> for Offset {
    type Output = Offset;

    #[inline]
    fn mul(self, rhs: i8) -> Offset {
        Offset::new(self.file * rhs, self.rank * rhs)
    }
}
