//! Square type and algebraic notation parsing.

use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::board::error::SquareError;

/// A square on the board as `(rank, file)`.
///
/// Rank 0 is White's back rank (rank 1 in algebraic notation), file 0 is the
/// a-file. Both coordinates are bounds-checked at construction.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Square(pub usize, pub usize);

impl Square {
    /// Create a square, returning `None` when either coordinate is out of
    /// the 0-7 range.
    #[must_use]
    pub fn new(rank: usize, file: usize) -> Option<Self> {
        if rank < 8 && file < 8 {
            Some(Square(rank, file))
        } else {
            None
        }
    }

    /// Rank (0-7, where 0 = rank 1).
    #[inline]
    #[must_use]
    pub const fn rank(self) -> usize {
        self.0
    }

    /// File (0-7, where 0 = file a).
    #[inline]
    #[must_use]
    pub const fn file(self) -> usize {
        self.1
    }

    /// Index into a 64-entry table (a1 = 0, h8 = 63).
    #[inline]
    #[must_use]
    pub(crate) const fn as_index(self) -> usize {
        self.0 * 8 + self.1
    }

    /// Offset the square by signed deltas, `None` when it falls off the board.
    #[inline]
    #[must_use]
    pub(crate) fn offset(self, dr: isize, df: isize) -> Option<Square> {
        let rank = self.0 as isize + dr;
        let file = self.1 as isize + df;
        if (0..8).contains(&rank) && (0..8).contains(&file) {
            Some(Square(rank as usize, file as usize))
        } else {
            None
        }
    }

    /// Iterate all 64 squares, a1 first.
    pub(crate) fn all() -> impl Iterator<Item = Square> {
        (0..64).map(|i| Square(i / 8, i % 8))
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let file = (b'a' + self.1 as u8) as char;
        let rank = (b'1' + self.0 as u8) as char;
        write!(f, "{file}{rank}")
    }
}

impl FromStr for Square {
    type Err = SquareError;

    /// Parse algebraic notation like `e4`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        let (Some(file_ch), Some(rank_ch), None) = (chars.next(), chars.next(), chars.next())
        else {
            return Err(SquareError::InvalidNotation {
                notation: s.to_string(),
            });
        };
        if !('a'..='h').contains(&file_ch) || !('1'..='8').contains(&rank_ch) {
            return Err(SquareError::InvalidNotation {
                notation: s.to_string(),
            });
        }
        let file = file_ch as usize - 'a' as usize;
        let rank = rank_ch as usize - '1' as usize;
        Ok(Square(rank, file))
    }
}
