//! Error types for board operations.

use std::fmt;

/// Error type for FEN parsing failures.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FenError {
    /// FEN string has too few whitespace-separated fields (needs at least 4).
    TooFewParts { found: usize },
    /// Invalid piece character in the placement field.
    InvalidPiece { char: char },
    /// Placement field does not describe exactly 8 ranks.
    InvalidRankCount { found: usize },
    /// A rank describes more or fewer than 8 files.
    InvalidRank { rank: usize },
    /// Invalid side-to-move field (must be 'w' or 'b').
    InvalidSideToMove { found: String },
    /// Invalid castling-rights character.
    InvalidCastling { char: char },
    /// Invalid en-passant square field.
    InvalidEnPassant { found: String },
    /// Invalid halfmove or fullmove counter.
    InvalidCounter { found: String },
    /// The described position is missing a king or has more than one.
    BadKingCount { color: &'static str, found: usize },
}

impl fmt::Display for FenError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FenError::TooFewParts { found } => {
                write!(f, "FEN must have at least 4 fields, found {found}")
            }
            FenError::InvalidPiece { char } => {
                write!(f, "invalid piece character '{char}' in FEN")
            }
            FenError::InvalidRankCount { found } => {
                write!(f, "FEN placement must have 8 ranks, found {found}")
            }
            FenError::InvalidRank { rank } => {
                write!(f, "rank {rank} does not describe exactly 8 files")
            }
            FenError::InvalidSideToMove { found } => {
                write!(f, "invalid side to move '{found}', expected 'w' or 'b'")
            }
            FenError::InvalidCastling { char } => {
                write!(f, "invalid castling character '{char}' in FEN")
            }
            FenError::InvalidEnPassant { found } => {
                write!(f, "invalid en passant square '{found}'")
            }
            FenError::InvalidCounter { found } => {
                write!(f, "invalid move counter '{found}'")
            }
            FenError::BadKingCount { color, found } => {
                write!(f, "position must have exactly one {color} king, found {found}")
            }
        }
    }
}

impl std::error::Error for FenError {}

/// Error type for square parsing failures.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SquareError {
    /// Not a valid algebraic square like `e4`.
    InvalidNotation { notation: String },
}

impl fmt::Display for SquareError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SquareError::InvalidNotation { notation } => {
                write!(f, "invalid square notation '{notation}'")
            }
        }
    }
}

impl std::error::Error for SquareError {}
