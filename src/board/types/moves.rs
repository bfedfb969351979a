//! Move representation.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::piece::Piece;
use super::square::Square;

/// What kind of move this is, fixed at generation time.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum MoveKind {
    Quiet,
    DoublePawnPush,
    Capture,
    EnPassant,
    CastleKingside,
    CastleQueenside,
}

/// A single chess move.
///
/// Moves are only ever constructed by the move generator, so holding a
/// `Move` means it was legal in the position it was generated for. The
/// constructors are crate-internal for that reason.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Move {
    pub from: Square,
    pub to: Square,
    /// Piece a promoting pawn turns into; `None` for non-promotion moves.
    pub promotion: Option<Piece>,
    pub kind: MoveKind,
}

impl Move {
    #[inline]
    #[must_use]
    pub(crate) const fn quiet(from: Square, to: Square) -> Self {
        Move {
            from,
            to,
            promotion: None,
            kind: MoveKind::Quiet,
        }
    }

    #[inline]
    #[must_use]
    pub(crate) const fn capture(from: Square, to: Square) -> Self {
        Move {
            from,
            to,
            promotion: None,
            kind: MoveKind::Capture,
        }
    }

    #[inline]
    #[must_use]
    pub(crate) const fn double_pawn_push(from: Square, to: Square) -> Self {
        Move {
            from,
            to,
            promotion: None,
            kind: MoveKind::DoublePawnPush,
        }
    }

    #[inline]
    #[must_use]
    pub(crate) const fn en_passant(from: Square, to: Square) -> Self {
        Move {
            from,
            to,
            promotion: None,
            kind: MoveKind::EnPassant,
        }
    }

    #[inline]
    #[must_use]
    pub(crate) const fn castle(from: Square, to: Square, kingside: bool) -> Self {
        Move {
            from,
            to,
            promotion: None,
            kind: if kingside {
                MoveKind::CastleKingside
            } else {
                MoveKind::CastleQueenside
            },
        }
    }

    /// Promotion move; `capture` selects the underlying kind.
    #[inline]
    #[must_use]
    pub(crate) const fn promotion(from: Square, to: Square, piece: Piece, capture: bool) -> Self {
        Move {
            from,
            to,
            promotion: Some(piece),
            kind: if capture {
                MoveKind::Capture
            } else {
                MoveKind::Quiet
            },
        }
    }

    /// Whether the move captures material (including en passant).
    #[inline]
    #[must_use]
    pub const fn is_capture(self) -> bool {
        matches!(self.kind, MoveKind::Capture | MoveKind::EnPassant)
    }
}

impl fmt::Display for Move {
    /// Long algebraic form, e.g. `e2e4` or `a7a8q`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.from, self.to)?;
        if let Some(piece) = self.promotion {
            write!(f, "{}", piece.to_char())?;
        }
        Ok(())
    }
}
