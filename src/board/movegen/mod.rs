//! Legal move generation.
//!
//! Pseudo-legal moves are generated per piece kind (one file per kind),
//! then filtered by applying each move and rejecting any that leaves the
//! mover's own king attacked. Castling additionally checks the transit
//! squares at generation time.

mod kings;
mod knights;
mod pawns;
mod sliders;

pub(crate) use knights::KNIGHT_OFFSETS;
pub(crate) use sliders::{DIAGONAL_DIRS, STRAIGHT_DIRS};

use super::types::{Color, Move, Piece, Square};
use super::Board;

impl Board {
    /// All strictly legal moves for the side to move.
    ///
    /// An empty result means checkmate or stalemate, disambiguated by
    /// [`Board::is_in_check`].
    #[must_use]
    pub fn legal_moves(&self) -> Vec<Move> {
        let mover = self.side_to_move;
        self.pseudo_legal_moves(mover)
            .into_iter()
            .filter(|&mv| !self.apply(mv).is_in_check(mover))
            .collect()
    }

    /// Legal moves originating at `from`.
    ///
    /// This is literally a filter over [`Board::legal_moves`], so the
    /// per-square view can never disagree with the full set.
    #[must_use]
    pub fn legal_moves_from(&self, from: Square) -> Vec<Move> {
        self.legal_moves()
            .into_iter()
            .filter(|mv| mv.from == from)
            .collect()
    }

    /// Pseudo-legal moves for `color`: movement rules only, king safety
    /// ignored. Generation order is deterministic (squares a1..h8, piece
    /// rules in a fixed order); the search's tie-break depends on it.
    pub(crate) fn pseudo_legal_moves(&self, color: Color) -> Vec<Move> {
        let mut moves = Vec::with_capacity(64);
        for from in Square::all() {
            match self.piece_at(from) {
                Some((c, piece)) if c == color => match piece {
                    Piece::Pawn => self.pawn_moves(from, color, &mut moves),
                    Piece::Knight => self.knight_moves(from, color, &mut moves),
                    Piece::Bishop => self.bishop_moves(from, color, &mut moves),
                    Piece::Rook => self.rook_moves(from, color, &mut moves),
                    Piece::Queen => self.queen_moves(from, color, &mut moves),
                    Piece::King => self.king_moves(from, color, &mut moves),
                },
                _ => {}
            }
        }
        moves
    }
}
