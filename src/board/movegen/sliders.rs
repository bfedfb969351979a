//! Sliding piece move generation: bishops, rooks, queens.

use super::super::types::{Color, Move, Square};
use super::super::Board;

pub(crate) const STRAIGHT_DIRS: [(isize, isize); 4] = [(0, 1), (0, -1), (1, 0), (-1, 0)];
pub(crate) const DIAGONAL_DIRS: [(isize, isize); 4] = [(1, 1), (1, -1), (-1, 1), (-1, -1)];

impl Board {
    /// Walk each ray until the first occupied square; capture it if it
    /// belongs to the opponent.
    fn sliding_moves(
        &self,
        from: Square,
        color: Color,
        dirs: &[(isize, isize)],
        moves: &mut Vec<Move>,
    ) {
        for &(dr, df) in dirs {
            let mut current = from;
            while let Some(target) = current.offset(dr, df) {
                match self.piece_at(target) {
                    None => {
                        moves.push(Move::quiet(from, target));
                        current = target;
                    }
                    Some((victim_color, _)) => {
                        if victim_color != color {
                            moves.push(Move::capture(from, target));
                        }
                        break;
                    }
                }
            }
        }
    }

    pub(crate) fn bishop_moves(&self, from: Square, color: Color, moves: &mut Vec<Move>) {
        self.sliding_moves(from, color, &DIAGONAL_DIRS, moves);
    }

    pub(crate) fn rook_moves(&self, from: Square, color: Color, moves: &mut Vec<Move>) {
        self.sliding_moves(from, color, &STRAIGHT_DIRS, moves);
    }

    pub(crate) fn queen_moves(&self, from: Square, color: Color, moves: &mut Vec<Move>) {
        self.sliding_moves(from, color, &STRAIGHT_DIRS, moves);
        self.sliding_moves(from, color, &DIAGONAL_DIRS, moves);
    }
}
