//! Pawn move generation: pushes, double pushes, captures, en passant,
//! promotions.

use super::super::types::{Color, Move, Piece, Square, PROMOTION_PIECES};
use super::super::Board;

impl Board {
    pub(crate) fn pawn_moves(&self, from: Square, color: Color, moves: &mut Vec<Move>) {
        let (dir, start_rank, promo_rank): (isize, usize, usize) = match color {
            Color::White => (1, 1, 7),
            Color::Black => (-1, 6, 0),
        };

        // Forward pushes.
        if let Some(forward) = from.offset(dir, 0) {
            if self.is_empty_square(forward) {
                if forward.rank() == promo_rank {
                    for promo in PROMOTION_PIECES {
                        moves.push(Move::promotion(from, forward, promo, false));
                    }
                } else {
                    moves.push(Move::quiet(from, forward));
                    if from.rank() == start_rank {
                        if let Some(double) = from.offset(2 * dir, 0) {
                            if self.is_empty_square(double) {
                                moves.push(Move::double_pawn_push(from, double));
                            }
                        }
                    }
                }
            }
        }

        // Diagonal captures, including en passant.
        for df in [-1, 1] {
            let Some(target) = from.offset(dir, df) else {
                continue;
            };

            // The victim pawn sits beside the capturer, not on the target
            // square. Checking it keeps generation correct even when called
            // for the side not on move.
            if Some(target) == self.en_passant_target
                && self.piece_at(Square(from.rank(), target.file()))
                    == Some((color.opponent(), Piece::Pawn))
            {
                moves.push(Move::en_passant(from, target));
                continue;
            }

            match self.piece_at(target) {
                Some((victim_color, _)) if victim_color != color => {
                    if target.rank() == promo_rank {
                        for promo in PROMOTION_PIECES {
                            moves.push(Move::promotion(from, target, promo, true));
                        }
                    } else {
                        moves.push(Move::capture(from, target));
                    }
                }
                _ => {}
            }
        }
    }
}
