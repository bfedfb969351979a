//! Knight move generation.

use super::super::types::{Color, Move, Square};
use super::super::Board;

pub(crate) const KNIGHT_OFFSETS: [(isize, isize); 8] = [
    (-2, -1),
    (-2, 1),
    (-1, -2),
    (-1, 2),
    (1, -2),
    (1, 2),
    (2, -1),
    (2, 1),
];

impl Board {
    pub(crate) fn knight_moves(&self, from: Square, color: Color, moves: &mut Vec<Move>) {
        for (dr, df) in KNIGHT_OFFSETS {
            let Some(target) = from.offset(dr, df) else {
                continue;
            };
            match self.piece_at(target) {
                None => moves.push(Move::quiet(from, target)),
                Some((victim_color, _)) if victim_color != color => {
                    moves.push(Move::capture(from, target));
                }
                Some(_) => {}
            }
        }
    }
}
