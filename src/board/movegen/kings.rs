//! King move generation, including castling.

use super::super::types::{Color, Move, Piece, Square};
use super::super::Board;

impl Board {
    pub(crate) fn king_moves(&self, from: Square, color: Color, moves: &mut Vec<Move>) {
        for dr in -1..=1 {
            for df in -1..=1 {
                if dr == 0 && df == 0 {
                    continue;
                }
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

        self.castling_moves(from, color, moves);
    }

    /// Castling requires: rights still held, king on its home square, the
    /// rook in place, empty squares between them, king not currently in
    /// check, and the transit and landing squares not attacked.
    fn castling_moves(&self, from: Square, color: Color, moves: &mut Vec<Move>) {
        let home_rank = match color {
            Color::White => 0,
            Color::Black => 7,
        };
        if from != Square(home_rank, 4) {
            return;
        }
        if !self.castling.has(color, true) && !self.castling.has(color, false) {
            return;
        }
        if self.is_in_check(color) {
            return;
        }

        let enemy = color.opponent();
        let rook_at = |file: usize| self.piece_at(Square(home_rank, file)) == Some((color, Piece::Rook));
        let empty = |file: usize| self.is_empty_square(Square(home_rank, file));
        let safe = |file: usize| !self.is_square_attacked(Square(home_rank, file), enemy);

        if self.castling.has(color, true)
            && rook_at(7)
            && empty(5)
            && empty(6)
            && safe(5)
            && safe(6)
        {
            moves.push(Move::castle(from, Square(home_rank, 6), true));
        }

        if self.castling.has(color, false)
            && rook_at(0)
            && empty(1)
            && empty(2)
            && empty(3)
            && safe(2)
            && safe(3)
        {
            moves.push(Move::castle(from, Square(home_rank, 2), false));
        }
    }
}
