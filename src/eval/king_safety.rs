//! King safety: check penalty and pawn shield.

use crate::board::{Board, Color, Piece, Square};

use super::Weights;

/// Friendly pawns on the three squares directly in front of the king.
fn pawn_shield(board: &Board, king: Square, color: Color) -> f64 {
    let dir: isize = match color {
        Color::White => 1,
        Color::Black => -1,
    };
    let mut count = 0;
    for df in -1isize..=1 {
        if let Some(sq) = king.offset(dir, df) {
            if board.piece_at(sq) == Some((color, Piece::Pawn)) {
                count += 1;
            }
        }
    }
    f64::from(count)
}

/// Penalizes the side whose king is in check and rewards an intact pawn
/// shield in front of each king.
pub(super) fn score(board: &Board, weights: &Weights) -> f64 {
    let mut total = 0.0;

    for color in [Color::White, Color::Black] {
        let sign = color.sign();
        if board.is_in_check(color) {
            total -= sign * weights.check_penalty;
        }
        total += sign * weights.pawn_shield * pawn_shield(board, board.king_square(color), color);
    }

    total
}
