//! Material balance.

use crate::board::{Board, Square};

use super::Weights;

/// Sum of piece values, White minus Black. The strongest single signal in
/// the evaluation; kings count for nothing (mate is the search's job).
pub(super) fn score(board: &Board, _weights: &Weights) -> f64 {
    let mut total = 0.0;
    for sq in Square::all() {
        if let Some((color, piece)) = board.piece_at(sq) {
            total += piece.value() * color.sign();
        }
    }
    total
}
