//! Centre control.

use crate::board::{Board, Color, Square};

use super::Weights;

/// The four central squares: d4, e4, d5, e5.
const INNER_CENTRE: [Square; 4] = [Square(3, 3), Square(3, 4), Square(4, 3), Square(4, 4)];

/// The 12-square ring around the inner centre (c3-f3 through c6-f6).
const EXTENDED_CENTRE: [Square; 12] = [
    Square(2, 2),
    Square(2, 3),
    Square(2, 4),
    Square(2, 5),
    Square(3, 2),
    Square(3, 5),
    Square(4, 2),
    Square(4, 5),
    Square(5, 2),
    Square(5, 3),
    Square(5, 4),
    Square(5, 5),
];

/// Rewards attacking and occupying the centre. Controlling the centre
/// gives pieces scope and restricts the opponent's development.
pub(super) fn score(board: &Board, weights: &Weights) -> f64 {
    let mut total = 0.0;

    for sq in INNER_CENTRE {
        if board.is_square_attacked(sq, Color::White) {
            total += weights.centre_attack;
        }
        if board.is_square_attacked(sq, Color::Black) {
            total -= weights.centre_attack;
        }
        if let Some((color, _)) = board.piece_at(sq) {
            total += weights.centre_occupy * color.sign();
        }
    }

    for sq in EXTENDED_CENTRE {
        if board.is_square_attacked(sq, Color::White) {
            total += weights.extended_centre_attack;
        }
        if board.is_square_attacked(sq, Color::Black) {
            total -= weights.extended_centre_attack;
        }
    }

    total
}
