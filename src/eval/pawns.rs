//! Pawn structure: passed pawns, doubled pawns, isolated pawns.

use crate::board::{Board, Color, Piece, Square};

use super::Weights;

/// No enemy pawn ahead on the same or an adjacent file.
fn is_passed(board: &Board, sq: Square, color: Color) -> bool {
    let dir: isize = match color {
        Color::White => 1,
        Color::Black => -1,
    };
    let enemy = color.opponent();

    let mut rank = sq.rank() as isize + dir;
    while (0..8).contains(&rank) {
        for df in -1isize..=1 {
            let file = sq.file() as isize + df;
            if !(0..8).contains(&file) {
                continue;
            }
            if board.piece_at(Square(rank as usize, file as usize)) == Some((enemy, Piece::Pawn)) {
                return false;
            }
        }
        rank += dir;
    }
    true
}

/// Ranks advanced from the starting rank: 0 for an unmoved pawn, 5 for a
/// pawn one step from promotion.
fn advancement(sq: Square, color: Color) -> f64 {
    match color {
        Color::White => sq.rank() as f64 - 1.0,
        Color::Black => 6.0 - sq.rank() as f64,
    }
}

/// Passed pawns earn a bonus that grows quadratically as they advance,
/// encouraging promotion pushes. Doubled and isolated pawns are penalized.
pub(super) fn score(board: &Board, weights: &Weights) -> f64 {
    let mut total = 0.0;

    // Pawns per file, per side, for the doubled/isolated terms.
    let mut file_counts = [[0u32; 8]; 2];
    for sq in Square::all() {
        if let Some((color, Piece::Pawn)) = board.piece_at(sq) {
            file_counts[color.index()][sq.file()] += 1;
        }
    }

    for sq in Square::all() {
        let Some((color, Piece::Pawn)) = board.piece_at(sq) else {
            continue;
        };
        let sign = color.sign();

        if is_passed(board, sq, color) {
            let adv = advancement(sq, color);
            total += sign * (weights.passed_pawn_base + adv * adv * weights.passed_pawn_quadratic);
        }

        let counts = &file_counts[color.index()];
        let file = sq.file();

        // Each pawn beyond the first on a file counts as doubled once.
        if counts[file] > 1 {
            total -= sign * weights.doubled_pawn * (counts[file] - 1) as f64 / counts[file] as f64;
        }

        let left = file.checked_sub(1).map_or(0, |f| counts[f]);
        let right = if file + 1 < 8 { counts[file + 1] } else { 0 };
        if left == 0 && right == 0 {
            total -= sign * weights.isolated_pawn;
        }
    }

    total
}
