//! Piece mobility.

use crate::board::{Board, Color};

use super::Weights;

/// Pseudo-legal move count difference, scaled per move. Pseudo-legal counts
/// are used deliberately: they are cheap, deterministic, and measure how
/// much board the pieces cover regardless of whose turn it is.
pub(super) fn score(board: &Board, weights: &Weights) -> f64 {
    let white = board.pseudo_legal_moves(Color::White).len() as f64;
    let black = board.pseudo_legal_moves(Color::Black).len() as f64;
    (white - black) * weights.mobility_per_move
}
