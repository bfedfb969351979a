//! Move ordering for alpha-beta.

use crate::board::{Board, Move};

/// Ordering priority for a move; higher is searched first.
///
/// Tiers: promotions (queen first), then captures by MVV-LVA (most valuable
/// victim, least valuable attacker), then quiet moves. Good ordering is what
/// lets alpha-beta prune most of the tree.
pub(crate) fn move_priority(board: &Board, mv: Move) -> i32 {
    let mut priority = 0;

    if let Some(promo) = mv.promotion {
        priority += 900 + promo.value() as i32;
    }

    if mv.is_capture() {
        // En passant victims sit off the target square but are always pawns.
        let victim = board.piece_at(mv.to).map_or(1.0, |(_, p)| p.value());
        let attacker = board.piece_at(mv.from).map_or(0.0, |(_, p)| p.value());
        priority += 100 + victim as i32 * 10 - attacker as i32;
    }

    priority
}

/// Stable sort so equal-priority moves keep generation order; the search's
/// deterministic tie-break relies on that.
pub(crate) fn order_moves(board: &Board, moves: &mut [Move]) {
    moves.sort_by_key(|&mv| std::cmp::Reverse(move_priority(board, mv)));
}
