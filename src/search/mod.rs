//! Adversarial tree search.
//!
//! Negamax with alpha-beta pruning over the legal move set, scored by the
//! modular evaluation at the leaves. Depth is fixed by configuration, or
//! extended one ply at a time in auto-deepen mode until the search has
//! performed a minimum number of leaf evaluations (bounded by a hard depth
//! ceiling so sparse positions cannot stall the caller).
//!
//! The search is fully deterministic: moves are explored in a stable order
//! (promotions, then captures by MVV-LVA, then quiet moves in generation
//! order) and ties are broken by keeping the first move examined.

mod move_order;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::board::{Board, Move};
use crate::eval;
use crate::game::EngineConfig;

use move_order::order_moves;

/// Maximum configurable search depth in plies.
pub const MAX_DEPTH: u32 = 10;

/// Hard ceiling for auto-deepening, bounding worst-case latency on sparse
/// positions such as near-endgames.
pub const AUTO_DEEPEN_CEILING: u32 = 8;

/// Score assigned to delivering checkmate. Mates found earlier in the tree
/// score higher than later ones.
pub(crate) const MATE_SCORE: f64 = 100_000.0;

macro_rules! search_debug {
    ($($arg:tt)*) => {{
        #[cfg(feature = "logging")]
        log::debug!($($arg)*);
    }};
}

/// Outcome of one search invocation.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SearchResult {
    /// Best move found, or `None` when the position has no legal moves.
    pub best_move: Option<Move>,
    /// Score of the chosen line from the searched side's perspective.
    pub score: f64,
    /// Leaf evaluations performed by the last completed iteration.
    pub evals: u64,
    /// Depth in plies the last completed iteration searched to.
    pub depth: u32,
}

/// Score a search leaf: terminal positions get rule-level scores (mate
/// preferred sooner, draws neutral), everything else goes through the
/// enabled evaluation modules.
fn evaluate_leaf(board: &Board, config: &EngineConfig, ply: u32) -> f64 {
    if board.halfmove_clock() >= 100 || board.has_insufficient_material() {
        return 0.0;
    }
    if board.legal_moves().is_empty() {
        return if board.is_in_check(board.side_to_move()) {
            -(MATE_SCORE - f64::from(ply))
        } else {
            0.0
        };
    }
    eval::evaluate(board, config)
}

/// Negamax with alpha-beta pruning. Scores are always from the perspective
/// of the side to move; each recursion negates, which collapses the
/// maximizing/minimizing alternation into one branch.
fn negamax(
    board: &Board,
    depth: u32,
    ply: u32,
    mut alpha: f64,
    beta: f64,
    config: &EngineConfig,
    evals: &mut u64,
) -> f64 {
    if depth == 0 {
        *evals += 1;
        return evaluate_leaf(board, config, ply);
    }

    if board.halfmove_clock() >= 100 || board.has_insufficient_material() {
        *evals += 1;
        return 0.0;
    }

    let mut moves = board.legal_moves();
    if moves.is_empty() {
        *evals += 1;
        return if board.is_in_check(board.side_to_move()) {
            -(MATE_SCORE - f64::from(ply))
        } else {
            0.0
        };
    }

    order_moves(board, &mut moves);

    let mut best = f64::NEG_INFINITY;
    for mv in moves {
        let child = board.apply(mv);
        let score = -negamax(&child, depth - 1, ply + 1, -beta, -alpha, config, evals);
        if score > best {
            best = score;
        }
        if score > alpha {
            alpha = score;
        }
        if alpha >= beta {
            break;
        }
    }

    best
}

/// Search to an explicitly supplied depth, ignoring the configured depth
/// and auto-deepen policy. This is the hint path; it shares every line of
/// the move-selection algorithm and never mutates the position.
#[must_use]
pub fn search_at_depth(board: &Board, depth: u32, config: &EngineConfig) -> SearchResult {
    // A zero-ply search degenerates to a one-ply search of ordered leaves.
    let depth = depth.max(1);
    let mut evals = 0u64;

    let mut moves = board.legal_moves();
    if moves.is_empty() {
        return SearchResult {
            best_move: None,
            score: evaluate_leaf(board, config, 0),
            evals: 1,
            depth,
        };
    }

    order_moves(board, &mut moves);

    // Strict improvement only: among equal scores the first move in the
    // ordered generation sequence wins, making repeated searches on the
    // same input reproducible.
    let mut best_move = moves[0];
    let mut best_score = f64::NEG_INFINITY;
    let mut alpha = f64::NEG_INFINITY;
    for mv in moves {
        let child = board.apply(mv);
        let score = -negamax(&child, depth - 1, 1, f64::NEG_INFINITY, -alpha, config, &mut evals);
        if score > best_score {
            best_score = score;
            best_move = mv;
        }
        if score > alpha {
            alpha = score;
        }
    }

    SearchResult {
        best_move: Some(best_move),
        score: best_score,
        evals,
        depth,
    }
}

/// Select the best move under the current configuration.
///
/// In auto-deepen mode the fixed-depth search is re-run one ply deeper
/// until its leaf-evaluation count reaches the configured threshold or the
/// depth hits [`AUTO_DEEPEN_CEILING`]; the returned counters describe the
/// last completed iteration.
#[must_use]
pub fn search(board: &Board, config: &EngineConfig) -> SearchResult {
    let mut depth = config.depth();
    let mut result = search_at_depth(board, depth, config);
    search_debug!(
        "search depth {} evals {} score {:.3}",
        result.depth,
        result.evals,
        result.score
    );

    if config.auto_deepen() {
        while result.best_move.is_some()
            && result.evals < config.min_evals()
            && depth < AUTO_DEEPEN_CEILING
        {
            depth += 1;
            result = search_at_depth(board, depth, config);
            search_debug!(
                "auto-deepen to depth {} evals {} score {:.3}",
                result.depth,
                result.evals,
                result.score
            );
        }
    }

    result
}
