//! Modular position evaluation.
//!
//! The evaluation is a fixed, ordered registry of named scoring modules.
//! Each module is a pure function of a borrowed position and the weight
//! table; modules are toggled through the engine configuration, consulted
//! at evaluation time. Disabled modules are omitted from the breakdown
//! rather than reported as zero, so "not computed" and "computed as zero"
//! stay distinguishable.
//!
//! All modules score from White's perspective (positive = good for White).
//! [`evaluate`] and [`evaluate_breakdown`] negate the result when Black is
//! to move, yielding the side-to-move perspective the negamax search needs.
//! For a fixed position and module set the result is bit-for-bit
//! reproducible.

mod centre;
mod king_safety;
mod material;
mod mobility;
mod pawns;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::board::Board;
use crate::game::EngineConfig;

/// Tunable weights for the evaluation modules. The defaults come from
/// AI-vs-AI simulation tuning of the original module set.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Weights {
    /// Bonus per inner-centre square (d4/d5/e4/e5) attacked.
    pub centre_attack: f64,
    /// Bonus for occupying an inner-centre square.
    pub centre_occupy: f64,
    /// Bonus per extended-centre ring square attacked.
    pub extended_centre_attack: f64,
    /// Base bonus for a passed pawn.
    pub passed_pawn_base: f64,
    /// Passed-pawn bonus scaled by advancement squared.
    pub passed_pawn_quadratic: f64,
    /// Penalty per extra pawn stacked on one file.
    pub doubled_pawn: f64,
    /// Penalty per pawn with no friendly pawn on an adjacent file.
    pub isolated_pawn: f64,
    /// Bonus per pseudo-legal move of mobility difference.
    pub mobility_per_move: f64,
    /// Penalty for the side currently in check.
    pub check_penalty: f64,
    /// Bonus per friendly pawn sheltering the king.
    pub pawn_shield: f64,
}

impl Default for Weights {
    fn default() -> Self {
        Weights {
            centre_attack: 0.15,
            centre_occupy: 0.2,
            extended_centre_attack: 0.3,
            passed_pawn_base: 0.2,
            passed_pawn_quadratic: 0.3,
            doubled_pawn: 0.15,
            isolated_pawn: 0.1,
            mobility_per_move: 0.04,
            check_penalty: 0.5,
            pawn_shield: 0.08,
        }
    }
}

/// One entry in the module registry.
pub(crate) struct EvalModule {
    pub(crate) name: &'static str,
    score: fn(&Board, &Weights) -> f64,
}

/// The fixed, ordered module registry. Toggling happens in the engine
/// configuration; the registry itself never changes.
pub(crate) const MODULES: [EvalModule; 5] = [
    EvalModule {
        name: "material",
        score: material::score,
    },
    EvalModule {
        name: "mobility",
        score: mobility::score,
    },
    EvalModule {
        name: "centre_control",
        score: centre::score,
    },
    EvalModule {
        name: "pawn_structure",
        score: pawns::score,
    },
    EvalModule {
        name: "king_safety",
        score: king_safety::score,
    },
];

/// Number of registered evaluation modules.
pub(crate) const MODULE_COUNT: usize = MODULES.len();

/// Names of all registered modules, in registry order.
pub const MODULE_NAMES: [&str; MODULE_COUNT] = [
    "material",
    "mobility",
    "centre_control",
    "pawn_structure",
    "king_safety",
];

/// Registry index for a module name.
pub(crate) fn module_index(name: &str) -> Option<usize> {
    MODULES.iter().position(|m| m.name == name)
}

/// A single module's contribution to the total.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct ModuleScore {
    pub name: &'static str,
    pub score: f64,
}

/// Per-module decomposition of a position's score. Only enabled modules
/// appear; the total always equals the sum of the listed entries.
#[derive(Clone, Debug, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct EvalBreakdown {
    pub entries: Vec<ModuleScore>,
    pub total: f64,
}

/// Score the position from the side-to-move perspective, summing the
/// enabled modules only.
#[must_use]
pub fn evaluate(board: &Board, config: &EngineConfig) -> f64 {
    let mut total = 0.0;
    for (idx, module) in MODULES.iter().enumerate() {
        if config.module_enabled(idx) {
            total += (module.score)(board, config.weights());
        }
    }
    total * board.side_to_move().sign()
}

/// Like [`evaluate`] but retaining each enabled module's contribution.
#[must_use]
pub fn evaluate_breakdown(board: &Board, config: &EngineConfig) -> EvalBreakdown {
    let sign = board.side_to_move().sign();
    let mut entries = Vec::with_capacity(MODULE_COUNT);
    let mut total = 0.0;
    for (idx, module) in MODULES.iter().enumerate() {
        if config.module_enabled(idx) {
            let score = (module.score)(board, config.weights()) * sign;
            total += score;
            entries.push(ModuleScore {
                name: module.name,
                score,
            });
        }
    }
    EvalBreakdown { entries, total }
}
