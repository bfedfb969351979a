//! Engine configuration and its validation errors.

use std::fmt;

use crate::eval::{module_index, Weights, MODULE_COUNT};
use crate::search::MAX_DEPTH;

/// Default search depth in plies.
pub(crate) const DEFAULT_DEPTH: u32 = 4;

/// Default auto-deepen threshold: minimum leaf evaluations per search.
pub(crate) const DEFAULT_MIN_EVALS: u64 = 100_000;

/// Error type for configuration changes. The previous configuration is
/// always retained on failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// No evaluation module registered under this name.
    UnknownModule { name: String },
    /// Depth outside the accepted 1..=[`MAX_DEPTH`] range.
    InvalidDepth { depth: u32 },
    /// Auto-deepen threshold must be at least 1.
    InvalidThreshold { min_evals: u64 },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::UnknownModule { name } => {
                write!(f, "unknown evaluation module '{name}'")
            }
            ConfigError::InvalidDepth { depth } => {
                write!(f, "search depth must be 1..={MAX_DEPTH}, got {depth}")
            }
            ConfigError::InvalidThreshold { min_evals } => {
                write!(f, "auto-deepen threshold must be at least 1, got {min_evals}")
            }
        }
    }
}

impl std::error::Error for ConfigError {}

/// Mutable engine configuration: search depth, per-module toggles, and the
/// auto-deepen policy.
///
/// Owned by the game controller and read afresh by the search and
/// evaluation on every call, so changes take effect with the next command.
#[derive(Clone, Debug, PartialEq)]
pub struct EngineConfig {
    depth: u32,
    auto_deepen: bool,
    min_evals: u64,
    enabled: [bool; MODULE_COUNT],
    weights: Weights,
}

impl Default for EngineConfig {
    /// Default depth, every evaluation module enabled, auto-deepen off.
    fn default() -> Self {
        EngineConfig {
            depth: DEFAULT_DEPTH,
            auto_deepen: false,
            min_evals: DEFAULT_MIN_EVALS,
            enabled: [true; MODULE_COUNT],
            weights: Weights::default(),
        }
    }
}

impl EngineConfig {
    /// Configured search depth in plies.
    #[inline]
    #[must_use]
    pub const fn depth(&self) -> u32 {
        self.depth
    }

    #[inline]
    #[must_use]
    pub const fn auto_deepen(&self) -> bool {
        self.auto_deepen
    }

    /// Minimum leaf evaluations a search must perform before auto-deepen
    /// stops extending the depth.
    #[inline]
    #[must_use]
    pub const fn min_evals(&self) -> u64 {
        self.min_evals
    }

    #[inline]
    #[must_use]
    pub(crate) const fn module_enabled(&self, idx: usize) -> bool {
        self.enabled[idx]
    }

    #[inline]
    #[must_use]
    pub(crate) const fn weights(&self) -> &Weights {
        &self.weights
    }

    /// Enable or disable an evaluation module by name.
    pub fn set_module(&mut self, name: &str, enabled: bool) -> Result<(), ConfigError> {
        let idx = module_index(name).ok_or_else(|| ConfigError::UnknownModule {
            name: name.to_string(),
        })?;
        self.enabled[idx] = enabled;
        Ok(())
    }

    /// Set the fixed search depth in plies.
    pub fn set_depth(&mut self, depth: u32) -> Result<(), ConfigError> {
        if depth == 0 || depth > MAX_DEPTH {
            return Err(ConfigError::InvalidDepth { depth });
        }
        self.depth = depth;
        Ok(())
    }

    /// Enable or disable auto-deepening with its minimum-evaluations
    /// threshold.
    pub fn set_auto_deepen(&mut self, enabled: bool, min_evals: u64) -> Result<(), ConfigError> {
        if min_evals == 0 {
            return Err(ConfigError::InvalidThreshold { min_evals });
        }
        self.auto_deepen = enabled;
        self.min_evals = min_evals;
        Ok(())
    }
}
