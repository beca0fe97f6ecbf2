//! Error type for operations that build or mutate state.
//!
//! Reducers in [`crate::stats`] signal an undefined result with `None`.
//! Constructors and training methods return [`StatsError`] so the caller
//! can tell *which* precondition failed.

use thiserror::Error;

/// Failure of a parameterized constructor or a training step.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum StatsError {
    /// A probability argument fell outside `[0, 1]` (or was NaN).
    #[error("probability must lie in [0, 1], got {0}")]
    InvalidProbability(f64),

    /// A parameter violated its domain.
    #[error("invalid parameter `{name}`: {reason}")]
    InvalidParameter {
        name: &'static str,
        reason: String,
    },

    /// A binary classifier was given a label other than 0 or 1.
    #[error("label must be 0 or 1, got {0}")]
    InvalidLabel(u8),

    /// A feature vector did not match the trained dimensionality.
    #[error("expected {expected} features, got {actual}")]
    DimensionMismatch { expected: usize, actual: usize },

    /// A distribution table hit its outcome cap before accumulating
    /// `1 − ε` of the probability mass.
    #[error("distribution table stopped after {outcomes} outcomes with cumulative mass {mass}")]
    MassNotReached { outcomes: usize, mass: f64 },
}
