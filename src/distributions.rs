//! Discrete probability distributions.
//!
//! Each generator returns a [`DistributionTable`]: the probability mass of
//! outcomes `0, 1, 2, …`, accumulated until the cumulative mass reaches
//! `1 − ε` (ε = [`EPSILON`]). This bounds the table for distributions with
//! infinite support such as the Poisson.
//!
//! # Supported Distributions
//!
//! | Distribution | Parameters | Support | Mean |
//! |---|---|---|---|
//! | Bernoulli | p | {0, 1} | p |
//! | Binomial | n, p | {0, …, n} | n·p |
//! | Poisson | λ | {0, 1, …} | λ |
//!
//! # Termination
//!
//! Accumulation stops after [`MAX_TABLE_OUTCOMES`] outcomes even if the
//! mass threshold has not been reached (e.g. a Poisson with a very large
//! λ). In that case the generator fails with
//! [`StatsError::MassNotReached`] rather than returning a truncated table.
//!
//! PMF terms are evaluated in log space with a running log-coefficient, so
//! large `n` or λ do not overflow intermediate factorials.

use crate::error::StatsError;
use crate::special::EPSILON;

/// Safety cap on the number of outcomes in a single table.
pub const MAX_TABLE_OUTCOMES: usize = 10_000;

/// Probability mass table over the outcomes `0, 1, …, len − 1`.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DistributionTable {
    probabilities: Vec<f64>,
}

impl DistributionTable {
    /// Probability of `outcome`, or `None` if the table stops before it.
    pub fn get(&self, outcome: usize) -> Option<f64> {
        self.probabilities.get(outcome).copied()
    }

    /// Probability of `outcome`, treating outcomes past the table as 0.
    pub fn probability(&self, outcome: usize) -> f64 {
        self.get(outcome).unwrap_or(0.0)
    }

    /// Number of tabulated outcomes.
    pub fn len(&self) -> usize {
        self.probabilities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.probabilities.is_empty()
    }

    /// Probabilities indexed by outcome.
    pub fn as_slice(&self) -> &[f64] {
        &self.probabilities
    }

    /// `(outcome, probability)` pairs in increasing outcome order.
    pub fn iter(&self) -> impl Iterator<Item = (usize, f64)> + '_ {
        self.probabilities.iter().copied().enumerate()
    }

    /// Total tabulated mass; at least `1 − ε` for every generated table.
    pub fn total_mass(&self) -> f64 {
        crate::stats::sum(&self.probabilities)
    }

    /// Expected outcome over the tabulated support, `Σ k·P(k)`.
    pub fn mean(&self) -> f64 {
        self.iter().map(|(k, p)| k as f64 * p).sum()
    }
}

/// Bernoulli distribution: a single trial succeeding with probability `p`.
///
/// Equivalent to [`binomial_distribution`] with one trial.
///
/// # Errors
/// Returns [`StatsError::InvalidProbability`] if `p ∉ [0, 1]`.
///
/// # Examples
/// ```
/// use u_stats::distributions::bernoulli_distribution;
/// let table = bernoulli_distribution(0.3).unwrap();
/// assert_eq!(table.len(), 2);
/// assert!((table.probability(0) - 0.7).abs() < 1e-12);
/// assert!((table.probability(1) - 0.3).abs() < 1e-12);
/// ```
pub fn bernoulli_distribution(p: f64) -> Result<DistributionTable, StatsError> {
    binomial_distribution(1, p)
}

/// Binomial distribution: number of successes in `trials` independent
/// trials with success probability `p`.
///
/// # Formula
/// ```text
/// P(k) = C(n, k) · pᵏ · (1 − p)ⁿ⁻ᵏ
/// ```
/// with `ln C(n, k + 1) = ln C(n, k) + ln(n − k) − ln(k + 1)`.
///
/// # Errors
/// - [`StatsError::InvalidProbability`] if `p ∉ [0, 1]`.
/// - [`StatsError::InvalidParameter`] if `trials == 0`.
/// - [`StatsError::MassNotReached`] if the outcome cap is hit first.
///
/// # Examples
/// ```
/// use u_stats::distributions::binomial_distribution;
/// let table = binomial_distribution(6, 0.3).unwrap();
/// assert!((table.probability(2) - 0.324135).abs() < 1e-9);
/// assert!(table.total_mass() >= 1.0 - 1e-4);
/// ```
pub fn binomial_distribution(trials: u64, p: f64) -> Result<DistributionTable, StatsError> {
    if !(0.0..=1.0).contains(&p) {
        return Err(StatsError::InvalidProbability(p));
    }
    if trials == 0 {
        return Err(StatsError::InvalidParameter {
            name: "trials",
            reason: "at least one trial is required".into(),
        });
    }

    let n = trials as f64;
    let q = 1.0 - p;
    let mut ln_coefficient = 0.0_f64;
    let mut outcome = 0u64;
    accumulate(|| {
        if outcome > trials {
            return None;
        }
        let k = outcome as f64;
        let ln_pmf = ln_coefficient + x_ln_y(k, p) + x_ln_y(n - k, q);
        ln_coefficient += (n - k).ln() - (k + 1.0).ln();
        outcome += 1;
        Some(ln_pmf.exp())
    })
}

/// Poisson distribution with rate `lambda`.
///
/// # Formula
/// ```text
/// P(k) = e^(−λ) · λᵏ / k!
/// ```
/// evaluated through the recurrence `ln P(k + 1) = ln P(k) + ln λ − ln(k + 1)`.
///
/// # Errors
/// - [`StatsError::InvalidParameter`] if `lambda ≤ 0` or is not finite.
/// - [`StatsError::MassNotReached`] if the outcome cap is hit first.
///
/// # Examples
/// ```
/// use u_stats::distributions::poisson_distribution;
/// let table = poisson_distribution(3.0).unwrap();
/// assert!((table.probability(0) - (-3.0_f64).exp()).abs() < 1e-12);
/// assert_eq!(table.len(), 12);
/// ```
pub fn poisson_distribution(lambda: f64) -> Result<DistributionTable, StatsError> {
    if !lambda.is_finite() || lambda <= 0.0 {
        return Err(StatsError::InvalidParameter {
            name: "lambda",
            reason: format!("must be finite and > 0, got {lambda}"),
        });
    }

    let ln_lambda = lambda.ln();
    let mut ln_pmf = -lambda;
    let mut outcome = 0u64;
    accumulate(|| {
        let current = ln_pmf;
        outcome += 1;
        ln_pmf += ln_lambda - (outcome as f64).ln();
        Some(current.exp())
    })
}

/// Pulls probabilities from `next` until the cumulative mass reaches
/// `1 − ε`, the source is exhausted, or the outcome cap is hit.
fn accumulate<F>(mut next: F) -> Result<DistributionTable, StatsError>
where
    F: FnMut() -> Option<f64>,
{
    let mut probabilities = Vec::new();
    let mut cumulative = 0.0;
    while cumulative < 1.0 - EPSILON {
        if probabilities.len() >= MAX_TABLE_OUTCOMES {
            tracing::warn!(
                outcomes = probabilities.len(),
                mass = cumulative,
                "distribution table reached outcome cap"
            );
            return Err(StatsError::MassNotReached {
                outcomes: probabilities.len(),
                mass: cumulative,
            });
        }
        let Some(p) = next() else {
            break;
        };
        cumulative += p;
        probabilities.push(p);
    }
    tracing::trace!(outcomes = probabilities.len(), mass = cumulative, "built distribution table");
    Ok(DistributionTable { probabilities })
}

/// `x · ln(y)` with the convention `0 · ln(0) = 0`.
fn x_ln_y(x: f64, y: f64) -> f64 {
    if x == 0.0 {
        0.0
    } else {
        x * y.ln()
    }
}

// ============================================================================
// Tests
// ============================================================================
