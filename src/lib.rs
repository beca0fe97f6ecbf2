//! # u-stats
//!
//! Statistical primitives for the U-Engine ecosystem.
//!
//! A pure function library: every operation takes plain slices of `f64`
//! and returns plain values. It owns no I/O and no global mutable state;
//! the only state lives in classifier instances the caller owns.
//!
//! ## Modules
//!
//! - [`stats`]: Descriptive statistics (means, variance family, quantiles, mode, skewness)
//! - [`regression`]: Least-squares line fit and R²
//! - [`special`]: Error function family, probit, factorial, tabulated normal CDF
//! - [`tables`]: Immutable lookup tables (standard normal, chi-squared critical values)
//! - [`distributions`]: Bernoulli, binomial and Poisson probability tables
//! - [`hypothesis`]: Chi-squared goodness of fit and t-tests
//! - [`jenks`]: Natural breaks (Jenks) classification
//! - [`learn`]: Perceptron and frequency-count Bayesian scorer
//! - [`random`]: Fisher-Yates shuffle and sampling with an injectable random source
//! - [`error`]: Error type for constructors and training
//!
//! ## Design Philosophy
//!
//! - **No silent defaults**: an undefined statistic is `None`, never `0.0`
//! - **Deterministic**: randomness is always injectable
//! - **Property-based testing**: mathematical invariants verified via proptest

pub mod distributions;
pub mod error;
pub mod hypothesis;
pub mod jenks;
pub mod learn;
pub mod random;
pub mod regression;
pub mod special;
pub mod stats;
pub mod tables;

pub use error::StatsError;
