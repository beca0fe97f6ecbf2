//! Single-layer perceptron for binary classification.
//!
//! # Algorithm
//! Rosenblatt's mistake-driven update with a unit step:
//!
//! ```text
//! ŷ = 1 if w·x + b > 0 else 0
//! e = y − ŷ
//! w ← w + e·x,  b ← b + e      (only when e ≠ 0)
//! ```
//!
//! The first training example fixes the dimensionality and seeds the
//! weights with its own feature values, with a bias of 1.
//!
//! # Reference
//! Rosenblatt (1958), "The Perceptron: A Probabilistic Model for Information
//! Storage and Organization in the Brain", *Psychological Review* 65(6)

use crate::error::StatsError;

/// Binary linear classifier trained one example at a time.
///
/// # Examples
/// ```
/// use u_stats::learn::Perceptron;
///
/// let and = [([0.0, 0.0], 0), ([0.0, 1.0], 0), ([1.0, 0.0], 0), ([1.0, 1.0], 1)];
/// let mut p = Perceptron::new();
/// for _ in 0..20 {
///     for (x, y) in &and {
///         p.train(x, *y).unwrap();
///     }
/// }
/// for (x, y) in &and {
///     assert_eq!(p.predict(x), Some(*y));
/// }
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Perceptron {
    /// One weight per feature; empty until the first training example.
    weights: Vec<f64>,
    bias: f64,
}

impl Perceptron {
    /// Creates an untrained perceptron.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Current weight vector (empty before training).
    pub fn weights(&self) -> &[f64] {
        &self.weights
    }

    /// Current bias term.
    pub fn bias(&self) -> f64 {
        self.bias
    }

    /// Whether the dimensionality has been fixed by a training example.
    pub fn is_trained(&self) -> bool {
        !self.weights.is_empty()
    }

    /// Predicts the class (0 or 1) of `features`.
    ///
    /// # Returns
    /// - `None` if the perceptron is untrained or `features` has a
    ///   different length than the weight vector.
    pub fn predict(&self, features: &[f64]) -> Option<u8> {
        if !self.is_trained() || features.len() != self.weights.len() {
            return None;
        }
        let activation: f64 = self
            .weights
            .iter()
            .zip(features)
            .map(|(w, x)| w * x)
            .sum::<f64>()
            + self.bias;
        Some(u8::from(activation > 0.0))
    }

    /// Trains on a single labelled example.
    ///
    /// # Errors
    /// - [`StatsError::InvalidLabel`] if `label` is not 0 or 1.
    /// - [`StatsError::InvalidParameter`] if `features` is empty.
    /// - [`StatsError::DimensionMismatch`] if `features` differs in length
    ///   from earlier training examples.
    pub fn train(&mut self, features: &[f64], label: u8) -> Result<&mut Self, StatsError> {
        if label > 1 {
            return Err(StatsError::InvalidLabel(label));
        }
        if features.is_empty() {
            return Err(StatsError::InvalidParameter {
                name: "features",
                reason: "at least one feature is required".into(),
            });
        }
        if !self.is_trained() {
            tracing::debug!(dimensions = features.len(), "perceptron adopting dimensionality");
            self.weights = features.to_vec();
            self.bias = 1.0;
        } else if features.len() != self.weights.len() {
            return Err(StatsError::DimensionMismatch {
                expected: self.weights.len(),
                actual: features.len(),
            });
        }

        let predicted = self.predict(features).unwrap_or(0);
        let error = f64::from(label) - f64::from(predicted);
        if error != 0.0 {
            for (w, x) in self.weights.iter_mut().zip(features) {
                *w += error * x;
            }
            self.bias += error;
            tracing::trace!(error, bias = self.bias, "perceptron weights updated");
        }
        Ok(self)
    }
}
