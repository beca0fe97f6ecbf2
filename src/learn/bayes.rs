//! Frequency-count Bayesian scorer over categorical features.
//!
//! Training counts how often each `(feature, value)` pair is seen under
//! each label. Scoring sums, per label, the relative frequency of the
//! record's pairs among all training observations. The result ranks labels
//! but is not a calibrated probability: no priors, no normalization.

use std::collections::BTreeMap;

type ValueCounts = BTreeMap<String, u64>;
type FeatureCounts = BTreeMap<String, ValueCounts>;

/// Naive frequency scorer keyed by string labels, features and values.
///
/// # Examples
/// ```
/// use u_stats::learn::BayesianClassifier;
///
/// let mut bayes = BayesianClassifier::new();
/// bayes.train([("color", "red")], "apple");
/// bayes.train([("color", "yellow")], "banana");
/// bayes.train([("color", "red")], "apple");
///
/// let scores = bayes.score([("color", "red")]);
/// assert!((scores["apple"] - 2.0 / 3.0).abs() < 1e-12);
/// assert_eq!(scores["banana"], 0.0);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BayesianClassifier {
    total_count: u64,
    /// label → feature → value → occurrences
    counts: BTreeMap<String, FeatureCounts>,
}

impl BayesianClassifier {
    /// Creates a classifier with no observations.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of records trained so far.
    pub fn total_count(&self) -> u64 {
        self.total_count
    }

    /// Labels seen during training, in ascending order.
    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.counts.keys().map(String::as_str)
    }

    /// Occurrences of `feature = value` under `label`.
    pub fn count(&self, label: &str, feature: &str, value: &str) -> u64 {
        self.counts
            .get(label)
            .and_then(|features| features.get(feature))
            .and_then(|values| values.get(value))
            .copied()
            .unwrap_or(0)
    }

    /// Records one observation of `record` under `label`.
    ///
    /// A feature repeated within one record is counted once per occurrence.
    pub fn train<I, K, V>(&mut self, record: I, label: &str)
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let features = self.counts.entry(label.to_owned()).or_default();
        for (feature, value) in record {
            *features
                .entry(feature.as_ref().to_owned())
                .or_default()
                .entry(value.as_ref().to_owned())
                .or_default() += 1;
        }
        self.total_count += 1;
        tracing::trace!(label, total = self.total_count, "bayesian classifier trained");
    }

    /// Scores `record` against every known label.
    ///
    /// Each label scores `Σ count(label, feature, value) / total_count`
    /// over the record's pairs. A feature never seen under a label
    /// contributes 0 to that label. Returns an empty map before training.
    pub fn score<I, K, V>(&self, record: I) -> BTreeMap<String, f64>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let mut scores: BTreeMap<String, f64> = self
            .counts
            .keys()
            .map(|label| (label.clone(), 0.0))
            .collect();
        if self.total_count == 0 {
            return scores;
        }

        let total = self.total_count as f64;
        for (feature, value) in record {
            let (feature, value) = (feature.as_ref(), value.as_ref());
            for (label, score) in scores.iter_mut() {
                *score += self.count(label, feature, value) as f64 / total;
            }
        }
        scores
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bayes_single_observation() {
        let mut bayes = BayesianClassifier::new();
        bayes.train([("species", "cat")], "animal");
        let scores = bayes.score([("species", "cat")]);
        assert_eq!(scores.len(), 1);
        assert_eq!(scores["animal"], 1.0);
    }

    #[test]
    fn test_bayes_relative_frequencies() {
        let mut bayes = BayesianClassifier::new();
        bayes.train([("color", "red")], "apple");
        bayes.train([("color", "yellow")], "banana");
        bayes.train([("color", "red")], "apple");
        assert_eq!(bayes.total_count(), 3);

        let scores = bayes.score([("color", "red")]);
        assert!((scores["apple"] - 2.0 / 3.0).abs() < 1e-12);
        assert_eq!(scores["banana"], 0.0);

        let scores = bayes.score([("color", "yellow")]);
        assert_eq!(scores["apple"], 0.0);
        assert!((scores["banana"] - 1.0 / 3.0).abs() < 1e-12);
    }

    #[test]
    fn test_bayes_sums_over_features() {
        let mut bayes = BayesianClassifier::new();
        bayes.train([("color", "red"), ("shape", "round")], "apple");
        bayes.train([("color", "yellow"), ("shape", "long")], "banana");

        let scores = bayes.score([("color", "red"), ("shape", "round")]);
        assert!((scores["apple"] - 1.0).abs() < 1e-12);
        assert_eq!(scores["banana"], 0.0);

        // Mixed evidence splits between labels
        let scores = bayes.score([("color", "red"), ("shape", "long")]);
        assert!((scores["apple"] - 0.5).abs() < 1e-12);
        assert!((scores["banana"] - 0.5).abs() < 1e-12);
    }

    #[test]
    fn test_bayes_unknown_feature_scores_zero() {
        let mut bayes = BayesianClassifier::new();
        bayes.train([("color", "red")], "apple");
        let scores = bayes.score([("weight", "heavy")]);
        assert_eq!(scores["apple"], 0.0);
    }

    #[test]
    fn test_bayes_untrained_is_empty() {
        let bayes = BayesianClassifier::new();
        assert!(bayes.score([("color", "red")]).is_empty());
        assert_eq!(bayes.labels().count(), 0);
    }

    #[test]
    fn test_bayes_accepts_owned_strings() {
        let mut bayes = BayesianClassifier::new();
        let record = vec![("color".to_string(), "red".to_string())];
        bayes.train(record.clone(), "apple");
        assert_eq!(bayes.count("apple", "color", "red"), 1);
        assert_eq!(bayes.score(record)["apple"], 1.0);
    }

    #[test]
    fn test_bayes_labels_sorted() {
        let mut bayes = BayesianClassifier::new();
        bayes.train([("k", "v")], "zebra");
        bayes.train([("k", "v")], "ant");
        assert_eq!(bayes.labels().collect::<Vec<_>>(), vec!["ant", "zebra"]);
    }
}
