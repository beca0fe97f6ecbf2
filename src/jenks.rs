//! Natural breaks (Jenks) classification.
//!
//! Partitions one-dimensional data into `k` classes so that the total
//! within-class sum of squared deviations is minimal. The optimum is found
//! exactly by dynamic programming over the sorted data.
//!
//! # Algorithm
//! Fisher (1958) optimal grouping, in the matrix formulation popularized by
//! Jenks (1977):
//!
//! 1. `variance_combinations[i][j]`: minimal total within-class squared
//!    deviation for the first `i` sorted values split into `j` classes.
//! 2. `lower_class_limits[i][j]`: 1-based index of the first value of the
//!    last class in that optimal split.
//! 3. For each prefix length `l`, the candidate last class `[d, l]` grows
//!    one value at a time (`d = l, l − 1, …, 1`), so its squared deviation
//!    `Σx² − (Σx)²/w` is maintained incrementally.
//! 4. Backtracking from `lower_class_limits[n][k]` recovers the class
//!    starts.
//!
//! # Complexity
//! Time: O(n²·k), Space: O(n·k)
//!
//! # References
//! - Fisher (1958), "On Grouping for Maximum Homogeneity", *JASA* 53(284)
//! - Jenks (1977), "Optimal Data Classification for Choropleth Maps",
//!   Occasional Paper No. 2, University of Kansas

use crate::stats;

/// Dynamic-programming tables for natural breaks, both `(n + 1) × (k + 1)`.
///
/// Row `0` and column `0` are unused padding so indices read as "first `i`
/// values, `j` classes".
#[derive(Debug, Clone, PartialEq)]
pub struct JenksMatrices {
    /// 1-based start index of the last class of the optimal split.
    pub lower_class_limits: Vec<Vec<usize>>,
    /// Minimal total within-class squared deviation.
    pub variance_combinations: Vec<Vec<f64>>,
}

/// Builds the natural-breaks matrices for ascending `sorted` data and
/// `classes` classes.
///
/// Ties between candidate splits favour the smaller start index.
///
/// The caller is responsible for sorting and for keeping `Σx²` finite;
/// see [`jenks`] for the checked entry point, which rescales first.
pub fn jenks_matrices(sorted: &[f64], classes: usize) -> JenksMatrices {
    let n = sorted.len();
    let mut lower_class_limits = vec![vec![0usize; classes + 1]; n + 1];
    let mut variance_combinations = vec![vec![0.0_f64; classes + 1]; n + 1];

    if n == 0 {
        return JenksMatrices {
            lower_class_limits,
            variance_combinations,
        };
    }

    for j in 1..=classes {
        lower_class_limits[1][j] = 1;
        variance_combinations[1][j] = 0.0;
        for row in variance_combinations.iter_mut().skip(2) {
            row[j] = f64::INFINITY;
        }
    }

    for l in 2..=n {
        let mut sum = 0.0;
        let mut sum_squares = 0.0;
        let mut count = 0.0;
        let mut variance = 0.0;

        for m in 1..=l {
            let lower = l - m + 1;
            let value = sorted[lower - 1];
            count += 1.0;
            sum += value;
            sum_squares += value * value;
            variance = sum_squares - (sum * sum) / count;

            let prefix = lower - 1;
            if prefix == 0 {
                continue;
            }
            for j in 2..=classes {
                let candidate = variance + variance_combinations[prefix][j - 1];
                if variance_combinations[l][j] >= candidate {
                    lower_class_limits[l][j] = lower;
                    variance_combinations[l][j] = candidate;
                }
            }
        }

        lower_class_limits[l][1] = 1;
        variance_combinations[l][1] = variance;
    }

    JenksMatrices {
        lower_class_limits,
        variance_combinations,
    }
}

/// Recovers the `classes + 1` break values from the matrices of
/// [`jenks_matrices`].
///
/// The result starts with the minimum, continues with the first value of
/// classes `2..=k`, and ends with the maximum. With fewer distinct values
/// than classes the surplus classes are empty and their breaks collapse
/// onto the minimum.
///
/// Returns an empty vector for empty `sorted`.
pub fn jenks_breaks(sorted: &[f64], matrices: &JenksMatrices, classes: usize) -> Vec<f64> {
    let Some(&last) = sorted.last() else {
        return Vec::new();
    };
    let mut breaks = vec![0.0; classes + 1];
    breaks[classes] = last;

    let mut end = sorted.len();
    for j in (1..=classes).rev() {
        let start = matrices.lower_class_limits[end][j].max(1);
        breaks[j - 1] = sorted[start - 1];
        end = start - 1;
    }
    breaks
}

/// Natural-breaks classification of `data` into `classes` classes.
///
/// The input is copied and sorted; `data` itself is never reordered.
///
/// # Returns
/// - `None` if `classes == 0`, `classes > data.len()`, or `data` contains
///   NaN/Inf.
///
/// # Examples
/// ```
/// use u_stats::jenks::jenks;
/// let breaks = jenks(&[52.0, 1.0, 51.0, 2.0, 50.0, 3.0], 2).unwrap();
/// assert_eq!(breaks.breaks(), &[1.0, 50.0, 52.0]);
/// assert_eq!(breaks.class_of(2.5), Some(0));
/// assert_eq!(breaks.class_of(51.0), Some(1));
/// ```
pub fn jenks(data: &[f64], classes: usize) -> Option<JenksBreaks> {
    if classes == 0 || classes > data.len() {
        return None;
    }
    let sorted = stats::sorted_copy(data)?;
    tracing::debug!(n = sorted.len(), classes, "building jenks matrices");
    let matrices = jenks_matrices(&normalized(&sorted), classes);
    let breaks = jenks_breaks(&sorted, &matrices, classes);
    tracing::trace!(?breaks, "jenks breaks");
    Some(JenksBreaks { breaks })
}

/// Rescales `sorted` by a power of two so its largest magnitude is about 1.
///
/// Power-of-two scaling is exact, so every comparison in the DP comes out
/// the same while `Σx²` stays clear of overflow and underflow.
fn normalized(sorted: &[f64]) -> Vec<f64> {
    let max_abs = sorted.iter().fold(0.0_f64, |m, x| m.max(x.abs()));
    if max_abs == 0.0 {
        return sorted.to_vec();
    }
    let exponent = max_abs.log2().ceil();
    if exponent > 0.0 {
        let factor = (-exponent).exp2();
        sorted.iter().map(|x| x * factor).collect()
    } else {
        let divisor = exponent.exp2();
        sorted.iter().map(|x| x / divisor).collect()
    }
}

/// Class boundaries produced by [`jenks`].
///
/// Holds `k + 1` non-decreasing values: `breaks[0]` is the data minimum,
/// `breaks[k]` the maximum, and class `i` covers
/// `[breaks[i], breaks[i + 1])` (the last class also includes the maximum).
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct JenksBreaks {
    breaks: Vec<f64>,
}

impl JenksBreaks {
    /// The `k + 1` boundary values, ascending.
    pub fn breaks(&self) -> &[f64] {
        &self.breaks
    }

    /// Number of classes `k`.
    pub fn classes(&self) -> usize {
        self.breaks.len().saturating_sub(1)
    }

    /// Index of the class containing `x`, in `0..k`.
    ///
    /// Returns `None` if `x` is NaN or outside `[min, max]`.
    pub fn class_of(&self, x: f64) -> Option<usize> {
        let (&lo, &hi) = (self.breaks.first()?, self.breaks.last()?);
        if !(lo..=hi).contains(&x) {
            return None;
        }
        let interior = self.breaks.get(1..self.classes()).unwrap_or(&[]);
        Some(interior.partition_point(|&b| b <= x))
    }

    /// Consumes the classification, returning the boundary values.
    pub fn into_vec(self) -> Vec<f64> {
        self.breaks
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    fn data_and_classes() -> impl Strategy<Value = (Vec<f64>, usize)> {
        proptest::collection::vec(-1e3_f64..1e3, 1..30)
            .prop_flat_map(|data| {
                let n = data.len();
                (Just(data), 1..=n)
            })
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(200))]

        #[test]
        fn breaks_are_monotone_and_span_data((data, k) in data_and_classes()) {
            let breaks = jenks(&data, k).unwrap();
            let b = breaks.breaks();
            prop_assert_eq!(b.len(), k + 1);
            prop_assert!(b.windows(2).all(|w| w[0] <= w[1]));
            prop_assert_eq!(b[0], stats::min(&data).unwrap());
            prop_assert_eq!(b[k], stats::max(&data).unwrap());
        }

        #[test]
        fn breaks_are_data_values((data, k) in data_and_classes()) {
            let breaks = jenks(&data, k).unwrap();
            for b in breaks.breaks() {
                prop_assert!(data.contains(b));
            }
        }

        #[test]
        fn jenks_is_deterministic((data, k) in data_and_classes()) {
            let mut reversed = data.clone();
            reversed.reverse();
            prop_assert_eq!(jenks(&data, k), jenks(&reversed, k));
        }

        #[test]
        fn every_value_has_a_class((data, k) in data_and_classes()) {
            let breaks = jenks(&data, k).unwrap();
            for &x in &data {
                let class = breaks.class_of(x);
                prop_assert!(matches!(class, Some(c) if c < k));
            }
        }
    }
}
