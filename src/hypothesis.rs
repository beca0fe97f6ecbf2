//! Hypothesis tests.
//!
//! - [`chi_squared_goodness_of_fit`]: does integer-valued data follow a
//!   discrete distribution fitted to its own mean?
//! - [`t_test`], [`t_test_two_sample`]: Student t statistics. These return
//!   the statistic only; comparing it against a critical value is the
//!   caller's decision.

use crate::distributions::DistributionTable;
use crate::stats;
use crate::tables::chi_squared_critical_value;

/// Minimum expected count per bin before it is folded into its neighbour.
const MIN_EXPECTED_COUNT: f64 = 3.0;

/// Parameters estimated from the sample (the distribution's mean).
const ESTIMATED_PARAMETERS: usize = 1;

/// Chi-squared goodness-of-fit test of integer-valued `data` against a
/// discrete distribution.
///
/// # Algorithm
/// 1. `distribution` is called with the sample mean to produce the
///    hypothesized [`DistributionTable`] (e.g. a Poisson with λ = x̄).
/// 2. Observed counts are binned per integer value `0..=max(data)`.
///    Values past the end of the table land in its last bin, which is
///    where their zero-expectation bins would be folded anyway.
/// 3. Expected counts are `P(k) · n`.
/// 4. Tail bins with an expected count below 3 are folded into their left
///    neighbour until the last bin reaches 3 (Cochran's rule).
/// 5. `χ² = Σ (Oₖ − Eₖ)² / Eₖ` with `bins − 1 − 1` degrees of freedom
///    (one parameter estimated from the data).
///
/// # Returns
/// - `Some(true)` if χ² exceeds the critical value at `significance`,
///   i.e. the hypothesis of fit is rejected.
/// - `Some(false)` if the data is consistent with the distribution.
/// - `None` if `data` is empty or holds values that are not non-negative
///   integers, the distribution could not be built, a bin has zero expected
///   count, or the degrees of freedom / significance level are not in the
///   chi-squared table.
///
/// # Examples
/// ```
/// use u_stats::distributions::poisson_distribution;
/// use u_stats::hypothesis::chi_squared_goodness_of_fit;
///
/// // Observed goals per match, 100 matches
/// let mut data = Vec::new();
/// for (goals, matches) in [(0, 19), (1, 29), (2, 25), (3, 16), (4, 7), (5, 3), (6, 1)] {
///     data.extend(std::iter::repeat(goals as f64).take(matches));
/// }
/// let rejected = chi_squared_goodness_of_fit(&data, |mean| poisson_distribution(mean).ok(), 0.05);
/// assert_eq!(rejected, Some(false));
/// ```
pub fn chi_squared_goodness_of_fit<F>(
    data: &[f64],
    distribution: F,
    significance: f64,
) -> Option<bool>
where
    F: FnOnce(f64) -> Option<DistributionTable>,
{
    if data.iter().any(|&x| x < 0.0 || x.fract() != 0.0) {
        return None;
    }
    let sample_mean = stats::mean(data)?;
    let table = distribution(sample_mean)?;

    let last_outcome = table.len().checked_sub(1)?;
    let bin = |x: f64| (x as usize).min(last_outcome);
    let bins = bin(stats::max(data)?).checked_add(1)?;
    let mut observed = vec![0.0_f64; bins];
    for &x in data {
        observed[bin(x)] += 1.0;
    }
    let n = data.len() as f64;
    let mut expected: Vec<f64> = (0..observed.len())
        .map(|k| table.probability(k) * n)
        .collect();

    while expected.len() > 1 && expected[expected.len() - 1] < MIN_EXPECTED_COUNT {
        let (tail_expected, tail_observed) = (expected.pop()?, observed.pop()?);
        let last = expected.len() - 1;
        expected[last] += tail_expected;
        observed[last] += tail_observed;
    }
    if expected.iter().any(|&e| e <= 0.0) {
        return None;
    }

    let statistic: f64 = observed
        .iter()
        .zip(&expected)
        .map(|(o, e)| (o - e).powi(2) / e)
        .sum();

    let dof = observed.len().checked_sub(ESTIMATED_PARAMETERS + 1)?;
    let critical = chi_squared_critical_value(u32::try_from(dof).ok()?, significance)?;
    tracing::debug!(statistic, dof, critical, "chi-squared goodness of fit");
    Some(critical < statistic)
}

/// One-sample t statistic comparing the sample mean with `expected`.
///
/// # Formula
/// ```text
/// t = (x̄ − μ₀) / (σ / √n)
/// ```
/// where `σ` is the population standard deviation of the sample.
///
/// # Returns
/// - `None` if `data` is empty, contains NaN/Inf, or has zero spread.
///
/// # Examples
/// ```
/// use u_stats::hypothesis::t_test;
/// let t = t_test(&[1.0, 2.0, 3.0, 4.0, 5.0, 6.0], 3.385).unwrap();
/// assert!((t - 0.1649).abs() < 1e-3);
/// ```
pub fn t_test(data: &[f64], expected: f64) -> Option<f64> {
    let m = stats::mean(data)?;
    let sd = stats::standard_deviation(data)?;
    if sd == 0.0 {
        return None;
    }
    Some((m - expected) / (sd / (data.len() as f64).sqrt()))
}

/// Two-sample t statistic with pooled variance.
///
/// # Formula
/// ```text
/// s²ₚ = ((nₐ − 1)·s²ₐ + (n_b − 1)·s²_b) / (nₐ + n_b − 2)
/// t   = (x̄ₐ − x̄_b − d) / √(s²ₚ · (1/nₐ + 1/n_b))
/// ```
/// `difference` is the hypothesized difference of means `d` (usually 0).
/// A single-observation sample contributes no variance to the pool.
///
/// # Returns
/// - `None` if either sample is empty or non-finite, the two samples hold
///   fewer than three observations together, or the pooled variance is zero.
///
/// # Examples
/// ```
/// use u_stats::hypothesis::t_test_two_sample;
/// let a = [1.0, 2.0, 3.0, 4.0];
/// let b = [3.0, 4.0, 5.0, 6.0];
/// let t = t_test_two_sample(&a, &b, 0.0).unwrap();
/// assert!((t + 2.1909).abs() < 1e-4);
/// ```
pub fn t_test_two_sample(a: &[f64], b: &[f64], difference: f64) -> Option<f64> {
    let (na, nb) = (a.len(), b.len());
    if na + nb < 3 {
        return None;
    }
    let mean_a = stats::mean(a)?;
    let mean_b = stats::mean(b)?;
    let ss_a = stats::sum_nth_power_deviations(a, 2)?;
    let ss_b = stats::sum_nth_power_deviations(b, 2)?;

    let (na, nb) = (na as f64, nb as f64);
    let pooled = (ss_a + ss_b) / (na + nb - 2.0);
    if pooled == 0.0 {
        return None;
    }
    Some((mean_a - mean_b - difference) / (pooled * (1.0 / na + 1.0 / nb)).sqrt())
}
