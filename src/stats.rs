//! Descriptive statistics.
//!
//! Every reducer signals an undefined result with `None` instead of a
//! numeric default: an empty slice, too few observations for the estimator,
//! or a value outside the function's domain all yield `None`. Callers must
//! treat `None` distinctly from a legitimate `0.0`.
//!
//! # Algorithms
//!
//! - **Sum/Mean**: Neumaier compensated summation for O(ε) error independent of n.
//! - **Variance family**: two-pass (mean first, then squared deviations).
//!   `variance` is the population estimator (denominator `n`), the `sample_*`
//!   functions apply Bessel's correction (denominator `n − 1`).
//! - **Quantile**: nearest-rank on `n·p`, averaging the two neighbouring
//!   order statistics when `n·p` lands exactly on a boundary of an
//!   even-length sample.

/// Computes the sum of `data` using Neumaier compensated summation.
///
/// The sum of an empty slice is `0.0`, the additive identity. Once the
/// running total overflows the compensation is dropped and the total
/// (`±inf`) is returned as is.
///
/// # Algorithm
/// Maintains a running compensation variable `c`. At each step, the
/// branch ensures the smaller operand's low-order bits are captured.
///
/// Reference: Neumaier (1974), "Rundungsfehleranalyse einiger Verfahren
/// zur Summation endlicher Summen", *ZAMM* 54(1), pp. 39–51.
///
/// # Complexity
/// Time: O(n), Space: O(1)
///
/// # Examples
/// ```
/// use u_stats::stats::sum;
/// assert_eq!(sum(&[1.0, 2.0, 3.0]), 6.0);
/// assert_eq!(sum(&[]), 0.0);
/// ```
pub fn sum(data: &[f64]) -> f64 {
    let mut total = 0.0_f64;
    let mut c = 0.0_f64;
    for &x in data {
        let t = total + x;
        if !t.is_finite() {
            total = t;
            continue;
        }
        if total.abs() >= x.abs() {
            c += (total - t) + x;
        } else {
            c += (x - t) + total;
        }
        total = t;
    }
    if total.is_finite() {
        total + c
    } else {
        total
    }
}

/// Computes the arithmetic mean.
///
/// # Returns
/// - `None` if `data` is empty or contains any NaN/Inf.
///
/// # Examples
/// ```
/// use u_stats::stats::mean;
/// assert_eq!(mean(&[1.0, 2.0, 3.0, 4.0, 5.0]), Some(3.0));
/// assert_eq!(mean(&[]), None);
/// ```
pub fn mean(data: &[f64]) -> Option<f64> {
    if data.is_empty() || !all_finite(data) {
        return None;
    }
    let n = data.len() as f64;
    let total = sum(data);
    if total.is_finite() {
        return Some(total / n);
    }
    // Σx overflowed: average pre-scaled terms instead
    let scaled: Vec<f64> = data.iter().map(|x| x / n).collect();
    finite(sum(&scaled))
}

/// Returns the minimum value in the slice.
///
/// # Returns
/// - `None` if `data` is empty or contains NaN.
///
/// # Examples
/// ```
/// use u_stats::stats::min;
/// assert_eq!(min(&[3.0, 1.0, 4.0, 1.0, 5.0]), Some(1.0));
/// ```
pub fn min(data: &[f64]) -> Option<f64> {
    if data.is_empty() {
        return None;
    }
    data.iter().copied().try_fold(f64::INFINITY, |acc, x| {
        if x.is_nan() {
            None
        } else {
            Some(acc.min(x))
        }
    })
}

/// Returns the maximum value in the slice.
///
/// # Returns
/// - `None` if `data` is empty or contains NaN.
///
/// # Examples
/// ```
/// use u_stats::stats::max;
/// assert_eq!(max(&[3.0, 1.0, 4.0, 1.0, 5.0]), Some(5.0));
/// ```
pub fn max(data: &[f64]) -> Option<f64> {
    if data.is_empty() {
        return None;
    }
    data.iter().copied().try_fold(f64::NEG_INFINITY, |acc, x| {
        if x.is_nan() {
            None
        } else {
            Some(acc.max(x))
        }
    })
}

/// Computes `Σ(xᵢ − x̄)ⁿ`, the building block of the moment estimators.
///
/// # Returns
/// - `None` if `data` is empty, contains NaN/Inf, or the sum overflows.
pub fn sum_nth_power_deviations(data: &[f64], n: i32) -> Option<f64> {
    let m = mean(data)?;
    let deviations: Vec<f64> = data.iter().map(|&x| (x - m).powi(n)).collect();
    finite(sum(&deviations))
}

/// Computes the population variance (denominator `n`).
///
/// # Returns
/// - `None` if `data` is empty or contains NaN/Inf.
///
/// # Examples
/// ```
/// use u_stats::stats::variance;
/// let v = [2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0];
/// assert!((variance(&v).unwrap() - 4.0).abs() < 1e-12);
/// ```
pub fn variance(data: &[f64]) -> Option<f64> {
    let ss = sum_nth_power_deviations(data, 2)?;
    Some(ss / data.len() as f64)
}

/// Computes the sample variance with Bessel's correction (denominator `n − 1`).
///
/// # Returns
/// - `None` if `data.len() < 2` or contains NaN/Inf.
///
/// # Examples
/// ```
/// use u_stats::stats::sample_variance;
/// let v = [2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0];
/// assert!((sample_variance(&v).unwrap() - 4.571428571428571).abs() < 1e-10);
/// ```
pub fn sample_variance(data: &[f64]) -> Option<f64> {
    if data.len() < 2 {
        return None;
    }
    let ss = sum_nth_power_deviations(data, 2)?;
    Some(ss / (data.len() - 1) as f64)
}

/// Population standard deviation, `sqrt(variance(data))`.
///
/// # Returns
/// - `None` if `data` is empty or contains NaN/Inf.
pub fn standard_deviation(data: &[f64]) -> Option<f64> {
    variance(data).map(f64::sqrt)
}

/// Sample standard deviation, `sqrt(sample_variance(data))`.
///
/// # Returns
/// - `None` if `data.len() < 2` or contains NaN/Inf.
pub fn sample_standard_deviation(data: &[f64]) -> Option<f64> {
    sample_variance(data).map(f64::sqrt)
}

/// Returns the most frequent value.
///
/// Ties resolve to the lowest of the tied values: the data is sorted and
/// only a strictly longer run replaces the current best.
///
/// # Complexity
/// Time: O(n log n), Space: O(n)
///
/// # Returns
/// - `None` if `data` is empty or contains NaN/Inf.
///
/// # Examples
/// ```
/// use u_stats::stats::mode;
/// assert_eq!(mode(&[3.0, 1.0, 3.0, 2.0, 1.0]), Some(1.0));
/// assert_eq!(mode(&[5.0, 5.0, 2.0]), Some(5.0));
/// ```
pub fn mode(data: &[f64]) -> Option<f64> {
    let sorted = sorted_copy(data)?;
    let mut best = sorted[0];
    let mut best_count = 0usize;
    let mut current = sorted[0];
    let mut run = 0usize;
    for &x in &sorted {
        if x == current {
            run += 1;
        } else {
            if run > best_count {
                best = current;
                best_count = run;
            }
            current = x;
            run = 1;
        }
    }
    if run > best_count {
        best = current;
    }
    Some(best)
}

/// Computes the median without mutating the input.
///
/// Returns the middle element, or the average of the two middle elements
/// for even-length data.
///
/// # Complexity
/// Time: O(n log n), Space: O(n)
///
/// # Returns
/// - `None` if `data` is empty or contains NaN/Inf.
///
/// # Examples
/// ```
/// use u_stats::stats::median;
/// assert_eq!(median(&[3.0, 1.0, 2.0]), Some(2.0));
/// assert_eq!(median(&[4.0, 1.0, 3.0, 2.0]), Some(2.5));
/// ```
pub fn median(data: &[f64]) -> Option<f64> {
    let sorted = sorted_copy(data)?;
    let n = sorted.len();
    if n % 2 == 1 {
        Some(sorted[n / 2])
    } else {
        Some(midpoint(sorted[n / 2 - 1], sorted[n / 2]))
    }
}

/// Computes the `p`-th quantile of unsorted data.
///
/// Sorts a copy and delegates to [`quantile_sorted`]. To evaluate several
/// probabilities against a single sort use [`quantiles`].
///
/// # Returns
/// - `None` if `data` is empty, contains NaN/Inf, or `p` is outside `[0, 1]`.
///
/// # Examples
/// ```
/// use u_stats::stats::quantile;
/// let data = [4.0, 1.0, 3.0, 2.0];
/// assert_eq!(quantile(&data, 0.0), Some(1.0));
/// assert_eq!(quantile(&data, 0.5), Some(2.5));
/// assert_eq!(quantile(&data, 1.0), Some(4.0));
/// ```
pub fn quantile(data: &[f64], p: f64) -> Option<f64> {
    let sorted = sorted_copy(data)?;
    quantile_sorted(&sorted, p)
}

/// Computes several quantiles with a single sort.
///
/// # Returns
/// - `None` if `data` is empty, contains NaN/Inf, or any `p` is outside `[0, 1]`.
pub fn quantiles(data: &[f64], ps: &[f64]) -> Option<Vec<f64>> {
    let sorted = sorted_copy(data)?;
    ps.iter().map(|&p| quantile_sorted(&sorted, p)).collect()
}

/// Computes the `p`-th quantile on **pre-sorted** data.
///
/// # Algorithm
/// With `idx = n·p`:
/// - `p = 0` → first element, `p = 1` → last element
/// - `idx` non-integral → `x[⌈idx⌉ − 1]`, the order statistic `idx` falls into
/// - `idx` integral, `n` even → `(x[idx − 1] + x[idx]) / 2`
/// - `idx` integral, `n` odd → `x[idx]`
///
/// The caller must guarantee that `sorted_data` is sorted in
/// non-decreasing order.
///
/// # Returns
/// - `None` if `sorted_data` is empty or `p` is outside `[0, 1]`.
///
/// # Examples
/// ```
/// use u_stats::stats::quantile_sorted;
/// let data = [1.0, 2.0, 3.0, 4.0, 5.0];
/// assert_eq!(quantile_sorted(&data, 0.5), Some(3.0));
/// assert_eq!(quantile_sorted(&[1.0, 2.0, 3.0, 4.0], 0.25), Some(1.5));
/// ```
pub fn quantile_sorted(sorted_data: &[f64], p: f64) -> Option<f64> {
    let n = sorted_data.len();
    if n == 0 || !(0.0..=1.0).contains(&p) {
        return None;
    }
    if p == 1.0 {
        return Some(sorted_data[n - 1]);
    }
    if p == 0.0 {
        return Some(sorted_data[0]);
    }

    let idx = n as f64 * p;
    if idx.fract() != 0.0 {
        let rank = idx.ceil() as usize;
        Some(sorted_data[rank - 1])
    } else {
        let i = idx as usize;
        if n % 2 == 0 {
            Some(midpoint(sorted_data[i - 1], sorted_data[i]))
        } else {
            Some(sorted_data[i])
        }
    }
}

/// Interquartile range: `quantile(0.75) − quantile(0.25)`.
///
/// # Returns
/// - `None` if `data` is empty or contains NaN/Inf.
pub fn interquartile_range(data: &[f64]) -> Option<f64> {
    let q = quantiles(data, &[0.25, 0.75])?;
    finite(q[1] - q[0])
}

/// Median absolute deviation: `median(|xᵢ − median(x)|)`.
///
/// A robust measure of spread that, unlike the standard deviation, is
/// not dominated by a few outliers.
///
/// # Returns
/// - `None` if `data` is empty or contains NaN/Inf.
///
/// # Examples
/// ```
/// use u_stats::stats::median_absolute_deviation;
/// assert_eq!(median_absolute_deviation(&[1.0, 1.0, 2.0, 2.0, 4.0, 6.0, 9.0]), Some(1.0));
/// ```
pub fn median_absolute_deviation(data: &[f64]) -> Option<f64> {
    let m = median(data)?;
    let deviations: Vec<f64> = data.iter().map(|&x| (x - m).abs()).collect();
    median(&deviations)
}

/// Computes the adjusted sample skewness (G₁).
///
/// # Formula
/// ```text
/// G₁ = n · Σ(xᵢ − x̄)³ / ((n − 1)(n − 2) · s³)
/// ```
/// where `s` is the sample standard deviation. This matches Excel `SKEW()`.
///
/// # Returns
/// - `None` if `data.len() < 3`, data contains NaN/Inf, or variance is zero.
///
/// # Examples
/// ```
/// use u_stats::stats::sample_skewness;
/// assert!(sample_skewness(&[1.0, 2.0, 3.0, 4.0, 5.0]).unwrap().abs() < 1e-14);
/// assert!(sample_skewness(&[1.0, 2.0, 3.0, 4.0, 50.0]).unwrap() > 0.0);
/// ```
pub fn sample_skewness(data: &[f64]) -> Option<f64> {
    let n = data.len();
    if n < 3 {
        return None;
    }
    let s = sample_standard_deviation(data)?;
    if s == 0.0 {
        return None;
    }
    let cubed = sum_nth_power_deviations(data, 3)?;
    let nf = n as f64;
    finite(nf * cubed / ((nf - 1.0) * (nf - 2.0) * s.powi(3)))
}

/// Computes the sample covariance (denominator `n − 1`).
///
/// # Formula
/// ```text
/// Cov(X, Y) = Σ(xᵢ − x̄)(yᵢ − ȳ) / (n − 1)
/// ```
///
/// # Returns
/// - `None` if `x.len() != y.len()`, `n < 2`, or data contains NaN/Inf.
///
/// # Examples
/// ```
/// use u_stats::stats::sample_covariance;
/// let x = [1.0, 2.0, 3.0, 4.0, 5.0];
/// let y = [2.0, 4.0, 6.0, 8.0, 10.0];
/// assert!((sample_covariance(&x, &y).unwrap() - 5.0).abs() < 1e-14);
/// ```
pub fn sample_covariance(x: &[f64], y: &[f64]) -> Option<f64> {
    let n = x.len();
    if n != y.len() || n < 2 {
        return None;
    }
    let mean_x = mean(x)?;
    let mean_y = mean(y)?;
    let products: Vec<f64> = x
        .iter()
        .zip(y)
        .map(|(&xi, &yi)| (xi - mean_x) * (yi - mean_y))
        .collect();
    finite(sum(&products) / (n - 1) as f64)
}

/// Computes the sample (Pearson) correlation coefficient.
///
/// `r = Cov(X, Y) / (s_x · s_y)` using sample estimators throughout.
///
/// # Returns
/// - `None` if the covariance is undefined or either sample has zero spread.
///
/// # Examples
/// ```
/// use u_stats::stats::sample_correlation;
/// let x = [1.0, 2.0, 3.0, 4.0];
/// let y = [10.0, 8.0, 6.0, 4.0];
/// assert!((sample_correlation(&x, &y).unwrap() + 1.0).abs() < 1e-12);
/// ```
pub fn sample_correlation(x: &[f64], y: &[f64]) -> Option<f64> {
    let cov = sample_covariance(x, y)?;
    let sx = sample_standard_deviation(x)?;
    let sy = sample_standard_deviation(y)?;
    if sx == 0.0 || sy == 0.0 {
        return None;
    }
    Some(cov / sx / sy)
}

/// Geometric mean, `(Π xᵢ)^(1/n)`.
///
/// Evaluated as `exp(mean(ln xᵢ))` so that long products do not overflow.
///
/// # Returns
/// - `None` if `data` is empty or any value is `≤ 0` or non-finite.
///
/// # Examples
/// ```
/// use u_stats::stats::geometric_mean;
/// assert!((geometric_mean(&[2.0, 8.0]).unwrap() - 4.0).abs() < 1e-12);
/// assert_eq!(geometric_mean(&[1.0, 0.0]), None);
/// ```
pub fn geometric_mean(data: &[f64]) -> Option<f64> {
    if data.is_empty() || data.iter().any(|&x| x <= 0.0 || !x.is_finite()) {
        return None;
    }
    let logs: Vec<f64> = data.iter().map(|x| x.ln()).collect();
    mean(&logs).map(f64::exp)
}

/// Harmonic mean, `n / Σ(1/xᵢ)`.
///
/// # Returns
/// - `None` if `data` is empty or any value is `≤ 0` or non-finite.
///
/// # Examples
/// ```
/// use u_stats::stats::harmonic_mean;
/// assert!((harmonic_mean(&[1.0, 4.0, 4.0]).unwrap() - 2.0).abs() < 1e-12);
/// ```
pub fn harmonic_mean(data: &[f64]) -> Option<f64> {
    if data.is_empty() || data.iter().any(|&x| x <= 0.0 || !x.is_finite()) {
        return None;
    }
    let reciprocals: Vec<f64> = data.iter().map(|x| 1.0 / x).collect();
    Some(data.len() as f64 / sum(&reciprocals))
}

/// Root mean square (quadratic mean), `sqrt(Σxᵢ² / n)`.
///
/// # Returns
/// - `None` if `data` is empty or contains NaN/Inf.
pub fn root_mean_square(data: &[f64]) -> Option<f64> {
    let squares: Vec<f64> = data.iter().map(|x| x * x).collect();
    mean(&squares).map(f64::sqrt)
}

/// Standard score of `x`: how many standard deviations it lies from `mean`.
///
/// # Returns
/// - `None` if `std_dev` is not strictly positive.
///
/// # Examples
/// ```
/// use u_stats::stats::z_score;
/// assert_eq!(z_score(78.0, 80.0, 5.0), Some(-0.4));
/// ```
pub fn z_score(x: f64, mean: f64, std_dev: f64) -> Option<f64> {
    if std_dev.is_nan() || std_dev <= 0.0 {
        return None;
    }
    Some((x - mean) / std_dev)
}

/// Splits `data` into consecutive chunks of `size` elements.
///
/// The last chunk holds the remainder and may be shorter.
///
/// # Returns
/// - `None` if `size == 0`.
///
/// # Examples
/// ```
/// use u_stats::stats::chunk;
/// let parts = chunk(&[1.0, 2.0, 3.0, 4.0, 5.0], 2).unwrap();
/// assert_eq!(parts, vec![vec![1.0, 2.0], vec![3.0, 4.0], vec![5.0]]);
/// ```
pub fn chunk(data: &[f64], size: usize) -> Option<Vec<Vec<f64>>> {
    if size == 0 {
        return None;
    }
    Some(data.chunks(size).map(<[f64]>::to_vec).collect())
}

fn all_finite(data: &[f64]) -> bool {
    data.iter().all(|x| x.is_finite())
}

/// `Some(x)` unless `x` overflowed or is NaN.
fn finite(x: f64) -> Option<f64> {
    x.is_finite().then_some(x)
}

/// Mean of two values without overflowing their sum.
fn midpoint(a: f64, b: f64) -> f64 {
    a / 2.0 + b / 2.0
}

/// Sorted copy of `data`, or `None` if it is empty or holds NaN/Inf.
pub(crate) fn sorted_copy(data: &[f64]) -> Option<Vec<f64>> {
    if data.is_empty() || !all_finite(data) {
        return None;
    }
    let mut sorted = data.to_vec();
    sorted.sort_unstable_by(f64::total_cmp);
    Some(sorted)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    // --- sum / mean ---

    #[test]
    fn test_sum_empty_is_zero() {
        assert_eq!(sum(&[]), 0.0);
    }

    #[test]
    fn test_sum_precision() {
        // Naive summation loses the 1.0
        let v = [1e16, 1.0, -1e16];
        let result = sum(&v);
        assert!((result - 1.0).abs() < 1e-10, "compensated sum lost 1.0: {result}");
    }

    #[test]
    fn test_mean_basic() {
        assert_eq!(mean(&[1.0, 2.0, 3.0, 4.0, 5.0]), Some(3.0));
        assert_eq!(mean(&[42.0]), Some(42.0));
    }

    #[test]
    fn test_mean_empty() {
        assert_eq!(mean(&[]), None);
    }

    #[test]
    fn test_mean_non_finite() {
        assert_eq!(mean(&[1.0, f64::NAN, 3.0]), None);
        assert_eq!(mean(&[1.0, f64::INFINITY, 3.0]), None);
    }

    // --- min / max ---

    #[test]
    fn test_min_max() {
        let v = [3.0, 1.0, 4.0, 1.0, 5.0, 9.0, 2.0, 6.0];
        assert_eq!(min(&v), Some(1.0));
        assert_eq!(max(&v), Some(9.0));
    }

    #[test]
    fn test_min_max_empty() {
        assert_eq!(min(&[]), None);
        assert_eq!(max(&[]), None);
    }

    #[test]
    fn test_min_max_nan() {
        assert_eq!(min(&[1.0, f64::NAN]), None);
        assert_eq!(max(&[1.0, f64::NAN]), None);
    }

    // --- variance family ---

    #[test]
    fn test_variance_population() {
        let v = [2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0];
        assert!((variance(&v).unwrap() - 4.0).abs() < 1e-12);
        assert!((standard_deviation(&v).unwrap() - 2.0).abs() < 1e-12);
    }

    #[test]
    fn test_variance_single_is_zero() {
        assert_eq!(variance(&[7.0]), Some(0.0));
    }

    #[test]
    fn test_variance_empty() {
        assert_eq!(variance(&[]), None);
        assert_eq!(standard_deviation(&[]), None);
    }

    #[test]
    fn test_sample_variance() {
        let v = [2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0];
        assert!((sample_variance(&v).unwrap() - 4.571428571428571).abs() < 1e-10);
        let sd = sample_standard_deviation(&v).unwrap();
        assert!((sd - 2.138089935299395).abs() < 1e-10);
    }

    #[test]
    fn test_sample_variance_too_short() {
        assert_eq!(sample_variance(&[]), None);
        assert_eq!(sample_variance(&[1.0]), None);
        assert_eq!(sample_standard_deviation(&[1.0]), None);
    }

    #[test]
    fn test_variance_large_offset() {
        let data: Vec<f64> = (1..=5).map(|i| 1e9 + i as f64).collect();
        let var = sample_variance(&data).unwrap();
        assert!((var - 2.5).abs() < 1e-5, "offset data variance should be ~2.5, got {var}");
    }

    #[test]
    fn test_sum_nth_power_deviations() {
        let v = [1.0, 2.0, 3.0];
        assert!((sum_nth_power_deviations(&v, 2).unwrap() - 2.0).abs() < 1e-15);
        assert!(sum_nth_power_deviations(&v, 3).unwrap().abs() < 1e-15);
        assert_eq!(sum_nth_power_deviations(&[], 2), None);
    }

    // --- mode ---

    #[test]
    fn test_mode_basic() {
        assert_eq!(mode(&[2.0, 1.0, 2.0, 3.0]), Some(2.0));
    }

    #[test]
    fn test_mode_tie_prefers_lowest() {
        assert_eq!(mode(&[3.0, 3.0, 1.0, 1.0, 2.0]), Some(1.0));
        assert_eq!(mode(&[4.0, 2.0, 3.0]), Some(2.0));
    }

    #[test]
    fn test_mode_last_run_wins_when_longest() {
        assert_eq!(mode(&[1.0, 9.0, 9.0, 9.0]), Some(9.0));
    }

    #[test]
    fn test_mode_single_and_empty() {
        assert_eq!(mode(&[8.0]), Some(8.0));
        assert_eq!(mode(&[]), None);
    }

    // --- median ---

    #[test]
    fn test_median_odd_even() {
        assert_eq!(median(&[1.0, 2.0, 3.0]), Some(2.0));
        assert_eq!(median(&[1.0, 2.0, 3.0, 4.0]), Some(2.5));
    }

    #[test]
    fn test_median_does_not_mutate() {
        let data = vec![3.0, 1.0, 2.0];
        let _ = median(&data);
        assert_eq!(data, vec![3.0, 1.0, 2.0]);
    }

    #[test]
    fn test_median_empty() {
        assert_eq!(median(&[]), None);
    }

    // --- quantile ---

    #[test]
    fn test_quantile_extremes() {
        let data = [5.0, 1.0, 4.0, 2.0, 3.0];
        assert_eq!(quantile(&data, 0.0), Some(1.0));
        assert_eq!(quantile(&data, 1.0), Some(5.0));
    }

    #[test]
    fn test_quantile_non_integral_index() {
        // n·p = 10 × 0.25 = 2.5 → x[⌈2.5⌉ − 1] = x[2]
        let data: Vec<f64> = (1..=10).map(f64::from).collect();
        assert_eq!(quantile_sorted(&data, 0.25), Some(3.0));
        // n·p = 5 × 0.5 = 2.5 → x[2]
        assert_eq!(quantile_sorted(&[1.0, 2.0, 3.0, 4.0, 5.0], 0.5), Some(3.0));
    }

    #[test]
    fn test_quantile_integral_index_even_length_averages() {
        // n·p = 4 × 0.5 = 2 → (x[1] + x[2]) / 2
        assert_eq!(quantile_sorted(&[1.0, 2.0, 3.0, 4.0], 0.5), Some(2.5));
        // n·p = 4 × 0.25 = 1 → (x[0] + x[1]) / 2
        assert_eq!(quantile_sorted(&[1.0, 2.0, 3.0, 4.0], 0.25), Some(1.5));
    }

    #[test]
    fn test_quantile_integral_index_odd_length() {
        // n·p = 5 × 0.4 = 2 → x[2], no averaging for odd n
        assert_eq!(quantile_sorted(&[10.0, 20.0, 30.0, 40.0, 50.0], 0.4), Some(30.0));
    }

    #[test]
    fn test_quantile_invalid_p() {
        assert_eq!(quantile(&[1.0, 2.0], -0.1), None);
        assert_eq!(quantile(&[1.0, 2.0], 1.1), None);
        assert_eq!(quantile(&[1.0, 2.0], f64::NAN), None);
    }

    #[test]
    fn test_quantile_empty_and_single() {
        assert_eq!(quantile(&[], 0.5), None);
        assert_eq!(quantile(&[42.0], 0.0), Some(42.0));
        assert_eq!(quantile(&[42.0], 0.5), Some(42.0));
        assert_eq!(quantile(&[42.0], 1.0), Some(42.0));
    }

    #[test]
    fn test_quantiles_many() {
        let data = [3.0, 6.0, 7.0, 8.0, 8.0, 10.0, 13.0, 15.0, 16.0, 20.0];
        let q = quantiles(&data, &[0.0, 0.25, 0.5, 0.75, 1.0]).unwrap();
        assert_eq!(q, vec![3.0, 7.0, 9.0, 15.0, 20.0]);
        assert_eq!(quantiles(&data, &[0.5, 2.0]), None);
    }

    #[test]
    fn test_interquartile_range() {
        let data = [3.0, 6.0, 7.0, 8.0, 8.0, 10.0, 13.0, 15.0, 16.0, 20.0];
        assert_eq!(interquartile_range(&data), Some(8.0));
        assert_eq!(interquartile_range(&[]), None);
    }

    #[test]
    fn test_median_absolute_deviation() {
        assert_eq!(
            median_absolute_deviation(&[1.0, 1.0, 2.0, 2.0, 4.0, 6.0, 9.0]),
            Some(1.0)
        );
        assert_eq!(median_absolute_deviation(&[]), None);
    }

    // --- skewness ---

    #[test]
    fn test_sample_skewness_known_value() {
        // n=5, mean=3.6, Σd³=63.36, s=√7.3
        // 5·63.36 / (4·3·7.3^1.5) ≈ 1.3385
        let s = sample_skewness(&[1.0, 2.0, 3.0, 4.0, 8.0]).unwrap();
        assert!((s - 1.3385).abs() < 1e-3, "expected ≈ 1.3385, got {s}");
    }

    #[test]
    fn test_sample_skewness_left_skewed() {
        let s = sample_skewness(&[-50.0, 1.0, 2.0, 3.0, 4.0]).unwrap();
        assert!(s < 0.0, "expected negative skewness, got {s}");
    }

    #[test]
    fn test_sample_skewness_edge_cases() {
        assert_eq!(sample_skewness(&[]), None);
        assert_eq!(sample_skewness(&[1.0, 2.0]), None);
        assert_eq!(sample_skewness(&[5.0, 5.0, 5.0]), None);
        assert_eq!(sample_skewness(&[1.0, f64::NAN, 3.0]), None);
    }

    // --- covariance / correlation ---

    #[test]
    fn test_sample_covariance_signs() {
        let x = [1.0, 2.0, 3.0, 4.0, 5.0];
        assert!((sample_covariance(&x, &[2.0, 4.0, 6.0, 8.0, 10.0]).unwrap() - 5.0).abs() < 1e-14);
        assert!((sample_covariance(&x, &[10.0, 8.0, 6.0, 4.0, 2.0]).unwrap() + 5.0).abs() < 1e-14);
    }

    #[test]
    fn test_sample_covariance_edge_cases() {
        assert_eq!(sample_covariance(&[], &[]), None);
        assert_eq!(sample_covariance(&[1.0], &[2.0]), None);
        assert_eq!(sample_covariance(&[1.0, 2.0], &[1.0]), None);
        assert_eq!(sample_covariance(&[1.0, f64::NAN], &[1.0, 2.0]), None);
    }

    #[test]
    fn test_sample_correlation() {
        let x = [1.0, 2.0, 3.0, 4.0, 5.0];
        let y = [2.0, 4.0, 6.0, 8.0, 10.0];
        assert!((sample_correlation(&x, &y).unwrap() - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_sample_correlation_constant_is_undefined() {
        assert_eq!(sample_correlation(&[1.0, 2.0, 3.0], &[4.0, 4.0, 4.0]), None);
    }

    // --- other means ---

    #[test]
    fn test_geometric_mean() {
        assert!((geometric_mean(&[1.0, 3.0, 9.0]).unwrap() - 3.0).abs() < 1e-12);
        assert_eq!(geometric_mean(&[]), None);
        assert_eq!(geometric_mean(&[2.0, -1.0]), None);
    }

    #[test]
    fn test_harmonic_mean() {
        assert!((harmonic_mean(&[1.0, 4.0, 4.0]).unwrap() - 2.0).abs() < 1e-12);
        assert_eq!(harmonic_mean(&[]), None);
        assert_eq!(harmonic_mean(&[1.0, 0.0]), None);
    }

    #[test]
    fn test_root_mean_square() {
        assert!((root_mean_square(&[-0.1, 5.0, -2.0, 10.0]).unwrap() - 5.6791).abs() < 1e-4);
        assert_eq!(root_mean_square(&[]), None);
    }

    #[test]
    fn test_means_ordering() {
        // HM ≤ GM ≤ AM ≤ RMS for positive data
        let data = [1.0, 2.0, 4.0, 8.0];
        let hm = harmonic_mean(&data).unwrap();
        let gm = geometric_mean(&data).unwrap();
        let am = mean(&data).unwrap();
        let rms = root_mean_square(&data).unwrap();
        assert!(hm <= gm && gm <= am && am <= rms);
    }

    // --- z_score / chunk ---

    #[test]
    fn test_z_score() {
        assert_eq!(z_score(78.0, 80.0, 5.0), Some(-0.4));
        assert_eq!(z_score(1.0, 0.0, 0.0), None);
        assert_eq!(z_score(1.0, 0.0, -1.0), None);
    }

    #[test]
    fn test_chunk() {
        assert_eq!(chunk(&[1.0, 2.0, 3.0], 0), None);
        assert_eq!(chunk(&[], 3), Some(vec![]));
        assert_eq!(
            chunk(&[1.0, 2.0, 3.0, 4.0], 2),
            Some(vec![vec![1.0, 2.0], vec![3.0, 4.0]])
        );
    }

    #[test]
    fn test_sum_overflow_stays_infinite() {
        assert_eq!(sum(&[1e308, 1e308]), f64::INFINITY);
        assert_eq!(sum(&[-1e308, -1e308]), f64::NEG_INFINITY);
        assert_eq!(sum(&[1e308, 1e308, -1e308]), f64::INFINITY);
    }

    #[test]
    fn test_mean_large_values() {
        assert_eq!(mean(&[1e308, 1e308]), Some(1e308));
        assert_eq!(median(&[1e308, 1e308]), Some(1e308));
    }

    #[test]
    fn test_moments_overflow_is_none() {
        let extreme = [1e308, -1e308];
        assert_eq!(variance(&extreme), None);
        assert_eq!(sample_variance(&extreme), None);
        assert_eq!(standard_deviation(&extreme), None);
        assert_eq!(sample_covariance(&extreme, &extreme), None);
        assert_eq!(sample_skewness(&[1e308, -1e308, 0.0]), None);
        assert_eq!(interquartile_range(&[-1e308, -1e308, 1e308, 1e308]), None);
    }

    #[test]
    fn test_order_statistics_reject_infinity() {
        let inf = f64::INFINITY;
        assert_eq!(median(&[inf, f64::NEG_INFINITY]), None);
        assert_eq!(quantile(&[1.0, inf], 0.5), None);
        assert_eq!(quantiles(&[1.0, inf], &[0.25, 0.75]), None);
        assert_eq!(interquartile_range(&[inf; 4]), None);
        assert_eq!(mode(&[inf, inf, 1.0]), None);
        assert_eq!(median_absolute_deviation(&[1.0, inf]), None);
    }
}
