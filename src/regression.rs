//! Simple linear regression.
//!
//! Ordinary least squares for a single predictor, and the coefficient of
//! determination of any fitted function against paired data.
//!
//! Paired data is passed as a slice of `(x, y)` tuples.

/// A fitted line `y = intercept + slope · x`.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LinearFit {
    pub slope: f64,
    pub intercept: f64,
}

impl LinearFit {
    /// Evaluates the line at `x`.
    pub fn predict(&self, x: f64) -> f64 {
        self.intercept + self.slope * x
    }

    /// Returns the line as a standalone function, e.g. for [`r_squared`]
    /// or for a renderer that samples it.
    ///
    /// # Examples
    /// ```
    /// use u_stats::regression::LinearFit;
    /// let f = LinearFit { slope: 2.0, intercept: 1.0 }.line();
    /// assert_eq!(f(3.0), 7.0);
    /// ```
    pub fn line(self) -> impl Fn(f64) -> f64 {
        move |x| self.predict(x)
    }
}

/// Fits a least-squares line through `points`.
///
/// # Formula
/// ```text
/// slope     = (n·Σxy − Σx·Σy) / (n·Σx² − (Σx)²)
/// intercept = Σy/n − slope·Σx/n
/// ```
///
/// A single point is a degenerate but defined fit: slope `0` and
/// intercept equal to that point's `y`.
///
/// # Complexity
/// Time: O(n), Space: O(1)
///
/// # Returns
/// - `None` if `points` is empty, contains NaN/Inf, or every `x` is equal
///   (two or more points with a vertical, undefined slope).
///
/// # Examples
/// ```
/// use u_stats::regression::linear_regression;
/// let fit = linear_regression(&[(1.0, 1.0), (2.0, 2.0), (3.0, 3.0)]).unwrap();
/// assert!((fit.slope - 1.0).abs() < 1e-12);
/// assert!(fit.intercept.abs() < 1e-12);
/// ```
pub fn linear_regression(points: &[(f64, f64)]) -> Option<LinearFit> {
    if points.is_empty() {
        return None;
    }
    if !points.iter().all(|(x, y)| x.is_finite() && y.is_finite()) {
        return None;
    }
    if let [(_, y)] = points {
        return Some(LinearFit {
            slope: 0.0,
            intercept: *y,
        });
    }

    let n = points.len() as f64;
    let (mut sum_x, mut sum_y, mut sum_xx, mut sum_xy) = (0.0, 0.0, 0.0, 0.0);
    for &(x, y) in points {
        sum_x += x;
        sum_y += y;
        sum_xx += x * x;
        sum_xy += x * y;
    }

    let denominator = n * sum_xx - sum_x * sum_x;
    if denominator == 0.0 {
        return None;
    }
    let slope = (n * sum_xy - sum_x * sum_y) / denominator;
    let intercept = sum_y / n - slope * sum_x / n;
    Some(LinearFit { slope, intercept })
}

/// Coefficient of determination R² of `predict` against `points`.
///
/// # Formula
/// ```text
/// R² = 1 − SS_res / SS_tot
/// SS_res = Σ(yᵢ − f(xᵢ))²,  SS_tot = Σ(yᵢ − ȳ)²
/// ```
///
/// Fewer than two points are reported as a perfect fit, `Some(1.0)`: a
/// single point (or none) carries no variance for a model to miss. This
/// is a convention, not a measurement.
///
/// # Returns
/// - `None` if `SS_tot` is zero (all `y` equal) with two or more points.
///
/// # Examples
/// ```
/// use u_stats::regression::{linear_regression, r_squared};
/// let points = [(1.0, 1.0), (2.0, 2.0), (3.0, 3.0)];
/// let fit = linear_regression(&points).unwrap();
/// assert!((r_squared(&points, fit.line()).unwrap() - 1.0).abs() < 1e-12);
/// ```
pub fn r_squared<F>(points: &[(f64, f64)], predict: F) -> Option<f64>
where
    F: Fn(f64) -> f64,
{
    if points.len() < 2 {
        return Some(1.0);
    }
    let n = points.len() as f64;
    let mean_y = points.iter().map(|&(_, y)| y).sum::<f64>() / n;

    let ss_tot: f64 = points.iter().map(|&(_, y)| (y - mean_y).powi(2)).sum();
    let ss_res: f64 = points.iter().map(|&(x, y)| (y - predict(x)).powi(2)).sum();
    if ss_tot == 0.0 {
        return None;
    }
    Some(1.0 - ss_res / ss_tot)
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(300))]

        #[test]
        fn fit_recovers_exact_line(
            slope in -100.0_f64..100.0,
            intercept in -100.0_f64..100.0,
            n in 2_usize..50,
        ) {
            let points: Vec<(f64, f64)> = (0..n)
                .map(|i| (i as f64, intercept + slope * i as f64))
                .collect();
            let fit = linear_regression(&points).unwrap();
            prop_assert!((fit.slope - slope).abs() < 1e-6);
            prop_assert!((fit.intercept - intercept).abs() < 1e-6);
        }

        #[test]
        fn least_squares_r_squared_in_unit_interval(
            ys in proptest::collection::vec(-1e3_f64..1e3, 3..40),
        ) {
            let points: Vec<(f64, f64)> = ys.iter().enumerate().map(|(i, &y)| (i as f64, y)).collect();
            let fit = linear_regression(&points).unwrap();
            if let Some(r2) = r_squared(&points, fit.line()) {
                prop_assert!(r2 <= 1.0 + 1e-9);
                prop_assert!(r2 >= -1e-9);
            }
        }
    }
}
