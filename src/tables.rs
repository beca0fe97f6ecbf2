//! Immutable lookup tables.
//!
//! Both tables are `static` data: initialized at compile time, never
//! mutated, and safe for unsynchronized concurrent reads.

/// One-sided cumulative standard normal probabilities Φ(z) for
/// `z = 0.00, 0.01, …, 3.09`, rounded to four decimals.
///
/// Entry `i` holds Φ(i / 100). See
/// [`cumulative_std_normal_probability`](crate::special::cumulative_std_normal_probability)
/// for the lookup rule.
pub static STANDARD_NORMAL_TABLE: [f64; 310] = [
    0.5, 0.504, 0.508, 0.512, 0.516, 0.5199, 0.5239, 0.5279, 0.5319, 0.5359,
    0.5398, 0.5438, 0.5478, 0.5517, 0.5557, 0.5596, 0.5636, 0.5675, 0.5714, 0.5753,
    0.5793, 0.5832, 0.5871, 0.591, 0.5948, 0.5987, 0.6026, 0.6064, 0.6103, 0.6141,
    0.6179, 0.6217, 0.6255, 0.6293, 0.6331, 0.6368, 0.6406, 0.6443, 0.648, 0.6517,
    0.6554, 0.6591, 0.6628, 0.6664, 0.67, 0.6736, 0.6772, 0.6808, 0.6844, 0.6879,
    0.6915, 0.695, 0.6985, 0.7019, 0.7054, 0.7088, 0.7123, 0.7157, 0.719, 0.7224,
    0.7257, 0.7291, 0.7324, 0.7357, 0.7389, 0.7422, 0.7454, 0.7486, 0.7517, 0.7549,
    0.758, 0.7611, 0.7642, 0.7673, 0.7704, 0.7734, 0.7764, 0.7794, 0.7823, 0.7852,
    0.7881, 0.791, 0.7939, 0.7967, 0.7995, 0.8023, 0.8051, 0.8078, 0.8106, 0.8133,
    0.8159, 0.8186, 0.8212, 0.8238, 0.8264, 0.8289, 0.8315, 0.834, 0.8365, 0.8389,
    0.8413, 0.8438, 0.8461, 0.8485, 0.8508, 0.8531, 0.8554, 0.8577, 0.8599, 0.8621,
    0.8643, 0.8665, 0.8686, 0.8708, 0.8729, 0.8749, 0.877, 0.879, 0.881, 0.883,
    0.8849, 0.8869, 0.8888, 0.8907, 0.8925, 0.8944, 0.8962, 0.898, 0.8997, 0.9015,
    0.9032, 0.9049, 0.9066, 0.9082, 0.9099, 0.9115, 0.9131, 0.9147, 0.9162, 0.9177,
    0.9192, 0.9207, 0.9222, 0.9236, 0.9251, 0.9265, 0.9279, 0.9292, 0.9306, 0.9319,
    0.9332, 0.9345, 0.9357, 0.937, 0.9382, 0.9394, 0.9406, 0.9418, 0.9429, 0.9441,
    0.9452, 0.9463, 0.9474, 0.9484, 0.9495, 0.9505, 0.9515, 0.9525, 0.9535, 0.9545,
    0.9554, 0.9564, 0.9573, 0.9582, 0.9591, 0.9599, 0.9608, 0.9616, 0.9625, 0.9633,
    0.9641, 0.9649, 0.9656, 0.9664, 0.9671, 0.9678, 0.9686, 0.9693, 0.9699, 0.9706,
    0.9713, 0.9719, 0.9726, 0.9732, 0.9738, 0.9744, 0.975, 0.9756, 0.9761, 0.9767,
    0.9772, 0.9778, 0.9783, 0.9788, 0.9793, 0.9798, 0.9803, 0.9808, 0.9812, 0.9817,
    0.9821, 0.9826, 0.983, 0.9834, 0.9838, 0.9842, 0.9846, 0.985, 0.9854, 0.9857,
    0.9861, 0.9864, 0.9868, 0.9871, 0.9875, 0.9878, 0.9881, 0.9884, 0.9887, 0.989,
    0.9893, 0.9896, 0.9898, 0.9901, 0.9904, 0.9906, 0.9909, 0.9911, 0.9913, 0.9916,
    0.9918, 0.992, 0.9922, 0.9925, 0.9927, 0.9929, 0.9931, 0.9932, 0.9934, 0.9936,
    0.9938, 0.994, 0.9941, 0.9943, 0.9945, 0.9946, 0.9948, 0.9949, 0.9951, 0.9952,
    0.9953, 0.9955, 0.9956, 0.9957, 0.9959, 0.996, 0.9961, 0.9962, 0.9963, 0.9964,
    0.9965, 0.9966, 0.9967, 0.9968, 0.9969, 0.997, 0.9971, 0.9972, 0.9973, 0.9974,
    0.9974, 0.9975, 0.9976, 0.9977, 0.9977, 0.9978, 0.9979, 0.9979, 0.998, 0.9981,
    0.9981, 0.9982, 0.9982, 0.9983, 0.9984, 0.9984, 0.9985, 0.9985, 0.9986, 0.9986,
    0.9987, 0.9987, 0.9987, 0.9988, 0.9988, 0.9989, 0.9989, 0.9989, 0.999, 0.999,
];

/// Upper-tail significance levels, in column order of [`CHI_SQUARED_CRITICAL`].
pub const CHI_SQUARED_SIGNIFICANCE: [f64; 11] = [
    0.995, 0.99, 0.975, 0.95, 0.9, 0.5, 0.1, 0.05, 0.025, 0.01, 0.005,
];

/// Degrees of freedom, in row order of [`CHI_SQUARED_CRITICAL`].
pub const CHI_SQUARED_DEGREES_OF_FREEDOM: [u32; 37] = [
    1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 14, 15, 16, 17, 18, 19, 20, 21, 22, 23, 24, 25,
    26, 27, 28, 29, 30, 40, 50, 60, 70, 80, 90, 100,
];

/// Critical values χ²(dof, α): the statistic above which the null
/// hypothesis is rejected at significance level α.
pub static CHI_SQUARED_CRITICAL: [[f64; 11]; 37] = [
    [0.0, 0.0, 0.0, 0.0, 0.02, 0.45, 2.71, 3.84, 5.02, 6.63, 7.88],
    [0.01, 0.02, 0.05, 0.1, 0.21, 1.39, 4.61, 5.99, 7.38, 9.21, 10.6],
    [0.07, 0.11, 0.22, 0.35, 0.58, 2.37, 6.25, 7.81, 9.35, 11.34, 12.84],
    [0.21, 0.3, 0.48, 0.71, 1.06, 3.36, 7.78, 9.49, 11.14, 13.28, 14.86],
    [0.41, 0.55, 0.83, 1.15, 1.61, 4.35, 9.24, 11.07, 12.83, 15.09, 16.75],
    [0.68, 0.87, 1.24, 1.64, 2.2, 5.35, 10.65, 12.59, 14.45, 16.81, 18.55],
    [0.99, 1.25, 1.69, 2.17, 2.83, 6.35, 12.02, 14.07, 16.01, 18.48, 20.28],
    [1.34, 1.65, 2.18, 2.73, 3.49, 7.34, 13.36, 15.51, 17.53, 20.09, 21.96],
    [1.73, 2.09, 2.7, 3.33, 4.17, 8.34, 14.68, 16.92, 19.02, 21.67, 23.59],
    [2.16, 2.56, 3.25, 3.94, 4.87, 9.34, 15.99, 18.31, 20.48, 23.21, 25.19],
    [2.6, 3.05, 3.82, 4.57, 5.58, 10.34, 17.28, 19.68, 21.92, 24.72, 26.76],
    [3.07, 3.57, 4.4, 5.23, 6.3, 11.34, 18.55, 21.03, 23.34, 26.22, 28.3],
    [3.57, 4.11, 5.01, 5.89, 7.04, 12.34, 19.81, 22.36, 24.74, 27.69, 29.82],
    [4.07, 4.66, 5.63, 6.57, 7.79, 13.34, 21.06, 23.68, 26.12, 29.14, 31.32],
    [4.6, 5.23, 6.27, 7.26, 8.55, 14.34, 22.31, 25.0, 27.49, 30.58, 32.8],
    [5.14, 5.81, 6.91, 7.96, 9.31, 15.34, 23.54, 26.3, 28.85, 32.0, 34.27],
    [5.7, 6.41, 7.56, 8.67, 10.09, 16.34, 24.77, 27.59, 30.19, 33.41, 35.72],
    [6.26, 7.01, 8.23, 9.39, 10.87, 17.34, 25.99, 28.87, 31.53, 34.81, 37.16],
    [6.84, 7.63, 8.91, 10.12, 11.65, 18.34, 27.2, 30.14, 32.85, 36.19, 38.58],
    [7.43, 8.26, 9.59, 10.85, 12.44, 19.34, 28.41, 31.41, 34.17, 37.57, 40.0],
    [8.03, 8.9, 10.28, 11.59, 13.24, 20.34, 29.62, 32.67, 35.48, 38.93, 41.4],
    [8.64, 9.54, 10.98, 12.34, 14.04, 21.34, 30.81, 33.92, 36.78, 40.29, 42.8],
    [9.26, 10.2, 11.69, 13.09, 14.85, 22.34, 32.01, 35.17, 38.08, 41.64, 44.18],
    [9.89, 10.86, 12.4, 13.85, 15.66, 23.34, 33.2, 36.42, 39.36, 42.98, 45.56],
    [10.52, 11.52, 13.12, 14.61, 16.47, 24.34, 34.28, 37.65, 40.65, 44.31, 46.93],
    [11.16, 12.2, 13.84, 15.38, 17.29, 25.34, 35.56, 38.89, 41.92, 45.64, 48.29],
    [11.81, 12.88, 14.57, 16.15, 18.11, 26.34, 36.74, 40.11, 43.19, 46.96, 49.65],
    [12.46, 13.57, 15.31, 16.93, 18.94, 27.34, 37.92, 41.34, 44.46, 48.28, 50.99],
    [13.12, 14.26, 16.05, 17.71, 19.77, 28.34, 39.09, 42.56, 45.72, 49.59, 52.34],
    [13.79, 14.95, 16.79, 18.49, 20.6, 29.34, 40.26, 43.77, 46.98, 50.89, 53.67],
    [20.71, 22.16, 24.43, 26.51, 29.05, 39.34, 51.81, 55.76, 59.34, 63.69, 66.77],
    [27.99, 29.71, 32.36, 34.76, 37.69, 49.33, 63.17, 67.5, 71.42, 76.15, 79.49],
    [35.53, 37.48, 40.48, 43.19, 46.46, 59.33, 74.4, 79.08, 83.3, 88.38, 91.95],
    [43.28, 45.44, 48.76, 51.74, 55.33, 69.33, 85.53, 90.53, 95.02, 100.42, 104.22],
    [51.17, 53.54, 57.15, 60.39, 64.28, 79.33, 96.58, 101.88, 106.63, 112.33, 116.32],
    [59.2, 61.75, 65.65, 69.13, 73.29, 89.33, 107.57, 113.14, 118.14, 124.12, 128.3],
    [67.33, 70.06, 74.22, 77.93, 82.36, 99.33, 118.5, 124.34, 129.56, 135.81, 140.17],
];

/// Looks up the chi-squared critical value for `dof` degrees of freedom at
/// significance level `significance`.
///
/// # Returns
/// - `None` if `dof` is not a tabulated row or `significance` is not one of
///   [`CHI_SQUARED_SIGNIFICANCE`].
///
/// # Examples
/// ```
/// use u_stats::tables::chi_squared_critical_value;
/// assert_eq!(chi_squared_critical_value(1, 0.05), Some(3.84));
/// assert_eq!(chi_squared_critical_value(31, 0.05), None);
/// ```
pub fn chi_squared_critical_value(dof: u32, significance: f64) -> Option<f64> {
    let row = CHI_SQUARED_DEGREES_OF_FREEDOM
        .iter()
        .position(|&d| d == dof)?;
    let col = CHI_SQUARED_SIGNIFICANCE
        .iter()
        .position(|&a| a == significance)?;
    Some(CHI_SQUARED_CRITICAL[row][col])
}
