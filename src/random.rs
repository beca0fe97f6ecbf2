//! Shuffling and sampling without replacement.
//!
//! Every operation comes in two forms:
//!
//! - generic over [`rand::Rng`], e.g. [`shuffle_in_place`]. Pass
//!   `&mut rand::rng()` for the thread-local default generator, or
//!   [`create_rng`] for a seeded one.
//! - `_with`, taking any `FnMut() -> f64` returning values in `[0, 1)`,
//!   e.g. [`shuffle_in_place_with`]. Tests can script the exact sequence.
//!
//! # Reproducibility
//!
//! A sample drawn with [`create_rng`] is a function of its seed: rerunning
//! a report with the same seed redraws the same rows. `SmallRng` output may
//! change between `rand` releases, so persist the sample itself when it
//! has to outlive a dependency upgrade.

use rand::Rng;

/// Seeded `SmallRng` for the `R: Rng` shuffle and sample functions.
///
/// # Examples
/// ```
/// use u_stats::random::{create_rng, sample};
/// let rows = [1, 2, 3, 4, 5, 6];
/// let first = sample(&rows, 3, &mut create_rng(2024));
/// let again = sample(&rows, 3, &mut create_rng(2024));
/// assert_eq!(first, again);
/// ```
pub fn create_rng(seed: u64) -> rand::rngs::SmallRng {
    use rand::SeedableRng;
    rand::rngs::SmallRng::seed_from_u64(seed)
}

/// Fisher-Yates (Durstenfeld) in-place shuffle.
///
/// Produces a uniformly random permutation: each of the n! permutations
/// is equally likely.
///
/// # Algorithm
/// Iterates backwards, swapping each position `i` with a uniformly chosen
/// position `j ∈ [0, i]`.
///
/// Reference: Knuth (1997), *TAOCP* Vol. 2, §3.4.2, Algorithm P.
///
/// # Complexity
/// Time: O(n), Space: O(1)
///
/// # Examples
/// ```
/// use u_stats::random::{create_rng, shuffle_in_place};
/// let mut v = vec![1, 2, 3, 4, 5];
/// shuffle_in_place(&mut v, &mut create_rng(42));
/// v.sort();
/// assert_eq!(v, vec![1, 2, 3, 4, 5]);
/// ```
pub fn shuffle_in_place<T, R: Rng>(slice: &mut [T], rng: &mut R) {
    for i in (1..slice.len()).rev() {
        let j = rng.random_range(0..=i);
        slice.swap(i, j);
    }
}

/// In-place shuffle driven by a `[0, 1)` source.
///
/// Position `i` swaps with `⌊r · (i + 1)⌋`. A source that strays outside
/// `[0, 1)` is clamped to a valid index rather than trusted.
///
/// # Examples
/// ```
/// use u_stats::random::shuffle_in_place_with;
/// let mut v = [1, 2, 3, 4];
/// shuffle_in_place_with(&mut v, || 0.0);
/// assert_eq!(v, [2, 3, 4, 1]);
/// ```
pub fn shuffle_in_place_with<T, F>(slice: &mut [T], mut source: F)
where
    F: FnMut() -> f64,
{
    for i in (1..slice.len()).rev() {
        let j = ((source() * (i + 1) as f64).floor() as usize).min(i);
        slice.swap(i, j);
    }
}

/// Returns a shuffled copy of `data`; `data` is left untouched.
///
/// # Examples
/// ```
/// use u_stats::random::shuffle;
/// let data = [1, 2, 3, 4, 5];
/// let shuffled = shuffle(&data, &mut rand::rng());
/// assert_eq!(shuffled.len(), data.len());
/// ```
pub fn shuffle<T: Clone, R: Rng>(data: &[T], rng: &mut R) -> Vec<T> {
    let mut copy = data.to_vec();
    shuffle_in_place(&mut copy, rng);
    copy
}

/// Returns a copy of `data` shuffled by a `[0, 1)` source.
pub fn shuffle_with<T: Clone, F>(data: &[T], source: F) -> Vec<T>
where
    F: FnMut() -> f64,
{
    let mut copy = data.to_vec();
    shuffle_in_place_with(&mut copy, source);
    copy
}

/// Draws `n` elements of `data` without replacement.
///
/// Shuffles a copy and keeps the first `min(n, data.len())` elements.
///
/// # Examples
/// ```
/// use u_stats::random::{create_rng, sample};
/// let picked = sample(&[10, 20, 30, 40, 50], 3, &mut create_rng(7));
/// assert_eq!(picked.len(), 3);
/// assert!(picked.iter().all(|x| [10, 20, 30, 40, 50].contains(x)));
/// ```
pub fn sample<T: Clone, R: Rng>(data: &[T], n: usize, rng: &mut R) -> Vec<T> {
    let mut picked = shuffle(data, rng);
    picked.truncate(n);
    picked
}

/// [`sample`] driven by a `[0, 1)` source.
pub fn sample_with<T: Clone, F>(data: &[T], n: usize, source: F) -> Vec<T>
where
    F: FnMut() -> f64,
{
    let mut picked = shuffle_with(data, source);
    picked.truncate(n);
    picked
}

// ============================================================================
// Tests
// ============================================================================
