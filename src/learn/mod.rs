//! Online learners.
//!
//! Both learners are owned values updated one observation at a time
//! through `train`. Neither locks internally; share an instance across
//! threads only behind the caller's own synchronization.
//!
//! - [`Perceptron`]: mistake-driven binary linear classifier
//! - [`BayesianClassifier`]: per-label frequency counts of categorical
//!   features, scored as unnormalized relative frequencies

pub mod bayes;
pub mod perceptron;

pub use bayes::BayesianClassifier;
pub use perceptron::Perceptron;
