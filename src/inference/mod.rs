pub mod linear;
pub mod naive_bayes;
pub mod tree;

/// A binary classifier over a fixed-width feature vector.
///
/// All four heart-disease models implement this so callers can evaluate
/// them uniformly.
pub trait Classifier {
    /// Returns `true` when the positive class is predicted.
    fn predict(&self, features: &[f32]) -> bool;
}

pub(crate) fn dot(weights: &[f32], features: &[f32]) -> f32 {
    weights
        .iter()
        .zip(features.iter())
        .map(|(w, x)| w * x)
        .sum()
}
