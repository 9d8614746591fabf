pub mod artifacts;
pub mod domain;
pub mod inference;
pub mod metadata;
pub mod models;
pub mod processing;

/// Width of the heart-disease feature vector shared by all four classifiers.
pub const HEART_FEATURE_COUNT: usize = 11;
