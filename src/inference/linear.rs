//! Linear models: logistic regression, linear SVM and the regression head
//! of the laptop price pipeline.

use serde::Deserialize;

use crate::inference::{Classifier, dot};

#[derive(Debug, Clone, Deserialize)]
pub struct LogisticRegression {
    pub weights: Vec<f32>,
    pub bias: f32,
}

impl LogisticRegression {
    pub fn decision(&self, features: &[f32]) -> f32 {
        dot(&self.weights, features) + self.bias
    }

    /// Probability of the positive class.
    pub fn probability(&self, features: &[f32]) -> f32 {
        1.0 / (1.0 + (-self.decision(features)).exp())
    }
}

impl Classifier for LogisticRegression {
    fn predict(&self, features: &[f32]) -> bool {
        self.probability(features) >= 0.5
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct LinearSvm {
    pub weights: Vec<f32>,
    pub bias: f32,
}

impl LinearSvm {
    pub fn decision(&self, features: &[f32]) -> f32 {
        dot(&self.weights, features) + self.bias
    }
}

impl Classifier for LinearSvm {
    fn predict(&self, features: &[f32]) -> bool {
        self.decision(features) >= 0.0
    }
}

/// Plain linear regressor. The laptop pipeline trains it against the
/// natural log of the price, so callers exponentiate the output.
#[derive(Debug, Clone, Deserialize)]
pub struct LinearRegressor {
    pub weights: Vec<f32>,
    pub intercept: f32,
}

impl LinearRegressor {
    pub fn predict(&self, features: &[f32]) -> f32 {
        dot(&self.weights, features) + self.intercept
    }
}
