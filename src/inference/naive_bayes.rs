//! Multinomial naive Bayes over weighted term counts.

use serde::Deserialize;

use crate::inference::dot;

/// Multinomial naive Bayes with log-space parameters.
///
/// `feature_log_prob[c][t]` is the log likelihood of term `t` under class
/// `c`; classes are scored as the prior plus the weighted sum of term
/// likelihoods and the argmax wins.
#[derive(Debug, Clone, Deserialize)]
pub struct MultinomialNb {
    pub class_log_prior: Vec<f32>,
    pub feature_log_prob: Vec<Vec<f32>>,
}

impl MultinomialNb {
    pub fn predict(&self, features: &[f32]) -> usize {
        let mut best = 0;
        let mut best_score = f32::NEG_INFINITY;
        for (class, (prior, likelihoods)) in self
            .class_log_prior
            .iter()
            .zip(self.feature_log_prob.iter())
            .enumerate()
        {
            let score = prior + dot(likelihoods, features);
            if score > best_score {
                best = class;
                best_score = score;
            }
        }
        best
    }

    /// Structural validation run at artifact load time.
    pub fn validate(&self, feature_count: usize) -> Result<(), String> {
        if self.class_log_prior.is_empty() {
            return Err("model has no classes".to_string());
        }
        if self.feature_log_prob.len() != self.class_log_prior.len() {
            return Err(format!(
                "{} classes but {} likelihood rows",
                self.class_log_prior.len(),
                self.feature_log_prob.len()
            ));
        }
        for (class, likelihoods) in self.feature_log_prob.iter().enumerate() {
            if likelihoods.len() != feature_count {
                return Err(format!(
                    "class {class} has {} likelihoods, vocabulary has {feature_count}",
                    likelihoods.len()
                ));
            }
        }
        Ok(())
    }
}
