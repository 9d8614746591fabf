//! Vectorizer and classifier artifacts for the spam app.

use std::collections::{HashMap, HashSet};
use std::path::Path;

use serde::Deserialize;

use crate::artifacts::{ArtifactResult, invalid, load_json};
use crate::inference::naive_bayes::MultinomialNb;

pub const VECTORIZER_FILE: &str = "spam_vectorizer.json";
pub const MODEL_FILE: &str = "spam_model.json";

/// Fixed vocabulary with idf weights, plus the stopword list the training
/// normalizer removed. Immutable at runtime.
#[derive(Debug, Deserialize)]
pub struct SpamVectorizer {
    pub vocabulary: HashMap<String, usize>,
    pub idf: Vec<f32>,
    pub stopwords: HashSet<String>,
}

impl SpamVectorizer {
    pub fn load(dir: &Path) -> ArtifactResult<Self> {
        let path = dir.join(VECTORIZER_FILE);
        let vectorizer: SpamVectorizer = load_json(&path)?;
        if vectorizer.idf.len() != vectorizer.vocabulary.len() {
            return Err(invalid(
                &path,
                format!(
                    "{} idf weights for a vocabulary of {}",
                    vectorizer.idf.len(),
                    vectorizer.vocabulary.len()
                ),
            ));
        }
        for (term, index) in &vectorizer.vocabulary {
            if *index >= vectorizer.idf.len() {
                return Err(invalid(
                    &path,
                    format!("term {term:?} maps to out-of-range index {index}"),
                ));
            }
        }
        Ok(vectorizer)
    }

    /// Term counts over the fixed vocabulary, scaled by idf. Tokens outside
    /// the vocabulary are ignored.
    pub fn transform(&self, normalized: &str) -> Vec<f32> {
        let mut features = vec![0.0; self.idf.len()];
        for token in normalized.split_whitespace() {
            if let Some(&index) = self.vocabulary.get(token) {
                features[index] += 1.0;
            }
        }
        for (value, idf) in features.iter_mut().zip(self.idf.iter()) {
            *value *= idf;
        }
        features
    }
}

/// Load the trained classifier, validated against the vectorizer width.
pub fn load_model(dir: &Path, vectorizer: &SpamVectorizer) -> ArtifactResult<MultinomialNb> {
    let path = dir.join(MODEL_FILE);
    let model: MultinomialNb = load_json(&path)?;
    model
        .validate(vectorizer.idf.len())
        .map_err(|reason| invalid(&path, reason))?;
    Ok(model)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vectorizer() -> SpamVectorizer {
        SpamVectorizer {
            vocabulary: HashMap::from([
                ("win".to_string(), 0),
                ("cash".to_string(), 1),
                ("lunch".to_string(), 2),
            ]),
            idf: vec![2.0, 1.5, 1.0],
            stopwords: HashSet::new(),
        }
    }

    #[test]
    fn transform_counts_and_scales_terms() {
        let features = vectorizer().transform("win win cash");
        assert_eq!(features, vec![4.0, 1.5, 0.0]);
    }

    #[test]
    fn transform_ignores_out_of_vocabulary_tokens() {
        let features = vectorizer().transform("win tomorrow maybe");
        assert_eq!(features, vec![2.0, 0.0, 0.0]);
    }

    #[test]
    fn load_rejects_mismatched_idf_width() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join(VECTORIZER_FILE),
            r#"{"vocabulary": {"win": 0, "cash": 1}, "idf": [1.0], "stopwords": []}"#,
        )
        .unwrap();

        assert!(SpamVectorizer::load(dir.path()).is_err());
    }

    #[test]
    fn load_rejects_out_of_range_vocabulary_indices() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join(VECTORIZER_FILE),
            r#"{"vocabulary": {"win": 5}, "idf": [1.0], "stopwords": []}"#,
        )
        .unwrap();

        assert!(SpamVectorizer::load(dir.path()).is_err());
    }

    #[test]
    fn load_model_checks_the_vocabulary_width() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join(MODEL_FILE),
            r#"{"class_log_prior": [-0.7, -0.7], "feature_log_prob": [[-1.0, -1.0], [-1.0, -1.0]]}"#,
        )
        .unwrap();

        let two_terms = SpamVectorizer {
            vocabulary: HashMap::from([("a".to_string(), 0), ("b".to_string(), 1)]),
            idf: vec![1.0, 1.0],
            stopwords: HashSet::new(),
        };
        assert!(load_model(dir.path(), &two_terms).is_ok());

        let three_terms = SpamVectorizer {
            vocabulary: HashMap::from([
                ("a".to_string(), 0),
                ("b".to_string(), 1),
                ("c".to_string(), 2),
            ]),
            idf: vec![1.0, 1.0, 1.0],
            stopwords: HashSet::new(),
        };
        assert!(load_model(dir.path(), &three_terms).is_err());
    }
}
