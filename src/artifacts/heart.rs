//! The four independently trained heart-disease classifiers.

use std::path::Path;

use crate::HEART_FEATURE_COUNT;
use crate::artifacts::{ArtifactResult, invalid, load_json};
use crate::inference::Classifier;
use crate::inference::linear::{LinearSvm, LogisticRegression};
use crate::inference::tree::{DecisionTree, RandomForest};

pub const LOGISTIC_REGRESSION_FILE: &str = "heart_logistic_regression.json";
pub const SVM_FILE: &str = "heart_svm.json";
pub const DECISION_TREE_FILE: &str = "heart_decision_tree.json";
pub const RANDOM_FOREST_FILE: &str = "heart_random_forest.json";

/// All four classifiers share the same 11-feature input schema.
#[derive(Debug)]
pub struct HeartModels {
    pub logistic: LogisticRegression,
    pub svm: LinearSvm,
    pub tree: DecisionTree,
    pub forest: RandomForest,
}

impl HeartModels {
    pub fn load(dir: &Path) -> ArtifactResult<Self> {
        Ok(Self {
            logistic: load_logistic_regression(dir)?,
            svm: load_svm(dir)?,
            tree: load_decision_tree(dir)?,
            forest: load_random_forest(dir)?,
        })
    }

    /// The models paired with their display names, in presentation order.
    pub fn named(&self) -> [(&'static str, &dyn Classifier); 4] {
        [
            ("Logistic Regression", &self.logistic),
            ("Support Vector Machine", &self.svm),
            ("Decision Tree", &self.tree),
            ("Random Forest", &self.forest),
        ]
    }
}

/// The bulk CSV path only needs the logistic regression model.
pub fn load_logistic_regression(dir: &Path) -> ArtifactResult<LogisticRegression> {
    let path = dir.join(LOGISTIC_REGRESSION_FILE);
    let model: LogisticRegression = load_json(&path)?;
    if model.weights.len() != HEART_FEATURE_COUNT {
        return Err(invalid(
            &path,
            format!(
                "{} weights, schema has {HEART_FEATURE_COUNT} features",
                model.weights.len()
            ),
        ));
    }
    Ok(model)
}

fn load_svm(dir: &Path) -> ArtifactResult<LinearSvm> {
    let path = dir.join(SVM_FILE);
    let model: LinearSvm = load_json(&path)?;
    if model.weights.len() != HEART_FEATURE_COUNT {
        return Err(invalid(
            &path,
            format!(
                "{} weights, schema has {HEART_FEATURE_COUNT} features",
                model.weights.len()
            ),
        ));
    }
    Ok(model)
}

fn load_decision_tree(dir: &Path) -> ArtifactResult<DecisionTree> {
    let path = dir.join(DECISION_TREE_FILE);
    let model: DecisionTree = load_json(&path)?;
    model
        .validate(HEART_FEATURE_COUNT)
        .map_err(|reason| invalid(&path, reason))?;
    Ok(model)
}

fn load_random_forest(dir: &Path) -> ArtifactResult<RandomForest> {
    let path = dir.join(RANDOM_FOREST_FILE);
    let model: RandomForest = load_json(&path)?;
    model
        .validate(HEART_FEATURE_COUNT)
        .map_err(|reason| invalid(&path, reason))?;
    Ok(model)
}

#[cfg(test)]
mod tests {
    use super::*;

    const ELEVEN_WEIGHTS: &str = "[0.1, 0.0, 0.2, 0.0, 0.0, 0.1, 0.0, -0.1, 0.3, 0.5, 0.2]";

    fn write_linear(dir: &Path, file: &str, weights: &str) {
        std::fs::write(
            dir.join(file),
            format!(r#"{{"weights": {weights}, "bias": -0.5}}"#),
        )
        .unwrap();
    }

    #[test]
    fn loads_a_full_model_set() {
        let dir = tempfile::tempdir().unwrap();
        write_linear(dir.path(), LOGISTIC_REGRESSION_FILE, ELEVEN_WEIGHTS);
        write_linear(dir.path(), SVM_FILE, ELEVEN_WEIGHTS);
        let stump = r#"{"nodes": [
            {"kind": "branch", "feature": 9, "threshold": 1.0, "left": 1, "right": 2},
            {"kind": "leaf", "class": 0},
            {"kind": "leaf", "class": 1}
        ]}"#;
        std::fs::write(dir.path().join(DECISION_TREE_FILE), stump).unwrap();
        std::fs::write(
            dir.path().join(RANDOM_FOREST_FILE),
            format!(r#"{{"trees": [{stump}, {stump}]}}"#),
        )
        .unwrap();

        let models = HeartModels::load(dir.path()).expect("models should load");
        assert_eq!(models.named().len(), 4);
    }

    #[test]
    fn rejects_a_weight_vector_of_the_wrong_width() {
        let dir = tempfile::tempdir().unwrap();
        write_linear(dir.path(), LOGISTIC_REGRESSION_FILE, "[0.1, 0.2]");
        assert!(load_logistic_regression(dir.path()).is_err());
    }

    #[test]
    fn rejects_a_tree_splitting_past_the_schema() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join(DECISION_TREE_FILE),
            r#"{"nodes": [
                {"kind": "branch", "feature": 11, "threshold": 1.0, "left": 1, "right": 2},
                {"kind": "leaf", "class": 0},
                {"kind": "leaf", "class": 1}
            ]}"#,
        )
        .unwrap();
        assert!(load_decision_tree(dir.path()).is_err());
    }
}
