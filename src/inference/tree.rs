//! Decision tree and random forest evaluation over serialized node arrays.

use serde::Deserialize;

use crate::inference::Classifier;

/// One node of a serialized decision tree. Children are indices into the
/// tree's node array and must point past their parent, so traversal always
/// terminates.
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum TreeNode {
    Branch {
        feature: usize,
        threshold: f32,
        left: usize,
        right: usize,
    },
    Leaf {
        class: u8,
    },
}

#[derive(Debug, Clone, Deserialize)]
pub struct DecisionTree {
    pub nodes: Vec<TreeNode>,
}

impl DecisionTree {
    /// Walk the tree from the root. Samples with a feature value at or
    /// below the threshold go left.
    pub fn predict_class(&self, features: &[f32]) -> u8 {
        let mut index = 0;
        loop {
            match &self.nodes[index] {
                TreeNode::Leaf { class } => return *class,
                TreeNode::Branch {
                    feature,
                    threshold,
                    left,
                    right,
                } => {
                    index = if features[*feature] <= *threshold {
                        *left
                    } else {
                        *right
                    };
                }
            }
        }
    }

    /// Structural validation run at artifact load time: child indices stay
    /// in bounds and point forward, feature indices fit the schema.
    pub fn validate(&self, feature_count: usize) -> Result<(), String> {
        if self.nodes.is_empty() {
            return Err("tree has no nodes".to_string());
        }
        for (index, node) in self.nodes.iter().enumerate() {
            if let TreeNode::Branch {
                feature,
                left,
                right,
                ..
            } = node
            {
                if *feature >= feature_count {
                    return Err(format!(
                        "node {index} splits on feature {feature}, schema has {feature_count}"
                    ));
                }
                for child in [*left, *right] {
                    if child >= self.nodes.len() {
                        return Err(format!("node {index} points at missing node {child}"));
                    }
                    if child <= index {
                        return Err(format!("node {index} points backwards at node {child}"));
                    }
                }
            }
        }
        Ok(())
    }
}

impl Classifier for DecisionTree {
    fn predict(&self, features: &[f32]) -> bool {
        self.predict_class(features) != 0
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct RandomForest {
    pub trees: Vec<DecisionTree>,
}

impl RandomForest {
    pub fn validate(&self, feature_count: usize) -> Result<(), String> {
        if self.trees.is_empty() {
            return Err("forest has no trees".to_string());
        }
        for (index, tree) in self.trees.iter().enumerate() {
            tree.validate(feature_count)
                .map_err(|reason| format!("tree {index}: {reason}"))?;
        }
        Ok(())
    }
}

impl Classifier for RandomForest {
    /// Majority vote; an exact tie counts as positive.
    fn predict(&self, features: &[f32]) -> bool {
        let positives = self
            .trees
            .iter()
            .filter(|tree| tree.predict(features))
            .count();
        positives * 2 >= self.trees.len()
    }
}
