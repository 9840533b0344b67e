use serde::{Deserialize, Serialize};

use crate::errors::PredictError;

/// Anything that maps one feature row to the positive-class probability.
pub trait ProbabilisticClassifier {
    /// Number of inputs the classifier was fitted on.
    fn n_features(&self) -> usize;

    /// Probability of the positive class for a single row.
    fn predict_proba(&self, features: &[f64]) -> Result<f64, PredictError>;
}

// ---------------------------------------------------------------------------
// Decision trees
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TreeNode {
    Split {
        feature: usize,
        threshold: f64,
        left: usize,
        right: usize,
    },
    Leaf {
        value: f64,
    },
}

/// A fitted tree stored as a flat node array rooted at index 0. Children
/// always sit at a higher index than their parent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DecisionTree {
    pub nodes: Vec<TreeNode>,
}

impl DecisionTree {
    fn validate(&self, n_features: usize) -> Result<(), String> {
        if self.nodes.is_empty() {
            return Err("tree has no nodes".into());
        }
        for (i, node) in self.nodes.iter().enumerate() {
            match *node {
                TreeNode::Split {
                    feature,
                    threshold,
                    left,
                    right,
                } => {
                    if feature >= n_features {
                        return Err(format!(
                            "node {i} splits on feature {feature}, model has {n_features}"
                        ));
                    }
                    if !threshold.is_finite() {
                        return Err(format!("node {i} has a non-finite threshold"));
                    }
                    for child in [left, right] {
                        if child <= i || child >= self.nodes.len() {
                            return Err(format!("node {i} has invalid child {child}"));
                        }
                    }
                }
                TreeNode::Leaf { value } => {
                    if !value.is_finite() {
                        return Err(format!("leaf {i} has a non-finite value"));
                    }
                }
            }
        }
        Ok(())
    }

    /// Leaf value reached by `x`. A sample goes left when
    /// `x[feature] <= threshold`. Malformed trees are an error, never a
    /// panic or an endless walk.
    fn evaluate(&self, x: &[f64]) -> Result<f64, String> {
        let mut i = 0;
        // A well-formed path visits each node at most once.
        for _ in 0..self.nodes.len() {
            match self.nodes.get(i) {
                Some(TreeNode::Leaf { value }) => return Ok(*value),
                Some(TreeNode::Split {
                    feature,
                    threshold,
                    left,
                    right,
                }) => {
                    let v = x.get(*feature).ok_or_else(|| {
                        format!("node {i} splits on feature {feature}, row has {}", x.len())
                    })?;
                    i = if *v <= *threshold { *left } else { *right };
                }
                None => return Err(format!("node {i} does not exist")),
            }
        }
        Err("tree walk did not reach a leaf".into())
    }

    fn leaves(&self) -> impl Iterator<Item = f64> + '_ {
        self.nodes.iter().filter_map(|n| match n {
            TreeNode::Leaf { value } => Some(*value),
            TreeNode::Split { .. } => None,
        })
    }
}

// ---------------------------------------------------------------------------
// Classifier
// ---------------------------------------------------------------------------

/// A deserialized, fitted binary classifier.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Classifier {
    /// sigmoid(w·x + b)
    LogisticRegression { coefficients: Vec<f64>, intercept: f64 },
    /// Mean of the per-tree leaf probabilities.
    RandomForest {
        n_features: usize,
        trees: Vec<DecisionTree>,
    },
    /// sigmoid(base_score + learning_rate · Σ tree(x)), with `base_score`
    /// in log-odds.
    GradientBoosting {
        n_features: usize,
        base_score: f64,
        learning_rate: f64,
        trees: Vec<DecisionTree>,
    },
}

impl Classifier {
    pub fn kind(&self) -> &'static str {
        match self {
            Classifier::LogisticRegression { .. } => "logistic_regression",
            Classifier::RandomForest { .. } => "random_forest",
            Classifier::GradientBoosting { .. } => "gradient_boosting",
        }
    }

    /// Structural checks against the width of the column schema.
    pub fn validate(&self, n_columns: usize) -> Result<(), String> {
        if self.n_features() != n_columns {
            return Err(format!(
                "{} expects {} features, column schema has {n_columns}",
                self.kind(),
                self.n_features()
            ));
        }

        match self {
            Classifier::LogisticRegression {
                coefficients,
                intercept,
            } => {
                if !intercept.is_finite() || coefficients.iter().any(|c| !c.is_finite()) {
                    return Err("logistic regression has non-finite weights".into());
                }
            }
            Classifier::RandomForest { n_features, trees } => {
                if trees.is_empty() {
                    return Err("random forest has no trees".into());
                }
                for (t, tree) in trees.iter().enumerate() {
                    tree.validate(*n_features)
                        .map_err(|e| format!("tree {t}: {e}"))?;
                    if tree.leaves().any(|p| !(0.0..=1.0).contains(&p)) {
                        return Err(format!("tree {t}: leaf probability outside [0, 1]"));
                    }
                }
            }
            Classifier::GradientBoosting {
                n_features,
                base_score,
                learning_rate,
                trees,
            } => {
                if trees.is_empty() {
                    return Err("gradient boosting has no trees".into());
                }
                if !base_score.is_finite() || !learning_rate.is_finite() {
                    return Err("gradient boosting has non-finite parameters".into());
                }
                for (t, tree) in trees.iter().enumerate() {
                    tree.validate(*n_features)
                        .map_err(|e| format!("tree {t}: {e}"))?;
                }
            }
        }
        Ok(())
    }

    fn raw_probability(&self, x: &[f64]) -> Result<f64, String> {
        let p = match self {
            Classifier::LogisticRegression {
                coefficients,
                intercept,
            } => {
                let logit: f64 = coefficients
                    .iter()
                    .zip(x)
                    .map(|(w, f)| w * f)
                    .sum::<f64>()
                    + intercept;
                sigmoid(logit)
            }
            Classifier::RandomForest { trees, .. } => {
                if trees.is_empty() {
                    return Err("random forest has no trees".into());
                }
                let mut total = 0.0;
                for tree in trees {
                    total += tree.evaluate(x)?;
                }
                total / trees.len() as f64
            }
            Classifier::GradientBoosting {
                base_score,
                learning_rate,
                trees,
                ..
            } => {
                let mut margin = 0.0;
                for tree in trees {
                    margin += tree.evaluate(x)?;
                }
                sigmoid(base_score + learning_rate * margin)
            }
        };
        Ok(p)
    }
}

impl ProbabilisticClassifier for Classifier {
    fn n_features(&self) -> usize {
        match self {
            Classifier::LogisticRegression { coefficients, .. } => coefficients.len(),
            Classifier::RandomForest { n_features, .. }
            | Classifier::GradientBoosting { n_features, .. } => *n_features,
        }
    }

    fn predict_proba(&self, features: &[f64]) -> Result<f64, PredictError> {
        if features.len() != self.n_features() {
            return Err(PredictError::InferenceError(format!(
                "expected {} features, got {}",
                self.n_features(),
                features.len()
            )));
        }
        if let Some(i) = features.iter().position(|v| !v.is_finite()) {
            return Err(PredictError::InferenceError(format!(
                "feature {i} is not a finite number"
            )));
        }

        let p = self
            .raw_probability(features)
            .map_err(|e| PredictError::InferenceError(format!("{}: {e}", self.kind())))?;
        if !(0.0..=1.0).contains(&p) {
            return Err(PredictError::InferenceError(format!(
                "{} produced probability {p}",
                self.kind()
            )));
        }
        Ok(p)
    }
}

fn sigmoid(z: f64) -> f64 {
    1.0 / (1.0 + (-z).exp())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
