//! Binary logistic regression restored from exported coefficients.

use ndarray::Array1;
use serde::Deserialize;

use super::{BinaryClassifier, FeatureVector, ModelError};

/// On-disk representation of a fitted binary logistic regression.
#[derive(Debug, Clone, Deserialize)]
pub struct ClassifierArtifact {
    /// `[negative_label, positive_label]`, in the order the model was fitted.
    pub classes: Vec<i64>,
    pub coef: Vec<f64>,
    pub intercept: f64,
}

#[derive(Debug)]
pub struct LogisticClassifier {
    coef: Array1<f64>,
    intercept: f64,
    negative: i64,
    positive: i64,
}

impl LogisticClassifier {
    pub fn from_artifact(artifact: ClassifierArtifact) -> Result<Self, ModelError> {
        let &[negative, positive] = artifact.classes.as_slice() else {
            return Err(ModelError::InvalidArtifact(format!(
                "expected exactly two classes, found {}",
                artifact.classes.len()
            )));
        };
        if artifact.coef.is_empty() {
            return Err(ModelError::InvalidArtifact("empty coefficient vector".into()));
        }
        if !artifact.intercept.is_finite() || artifact.coef.iter().any(|w| !w.is_finite()) {
            return Err(ModelError::InvalidArtifact(
                "non-finite coefficient or intercept".into(),
            ));
        }
        Ok(Self {
            coef: Array1::from(artifact.coef),
            intercept: artifact.intercept,
            negative,
            positive,
        })
    }

    /// Signed distance to the separating hyperplane.
    pub fn decision_function(&self, features: &FeatureVector) -> Result<f64, ModelError> {
        if features.dimension != self.coef.len() {
            return Err(ModelError::DimensionMismatch {
                expected: self.coef.len(),
                found: features.dimension,
            });
        }
        let mut score = self.intercept;
        for &(column, value) in &features.entries {
            let weight = self
                .coef
                .get(column)
                .ok_or(ModelError::FeatureOutOfRange {
                    index: column,
                    dimension: self.coef.len(),
                })?;
            score += weight * value;
        }
        Ok(score)
    }
}

impl BinaryClassifier for LogisticClassifier {
    fn dimension(&self) -> usize {
        self.coef.len()
    }

    fn predict(&self, features: &FeatureVector) -> Result<i64, ModelError> {
        let score = self.decision_function(features)?;
        tracing::trace!(score, "logistic decision");
        Ok(if score > 0.0 {
            self.positive
        } else {
            self.negative
        })
    }
}
