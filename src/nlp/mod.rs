//! Sentiment inference over free-text drug reviews.

pub mod classifier;
pub mod normalize;
pub mod vectorizer;

use std::{fs::File, io::BufReader, path::Path, sync::Arc};

use anyhow::{Context, Result};
use serde::{de::DeserializeOwned, Serialize};
use thiserror::Error;
use tracing::{debug, info, instrument};

use self::{
    classifier::{ClassifierArtifact, LogisticClassifier},
    vectorizer::{TfidfVectorizer, VectorizerArtifact},
};

/// Failures raised while restoring or running the fitted model.
#[derive(Debug, Error)]
pub enum ModelError {
    #[error("invalid model artifact: {0}")]
    InvalidArtifact(String),
    #[error("dimension mismatch: expected {expected} features, found {found}")]
    DimensionMismatch { expected: usize, found: usize },
    #[error("feature column {index} outside classifier dimension {dimension}")]
    FeatureOutOfRange { index: usize, dimension: usize },
}

/// Sparse feature row; `entries` are `(column, weight)` sorted by column.
#[derive(Debug, Clone, PartialEq)]
pub struct FeatureVector {
    pub dimension: usize,
    pub entries: Vec<(usize, f64)>,
}

/// Text to feature transform fitted offline.
pub trait TextVectorizer: Send + Sync {
    fn dimension(&self) -> usize;
    fn transform(&self, text: &str) -> Result<FeatureVector, ModelError>;
}

/// Binary classifier operating on a vectorizer's feature space.
pub trait BinaryClassifier: Send + Sync {
    fn dimension(&self) -> usize;
    fn predict(&self, features: &FeatureVector) -> Result<i64, ModelError>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Sentiment {
    Positive,
    Negative,
}

impl Sentiment {
    /// Label `1` is positive; every other label is negative.
    pub fn from_label(label: i64) -> Self {
        if label == 1 {
            Self::Positive
        } else {
            Self::Negative
        }
    }
}

/// Normaliser, vectorizer and classifier wired together.
pub struct SentimentModel {
    vectorizer: Arc<dyn TextVectorizer>,
    classifier: Arc<dyn BinaryClassifier>,
}

impl std::fmt::Debug for SentimentModel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SentimentModel")
            .field("dimension", &self.vectorizer.dimension())
            .finish()
    }
}

impl SentimentModel {
    /// Pair a vectorizer with a classifier over the same feature space.
    pub fn new(
        vectorizer: Arc<dyn TextVectorizer>,
        classifier: Arc<dyn BinaryClassifier>,
    ) -> Result<Self, ModelError> {
        if vectorizer.dimension() != classifier.dimension() {
            return Err(ModelError::DimensionMismatch {
                expected: vectorizer.dimension(),
                found: classifier.dimension(),
            });
        }
        Ok(Self {
            vectorizer,
            classifier,
        })
    }

    /// Restore both exported artifacts from disk.
    #[instrument]
    pub fn load(vectorizer_path: &Path, classifier_path: &Path) -> Result<Self> {
        let vectorizer: VectorizerArtifact = read_json(vectorizer_path)?;
        let vectorizer = TfidfVectorizer::from_artifact(vectorizer)
            .with_context(|| format!("restoring vectorizer {}", vectorizer_path.display()))?;
        let classifier: ClassifierArtifact = read_json(classifier_path)?;
        let classifier = LogisticClassifier::from_artifact(classifier)
            .with_context(|| format!("restoring classifier {}", classifier_path.display()))?;

        let model = Self::new(Arc::new(vectorizer), Arc::new(classifier))
            .context("vectorizer and classifier were not fitted together")?;
        info!(dimension = model.dimension(), "loaded sentiment model");
        Ok(model)
    }

    pub fn dimension(&self) -> usize {
        self.vectorizer.dimension()
    }

    pub fn predict(&self, text: &str) -> Result<Sentiment, ModelError> {
        let cleaned = normalize::normalize(text);
        let features = self.vectorizer.transform(&cleaned)?;
        let label = self.classifier.predict(&features)?;
        debug!(
            active_features = features.entries.len(),
            label, "predicted review sentiment"
        );
        Ok(Sentiment::from_label(label))
    }
}

fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let file = File::open(path).with_context(|| format!("opening {}", path.display()))?;
    serde_json::from_reader(BufReader::new(file))
        .with_context(|| format!("parsing {}", path.display()))
}
