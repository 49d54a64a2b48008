//! Process-wide read-only context built once at startup.

use std::sync::Arc;

use anyhow::Result;
use tracing::{info, instrument};

use crate::{config::Settings, data::ReviewTable, nlp::SentimentModel};

/// Loaded artifacts shared by every request; cloning only bumps refcounts.
#[derive(Debug, Clone)]
pub struct AppState {
    pub model: Arc<SentimentModel>,
    pub reviews: Arc<ReviewTable>,
}

impl AppState {
    pub fn new(model: SentimentModel, reviews: ReviewTable) -> Self {
        Self {
            model: Arc::new(model),
            reviews: Arc::new(reviews),
        }
    }

    /// Load the model artifacts and dataset named by `settings`.
    ///
    /// Any failure here must stop the process before it serves traffic.
    #[instrument(skip_all)]
    pub fn load(settings: &Settings) -> Result<Self> {
        let model = SentimentModel::load(&settings.vectorizer_path, &settings.classifier_path)?;
        let reviews = ReviewTable::load(&settings.dataset_path)?;
        info!(
            dimension = model.dimension(),
            reviews = reviews.len(),
            "application state ready"
        );
        Ok(Self::new(model, reviews))
    }
}
