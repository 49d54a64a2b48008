//! Runtime configuration for drug-insight.

use std::{env, path::PathBuf};

use serde::Deserialize;

/// Artifact and dataset locations resolved from `.env` and defaults.
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    /// Fitted vectorizer exported as JSON.
    pub vectorizer_path: PathBuf,
    /// Fitted binary logistic classifier exported as JSON.
    pub classifier_path: PathBuf,
    /// Review dataset CSV with `condition`, `drugName` and `rating` columns.
    pub dataset_path: PathBuf,
    /// Optional directory of static front-end assets.
    pub ui_dir: Option<PathBuf>,
}

impl Settings {
    /// Load configuration from environment with reasonable defaults.
    pub fn load() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        Ok(Self {
            vectorizer_path: path_var("VECTORIZER_PATH", "./artifacts/vectorizer.json"),
            classifier_path: path_var("CLASSIFIER_PATH", "./artifacts/logistic_model.json"),
            dataset_path: path_var("DATASET_PATH", "./data/drugsComTrain_raw.csv"),
            ui_dir: env::var("UI_DIR")
                .ok()
                .filter(|v| !v.trim().is_empty())
                .map(PathBuf::from),
        })
    }
}

fn path_var(key: &str, default: &str) -> PathBuf {
    env::var(key)
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from(default))
}
