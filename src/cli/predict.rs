//! CLI entry-point for one-off sentiment inference.

use anyhow::Result;
use clap::Args as ClapArgs;
use tracing::instrument;

use crate::{api::types::PredictResponse, config::Settings, nlp::SentimentModel};

#[derive(Debug, Clone, ClapArgs)]
pub struct Args {
    /// Review text to classify.
    #[arg(long)]
    pub text: String,
}

#[instrument(skip_all)]
pub async fn run(args: Args, settings: Settings) -> Result<()> {
    let model = SentimentModel::load(&settings.vectorizer_path, &settings.classifier_path)?;
    let response = PredictResponse {
        sentiment: model.predict(&args.text)?,
    };
    println!("{}", serde_json::to_string_pretty(&response)?);
    Ok(())
}
