//! CLI entry-point for condition-based drug recommendations.

use anyhow::Result;
use clap::Args as ClapArgs;
use tracing::instrument;

use crate::{api::types::RecommendResponse, config::Settings, data::ReviewTable};

#[derive(Debug, Clone, ClapArgs)]
pub struct Args {
    /// Condition to search for, matched as a case-insensitive substring.
    #[arg(long)]
    pub condition: String,
}

#[instrument(skip(settings))]
pub async fn run(args: Args, settings: Settings) -> Result<()> {
    let reviews = ReviewTable::load(&settings.dataset_path)?;
    let response = RecommendResponse {
        recommendations: reviews.recommend(&args.condition),
    };
    println!("{}", serde_json::to_string_pretty(&response)?);
    Ok(())
}
