//! Command-line interface wiring for drug-insight.

use anyhow::Result;
use clap::{Parser, Subcommand};

use crate::config::Settings;

pub mod predict;
pub mod recommend;
pub mod serve;

/// Top-level CLI definition.
#[derive(Debug, Parser)]
#[command(author, version, about = "Drug review sentiment and recommendations", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    /// Parse CLI arguments from the environment.
    pub fn parse() -> Self {
        <Self as Parser>::parse()
    }

    /// Dispatch the selected sub-command.
    pub async fn dispatch(self, settings: Settings) -> Result<()> {
        match self.command {
            Commands::Serve(args) => serve::run(args, settings).await,
            Commands::Predict(args) => predict::run(args, settings).await,
            Commands::Recommend(args) => recommend::run(args, settings).await,
        }
    }
}

/// Supported sub-commands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Load the model and dataset, then serve the JSON API.
    Serve(serve::Args),
    /// Classify one review and print the result as JSON.
    Predict(predict::Args),
    /// Rank drugs for a condition and print the result as JSON.
    Recommend(recommend::Args),
}
