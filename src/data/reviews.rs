//! In-memory review table and the condition-based drug ranking.

use std::{path::Path, sync::Arc};

use anyhow::{Context, Result};
use indexmap::IndexMap;
use polars::prelude::{CsvReadOptions, DataFrame, DataType, Field, SerReader, Schema};
use tracing::{debug, info, instrument};

/// Lowest rating counted as a positive review.
pub const MIN_POSITIVE_RATING: f64 = 7.0;
/// Maximum number of drugs returned per condition.
pub const TOP_DRUGS: usize = 5;

/// Drug name to positive-review count, ordered by descending count.
pub type Recommendations = IndexMap<String, u32>;

#[derive(Debug, Clone)]
struct ReviewRow {
    /// Lowercased condition, `None` when missing in the source.
    condition: Option<String>,
    drug_name: Option<String>,
    rating: Option<f64>,
}

/// Read-only projection of the review dataset.
#[derive(Debug)]
pub struct ReviewTable {
    rows: Vec<ReviewRow>,
}

impl ReviewTable {
    /// Read the CSV fully; missing required columns fail the load.
    #[instrument]
    pub fn load(path: &Path) -> Result<Self> {
        let overrides = Schema::from_iter([
            Field::new("condition".into(), DataType::String),
            Field::new("drugName".into(), DataType::String),
            Field::new("rating".into(), DataType::Float64),
        ]);
        let df = CsvReadOptions::default()
            .with_has_header(true)
            .with_schema_overwrite(Some(Arc::new(overrides)))
            .try_into_reader_with_file_path(Some(path.to_path_buf()))
            .with_context(|| format!("opening dataset {}", path.display()))?
            .finish()
            .with_context(|| format!("reading dataset {}", path.display()))?;
        let table = Self::from_frame(&df)
            .with_context(|| format!("dataset {} has an unexpected schema", path.display()))?;
        info!(path = %path.display(), rows = table.len(), "loaded review dataset");
        Ok(table)
    }

    /// Project the `condition`, `drugName` and `rating` columns of a frame.
    pub fn from_frame(df: &DataFrame) -> Result<Self> {
        let conditions = df.column("condition")?.str()?;
        let drugs = df.column("drugName")?.str()?;
        let ratings = df.column("rating")?.cast(&DataType::Float64)?;
        let ratings = ratings.f64()?;

        let rows = conditions
            .into_iter()
            .zip(drugs)
            .zip(ratings)
            .map(|((condition, drug_name), rating)| ReviewRow {
                condition: condition.map(str::to_lowercase),
                drug_name: drug_name.map(str::to_string),
                rating,
            })
            .collect();
        Ok(Self { rows })
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Most frequently well-rated drugs among reviews whose condition
    /// contains `condition`, ignoring case.
    ///
    /// Equal counts keep the order in which the drugs first appear in the
    /// dataset.
    pub fn recommend(&self, condition: &str) -> Recommendations {
        let needle = condition.to_lowercase();
        let mut counts: IndexMap<&str, u32> = IndexMap::new();
        for row in &self.rows {
            let Some(row_condition) = row.condition.as_deref() else {
                continue;
            };
            if !row_condition.contains(needle.as_str()) {
                continue;
            }
            if !row.rating.is_some_and(|r| r >= MIN_POSITIVE_RATING) {
                continue;
            }
            if let Some(drug) = row.drug_name.as_deref() {
                *counts.entry(drug).or_insert(0) += 1;
            }
        }

        let mut ranked: Vec<(&str, u32)> = counts.into_iter().collect();
        ranked.sort_by(|a, b| b.1.cmp(&a.1));
        ranked.truncate(TOP_DRUGS);
        debug!(condition, matches = ranked.len(), "ranked drugs");
        ranked
            .into_iter()
            .map(|(drug, count)| (drug.to_string(), count))
            .collect()
    }
}
