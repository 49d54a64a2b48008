//! TF-IDF vectorizer restored from its exported fitted state.

use std::collections::{HashMap, HashSet};

use regex::Regex;
use serde::Deserialize;

use super::{FeatureVector, ModelError, TextVectorizer};

const DEFAULT_TOKEN_PATTERN: &str = r"(?u)\b\w\w+\b";

/// Row normalisation applied after weighting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Norm {
    L1,
    L2,
}

/// On-disk representation of a fitted vectorizer.
#[derive(Debug, Clone, Deserialize)]
pub struct VectorizerArtifact {
    pub vocabulary: HashMap<String, usize>,
    #[serde(default)]
    pub idf: Option<Vec<f64>>,
    #[serde(default = "default_ngram_range")]
    pub ngram_range: (usize, usize),
    #[serde(default = "default_true")]
    pub lowercase: bool,
    #[serde(default = "default_token_pattern")]
    pub token_pattern: String,
    #[serde(default)]
    pub stop_words: Vec<String>,
    #[serde(default)]
    pub binary: bool,
    #[serde(default)]
    pub sublinear_tf: bool,
    #[serde(default = "default_norm")]
    pub norm: Option<Norm>,
}

fn default_ngram_range() -> (usize, usize) {
    (1, 1)
}

fn default_true() -> bool {
    true
}

fn default_token_pattern() -> String {
    DEFAULT_TOKEN_PATTERN.to_string()
}

fn default_norm() -> Option<Norm> {
    Some(Norm::L2)
}

/// Bag-of-n-grams vectorizer with optional idf weighting.
#[derive(Debug)]
pub struct TfidfVectorizer {
    vocabulary: HashMap<String, usize>,
    idf: Option<Vec<f64>>,
    ngram_range: (usize, usize),
    lowercase: bool,
    token_pattern: Regex,
    stop_words: HashSet<String>,
    binary: bool,
    sublinear_tf: bool,
    norm: Option<Norm>,
}

impl TfidfVectorizer {
    /// Validate an exported artifact and compile its token pattern.
    pub fn from_artifact(artifact: VectorizerArtifact) -> Result<Self, ModelError> {
        let dimension = artifact.vocabulary.len();
        if dimension == 0 {
            return Err(ModelError::InvalidArtifact("empty vocabulary".into()));
        }
        if let Some((term, &index)) = artifact
            .vocabulary
            .iter()
            .find(|(_, index)| **index >= dimension)
        {
            return Err(ModelError::InvalidArtifact(format!(
                "term {term:?} maps to column {index} outside vocabulary of {dimension}"
            )));
        }
        let distinct: HashSet<usize> = artifact.vocabulary.values().copied().collect();
        if distinct.len() != dimension {
            return Err(ModelError::InvalidArtifact(
                "vocabulary column indices are not unique".into(),
            ));
        }
        if let Some(idf) = &artifact.idf {
            if idf.len() != dimension {
                return Err(ModelError::DimensionMismatch {
                    expected: dimension,
                    found: idf.len(),
                });
            }
        }
        let (min_n, max_n) = artifact.ngram_range;
        if min_n == 0 || min_n > max_n {
            return Err(ModelError::InvalidArtifact(format!(
                "invalid ngram_range ({min_n}, {max_n})"
            )));
        }
        let token_pattern = Regex::new(&artifact.token_pattern).map_err(|err| {
            ModelError::InvalidArtifact(format!("token_pattern does not compile: {err}"))
        })?;

        Ok(Self {
            vocabulary: artifact.vocabulary,
            idf: artifact.idf,
            ngram_range: artifact.ngram_range,
            lowercase: artifact.lowercase,
            token_pattern,
            stop_words: artifact.stop_words.into_iter().collect(),
            binary: artifact.binary,
            sublinear_tf: artifact.sublinear_tf,
            norm: artifact.norm,
        })
    }

    fn analyze(&self, text: &str) -> Vec<String> {
        let text = if self.lowercase {
            text.to_lowercase()
        } else {
            text.to_string()
        };
        let tokens: Vec<&str> = self
            .token_pattern
            .find_iter(&text)
            .map(|m| m.as_str())
            .filter(|token| !self.stop_words.contains(*token))
            .collect();

        let (min_n, max_n) = self.ngram_range;
        let mut grams = Vec::new();
        for n in min_n..=max_n.min(tokens.len()) {
            grams.extend(tokens.windows(n).map(|window| window.join(" ")));
        }
        grams
    }
}

impl TextVectorizer for TfidfVectorizer {
    fn dimension(&self) -> usize {
        self.vocabulary.len()
    }

    fn transform(&self, text: &str) -> Result<FeatureVector, ModelError> {
        let mut counts: HashMap<usize, f64> = HashMap::new();
        for gram in self.analyze(text) {
            if let Some(&column) = self.vocabulary.get(&gram) {
                *counts.entry(column).or_insert(0.0) += 1.0;
            }
        }

        let mut entries: Vec<(usize, f64)> = counts
            .into_iter()
            .map(|(column, tf)| {
                let mut weight = if self.binary { 1.0 } else { tf };
                if self.sublinear_tf {
                    weight = 1.0 + weight.ln();
                }
                if let Some(idf) = &self.idf {
                    weight *= idf[column];
                }
                (column, weight)
            })
            .collect();
        entries.sort_unstable_by_key(|(column, _)| *column);

        let scale = match self.norm {
            Some(Norm::L2) => entries.iter().map(|(_, w)| w * w).sum::<f64>().sqrt(),
            Some(Norm::L1) => entries.iter().map(|(_, w)| w.abs()).sum::<f64>(),
            None => 1.0,
        };
        if scale > 0.0 {
            for (_, weight) in &mut entries {
                *weight /= scale;
            }
        }

        Ok(FeatureVector {
            dimension: self.dimension(),
            entries,
        })
    }
}
