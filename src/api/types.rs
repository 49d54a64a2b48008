//! Request and response bodies for the JSON API.

use serde::{Deserialize, Serialize};

use crate::{data::Recommendations, nlp::Sentiment};

#[derive(Debug, Clone, Deserialize)]
pub struct ReviewInput {
    pub text: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ConditionInput {
    pub condition: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct PredictResponse {
    pub sentiment: Sentiment,
}

#[derive(Debug, Clone, Serialize)]
pub struct RecommendResponse {
    pub recommendations: Recommendations,
}

#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub vocabulary_size: usize,
    pub reviews: usize,
}

/// Body returned for every rejected or failed request.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorBody {
    pub detail: String,
}
