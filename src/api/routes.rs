//! HTTP route handlers for Axum.

use axum::{
    extract::{rejection::JsonRejection, State},
    Json,
};
use tracing::instrument;

use crate::api::{
    error::ApiError,
    types::{ConditionInput, HealthResponse, PredictResponse, RecommendResponse, ReviewInput},
};

use super::AppState;

type ApiResult<T> = Result<Json<T>, ApiError>;

#[instrument(skip_all)]
pub async fn predict(
    State(state): State<AppState>,
    payload: Result<Json<ReviewInput>, JsonRejection>,
) -> ApiResult<PredictResponse> {
    let Json(input) = payload?;
    let sentiment = state.model.predict(&input.text)?;
    Ok(Json(PredictResponse { sentiment }))
}

#[instrument(skip_all)]
pub async fn recommend(
    State(state): State<AppState>,
    payload: Result<Json<ConditionInput>, JsonRejection>,
) -> ApiResult<RecommendResponse> {
    let Json(input) = payload?;
    let recommendations = state.reviews.recommend(&input.condition);
    Ok(Json(RecommendResponse { recommendations }))
}

pub async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        vocabulary_size: state.model.dimension(),
        reviews: state.reviews.len(),
    })
}
