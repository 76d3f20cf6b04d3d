use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    Extension, Json,
};
use serde_json::{json, Value};

use crate::{
    error::{AppError, AppResult},
    middleware::RequestId,
    models::{RecommendationRequest, RecommendationResult},
};

use super::AppState;

/// Health check endpoint
pub async fn health_check() -> (StatusCode, Json<Value>) {
    (StatusCode::OK, Json(json!({ "status": "healthy" })))
}

/// Recommends courses and a learning roadmap for the submitted preferences.
///
/// Model failures come back as `200 {"error": ...}`; only a missing subject
/// (400) and an unreadable request (500) change the status code.
pub async fn get_recommendations(
    State(state): State<AppState>,
    Extension(request_id): Extension<RequestId>,
    payload: Result<Json<RecommendationRequest>, JsonRejection>,
) -> AppResult<Json<RecommendationResult>> {
    let Json(request) = payload.map_err(|rejection| AppError::Internal(rejection.body_text()))?;

    request.validate()?;

    tracing::info!(
        request_id = %request_id,
        subject = %request.subject,
        budget = %request.budget,
        skill_level = %request.skill_level,
        time_availability = %request.time_availability,
        learning_style = %request.learning_style,
        "Processing recommendation request"
    );

    let result = state.recommender.resolve(&request).await;

    tracing::info!(
        request_id = %request_id,
        failed = result.is_error(),
        "Recommendation request completed"
    );

    Ok(Json(result))
}
