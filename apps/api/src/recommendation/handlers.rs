//! Axum route handlers for the Recommendation API.

use axum::{
    extract::{rejection::JsonRejection, State},
    http::HeaderMap,
    Json,
};
use chrono::Utc;
use tracing::{info, Instrument};
use uuid::Uuid;

use crate::errors::AppError;
use crate::llm_client::ApiKey;
use crate::models::profile::UserProfile;
use crate::models::recommendation::RecommendationResponse;
use crate::recommendation::service::recommend;
use crate::state::AppState;

/// Request header that carries a caller-supplied OpenAI key.
pub const API_KEY_HEADER: &str = "x-openai-api-key";

/// POST /api/v1/recommendations
///
/// Takes one form submission and returns the four recommendation sections.
/// The key in `x-openai-api-key` wins over the configured `OPENAI_API_KEY`.
/// A missing key is reported before a malformed body.
pub async fn handle_recommend(
    State(state): State<AppState>,
    headers: HeaderMap,
    payload: Result<Json<UserProfile>, JsonRejection>,
) -> Result<Json<RecommendationResponse>, AppError> {
    let request_id = Uuid::new_v4();
    let api_key = resolve_api_key(&headers, state.config.openai_api_key.as_ref());

    let Json(profile) = payload.map_err(|rejection| {
        if api_key.is_none() {
            AppError::MissingCredential
        } else {
            AppError::Validation(rejection.body_text())
        }
    })?;

    let span = tracing::info_span!("recommend", %request_id);
    let recommendations = recommend(
        state.completion.as_ref(),
        api_key.as_ref(),
        &profile,
        state.config.response_format,
    )
    .instrument(span)
    .await?;

    info!(%request_id, "Recommendations ready");

    Ok(Json(RecommendationResponse {
        request_id,
        generated_at: Utc::now(),
        sections: recommendations.sections(),
        recommendations,
    }))
}

fn resolve_api_key(headers: &HeaderMap, configured: Option<&ApiKey>) -> Option<ApiKey> {
    headers
        .get(API_KEY_HEADER)
        .and_then(|v| v.to_str().ok())
        .and_then(ApiKey::new)
        .or_else(|| configured.cloned())
}
