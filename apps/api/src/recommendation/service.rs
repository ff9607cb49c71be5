//! Recommendation service — credential check, prompt build, completion call, parse.

use tracing::{debug, info, warn};

use crate::errors::AppError;
use crate::llm_client::{ApiKey, CompletionProvider};
use crate::models::profile::UserProfile;
use crate::models::recommendation::RecommendationResult;
use crate::recommendation::builder::{build_prompt, ResponseFormat};
use crate::recommendation::parser::parse_response;

/// Runs one recommendation request end to end.
///
/// A missing credential short-circuits before the prompt is built. Any completion
/// failure surfaces as `AppError::Completion`; a reply with missing sections is not
/// an error and simply yields empty lists.
pub async fn recommend(
    provider: &dyn CompletionProvider,
    api_key: Option<&ApiKey>,
    profile: &UserProfile,
    format: ResponseFormat,
) -> Result<RecommendationResult, AppError> {
    let api_key = api_key.ok_or(AppError::MissingCredential)?;

    profile
        .validate()
        .map_err(|issues| AppError::Validation(issues.join(", ")))?;

    let prompt = build_prompt(profile, format);
    debug!("Built recommendation prompt ({} chars)", prompt.len());

    let completion = provider.complete(api_key, &prompt).await?;

    let result = parse_response(&completion);
    if result.is_empty() {
        warn!("Completion contained no recognizable sections");
    }
    info!(
        "Parsed recommendations: restaurants={}, breakfasts={}, dinners={}, workouts={}",
        result.restaurants.len(),
        result.breakfasts.len(),
        result.dinners.len(),
        result.workouts.len()
    );

    Ok(result)
}
