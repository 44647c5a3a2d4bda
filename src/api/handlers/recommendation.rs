//! Handler for the region recommendation endpoint.

use axum::{Extension, Json, extract::State};
use tracing::warn;

use crate::api::dto::generation::GenerationResponse;
use crate::api::dto::recommendation::{RecommendationRequest, recommendation_share_query};
use crate::api::middleware::CurrentSession;
use crate::domain::entities::RecommendationResult;
use crate::error::AppError;
use crate::state::AppState;

/// Ranks candidate locations for a business inside a region.
///
/// # Endpoint
///
/// `POST /api/recommendation`
///
/// # Request Body
///
/// ```json
/// {
///   "businessType": "카페",
///   "city": "서울시",
///   "district": "마포구",
///   "dong": "전체",          // optional
///   "hours": "24시간",        // optional
///   "budget": "제한 없음",     // optional
///   "targetAge": "20대",      // optional
///   "parking": "상관 없음"     // optional
/// }
/// ```
///
/// Fallback and history behave as in
/// [`analysis_handler`](super::analysis::analysis_handler).
///
/// # Errors
///
/// Returns 400 Bad Request if validation fails.
pub async fn recommendation_handler(
    State(state): State<AppState>,
    Extension(CurrentSession(user)): Extension<CurrentSession>,
    Json(payload): Json<RecommendationRequest>,
) -> Result<Json<GenerationResponse<RecommendationResult>>, AppError> {
    let input = payload.into_input()?;

    let outcome = state.analysis_service.recommend(&input).await;
    let share_query = recommendation_share_query(&input);

    let mut history_id = None;
    if let Some(user) = user {
        match state
            .history_service
            .record_recommendation(&user.session, input, outcome.value().clone())
            .await
        {
            Ok(item) => history_id = item.map(|item| item.id),
            Err(e) => warn!(
                "Failed to save recommendation history for {}: {}",
                user.session.email, e
            ),
        }
    }

    Ok(Json(
        GenerationResponse::new(outcome, share_query).with_history_id(history_id),
    ))
}
