//! Handler for the address analysis endpoint.

use axum::{Extension, Json, extract::State};
use tracing::warn;

use crate::api::dto::analysis::{AnalysisRequest, analysis_share_query};
use crate::api::dto::generation::GenerationResponse;
use crate::api::middleware::CurrentSession;
use crate::domain::entities::AnalysisResult;
use crate::error::AppError;
use crate::state::AppState;

/// Runs a commercial-viability analysis for one address.
///
/// # Endpoint
///
/// `POST /api/analysis`
///
/// # Request Body
///
/// ```json
/// {
///   "address": "서울시 강남구 강남대로 396",
///   "businessType": "카페",
///   "hours": "24시간",   // optional
///   "radius": "500m"     // optional: 250m, 500m or 1km
/// }
/// ```
///
/// # Response
///
/// Always `200 OK` once the body validates. When the provider is missing or
/// its reply is unusable the demo result is returned with
/// `"outcome": "fallback"` and a `fallbackReason` code.
///
/// For a signed-in member the result is saved and `historyId` is set. A
/// failed history write is logged and leaves `historyId` out.
///
/// # Errors
///
/// Returns 400 Bad Request if validation fails.
pub async fn analysis_handler(
    State(state): State<AppState>,
    Extension(CurrentSession(user)): Extension<CurrentSession>,
    Json(payload): Json<AnalysisRequest>,
) -> Result<Json<GenerationResponse<AnalysisResult>>, AppError> {
    let input = payload.into_input()?;

    let outcome = state.analysis_service.analyze(&input).await;
    let share_query = analysis_share_query(&input);

    let history_id = match user {
        Some(user) => match state
            .history_service
            .record_analysis(&user.session, input, outcome.value().clone())
            .await
        {
            Ok(item) => item.map(|item| item.id),
            Err(e) => {
                warn!("Failed to save analysis history for {}: {}", user.session.email, e);
                None
            }
        },
        None => None,
    };

    Ok(Json(
        GenerationResponse::new(outcome, share_query).with_history_id(history_id),
    ))
}
