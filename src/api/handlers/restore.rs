//! Handler for deep-link restore.

use axum::{
    Json,
    extract::{Query, State},
    response::{IntoResponse, Response},
};

use crate::api::dto::analysis::analysis_share_query;
use crate::api::dto::generation::{GenerationResponse, RestoreResponse};
use crate::api::dto::recommendation::recommendation_share_query;
use crate::api::dto::restore::{RestoreQuery, RestoredRequest};
use crate::error::AppError;
use crate::state::AppState;

/// Re-issues a shared request from its query string.
///
/// # Endpoint
///
/// `GET /api/restore?mode=analysis&addr=...&type=...`
///
/// Accepts the `shareQuery` of an earlier response. Optional parameters get
/// their defaults. A restored request is never written to history.
///
/// # Response
///
/// The rebuilt `input` under its `mode`, plus the usual generation fields.
///
/// # Errors
///
/// Returns 400 Bad Request for an unknown mode or a missing required parameter.
pub async fn restore_handler(
    State(state): State<AppState>,
    Query(query): Query<RestoreQuery>,
) -> Result<Response, AppError> {
    let response = match query.into_request()? {
        RestoredRequest::Analysis(input) => {
            let outcome = state.analysis_service.analyze(&input).await;
            let share_query = analysis_share_query(&input);
            Json(RestoreResponse {
                mode: "analysis",
                input,
                response: GenerationResponse::new(outcome, share_query),
            })
            .into_response()
        }
        RestoredRequest::Recommendation(input) => {
            let outcome = state.analysis_service.recommend(&input).await;
            let share_query = recommendation_share_query(&input);
            Json(RestoreResponse {
                mode: "recommendation",
                input,
                response: GenerationResponse::new(outcome, share_query),
            })
            .into_response()
        }
    };

    Ok(response)
}
