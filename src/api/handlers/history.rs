//! Handlers for a member's saved reports.

use axum::{
    Extension, Json,
    extract::{Path, State},
    http::StatusCode,
};

use crate::api::dto::history::HistoryListResponse;
use crate::api::middleware::AuthenticatedUser;
use crate::domain::entities::HistoryItem;
use crate::error::AppError;
use crate::state::AppState;

/// Lists saved reports, most recent first, without their payloads.
///
/// # Endpoint
///
/// `GET /api/history`
///
/// # Response
///
/// ```json
/// {
///   "total": 1,
///   "items": [
///     {
///       "id": "1741943100000-0000beef",
///       "timestamp": 1741943100000,
///       "dateStr": "2025-03-14 09:05",
///       "type": "analysis",
///       "title": "서울시 강남구 - 카페",
///       "subtitle": "상권 분석 리포트"
///     }
///   ]
/// }
/// ```
pub async fn history_list_handler(
    State(state): State<AppState>,
    Extension(user): Extension<AuthenticatedUser>,
) -> Result<Json<HistoryListResponse>, AppError> {
    let items = state.history_service.list(&user.session).await?;
    Ok(Json(HistoryListResponse::from(items.as_slice())))
}

/// `GET /api/history/{id}`: the full item with its input and result.
///
/// # Errors
///
/// Returns 404 if the member has no item with this id.
pub async fn history_item_handler(
    State(state): State<AppState>,
    Extension(user): Extension<AuthenticatedUser>,
    Path(id): Path<String>,
) -> Result<Json<HistoryItem>, AppError> {
    let item = state.history_service.get(&user.session, &id).await?;
    Ok(Json(item))
}

/// `DELETE /api/history/{id}`
///
/// # Errors
///
/// Returns 404 if the member has no item with this id.
pub async fn delete_history_handler(
    State(state): State<AppState>,
    Extension(user): Extension<AuthenticatedUser>,
    Path(id): Path<String>,
) -> Result<StatusCode, AppError> {
    state.history_service.delete(&user.session, &id).await?;
    Ok(StatusCode::NO_CONTENT)
}
