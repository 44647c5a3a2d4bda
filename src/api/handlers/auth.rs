//! Handlers for account endpoints.

use axum::{Extension, Json, extract::State, http::StatusCode};
use validator::Validate;

use crate::api::dto::auth::{LoginRequest, RenameRequest, SessionResponse, SignupRequest};
use crate::api::middleware::AuthenticatedUser;
use crate::domain::entities::Session;
use crate::error::AppError;
use crate::state::AppState;

/// Registers a member and opens a session.
///
/// # Endpoint
///
/// `POST /api/auth/signup`
///
/// # Request Body
///
/// ```json
/// { "name": "김철수", "email": "kim@example.com", "password": "..." }
/// ```
///
/// # Response
///
/// `201 Created` with `{ "token": "...", "user": { "name", "email", "type": "member" } }`.
///
/// # Errors
///
/// - 400 if a field is blank (`details.missing` lists them)
/// - 409 if the email is already registered
pub async fn signup_handler(
    State(state): State<AppState>,
    Json(payload): Json<SignupRequest>,
) -> Result<(StatusCode, Json<SessionResponse>), AppError> {
    let (token, session) = state
        .account_service
        .signup(&payload.name, &payload.email, &payload.password)
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(SessionResponse::member(token, session)),
    ))
}

/// Signs in an existing member.
///
/// # Endpoint
///
/// `POST /api/auth/login`
///
/// # Errors
///
/// Returns 401 for an unknown email or a wrong password alike.
pub async fn login_handler(
    State(state): State<AppState>,
    Json(payload): Json<LoginRequest>,
) -> Result<Json<SessionResponse>, AppError> {
    let (token, session) = state
        .account_service
        .login(&payload.email, &payload.password)
        .await?;

    Ok(Json(SessionResponse::member(token, session)))
}

/// `POST /api/auth/guest`: a guest identity with no token. Nothing is stored.
pub async fn guest_handler(State(state): State<AppState>) -> Json<SessionResponse> {
    Json(SessionResponse::guest(state.account_service.guest()))
}

/// `POST /api/auth/logout`: ends the caller's session.
pub async fn logout_handler(
    State(state): State<AppState>,
    Extension(user): Extension<AuthenticatedUser>,
) -> Result<StatusCode, AppError> {
    state.account_service.logout(&user.token).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// `GET /api/auth/me`
pub async fn me_handler(Extension(user): Extension<AuthenticatedUser>) -> Json<Session> {
    Json(user.session)
}

/// Renames the signed-in member.
///
/// # Endpoint
///
/// `PATCH /api/auth/me`
///
/// ```json
/// { "name": "새 이름" }
/// ```
///
/// # Errors
///
/// Returns 400 for a blank or overlong name.
pub async fn rename_handler(
    State(state): State<AppState>,
    Extension(user): Extension<AuthenticatedUser>,
    Json(payload): Json<RenameRequest>,
) -> Result<Json<Session>, AppError> {
    payload.validate()?;

    let session = state
        .account_service
        .update_name(&user.token, &payload.name)
        .await?;

    Ok(Json(session))
}
