//! Bearer session middleware.

use axum::{
    extract::{FromRequestParts, Request, State},
    http::{header, request::Parts},
    middleware::Next,
    response::Response,
};
use axum_auth::AuthBearer;

use crate::domain::entities::Session;
use crate::{error::AppError, state::AppState};

/// A resolved member session, inserted as a request extension.
#[derive(Debug, Clone)]
pub struct AuthenticatedUser {
    pub token: String,
    pub session: Session,
}

/// Set by [`optional_layer`]: `None` for anonymous requests.
#[derive(Debug, Clone)]
pub struct CurrentSession(pub Option<AuthenticatedUser>);

async fn resolve(st: &AppState, parts: &mut Parts) -> Result<AuthenticatedUser, AppError> {
    let AuthBearer(token) = AuthBearer::from_request_parts(parts, &())
        .await
        .map_err(|_| {
            AppError::unauthorized(
                "Unauthorized",
                serde_json::json!({"reason": "Authorization header is missing or invalid"}),
            )
        })?;

    let session = st.account_service.session(&token).await?;
    Ok(AuthenticatedUser { token, session })
}

/// Requires a valid session token.
///
/// # Header Format
///
/// ```text
/// Authorization: Bearer <token>
/// ```
///
/// On success the handler can extract `Extension<AuthenticatedUser>`.
///
/// # Errors
///
/// Returns `401 Unauthorized` if the header is missing or malformed, or the
/// token does not name a live session. The response carries
/// `WWW-Authenticate: Bearer` per RFC 6750.
pub async fn layer(
    State(st): State<AppState>,
    req: Request,
    next: Next,
) -> Result<Response, AppError> {
    let (mut parts, body) = req.into_parts();

    let user = resolve(&st, &mut parts).await?;

    let mut req = Request::from_parts(parts, body);
    req.extensions_mut().insert(user);

    Ok(next.run(req).await)
}

/// Resolves a session when an `Authorization` header is present.
///
/// Requests without the header pass through as anonymous. A header that is
/// present but invalid is rejected the same way [`layer`] rejects it, so a
/// stale token never silently turns a member into a guest.
pub async fn optional_layer(
    State(st): State<AppState>,
    req: Request,
    next: Next,
) -> Result<Response, AppError> {
    let (mut parts, body) = req.into_parts();

    let user = if parts.headers.contains_key(header::AUTHORIZATION) {
        Some(resolve(&st, &mut parts).await?)
    } else {
        None
    };

    let mut req = Request::from_parts(parts, body);
    req.extensions_mut().insert(CurrentSession(user));

    Ok(next.run(req).await)
}
