//! API route configuration.
//!
//! Routes are grouped by the session middleware they need; the groups are
//! assembled and rate limited in [`crate::routes`].

use crate::api::handlers::{
    analysis_handler, delete_history_handler, guest_handler, history_item_handler,
    history_list_handler, login_handler, logout_handler, me_handler, options_handler,
    recommendation_handler, rename_handler, restore_handler, signup_handler,
};
use crate::state::AppState;
use axum::{
    Router,
    routing::{get, post},
};

/// Provider-backed routes that take an optional bearer session.
///
/// - `POST /analysis`        - Analyse one address
/// - `POST /recommendation`  - Rank locations in a region
pub fn generation_routes() -> Router<AppState> {
    Router::new()
        .route("/analysis", post(analysis_handler))
        .route("/recommendation", post(recommendation_handler))
}

/// Provider-backed, always anonymous.
///
/// - `GET /restore` - Re-issue a shared request from its query string
pub fn restore_routes() -> Router<AppState> {
    Router::new().route("/restore", get(restore_handler))
}

/// Routes open to everyone.
///
/// - `GET  /options`      - Form option catalogue
/// - `POST /auth/signup`  - Register and sign in
/// - `POST /auth/login`   - Sign in
/// - `POST /auth/guest`   - Guest identity (no token)
pub fn public_routes() -> Router<AppState> {
    Router::new()
        .route("/options", get(options_handler))
        .route("/auth/signup", post(signup_handler))
        .route("/auth/login", post(login_handler))
        .route("/auth/guest", post(guest_handler))
}

/// Routes that require a member session.
///
/// - `POST   /auth/logout`    - End the session
/// - `GET    /auth/me`        - Current session
/// - `PATCH  /auth/me`        - Rename
/// - `GET    /history`        - Saved reports
/// - `GET    /history/{id}`   - One saved report
/// - `DELETE /history/{id}`   - Delete a saved report
pub fn member_routes() -> Router<AppState> {
    Router::new()
        .route("/auth/logout", post(logout_handler))
        .route("/auth/me", get(me_handler).patch(rename_handler))
        .route("/history", get(history_list_handler))
        .route(
            "/history/{id}",
            get(history_item_handler).delete(delete_history_handler),
        )
}
