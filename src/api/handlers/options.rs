//! Handler for the form option catalogue.

use axum::Json;

use crate::domain::catalog::Catalog;

/// `GET /api/options`: every option list the input forms offer, plus the
/// district and neighbourhood tables and the sample scenarios.
pub async fn options_handler() -> Json<Catalog> {
    Json(Catalog::new())
}
