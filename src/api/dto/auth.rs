//! DTOs for account endpoints.

use serde::{Deserialize, Serialize};
use validator::Validate;

use super::analysis::not_blank;
use crate::domain::entities::Session;

/// Fields are checked by the account service so that every missing field is
/// reported at once.
#[derive(Debug, Deserialize)]
pub struct SignupRequest {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
}

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
}

#[derive(Debug, Deserialize, Validate)]
pub struct RenameRequest {
    #[validate(custom(function = "not_blank"))]
    #[validate(length(max = 50, message = "must be at most 50 characters"))]
    pub name: String,
}

/// Session returned by signup, login and guest access.
///
/// `token` is absent for guests: they cannot call bearer-only endpoints.
#[derive(Debug, Serialize)]
pub struct SessionResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,
    pub user: Session,
}

impl SessionResponse {
    pub fn member(token: String, user: Session) -> Self {
        Self {
            token: Some(token),
            user,
        }
    }

    pub fn guest(user: Session) -> Self {
        Self { token: None, user }
    }
}
