//! Repository trait for bearer sessions.

use crate::domain::entities::Session;
use crate::error::AppError;
use async_trait::async_trait;

/// Member sessions addressed by opaque token.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SessionRepository: Send + Sync {
    async fn get(&self, token: &str) -> Result<Option<Session>, AppError>;

    async fn save(&self, token: &str, session: &Session) -> Result<(), AppError>;

    /// Removes a session. Unknown tokens are not an error.
    async fn delete(&self, token: &str) -> Result<(), AppError>;
}
