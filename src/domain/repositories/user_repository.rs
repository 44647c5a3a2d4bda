//! Repository trait for the mock user directory.

use crate::domain::entities::StoredUser;
use crate::error::AppError;
use async_trait::async_trait;

/// Registered accounts, keyed by email.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::KvUserRepository`] - Key-value store implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Finds an account by exact email match.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on storage errors.
    async fn find_by_email(&self, email: &str) -> Result<Option<StoredUser>, AppError>;

    /// Adds a new account.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Conflict`] if the email is already registered.
    /// Returns [`AppError::Internal`] on storage errors.
    async fn insert(&self, user: StoredUser) -> Result<(), AppError>;

    /// Changes the display name of an account. Unknown emails are ignored.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on storage errors.
    async fn rename(&self, email: &str, name: &str) -> Result<(), AppError>;
}
