//! Repository trait for saved reports.

use crate::domain::entities::HistoryItem;
use crate::error::AppError;
use async_trait::async_trait;

/// Per-member history list.
///
/// The list is stored and returned whole, most recent item first. Callers
/// prepend and write back; there is no per-item storage.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait HistoryRepository: Send + Sync {
    /// Returns the member's items, most recent first. Empty if none.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on storage errors.
    async fn list(&self, email: &str) -> Result<Vec<HistoryItem>, AppError>;

    /// Replaces the member's stored list.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on storage errors.
    async fn save_all(&self, email: &str, items: &[HistoryItem]) -> Result<(), AppError>;
}
