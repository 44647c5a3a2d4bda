//! Per-member history of completed analyses and recommendations.

use chrono::Utc;
use serde_json::json;
use std::sync::Arc;
use tracing::debug;

use crate::domain::entities::{
    AnalysisInput, AnalysisResult, HistoryItem, HistoryRecord, RecommendationInput,
    RecommendationResult, Session,
};
use crate::domain::repositories::HistoryRepository;
use crate::error::AppError;

/// Records and serves saved reports.
///
/// Guests have no history: recording is a no-op and listing is empty.
/// Writes are read-modify-write on the member's whole list without locking,
/// so two concurrent writes for the same member can drop one entry.
pub struct HistoryService<R: HistoryRepository> {
    repository: Arc<R>,
}

impl<R: HistoryRepository> HistoryService<R> {
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    async fn record(
        &self,
        session: &Session,
        record: HistoryRecord,
    ) -> Result<Option<HistoryItem>, AppError> {
        if !session.is_member() {
            return Ok(None);
        }

        let item = HistoryItem::new(record, Utc::now(), rand::random());
        let mut items = self.repository.list(&session.email).await?;
        items.insert(0, item.clone());
        self.repository.save_all(&session.email, &items).await?;

        debug!("History item {} saved for {}", item.id, session.email);
        Ok(Some(item))
    }

    /// Saves a completed analysis at the head of the member's list.
    pub async fn record_analysis(
        &self,
        session: &Session,
        input: AnalysisInput,
        result: AnalysisResult,
    ) -> Result<Option<HistoryItem>, AppError> {
        self.record(session, HistoryRecord::Analysis { input, result })
            .await
    }

    /// Saves a completed recommendation at the head of the member's list.
    pub async fn record_recommendation(
        &self,
        session: &Session,
        input: RecommendationInput,
        result: RecommendationResult,
    ) -> Result<Option<HistoryItem>, AppError> {
        self.record(session, HistoryRecord::Recommendation { input, result })
            .await
    }

    /// Returns the member's items, most recent first.
    pub async fn list(&self, session: &Session) -> Result<Vec<HistoryItem>, AppError> {
        if !session.is_member() {
            return Ok(Vec::new());
        }
        self.repository.list(&session.email).await
    }

    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no item has this id.
    pub async fn get(&self, session: &Session, id: &str) -> Result<HistoryItem, AppError> {
        self.list(session)
            .await?
            .into_iter()
            .find(|item| item.id == id)
            .ok_or_else(|| AppError::not_found("History item not found", json!({ "id": id })))
    }

    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no item has this id.
    pub async fn delete(&self, session: &Session, id: &str) -> Result<(), AppError> {
        let mut items = self.list(session).await?;
        let before = items.len();
        items.retain(|item| item.id != id);

        if items.len() == before {
            return Err(AppError::not_found(
                "History item not found",
                json!({ "id": id }),
            ));
        }

        self.repository.save_all(&session.email, &items).await
    }
}
