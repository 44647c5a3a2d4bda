//! Key-value implementation of member history.

use async_trait::async_trait;

use crate::domain::entities::HistoryItem;
use crate::domain::repositories::HistoryRepository;
use crate::error::AppError;
use crate::infrastructure::store::JsonRecords;

/// One JSON array per member, most recent item first.
pub struct KvHistoryRepository {
    records: JsonRecords,
}

impl KvHistoryRepository {
    pub fn new(records: JsonRecords) -> Self {
        Self { records }
    }

    fn key(email: &str) -> String {
        format!("biz_history_{}", email)
    }
}

#[async_trait]
impl HistoryRepository for KvHistoryRepository {
    async fn list(&self, email: &str) -> Result<Vec<HistoryItem>, AppError> {
        Ok(self
            .records
            .read::<Vec<HistoryItem>>(&Self::key(email))
            .await?
            .unwrap_or_default())
    }

    async fn save_all(&self, email: &str, items: &[HistoryItem]) -> Result<(), AppError> {
        Ok(self.records.write(&Self::key(email), items).await?)
    }
}
