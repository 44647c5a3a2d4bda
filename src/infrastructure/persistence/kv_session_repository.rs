//! Key-value implementation of bearer sessions.

use async_trait::async_trait;

use crate::domain::entities::Session;
use crate::domain::repositories::SessionRepository;
use crate::error::AppError;
use crate::infrastructure::store::JsonRecords;

/// One JSON record per token.
pub struct KvSessionRepository {
    records: JsonRecords,
}

impl KvSessionRepository {
    pub fn new(records: JsonRecords) -> Self {
        Self { records }
    }

    fn key(token: &str) -> String {
        format!("biz_session_{}", token)
    }
}

#[async_trait]
impl SessionRepository for KvSessionRepository {
    async fn get(&self, token: &str) -> Result<Option<Session>, AppError> {
        Ok(self.records.read(&Self::key(token)).await?)
    }

    async fn save(&self, token: &str, session: &Session) -> Result<(), AppError> {
        Ok(self.records.write(&Self::key(token), session).await?)
    }

    async fn delete(&self, token: &str) -> Result<(), AppError> {
        Ok(self.records.remove(&Self::key(token)).await?)
    }
}
