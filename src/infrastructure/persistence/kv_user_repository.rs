//! Key-value implementation of the user directory.

use async_trait::async_trait;
use serde_json::json;

use crate::domain::entities::StoredUser;
use crate::domain::repositories::UserRepository;
use crate::error::AppError;
use crate::infrastructure::store::JsonRecords;

const USERS_KEY: &str = "biz_users";

/// Stores the full directory as a single JSON array.
pub struct KvUserRepository {
    records: JsonRecords,
}

impl KvUserRepository {
    pub fn new(records: JsonRecords) -> Self {
        Self { records }
    }

    async fn load(&self) -> Result<Vec<StoredUser>, AppError> {
        Ok(self
            .records
            .read::<Vec<StoredUser>>(USERS_KEY)
            .await?
            .unwrap_or_default())
    }
}

#[async_trait]
impl UserRepository for KvUserRepository {
    async fn find_by_email(&self, email: &str) -> Result<Option<StoredUser>, AppError> {
        Ok(self.load().await?.into_iter().find(|u| u.email == email))
    }

    async fn insert(&self, user: StoredUser) -> Result<(), AppError> {
        let mut users = self.load().await?;
        if users.iter().any(|u| u.email == user.email) {
            return Err(AppError::conflict(
                "Email already registered",
                json!({ "email": user.email }),
            ));
        }

        users.push(user);
        self.records.write(USERS_KEY, &users).await?;
        Ok(())
    }

    async fn rename(&self, email: &str, name: &str) -> Result<(), AppError> {
        let mut users = self.load().await?;
        let Some(user) = users.iter_mut().find(|u| u.email == email) else {
            return Ok(());
        };

        user.name = name.to_string();
        self.records.write(USERS_KEY, &users).await?;
        Ok(())
    }
}
