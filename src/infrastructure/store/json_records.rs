//! Typed JSON records on top of a [`KeyValueStore`].

use super::service::{KeyValueStore, StoreResult};
use serde::{Serialize, de::DeserializeOwned};
use std::sync::Arc;
use tracing::warn;

/// Reads and writes serde types as JSON text.
///
/// A stored value that does not decode as the requested type is treated as
/// corrupt: it is logged, removed, and reported as absent.
#[derive(Clone)]
pub struct JsonRecords {
    store: Arc<dyn KeyValueStore>,
}

impl JsonRecords {
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self { store }
    }

    pub async fn read<T: DeserializeOwned>(&self, key: &str) -> StoreResult<Option<T>> {
        let Some(raw) = self.store.get(key).await? else {
            return Ok(None);
        };

        match serde_json::from_str(&raw) {
            Ok(value) => Ok(Some(value)),
            Err(e) => {
                warn!("Clearing corrupt record {}: {}", key, e);
                self.store.delete(key).await?;
                Ok(None)
            }
        }
    }

    pub async fn write<T: Serialize + Sync + ?Sized>(&self, key: &str, value: &T) -> StoreResult<()> {
        let raw = serde_json::to_string(value)?;
        self.store.set(key, &raw).await
    }

    pub async fn remove(&self, key: &str) -> StoreResult<()> {
        self.store.delete(key).await
    }
}
