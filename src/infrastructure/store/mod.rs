//! Key-value storage backing sessions, the user directory and history.
//!
//! Provides a [`KeyValueStore`] trait with two implementations:
//! - [`InMemoryStore`] - Process-local map, the default when Redis is not configured
//! - [`RedisStore`] - Redis-backed store shared between instances
//!
//! [`JsonRecords`] layers typed JSON reads and writes on top of any store.

mod json_records;
mod memory_store;
mod redis_store;
mod service;

pub use json_records::JsonRecords;
pub use memory_store::InMemoryStore;
pub use redis_store::RedisStore;
pub use service::{KeyValueStore, StoreError, StoreResult};

#[cfg(test)]
pub use service::MockKeyValueStore;
