//! Key-value repository implementations.
//!
//! Concrete implementations of domain repository traits on top of
//! [`crate::infrastructure::store::JsonRecords`]. Each record type has a fixed
//! key layout:
//!
//! - [`KvUserRepository`] - the whole directory under `biz_users`
//! - [`KvSessionRepository`] - one record per token under `biz_session_{token}`
//! - [`KvHistoryRepository`] - one list per member under `biz_history_{email}`

pub mod kv_history_repository;
pub mod kv_session_repository;
pub mod kv_user_repository;

pub use kv_history_repository::KvHistoryRepository;
pub use kv_session_repository::KvSessionRepository;
pub use kv_user_repository::KvUserRepository;
