//! Repository trait definitions for the domain layer.
//!
//! These traits abstract the mock account directory, sessions and per-member
//! history. Implementations live in `crate::infrastructure::persistence` and
//! sit on top of a key-value store.
//!
//! # Available Repositories
//!
//! - [`UserRepository`] - Mock credential directory
//! - [`SessionRepository`] - Bearer token to session records
//! - [`HistoryRepository`] - Saved reports, most recent first
//!
//! Mock implementations are generated via `mockall` for unit tests.

pub mod history_repository;
pub mod session_repository;
pub mod user_repository;

pub use history_repository::HistoryRepository;
pub use session_repository::SessionRepository;
pub use user_repository::UserRepository;

#[cfg(test)]
pub use history_repository::MockHistoryRepository;
#[cfg(test)]
pub use session_repository::MockSessionRepository;
#[cfg(test)]
pub use user_repository::MockUserRepository;
