//! Application layer services implementing business logic.
//!
//! Services consume repository and provider traits and expose the operations
//! HTTP handlers and the terminal client call.
//!
//! # Available Services
//!
//! - [`services::analysis_service::AnalysisService`] - Generation pipeline with demo fallback
//! - [`services::account_service::AccountService`] - Mock signup, login and sessions
//! - [`services::history_service::HistoryService`] - Per-member saved reports

pub mod services;
