//! Business logic services for the application layer.

pub mod account_service;
pub mod analysis_service;
pub mod history_service;

pub use account_service::AccountService;
pub use analysis_service::AnalysisService;
pub use history_service::HistoryService;
