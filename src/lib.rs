//! # BizInsight
//!
//! Commercial-location analysis backed by a grounded LLM, served over HTTP
//! with Axum.
//!
//! ## Architecture
//!
//! - **Domain Layer** ([`domain`]) - Input/result models, prompts, grounding, demo data
//! - **Application Layer** ([`application`]) - Generation pipeline, accounts, history
//! - **Infrastructure Layer** ([`infrastructure`]) - Gemini client and key-value store
//! - **API Layer** ([`api`]) - REST handlers, DTOs, and middleware
//!
//! ## Features
//!
//! - Single-address viability analysis and region-wide location ranking
//! - Tolerant JSON extraction and repair of model replies
//! - Citation-marker cleanup and grounding source merging
//! - Demo mode when no API key is configured, and demo fallback on any failure
//! - Mock member accounts with per-member history
//! - Shareable deep links that re-issue a request
//!
//! ## Quick Start
//!
//! ```bash
//! export GEMINI_API_KEY="..."               # Optional: demo mode without it
//! export REDIS_URL="redis://localhost:6379"  # Optional: in-memory without it
//!
//! cargo run
//! ```
//!
//! ## Configuration
//!
//! Service configuration is loaded from environment variables via [`config::Config`].
//! See [`config`] module for available options.

pub mod api;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod state;
pub mod utils;

pub mod config;
pub mod server;

pub mod routes;

pub use error::AppError;
pub use state::AppState;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::application::services::{AccountService, AnalysisService, HistoryService};
    pub use crate::domain::entities::{
        AnalysisInput, AnalysisResult, HistoryItem, Radius, RecommendationInput,
        RecommendationResult, Session, SourceLink,
    };
    pub use crate::domain::outcome::{FallbackReason, Outcome};
    pub use crate::error::AppError;
    pub use crate::state::AppState;
}
