//! Core domain entities representing the business data model.
//!
//! Entities are plain data records without lifecycle beyond a single request
//! (inputs, results) or owned by a member's storage partition (history).
//!
//! # Entity Types
//!
//! - [`AnalysisInput`] / [`AnalysisResult`] - Single-address viability analysis
//! - [`RecommendationInput`] / [`RecommendationResult`] - Region-wide location ranking
//! - [`SourceLink`] - Citation attached to a result, deduplicated by URL
//! - [`HistoryItem`] - Saved report of a member account
//! - [`Session`] / [`StoredUser`] - Mock account records
//!
//! Result types mirror the JSON schema given to the model and use `camelCase`
//! field names on the wire.

pub mod account;
pub mod analysis;
pub mod history;
pub mod recommendation;
pub mod source;

pub use account::{AccountKind, GUEST_EMAIL, GUEST_NAME, Session, StoredUser};
pub use analysis::{
    AnalysisInput, AnalysisResult, Competitor, Demographics, FactorScore, NamedValue,
    OpportunityItem, Radius, RevenueEstimate, RiskItem, RiskSeverity, ScoreLevel, StrategyPhase,
    TimedValue,
};
pub use history::{HistoryItem, HistoryRecord};
pub use recommendation::{
    CompetitionIntensity, RecommendationInput, RecommendationResult, RecommendedLocation,
    WHOLE_AREA,
};
pub use source::{SourceLink, merge_sources};
