//! Data Transfer Objects for API requests and responses.
//!
//! All DTOs use Serde for JSON serialization/deserialization and validator
//! for input validation. Request DTOs convert into domain inputs with
//! `into_input`, which is where optional fields receive their defaults.

pub mod analysis;
pub mod auth;
pub mod generation;
pub mod health;
pub mod history;
pub mod recommendation;
pub mod restore;
