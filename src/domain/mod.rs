//! Domain layer containing business entities and logic.
//!
//! Everything here is independent of HTTP, storage backends and the concrete
//! model provider.
//!
//! # Architecture
//!
//! - [`entities`] - Request inputs, model results, accounts and history
//! - [`repositories`] - Data access trait definitions
//! - [`prompt`] - Prompt rendering for both request kinds
//! - [`grounding`] - Grounding chunk decoding and source extraction
//! - [`outcome`] - Live-or-fallback result wrapper
//! - [`demo`] - Fixed payloads served when live generation is unavailable
//! - [`catalog`] - Option lists offered to clients

pub mod catalog;
pub mod demo;
pub mod entities;
pub mod grounding;
pub mod outcome;
pub mod prompt;
pub mod repositories;
