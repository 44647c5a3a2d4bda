//! Infrastructure layer for external integrations.
//!
//! # Modules
//!
//! - [`store`] - Key-value storage (in-memory and Redis)
//! - [`persistence`] - Repository implementations on top of the store
//! - [`provider`] - Language model client

pub mod persistence;
pub mod provider;
pub mod store;
