//! Helpers shared by the pipeline and the account layer.
//!
//! - [`json_extract`] - Locating and repairing JSON in free-text replies
//! - [`text_sanitizer`] - Citation marker removal
//! - [`token`] - Session token generation

pub mod json_extract;
pub mod text_sanitizer;
pub mod token;
