//! Provider trait and error types.

use crate::domain::grounding::GroundingChunk;
use async_trait::async_trait;
use thiserror::Error;

/// A provider reply: free text plus the grounding references behind it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Generation {
    pub text: String,
    pub grounding: Vec<GroundingChunk>,
}

#[derive(Debug, Error)]
pub enum ProviderError {
    #[error("transport error: {0}")]
    Transport(String),

    #[error("provider returned {status}: {body}")]
    Status { status: u16, body: String },

    #[error("could not decode provider response: {0}")]
    Decode(String),
}

/// Sends one prompt to a language model with web search and map retrieval enabled.
///
/// Implementations make exactly one attempt per call.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait GenerationProvider: Send + Sync {
    async fn generate(&self, prompt: &str) -> Result<Generation, ProviderError>;
}
