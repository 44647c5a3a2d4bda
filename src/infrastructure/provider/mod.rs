//! Generation provider used to produce analysis and recommendation replies.
//!
//! - [`GenerationProvider`] - trait seam the application services depend on
//! - [`GeminiProvider`] - Gemini `generateContent` REST client with search and map grounding

mod gemini;
mod service;

pub use gemini::{DEFAULT_BASE_URL, DEFAULT_MODEL, GeminiProvider};
pub use service::{Generation, GenerationProvider, ProviderError};

#[cfg(test)]
pub use service::MockGenerationProvider;
