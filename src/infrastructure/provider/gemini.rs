//! Gemini `generateContent` client.

use super::service::{Generation, GenerationProvider, ProviderError};
use crate::domain::grounding::{GroundingChunk, RawGroundingChunk};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::{debug, info};

pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com";
pub const DEFAULT_MODEL: &str = "gemini-2.5-flash";

const API_KEY_HEADER: &str = "x-goog-api-key";

/// Calls Gemini with both the Google Search and Google Maps tools enabled.
pub struct GeminiProvider {
    client: reqwest::Client,
    api_key: String,
    endpoint: String,
}

impl GeminiProvider {
    /// Builds a client for `model` under `base_url`.
    ///
    /// # Errors
    ///
    /// Returns [`ProviderError::Transport`] if the HTTP client cannot be constructed.
    pub fn new(
        api_key: impl Into<String>,
        model: &str,
        base_url: &str,
        timeout: Duration,
    ) -> Result<Self, ProviderError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| ProviderError::Transport(e.to_string()))?;

        let endpoint = format!(
            "{}/v1beta/models/{}:generateContent",
            base_url.trim_end_matches('/'),
            model
        );
        info!("Gemini provider configured: {}", endpoint);

        Ok(Self {
            client,
            api_key: api_key.into(),
            endpoint,
        })
    }
}

#[derive(Serialize)]
struct GenerateRequest<'a> {
    contents: [Content<'a>; 1],
    tools: [Tool; 2],
}

#[derive(Serialize)]
struct Content<'a> {
    role: &'static str,
    parts: [Part<'a>; 1],
}

#[derive(Serialize)]
struct Part<'a> {
    text: &'a str,
}

/// Empty tool configuration object, serialized as `{}`.
#[derive(Serialize)]
struct EnabledTool {}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
enum Tool {
    GoogleMaps(EnabledTool),
    GoogleSearch(EnabledTool),
}

impl<'a> GenerateRequest<'a> {
    fn new(prompt: &'a str) -> Self {
        Self {
            contents: [Content {
                role: "user",
                parts: [Part { text: prompt }],
            }],
            tools: [
                Tool::GoogleMaps(EnabledTool {}),
                Tool::GoogleSearch(EnabledTool {}),
            ],
        }
    }
}

#[derive(Debug, Default, Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Candidate {
    #[serde(default)]
    content: Option<CandidateContent>,
    #[serde(default)]
    grounding_metadata: Option<GroundingMetadata>,
}

#[derive(Debug, Default, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<ResponsePart>,
}

#[derive(Debug, Default, Deserialize)]
struct ResponsePart {
    #[serde(default)]
    text: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct GroundingMetadata {
    #[serde(default)]
    grounding_chunks: Vec<RawGroundingChunk>,
}

impl From<GenerateResponse> for Generation {
    /// Joins the first candidate's text parts and decodes its grounding chunks.
    fn from(response: GenerateResponse) -> Self {
        let Some(candidate) = response.candidates.into_iter().next() else {
            return Generation::default();
        };

        let text = candidate
            .content
            .map(|c| {
                c.parts
                    .into_iter()
                    .filter_map(|p| p.text)
                    .collect::<String>()
            })
            .unwrap_or_default();

        let grounding = candidate
            .grounding_metadata
            .map(|m| {
                m.grounding_chunks
                    .into_iter()
                    .map(GroundingChunk::from)
                    .collect()
            })
            .unwrap_or_default();

        Generation { text, grounding }
    }
}

#[async_trait]
impl GenerationProvider for GeminiProvider {
    async fn generate(&self, prompt: &str) -> Result<Generation, ProviderError> {
        let response = self
            .client
            .post(&self.endpoint)
            .header(API_KEY_HEADER, &self.api_key)
            .json(&GenerateRequest::new(prompt))
            .send()
            .await
            .map_err(|e| ProviderError::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ProviderError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let decoded: GenerateResponse = response
            .json()
            .await
            .map_err(|e| ProviderError::Decode(e.to_string()))?;

        let generation = Generation::from(decoded);
        debug!(
            "Gemini reply: {} chars, {} grounding chunks",
            generation.text.len(),
            generation.grounding.len()
        );

        Ok(generation)
    }
}
