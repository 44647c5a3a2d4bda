//! Response envelope shared by the provider-backed endpoints.

use serde::Serialize;

use crate::domain::outcome::Outcome;

/// Result of an analysis or recommendation request.
///
/// ```json
/// {
///   "outcome": "fallback",
///   "fallbackReason": "missing_credential",
///   "result": { ... },
///   "shareQuery": "mode=analysis&addr=...",
///   "historyId": "1741943100000-0000beef"
/// }
/// ```
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationResponse<T> {
    pub outcome: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fallback_reason: Option<&'static str>,
    pub result: T,
    pub share_query: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub history_id: Option<String>,
}

impl<T> GenerationResponse<T> {
    pub fn new(outcome: Outcome<T>, share_query: String) -> Self {
        let label = outcome.label();
        let fallback_reason = outcome.reason().map(|r| r.code());

        Self {
            outcome: label,
            fallback_reason,
            result: outcome.into_value(),
            share_query,
            history_id: None,
        }
    }

    pub fn with_history_id(mut self, id: Option<String>) -> Self {
        self.history_id = id;
        self
    }
}

/// `GET /api/restore` response: the rebuilt request next to its result.
#[derive(Debug, Serialize)]
pub struct RestoreResponse<I, T> {
    pub mode: &'static str,
    pub input: I,
    #[serde(flatten)]
    pub response: GenerationResponse<T>,
}
