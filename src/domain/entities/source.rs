//! Citation links attached to analysis results.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Provenance classification of a source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SourceKind {
    Official,
    RealTransaction,
    PublicData,
    News,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Confidence {
    High,
    Medium,
    Low,
}

/// A cited source. Identity is the URL.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceLink {
    pub title: String,
    pub url: String,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<SourceKind>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub confidence: Option<Confidence>,
}

impl SourceLink {
    pub fn new(title: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            url: url.into(),
            kind: None,
            confidence: None,
        }
    }
}

/// Appends `extra` to `existing`, dropping any link whose URL was already seen.
///
/// Order is preserved and the first occurrence of a URL wins.
pub fn merge_sources(existing: Vec<SourceLink>, extra: Vec<SourceLink>) -> Vec<SourceLink> {
    let mut seen = HashSet::new();
    existing
        .into_iter()
        .chain(extra)
        .filter(|link| seen.insert(link.url.clone()))
        .collect()
}
