//! DTOs for history endpoints.

use serde::Serialize;

use crate::domain::entities::{HistoryItem, HistoryRecord};

/// List entry without the stored input and result.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HistorySummary {
    pub id: String,
    pub timestamp: i64,
    pub date_str: String,
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub title: String,
    pub subtitle: String,
}

impl From<&HistoryItem> for HistorySummary {
    fn from(item: &HistoryItem) -> Self {
        Self {
            id: item.id.clone(),
            timestamp: item.timestamp,
            date_str: item.date_str.clone(),
            kind: match item.record {
                HistoryRecord::Analysis { .. } => "analysis",
                HistoryRecord::Recommendation { .. } => "recommendation",
            },
            title: item.title.clone(),
            subtitle: item.subtitle.clone(),
        }
    }
}

/// `GET /api/history` response, most recent first.
#[derive(Debug, Serialize)]
pub struct HistoryListResponse {
    pub total: usize,
    pub items: Vec<HistorySummary>,
}

impl From<&[HistoryItem]> for HistoryListResponse {
    fn from(items: &[HistoryItem]) -> Self {
        Self {
            total: items.len(),
            items: items.iter().map(HistorySummary::from).collect(),
        }
    }
}
