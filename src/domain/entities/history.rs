//! Saved analysis/recommendation reports for member accounts.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::analysis::{AnalysisInput, AnalysisResult};
use super::recommendation::{RecommendationInput, RecommendationResult};

const ANALYSIS_SUBTITLE: &str = "상권 분석 리포트";
const RECOMMENDATION_SUBTITLE: &str = "입지 추천 리포트";

/// Input/result pair of a completed request, tagged by request type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum HistoryRecord {
    Analysis {
        input: AnalysisInput,
        result: AnalysisResult,
    },
    Recommendation {
        input: RecommendationInput,
        result: RecommendationResult,
    },
}

impl HistoryRecord {
    /// Display title: the first two address words plus business type, or region plus business type.
    pub fn title(&self) -> String {
        match self {
            HistoryRecord::Analysis { input, .. } => {
                let area = input
                    .address
                    .split(' ')
                    .take(2)
                    .collect::<Vec<_>>()
                    .join(" ");
                format!("{} - {}", area, input.business_type)
            }
            HistoryRecord::Recommendation { input, .. } => {
                format!("{} {} - {}", input.city, input.district, input.business_type)
            }
        }
    }

    pub fn subtitle(&self) -> &'static str {
        match self {
            HistoryRecord::Analysis { .. } => ANALYSIS_SUBTITLE,
            HistoryRecord::Recommendation { .. } => RECOMMENDATION_SUBTITLE,
        }
    }
}

/// A saved report. Never mutated after creation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoryItem {
    pub id: String,
    /// Creation time in epoch milliseconds.
    pub timestamp: i64,
    pub date_str: String,
    pub title: String,
    pub subtitle: String,
    #[serde(flatten)]
    pub record: HistoryRecord,
}

impl HistoryItem {
    /// Builds an item stamped at `now`. `suffix` disambiguates items created in the same millisecond.
    pub fn new(record: HistoryRecord, now: DateTime<Utc>, suffix: u32) -> Self {
        let timestamp = now.timestamp_millis();
        Self {
            id: format!("{}-{:08x}", timestamp, suffix),
            timestamp,
            date_str: now.format("%Y-%m-%d %H:%M").to_string(),
            title: record.title(),
            subtitle: record.subtitle().to_string(),
            record,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::demo;
    use crate::domain::entities::Radius;
    use chrono::TimeZone;
    use serde_json::Value;

    fn analysis_record() -> HistoryRecord {
        HistoryRecord::Analysis {
            input: AnalysisInput {
                address: "서울시 강남구 강남대로 396".to_string(),
                business_type: "카페".to_string(),
                hours: "24시간".to_string(),
                radius: Radius::M500,
            },
            result: demo::analysis_result(),
        }
    }

    #[test]
    fn test_analysis_title() {
        let record = analysis_record();
        assert_eq!(record.title(), "서울시 강남구 - 카페");
        assert_eq!(record.subtitle(), "상권 분석 리포트");
    }

    #[test]
    fn test_recommendation_title() {
        let record = HistoryRecord::Recommendation {
            input: RecommendationInput {
                business_type: "베이커리".to_string(),
                city: "서울시".to_string(),
                district: "성동구".to_string(),
                dong: "성수동".to_string(),
                hours: "10:00 - 22:00 (일반)".to_string(),
                budget: "제한 없음".to_string(),
                target_age: "20대".to_string(),
                parking: "상관 없음".to_string(),
            },
            result: demo::recommendation_result(),
        };

        assert_eq!(record.title(), "서울시 성동구 - 베이커리");
        assert_eq!(record.subtitle(), "입지 추천 리포트");
    }

    #[test]
    fn test_item_stamping_and_flattened_shape() {
        let now = Utc.with_ymd_and_hms(2025, 3, 14, 9, 5, 0).unwrap();
        let item = HistoryItem::new(analysis_record(), now, 0xbeef);

        assert_eq!(item.timestamp, now.timestamp_millis());
        assert_eq!(item.id, format!("{}-0000beef", now.timestamp_millis()));
        assert_eq!(item.date_str, "2025-03-14 09:05");

        let json: Value = serde_json::to_value(&item).unwrap();
        assert_eq!(json["type"], "analysis");
        assert_eq!(json["input"]["businessType"], "카페");
        assert_eq!(json["result"]["overallScore"], 85.0);

        let back: HistoryItem = serde_json::from_value(json).unwrap();
        assert_eq!(back, item);
    }
}
