//! DTOs for the region recommendation endpoint.

use serde::Deserialize;
use url::form_urlencoded;
use validator::Validate;

use super::analysis::not_blank;
use crate::domain::catalog::{DEFAULT_BUDGET, DEFAULT_HOURS, DEFAULT_PARKING, DEFAULT_TARGET_AGE};
use crate::domain::entities::{RecommendationInput, WHOLE_AREA};
use crate::error::AppError;

fn or_default(value: Option<String>, default: &str) -> String {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
        .unwrap_or_else(|| default.to_string())
}

/// Request body of `POST /api/recommendation`.
///
/// Only the business type, city and district are required.
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct RecommendationRequest {
    #[validate(custom(function = "not_blank"))]
    pub business_type: String,

    #[validate(custom(function = "not_blank"))]
    pub city: String,

    #[validate(custom(function = "not_blank"))]
    pub district: String,

    pub dong: Option<String>,
    pub hours: Option<String>,
    pub budget: Option<String>,
    pub target_age: Option<String>,
    pub parking: Option<String>,
}

impl RecommendationRequest {
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] when a required field is blank.
    pub fn into_input(self) -> Result<RecommendationInput, AppError> {
        self.validate()?;

        Ok(RecommendationInput {
            business_type: self.business_type.trim().to_string(),
            city: self.city.trim().to_string(),
            district: self.district.trim().to_string(),
            dong: or_default(self.dong, WHOLE_AREA),
            hours: or_default(self.hours, DEFAULT_HOURS),
            budget: or_default(self.budget, DEFAULT_BUDGET),
            target_age: or_default(self.target_age, DEFAULT_TARGET_AGE),
            parking: or_default(self.parking, DEFAULT_PARKING),
        })
    }
}

/// Query string that restores this recommendation through `GET /api/restore`.
pub fn recommendation_share_query(input: &RecommendationInput) -> String {
    let mut query = form_urlencoded::Serializer::new(String::new());
    query
        .append_pair("mode", "recommendation")
        .append_pair("type", &input.business_type)
        .append_pair("city", &input.city)
        .append_pair("dist", &input.district);
    if !input.dong.is_empty() {
        query.append_pair("dong", &input.dong);
    }
    query
        .append_pair("hours", &input.hours)
        .append_pair("budget", &input.budget)
        .append_pair("age", &input.target_age)
        .append_pair("park", &input.parking)
        .finish()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_minimal_body_gets_defaults() {
        let request: RecommendationRequest = serde_json::from_value(json!({
            "businessType": "카페",
            "city": "서울시",
            "district": "마포구"
        }))
        .unwrap();

        let input = request.into_input().unwrap();

        assert_eq!(input.dong, "전체");
        assert_eq!(input.hours, "24시간");
        assert_eq!(input.budget, "제한 없음");
        assert_eq!(input.target_age, "전 연령층");
        assert_eq!(input.parking, "상관 없음");
    }

    #[test]
    fn test_missing_district_rejected() {
        let request: RecommendationRequest = serde_json::from_value(json!({
            "businessType": "카페",
            "city": "서울시",
            "district": ""
        }))
        .unwrap();

        let err = request.into_input().unwrap_err().to_error_info();
        assert!(err.details["fields"]["district"].is_array());
    }

    #[test]
    fn test_share_query_field_names() {
        let input = RecommendationInput {
            business_type: "Cafe".to_string(),
            city: "Seoul".to_string(),
            district: "Mapo".to_string(),
            dong: String::new(),
            hours: "24h".to_string(),
            budget: "any".to_string(),
            target_age: "20s".to_string(),
            parking: "none".to_string(),
        };

        assert_eq!(
            recommendation_share_query(&input),
            "mode=recommendation&type=Cafe&city=Seoul&dist=Mapo&hours=24h&budget=any&age=20s&park=none"
        );
    }
}
