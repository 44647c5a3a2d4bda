//! Deep-link query parameters for `GET /api/restore`.
//!
//! Parameter names are the ones produced by the `shareQuery` field of
//! analysis and recommendation responses.

use serde::{Deserialize, Serialize};
use serde_json::json;

use crate::domain::catalog::{DEFAULT_BUDGET, DEFAULT_HOURS, DEFAULT_PARKING, DEFAULT_TARGET_AGE};
use crate::domain::entities::{AnalysisInput, Radius, RecommendationInput, WHOLE_AREA};
use crate::error::AppError;

#[derive(Debug, Default, Deserialize)]
pub struct RestoreQuery {
    pub mode: Option<String>,
    pub addr: Option<String>,
    #[serde(rename = "type")]
    pub business_type: Option<String>,
    pub hours: Option<String>,
    pub radius: Option<String>,
    pub city: Option<String>,
    pub dist: Option<String>,
    pub dong: Option<String>,
    pub budget: Option<String>,
    pub age: Option<String>,
    pub park: Option<String>,
}

/// A request rebuilt from a deep link.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "mode", content = "input", rename_all = "lowercase")]
pub enum RestoredRequest {
    Analysis(AnalysisInput),
    Recommendation(RecommendationInput),
}

fn present(value: Option<String>) -> Option<String> {
    value.map(|v| v.trim().to_string()).filter(|v| !v.is_empty())
}

fn missing_params(missing: Vec<&'static str>) -> AppError {
    AppError::bad_request(
        "Missing required query parameters",
        json!({ "missing": missing }),
    )
}

impl RestoreQuery {
    /// Rebuilds the request, filling optional parameters with their defaults.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] for an unknown `mode`, a missing
    /// required parameter, or a radius outside the fixed bands.
    pub fn into_request(self) -> Result<RestoredRequest, AppError> {
        match self.mode.as_deref().map(str::trim) {
            Some("analysis") => self.into_analysis().map(RestoredRequest::Analysis),
            Some("recommendation") => self
                .into_recommendation()
                .map(RestoredRequest::Recommendation),
            other => Err(AppError::bad_request(
                "Unknown restore mode",
                json!({ "mode": other, "expected": ["analysis", "recommendation"] }),
            )),
        }
    }

    fn into_analysis(self) -> Result<AnalysisInput, AppError> {
        let address = present(self.addr);
        let business_type = present(self.business_type);

        let (Some(address), Some(business_type)) = (address.clone(), business_type.clone()) else {
            let mut missing = Vec::new();
            if address.is_none() {
                missing.push("addr");
            }
            if business_type.is_none() {
                missing.push("type");
            }
            return Err(missing_params(missing));
        };

        let radius = match present(self.radius) {
            Some(raw) => Radius::parse(&raw)
                .ok_or_else(|| AppError::bad_request("Invalid radius", json!({ "radius": raw })))?,
            None => Radius::default(),
        };

        Ok(AnalysisInput {
            address,
            business_type,
            hours: present(self.hours).unwrap_or_else(|| DEFAULT_HOURS.to_string()),
            radius,
        })
    }

    fn into_recommendation(self) -> Result<RecommendationInput, AppError> {
        let required = [
            ("type", present(self.business_type)),
            ("city", present(self.city)),
            ("dist", present(self.dist)),
        ];

        let missing: Vec<&'static str> = required
            .iter()
            .filter(|(_, value)| value.is_none())
            .map(|(name, _)| *name)
            .collect();
        if !missing.is_empty() {
            return Err(missing_params(missing));
        }

        let [business_type, city, district] = required.map(|(_, value)| value.unwrap_or_default());

        Ok(RecommendationInput {
            business_type,
            city,
            district,
            dong: present(self.dong).unwrap_or_else(|| WHOLE_AREA.to_string()),
            hours: present(self.hours).unwrap_or_else(|| DEFAULT_HOURS.to_string()),
            budget: present(self.budget).unwrap_or_else(|| DEFAULT_BUDGET.to_string()),
            target_age: present(self.age).unwrap_or_else(|| DEFAULT_TARGET_AGE.to_string()),
            parking: present(self.park).unwrap_or_else(|| DEFAULT_PARKING.to_string()),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn analysis_query() -> RestoreQuery {
        RestoreQuery {
            mode: Some("analysis".to_string()),
            addr: Some("서울시 강남구 강남대로 396".to_string()),
            business_type: Some("카페".to_string()),
            ..Default::default()
        }
    }

    #[test]
    fn test_analysis_defaults() {
        let restored = analysis_query().into_request().unwrap();

        let RestoredRequest::Analysis(input) = restored else {
            panic!("expected analysis");
        };
        assert_eq!(input.hours, "24시간");
        assert_eq!(input.radius, Radius::M500);
    }

    #[test]
    fn test_recommendation_defaults() {
        let query = RestoreQuery {
            mode: Some("recommendation".to_string()),
            business_type: Some("카페".to_string()),
            city: Some("서울시".to_string()),
            dist: Some("마포구".to_string()),
            ..Default::default()
        };

        let RestoredRequest::Recommendation(input) = query.into_request().unwrap() else {
            panic!("expected recommendation");
        };
        assert_eq!(input.district, "마포구");
        assert_eq!(input.dong, "전체");
        assert_eq!(input.budget, "제한 없음");
        assert_eq!(input.target_age, "전 연령층");
        assert_eq!(input.parking, "상관 없음");
    }

    #[test]
    fn test_missing_required_lists_names() {
        let query = RestoreQuery {
            mode: Some("recommendation".to_string()),
            city: Some("서울시".to_string()),
            ..Default::default()
        };

        let err = query.into_request().unwrap_err().to_error_info();
        assert_eq!(err.details["missing"], json!(["type", "dist"]));

        let mut query = analysis_query();
        query.addr = Some("  ".to_string());
        let err = query.into_request().unwrap_err().to_error_info();
        assert_eq!(err.details["missing"], json!(["addr"]));
    }

    #[test]
    fn test_unknown_mode_rejected() {
        let err = RestoreQuery::default().into_request().unwrap_err();
        assert!(matches!(err, AppError::Validation { .. }));
    }

    #[test]
    fn test_restored_request_shape() {
        let value = serde_json::to_value(analysis_query().into_request().unwrap()).unwrap();
        assert_eq!(value["mode"], "analysis");
        assert_eq!(value["input"]["businessType"], "카페");
    }
}
