//! DTOs for the address analysis endpoint.

use serde::Deserialize;
use serde_json::json;
use url::form_urlencoded;
use validator::{Validate, ValidationError};

use crate::domain::catalog::DEFAULT_HOURS;
use crate::domain::entities::{AnalysisInput, Radius};
use crate::error::AppError;

pub(crate) fn not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new("blank").with_message("must not be blank".into()));
    }
    Ok(())
}

pub(crate) fn radius_band(value: &str) -> Result<(), ValidationError> {
    match Radius::parse(value) {
        Some(_) => Ok(()),
        None => Err(ValidationError::new("radius").with_message("must be 250m, 500m or 1km".into())),
    }
}

/// Request body of `POST /api/analysis`.
///
/// `hours` and `radius` may be omitted.
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisRequest {
    #[validate(custom(function = "not_blank"))]
    pub address: String,

    #[validate(custom(function = "not_blank"))]
    pub business_type: String,

    pub hours: Option<String>,

    #[validate(custom(function = "radius_band"))]
    pub radius: Option<String>,
}

impl AnalysisRequest {
    /// Validates and converts into the domain input, applying defaults.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] for blank required fields or an unknown radius band.
    pub fn into_input(self) -> Result<AnalysisInput, AppError> {
        self.validate()?;

        let radius = match self.radius.as_deref() {
            Some(raw) => Radius::parse(raw).ok_or_else(|| {
                AppError::bad_request("Invalid radius", json!({ "radius": raw }))
            })?,
            None => Radius::default(),
        };

        Ok(AnalysisInput {
            address: self.address.trim().to_string(),
            business_type: self.business_type.trim().to_string(),
            hours: self
                .hours
                .map(|h| h.trim().to_string())
                .filter(|h| !h.is_empty())
                .unwrap_or_else(|| DEFAULT_HOURS.to_string()),
            radius,
        })
    }
}

/// Query string that restores this analysis through `GET /api/restore`.
pub fn analysis_share_query(input: &AnalysisInput) -> String {
    form_urlencoded::Serializer::new(String::new())
        .append_pair("mode", "analysis")
        .append_pair("addr", &input.address)
        .append_pair("type", &input.business_type)
        .append_pair("hours", &input.hours)
        .append_pair("radius", input.radius.as_str())
        .finish()
}
