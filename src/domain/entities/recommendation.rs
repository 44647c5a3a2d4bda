//! Region-level location recommendation input and result model.

use serde::{Deserialize, Serialize};
use serde_with::{DisplayFromStr, PickFirst, serde_as};

use super::source::SourceLink;

/// Marker used by the region pickers for "no narrower filter".
pub const WHOLE_AREA: &str = "전체";

/// User input for a region-wide recommendation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecommendationInput {
    pub business_type: String,
    pub city: String,
    pub district: String,
    pub dong: String,
    pub hours: String,
    pub budget: String,
    pub target_age: String,
    pub parking: String,
}

impl RecommendationInput {
    /// Human-readable region, skipping district/dong when they are empty or the whole-area marker.
    pub fn region(&self) -> String {
        [&self.city, &self.district, &self.dong]
            .into_iter()
            .map(|part| part.trim())
            .filter(|part| !part.is_empty() && *part != WHOLE_AREA)
            .collect::<Vec<_>>()
            .join(" ")
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CompetitionIntensity {
    #[serde(rename = "낮음")]
    Low,
    #[serde(rename = "중간")]
    Medium,
    #[serde(rename = "높음")]
    High,
}

#[serde_as]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecommendedLocation {
    #[serde_as(as = "PickFirst<(_, DisplayFromStr)>")]
    pub rank: u32,
    pub location_name: String,
    pub area: String,
    #[serde_as(as = "PickFirst<(_, DisplayFromStr)>")]
    pub score: f64,
    #[serde_as(as = "PickFirst<(_, DisplayFromStr)>")]
    pub daily_floating_population: f64,
    pub peak_time: String,
    pub main_age_group: String,
    pub competition_intensity: CompetitionIntensity,
    pub surrounding_environment: String,
    pub transport_access: String,
    pub parking_info: String,
    #[serde_as(as = "PickFirst<(_, DisplayFromStr)>")]
    pub estimated_rent_min: f64,
    #[serde_as(as = "PickFirst<(_, DisplayFromStr)>")]
    pub estimated_rent_max: f64,
    #[serde_as(as = "PickFirst<(_, DisplayFromStr)>")]
    pub estimated_revenue_min: f64,
    #[serde_as(as = "PickFirst<(_, DisplayFromStr)>")]
    pub estimated_revenue_max: f64,
    pub reason: String,
    pub caution: String,
}

/// Ranked candidate locations for a business in a region.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecommendationResult {
    pub summary: String,
    pub expert_advice: String,
    pub locations: Vec<RecommendedLocation>,
    #[serde(default)]
    pub sources: Vec<SourceLink>,
}
