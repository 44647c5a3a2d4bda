//! Location analysis input and result model.
//!
//! Field names follow the JSON schema the model is instructed to produce
//! (`camelCase`), so a sanitized reply deserializes straight into
//! [`AnalysisResult`].

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use serde_with::{DisplayFromStr, PickFirst, serde_as};
use std::fmt;

use super::source::SourceLink;

/// Search radius around the analysed address.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Radius {
    #[serde(rename = "250m")]
    M250,
    #[default]
    #[serde(rename = "500m")]
    M500,
    #[serde(rename = "1km")]
    Km1,
}

impl Radius {
    pub const ALL: [Radius; 3] = [Radius::M250, Radius::M500, Radius::Km1];

    pub fn as_str(&self) -> &'static str {
        match self {
            Radius::M250 => "250m",
            Radius::M500 => "500m",
            Radius::Km1 => "1km",
        }
    }

    /// Parses a radius band label, returning `None` for anything outside the fixed set.
    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|r| r.as_str() == value.trim())
    }
}

impl fmt::Display for Radius {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// User input for a single-address analysis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisInput {
    pub address: String,
    pub business_type: String,
    pub hours: String,
    pub radius: Radius,
}

/// Graded overall score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ScoreLevel {
    #[serde(rename = "위험")]
    Danger,
    #[serde(rename = "보통")]
    Fair,
    #[serde(rename = "좋음")]
    Good,
    #[serde(rename = "매우 좋음")]
    VeryGood,
    #[serde(rename = "S등급")]
    S,
    #[serde(rename = "A등급")]
    A,
    #[serde(rename = "B등급")]
    B,
    #[serde(rename = "C등급")]
    C,
    #[serde(rename = "D등급")]
    D,
    #[serde(rename = "F등급")]
    F,
}

#[serde_as]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RevenueEstimate {
    #[serde_as(as = "PickFirst<(_, DisplayFromStr)>")]
    pub daily_customers_min: f64,
    #[serde_as(as = "PickFirst<(_, DisplayFromStr)>")]
    pub daily_customers_max: f64,
    #[serde_as(as = "PickFirst<(_, DisplayFromStr)>")]
    pub monthly_revenue_min: f64,
    #[serde_as(as = "PickFirst<(_, DisplayFromStr)>")]
    pub monthly_revenue_max: f64,
    pub currency_unit: String,
    #[serde_as(as = "PickFirst<(_, DisplayFromStr)>")]
    pub net_profit_min: f64,
    #[serde_as(as = "PickFirst<(_, DisplayFromStr)>")]
    pub net_profit_max: f64,
    #[serde_as(as = "PickFirst<(_, DisplayFromStr)>")]
    pub annual_revenue_min: f64,
    #[serde_as(as = "PickFirst<(_, DisplayFromStr)>")]
    pub annual_revenue_max: f64,
}

#[serde_as]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FactorScore {
    pub category: String,
    #[serde_as(as = "PickFirst<(_, DisplayFromStr)>")]
    pub score: f64,
    #[serde_as(as = "PickFirst<(_, DisplayFromStr)>")]
    pub full_mark: f64,
    pub description: String,
}

#[serde_as]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NamedValue {
    pub name: String,
    #[serde_as(as = "PickFirst<(_, DisplayFromStr)>")]
    pub value: f64,
}

#[serde_as]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimedValue {
    pub time: String,
    #[serde_as(as = "PickFirst<(_, DisplayFromStr)>")]
    pub value: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Demographics {
    pub age_group: Vec<NamedValue>,
    pub time_flow: Vec<TimedValue>,
}

#[serde_as]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Competitor {
    pub name: String,
    pub distance: String,
    #[serde(rename = "type")]
    pub kind: String,
    /// 1 (negligible) to 5 (direct threat).
    #[serde_as(as = "Option<PickFirst<(_, DisplayFromStr)>>")]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub threat_level: Option<u8>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RiskSeverity {
    #[serde(rename = "높음")]
    High,
    #[serde(rename = "중간")]
    Medium,
    #[serde(rename = "주의")]
    Caution,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RiskItem {
    pub risk: String,
    pub severity: RiskSeverity,
    pub mitigation: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OpportunityItem {
    pub strength: String,
    pub utilization: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StrategyPhase {
    pub phase_name: String,
    pub period: String,
    pub actions: Vec<String>,
}

/// Rent statistics for the surrounding area, per 3.3㎡ in 만원.
#[serde_as]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RentalStats {
    #[serde_as(as = "PickFirst<(_, DisplayFromStr)>")]
    pub current_mean: f64,
    #[serde_as(as = "PickFirst<(_, DisplayFromStr)>")]
    pub average_deposit: f64,
    #[serde_as(as = "PickFirst<(_, DisplayFromStr)>")]
    pub median: f64,
    #[serde_as(as = "PickFirst<(_, DisplayFromStr)>")]
    pub top10_percent: f64,
    #[serde_as(as = "PickFirst<(_, DisplayFromStr)>")]
    pub bottom10_percent: f64,
    #[serde_as(as = "PickFirst<(_, DisplayFromStr)>")]
    pub monthly_change_rate: f64,
    #[serde_as(as = "PickFirst<(_, DisplayFromStr)>")]
    pub annualized_growth: f64,
    #[serde_as(as = "PickFirst<(_, DisplayFromStr)>")]
    pub z_score: f64,
    #[serde_as(as = "PickFirst<(_, DisplayFromStr)>")]
    pub standard_deviation: f64,
}

#[serde_as]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RentBenchmark {
    #[serde_as(as = "PickFirst<(_, DisplayFromStr)>")]
    pub target_area: f64,
    #[serde_as(as = "PickFirst<(_, DisplayFromStr)>")]
    pub similar_area: f64,
    #[serde_as(as = "PickFirst<(_, DisplayFromStr)>")]
    pub gap_percentage: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CashFlowScenario {
    Optimistic,
    Neutral,
    Pessimistic,
}

#[serde_as]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CashFlowSimulation {
    pub scenario: CashFlowScenario,
    #[serde_as(as = "PickFirst<(_, DisplayFromStr)>")]
    pub monthly_revenue: f64,
    #[serde_as(as = "PickFirst<(_, DisplayFromStr)>")]
    pub rent_cost: f64,
    #[serde_as(as = "PickFirst<(_, DisplayFromStr)>")]
    pub other_costs: f64,
    #[serde_as(as = "PickFirst<(_, DisplayFromStr)>")]
    pub net_profit: f64,
    #[serde_as(as = "PickFirst<(_, DisplayFromStr)>")]
    pub rent_to_revenue_ratio: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LeaseTerm {
    #[serde(rename = "단기 계약")]
    Short,
    #[serde(rename = "중기 계약")]
    Medium,
    #[serde(rename = "장기 계약")]
    Long,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NegotiationStrategy {
    #[serde(rename = "type")]
    pub term: LeaseTerm,
    pub template: String,
    pub key_points: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RentalAnalysis {
    pub radius: String,
    pub stats: RentalStats,
    /// Last twelve months, oldest first.
    pub trend: Vec<TimedValue>,
    pub benchmark: RentBenchmark,
    pub cash_flows: Vec<CashFlowSimulation>,
    pub strategies: Vec<NegotiationStrategy>,
    #[serde(default)]
    pub sources: Vec<SourceLink>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GrowthEventStatus {
    Planned,
    Ongoing,
    Completed,
    Rumor,
}

#[serde_as]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GrowthEvent {
    pub date: String,
    pub event_name: String,
    #[serde_as(as = "PickFirst<(_, DisplayFromStr)>")]
    pub impact_score: f64,
    pub description: String,
    pub status: GrowthEventStatus,
}

#[serde_as]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GrowthPrediction {
    #[serde_as(as = "PickFirst<(_, DisplayFromStr)>")]
    pub score: f64,
    #[serde_as(as = "PickFirst<(_, DisplayFromStr)>")]
    pub prediction3_month: f64,
    #[serde_as(as = "PickFirst<(_, DisplayFromStr)>")]
    pub prediction6_month: f64,
    #[serde_as(as = "PickFirst<(_, DisplayFromStr)>")]
    pub prediction1_year: f64,
    pub timeline: Vec<GrowthEvent>,
    pub reasoning: String,
    #[serde(default)]
    pub sources: Vec<SourceLink>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AlertKind {
    Weather,
    Traffic,
    Event,
    Competitor,
    Construction,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AlertSeverity {
    High,
    Medium,
    Low,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RealTimeAlert {
    pub id: String,
    pub timestamp: String,
    #[serde(rename = "type")]
    pub kind: AlertKind,
    pub severity: AlertSeverity,
    pub message: String,
    pub impact: String,
    pub action: String,
    pub source: String,
}

/// Commercial-viability analysis for one address.
#[serde_as]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResult {
    /// 0 to 100.
    #[serde_as(as = "PickFirst<(_, DisplayFromStr)>")]
    pub overall_score: f64,
    pub score_level: ScoreLevel,
    pub summary: String,
    pub revenue: RevenueEstimate,
    pub factors: Vec<FactorScore>,
    pub demographics: Demographics,
    pub competitors: Vec<Competitor>,
    pub risks: Vec<RiskItem>,
    pub opportunities: Vec<OpportunityItem>,
    pub strategies: Vec<StrategyPhase>,
    #[serde(
        default,
        deserialize_with = "optional_section",
        skip_serializing_if = "Option::is_none"
    )]
    pub rental_analysis: Option<RentalAnalysis>,
    #[serde(
        default,
        deserialize_with = "optional_section",
        skip_serializing_if = "Option::is_none"
    )]
    pub growth_prediction: Option<GrowthPrediction>,
    #[serde(
        default,
        deserialize_with = "optional_section",
        skip_serializing_if = "Option::is_none"
    )]
    pub real_time_alerts: Option<Vec<RealTimeAlert>>,
    #[serde(default)]
    pub sources: Vec<SourceLink>,
}

/// Decodes an optional report section, dropping it when it does not match
/// its schema so the rest of the reply still decodes.
fn optional_section<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let raw = Option::<Value>::deserialize(deserializer)?;
    let Some(raw) = raw.filter(|v| !v.is_null()) else {
        return Ok(None);
    };

    match serde_json::from_value(raw) {
        Ok(section) => Ok(Some(section)),
        Err(e) => {
            tracing::warn!("Dropping malformed optional section: {}", e);
            Ok(None)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_radius_labels() {
        assert_eq!(Radius::parse("250m"), Some(Radius::M250));
        assert_eq!(Radius::parse(" 1km "), Some(Radius::Km1));
        assert_eq!(Radius::parse("2km"), None);
        assert_eq!(Radius::default().to_string(), "500m");
        assert_eq!(serde_json::to_value(Radius::Km1).unwrap(), json!("1km"));
    }

    #[test]
    fn test_input_uses_camel_case() {
        let input: AnalysisInput = serde_json::from_value(json!({
            "address": "서울시 강남구 강남대로 396",
            "businessType": "카페",
            "hours": "24시간",
            "radius": "250m"
        }))
        .unwrap();

        assert_eq!(input.business_type, "카페");
        assert_eq!(input.radius, Radius::M250);
    }

    #[test]
    fn test_score_accepts_numeric_string() {
        let factor: FactorScore = serde_json::from_value(json!({
            "category": "유동인구",
            "score": "90",
            "fullMark": 100,
            "description": "활발함"
        }))
        .unwrap();

        assert_eq!(factor.score, 90.0);
    }

    #[test]
    fn test_numbers_accept_numeric_strings_everywhere() {
        let demographics: Demographics = serde_json::from_value(json!({
            "ageGroup": [{ "name": "20대", "value": "25" }],
            "timeFlow": [{ "time": "18시", "value": 40 }]
        }))
        .unwrap();
        assert_eq!(demographics.age_group[0].value, 25.0);

        let competitor: Competitor = serde_json::from_value(json!({
            "name": "스타벅스",
            "distance": "120m",
            "type": "프랜차이즈",
            "threatLevel": "4"
        }))
        .unwrap();
        assert_eq!(competitor.threat_level, Some(4));

        let event: GrowthEvent = serde_json::from_value(json!({
            "date": "2025-06",
            "eventName": "역세권 개발",
            "impactScore": "8.5",
            "description": "착공",
            "status": "planned"
        }))
        .unwrap();
        assert_eq!(event.impact_score, 8.5);
    }

    #[test]
    fn test_malformed_optional_section_is_dropped() {
        let mut value = serde_json::to_value(crate::domain::demo::analysis_result()).unwrap();
        value["growthPrediction"] = json!({ "score": "high" });
        value["realTimeAlerts"] = json!([{ "id": "a1", "type": "meteor" }]);

        let result: AnalysisResult = serde_json::from_value(value).unwrap();

        assert!(result.growth_prediction.is_none());
        assert!(result.real_time_alerts.is_none());
        assert_eq!(result.summary, crate::domain::demo::analysis_result().summary);
    }

    #[test]
    fn test_unknown_score_level_is_rejected() {
        let level = serde_json::from_value::<ScoreLevel>(json!("Z등급"));
        assert!(level.is_err());

        let level: ScoreLevel = serde_json::from_value(json!("매우 좋음")).unwrap();
        assert_eq!(level, ScoreLevel::VeryGood);
    }
}
