//! Generation pipeline for analyses and recommendations.
//!
//! prompt → provider → JSON extraction and repair → citation cleanup →
//! typed decode → source merge. Any failure along the way yields the demo
//! payload wrapped in [`Outcome::Fallback`], never an error.

use serde::de::DeserializeOwned;
use std::sync::Arc;
use std::time::Duration;
use tracing::{error, info, warn};

use crate::domain::demo;
use crate::domain::entities::{
    AnalysisInput, AnalysisResult, RecommendationInput, RecommendationResult, SourceLink,
    merge_sources,
};
use crate::domain::grounding::extract_sources;
use crate::domain::outcome::{FallbackReason, Outcome};
use crate::domain::prompt::{analysis_prompt, recommendation_prompt};
use crate::infrastructure::provider::GenerationProvider;
use crate::utils::json_extract::extract_json;
use crate::utils::text_sanitizer::sanitize_value;

pub const OUTCOME_COUNTER: &str = "bizinsight_outcomes_total";

pub const DEFAULT_ANALYSIS_DEMO_DELAY: Duration = Duration::from_millis(2500);
pub const DEFAULT_RECOMMENDATION_DEMO_DELAY: Duration = Duration::from_millis(3000);

/// Result types that carry a citation list.
pub trait Cited: DeserializeOwned {
    fn sources_mut(&mut self) -> &mut Vec<SourceLink>;
}

impl Cited for AnalysisResult {
    fn sources_mut(&mut self) -> &mut Vec<SourceLink> {
        &mut self.sources
    }
}

impl Cited for RecommendationResult {
    fn sources_mut(&mut self) -> &mut Vec<SourceLink> {
        &mut self.sources
    }
}

/// Which pipeline a request runs through; used for logs and metric labels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Analysis,
    Recommendation,
}

impl Mode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Mode::Analysis => "analysis",
            Mode::Recommendation => "recommendation",
        }
    }
}

/// Runs analysis and recommendation requests against the configured provider.
///
/// Without a provider the service is in demo mode: it waits for the configured
/// delay and returns the demo payload.
pub struct AnalysisService {
    provider: Option<Arc<dyn GenerationProvider>>,
    analysis_demo_delay: Duration,
    recommendation_demo_delay: Duration,
}

impl AnalysisService {
    pub fn new(
        provider: Option<Arc<dyn GenerationProvider>>,
        analysis_demo_delay: Duration,
        recommendation_demo_delay: Duration,
    ) -> Self {
        Self {
            provider,
            analysis_demo_delay,
            recommendation_demo_delay,
        }
    }

    /// Whether a live provider is configured.
    pub fn is_live(&self) -> bool {
        self.provider.is_some()
    }

    pub async fn analyze(&self, input: &AnalysisInput) -> Outcome<AnalysisResult> {
        self.run(
            Mode::Analysis,
            analysis_prompt(input),
            self.analysis_demo_delay,
            demo::analysis_result,
        )
        .await
    }

    pub async fn recommend(&self, input: &RecommendationInput) -> Outcome<RecommendationResult> {
        self.run(
            Mode::Recommendation,
            recommendation_prompt(input),
            self.recommendation_demo_delay,
            demo::recommendation_result,
        )
        .await
    }

    async fn run<T: Cited>(
        &self,
        mode: Mode,
        prompt: String,
        demo_delay: Duration,
        demo: fn() -> T,
    ) -> Outcome<T> {
        let outcome = match &self.provider {
            None => {
                warn!("No provider credential configured, serving demo {}", mode.as_str());
                tokio::time::sleep(demo_delay).await;
                Outcome::fallback(demo(), FallbackReason::MissingCredential)
            }
            Some(provider) => match generate::<T>(provider.as_ref(), &prompt).await {
                Ok(value) => Outcome::Live(value),
                Err(reason) => {
                    error!("{} generation failed: {}", mode.as_str(), reason);
                    Outcome::fallback(demo(), reason)
                }
            },
        };

        metrics::counter!(
            OUTCOME_COUNTER,
            "mode" => mode.as_str(),
            "outcome" => outcome.label()
        )
        .increment(1);
        info!("{} finished: {}", mode.as_str(), outcome.label());

        outcome
    }
}

/// One provider round trip, decoded into `T` with grounding sources merged in.
async fn generate<T: Cited>(
    provider: &dyn GenerationProvider,
    prompt: &str,
) -> Result<T, FallbackReason> {
    let generation = provider
        .generate(prompt)
        .await
        .map_err(|e| FallbackReason::Provider(e.to_string()))?;

    if generation.text.trim().is_empty() {
        return Err(FallbackReason::EmptyReply);
    }

    let raw = extract_json(&generation.text).map_err(|e| FallbackReason::Parse(e.to_string()))?;
    let mut value: T = serde_json::from_value(sanitize_value(raw))
        .map_err(|e| FallbackReason::Parse(e.to_string()))?;

    let existing = std::mem::take(value.sources_mut());
    *value.sources_mut() = merge_sources(existing, extract_sources(&generation.grounding));

    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::Radius;
    use crate::domain::grounding::GroundingChunk;
    use crate::infrastructure::provider::{Generation, MockGenerationProvider, ProviderError};
    use serde_json::json;

    fn input() -> AnalysisInput {
        AnalysisInput {
            address: "Seoul Gangnam".to_string(),
            business_type: "Cafe".to_string(),
            hours: "24h".to_string(),
            radius: Radius::M500,
        }
    }

    fn recommendation_input() -> RecommendationInput {
        RecommendationInput {
            business_type: "카페".to_string(),
            city: "서울시".to_string(),
            district: "마포구".to_string(),
            dong: "전체".to_string(),
            hours: "24시간".to_string(),
            budget: "제한 없음".to_string(),
            target_age: "전 연령층".to_string(),
            parking: "상관 없음".to_string(),
        }
    }

    /// Collects formatted log output for the duration of a test.
    #[derive(Clone, Default)]
    struct CapturedLogs(Arc<std::sync::Mutex<Vec<u8>>>);

    impl CapturedLogs {
        fn contents(&self) -> String {
            String::from_utf8_lossy(&self.0.lock().unwrap()).into_owned()
        }
    }

    impl std::io::Write for CapturedLogs {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    impl<'a> tracing_subscriber::fmt::MakeWriter<'a> for CapturedLogs {
        type Writer = Self;

        fn make_writer(&'a self) -> Self::Writer {
            self.clone()
        }
    }

    fn service_with(mock: MockGenerationProvider) -> AnalysisService {
        AnalysisService::new(Some(Arc::new(mock)), Duration::ZERO, Duration::ZERO)
    }

    fn replying(text: impl Into<String>, grounding: Vec<GroundingChunk>) -> AnalysisService {
        let text = text.into();
        let mut mock = MockGenerationProvider::new();
        mock.expect_generate().times(1).returning(move |_| {
            Ok(Generation {
                text: text.clone(),
                grounding: grounding.clone(),
            })
        });
        service_with(mock)
    }

    fn live_analysis_reply() -> String {
        let mut value = serde_json::to_value(demo::analysis_result()).unwrap();
        value["overallScore"] = json!("72");
        value["summary"] = json!("역세권 상권[1]으로 점심 수요(2)가 높습니다.");
        value["sources"] = json!([{ "title": "부동산원", "url": "https://reb.example/report" }]);
        format!("분석 결과입니다.\n```json\n{}\n```", value)
    }

    #[tokio::test(start_paused = true)]
    async fn test_demo_mode_without_credential() {
        let service = AnalysisService::new(None, DEFAULT_ANALYSIS_DEMO_DELAY, Duration::ZERO);

        let started = tokio::time::Instant::now();
        let outcome = service.analyze(&input()).await;

        assert!(started.elapsed() >= DEFAULT_ANALYSIS_DEMO_DELAY);
        assert_eq!(outcome.reason(), Some(&FallbackReason::MissingCredential));
        let result = outcome.into_value();
        assert_eq!(result, demo::analysis_result());
        assert_eq!(result.overall_score, 85.0);
        assert_eq!(result.competitors.len(), 3);
    }

    #[tokio::test]
    async fn test_live_reply_is_cleaned_and_sources_merged() {
        let service = replying(
            live_analysis_reply(),
            vec![
                GroundingChunk::Web {
                    uri: "https://reb.example/report".to_string(),
                    title: Some("중복".to_string()),
                },
                GroundingChunk::MapsPlace {
                    uri: "https://maps.example/place".to_string(),
                    name: None,
                },
            ],
        );

        let outcome = service.analyze(&input()).await;
        assert!(outcome.is_live());

        let result = outcome.into_value();
        assert_eq!(result.overall_score, 72.0);
        assert_eq!(result.summary, "역세권 상권으로 점심 수요가 높습니다.");

        let urls: Vec<&str> = result.sources.iter().map(|s| s.url.as_str()).collect();
        assert_eq!(
            urls,
            vec!["https://reb.example/report", "https://maps.example/place"]
        );
        assert_eq!(result.sources[0].title, "부동산원");
        assert_eq!(result.sources[1].title, "Google Maps Location");
    }

    #[tokio::test]
    async fn test_malformed_reply_falls_back() {
        let logs = CapturedLogs::default();
        let subscriber = tracing_subscriber::fmt()
            .with_writer(logs.clone())
            .with_ansi(false)
            .with_max_level(tracing::Level::WARN)
            .finish();
        let _guard = tracing::subscriber::set_default(subscriber);

        let service = replying("```json\n{\"overallScore\": 80, \"factors\": [\n```", vec![]);

        let outcome = service.analyze(&input()).await;

        assert!(matches!(outcome.reason(), Some(FallbackReason::Parse(_))));
        assert_eq!(outcome.into_value(), demo::analysis_result());

        let output = logs.contents();
        assert!(output.contains("ERROR"), "{output}");
        assert!(output.contains("analysis generation failed"), "{output}");
    }

    #[tokio::test]
    async fn test_string_encoded_numbers_stay_live() {
        let mut reply = serde_json::to_value(demo::analysis_result()).unwrap();
        reply["demographics"]["ageGroup"][0]["value"] = json!("25");
        reply["competitors"][0]["threatLevel"] = json!("3");
        reply["factors"][0]["fullMark"] = json!("100");
        let service = replying(format!("```json\n{reply}\n```"), vec![]);

        let outcome = service.analyze(&input()).await;

        assert!(outcome.is_live(), "{:?}", outcome.reason());
        let result = outcome.into_value();
        assert_eq!(result.demographics.age_group[0].value, 25.0);
        assert_eq!(result.competitors[0].threat_level, Some(3));
        assert_eq!(result.factors[0].full_mark, 100.0);
    }

    #[tokio::test]
    async fn test_string_encoded_rent_stays_live() {
        let mut reply = serde_json::to_value(demo::recommendation_result()).unwrap();
        reply["locations"][0]["estimatedRentMin"] = json!("350");
        reply["locations"][0]["rank"] = json!("1");
        let service = replying(reply.to_string(), vec![]);

        let outcome = service.recommend(&recommendation_input()).await;

        assert!(outcome.is_live(), "{:?}", outcome.reason());
        assert_eq!(outcome.value().locations[0].estimated_rent_min, 350.0);
    }

    #[tokio::test]
    async fn test_reply_without_json_falls_back() {
        let service = replying("죄송합니다. 분석할 수 없습니다.", vec![]);

        let outcome = service.analyze(&input()).await;

        assert!(matches!(outcome.reason(), Some(FallbackReason::Parse(_))));
        assert_eq!(*outcome.value(), demo::analysis_result());
    }

    #[tokio::test]
    async fn test_schema_mismatch_falls_back() {
        let service = replying("{\"summary\": \"only a summary\"}", vec![]);

        let outcome = service.analyze(&input()).await;

        assert!(matches!(outcome.reason(), Some(FallbackReason::Parse(_))));
    }

    #[tokio::test]
    async fn test_empty_reply_falls_back() {
        let service = replying("   ", vec![]);

        let outcome = service.recommend(&recommendation_input()).await;

        assert_eq!(outcome.reason(), Some(&FallbackReason::EmptyReply));
        assert_eq!(outcome.into_value(), demo::recommendation_result());
    }

    #[tokio::test]
    async fn test_provider_error_falls_back() {
        let mut mock = MockGenerationProvider::new();
        mock.expect_generate().times(1).returning(|_| {
            Err(ProviderError::Status {
                status: 429,
                body: "quota".to_string(),
            })
        });

        let outcome = service_with(mock).recommend(&recommendation_input()).await;

        assert_eq!(
            outcome.reason().map(FallbackReason::code),
            Some("provider_error")
        );
        assert_eq!(outcome.into_value(), demo::recommendation_result());
    }

    #[tokio::test]
    async fn test_prompt_is_sent_to_provider() {
        let mut mock = MockGenerationProvider::new();
        mock.expect_generate()
            .withf(|prompt| prompt.contains("마포구") && prompt.contains("expertAdvice"))
            .times(1)
            .returning(|_| Ok(Generation::default()));

        let outcome = service_with(mock).recommend(&recommendation_input()).await;
        assert!(!outcome.is_live());
    }
}
