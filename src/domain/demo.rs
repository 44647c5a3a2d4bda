//! Fixed demo payloads served whenever live generation is unavailable or unusable.

use std::sync::LazyLock;

use super::entities::{
    AnalysisResult, CompetitionIntensity, Competitor, Demographics, FactorScore, NamedValue,
    OpportunityItem, RecommendationResult, RecommendedLocation, RevenueEstimate, RiskItem,
    RiskSeverity, ScoreLevel, StrategyPhase, TimedValue,
};

static DEMO_ANALYSIS: LazyLock<AnalysisResult> = LazyLock::new(build_analysis);
static DEMO_RECOMMENDATION: LazyLock<RecommendationResult> = LazyLock::new(build_recommendation);

/// The demo analysis. Every call returns an equal value.
pub fn analysis_result() -> AnalysisResult {
    DEMO_ANALYSIS.clone()
}

/// The demo recommendation. Every call returns an equal value.
pub fn recommendation_result() -> RecommendationResult {
    DEMO_RECOMMENDATION.clone()
}

fn factor(category: &str, score: f64, description: &str) -> FactorScore {
    FactorScore {
        category: category.to_string(),
        score,
        full_mark: 100.0,
        description: description.to_string(),
    }
}

fn named(name: &str, value: f64) -> NamedValue {
    NamedValue {
        name: name.to_string(),
        value,
    }
}

fn timed(time: &str, value: f64) -> TimedValue {
    TimedValue {
        time: time.to_string(),
        value,
    }
}

fn competitor(name: &str, distance: &str, threat_level: u8) -> Competitor {
    Competitor {
        name: name.to_string(),
        distance: distance.to_string(),
        kind: "카페".to_string(),
        threat_level: Some(threat_level),
    }
}

fn phase(name: &str, period: &str, actions: [&str; 3]) -> StrategyPhase {
    StrategyPhase {
        phase_name: name.to_string(),
        period: period.to_string(),
        actions: actions.iter().map(|a| a.to_string()).collect(),
    }
}

fn build_analysis() -> AnalysisResult {
    AnalysisResult {
        overall_score: 85.0,
        score_level: ScoreLevel::A,
        summary: "선택하신 지역은 유동인구가 풍부하고 배후 수요가 탄탄한 우수 상권입니다. 특히 점심 시간대 직장인 수요가 많아 안정적인 매출이 기대됩니다. 다만 경쟁 강도가 다소 높으니 차별화 전략이 필요합니다.".to_string(),
        revenue: RevenueEstimate {
            daily_customers_min: 150.0,
            daily_customers_max: 220.0,
            monthly_revenue_min: 4500.0,
            monthly_revenue_max: 5500.0,
            currency_unit: "만원".to_string(),
            net_profit_min: 900.0,
            net_profit_max: 1200.0,
            annual_revenue_min: 54000.0,
            annual_revenue_max: 66000.0,
        },
        factors: vec![
            factor("유동인구", 90.0, "일 평균 유동인구 약 5만명으로 매우 활발함"),
            factor("경쟁분석", 70.0, "동종 업계 경쟁점이 반경 500m 내 12곳 존재"),
            factor("접근성", 95.0, "지하철역 도보 3분 거리, 버스 정류장 인접"),
            factor("구매력", 85.0, "인근 오피스 및 대단지 아파트 거주민 소득 수준 양호"),
            factor("배후수요", 80.0, "반경 1km 내 5,000세대 거주 및 오피스 밀집"),
        ],
        demographics: Demographics {
            age_group: vec![
                named("10대", 10.0),
                named("20대", 30.0),
                named("30대", 35.0),
                named("40대", 15.0),
                named("50대+", 10.0),
            ],
            time_flow: vec![
                timed("06-09", 10.0),
                timed("09-12", 20.0),
                timed("12-14", 60.0),
                timed("14-17", 30.0),
                timed("17-20", 50.0),
                timed("20-24", 20.0),
            ],
        },
        competitors: vec![
            competitor("스타벅스 강남점", "120m", 5),
            competitor("메가커피 역삼점", "250m", 3),
            competitor("이디야커피", "300m", 2),
        ],
        risks: vec![
            RiskItem {
                risk: "높은 임대료 상승 가능성".to_string(),
                severity: RiskSeverity::Caution,
                mitigation: "장기 계약 검토 필요".to_string(),
            },
            RiskItem {
                risk: "주변 유사 업종 과밀".to_string(),
                severity: RiskSeverity::Medium,
                mitigation: "특화 메뉴 개발로 차별화".to_string(),
            },
        ],
        opportunities: vec![
            OpportunityItem {
                strength: "평일 점심 고정 수요 확보 용이".to_string(),
                utilization: "직장인 대상 런치 세트 및 멤버십 운영".to_string(),
            },
            OpportunityItem {
                strength: "배달 수요 증가 추세".to_string(),
                utilization: "배달 앱 프로모션 적극 활용".to_string(),
            },
        ],
        strategies: vec![
            phase(
                "1단계: 오픈 준비",
                "오픈 1개월 전",
                ["인테리어 공사", "직원 채용", "가오픈 홍보"],
            ),
            phase(
                "2단계: 초기 운영",
                "오픈 후 1-3개월",
                ["오픈 이벤트", "리뷰 관리", "단골 확보"],
            ),
            phase(
                "3단계: 안정화",
                "오픈 후 4-6개월",
                ["메뉴 리뉴얼", "시즌 프로모션", "원가 절감"],
            ),
        ],
        rental_analysis: None,
        growth_prediction: None,
        real_time_alerts: None,
        sources: Vec::new(),
    }
}

#[allow(clippy::too_many_arguments)]
fn location(
    rank: u32,
    location_name: &str,
    area: &str,
    score: f64,
    daily_floating_population: f64,
    peak_time: &str,
    main_age_group: &str,
    competition_intensity: CompetitionIntensity,
    surrounding_environment: &str,
    transport_access: &str,
    parking_info: &str,
    rent: (f64, f64),
    revenue: (f64, f64),
    reason: &str,
    caution: &str,
) -> RecommendedLocation {
    RecommendedLocation {
        rank,
        location_name: location_name.to_string(),
        area: area.to_string(),
        score,
        daily_floating_population,
        peak_time: peak_time.to_string(),
        main_age_group: main_age_group.to_string(),
        competition_intensity,
        surrounding_environment: surrounding_environment.to_string(),
        transport_access: transport_access.to_string(),
        parking_info: parking_info.to_string(),
        estimated_rent_min: rent.0,
        estimated_rent_max: rent.1,
        estimated_revenue_min: revenue.0,
        estimated_revenue_max: revenue.1,
        reason: reason.to_string(),
        caution: caution.to_string(),
    }
}

fn build_recommendation() -> RecommendationResult {
    RecommendationResult {
        summary: "요청하신 조건에 기반하여 분석한 결과, 매출 잠재력이 가장 높은 상위 3개 지역을 추천합니다. 해당 지역들은 유동인구와 배후 수요가 균형 잡혀 있어 안정적인 수익 창출이 기대됩니다.".to_string(),
        expert_advice: "초기 진입 시 임대료 부담을 줄이기 위해 권리금이 없거나 낮은 점포를 우선적으로 탐색하는 것을 권장합니다.".to_string(),
        locations: vec![
            location(
                1,
                "홍대입구역 3번 출구 인근",
                "서울시 마포구 연남동",
                92.0,
                85000.0,
                "18:00 - 22:00",
                "20~30대",
                CompetitionIntensity::High,
                "핫플레이스, 카페거리",
                "지하철 2호선, 공항철도",
                "공영주차장 이용",
                (300.0, 500.0),
                (6000.0, 8000.0),
                "젊은 층 유동인구가 압도적으로 많고 소비 성향이 강함",
                "임대료가 매우 높고 경쟁이 치열함",
            ),
            location(
                2,
                "성수동 카페거리 메인",
                "서울시 성동구 성수동",
                88.0,
                62000.0,
                "12:00 - 20:00",
                "20~30대",
                CompetitionIntensity::Medium,
                "문화공간, 오피스",
                "지하철 2호선 성수역",
                "협소함",
                (250.0, 400.0),
                (5000.0, 7000.0),
                "트렌디한 상권으로 외부 유입 인구가 지속 증가 중",
                "주차 공간 부족 문제",
            ),
            location(
                3,
                "문래 창작촌 입구",
                "서울시 영등포구 문래동",
                85.0,
                45000.0,
                "17:00 - 23:00",
                "20~40대",
                CompetitionIntensity::Low,
                "예술촌, 노포",
                "지하철 2호선 문래역",
                "보통",
                (150.0, 250.0),
                (3500.0, 5000.0),
                "상대적으로 낮은 임대료와 독특한 분위기의 신흥 상권",
                "낮 시간대 유동인구가 적을 수 있음",
            ),
        ],
        sources: Vec::new(),
    }
}
