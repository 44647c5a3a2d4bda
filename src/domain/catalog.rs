//! Fixed option lists offered to clients when building a request.
//!
//! None of these constrain the server: free-text values are accepted for
//! every field except the radius band.

use serde::Serialize;

use super::entities::{AnalysisInput, Radius, WHOLE_AREA};

pub const BUSINESS_TYPES: &[&str] = &[
    "편의점",
    "카페",
    "치킨/호프",
    "한식 음식점",
    "중식",
    "일식",
    "양식",
    "분식점",
    "베이커리",
    "미용실",
    "네일아트",
    "헬스장/PT",
    "부동산",
    "학원",
];

pub const OPERATING_HOURS: &[&str] = &[
    "24시간",
    "09:00 - 18:00 (오피스형)",
    "10:00 - 22:00 (일반)",
    "17:00 - 02:00 (야간/주점)",
    "11:00 - 21:00 (식사 위주)",
];

pub const CITIES: &[&str] = &[
    "서울시", "경기도", "인천시", "부산시", "대구시", "대전시", "광주시",
];

const DISTRICTS: &[(&str, &[&str])] = &[
    (
        "서울시",
        &[
            "강남구", "서초구", "송파구", "마포구", "영등포구", "구로구", "종로구", "중구",
            "용산구", "성동구", "광진구", "강서구", "양천구", "동작구", "관악구", "은평구",
            "서대문구", "강동구", "노원구", "도봉구", "강북구", "성북구", "중랑구", "동대문구",
        ],
    ),
    (
        "경기도",
        &[
            "수원시", "성남시", "고양시", "용인시", "부천시", "안산시", "안양시", "남양주시",
            "화성시", "평택시", "의정부시", "시흥시", "파주시", "김포시", "광명시", "이천시",
            "구리시", "양주시", "포천시", "오산시", "하남시", "군포시", "의왕시",
        ],
    ),
    (
        "인천시",
        &[
            "중구", "동구", "미추홀구", "연수구", "남동구", "부평구", "계양구", "서구", "강화군",
            "옹진군",
        ],
    ),
    (
        "부산시",
        &[
            "중구", "서구", "동구", "영도구", "부산진구", "동래구", "남구", "북구", "해운대구",
            "사하구", "금정구", "강서구", "연제구", "수영구", "사상구", "기장군",
        ],
    ),
    (
        "대구시",
        &["중구", "동구", "서구", "남구", "북구", "수성구", "달서구", "달성군"],
    ),
    ("대전시", &["동구", "중구", "서구", "유성구", "대덕구"]),
    ("광주시", &["동구", "서구", "남구", "북구", "광산구"]),
];

const DONGS: &[(&str, &[&str])] = &[
    (
        "강남구",
        &[
            "역삼동", "논현동", "신사동", "청담동", "삼성동", "대치동", "개포동", "도곡동",
            "압구정동", "세곡동", "자곡동", "율현동", "일원동", "수서동",
        ],
    ),
    (
        "서초구",
        &[
            "서초동", "잠원동", "반포동", "방배동", "양재동", "내곡동", "염곡동", "신원동",
            "우면동", "원지동",
        ],
    ),
    (
        "송파구",
        &[
            "잠실동", "신천동", "풍납동", "송파동", "석촌동", "삼전동", "가락동", "문정동",
            "장지동", "방이동", "오금동", "거여동", "마천동",
        ],
    ),
    (
        "마포구",
        &[
            "서교동", "동교동", "연남동", "망원동", "합정동", "상수동", "상암동", "공덕동",
            "아현동", "도화동", "용강동", "대흥동", "염리동", "성산동", "중동",
        ],
    ),
    (
        "영등포구",
        &[
            "영등포동", "여의도동", "당산동", "문래동", "양평동", "신길동", "대림동", "도림동",
        ],
    ),
    (
        "성동구",
        &[
            "상왕십리동", "하왕십리동", "홍익동", "도선동", "마장동", "사근동", "행당동",
            "응봉동", "금호동", "옥수동", "성수동", "송정동", "용답동",
        ],
    ),
    (
        "광진구",
        &["중곡동", "능동", "구의동", "광장동", "자양동", "화양동", "군자동"],
    ),
    (
        "분당구",
        &[
            "분당동", "수내동", "정자동", "율동", "서현동", "이매동", "야탑동", "판교동",
            "삼평동", "백현동", "금곡동", "궁내동", "동원동", "구미동", "운중동", "대장동",
            "석운동", "하산운동",
        ],
    ),
];

pub const BUDGET_RANGES: &[&str] = &[
    "100만원 이하",
    "100~200만원",
    "200~300만원",
    "300~500만원",
    "500만원 이상",
    "제한 없음",
];

pub const TARGET_AGES: &[&str] = &["10대", "20대", "30대", "40대", "50대 이상", "전 연령층"];

pub const PARKING_OPTIONS: &[&str] = &["필수", "있으면 좋음", "상관 없음"];

/// Values assumed when a request leaves an optional field out.
pub const DEFAULT_HOURS: &str = "24시간";
pub const DEFAULT_BUDGET: &str = "제한 없음";
pub const DEFAULT_TARGET_AGE: &str = "전 연령층";
pub const DEFAULT_PARKING: &str = "상관 없음";

/// Districts of a city, empty for unknown cities.
pub fn districts(city: &str) -> &'static [&'static str] {
    DISTRICTS
        .iter()
        .find(|(name, _)| *name == city)
        .map(|(_, list)| *list)
        .unwrap_or(&[])
}

/// Neighbourhoods of a district, empty where no list is kept.
pub fn dongs(district: &str) -> &'static [&'static str] {
    DONGS
        .iter()
        .find(|(name, _)| *name == district)
        .map(|(_, list)| *list)
        .unwrap_or(&[])
}

/// A preset analysis request with a short description.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SampleScenario {
    pub title: &'static str,
    pub description: &'static str,
    pub input: AnalysisInput,
}

fn scenario(
    title: &'static str,
    description: &'static str,
    address: &str,
    business_type: &str,
    hours: &str,
) -> SampleScenario {
    SampleScenario {
        title,
        description,
        input: AnalysisInput {
            address: address.to_string(),
            business_type: business_type.to_string(),
            hours: hours.to_string(),
            radius: Radius::M500,
        },
    }
}

pub fn sample_scenarios() -> Vec<SampleScenario> {
    vec![
        scenario(
            "강남역 대형 카페",
            "유동인구 5만명 강남대로 메인 상권의 카페 수익률 분석",
            "서울시 강남구 강남대로 396",
            "카페",
            "09:00 - 22:00 (일반)",
        ),
        scenario(
            "홍대 입구 치킨/호프",
            "2030 젊은 층이 밀집한 홍대 상권의 심야 주점 경쟁 분석",
            "서울시 마포구 홍익로 6길",
            "치킨/호프",
            "17:00 - 02:00 (야간/주점)",
        ),
        scenario(
            "여의도 직장인 헬스장",
            "고소득 직장인이 밀집한 여의도 금융가의 점심/퇴근 시간대 PT 수요 분석",
            "서울시 영등포구 국제금융로 10",
            "헬스장/PT",
            "10:00 - 22:00 (일반)",
        ),
        scenario(
            "성수동 베이커리",
            "MZ세대 핫플레이스 성수동 카페거리의 베이커리 수요 예측",
            "서울시 성동구 연무장길 33",
            "베이커리",
            "10:00 - 22:00 (일반)",
        ),
        scenario(
            "분당 주거단지 헬스장",
            "안정적인 아파트 배후 수요를 가진 주거 밀집 지역 PT샵 분석",
            "경기도 성남시 분당구 정자일로 1",
            "헬스장/PT",
            "09:00 - 22:00 (일반)",
        ),
        scenario(
            "종로 직장인 한식당",
            "전통적인 오피스 상권 종로구의 점심 회전율 및 매출 분석",
            "서울시 종로구 종로 1",
            "한식 음식점",
            "11:00 - 21:00 (식사 위주)",
        ),
    ]
}

/// Every option list in one serializable value.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Catalog {
    pub business_types: &'static [&'static str],
    pub operating_hours: &'static [&'static str],
    pub cities: &'static [&'static str],
    pub districts: Vec<RegionList>,
    pub dongs: Vec<RegionList>,
    pub whole_area: &'static str,
    pub budget_ranges: &'static [&'static str],
    pub target_ages: &'static [&'static str],
    pub parking_options: &'static [&'static str],
    pub radius_bands: Vec<&'static str>,
    pub sample_scenarios: Vec<SampleScenario>,
}

#[derive(Debug, Serialize)]
pub struct RegionList {
    pub parent: &'static str,
    pub children: &'static [&'static str],
}

fn region_lists(table: &[(&'static str, &'static [&'static str])]) -> Vec<RegionList> {
    table
        .iter()
        .map(|&(parent, children)| RegionList { parent, children })
        .collect()
}

impl Catalog {
    pub fn new() -> Self {
        Self {
            business_types: BUSINESS_TYPES,
            operating_hours: OPERATING_HOURS,
            cities: CITIES,
            districts: region_lists(DISTRICTS),
            dongs: region_lists(DONGS),
            whole_area: WHOLE_AREA,
            budget_ranges: BUDGET_RANGES,
            target_ages: TARGET_AGES,
            parking_options: PARKING_OPTIONS,
            radius_bands: Radius::ALL.iter().map(Radius::as_str).collect(),
            sample_scenarios: sample_scenarios(),
        }
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::new()
    }
}
