//! Prompt rendering for analysis and recommendation requests.
//!
//! Prompts are pure functions of their input. Each user-supplied value is
//! interpolated exactly once; the rest of the text refers back to the input
//! block instead of repeating values. The trailing schema lists every field
//! the reply must contain.

use super::entities::{AnalysisInput, RecommendationInput};

const ANALYSIS_SCHEMA: &str = r#"{
  "overallScore": number (0-100),
  "scoreLevel": "S등급" | "A등급" | "B등급" | "C등급" | "D등급" | "F등급",
  "summary": "Concise summary.",
  "revenue": {
    "dailyCustomersMin": number,
    "dailyCustomersMax": number,
    "monthlyRevenueMin": number (Unit: Man-won),
    "monthlyRevenueMax": number,
    "currencyUnit": "만원",
    "netProfitMin": number,
    "netProfitMax": number,
    "annualRevenueMin": number,
    "annualRevenueMax": number
  },
  "factors": [
    { "category": "유동인구", "score": number, "fullMark": 100, "description": "Concise explanation" },
    { "category": "경쟁분석", "score": number, "fullMark": 100, "description": "Concise explanation" },
    { "category": "접근성", "score": number, "fullMark": 100, "description": "Concise explanation" },
    { "category": "구매력", "score": number, "fullMark": 100, "description": "Concise explanation" },
    { "category": "배후수요", "score": number, "fullMark": 100, "description": "Concise explanation" }
  ],
  "demographics": {
    "ageGroup": [ {"name": "10대", "value": number}, {"name": "20대", "value": number}, {"name": "30대", "value": number}, {"name": "40대", "value": number}, {"name": "50대+", "value": number} ],
    "timeFlow": [ {"time": "06-09", "value": number}, {"time": "09-12", "value": number}, {"time": "12-14", "value": number}, {"time": "14-17", "value": number}, {"time": "17-20", "value": number}, {"time": "20-24", "value": number} ]
  },
  "competitors": [
    { "name": "Name", "distance": "120m", "type": "Type", "threatLevel": 1-5 }
  ],
  "risks": [
    { "risk": "Specific Risk Title", "severity": "높음" | "중간" | "주의", "mitigation": "Detailed mitigation strategy..." }
  ],
  "opportunities": [
    { "strength": "Specific Strength Title", "utilization": "Detailed utilization strategy..." }
  ],
  "strategies": [
    { "phaseName": "1단계 (오픈~3개월)", "period": "초기 정착기", "actions": ["Specific Action 1", "Specific Action 2", "Specific Action 3"] }
  ],
  "rentalAnalysis": {
    "radius": "same value as the Radius input",
    "stats": {
      "currentMean": number (Monthly Rent Man-won/3.3m2),
      "averageDeposit": number (Deposit Man-won/3.3m2),
      "median": number,
      "top10Percent": number,
      "bottom10Percent": number,
      "monthlyChangeRate": number,
      "annualizedGrowth": number,
      "zScore": number,
      "standardDeviation": number
    },
    "trend": [
      {"time": "YYYY-MM", "value": number},
      ... (12 items)
    ],
    "benchmark": {
      "targetArea": number,
      "similarArea": number,
      "gapPercentage": number
    },
    "cashFlows": [
      { "scenario": "optimistic" | "neutral" | "pessimistic", "monthlyRevenue": number, "rentCost": number, "otherCosts": number, "netProfit": number, "rentToRevenueRatio": number }
    ],
    "strategies": [
      { "type": "단기 계약", "template": "...", "keyPoints": ["..."] },
      { "type": "중기 계약", "template": "...", "keyPoints": ["..."] },
      { "type": "장기 계약", "template": "...", "keyPoints": ["..."] }
    ],
    "sources": []
  },
  "growthPrediction": {
    "score": number,
    "prediction3Month": number,
    "prediction6Month": number,
    "prediction1Year": number,
    "timeline": [
      { "date": "YYYY-MM", "eventName": "...", "impactScore": number, "description": "...", "status": "planned" | "ongoing" | "completed" | "rumor" }
    ],
    "reasoning": "...",
    "sources": []
  },
  "realTimeAlerts": [
    {
      "id": "alert-1",
      "timestamp": "YYYY-MM-DD HH:mm",
      "type": "weather" | "traffic" | "event" | "competitor" | "construction",
      "severity": "high" | "medium" | "low",
      "message": "...",
      "impact": "...",
      "action": "...",
      "source": "..."
    }
  ]
}"#;

const RECOMMENDATION_SCHEMA: &str = r#"{
  "summary": "Overview of the recommendation in Korean",
  "expertAdvice": "Expert tip for this business and region",
  "locations": [
    {
      "rank": 1,
      "locationName": "Specific Location Name (e.g. Gangnam Station Exit 1)",
      "area": "City District Neighborhood",
      "score": 95,
      "dailyFloatingPopulation": number,
      "peakTime": "string (e.g. 12:00-14:00)",
      "mainAgeGroup": "string",
      "competitionIntensity": "낮음" | "중간" | "높음",
      "surroundingEnvironment": "string",
      "transportAccess": "string",
      "parkingInfo": "string",
      "estimatedRentMin": number (unit: Man-won),
      "estimatedRentMax": number,
      "estimatedRevenueMin": number (unit: Man-won),
      "estimatedRevenueMax": number,
      "reason": "Why this is #1",
      "caution": "Risk factor"
    },
    ... (at least 3 locations)
  ]
}"#;

/// Renders the single-address analysis prompt.
pub fn analysis_prompt(input: &AnalysisInput) -> String {
    let mut prompt = format!(
        r#"You are 'BizInsight AI', an expert commercial real estate and business strategy consultant.

Task: Perform a deep, FACT-BASED analysis for a business location.

**INPUTS:**
- Address: "{address}"
- Business Type: {business_type}
- Operating Hours: {hours}
- Radius: {radius}
"#,
        address = input.address,
        business_type = input.business_type,
        hours = input.hours,
        radius = input.radius,
    );

    prompt.push_str(
        r#"
**CRITICAL INSTRUCTIONS FOR ACCURACY (MUST USE GOOGLE SEARCH):**

1.  **Rental & Deposit Analysis (HIGH PRECISION REQUIRED)**:
    - **SEARCH MANDATE**: You MUST use the `googleSearch` tool to find ACTUAL recent data (last 12-24 months) for the Dong/District of the Address above.
    - **Specific Queries to Execute** (substitute the Address above):
      - "<Address> 1층 상가 임대료 시세" (Rent)
      - "<Address> 상가 권리금 및 보증금 시세" (Deposit)
      - "한국부동산원 <District of the Address> 상업용부동산 임대동향" (Official trend)
      - "네이버 부동산 <Address> 상가 월세 실거래가" (Transactions)
    - **Data Extraction**:
      - **Monthly Rent**: Find the specific Price per Pyung (3.3㎡).
      - **Average Deposit**: Find the specific Average Deposit per Pyung (3.3㎡) or the standard deposit for a 10-15 pyung store.
      - **IMPORTANT**: If exact building data is missing, use the **average for the specific Neighborhood (Dong)**. Do not output zero.
    - **Trend**: Analyze news/reports to see if the area is rising or falling in the last 12 months. The trend line MUST reflect this reality.

2.  **Competitor & Environment**:
    - Use `googleMaps` to find real competitor counts within the Radius above, for the Business Type above.
    - Take the Operating Hours above into account for the time-flow and revenue estimates.

3.  **Strategic Deep Dive (DETAILED & ACTIONABLE)**:
    - **Risks**: Identify 3 specific, data-backed risks.
      - *Risk*: Don't say "Competition". Say "Aggressive pricing from [Competitor Name] 50m away" or "High vacancy rate in adjacent block".
      - *Mitigation*: Concrete steps. "Differentiation" is bad. "Introduce signature menu X not found in competitor Y" is good.
    - **Opportunities**: Identify 3 specific potentials based on demographics.
      - *Strength*: Link to stats (e.g., "High 20s female population").
      - *Utilization*: Specific tactic (e.g., "Instagrammable interior & dessert menu for viral marketing").
    - **Strategies**: Create a detailed 3-phase roadmap.
      - Phase 1 (Launch): Focus on acquisition.
      - Phase 2 (Growth): Focus on retention.
      - Phase 3 (Expansion): Focus on profit/scale.
      - *Actions*: Provide 3-4 very specific, actionable tasks per phase (e.g., "Partnership with local gym", "Time-sale event 2-4PM").

**OUTPUT FORMAT**: Strictly valid JSON inside a ```json markdown code block.
- **NO comments** inside the JSON.
- Escape any double quotes in strings.

"#,
    );
    prompt.push_str(ANALYSIS_SCHEMA);
    prompt.push_str(
        r#"

Translate all text to Korean.
Ensure "trend" array has exactly 12 items (last 12 months).
Ensure "averageDeposit" is a realistic number based on "Deposit Market Price" search results.
Make "risks", "opportunities", and "strategies" very detailed and actionable.
"#,
    );

    prompt
}

/// Renders the region-wide recommendation prompt.
pub fn recommendation_prompt(input: &RecommendationInput) -> String {
    let mut prompt = format!(
        r#"You are an expert commercial real estate consultant 'BizInsight'.

Task: Recommend top 3-5 commercial locations for a specific business in a target region using FACT-BASED analysis.

Input Info:
- Business: {business_type}
- City: {city}
- District: {district}
- Neighborhood: {dong}
- Hours: {hours}
- Budget: {budget}
- Target Age: {target_age}
- Parking: {parking}
"#,
        business_type = input.business_type,
        city = input.city,
        district = input.district,
        dong = input.dong,
        hours = input.hours,
        budget = input.budget,
        target_age = input.target_age,
        parking = input.parking,
    );

    prompt.push_str(
        r#"
A District or Neighborhood given as the whole-area marker (or left blank) means the search is not narrowed at that level.

**CRITICAL**: Use `googleSearch` and `googleMaps` to find actual commercial districts with detailed rental prices and vacancy data.

Output Format: Strict JSON inside a ```json markdown code block. No comments.

"#,
    );
    prompt.push_str(RECOMMENDATION_SCHEMA);
    prompt.push('\n');

    prompt
}
