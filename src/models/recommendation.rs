use serde::{Deserialize, Serialize};

/// A buyer the engine matched against a submitted profile. The estimated
/// value is a plain monthly amount in whole currency units; rendering it as
/// a currency string is the boundary's job.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchedBuyer {
    pub name: String,
    pub industry: String,
    pub match_score: u32,
    pub estimated_monthly_value: i64,
}

/// Current-vs-potential monthly trade value for the submitted profile.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TradeValueProjection {
    pub current_monthly_value: i64,
    pub potential_monthly_value: i64,
    /// Zero when the current value is zero; never a division fault.
    pub percent_increase: i64,
}

/// Environmental impact rating for the submission.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GreenScore {
    pub score: u32,
    pub impact_message: String,
    pub co2_saved_tons: i64,
}

/// Qualitative market context attached alongside the scored output.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MarketInsights {
    pub demand_level: String,
    pub price_stability: String,
    pub growth_projection_percent: i64,
}

/// Aggregate recommendation output. Constructed fresh per submission and
/// never mutated afterwards.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recommendations {
    pub matched_buyers: Vec<MatchedBuyer>,
    pub trade_value: TradeValueProjection,
    pub green_score: GreenScore,
    pub market_insights: MarketInsights,
}
