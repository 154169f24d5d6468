use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use super::AppError;
use crate::engine::format;
use crate::models::{PricingPlan, Recommendations, VolumeBucket, WasteProfile, WasteType};
use crate::services::AppState;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecommendationRequest {
    pub waste_type: WasteType,
    pub waste_volume: VolumeBucket,
    pub pricing_plan: PricingPlan,
    pub user_id: String,
}

/// Wire shape of the generated dashboard. Numeric engine output is rendered
/// into display strings here, not in the engine.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RecommendationResponse {
    pub potential_buyers: Vec<BuyerView>,
    pub trade_value: TradeValueView,
    pub green_score: GreenScoreView,
    pub market_insights: MarketInsightsView,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BuyerView {
    pub name: String,
    pub industry: String,
    pub match_score: u32,
    pub estimated_value: String,
}

#[derive(Debug, Serialize)]
pub struct TradeValueView {
    pub current: String,
    pub potential: String,
    pub increase: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GreenScoreView {
    pub score: u32,
    pub impact: String,
    pub co2_saved: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MarketInsightsView {
    pub demand_level: String,
    pub price_stability: String,
    pub growth_projection: String,
}

impl From<Recommendations> for RecommendationResponse {
    fn from(recommendations: Recommendations) -> Self {
        Self {
            potential_buyers: recommendations
                .matched_buyers
                .into_iter()
                .map(|buyer| BuyerView {
                    name: buyer.name,
                    industry: buyer.industry,
                    match_score: buyer.match_score,
                    estimated_value: format::monthly_currency(buyer.estimated_monthly_value),
                })
                .collect(),
            trade_value: TradeValueView {
                current: format::currency(recommendations.trade_value.current_monthly_value),
                potential: format::currency(recommendations.trade_value.potential_monthly_value),
                increase: format::percent(recommendations.trade_value.percent_increase),
            },
            green_score: GreenScoreView {
                score: recommendations.green_score.score,
                impact: recommendations.green_score.impact_message,
                co2_saved: format::tons(recommendations.green_score.co2_saved_tons),
            },
            market_insights: MarketInsightsView {
                demand_level: recommendations.market_insights.demand_level,
                price_stability: recommendations.market_insights.price_stability,
                growth_projection: format::annual_growth(
                    recommendations.market_insights.growth_projection_percent,
                ),
            },
        }
    }
}

pub async fn generate_recommendations(
    State(state): State<Arc<AppState>>,
    Json(request): Json<RecommendationRequest>,
) -> Result<Json<RecommendationResponse>, AppError> {
    let profile = WasteProfile::new(
        request.waste_type,
        request.waste_volume,
        request.pricing_plan,
    );

    let recommendations = state
        .recommendations
        .recommend(&request.user_id, profile)
        .await;

    Ok(Json(RecommendationResponse::from(recommendations)))
}
