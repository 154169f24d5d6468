use rand::Rng;

use crate::engine::catalog;
use crate::engine::resolver::Coefficients;
use crate::models::{
    BuyerCandidate, GreenScore, MarketInsights, MatchedBuyer, Recommendations,
    TradeValueProjection, WasteProfile, WasteType,
};

const MAX_MATCHED_BUYERS: usize = 3;
const MIN_MATCH_SCORE: f64 = 85.0;
const FALLBACK_AVERAGE_PRICE: f64 = 100.0;
const GREEN_SCORE_BASE: f64 = 60.0;
// The two scoring paths clamp the green score differently; existing
// dashboards rely on both values.
const GREEN_SCORE_CAP_MARKET: i64 = 98;
const GREEN_SCORE_CAP_CATALOG: i64 = 95;
const CURRENT_VALUE_RATIO: f64 = 0.6;

/// Produces the full recommendation set for a submitted profile.
///
/// When buyer candidates are available the scores are driven by their data;
/// with no candidates (store unreachable or simply empty for this waste
/// type) the static catalog supplies representative buyers instead. The
/// randomness source is injected so tests can pin a seed.
pub fn generate<R: Rng>(
    profile: &WasteProfile,
    coefficients: &Coefficients,
    candidates: &[BuyerCandidate],
    rng: &mut R,
) -> Recommendations {
    if candidates.is_empty() {
        recommend_from_catalog(profile, coefficients, rng)
    } else {
        recommend_from_market(profile, coefficients, candidates, rng)
    }
}

/// Market-driven scoring over fetched buyer candidates.
///
/// Tolerates an empty slice (average price falls back to a constant) so the
/// computation never faults even if called outside the usual dispatch.
pub fn recommend_from_market<R: Rng>(
    profile: &WasteProfile,
    coefficients: &Coefficients,
    candidates: &[BuyerCandidate],
    rng: &mut R,
) -> Recommendations {
    let matched_buyers = candidates
        .iter()
        .take(MAX_MATCHED_BUYERS)
        .map(|buyer| {
            let location_score = match &buyer.location {
                Some(location) if location.contains("USA") => 95.0,
                _ => 85.0,
            };
            let price_score = (buyer.base_price_per_kg / 200.0 * 100.0).min(100.0);
            let reliability_score = 90.0 + rng.gen::<f64>() * 10.0;

            let weighted =
                location_score * 0.3 + price_score * 0.4 + reliability_score * 0.3;
            let match_score = weighted.round().max(MIN_MATCH_SCORE) as u32;

            let estimated_monthly_value = round_currency(
                buyer.base_price_per_kg * coefficients.volume_kg * coefficients.plan_multiplier
                    / 12.0,
            );

            MatchedBuyer {
                name: buyer.name.clone(),
                industry: buyer.industry.clone(),
                match_score,
                estimated_monthly_value,
            }
        })
        .collect();

    // Average over every candidate, not just the retained three.
    let average_price = if candidates.is_empty() {
        FALLBACK_AVERAGE_PRICE
    } else {
        let total: f64 = candidates.iter().map(|b| b.base_price_per_kg).sum();
        total / candidates.len() as f64
    };

    let annual_value =
        average_price * coefficients.volume_kg * coefficients.plan_multiplier;
    let current_monthly_value = round_currency(annual_value * CURRENT_VALUE_RATIO / 12.0);
    let potential_monthly_value = round_currency(annual_value / 12.0);

    let trade_value = TradeValueProjection {
        current_monthly_value,
        potential_monthly_value,
        percent_increase: percent_increase(current_monthly_value, potential_monthly_value),
    };

    let waste_type_bonus = match profile.waste_type {
        WasteType::Electronic => 15.0,
        WasteType::Chemical => 10.0,
        _ => 5.0,
    };
    let green_score = green_score(
        coefficients,
        Some(waste_type_bonus),
        GREEN_SCORE_CAP_MARKET,
    );

    Recommendations {
        matched_buyers,
        trade_value,
        green_score,
        market_insights: market_insights(candidates.len(), rng),
    }
}

/// Catalog-backed fallback used when no external candidates are available.
pub fn recommend_from_catalog<R: Rng>(
    profile: &WasteProfile,
    coefficients: &Coefficients,
    rng: &mut R,
) -> Recommendations {
    let entry = catalog::waste_type_entry(profile.waste_type);

    let base_value = entry.base_rate_per_kg
        * coefficients.volume_multiplier
        * coefficients.plan_multiplier;

    let matched_buyers = entry
        .buyer_names
        .iter()
        .enumerate()
        .map(|(index, name)| {
            let match_score = (MIN_MATCH_SCORE + rng.gen::<f64>() * 15.0).round() as u32;
            // Spread the three quotes so they do not come out identical.
            let spread = 0.8 + index as f64 * 0.1;
            MatchedBuyer {
                name: name.to_string(),
                industry: catalog::industry_for_buyer(name).to_string(),
                match_score,
                estimated_monthly_value: round_currency(base_value * spread / 12.0),
            }
        })
        .collect();

    let current_monthly_value = round_currency(base_value * CURRENT_VALUE_RATIO / 12.0);
    let potential_monthly_value = round_currency(base_value / 12.0);

    let trade_value = TradeValueProjection {
        current_monthly_value,
        potential_monthly_value,
        percent_increase: percent_increase(current_monthly_value, potential_monthly_value),
    };

    Recommendations {
        matched_buyers,
        trade_value,
        green_score: green_score(coefficients, None, GREEN_SCORE_CAP_CATALOG),
        market_insights: market_insights(0, rng),
    }
}

fn green_score(
    coefficients: &Coefficients,
    waste_type_bonus: Option<f64>,
    cap: i64,
) -> GreenScore {
    let raw = GREEN_SCORE_BASE
        + coefficients.volume_multiplier * 5.0
        + coefficients.plan_multiplier * 10.0
        + waste_type_bonus.unwrap_or(0.0);
    let score = (raw.round() as i64).min(cap) as u32;

    GreenScore {
        score,
        impact_message: impact_message(score).to_string(),
        co2_saved_tons: (coefficients.co2_factor * coefficients.plan_multiplier * 1.5).round()
            as i64,
    }
}

fn impact_message(score: u32) -> &'static str {
    if score >= 95 {
        "Revolutionary environmental impact - industry leader in sustainability"
    } else if score >= 90 {
        "Exceptional environmental impact - leading the industry"
    } else if score >= 85 {
        "Outstanding positive impact - well above industry standards"
    } else if score >= 80 {
        "High positive impact - significantly above average"
    } else if score >= 70 {
        "Good environmental contribution - making a difference"
    } else {
        "Growing positive impact - room for substantial improvement"
    }
}

fn market_insights<R: Rng>(candidate_count: usize, rng: &mut R) -> MarketInsights {
    MarketInsights {
        demand_level: if candidate_count > 2 { "High" } else { "Moderate" }.to_string(),
        price_stability: "Stable".to_string(),
        growth_projection_percent: (15.0 + rng.gen::<f64>() * 25.0).round() as i64,
    }
}

fn percent_increase(current: i64, potential: i64) -> i64 {
    if current == 0 {
        return 0;
    }
    ((potential - current) as f64 / current as f64 * 100.0).round() as i64
}

fn round_currency(value: f64) -> i64 {
    value.round() as i64
}
