pub mod buyer;
pub mod profile;
pub mod recommendation;

pub use buyer::BuyerCandidate;
pub use profile::{PricingPlan, VolumeBucket, WasteProfile, WasteType};
pub use recommendation::{
    GreenScore, MarketInsights, MatchedBuyer, Recommendations, TradeValueProjection,
};
