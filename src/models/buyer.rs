use serde::{Deserialize, Serialize};

/// A party willing to purchase a given waste stream, as stored in the
/// `potential_buyers` table. Read-only to the engine.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct BuyerCandidate {
    pub name: String,
    pub industry: String,
    pub location: Option<String>,
    pub base_price_per_kg: f64,
}

impl BuyerCandidate {
    pub fn new(name: &str, industry: &str, location: Option<&str>, base_price_per_kg: f64) -> Self {
        Self {
            name: name.to_string(),
            industry: industry.to_string(),
            location: location.map(str::to_string),
            base_price_per_kg,
        }
    }
}
