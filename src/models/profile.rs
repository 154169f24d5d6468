use serde::{Deserialize, Serialize};

/// Category of industrial waste a submitter wants to trade.
///
/// Unrecognized values map to `Other` instead of failing, so a submission
/// never bounces on an unexpected category string.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", from = "String")]
pub enum WasteType {
    Plastic,
    Metal,
    Organic,
    Textile,
    Electronic,
    Chemical,
    Other,
}

impl WasteType {
    pub fn as_str(&self) -> &'static str {
        match self {
            WasteType::Plastic => "plastic",
            WasteType::Metal => "metal",
            WasteType::Organic => "organic",
            WasteType::Textile => "textile",
            WasteType::Electronic => "electronic",
            WasteType::Chemical => "chemical",
            WasteType::Other => "other",
        }
    }
}

impl From<String> for WasteType {
    fn from(value: String) -> Self {
        match value.as_str() {
            "plastic" => WasteType::Plastic,
            "metal" => WasteType::Metal,
            "organic" => WasteType::Organic,
            "textile" => WasteType::Textile,
            "electronic" => WasteType::Electronic,
            "chemical" => WasteType::Chemical,
            _ => WasteType::Other,
        }
    }
}

/// Monthly tonnage range reported at registration.
///
/// Unknown bucket strings resolve to the smallest bucket.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String")]
pub enum VolumeBucket {
    #[serde(rename = "0-10")]
    UpTo10,
    #[serde(rename = "10-50")]
    From10To50,
    #[serde(rename = "50-100")]
    From50To100,
    #[serde(rename = "100-500")]
    From100To500,
    #[serde(rename = "500+")]
    Over500,
}

impl VolumeBucket {
    pub fn as_str(&self) -> &'static str {
        match self {
            VolumeBucket::UpTo10 => "0-10",
            VolumeBucket::From10To50 => "10-50",
            VolumeBucket::From50To100 => "50-100",
            VolumeBucket::From100To500 => "100-500",
            VolumeBucket::Over500 => "500+",
        }
    }
}

impl From<String> for VolumeBucket {
    fn from(value: String) -> Self {
        match value.as_str() {
            "10-50" => VolumeBucket::From10To50,
            "50-100" => VolumeBucket::From50To100,
            "100-500" => VolumeBucket::From100To500,
            "500+" => VolumeBucket::Over500,
            _ => VolumeBucket::UpTo10,
        }
    }
}

/// Subscription tier picked during onboarding.
///
/// Plan validation belongs to the form upstream; anything unrecognized that
/// still reaches us is treated as the free tier.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", from = "String")]
pub enum PricingPlan {
    Free,
    Standard,
    Premium,
}

impl PricingPlan {
    pub fn as_str(&self) -> &'static str {
        match self {
            PricingPlan::Free => "free",
            PricingPlan::Standard => "standard",
            PricingPlan::Premium => "premium",
        }
    }
}

impl From<String> for PricingPlan {
    fn from(value: String) -> Self {
        match value.as_str() {
            "standard" => PricingPlan::Standard,
            "premium" => PricingPlan::Premium,
            _ => PricingPlan::Free,
        }
    }
}

/// Immutable waste profile captured from a registration submission.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct WasteProfile {
    pub waste_type: WasteType,
    pub volume_bucket: VolumeBucket,
    pub pricing_plan: PricingPlan,
}

impl WasteProfile {
    pub fn new(
        waste_type: WasteType,
        volume_bucket: VolumeBucket,
        pricing_plan: PricingPlan,
    ) -> Self {
        Self {
            waste_type,
            volume_bucket,
            pricing_plan,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_waste_type_falls_back_to_other() {
        let parsed: WasteType = serde_json::from_str("\"styrofoam\"").unwrap();
        assert_eq!(parsed, WasteType::Other);
    }

    #[test]
    fn unknown_volume_bucket_falls_back_to_smallest() {
        let parsed: VolumeBucket = serde_json::from_str("\"a-lot\"").unwrap();
        assert_eq!(parsed, VolumeBucket::UpTo10);
    }

    #[test]
    fn unknown_plan_falls_back_to_free() {
        let parsed: PricingPlan = serde_json::from_str("\"platinum\"").unwrap();
        assert_eq!(parsed, PricingPlan::Free);
    }

    #[test]
    fn volume_bucket_round_trips_wire_names() {
        for bucket in [
            VolumeBucket::UpTo10,
            VolumeBucket::From10To50,
            VolumeBucket::From50To100,
            VolumeBucket::From100To500,
            VolumeBucket::Over500,
        ] {
            let json = serde_json::to_string(&bucket).unwrap();
            assert_eq!(json, format!("\"{}\"", bucket.as_str()));
        }
    }
}
