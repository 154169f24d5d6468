use crate::models::{PricingPlan, VolumeBucket, WasteProfile};

/// Numeric coefficients resolved from a waste profile. Ephemeral: recomputed
/// per call, no identity.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Coefficients {
    /// Representative monthly mass for the volume bucket, in kilograms.
    pub volume_kg: f64,
    pub volume_multiplier: f64,
    pub plan_multiplier: f64,
    /// Bucket-specific environmental weight used in the CO2 estimate.
    pub co2_factor: f64,
}

/// Maps the categorical profile to numeric coefficients. Pure and total:
/// every input resolves, the enum fallbacks already happened at parse time.
pub fn resolve(profile: &WasteProfile) -> Coefficients {
    let (volume_kg, volume_multiplier, co2_factor) = match profile.volume_bucket {
        VolumeBucket::UpTo10 => (5.0, 1.0, 2.0),
        VolumeBucket::From10To50 => (30.0, 2.5, 5.0),
        VolumeBucket::From50To100 => (75.0, 4.0, 8.0),
        VolumeBucket::From100To500 => (300.0, 6.0, 15.0),
        VolumeBucket::Over500 => (1000.0, 10.0, 25.0),
    };

    let plan_multiplier = match profile.pricing_plan {
        PricingPlan::Free => 1.0,
        PricingPlan::Standard => 1.5,
        PricingPlan::Premium => 2.2,
    };

    Coefficients {
        volume_kg,
        volume_multiplier,
        plan_multiplier,
        co2_factor,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::WasteType;

    fn profile(bucket: VolumeBucket, plan: PricingPlan) -> WasteProfile {
        WasteProfile::new(WasteType::Plastic, bucket, plan)
    }

    #[test]
    fn volume_table_matches_every_bucket() {
        let cases = [
            (VolumeBucket::UpTo10, 5.0, 1.0, 2.0),
            (VolumeBucket::From10To50, 30.0, 2.5, 5.0),
            (VolumeBucket::From50To100, 75.0, 4.0, 8.0),
            (VolumeBucket::From100To500, 300.0, 6.0, 15.0),
            (VolumeBucket::Over500, 1000.0, 10.0, 25.0),
        ];

        for (bucket, kg, multiplier, co2) in cases {
            let coeffs = resolve(&profile(bucket, PricingPlan::Free));
            assert_eq!(coeffs.volume_kg, kg, "kg for {:?}", bucket);
            assert_eq!(coeffs.volume_multiplier, multiplier, "multiplier for {:?}", bucket);
            assert_eq!(coeffs.co2_factor, co2, "co2 factor for {:?}", bucket);
        }
    }

    #[test]
    fn plan_table_matches_every_plan() {
        let cases = [
            (PricingPlan::Free, 1.0),
            (PricingPlan::Standard, 1.5),
            (PricingPlan::Premium, 2.2),
        ];

        for (plan, multiplier) in cases {
            let coeffs = resolve(&profile(VolumeBucket::UpTo10, plan));
            assert_eq!(coeffs.plan_multiplier, multiplier, "multiplier for {:?}", plan);
        }
    }

    #[test]
    fn unknown_bucket_string_resolves_to_smallest_row() {
        let bucket: VolumeBucket = serde_json::from_str("\"unbounded\"").unwrap();
        let coeffs = resolve(&profile(bucket, PricingPlan::Free));
        assert_eq!(coeffs.volume_kg, 5.0);
        assert_eq!(coeffs.volume_multiplier, 1.0);
        assert_eq!(coeffs.co2_factor, 2.0);
    }

    #[test]
    fn resolve_is_idempotent() {
        let p = profile(VolumeBucket::From100To500, PricingPlan::Premium);
        assert_eq!(resolve(&p), resolve(&p));
    }
}
