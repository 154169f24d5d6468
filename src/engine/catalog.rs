use once_cell::sync::Lazy;
use std::collections::HashMap;

use crate::models::WasteType;

/// Per-waste-type fallback data: a base rate per kilogram and the canonical
/// buyers quoted when the external buyer store is unreachable or empty.
#[derive(Clone, Copy, Debug)]
pub struct WasteTypeEntry {
    pub base_rate_per_kg: f64,
    pub buyer_names: [&'static str; 3],
}

pub fn waste_type_entry(waste_type: WasteType) -> WasteTypeEntry {
    match waste_type {
        WasteType::Plastic => WasteTypeEntry {
            base_rate_per_kg: 150.0,
            buyer_names: ["RecycleTech Corp", "EcoPlastic Solutions", "GreenPoly Industries"],
        },
        WasteType::Metal => WasteTypeEntry {
            base_rate_per_kg: 300.0,
            buyer_names: ["MetalForge Ltd", "SteelCycle Pro", "AlloyCraft Industries"],
        },
        WasteType::Organic => WasteTypeEntry {
            base_rate_per_kg: 50.0,
            buyer_names: ["BioEnergy Systems", "CompostTech", "Organic Fuels Inc"],
        },
        WasteType::Textile => WasteTypeEntry {
            base_rate_per_kg: 80.0,
            buyer_names: ["FiberRenew Co", "TextileCycle", "FashionGreen Ltd"],
        },
        WasteType::Electronic => WasteTypeEntry {
            base_rate_per_kg: 500.0,
            buyer_names: ["E-RecycleTech", "ComponentHarvest", "DigitalGreen Solutions"],
        },
        WasteType::Chemical => WasteTypeEntry {
            base_rate_per_kg: 400.0,
            buyer_names: ["ChemReprocess Ltd", "Industrial Solutions", "SafeChem Recovery"],
        },
        WasteType::Other => WasteTypeEntry {
            base_rate_per_kg: 100.0,
            buyer_names: ["Universal Recycling", "GeneralWaste Pro", "Multi-Material Solutions"],
        },
    }
}

static BUYER_INDUSTRIES: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    HashMap::from([
        ("RecycleTech Corp", "Plastic Recycling"),
        ("EcoPlastic Solutions", "Sustainable Manufacturing"),
        ("GreenPoly Industries", "Polymer Processing"),
        ("MetalForge Ltd", "Metal Fabrication"),
        ("SteelCycle Pro", "Steel Production"),
        ("AlloyCraft Industries", "Alloy Manufacturing"),
        ("BioEnergy Systems", "Renewable Energy"),
        ("CompostTech", "Soil Enhancement"),
        ("Organic Fuels Inc", "Biofuel Production"),
        ("FiberRenew Co", "Textile Manufacturing"),
        ("TextileCycle", "Fashion Industry"),
        ("FashionGreen Ltd", "Sustainable Apparel"),
        ("E-RecycleTech", "Electronics Recycling"),
        ("ComponentHarvest", "Component Recovery"),
        ("DigitalGreen Solutions", "Tech Refurbishment"),
        ("ChemReprocess Ltd", "Chemical Processing"),
        ("Industrial Solutions", "Industrial Chemistry"),
        ("SafeChem Recovery", "Hazmat Processing"),
    ])
});

pub fn industry_for_buyer(buyer_name: &str) -> &'static str {
    BUYER_INDUSTRIES
        .get(buyer_name)
        .copied()
        .unwrap_or("General Recycling")
}
