use anyhow::Result;
use sqlx::{PgPool, Row};

use crate::models::{BuyerCandidate, WasteType};

/// Read-only access to the `potential_buyers` table.
pub struct BuyerRepository {
    pool: PgPool,
}

impl BuyerRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Buyers whose accepted waste types include the given one. The filter
    /// runs server-side; the engine never sees buyers it cannot match.
    pub async fn find_by_waste_type(&self, waste_type: WasteType) -> Result<Vec<BuyerCandidate>> {
        let rows = sqlx::query(
            "SELECT name, industry, location, base_price_per_kg
             FROM potential_buyers
             WHERE $1 = ANY(waste_types)",
        )
        .bind(waste_type.as_str())
        .fetch_all(&self.pool)
        .await?;

        let buyers = rows
            .into_iter()
            .map(|row| BuyerCandidate {
                name: row.get("name"),
                industry: row.get("industry"),
                location: row.get("location"),
                base_price_per_kg: row.get("base_price_per_kg"),
            })
            .collect();

        Ok(buyers)
    }
}
