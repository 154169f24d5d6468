use anyhow::Result;
use sqlx::PgPool;
use uuid::Uuid;

use crate::models::Recommendations;

/// Writes generated recommendation sets to the `recommendations` table for
/// later dashboard reads. The three output blocks are stored as JSONB.
pub struct RecommendationRepository {
    pool: PgPool,
}

impl RecommendationRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn insert(
        &self,
        user_id: &str,
        industry_id: Option<Uuid>,
        recommendations: &Recommendations,
    ) -> Result<()> {
        sqlx::query(
            "INSERT INTO recommendations (user_id, industry_id, potential_buyers, trade_value, green_score)
             VALUES ($1, $2, $3, $4, $5)",
        )
        .bind(user_id)
        .bind(industry_id)
        .bind(serde_json::to_value(&recommendations.matched_buyers)?)
        .bind(serde_json::to_value(recommendations.trade_value)?)
        .bind(serde_json::to_value(&recommendations.green_score)?)
        .execute(&self.pool)
        .await?;

        Ok(())
    }
}
