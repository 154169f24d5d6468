use anyhow::Result;
use sqlx::{PgPool, Row};
use uuid::Uuid;

use crate::models::WasteProfile;

/// Writes registration submissions to the `industries` table.
pub struct SubmissionRepository {
    pool: PgPool,
}

impl SubmissionRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn insert(&self, user_id: &str, profile: &WasteProfile) -> Result<Uuid> {
        let row = sqlx::query(
            "INSERT INTO industries (user_id, waste_type, waste_volume, pricing_plan)
             VALUES ($1, $2, $3, $4)
             RETURNING id",
        )
        .bind(user_id)
        .bind(profile.waste_type.as_str())
        .bind(profile.volume_bucket.as_str())
        .bind(profile.pricing_plan.as_str())
        .fetch_one(&self.pool)
        .await?;

        Ok(row.get("id"))
    }
}
