use std::sync::Arc;

use sqlx::PgPool;
use tracing::{info, warn};
use uuid::Uuid;

use crate::engine;
use crate::models::{Recommendations, WasteProfile};
use crate::repository::{RecommendationRepository, SubmissionRepository};
use crate::services::buyer_source::BuyerSource;

/// Orchestrates one submission cycle: fetch candidates, run the pure
/// engine, write the results back, return them.
///
/// Store failures never surface to the caller. A failed candidate fetch
/// degrades to the catalog path and a failed write-back is logged; the
/// computed recommendations are returned either way.
pub struct RecommendationService {
    source: Arc<dyn BuyerSource>,
    submissions: Option<SubmissionRepository>,
    recommendations: Option<RecommendationRepository>,
}

impl RecommendationService {
    pub fn new(source: Arc<dyn BuyerSource>, pool: Option<PgPool>) -> Self {
        Self {
            source,
            submissions: pool.clone().map(SubmissionRepository::new),
            recommendations: pool.map(RecommendationRepository::new),
        }
    }

    pub async fn recommend(&self, user_id: &str, profile: WasteProfile) -> Recommendations {
        let candidates = match self.source.fetch_candidates(profile.waste_type).await {
            Ok(candidates) => candidates,
            Err(err) => {
                warn!(
                    waste_type = profile.waste_type.as_str(),
                    error = %err,
                    "buyer lookup failed, using catalog fallback"
                );
                Vec::new()
            }
        };

        info!(
            waste_type = profile.waste_type.as_str(),
            volume = profile.volume_bucket.as_str(),
            plan = profile.pricing_plan.as_str(),
            candidates = candidates.len(),
            "generating recommendations"
        );

        let coefficients = engine::resolve(&profile);
        let recommendations =
            engine::generate(&profile, &coefficients, &candidates, &mut rand::thread_rng());

        self.persist(user_id, &profile, &recommendations).await;

        recommendations
    }

    /// Best-effort write-back of the submission and its recommendations.
    async fn persist(
        &self,
        user_id: &str,
        profile: &WasteProfile,
        recommendations: &Recommendations,
    ) {
        let submission_id = self.persist_submission(user_id, profile).await;

        if let Some(repo) = &self.recommendations {
            if let Err(err) = repo.insert(user_id, submission_id, recommendations).await {
                warn!(user_id, error = %err, "failed to save recommendations");
            }
        }
    }

    async fn persist_submission(&self, user_id: &str, profile: &WasteProfile) -> Option<Uuid> {
        let repo = self.submissions.as_ref()?;
        match repo.insert(user_id, profile).await {
            Ok(id) => Some(id),
            Err(err) => {
                warn!(user_id, error = %err, "failed to save submission");
                None
            }
        }
    }
}
