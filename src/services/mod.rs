pub mod buyer_source;
pub mod recommendation;

use std::sync::Arc;

use sqlx::PgPool;

use crate::config::Config;
use buyer_source::{OfflineBuyerSource, PgBuyerSource};
use recommendation::RecommendationService;

pub use buyer_source::BuyerSource;

pub struct AppState {
    pub config: Config,
    pub recommendations: RecommendationService,
}

impl AppState {
    /// State backed by the hosted buyer store.
    pub fn new(pool: PgPool, config: Config) -> Self {
        let source = Arc::new(PgBuyerSource::new(pool.clone()));
        Self {
            config,
            recommendations: RecommendationService::new(source, Some(pool)),
        }
    }

    /// State without a database: catalog-backed scoring, no write-back.
    pub fn offline(config: Config) -> Self {
        Self {
            config,
            recommendations: RecommendationService::new(Arc::new(OfflineBuyerSource), None),
        }
    }
}
