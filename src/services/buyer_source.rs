use anyhow::Result;
use async_trait::async_trait;
use sqlx::PgPool;

use crate::models::{BuyerCandidate, WasteType};
use crate::repository::BuyerRepository;

/// Strategy for looking up buyer candidates for a waste type. The engine
/// falls back to its static catalog whenever a source yields nothing, so an
/// implementation may legitimately return an empty list.
#[async_trait]
pub trait BuyerSource: Send + Sync {
    async fn fetch_candidates(&self, waste_type: WasteType) -> Result<Vec<BuyerCandidate>>;
}

/// Queries the hosted buyer store.
pub struct PgBuyerSource {
    repo: BuyerRepository,
}

impl PgBuyerSource {
    pub fn new(pool: PgPool) -> Self {
        Self {
            repo: BuyerRepository::new(pool),
        }
    }
}

#[async_trait]
impl BuyerSource for PgBuyerSource {
    async fn fetch_candidates(&self, waste_type: WasteType) -> Result<Vec<BuyerCandidate>> {
        self.repo.find_by_waste_type(waste_type).await
    }
}

/// Source for running without a buyer store. Yields no candidates, which
/// routes every submission through the catalog-backed scoring path.
pub struct OfflineBuyerSource;

#[async_trait]
impl BuyerSource for OfflineBuyerSource {
    async fn fetch_candidates(&self, _waste_type: WasteType) -> Result<Vec<BuyerCandidate>> {
        Ok(Vec::new())
    }
}
