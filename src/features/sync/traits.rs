use async_trait::async_trait;

use crate::core::error::Result;
use crate::features::budget_details::{BudgetDetail, FetchSession};
use crate::features::regions::Region;

/// Where the regions to synchronize come from
#[async_trait]
pub trait RegionSource: Send + Sync {
    /// Regions ordered by (province, regency); an empty filter means all provinces
    async fn list_regions(&self, province_filter: &[String]) -> Result<Vec<Region>>;
}

/// Fetches every budget line of one region from upstream
#[async_trait]
pub trait BudgetDetailFetcher: Send + Sync {
    async fn fetch_budget_details(
        &self,
        session: &mut FetchSession,
        region: &Region,
    ) -> Result<Vec<BudgetDetail>>;
}

/// Persists one region's transformed batch atomically
#[async_trait]
pub trait BudgetDetailSink: Send + Sync {
    async fn store_batch(&self, details: &[BudgetDetail]) -> Result<()>;
}
