use async_trait::async_trait;
use sqlx::PgPool;

use crate::core::error::{AppError, Result};
use crate::features::regions::models::{normalize_regency_code, Region};
use crate::features::sync::RegionSource;
use crate::shared::constants::REGION_TABLE;

/// Read-only access to the regions known to the store
pub struct RegionDirectory {
    pool: PgPool,
}

impl RegionDirectory {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// List regions ordered by (province, regency), restricted to
    /// `province_filter` when it is non-empty
    pub async fn list_regions(&self, province_filter: &[String]) -> Result<Vec<Region>> {
        let query = region_query(!province_filter.is_empty());

        let mut regions = if province_filter.is_empty() {
            sqlx::query_as::<_, Region>(&query)
                .fetch_all(&self.pool)
                .await
        } else {
            sqlx::query_as::<_, Region>(&query)
                .bind(province_filter)
                .fetch_all(&self.pool)
                .await
        }
        .map_err(|e| {
            tracing::error!("Failed to list regions: {:?}", e);
            AppError::StoreUnavailable(e)
        })?;

        for region in &mut regions {
            region.regency_code = normalize_regency_code(&region.regency_code);
        }

        tracing::debug!(
            "Listed {} regions (province filter: {:?})",
            regions.len(),
            province_filter
        );

        Ok(regions)
    }
}

#[async_trait]
impl RegionSource for RegionDirectory {
    async fn list_regions(&self, province_filter: &[String]) -> Result<Vec<Region>> {
        RegionDirectory::list_regions(self, province_filter).await
    }
}

/// Codes are read as text whatever the column type, so normalization sees "3"
/// rather than an integer
fn region_query(filtered: bool) -> String {
    let mut query = format!(
        "SELECT provinsi_id::text AS provinsi_id, kota_id::text AS kota_id FROM {}",
        REGION_TABLE
    );
    if filtered {
        query.push_str(" WHERE provinsi_id::text = ANY($1)");
    }
    query.push_str(" ORDER BY provinsi_id, kota_id");
    query
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_region_query_unfiltered() {
        assert_eq!(
            region_query(false),
            "SELECT provinsi_id::text AS provinsi_id, kota_id::text AS kota_id \
             FROM master_kota ORDER BY provinsi_id, kota_id"
        );
    }

    #[test]
    fn test_region_query_filtered_uses_set_membership() {
        let query = region_query(true);
        assert!(query.contains("WHERE provinsi_id::text = ANY($1)"));
        assert!(query.ends_with("ORDER BY provinsi_id, kota_id"));
    }
}
