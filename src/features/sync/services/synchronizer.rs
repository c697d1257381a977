use chrono::{DateTime, Utc};
use serde::Serialize;
use std::sync::Arc;
use std::time::Duration;
use tracing::Instrument;
use uuid::Uuid;

use crate::core::config::SyncConfig;
use crate::core::error::{AppError, Result};
use crate::features::budget_details::{transform, FetchSession};
use crate::features::regions::Region;
use crate::features::sync::traits::{BudgetDetailFetcher, BudgetDetailSink, RegionSource};

/// Pacing and deadline for one run
#[derive(Debug, Clone)]
pub struct SyncOptions {
    /// Pause after a region whose records were stored, before the next region
    pub region_delay: Duration,
    /// Ceiling for the whole run, listing included
    pub run_timeout: Duration,
}

impl From<&SyncConfig> for SyncOptions {
    fn from(config: &SyncConfig) -> Self {
        Self {
            region_delay: config.region_delay,
            run_timeout: config.run_timeout,
        }
    }
}

/// Outcome counters of a finished run
#[derive(Debug, Clone, Serialize)]
pub struct SyncReport {
    pub run_id: Uuid,
    pub started_at: DateTime<Utc>,
    pub finished_at: Option<DateTime<Utc>>,
    pub regions_listed: usize,
    /// Regions passed over while looking for the resume regency
    pub regions_skipped: usize,
    pub regions_stored: usize,
    pub regions_empty: usize,
    pub regions_failed: usize,
    pub records_stored: usize,
}

impl SyncReport {
    fn new(run_id: Uuid) -> Self {
        Self {
            run_id,
            started_at: Utc::now(),
            finished_at: None,
            regions_listed: 0,
            regions_skipped: 0,
            regions_stored: 0,
            regions_empty: 0,
            regions_failed: 0,
            records_stored: 0,
        }
    }
}

/// Skip-until-match gate for resuming a run at a given regency.
///
/// Starts `Seeking` when a resume code is given and opens on the first region
/// whose regency code equals it. A gate that never opens means the run
/// processes nothing.
#[derive(Debug, PartialEq, Eq)]
enum ResumeGate {
    Seeking(String),
    Open,
}

impl ResumeGate {
    fn new(resume_from: &str) -> Self {
        if resume_from.is_empty() {
            ResumeGate::Open
        } else {
            ResumeGate::Seeking(resume_from.to_string())
        }
    }

    /// Whether `region` should be processed; opens the gate on a match
    fn admits(&mut self, region: &Region) -> bool {
        match self {
            ResumeGate::Open => true,
            ResumeGate::Seeking(target) => {
                if region.regency_code == *target {
                    *self = ResumeGate::Open;
                    true
                } else {
                    false
                }
            }
        }
    }
}

/// Drives list -> (fetch -> transform -> store -> pause) per region, sequentially
pub struct Synchronizer {
    regions: Arc<dyn RegionSource>,
    fetcher: Arc<dyn BudgetDetailFetcher>,
    sink: Arc<dyn BudgetDetailSink>,
    options: SyncOptions,
}

impl Synchronizer {
    pub fn new(
        regions: Arc<dyn RegionSource>,
        fetcher: Arc<dyn BudgetDetailFetcher>,
        sink: Arc<dyn BudgetDetailSink>,
        options: SyncOptions,
    ) -> Self {
        Self {
            regions,
            fetcher,
            sink,
            options,
        }
    }

    /// Synchronize every region of `province_filter` (all when empty), starting
    /// at the regency `resume_from` when it is non-empty.
    ///
    /// Fetch and store failures of a single region are logged and skipped.
    /// Failing to list regions, failing to authenticate, or running past the
    /// run deadline aborts the run.
    pub async fn synchronize(
        &self,
        province_filter: &[String],
        resume_from: &str,
    ) -> Result<SyncReport> {
        let run_id = Uuid::now_v7();
        let span = tracing::info_span!("sync_run", %run_id);
        let mut report = SyncReport::new(run_id);

        let outcome = tokio::time::timeout(
            self.options.run_timeout,
            self.run(province_filter, resume_from, &mut report)
                .instrument(span.clone()),
        )
        .await
        .unwrap_or_else(|_| Err(AppError::DeadlineExceeded(self.options.run_timeout)));

        let _entered = span.enter();
        report.finished_at = Some(Utc::now());

        match outcome {
            Ok(()) => {
                tracing::info!(
                    "Synchronization finished: {} regions listed, {} skipped, {} stored, {} empty, {} failed, {} records stored",
                    report.regions_listed,
                    report.regions_skipped,
                    report.regions_stored,
                    report.regions_empty,
                    report.regions_failed,
                    report.records_stored
                );
                Ok(report)
            }
            Err(e) => {
                tracing::error!("Synchronization aborted: {}", e);
                Err(e)
            }
        }
    }

    async fn run(
        &self,
        province_filter: &[String],
        resume_from: &str,
        report: &mut SyncReport,
    ) -> Result<()> {
        tracing::info!("Starting budget detail synchronization");

        let regions = self.regions.list_regions(province_filter).await?;
        report.regions_listed = regions.len();

        if regions.is_empty() {
            tracing::info!("No regions found to process");
            return Ok(());
        }

        tracing::info!("Processing budget details for {} regencies", regions.len());

        let mut gate = ResumeGate::new(resume_from);
        let mut session = FetchSession::new();

        for (index, region) in regions.iter().enumerate() {
            if !gate.admits(region) {
                tracing::info!("Skipping {} (resuming at regency {})", region, resume_from);
                report.regions_skipped += 1;
                continue;
            }

            match self.sync_region(&mut session, region).await {
                Ok(0) => report.regions_empty += 1,
                Ok(stored) => {
                    report.regions_stored += 1;
                    report.records_stored += stored;

                    let has_next = index + 1 < regions.len();
                    if has_next && !self.options.region_delay.is_zero() {
                        tracing::info!("Pausing {:?} before next region", self.options.region_delay);
                        tokio::time::sleep(self.options.region_delay).await;
                    }
                }
                Err(e) if e.is_run_fatal() => return Err(e),
                Err(e) => {
                    tracing::warn!("Failed to synchronize {}: {}. Continuing with next region", region, e);
                    report.regions_failed += 1;
                }
            }
        }

        if let ResumeGate::Seeking(target) = gate {
            tracing::warn!(
                "Resume regency {} not found among {} regions; nothing was processed",
                target,
                regions.len()
            );
        }

        Ok(())
    }

    /// Fetch, transform and store one region; returns the number of records stored
    async fn sync_region(&self, session: &mut FetchSession, region: &Region) -> Result<usize> {
        tracing::info!("=== Starting {} ===", region);

        let details = self.fetcher.fetch_budget_details(session, region).await?;
        if details.is_empty() {
            tracing::info!("No data for {}", region);
            return Ok(0);
        }

        let details = transform(details);
        self.sink.store_batch(&details).await?;

        tracing::info!("=== Finished {}: {} records stored ===", region, details.len());
        Ok(details.len())
    }
}
