mod cli;
mod core;
mod features;
mod shared;

use crate::cli::Cli;
use crate::core::config::Config;
use crate::core::database;
use crate::features::budget_details::{BudgetDetailStore, RealizationApiClient};
use crate::features::regions::RegionDirectory;
use crate::features::sync::{SyncOptions, Synchronizer};
use clap::Parser;
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> anyhow::Result<()> {
    // One region at a time, so a single-threaded runtime is enough
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;

    runtime.block_on(async_main())
}

async fn async_main() -> anyhow::Result<()> {
    // Load .env file BEFORE initializing logger so RUST_LOG is available
    let _ = dotenvy::dotenv();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let result = run().await;
    match &result {
        Ok(()) => tracing::info!("Application finished successfully"),
        Err(e) => tracing::error!("Synchronization process failed: {:#}", e),
    }
    result
}

async fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let province_filter = cli.province_filter();
    let resume_from = cli.resume_regency()?;

    let config = Config::from_env().map_err(|e| anyhow::anyhow!(e))?;
    tracing::info!("Configuration loaded successfully (year {})", config.api.year);

    if province_filter.is_empty() {
        tracing::info!("No province filter given, processing all provinces");
    } else {
        tracing::info!("Processing provinces: {:?}", province_filter);
    }
    if !resume_from.is_empty() {
        tracing::info!("Resuming from regency {}", resume_from);
    }

    let pool = database::create_pool(&config.database).await?;
    tracing::info!("Database connection pool created");

    let region_directory = Arc::new(RegionDirectory::new(pool.clone()));
    let api_client = Arc::new(RealizationApiClient::new(config.api.clone())?);
    let store = Arc::new(BudgetDetailStore::new(pool.clone()));

    let synchronizer = Synchronizer::new(
        region_directory,
        api_client,
        store,
        SyncOptions::from(&config.sync),
    );

    let report = synchronizer
        .synchronize(&province_filter, &resume_from)
        .await?;

    if let Ok(summary) = serde_json::to_string(&report) {
        tracing::debug!("Sync report: {}", summary);
    }
    if report.regions_failed > 0 {
        tracing::warn!(
            "{} of {} regions failed and were skipped",
            report.regions_failed,
            report.regions_listed
        );
    }

    pool.close().await;
    Ok(())
}
