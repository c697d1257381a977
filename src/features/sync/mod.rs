//! Region-by-region synchronization: list regions, then fetch, transform and
//! store each one in turn, pausing between regions.

pub mod services;
pub mod traits;

pub use services::{SyncOptions, Synchronizer};
pub use traits::{BudgetDetailFetcher, BudgetDetailSink, RegionSource};
