//! Regions (wilayah) to synchronize.
//!
//! The directory reads `(provinsi_id, kota_id)` pairs from `master_kota`,
//! optionally narrowed to a province allow-list, and hands them to the sync
//! loop in `(province, regency)` order.

pub mod models;
pub mod services;

pub use models::Region;
pub use services::RegionDirectory;
