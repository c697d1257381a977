//! Budget realization details (detail anggaran/realisasi per desa).
//!
//! - `clients`: login and paginated fetch against the realization API
//! - `services::transform`: compound region codes (`prov.kab.kec`, `prov.kab.desa`)
//! - `services::BudgetDetailStore`: transactional upsert into `siskeudes_detail_anggaran`

pub mod clients;
pub mod dtos;
pub mod models;
pub mod services;

pub use clients::{FetchSession, RealizationApiClient};
pub use models::BudgetDetail;
pub use services::{transform, BudgetDetailStore};
