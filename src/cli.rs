use clap::Parser;

use crate::core::error::{AppError, Result};
use crate::features::regions::models::parse_regency_code;

#[derive(Debug, Parser)]
#[command(
    name = "anggaran-sync",
    version,
    about = "Synchronize village budget realization details into Postgres"
)]
pub struct Cli {
    /// Comma-separated province codes to process (e.g. 11,12,51). Empty processes all.
    #[arg(long = "prov", env = "SYNC_PROVINCES", value_delimiter = ',')]
    pub provinces: Vec<String>,

    /// Regency code to resume from; earlier regencies are skipped.
    #[arg(long = "kab", env = "SYNC_START_REGENCY")]
    pub start_regency: Option<String>,
}

impl Cli {
    /// Province allow-list with blanks removed
    pub fn province_filter(&self) -> Vec<String> {
        self.provinces
            .iter()
            .map(|p| p.trim().to_string())
            .filter(|p| !p.is_empty())
            .collect()
    }

    /// Resume code formatted like directory codes ("3" -> "03"); empty when unset
    pub fn resume_regency(&self) -> Result<String> {
        match self.start_regency.as_deref().map(str::trim) {
            None | Some("") => Ok(String::new()),
            Some(raw) => parse_regency_code(raw).map_err(|raw| {
                AppError::Config(format!("regency code '{}' is not a valid number", raw))
            }),
        }
    }
}
