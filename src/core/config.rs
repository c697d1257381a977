use std::env;
use std::time::Duration;

#[derive(Debug, Clone)]
pub struct Config {
    pub database: DatabaseConfig,
    pub api: ApiConfig,
    pub sync: SyncConfig,
}

#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    pub url: String,
    pub max_connections: u32,
    pub min_connections: u32,
    pub acquire_timeout_secs: u64,
    pub idle_timeout_secs: u64,
    pub max_lifetime_secs: u64,
}

/// Connection and credential settings for the realization API
#[derive(Clone)]
pub struct ApiConfig {
    /// Base data endpoint; the first page of every region is requested here
    pub data_url: String,
    pub login_url: String,
    pub username: String,
    pub password: String,
    /// Budget year sent as `tahun` in every data request
    pub year: i32,
    pub request_timeout: Duration,
}

// Keep the password out of logs
impl std::fmt::Debug for ApiConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiConfig")
            .field("data_url", &self.data_url)
            .field("login_url", &self.login_url)
            .field("username", &self.username)
            .field("password", &"***")
            .field("year", &self.year)
            .field("request_timeout", &self.request_timeout)
            .finish()
    }
}

#[derive(Debug, Clone)]
pub struct SyncConfig {
    /// Pause after every successfully stored region
    pub region_delay: Duration,
    /// Ceiling for the whole run
    pub run_timeout: Duration,
}

impl Config {
    pub fn from_env() -> Result<Self, String> {
        // Load .env file if exists, ignore if not found (optional for production)
        if let Err(e) = dotenvy::dotenv() {
            if !e.not_found() {
                eprintln!("Warning: Error loading .env file: {}", e);
            }
        }

        Ok(Config {
            database: DatabaseConfig::from_env()?,
            api: ApiConfig::from_env()?,
            sync: SyncConfig::from_env()?,
        })
    }
}

impl DatabaseConfig {
    const DEFAULT_MAX_CONNECTIONS: u32 = 100;
    const DEFAULT_MIN_CONNECTIONS: u32 = 1;
    const DEFAULT_ACQUIRE_TIMEOUT_SECS: u64 = 30;
    const DEFAULT_IDLE_TIMEOUT_SECS: u64 = 600; // 10 minutes
    const DEFAULT_MAX_LIFETIME_SECS: u64 = 600; // recycle before firewall idle cutoffs

    pub fn from_env() -> Result<Self, String> {
        let url = env::var("DATABASE_URL").map_err(|_| "DATABASE_URL must be set".to_string())?;

        let max_connections = parse_var("DB_MAX_CONNECTIONS", Self::DEFAULT_MAX_CONNECTIONS)?;
        let min_connections = parse_var("DB_MIN_CONNECTIONS", Self::DEFAULT_MIN_CONNECTIONS)?;
        let acquire_timeout_secs =
            parse_var("DB_ACQUIRE_TIMEOUT_SECS", Self::DEFAULT_ACQUIRE_TIMEOUT_SECS)?;
        let idle_timeout_secs = parse_var("DB_IDLE_TIMEOUT_SECS", Self::DEFAULT_IDLE_TIMEOUT_SECS)?;
        let max_lifetime_secs = parse_var("DB_MAX_LIFETIME_SECS", Self::DEFAULT_MAX_LIFETIME_SECS)?;

        Ok(Self {
            url,
            max_connections,
            min_connections,
            acquire_timeout_secs,
            idle_timeout_secs,
            max_lifetime_secs,
        })
    }
}

impl ApiConfig {
    const DEFAULT_DATA_URL: &'static str =
        "https://konsolidasi-apbdesa.kemendagri.go.id/api/rekap/anggaranrealisasikegobyek/detail";
    const DEFAULT_LOGIN_URL: &'static str = "https://konsolidasi-apbdesa.kemendagri.go.id/api/login";
    const DEFAULT_YEAR: i32 = 2025;
    const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 7200; // 2 hours, large regions are slow

    pub fn from_env() -> Result<Self, String> {
        let data_url = env::var("API_URL").unwrap_or_else(|_| Self::DEFAULT_DATA_URL.to_string());
        let login_url =
            env::var("API_LOGIN_URL").unwrap_or_else(|_| Self::DEFAULT_LOGIN_URL.to_string());

        // Credentials are mandatory; an empty value counts as missing
        let username = env::var("API_USERNAME")
            .ok()
            .filter(|s| !s.is_empty())
            .ok_or_else(|| "API_USERNAME environment variable is required".to_string())?;
        let password = env::var("API_PASSWORD")
            .ok()
            .filter(|s| !s.is_empty())
            .ok_or_else(|| "API_PASSWORD environment variable is required".to_string())?;

        let year = parse_var("API_DATA_TAHUN", Self::DEFAULT_YEAR)?;
        let request_timeout_secs =
            parse_var("API_REQUEST_TIMEOUT_SECS", Self::DEFAULT_REQUEST_TIMEOUT_SECS)?;

        Ok(Self {
            data_url,
            login_url,
            username,
            password,
            year,
            request_timeout: Duration::from_secs(request_timeout_secs),
        })
    }
}

impl SyncConfig {
    const DEFAULT_REGION_DELAY_SECS: u64 = 30;
    const DEFAULT_RUN_TIMEOUT_SECS: u64 = 600; // 10 minutes

    pub fn from_env() -> Result<Self, String> {
        let region_delay_secs = parse_var("SYNC_REGION_DELAY_SECS", Self::DEFAULT_REGION_DELAY_SECS)?;
        let run_timeout_secs = parse_var("SYNC_RUN_TIMEOUT_SECS", Self::DEFAULT_RUN_TIMEOUT_SECS)?;

        Ok(Self {
            region_delay: Duration::from_secs(region_delay_secs),
            run_timeout: Duration::from_secs(run_timeout_secs),
        })
    }
}

/// Read a numeric variable, falling back to `default` when unset
fn parse_var<T>(key: &str, default: T) -> Result<T, String>
where
    T: std::str::FromStr + ToString,
{
    env::var(key)
        .unwrap_or_else(|_| default.to_string())
        .trim()
        .parse::<T>()
        .map_err(|_| format!("{} must be a valid number", key))
}
