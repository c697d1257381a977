use std::time::Duration;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Authentication failed: {0}")]
    AuthenticationFailed(String),

    #[error("API call failed with status {}: {message}", status_label(.status))]
    ApiCallFailed {
        /// HTTP status, absent when the request never produced a response
        status: Option<u16>,
        message: String,
    },

    #[error("Invalid API response from {url}: {message}")]
    InvalidResponse { url: String, message: String },

    #[error("Database operation '{operation}' failed: {source}")]
    DbOperationFailed {
        operation: &'static str,
        #[source]
        source: sqlx::Error,
    },

    #[error("Region store unavailable: {0}")]
    StoreUnavailable(#[source] sqlx::Error),

    #[error("Run deadline of {0:?} exceeded")]
    DeadlineExceeded(Duration),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl AppError {
    /// Whether this error must abort the whole run instead of skipping one region
    pub fn is_run_fatal(&self) -> bool {
        matches!(
            self,
            AppError::AuthenticationFailed(_)
                | AppError::StoreUnavailable(_)
                | AppError::DeadlineExceeded(_)
                | AppError::Config(_)
        )
    }
}

fn status_label(status: &Option<u16>) -> String {
    match status {
        Some(code) => code.to_string(),
        None => "none".to_string(),
    }
}

pub type Result<T> = std::result::Result<T, AppError>;
