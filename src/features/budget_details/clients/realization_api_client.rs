use async_trait::async_trait;
use serde::de::DeserializeOwned;

use crate::core::config::ApiConfig;
use crate::core::error::{AppError, Result};
use crate::features::budget_details::dtos::{
    DataRequest, LoginRequest, LoginResponse, PageEnvelope,
};
use crate::features::budget_details::models::BudgetDetail;
use crate::features::regions::Region;
use crate::features::sync::BudgetDetailFetcher;
use crate::shared::constants::USER_AGENT;

/// Per-run authentication state.
///
/// Created empty at the start of a run; the first fetch logs in and stores the
/// bearer token here, every later fetch of the run reuses it. There is no
/// refresh: a token that expires mid-run surfaces as a failed page request.
#[derive(Debug, Default)]
pub struct FetchSession {
    token: Option<String>,
}

impl FetchSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }
}

/// Client for the budget realization API (login + paginated detail endpoint)
pub struct RealizationApiClient {
    http_client: reqwest::Client,
    config: ApiConfig,
}

impl RealizationApiClient {
    pub fn new(config: ApiConfig) -> Result<Self> {
        let http_client = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .timeout(config.request_timeout)
            .build()
            .map_err(|e| AppError::Config(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self::with_client(http_client, config))
    }

    pub fn with_client(http_client: reqwest::Client, config: ApiConfig) -> Self {
        Self {
            http_client,
            config,
        }
    }

    /// Fetch every record of one region, following `next_page_url` until the
    /// server stops supplying one.
    ///
    /// Records are returned in page-arrival order. Any failing page aborts the
    /// whole region; nothing fetched so far is returned.
    pub async fn fetch_budget_details(
        &self,
        session: &mut FetchSession,
        region: &Region,
    ) -> Result<Vec<BudgetDetail>> {
        let token = self.ensure_token(session).await?;

        let payload = DataRequest {
            year: self.config.year,
            province_code: region.province_code.clone(),
            regency_code: region.regency_code.clone(),
        };

        let mut details = Vec::new();
        let mut next_page_url = Some(self.config.data_url.clone());
        let mut pages = 0usize;

        while let Some(url) = next_page_url.take() {
            tracing::debug!("Fetching data from: {}", url);

            let envelope: PageEnvelope = self.get_page(&url, token, &payload).await?;
            pages += 1;

            details.extend(envelope.data.records);
            // An empty link ends pagination like a null one
            next_page_url = envelope.data.next_page_url.filter(|u| !u.is_empty());
        }

        tracing::info!(
            "Fetched {} records across {} pages for {}",
            details.len(),
            pages,
            region
        );

        Ok(details)
    }

    /// Log in unless the session already holds a token
    async fn ensure_token<'s>(&self, session: &'s mut FetchSession) -> Result<&'s str> {
        if !session.is_authenticated() {
            session.token = Some(self.authenticate().await?);
        } else {
            tracing::debug!("Reusing bearer token for this run");
        }

        session
            .token
            .as_deref()
            .ok_or_else(|| AppError::AuthenticationFailed("no token in session".to_string()))
    }

    /// Exchange the configured credentials for a bearer token
    async fn authenticate(&self) -> Result<String> {
        let body = LoginRequest {
            username: &self.config.username,
            password: &self.config.password,
        };

        let response = self
            .http_client
            .post(&self.config.login_url)
            .json(&body)
            .send()
            .await
            .map_err(|e| {
                tracing::error!("Login request failed: {:?}", e);
                AppError::AuthenticationFailed(format!("login request failed: {}", e))
            })?;

        let status = response.status();
        if status != reqwest::StatusCode::OK {
            let body = response.text().await.unwrap_or_default();
            return Err(AppError::AuthenticationFailed(format!(
                "login failed with HTTP {} - {}",
                status, body
            )));
        }

        let login: LoginResponse = response.json().await.map_err(|e| {
            AppError::AuthenticationFailed(format!("failed to decode login response: {}", e))
        })?;

        if login.token.is_empty() {
            return Err(AppError::AuthenticationFailed(
                "login succeeded but token is empty".to_string(),
            ));
        }

        tracing::info!("Authenticated against realization API as {}", self.config.username);
        Ok(login.token)
    }

    /// Issue one page request. The endpoint expects a GET carrying a JSON body.
    async fn get_page<T: DeserializeOwned>(
        &self,
        url: &str,
        token: &str,
        payload: &DataRequest,
    ) -> Result<T> {
        let response = self
            .http_client
            .get(url)
            .bearer_auth(token)
            .header(reqwest::header::ACCEPT, "application/json")
            .json(payload)
            .send()
            .await
            .map_err(|e| {
                tracing::error!("Request for page {} failed: {:?}", url, e);
                AppError::ApiCallFailed {
                    status: e.status().map(|s| s.as_u16()),
                    message: format!("request for page {} failed: {}", url, e),
                }
            })?;

        let status = response.status();
        if status != reqwest::StatusCode::OK {
            let body = response.text().await.unwrap_or_default();
            return Err(AppError::ApiCallFailed {
                status: Some(status.as_u16()),
                message: format!("unexpected status on page {}: {}", url, body),
            });
        }

        let bytes = response.bytes().await.map_err(|e| AppError::ApiCallFailed {
            status: Some(status.as_u16()),
            message: format!("failed to read body of page {}: {}", url, e),
        })?;

        serde_json::from_slice(&bytes).map_err(|e| AppError::InvalidResponse {
            url: url.to_string(),
            message: e.to_string(),
        })
    }
}

#[async_trait]
impl BudgetDetailFetcher for RealizationApiClient {
    async fn fetch_budget_details(
        &self,
        session: &mut FetchSession,
        region: &Region,
    ) -> Result<Vec<BudgetDetail>> {
        RealizationApiClient::fetch_budget_details(self, session, region).await
    }
}
