use crate::config::Config;
use crate::models::{
    district::DistrictSummary,
    error::AppError,
    performance::{ComparisonResult, CurrentSnapshot, DistrictBundle, HistoricalPoint},
    response::ApiEnvelope,
};
use crate::services::timeout::with_timeout;
use serde::de::DeserializeOwned;
use std::future::Future;

// API CONFIGURATION
/// Configuration for the dashboard API client.
#[derive(Debug, Clone)]
pub struct ApiConfig {
    base_url: String,
    state_code: String,
    history_months: u32,
}

impl ApiConfig {
    /// Creates a builder for constructing an `ApiConfig`.
    pub fn builder() -> ApiConfigBuilder {
        ApiConfigBuilder::default()
    }

    pub fn state_code(&self) -> &str {
        &self.state_code
    }

    pub fn history_months(&self) -> u32 {
        self.history_months
    }

    /// District catalog for the configured state.
    pub fn districts_url(&self) -> String {
        format!("{}/districts?state_code={}", self.base_url, self.state_code)
    }

    pub fn current_url(&self, district_code: &str) -> String {
        format!("{}/district/{district_code}/current", self.base_url)
    }

    pub fn history_url(&self, district_code: &str) -> String {
        format!(
            "{}/district/{district_code}/history?months={}",
            self.base_url, self.history_months
        )
    }

    pub fn compare_url(&self, district_code: &str) -> String {
        format!("{}/district/{district_code}/compare", self.base_url)
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        ApiConfigBuilder::default().build()
    }
}

// API CONFIGURATION BUILDER
/// Builder for constructing an `ApiConfig` with custom settings.
#[derive(Debug, Default)]
pub struct ApiConfigBuilder {
    base_url: Option<String>,
    state_code: Option<String>,
    history_months: Option<u32>,
}

impl ApiConfigBuilder {
    /// Sets a custom base URL (primarily for testing).
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    /// Sets the state whose districts are listed.
    pub fn state_code(mut self, code: impl Into<String>) -> Self {
        self.state_code = Some(code.into());
        self
    }

    /// Sets the number of months requested for the historical trend.
    pub fn history_months(mut self, months: u32) -> Self {
        self.history_months = Some(months);
        self
    }

    /// Builds the `ApiConfig`.
    pub fn build(self) -> ApiConfig {
        let base_url = self
            .base_url
            .unwrap_or_else(|| Config::API_BASE_URL.to_string());

        ApiConfig {
            base_url: base_url.trim_end_matches('/').to_string(),
            state_code: self
                .state_code
                .unwrap_or_else(|| Config::STATE_CODE.to_string()),
            history_months: self.history_months.unwrap_or(Config::HISTORY_MONTHS),
        }
    }
}

// DATA SOURCE
/// Read-only access to the four dashboard resources.
///
/// `Err` means the request itself failed; a response with `success: false`
/// is still `Ok`.
pub trait DistrictSource {
    fn districts(&self)
    -> impl Future<Output = Result<ApiEnvelope<Vec<DistrictSummary>>, AppError>>;

    fn current(
        &self,
        district_code: &str,
    ) -> impl Future<Output = Result<ApiEnvelope<CurrentSnapshot>, AppError>>;

    fn history(
        &self,
        district_code: &str,
    ) -> impl Future<Output = Result<ApiEnvelope<Vec<HistoricalPoint>>, AppError>>;

    fn comparison(
        &self,
        district_code: &str,
    ) -> impl Future<Output = Result<ApiEnvelope<ComparisonResult>, AppError>>;
}

/// Requests snapshot, history and comparison for one district concurrently.
///
/// The first request to fail aborts the others and its error is returned.
/// Endpoints answering `success: false` leave their slot empty.
pub async fn load_district_bundle<S: DistrictSource>(
    source: &S,
    district_code: &str,
) -> Result<DistrictBundle, AppError> {
    let (current, history, comparison) = futures::try_join!(
        source.current(district_code),
        source.history(district_code),
        source.comparison(district_code),
    )?;

    Ok(DistrictBundle {
        current: current.into_data(),
        history: history.into_data(),
        comparison: comparison.into_data(),
    })
}

// DASHBOARD CLIENT
/// HTTP client for the dashboard API.
pub struct DashboardClient {
    http: reqwest::Client,
    config: ApiConfig,
}

impl DashboardClient {
    /// Creates a new client with default configuration.
    pub fn new() -> Result<Self, AppError> {
        Self::with_config(ApiConfig::default())
    }

    /// Creates a new client with the specified configuration.
    pub fn with_config(config: ApiConfig) -> Result<Self, AppError> {
        let http = reqwest::Client::builder()
            .build()
            .map_err(|e| AppError::ConfigError(format!("Failed to create HTTP client: {e}")))?;

        Ok(Self { http, config })
    }

    /// Returns a reference to the client's configuration.
    pub fn config(&self) -> &ApiConfig {
        &self.config
    }

    /// Executes a single GET and decodes the envelope.
    async fn fetch<T: DeserializeOwned>(&self, url: &str) -> Result<ApiEnvelope<T>, AppError> {
        let response = self
            .http
            .get(url)
            .send()
            .await
            .map_err(|e| self.classify_error(e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(self.error_for_status(status, url));
        }

        response
            .json()
            .await
            .map_err(|e| AppError::DataError(format!("Failed to parse response: {e}")))
    }

    /// Converts a reqwest error into an appropriate AppError.
    fn classify_error(&self, error: reqwest::Error) -> AppError {
        if error.is_timeout() {
            AppError::ApiError(format!("Request timeout: {error}"))
        } else if error.is_request() {
            AppError::ApiError(format!("Request error: {error}"))
        } else {
            AppError::ApiError(format!("Network error: {error}"))
        }
    }

    /// Creates an error based on HTTP status code. Error bodies are not read.
    fn error_for_status(&self, status: reqwest::StatusCode, url: &str) -> AppError {
        match status.as_u16() {
            404 => AppError::NotFound(format!("Resource not found: {url}")),
            400..=499 => AppError::ApiError(format!("Client error {status}")),
            500..=599 => AppError::ApiError(format!("Server error {status}")),
            _ => AppError::ApiError(format!("Unexpected status {status}")),
        }
    }
}

impl DistrictSource for DashboardClient {
    async fn districts(&self) -> Result<ApiEnvelope<Vec<DistrictSummary>>, AppError> {
        self.fetch(&self.config.districts_url()).await
    }

    async fn current(&self, district_code: &str) -> Result<ApiEnvelope<CurrentSnapshot>, AppError> {
        self.fetch(&self.config.current_url(district_code)).await
    }

    async fn history(
        &self,
        district_code: &str,
    ) -> Result<ApiEnvelope<Vec<HistoricalPoint>>, AppError> {
        self.fetch(&self.config.history_url(district_code)).await
    }

    async fn comparison(
        &self,
        district_code: &str,
    ) -> Result<ApiEnvelope<ComparisonResult>, AppError> {
        self.fetch(&self.config.compare_url(district_code)).await
    }
}

// CONVENIENCE FUNCTIONS
/// Fetches the district catalog using default configuration.
pub async fn fetch_districts() -> Result<ApiEnvelope<Vec<DistrictSummary>>, AppError> {
    let client = DashboardClient::new()?;
    with_timeout(client.districts(), Config::REQUEST_TIMEOUT_MS).await
}

/// Fetches all detail-view resources for a district using default configuration.
pub async fn fetch_district_bundle(district_code: &str) -> Result<DistrictBundle, AppError> {
    let client = DashboardClient::new()?;
    with_timeout(
        load_district_bundle(&client, district_code),
        Config::REQUEST_TIMEOUT_MS,
    )
    .await
}
