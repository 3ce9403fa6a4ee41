use crate::config::Config;
use crate::models::error::AppError;
use serde::de::DeserializeOwned;

// CATALOG CONFIGURATION
/// Locations of the catalog endpoints.
#[derive(Debug, Clone, PartialEq)]
pub struct CatalogConfig {
    base_url: String,
}

impl CatalogConfig {
    /// Creates a builder for constructing a `CatalogConfig`.
    pub fn builder() -> CatalogConfigBuilder {
        CatalogConfigBuilder::default()
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// `GET {base}/products/categories`
    pub fn categories_url(&self) -> String {
        format!("{}/products/categories", self.base_url)
    }

    /// `GET {base}/products/category/{name}`
    pub fn category_products_url(&self, category: &str) -> String {
        format!("{}/products/category/{category}", self.base_url)
    }
}

impl Default for CatalogConfig {
    fn default() -> Self {
        CatalogConfigBuilder::default().build()
    }
}

// CATALOG CONFIGURATION BUILDER
#[derive(Debug, Default)]
pub struct CatalogConfigBuilder {
    base_url: Option<String>,
}

impl CatalogConfigBuilder {
    /// Sets a custom base URL (primarily for testing).
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    pub fn build(self) -> CatalogConfig {
        let base_url = self
            .base_url
            .unwrap_or_else(|| Config::api_base_url().to_string());

        CatalogConfig {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }
}

// CATALOG CLIENT
/// HTTP client for the product catalog API.
pub struct CatalogClient {
    http: reqwest::Client,
}

impl CatalogClient {
    pub fn new() -> Result<Self, AppError> {
        let http = reqwest::Client::builder()
            .build()
            .map_err(|e| AppError::ConfigError(format!("Failed to create HTTP client: {e}")))?;

        Ok(Self { http })
    }

    /// Executes a single GET and decodes the JSON body. No retries.
    pub async fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T, AppError> {
        let response = self
            .http
            .get(url)
            .send()
            .await
            .map_err(|e| self.classify_error(e))?;

        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "<failed to read error body>".to_string());
            return Err(self.error_for_status(status, &body));
        }

        response
            .json()
            .await
            .map_err(|e| AppError::DataError(format!("Failed to parse response: {e}")))
    }

    /// Converts a reqwest error into an appropriate `AppError`.
    fn classify_error(&self, error: reqwest::Error) -> AppError {
        if error.is_timeout() {
            AppError::Timeout(error.to_string())
        } else if error.is_request() {
            AppError::NetworkError(format!("Request error: {error}"))
        } else {
            AppError::NetworkError(error.to_string())
        }
    }

    fn error_for_status(&self, status: reqwest::StatusCode, body: &str) -> AppError {
        match status.as_u16() {
            404 => AppError::NotFound(format!("Resource not found: {body}")),
            code => AppError::HttpStatus {
                status: code,
                body: body.to_string(),
            },
        }
    }
}

// CONVENIENCE FUNCTIONS
/// Fetches any JSON resource with the default client.
pub async fn fetch_json<T: DeserializeOwned>(url: &str) -> Result<T, AppError> {
    CatalogClient::new()?.get_json(url).await
}
