//! RapidAPI-hosted ExerciseDB catalog.
//!
//! One blocking GET per search with the two RapidAPI headers. Non-success
//! statuses are reported with the provider's `message` field when the body
//! carries one.

use std::time::Duration;

use reqwest::Url;
use serde::Deserialize;

use super::provider::{CatalogError, ExerciseCatalog};
use super::ExerciseQuery;
use crate::config::CatalogConfig;
use crate::domain::Exercise;

pub const API_KEY_HEADER: &str = "X-RapidAPI-Key";
pub const API_HOST_HEADER: &str = "X-RapidAPI-Host";

/// Error body shape used by the provider.
#[derive(Debug, Deserialize)]
struct ProviderError {
    message: Option<String>,
}

/// ExerciseDB over RapidAPI.
pub struct RapidApiCatalog {
    client: reqwest::blocking::Client,
    endpoint: Url,
    host: String,
    api_key: String,
}

impl RapidApiCatalog {
    pub fn new(config: &CatalogConfig) -> Result<Self, CatalogError> {
        let endpoint = endpoint_url(&config.base_url, &config.path)?;
        let client = reqwest::blocking::Client::builder()
            .timeout(config.timeout_secs.map(Duration::from_secs))
            .build()
            .map_err(|e| CatalogError::Network(e.to_string()))?;

        Ok(Self {
            client,
            endpoint,
            host: config.host.clone(),
            api_key: config.api_key.clone(),
        })
    }

    /// Full request URL for a query. No `?` is appended when every filter is empty.
    pub fn request_url(&self, query: &ExerciseQuery) -> Url {
        let mut url = self.endpoint.clone();
        let params = query.params();
        if !params.is_empty() {
            url.query_pairs_mut().extend_pairs(params);
        }
        url
    }
}

impl ExerciseCatalog for RapidApiCatalog {
    fn name(&self) -> &str {
        "exercisedb"
    }

    fn search(&self, query: &ExerciseQuery) -> Result<Vec<Exercise>, CatalogError> {
        if self.api_key.is_empty() {
            return Err(CatalogError::MissingApiKey);
        }

        let url = self.request_url(query);
        tracing::debug!(%url, "catalog request");

        let resp = self
            .client
            .get(url)
            .header(API_KEY_HEADER, &self.api_key)
            .header(API_HOST_HEADER, &self.host)
            .send()
            .map_err(|e| CatalogError::Network(e.to_string()))?;

        let status = resp.status();
        let body = resp
            .text()
            .map_err(|e| CatalogError::Network(e.to_string()))?;

        if !status.is_success() {
            let reason = status.canonical_reason().unwrap_or("request failed");
            return Err(http_error(status.as_u16(), reason, &body));
        }

        let records: Vec<Exercise> = serde_json::from_str(&body)
            .map_err(|e| CatalogError::Decode(e.to_string()))?;
        tracing::debug!(count = records.len(), "catalog response");
        Ok(records)
    }
}

fn endpoint_url(base_url: &str, path: &str) -> Result<Url, CatalogError> {
    let joined = format!(
        "{}/{}",
        base_url.trim_end_matches('/'),
        path.trim_start_matches('/')
    );
    Url::parse(&joined).map_err(|e| CatalogError::InvalidUrl(format!("{joined}: {e}")))
}

/// Build the error for a non-success response, preferring the provider's message.
fn http_error(status: u16, reason: &str, body: &str) -> CatalogError {
    let message = serde_json::from_str::<ProviderError>(body)
        .ok()
        .and_then(|e| e.message)
        .filter(|m| !m.trim().is_empty())
        .unwrap_or_else(|| reason.to_string());
    CatalogError::Http { status, message }
}
