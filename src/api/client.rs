//! HTTP client for the storefront API
//!
//! Two endpoints: `GET /domains/check/{label}` returning
//! `{ "available": bool }`, and `POST /stores/create` taking the store
//! payload. Error bodies may carry `message` and `errors.domain`; both
//! are folded into [`ApiError::Server`].

use super::error::ApiError;
use super::traits::StoreApi;
use crate::state::NewStore;
use async_trait::async_trait;
use serde::Deserialize;

/// Default storefront API base URL
pub const DEFAULT_API_BASE: &str = "https://interview-task-green.vercel.app/task";

/// Client for the storefront HTTP API
pub struct StoreApiClient {
    http: reqwest::Client,
    base_url: String,
}

impl StoreApiClient {
    /// Create a new client against the given base URL
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }
}

#[derive(Debug, Deserialize)]
struct AvailabilityResponse {
    available: bool,
}

#[derive(Debug, Default, Deserialize)]
struct ErrorBody {
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    errors: Option<FieldErrors>,
}

#[derive(Debug, Default, Deserialize)]
struct FieldErrors {
    #[serde(default)]
    domain: Option<String>,
}

/// Fold a non-2xx response into a tagged server error
async fn error_from_response(response: reqwest::Response) -> ApiError {
    let status = response.status().as_u16();
    let body: ErrorBody = response.json().await.unwrap_or_default();
    ApiError::Server {
        status,
        message: body.message,
        domain: body.errors.and_then(|e| e.domain),
    }
}

#[async_trait]
impl StoreApi for StoreApiClient {
    async fn check_domain(&self, label: &str) -> Result<bool, ApiError> {
        let url = format!("{}/domains/check/{}", self.base_url, label);
        tracing::debug!(%label, "checking domain availability");

        let response = self.http.get(&url).send().await?;
        if !response.status().is_success() {
            return Err(error_from_response(response).await);
        }

        let body: AvailabilityResponse = response.json().await?;
        Ok(body.available)
    }

    async fn create_store(&self, store: &NewStore) -> Result<(), ApiError> {
        let url = format!("{}/stores/create", self.base_url);
        tracing::info!(domain = %store.domain, "creating store");

        let response = self.http.post(&url).json(store).send().await?;
        if !response.status().is_success() {
            return Err(error_from_response(response).await);
        }

        Ok(())
    }
}
