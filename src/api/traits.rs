//! Trait abstraction for the storefront API client to enable mocking in tests

use super::error::ApiError;
use crate::state::NewStore;
use async_trait::async_trait;

/// Remote operations used by the store creation workflow
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait StoreApi: Send + Sync {
    /// Query availability of a subdomain label
    async fn check_domain(&self, label: &str) -> Result<bool, ApiError>;

    /// Submit a store creation request
    async fn create_store(&self, store: &NewStore) -> Result<(), ApiError>;
}
