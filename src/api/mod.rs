//! HTTP client module for the storefront API

mod client;
mod error;
mod traits;

pub use client::{StoreApiClient, DEFAULT_API_BASE};
pub use error::ApiError;
pub use traits::StoreApi;

#[cfg(test)]
pub use traits::MockStoreApi;
