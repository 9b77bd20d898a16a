use crate::shared::errors::AppResult;
use async_trait::async_trait;
use serde_json::Value;

/// Generic "GET a URL and decode the body as JSON" capability.
///
/// The aggregator only talks to SWAPI through this trait, so tests can swap in
/// scripted responses without a network.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait JsonFetcher: Send + Sync {
    /// Fetch `url` and return the decoded JSON body.
    ///
    /// Fails with `TransportError` on network failure or non-success status,
    /// and with `DecodeError` when the body is not JSON.
    async fn fetch_json(&self, url: &str) -> AppResult<Value>;
}
