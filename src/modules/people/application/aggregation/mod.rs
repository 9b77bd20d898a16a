//! Person aggregation in three concurrency idioms.
//!
//! Each style fetches the person, then the homeworld and every film without
//! waiting on one another, and merges the results. Films are correlated with
//! their reference index, never with arrival order. The first failure aborts
//! the whole aggregation and drops the fetches still in flight.

pub mod chained;
pub mod sequential;
pub mod streaming;

use serde::de::DeserializeOwned;

use crate::modules::people::infrastructure::swapi::decode;
use crate::modules::people::traits::JsonFetcher;
use crate::shared::errors::AppResult;

/// Fetch `url` and decode it into a SWAPI resource
pub(crate) async fn fetch_resource<T: DeserializeOwned>(
    fetcher: &dyn JsonFetcher,
    url: &str,
) -> AppResult<T> {
    let value = fetcher.fetch_json(url).await?;
    decode(value, url)
}
