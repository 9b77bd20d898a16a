pub mod modules;
pub mod shared;

use modules::people::{PersonInfo, PersonInfoService, SwapiConfig, SwapiHttpClient};
use shared::AppResult;
use std::sync::Arc;

/// Build the production service from a configuration
pub fn build_service(config: SwapiConfig) -> AppResult<PersonInfoService> {
    let client = SwapiHttpClient::from_config(&config)?;
    Ok(PersonInfoService::new(Arc::new(client), config))
}

/// Aggregate the configured person against the live API
pub async fn fetch_aggregate(config: SwapiConfig) -> AppResult<PersonInfo> {
    build_service(config)?.fetch_aggregate().await
}
