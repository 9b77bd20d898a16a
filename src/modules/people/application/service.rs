use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, info, warn};

use super::aggregation::{chained, sequential, streaming};
use crate::modules::people::domain::{ExecutionStyle, PersonInfo, SwapiConfig};
use crate::modules::people::traits::JsonFetcher;
use crate::shared::errors::{AppError, AppResult};
use crate::shared::utils::TimedOperation;

/// Entry point for person aggregation.
///
/// Holds no per-call state: every call owns its intermediate values, so a
/// single service can serve concurrent callers.
pub struct PersonInfoService {
    fetcher: Arc<dyn JsonFetcher>,
    config: SwapiConfig,
}

impl PersonInfoService {
    pub fn new(fetcher: Arc<dyn JsonFetcher>, config: SwapiConfig) -> Self {
        Self { fetcher, config }
    }

    pub fn config(&self) -> &SwapiConfig {
        &self.config
    }

    /// Aggregate the configured person with the configured style
    pub async fn fetch_aggregate(&self) -> AppResult<PersonInfo> {
        self.fetch_with_style(&self.config.root_url(), self.config.style)
            .await
    }

    /// Aggregate an explicit person id with the configured style
    pub async fn fetch_aggregate_for(&self, person_id: u32) -> AppResult<PersonInfo> {
        if person_id == 0 {
            return Err(AppError::ConfigError(
                "Person ID must be a positive integer".to_string(),
            ));
        }
        self.fetch_with_style(&self.config.person_url(person_id), self.config.style)
            .await
    }

    /// Aggregate the person at `root_url`.
    ///
    /// With a configured timeout the whole aggregation is abandoned when the
    /// deadline passes; in-flight requests are dropped and nothing partial is
    /// returned.
    pub async fn fetch_with_style(
        &self,
        root_url: &str,
        style: ExecutionStyle,
    ) -> AppResult<PersonInfo> {
        let timer = TimedOperation::new(&format!("aggregate {} ({})", root_url, style));

        let result = match self.config.timeout() {
            Some(limit) => self.run_with_timeout(root_url, style, limit).await,
            None => self.run(root_url, style).await,
        };

        match &result {
            Ok(info) => {
                timer.finish_with_info(&format!("{} films", info.films.len()));
                info!("Aggregated '{}' with {} style", info.name, style);
            }
            Err(e) => warn!("Aggregation of {} failed: {}", root_url, e),
        }

        result
    }

    async fn run_with_timeout(
        &self,
        root_url: &str,
        style: ExecutionStyle,
        limit: Duration,
    ) -> AppResult<PersonInfo> {
        tokio::time::timeout(limit, self.run(root_url, style))
            .await
            .map_err(|_| {
                AppError::Timeout(format!(
                    "Aggregation of {} exceeded {:?}",
                    root_url, limit
                ))
            })?
    }

    async fn run(&self, root_url: &str, style: ExecutionStyle) -> AppResult<PersonInfo> {
        debug!("Running {} aggregation for {}", style, root_url);
        let fetcher = self.fetcher.as_ref();

        match style {
            ExecutionStyle::Chained => chained::fetch_person_info(fetcher, root_url).await,
            ExecutionStyle::Sequential => sequential::fetch_person_info(fetcher, root_url).await,
            ExecutionStyle::Stream => {
                streaming::fetch_person_info(fetcher, root_url, self.config.max_concurrent_films)
                    .await
            }
        }
    }
}
