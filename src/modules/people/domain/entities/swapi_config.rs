use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::modules::people::domain::value_objects::ExecutionStyle;
use crate::shared::errors::{AppError, AppResult};

pub const DEFAULT_BASE_URL: &str = "https://swapi.dev/api";
/// Luke Skywalker
pub const DEFAULT_PERSON_ID: u32 = 1;

const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;
const DEFAULT_MAX_CONCURRENT_FILMS: usize = 8;
const DEFAULT_USER_AGENT: &str = "holocron/0.1 (+https://swapi.dev)";

/// Runtime configuration for the aggregator
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SwapiConfig {
    pub base_url: String,
    pub person_id: u32,
    pub style: ExecutionStyle,
    /// Deadline for a whole aggregation; `None` waits indefinitely
    pub timeout_seconds: Option<u64>,
    pub request_timeout_seconds: u64,
    pub max_concurrent_films: usize,
    pub user_agent: String,
}

impl Default for SwapiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            person_id: DEFAULT_PERSON_ID,
            style: ExecutionStyle::default(),
            timeout_seconds: None,
            request_timeout_seconds: DEFAULT_REQUEST_TIMEOUT_SECS,
            max_concurrent_films: DEFAULT_MAX_CONCURRENT_FILMS,
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }
}

impl SwapiConfig {
    /// Read the configuration from process environment variables
    pub fn from_env() -> AppResult<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build a configuration from an arbitrary key lookup.
    ///
    /// Unset or blank keys keep their defaults.
    pub fn from_lookup<F>(lookup: F) -> AppResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| {
            lookup(key)
                .map(|value| value.trim().to_string())
                .filter(|value| !value.is_empty())
        };

        let mut config = Self::default();

        if let Some(base_url) = get("SWAPI_BASE_URL") {
            config.base_url = base_url;
        }
        if let Some(id) = get("SWAPI_PERSON_ID") {
            config.person_id = id.parse()?;
        }
        if let Some(style) = get("SWAPI_EXECUTION_STYLE") {
            config.style = style.parse()?;
        }
        if let Some(secs) = get("SWAPI_TIMEOUT_SECS") {
            config.timeout_seconds = Some(secs.parse()?);
        }
        if let Some(secs) = get("SWAPI_REQUEST_TIMEOUT_SECS") {
            config.request_timeout_seconds = secs.parse()?;
        }
        if let Some(width) = get("SWAPI_MAX_CONCURRENT_FILMS") {
            config.max_concurrent_films = width.parse()?;
        }
        if let Some(user_agent) = get("SWAPI_USER_AGENT") {
            config.user_agent = user_agent;
        }

        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> AppResult<()> {
        if !(self.base_url.starts_with("http://") || self.base_url.starts_with("https://")) {
            return Err(AppError::ConfigError(format!(
                "Base URL must be http(s), got '{}'",
                self.base_url
            )));
        }
        if self.person_id == 0 {
            return Err(AppError::ConfigError(
                "Person ID must be a positive integer".to_string(),
            ));
        }
        if self.timeout_seconds == Some(0) {
            return Err(AppError::ConfigError(
                "Aggregation timeout must be at least one second".to_string(),
            ));
        }
        if self.request_timeout_seconds == 0 {
            return Err(AppError::ConfigError(
                "Request timeout must be at least one second".to_string(),
            ));
        }
        if self.max_concurrent_films == 0 {
            return Err(AppError::ConfigError(
                "Film fan-out width must be at least 1".to_string(),
            ));
        }
        Ok(())
    }

    /// Root locator of the configured person
    pub fn root_url(&self) -> String {
        self.person_url(self.person_id)
    }

    pub fn person_url(&self, person_id: u32) -> String {
        format!("{}/people/{}/", self.base_url.trim_end_matches('/'), person_id)
    }

    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_seconds.map(Duration::from_secs)
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_seconds)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(pairs: &[(&str, &str)]) -> AppResult<SwapiConfig> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        SwapiConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn defaults_point_at_luke_skywalker() {
        let config = config_from(&[]).unwrap();
        assert_eq!(config, SwapiConfig::default());
        assert_eq!(config.root_url(), "https://swapi.dev/api/people/1/");
        assert_eq!(config.timeout(), None);
        assert_eq!(config.style, ExecutionStyle::Sequential);
    }

    #[test]
    fn reads_all_keys() {
        let config = config_from(&[
            ("SWAPI_BASE_URL", "http://localhost:8080/api/"),
            ("SWAPI_PERSON_ID", "4"),
            ("SWAPI_EXECUTION_STYLE", "stream"),
            ("SWAPI_TIMEOUT_SECS", "15"),
            ("SWAPI_REQUEST_TIMEOUT_SECS", "5"),
            ("SWAPI_MAX_CONCURRENT_FILMS", "2"),
            ("SWAPI_USER_AGENT", "tests"),
        ])
        .unwrap();

        assert_eq!(config.root_url(), "http://localhost:8080/api/people/4/");
        assert_eq!(config.style, ExecutionStyle::Stream);
        assert_eq!(config.timeout(), Some(Duration::from_secs(15)));
        assert_eq!(config.request_timeout(), Duration::from_secs(5));
        assert_eq!(config.max_concurrent_films, 2);
        assert_eq!(config.user_agent, "tests");
    }

    #[test]
    fn blank_values_keep_defaults() {
        let config = config_from(&[("SWAPI_PERSON_ID", "  "), ("SWAPI_TIMEOUT_SECS", "")]).unwrap();
        assert_eq!(config.person_id, DEFAULT_PERSON_ID);
        assert_eq!(config.timeout_seconds, None);
    }

    #[test]
    fn rejects_invalid_values() {
        for pairs in [
            [("SWAPI_PERSON_ID", "0")],
            [("SWAPI_PERSON_ID", "luke")],
            [("SWAPI_EXECUTION_STYLE", "threads")],
            [("SWAPI_TIMEOUT_SECS", "0")],
            [("SWAPI_MAX_CONCURRENT_FILMS", "0")],
            [("SWAPI_BASE_URL", "ftp://swapi.dev")],
        ] {
            let err = config_from(&pairs).unwrap_err();
            assert!(matches!(err, AppError::ConfigError(_)), "{:?} -> {:?}", pairs, err);
        }
    }
}
