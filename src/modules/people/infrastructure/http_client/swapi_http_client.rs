//! reqwest-backed `JsonFetcher` for SWAPI.
//!
//! One GET per call. Non-success statuses and network failures surface as
//! `TransportError`, unparseable bodies as `DecodeError`. Nothing is retried.

use crate::modules::people::domain::SwapiConfig;
use crate::modules::people::traits::JsonFetcher;
use crate::shared::errors::{AppError, AppResult};
use crate::shared::utils::{LogContext, TimedOperation};
use async_trait::async_trait;
use reqwest::{Client, Response};
use serde_json::Value;
use std::time::Duration;

const BODY_EXCERPT_CHARS: usize = 200;

pub struct SwapiHttpClient {
    client: Client,
}

impl SwapiHttpClient {
    pub fn new(request_timeout: Duration, user_agent: &str) -> AppResult<Self> {
        let client = Client::builder()
            .timeout(request_timeout)
            .user_agent(user_agent)
            .build()
            .map_err(|e| AppError::from(e).with_context("Failed to create HTTP client"))?;

        Ok(Self { client })
    }

    pub fn from_config(config: &SwapiConfig) -> AppResult<Self> {
        Self::new(config.request_timeout(), &config.user_agent)
    }

    /// Send the GET; non-success statuses become errors via `error_for_status`
    async fn send(&self, url: &str) -> AppResult<Response> {
        self.client
            .get(url)
            .header("Accept", "application/json")
            .send()
            .await
            .and_then(Response::error_for_status)
            .map_err(|e| AppError::from(e).with_context(&format!("GET {}", url)))
    }

    async fn parse_response(&self, url: &str, response: Response) -> AppResult<Value> {
        let response_text = response
            .text()
            .await
            .map_err(|e| AppError::from(e).with_context(&format!("Failed to read response from {}", url)))?;

        serde_json::from_str(&response_text).map_err(|e| {
            AppError::from(e).with_context(&format!(
                "Failed to parse response from {} (response: {})",
                url,
                excerpt(&response_text)
            ))
        })
    }
}

#[async_trait]
impl JsonFetcher for SwapiHttpClient {
    async fn fetch_json(&self, url: &str) -> AppResult<Value> {
        let timer = TimedOperation::new(&format!("GET {}", url));

        let result = match self.send(url).await {
            Ok(response) => self.parse_response(url, response).await,
            Err(e) => Err(e),
        };

        let status = if result.is_ok() { "ok" } else { "failed" };
        LogContext::fetch(url, status, timer.elapsed_ms());
        result
    }
}

fn excerpt(body: &str) -> String {
    if body.chars().count() > BODY_EXCERPT_CHARS {
        format!("{}...", body.chars().take(BODY_EXCERPT_CHARS).collect::<String>())
    } else {
        body.to_string()
    }
}
