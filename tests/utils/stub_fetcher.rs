/// Scripted `JsonFetcher` for aggregation tests
///
/// Each URL gets a canned response and an optional delay, which lets tests
/// force a completion order. Calls and completions are recorded in order.
use async_trait::async_trait;
use holocron_lib::modules::people::JsonFetcher;
use holocron_lib::shared::errors::{AppError, AppResult};
use serde_json::Value;
use std::collections::HashMap;
use std::sync::Mutex;
use std::time::Duration;

struct StubResponse {
    result: AppResult<Value>,
    delay: Duration,
}

#[derive(Default)]
pub struct StubFetcher {
    responses: HashMap<String, StubResponse>,
    calls: Mutex<Vec<String>>,
    completions: Mutex<Vec<String>>,
}

impl StubFetcher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_json(self, url: &str, value: Value) -> Self {
        self.with_delayed_json(url, value, Duration::ZERO)
    }

    pub fn with_delayed_json(self, url: &str, value: Value, delay: Duration) -> Self {
        self.with_response(url, Ok(value), delay)
    }

    pub fn with_error(self, url: &str, error: AppError) -> Self {
        self.with_response(url, Err(error), Duration::ZERO)
    }

    pub fn with_delayed_error(self, url: &str, error: AppError, delay: Duration) -> Self {
        self.with_response(url, Err(error), delay)
    }

    fn with_response(mut self, url: &str, result: AppResult<Value>, delay: Duration) -> Self {
        self.responses
            .insert(url.to_string(), StubResponse { result, delay });
        self
    }

    /// URLs in the order they were requested
    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    /// URLs in the order their responses were delivered
    pub fn completions(&self) -> Vec<String> {
        self.completions.lock().unwrap().clone()
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }

    pub fn was_called(&self, url: &str) -> bool {
        self.calls.lock().unwrap().iter().any(|call| call == url)
    }
}

#[async_trait]
impl JsonFetcher for StubFetcher {
    async fn fetch_json(&self, url: &str) -> AppResult<Value> {
        self.calls.lock().unwrap().push(url.to_string());

        let result = match self.responses.get(url) {
            Some(response) => {
                if !response.delay.is_zero() {
                    tokio::time::sleep(response.delay).await;
                }
                response.result.clone()
            }
            None => Err(AppError::TransportError(format!(
                "GET {} returned 404 Not Found",
                url
            ))),
        };

        self.completions.lock().unwrap().push(url.to_string());
        result
    }
}
