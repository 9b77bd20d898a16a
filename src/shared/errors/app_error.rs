use serde::Serialize;
use thiserror::Error;

#[derive(Error, Debug, Clone, Serialize)]
#[serde(tag = "type", content = "message")]
pub enum AppError {
    #[error("Transport error: {0}")]
    TransportError(String),

    #[error("Decode error: {0}")]
    DecodeError(String),

    #[error("Timed out: {0}")]
    Timeout(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),
}

impl AppError {
    /// True for failures of the network call itself, including non-success statuses.
    pub fn is_transport(&self) -> bool {
        matches!(self, AppError::TransportError(_))
    }

    pub fn is_decode(&self) -> bool {
        matches!(self, AppError::DecodeError(_))
    }

    /// Prefix the message with `context`, keeping the variant
    pub fn with_context(self, context: &str) -> Self {
        match self {
            AppError::TransportError(msg) => {
                AppError::TransportError(format!("{}: {}", context, msg))
            }
            AppError::DecodeError(msg) => AppError::DecodeError(format!("{}: {}", context, msg)),
            AppError::Timeout(msg) => AppError::Timeout(format!("{}: {}", context, msg)),
            AppError::ConfigError(msg) => AppError::ConfigError(format!("{}: {}", context, msg)),
        }
    }
}

impl From<reqwest::Error> for AppError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            AppError::TransportError("Request timeout".to_string())
        } else if err.is_connect() {
            AppError::TransportError(format!("Failed to connect to SWAPI: {}", err))
        } else if err.is_decode() {
            AppError::DecodeError(err.to_string())
        } else if let Some(status) = err.status() {
            AppError::TransportError(format!("HTTP {}: {}", status, err))
        } else {
            AppError::TransportError(err.to_string())
        }
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::DecodeError(err.to_string())
    }
}

impl From<std::num::ParseIntError> for AppError {
    fn from(err: std::num::ParseIntError) -> Self {
        AppError::ConfigError(format!("Invalid number: {}", err))
    }
}

// Result type alias for convenience
pub type AppResult<T> = Result<T, AppError>;
