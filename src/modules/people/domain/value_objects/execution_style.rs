use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::shared::errors::AppError;

/// Concurrency idiom used to run an aggregation.
///
/// Every style issues the same requests and yields the same `PersonInfo`;
/// only the way the futures are composed differs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExecutionStyle {
    /// Future combinators (`and_then`, `try_join`, `map_ok`)
    Chained,
    /// `async`/`await` with `try_join!` and an index-tagged fan-out
    #[default]
    Sequential,
    /// `futures::stream` composition with `buffer_unordered`
    Stream,
}

impl ExecutionStyle {
    pub fn all() -> [ExecutionStyle; 3] {
        [
            ExecutionStyle::Chained,
            ExecutionStyle::Sequential,
            ExecutionStyle::Stream,
        ]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ExecutionStyle::Chained => "chained",
            ExecutionStyle::Sequential => "sequential",
            ExecutionStyle::Stream => "stream",
        }
    }
}

impl fmt::Display for ExecutionStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ExecutionStyle {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "chained" | "promise" => Ok(ExecutionStyle::Chained),
            "sequential" | "async" => Ok(ExecutionStyle::Sequential),
            "stream" | "reactive" => Ok(ExecutionStyle::Stream),
            other => Err(AppError::ConfigError(format!(
                "Unknown execution style '{}'. Must be one of: chained, sequential, stream",
                other
            ))),
        }
    }
}
