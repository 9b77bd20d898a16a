use chrono::NaiveDate;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::modules::people::domain::Gender;
use crate::shared::errors::{AppError, AppResult};

/// `GET /people/{id}/`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Person {
    pub name: String,
    pub height: String,
    pub gender: Gender,
    /// URL of the person's planet
    pub homeworld: String,
    /// Film URLs, in the order SWAPI lists them
    pub films: Vec<String>,
}

/// `GET /planets/{id}/`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Homeworld {
    pub name: String,
}

/// `GET /films/{id}/`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Film {
    pub title: String,
    pub director: String,
    pub release_date: NaiveDate,
}

/// Decode a fetched JSON value into a SWAPI resource
pub fn decode<T: DeserializeOwned>(value: Value, url: &str) -> AppResult<T> {
    serde_json::from_value(value).map_err(|e| {
        AppError::from(e).with_context(&format!(
            "Failed to decode {} from {}",
            std::any::type_name::<T>().rsplit("::").next().unwrap_or("resource"),
            url
        ))
    })
}
