use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::modules::people::domain::value_objects::Gender;

/// Flat view of a person with the homeworld resolved to its name and the
/// films reduced to title, director and release date.
///
/// `films` keeps the order of the film references on the source person.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersonInfo {
    pub name: String,
    pub height: String,
    pub gender: Gender,
    pub homeworld: String,
    pub films: Vec<FilmSummary>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilmSummary {
    pub title: String,
    pub director: String,
    /// Serialized as `YYYY-MM-DD`
    pub release_date: NaiveDate,
}

impl PersonInfo {
    /// Height in centimeters, when the upstream value is numeric
    pub fn height_cm(&self) -> Option<u32> {
        self.height.trim().parse().ok()
    }

    pub fn film_titles(&self) -> Vec<&str> {
        self.films.iter().map(|film| film.title.as_str()).collect()
    }
}
