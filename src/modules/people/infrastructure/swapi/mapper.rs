use crate::modules::people::domain::{FilmSummary, PersonInfo};
use crate::shared::errors::{AppError, AppResult};

use super::models::{Film, Homeworld, Person};

/// Merges the fetched SWAPI resources into a `PersonInfo`
pub struct PersonInfoMapper;

impl PersonInfoMapper {
    /// `films` must already be in the order of `person.films`; one film per
    /// reference or the merge is rejected.
    pub fn merge(person: Person, homeworld: Homeworld, films: Vec<Film>) -> AppResult<PersonInfo> {
        if person.films.len() != films.len() {
            return Err(AppError::DecodeError(format!(
                "'{}' references {} films but {} were resolved",
                person.name,
                person.films.len(),
                films.len()
            )));
        }

        Ok(PersonInfo {
            name: person.name,
            height: person.height,
            gender: person.gender,
            homeworld: homeworld.name,
            films: films.into_iter().map(Self::film_summary).collect(),
        })
    }

    pub fn film_summary(film: Film) -> FilmSummary {
        FilmSummary {
            title: film.title,
            director: film.director,
            release_date: film.release_date,
        }
    }
}
