/// SWAPI payload factories
///
/// Payloads mirror the real API shape, including fields the aggregator
/// ignores, so decoding is exercised against realistic bodies.
use serde_json::{json, Value};

pub const BASE: &str = "https://swapi.dev/api";
pub const LUKE_URL: &str = "https://swapi.dev/api/people/1/";
pub const TATOOINE_URL: &str = "https://swapi.dev/api/planets/1/";
pub const NEW_HOPE_URL: &str = "https://swapi.dev/api/films/1/";
pub const EMPIRE_URL: &str = "https://swapi.dev/api/films/2/";
pub const JEDI_URL: &str = "https://swapi.dev/api/films/3/";

pub fn person(name: &str, gender: &str, homeworld: &str, films: &[&str]) -> Value {
    json!({
        "name": name,
        "height": "172",
        "mass": "77",
        "hair_color": "blond",
        "gender": gender,
        "homeworld": homeworld,
        "films": films,
        "species": [],
        "vehicles": [],
        "created": "2014-12-09T13:50:51.644000Z",
        "url": LUKE_URL
    })
}

pub fn luke(films: &[&str]) -> Value {
    person("Luke Skywalker", "male", TATOOINE_URL, films)
}

pub fn planet(name: &str) -> Value {
    json!({
        "name": name,
        "rotation_period": "23",
        "climate": "arid",
        "residents": [LUKE_URL],
        "url": TATOOINE_URL
    })
}

pub fn film(title: &str, director: &str, release_date: &str) -> Value {
    json!({
        "title": title,
        "episode_id": 4,
        "opening_crawl": "It is a period of civil war.",
        "director": director,
        "producer": "Gary Kurtz, Rick McCallum",
        "release_date": release_date,
        "characters": [LUKE_URL],
        "url": NEW_HOPE_URL
    })
}

pub fn new_hope() -> Value {
    film("A New Hope", "George Lucas", "1977-05-25")
}

pub fn empire() -> Value {
    film("The Empire Strikes Back", "Irvin Kershner", "1980-05-21")
}

pub fn jedi() -> Value {
    film("Return of the Jedi", "Richard Marquand", "1983-05-25")
}

/// The exact aggregate expected for Luke with the first two films
pub fn expected_luke_info() -> Value {
    json!({
        "name": "Luke Skywalker",
        "height": "172",
        "gender": "male",
        "homeworld": "Tatooine",
        "films": [
            { "title": "A New Hope", "director": "George Lucas", "release_date": "1977-05-25" },
            { "title": "The Empire Strikes Back", "director": "Irvin Kershner", "release_date": "1980-05-21" }
        ]
    })
}
