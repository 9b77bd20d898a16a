pub mod person_info;
pub mod swapi_config;

pub use person_info::{FilmSummary, PersonInfo};
pub use swapi_config::SwapiConfig;
