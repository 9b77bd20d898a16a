pub mod http_client;
pub mod swapi;

// Re-export commonly used types
pub use http_client::SwapiHttpClient;
pub use swapi::{Film, Homeworld, Person, PersonInfoMapper};
