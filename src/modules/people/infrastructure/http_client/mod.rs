pub mod swapi_http_client;

pub use swapi_http_client::SwapiHttpClient;
