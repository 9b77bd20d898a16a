pub mod application;
pub mod domain;
pub mod infrastructure;
pub mod traits;

// Re-exports for easy external access
pub use application::PersonInfoService;
pub use domain::{ExecutionStyle, FilmSummary, Gender, PersonInfo, SwapiConfig};
pub use infrastructure::SwapiHttpClient;
pub use traits::JsonFetcher;
