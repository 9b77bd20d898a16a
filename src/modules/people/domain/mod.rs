pub mod entities;
pub mod value_objects;

// Re-exports for easy access
pub use entities::{FilmSummary, PersonInfo, SwapiConfig};
pub use value_objects::{ExecutionStyle, Gender};
