// Shared kernel: cross-cutting errors and utilities

pub mod errors;
pub mod utils;

pub use errors::{AppError, AppResult};
