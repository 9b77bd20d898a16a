pub mod mapper;
pub mod models;

pub use mapper::PersonInfoMapper;
pub use models::{decode, Film, Homeworld, Person};
