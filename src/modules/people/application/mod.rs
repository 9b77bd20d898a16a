pub mod aggregation;
pub mod service;

pub use service::PersonInfoService;
