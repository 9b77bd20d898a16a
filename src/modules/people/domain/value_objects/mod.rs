pub mod execution_style;
pub mod gender;

pub use execution_style::ExecutionStyle;
pub use gender::Gender;
