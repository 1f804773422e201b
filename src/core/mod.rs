// mod.rs - Core validation logic

pub mod period;
pub mod validator;

// Re-export main types for convenience
pub use period::{is_valid_month, PeriodSelector};
pub use validator::{check_file, is_integer, is_valid_table, validate_table, CheckOptions, CheckReport};
