// mod.rs - CLI module

pub mod args;
pub mod config;
pub mod merge;
pub mod validation;

// Re-export main types for convenience
pub use args::{Args, Command};
pub use config::Config;
pub use validation::{validate_check_args, validate_render_args, RenderPlan};
