//! Handler combinators

pub mod level_filter;

pub use level_filter::{LevelFilter, LEVEL_ENV_VAR};

// Re-export the trait so combinators and handlers are importable together
pub use crate::core::LogHandler;
