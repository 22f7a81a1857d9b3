//! Utility modules for configuration, error handling, and display formatting.

pub mod config;
pub mod error;
pub mod format;

// Re-export commonly used error types for convenience
pub use error::{CategoryError, InputError, OutputError};
pub use format::{format_currency, format_date};
