//! Application configuration and constants.
//!
//! This module provides:
//! - Normalization constants (title length, volatile headers, error components)
//! - CLI option types and parsing

mod constants;
mod types;

// Re-export all constants
pub use constants::*;
pub use types::{Config, LogFormat, LogLevel};
