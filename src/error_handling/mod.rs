//! Error handling and processing statistics.
//!
//! This module provides:
//! - Typed errors for the crate's edges (handshake parsing, batch input, logger setup)
//! - Skip reasons, the expected "nothing to emit" outcomes of a transform
//! - Processing statistics tracking for batch runs

mod stats;
mod types;

// Re-export public API
pub use stats::ProcessingStats;
pub use types::{HandshakeError, InitializationError, InputError, SkipReason};
