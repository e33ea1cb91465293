//! Utility functions for batch I/O.
//!
//! This module provides:
//! - A stdout wrapper that tolerates a closed downstream pipe
//! - Log-safe previews of raw input lines

mod pipe;
pub mod sanitize;

pub(crate) use pipe::IgnoreBrokenPipe;
