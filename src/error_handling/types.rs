//! Error type definitions.
//!
//! This module defines the error and skip types used throughout the crate.
//! The transform core never fails: malformed input degrades to fewer fields or a
//! [`SkipReason`]. Typed errors exist only at the edges (handshake collaborator,
//! batch input, logger setup).

use log::SetLoggerError;
use strum_macros::EnumIter as EnumIterMacro;
use thiserror::Error;

/// Error types for initialization failures.
#[derive(Error, Debug)]
#[allow(clippy::enum_variant_names)] // All variants end with "Error" by convention
pub enum InitializationError {
    /// Error initializing the logger.
    #[error("Logger initialization error: {0}")]
    LoggerError(#[from] SetLoggerError),
}

/// Failure reported by a [`HandshakeParser`](crate::tls::HandshakeParser).
///
/// Callers catch this per handshake; it never aborts a record.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum HandshakeError {
    /// The handshake node is not a map.
    #[error("handshake is not a map")]
    NotAMap,

    /// A required substructure is missing.
    #[error("handshake is missing `{0}`")]
    MissingField(&'static str),

    /// A certificate entry has no string `raw` encoding.
    #[error("certificate at `{0}` has no raw encoding")]
    MissingRaw(String),
}

/// A batch input line that could not be decoded into a record.
#[derive(Error, Debug)]
pub enum InputError {
    /// The line is not valid JSON.
    #[error("line {line}: invalid JSON: {source}")]
    InvalidJson {
        line: usize,
        #[source]
        source: serde_json::Error,
    },
}

/// Why a record produced no output.
///
/// A skip is an expected outcome ("processed, zero output"), never a failure
/// to retry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIterMacro)]
pub enum SkipReason {
    /// The probe never got past the connect phase.
    ConnectionError,
    /// Every extractable field was absent or empty.
    EmptyOutput,
}

impl std::fmt::Display for SkipReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl SkipReason {
    pub fn as_str(&self) -> &'static str {
        match self {
            SkipReason::ConnectionError => "connection error",
            SkipReason::EmptyOutput => "empty output",
        }
    }
}
