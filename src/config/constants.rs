//! Configuration constants.
//!
//! This module defines the constants that shape normalization output: size limits,
//! header names that are stripped or treated specially, and the error-component
//! values that short-circuit a record.

// Title extraction
/// Maximum title length in characters.
/// Titles longer than this are hard-truncated before the final trim.
pub const MAX_TITLE_LENGTH: usize = 1024;

// Header canonicalization
/// Header names that are dropped entirely from normalized output.
/// Their values change on every request and carry nothing worth tagging.
pub const VOLATILE_HEADERS: &[&str] = &["set_cookie", "date"];

/// Synthetic header bucket for headers the probe could not classify.
/// Its value is a list of `{ "key": ..., "value": [...] }` entries rather than a value list.
pub const UNKNOWN_HEADERS_KEY: &str = "unknown";

// Probe failure classification
/// `error_component` value reported when the probe never got past the TCP connect.
/// Records carrying it are skipped before any extraction runs.
pub const CONNECT_ERROR_COMPONENT: &str = "connect";

// Batch processing
/// Log progress every N input lines.
pub const LOGGING_INTERVAL: usize = 10_000;

/// Input path that means "read from stdin".
pub const STDIN_PATH: &str = "-";

/// Maximum characters of an invalid input line echoed into the log.
pub const MAX_LINE_PREVIEW_CHARS: usize = 200;
