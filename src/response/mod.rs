//! HTTP response normalization.
//!
//! This module extracts status, body, digest, headers and title from a probe
//! response node and canonicalizes them into [`NormalizedFields`].

mod extract;
mod headers;
mod html;
mod types;

pub use extract::normalize_response;
pub use headers::canonicalize_headers;
pub use html::extract_title;
pub use types::NormalizedFields;
