//! Normalized response data structures.

use serde::Serialize;
use serde_json::{Map, Value};

/// Fields extracted from one HTTP response node.
///
/// Each field is `None` when its source was absent, empty or of the wrong
/// type; serialization omits `None` fields.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct NormalizedFields {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status_line: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status_code: Option<u16>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub body: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub headers: Option<Map<String, Value>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub body_sha256: Option<String>,
}

impl NormalizedFields {
    /// True when no field survived extraction.
    pub fn is_empty(&self) -> bool {
        self.status_line.is_none()
            && self.status_code.is_none()
            && self.body.is_none()
            && self.title.is_none()
            && self.headers.is_none()
            && self.body_sha256.is_none()
    }

    /// Drops the derived title, for record shapes that carry raw fields only.
    pub fn without_title(mut self) -> Self {
        self.title = None;
        self
    }
}
