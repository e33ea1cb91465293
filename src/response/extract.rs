//! Response field extraction.

use log::trace;

use super::headers::canonicalize_headers;
use super::html::extract_title;
use super::types::NormalizedFields;
use crate::resolve::Resolved;

/// Extracts and normalizes the fields of one HTTP response node.
///
/// Works on any node shaped like a probe response (`data.http.response`,
/// `data.http.connect_response`, a redirect hop). Missing or malformed
/// substructure leaves the corresponding field `None`; this never fails.
///
/// - `status_line`, `body`, `body_sha256`: non-empty strings, passed through.
///   The digest is the probe's own and is never recomputed.
/// - `status_code`: an integer that fits in `u16`.
/// - `title`: derived from `body` (see [`extract_title`]).
/// - `headers`: canonicalized (see [`canonicalize_headers`]); `None` when
///   nothing survives.
pub fn normalize_response(response: Resolved<'_>) -> NormalizedFields {
    if response.is_absent() {
        return NormalizedFields::default();
    }

    let body = non_empty_str(response.get("body"));
    let title = body.as_deref().and_then(extract_title);

    let headers = response
        .get("headers")
        .as_object()
        .map(canonicalize_headers)
        .filter(|headers| !headers.is_empty());

    let fields = NormalizedFields {
        status_line: non_empty_str(response.get("status_line")),
        status_code: response
            .get("status_code")
            .as_u64()
            .and_then(|code| u16::try_from(code).ok()),
        body,
        title,
        headers,
        body_sha256: non_empty_str(response.get("body_sha256")),
    };

    trace!(
        "Normalized response: status={:?}, body={} bytes, {} header(s)",
        fields.status_code,
        fields.body.as_ref().map_or(0, String::len),
        fields.headers.as_ref().map_or(0, |h| h.len())
    );

    fields
}

fn non_empty_str(node: Resolved<'_>) -> Option<String> {
    node.as_str()
        .filter(|s| !s.is_empty())
        .map(str::to_owned)
}
