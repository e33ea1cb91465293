//! Open-proxy (CONNECT then GET) record assembly.

use log::debug;
use serde_json::Value;

use super::types::{OutputRecord, Outcome, ProxyRecord};
use super::is_connection_error;
use crate::error_handling::SkipReason;
use crate::resolve::Resolved;
use crate::response::{normalize_response, NormalizedFields};
use crate::tls::CertificateSet;

/// Builds the two-phase proxy record for one raw probe record.
///
/// `connect` comes from `data.http.connect_response` and `get` from
/// `data.http.response`; each phase is present only if at least one of its
/// fields was extractable. A GET status code of `0` is dropped; the CONNECT
/// phase keeps any valid code. Proxy probes carry no TLS state, so the
/// certificate set is always empty.
pub fn assemble_proxy(record: &Value) -> Outcome {
    let root = Resolved::new(record);
    if is_connection_error(root) {
        debug!("Skipping proxy record: connection error");
        return Outcome::Skip(SkipReason::ConnectionError);
    }

    let http = root.get("data").get("http");
    let out = ProxyRecord {
        connect: phase(normalize_response(http.get("connect_response"))),
        get: phase(get_fields(http.get("response"))),
    };

    Outcome::from_record(OutputRecord::Proxy(out), CertificateSet::new())
}

fn get_fields(response: Resolved<'_>) -> NormalizedFields {
    let mut fields = normalize_response(response);
    fields.status_code = fields.status_code.filter(|&code| code != 0);
    fields
}

fn phase(fields: NormalizedFields) -> Option<NormalizedFields> {
    let fields = fields.without_title();
    (!fields.is_empty()).then_some(fields)
}
