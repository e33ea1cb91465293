//! Generic HTTP record assembly.

use log::debug;
use serde_json::Value;

use super::types::{HttpRecord, OutputRecord, Outcome};
use super::is_connection_error;
use crate::error_handling::SkipReason;
use crate::resolve::Resolved;
use crate::response::normalize_response;
use crate::tls::{extract_tls, HandshakeParser};

/// Builds the flat HTTP record for one raw probe record.
///
/// A connect-phase failure skips immediately. Otherwise TLS state comes from
/// `data.http` (final response plus redirect chain) and the remaining fields
/// from `data.http.response`; a record with no populated key is skipped.
pub fn assemble_http<P>(record: &Value, parser: &P) -> Outcome
where
    P: HandshakeParser + ?Sized,
{
    let root = Resolved::new(record);
    if is_connection_error(root) {
        debug!("Skipping record: connection error");
        return Outcome::Skip(SkipReason::ConnectionError);
    }

    let http = root.get("data").get("http");
    let tls = extract_tls(http, parser);

    let out = HttpRecord {
        tls: tls.tls,
        tls_initial: tls.tls_initial,
        response: normalize_response(http.get("response")),
    };

    let outcome = Outcome::from_record(OutputRecord::Http(out), tls.certificates);
    if outcome.is_skip() {
        debug!("Skipping record: no field survived extraction");
    }
    outcome
}
