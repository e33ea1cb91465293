//! TLS extraction across the final response and its redirect chain.

use log::{debug, trace};

use super::certs::CertificateSet;
use super::handshake::{HandshakeParser, HandshakeSummary, ParsedHandshake};
use crate::resolve::Resolved;

/// TLS state of one probe record.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TlsExtraction {
    /// Handshake of the final response.
    pub tls: Option<HandshakeSummary>,
    /// Handshake of the first hop, or of the final response when there was no redirect.
    pub tls_initial: Option<HandshakeSummary>,
    /// Certificates from every handshake that parsed, deduplicated by `raw`.
    pub certificates: CertificateSet,
    /// Handshakes that were present but failed to parse.
    pub failed_handshakes: usize,
}

/// Extracts `tls`, `tls_initial` and the certificate union from an HTTP probe node.
///
/// `http` is the node holding `response` and `redirect_response_chain`
/// (`data.http` in a raw record).
///
/// - The final response's handshake becomes `tls`.
/// - With no redirect chain, `tls_initial` is a copy of `tls`.
/// - With a chain, only the first hop's handshake can become `tls_initial`,
///   but certificates are collected from every hop that parses.
/// - A handshake that fails to parse contributes nothing; it never aborts the
///   rest of the record or discards certificates already collected.
///
/// A record with no TLS anywhere yields `TlsExtraction::default()`.
pub fn extract_tls<P>(http: Resolved<'_>, parser: &P) -> TlsExtraction
where
    P: HandshakeParser + ?Sized,
{
    let mut out = TlsExtraction::default();

    let final_handshake = http.get("response").get("request").get("tls_handshake");
    if let Some(parsed) = parse_node(final_handshake, parser, "final response", &mut out) {
        out.certificates.extend(parsed.certificates);
        out.tls = Some(parsed.summary);
    }

    let chain = http.get("redirect_response_chain");
    if chain.as_array().map_or(true, Vec::is_empty) {
        out.tls_initial = out.tls.clone();
        return out;
    }

    for (idx, hop) in chain.items().enumerate() {
        let handshake = hop.get("request").get("tls_handshake");
        let label = format!("redirect hop {idx}");
        if let Some(parsed) = parse_node(handshake, parser, &label, &mut out) {
            out.certificates.extend(parsed.certificates);
            if idx == 0 {
                out.tls_initial = Some(parsed.summary);
            }
        }
    }

    trace!(
        "Collected {} unique certificate(s) across {} handshake(s) ({} failed)",
        out.certificates.len(),
        chain.as_array().map_or(0, Vec::len) + 1,
        out.failed_handshakes
    );

    out
}

fn parse_node<P>(
    node: Resolved<'_>,
    parser: &P,
    label: &str,
    out: &mut TlsExtraction,
) -> Option<ParsedHandshake>
where
    P: HandshakeParser + ?Sized,
{
    let handshake = node.value()?;
    match parser.parse(handshake) {
        Ok(parsed) => Some(parsed),
        Err(e) => {
            debug!("Ignoring TLS handshake on {label}: {e}");
            out.failed_handshakes += 1;
            None
        }
    }
}
