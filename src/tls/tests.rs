//! TLS extraction tests.

use super::*;
use crate::resolve::Resolved;
use serde_json::{json, Value};

fn handshake(version: &str, raws: &[&str]) -> Value {
    let chain: Vec<Value> = raws[1..]
        .iter()
        .map(|raw| json!({"raw": raw, "parsed": {"fingerprint_sha256": format!("fp-{raw}")}}))
        .collect();
    json!({
        "server_hello": {"version": {"name": version}},
        "server_certificates": {
            "certificate": {"raw": raws[0], "parsed": {"fingerprint_sha256": format!("fp-{}", raws[0])}},
            "chain": chain
        }
    })
}

fn hop(tls_handshake: Option<Value>) -> Value {
    match tls_handshake {
        Some(h) => json!({"status_code": 301, "request": {"tls_handshake": h}}),
        None => json!({"status_code": 301, "request": {}}),
    }
}

fn http_node(final_handshake: Option<Value>, chain: Vec<Value>) -> Value {
    let mut request = json!({});
    if let Some(h) = final_handshake {
        request["tls_handshake"] = h;
    }
    json!({
        "response": {"status_code": 200, "request": request},
        "redirect_response_chain": chain
    })
}

fn raws(set: &CertificateSet) -> Vec<&str> {
    set.raw_keys().collect()
}

#[test]
fn test_no_chain_initial_equals_final() {
    let http = http_node(Some(handshake("TLSv1.2", &["LEAF", "CA"])), vec![]);
    let tls = extract_tls(Resolved::new(&http), &ProbeHandshakeParser);

    assert!(tls.tls.is_some());
    assert_eq!(tls.tls_initial, tls.tls);
    assert_eq!(raws(&tls.certificates), vec!["LEAF", "CA"]);
}

#[test]
fn test_missing_chain_behaves_like_empty_chain() {
    let http = json!({
        "response": {"request": {"tls_handshake": handshake("TLSv1.3", &["LEAF"])}}
    });
    let tls = extract_tls(Resolved::new(&http), &ProbeHandshakeParser);
    assert_eq!(tls.tls_initial, tls.tls);
    assert!(tls.tls.is_some());
}

#[test]
fn test_all_hops_certificate_collection() {
    let chain = vec![
        hop(Some(handshake("TLSv1.0", &["HOP1"]))),
        hop(Some(json!({"server_hello": "not a map"}))),
        hop(Some(handshake("TLSv1.1", &["HOP3"]))),
    ];
    let http = http_node(Some(handshake("TLSv1.2", &["FINAL"])), chain);
    let tls = extract_tls(Resolved::new(&http), &ProbeHandshakeParser);

    assert_eq!(raws(&tls.certificates), vec!["FINAL", "HOP1", "HOP3"]);
    assert_eq!(
        tls.tls_initial.as_ref().and_then(|s| s.version.as_deref()),
        Some("TLSv1.0")
    );
    assert_eq!(
        tls.tls.as_ref().and_then(|s| s.version.as_deref()),
        Some("TLSv1.2")
    );
    assert_eq!(tls.failed_handshakes, 1);
}

#[test]
fn test_malformed_first_hop_leaves_initial_absent() {
    let chain = vec![
        hop(Some(json!(["not", "a", "handshake"]))),
        hop(Some(handshake("TLSv1.2", &["HOP2"]))),
    ];
    let http = http_node(Some(handshake("TLSv1.2", &["FINAL"])), chain);
    let tls = extract_tls(Resolved::new(&http), &ProbeHandshakeParser);

    assert!(tls.tls_initial.is_none());
    assert!(tls.tls.is_some());
    assert_eq!(raws(&tls.certificates), vec!["FINAL", "HOP2"]);
}

#[test]
fn test_first_hop_without_handshake_leaves_initial_absent() {
    let chain = vec![hop(None), hop(Some(handshake("TLSv1.2", &["HOP2"])))];
    let http = http_node(Some(handshake("TLSv1.2", &["FINAL"])), chain);
    let tls = extract_tls(Resolved::new(&http), &ProbeHandshakeParser);

    assert!(tls.tls_initial.is_none());
    assert_eq!(tls.failed_handshakes, 0);
    assert_eq!(raws(&tls.certificates), vec!["FINAL", "HOP2"]);
}

#[test]
fn test_plain_http_yields_empty_extraction() {
    let http = http_node(None, vec![]);
    let tls = extract_tls(Resolved::new(&http), &ProbeHandshakeParser);
    assert_eq!(tls, TlsExtraction::default());

    let tls = extract_tls(Resolved::Absent, &ProbeHandshakeParser);
    assert_eq!(tls, TlsExtraction::default());
}

#[test]
fn test_http_to_https_redirect_has_initial_absent() {
    // Plain-HTTP first hop redirecting to an HTTPS final response
    let chain = vec![hop(None)];
    let http = http_node(Some(handshake("TLSv1.3", &["FINAL"])), chain);
    let tls = extract_tls(Resolved::new(&http), &ProbeHandshakeParser);

    assert!(tls.tls.is_some());
    assert!(tls.tls_initial.is_none());
}

#[test]
fn test_duplicate_certificates_across_handshakes_kept_once() {
    let chain = vec![
        hop(Some(handshake("TLSv1.2", &["LEAF-A", "SHARED-CA"]))),
        hop(Some(handshake("TLSv1.2", &["LEAF-B", "SHARED-CA"]))),
    ];
    let http = http_node(Some(handshake("TLSv1.2", &["LEAF-B", "SHARED-CA"])), chain);
    let tls = extract_tls(Resolved::new(&http), &ProbeHandshakeParser);

    assert_eq!(raws(&tls.certificates), vec!["LEAF-B", "SHARED-CA", "LEAF-A"]);
}

#[test]
fn test_malformed_final_handshake_does_not_block_chain() {
    let chain = vec![hop(Some(handshake("TLSv1.2", &["HOP1"])))];
    let http = http_node(Some(json!({"server_certificates": {}})), chain);
    let tls = extract_tls(Resolved::new(&http), &ProbeHandshakeParser);

    assert!(tls.tls.is_none());
    assert!(tls.tls_initial.is_some());
    assert_eq!(raws(&tls.certificates), vec!["HOP1"]);
    assert_eq!(tls.failed_handshakes, 1);
}

#[test]
fn test_non_sequence_chain_is_treated_as_empty() {
    let http = json!({
        "response": {"request": {"tls_handshake": handshake("TLSv1.2", &["LEAF"])}},
        "redirect_response_chain": {"unexpected": "map"}
    });
    let tls = extract_tls(Resolved::new(&http), &ProbeHandshakeParser);
    assert_eq!(tls.tls_initial, tls.tls);
}

#[test]
fn test_custom_parser_is_used() {
    let parser = |_: &Value| -> Result<ParsedHandshake, crate::error_handling::HandshakeError> {
        Ok(ParsedHandshake {
            summary: HandshakeSummary {
                version: Some("custom".to_string()),
                ..Default::default()
            },
            certificates: vec![Certificate::new("X")],
        })
    };
    let http = http_node(Some(json!({})), vec![]);
    let tls = extract_tls(Resolved::new(&http), &parser);
    assert_eq!(
        tls.tls.as_ref().and_then(|s| s.version.as_deref()),
        Some("custom")
    );
    assert_eq!(raws(&tls.certificates), vec!["X"]);
}
