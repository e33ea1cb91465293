// Shared fixture builders for probe records.
//
// Each integration test file includes this with `mod helpers;`.

#![allow(dead_code)] // Not every test file uses every builder

use serde_json::{json, Value};

/// A handshake in the probe's JSON layout with a leaf and optional chain.
pub fn handshake(version: &str, leaf: &str, chain: &[&str]) -> Value {
    let chain: Vec<Value> = chain
        .iter()
        .map(|raw| json!({"raw": raw, "parsed": {"fingerprint_sha256": format!("sha256-{raw}")}}))
        .collect();
    json!({
        "server_hello": {
            "version": {"name": version},
            "cipher_suite": {"hex": "0x1301", "name": "TLS_AES_128_GCM_SHA256"}
        },
        "server_certificates": {
            "certificate": {"raw": leaf, "parsed": {"fingerprint_sha256": format!("sha256-{leaf}")}},
            "chain": chain
        }
    })
}

/// A redirect hop, optionally carrying a handshake.
pub fn hop(status_code: u16, tls_handshake: Option<Value>) -> Value {
    let mut request = json!({"method": "GET"});
    if let Some(h) = tls_handshake {
        request["tls_handshake"] = h;
    }
    json!({
        "status_code": status_code,
        "status_line": format!("{status_code} Redirect"),
        "request": request
    })
}

/// A full probe record around a final response and redirect chain.
pub fn probe_record(response: Value, chain: Vec<Value>) -> Value {
    json!({
        "ip": "192.0.2.10",
        "timestamp": "2030-01-01T00:00:00Z",
        "data": {"http": {
            "response": response,
            "redirect_response_chain": chain
        }}
    })
}

/// A typical HTML response with headers and an optional handshake.
pub fn html_response(title: &str, tls_handshake: Option<Value>) -> Value {
    let mut request = json!({"method": "GET"});
    if let Some(h) = tls_handshake {
        request["tls_handshake"] = h;
    }
    json!({
        "status_line": "200 OK",
        "status_code": 200,
        "body": format!("<html><head><title>{title}</title></head><body>hi</body></html>"),
        "body_sha256": "c0ffee",
        "headers": {
            "content_type": ["text/html"],
            "server": ["nginx", "nginx/1.25"],
            "set_cookie": ["sid=1"],
            "date": ["Tue, 01 Jan 2030 00:00:00 GMT"],
            "x_empty": []
        },
        "request": request
    })
}
