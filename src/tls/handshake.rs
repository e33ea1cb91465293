//! Handshake summaries and the parser seam.
//!
//! Decoding a TLS handshake is delegated to a [`HandshakeParser`]. The default
//! [`ProbeHandshakeParser`] reads the JSON handshake layout emitted by the probe
//! (`server_hello`, `server_certificates`) and performs no cryptographic
//! validation.

use serde::Serialize;
use serde_json::Value;

use super::certs::Certificate;
use crate::error_handling::HandshakeError;
use crate::resolve::Resolved;

/// Negotiated cipher suite.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CipherSuite {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

/// Reference from a summary to one of its certificates.
///
/// `raw` is the same key the certificate carries in the record's
/// [`CertificateSet`](super::CertificateSet), so every reference resolves.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CertificateRef {
    pub raw: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fingerprint_sha256: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subject_dn: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub issuer_dn: Option<String>,
}

impl From<&Certificate> for CertificateRef {
    fn from(cert: &Certificate) -> Self {
        let parsed = Resolved::from(cert.parsed.as_ref());
        CertificateRef {
            raw: cert.raw.clone(),
            fingerprint_sha256: parsed.get("fingerprint_sha256").as_str().map(str::to_owned),
            subject_dn: parsed.get("subject_dn").as_str().map(str::to_owned),
            issuer_dn: parsed.get("issuer_dn").as_str().map(str::to_owned),
        }
    }
}

/// Normalized view of one TLS session.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct HandshakeSummary {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cipher_suite: Option<CipherSuite>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ocsp_stapling: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub secure_renegotiation: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub certificate: Option<CertificateRef>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub chain: Vec<CertificateRef>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub validation: Option<Value>,
}

/// A parsed handshake: its summary and the certificates it references, leaf first.
#[derive(Debug, Clone, PartialEq)]
pub struct ParsedHandshake {
    pub summary: HandshakeSummary,
    pub certificates: Vec<Certificate>,
}

/// Decodes a raw handshake node.
///
/// Implementations must be pure and must report malformed input as a
/// [`HandshakeError`] rather than panicking; callers drop the failing
/// handshake and carry on with the rest of the record.
pub trait HandshakeParser: Send + Sync {
    fn parse(&self, handshake: &Value) -> Result<ParsedHandshake, HandshakeError>;
}

impl<F> HandshakeParser for F
where
    F: Fn(&Value) -> Result<ParsedHandshake, HandshakeError> + Send + Sync,
{
    fn parse(&self, handshake: &Value) -> Result<ParsedHandshake, HandshakeError> {
        self(handshake)
    }
}

/// Parser for the probe's JSON handshake layout.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProbeHandshakeParser;

impl HandshakeParser for ProbeHandshakeParser {
    fn parse(&self, handshake: &Value) -> Result<ParsedHandshake, HandshakeError> {
        let root = Resolved::new(handshake);
        if root.as_object().is_none() {
            return Err(HandshakeError::NotAMap);
        }

        let hello = root.get("server_hello");
        if hello.as_object().is_none() {
            return Err(HandshakeError::MissingField("server_hello"));
        }

        let cipher = hello.get("cipher_suite");
        let cipher_suite = cipher.is_present().then(|| CipherSuite {
            id: cipher.get("hex").as_str().map(str::to_owned),
            name: cipher.get("name").as_str().map(str::to_owned),
        });

        let server_certs = root.get("server_certificates");
        let mut certificates = Vec::new();

        let leaf = server_certs.get("certificate");
        let certificate = if leaf.is_present() {
            let cert = read_certificate(leaf, "certificate")?;
            let reference = CertificateRef::from(&cert);
            certificates.push(cert);
            Some(reference)
        } else {
            None
        };

        let mut chain = Vec::new();
        for (idx, entry) in server_certs.get("chain").items().enumerate() {
            let cert = read_certificate(entry, &format!("chain[{idx}]"))?;
            chain.push(CertificateRef::from(&cert));
            certificates.push(cert);
        }

        let summary = HandshakeSummary {
            version: hello.get("version").get("name").as_str().map(str::to_owned),
            cipher_suite,
            ocsp_stapling: hello.get("ocsp_stapling").as_bool(),
            secure_renegotiation: hello.get("secure_renegotiation").as_bool(),
            certificate,
            chain,
            validation: server_certs.get("validation").value().cloned(),
        };

        Ok(ParsedHandshake {
            summary,
            certificates,
        })
    }
}

fn read_certificate(node: Resolved<'_>, location: &str) -> Result<Certificate, HandshakeError> {
    let raw = node
        .get("raw")
        .as_str()
        .ok_or_else(|| HandshakeError::MissingRaw(location.to_string()))?;
    let mut cert = Certificate::new(raw);
    cert.parsed = node.get("parsed").value().cloned();
    Ok(cert)
}
