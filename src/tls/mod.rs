//! TLS handshake extraction and certificate deduplication.
//!
//! This module turns the handshakes embedded in a probe record into:
//! - `tls`: the summary of the final response's handshake
//! - `tls_initial`: the summary of the first hop's handshake
//! - a certificate union over every handshake in the record
//!
//! Handshake decoding sits behind the [`HandshakeParser`] trait; a parser for the
//! probe's JSON handshake layout is provided as [`ProbeHandshakeParser`].

mod certs;
mod extract;
mod handshake;

#[cfg(test)]
mod tests;

pub use certs::{Certificate, CertificateSet};
pub use extract::{extract_tls, TlsExtraction};
pub use handshake::{
    CertificateRef, CipherSuite, HandshakeParser, HandshakeSummary, ParsedHandshake,
    ProbeHandshakeParser,
};
