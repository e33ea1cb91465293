//! Output record types.

use serde::Serialize;

use crate::error_handling::SkipReason;
use crate::response::NormalizedFields;
use crate::tls::{CertificateSet, HandshakeSummary};

/// Flat record produced by the generic HTTP transforms.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct HttpRecord {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tls: Option<HandshakeSummary>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tls_initial: Option<HandshakeSummary>,
    #[serde(flatten)]
    pub response: NormalizedFields,
}

impl HttpRecord {
    pub fn is_empty(&self) -> bool {
        self.tls.is_none() && self.tls_initial.is_none() && self.response.is_empty()
    }
}

/// Two-phase record produced by the open-proxy transform.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ProxyRecord {
    /// Response to the CONNECT request.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub connect: Option<NormalizedFields>,
    /// Response to the GET sent through the proxy.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub get: Option<NormalizedFields>,
}

impl ProxyRecord {
    pub fn is_empty(&self) -> bool {
        self.connect.is_none() && self.get.is_none()
    }
}

/// A normalized record, in the shape of the transform that built it.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum OutputRecord {
    Http(HttpRecord),
    Proxy(ProxyRecord),
}

impl OutputRecord {
    pub fn is_empty(&self) -> bool {
        match self {
            OutputRecord::Http(record) => record.is_empty(),
            OutputRecord::Proxy(record) => record.is_empty(),
        }
    }
}

/// A record ready for the sink, with the certificates found while building it.
///
/// `protocol` and `subprotocol` name the scan the record came from. The
/// assemblers leave them unset; a named transform fills them in.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TransformOutput {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub protocol: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subprotocol: Option<&'static str>,
    #[serde(rename = "transformed")]
    pub record: OutputRecord,
    #[serde(skip_serializing_if = "CertificateSet::is_empty")]
    pub certificates: CertificateSet,
}

/// Result of transforming one raw record.
#[derive(Debug, Clone, PartialEq)]
#[must_use]
pub enum Outcome {
    /// A non-empty record to emit.
    Emit(TransformOutput),
    /// Nothing to emit; the record was processed and carried no usable data.
    Skip(SkipReason),
}

impl Outcome {
    /// Wraps `record`, or skips with `EmptyOutput` if it carries no keys.
    pub fn from_record(record: OutputRecord, certificates: CertificateSet) -> Self {
        if record.is_empty() {
            Outcome::Skip(SkipReason::EmptyOutput)
        } else {
            Outcome::Emit(TransformOutput {
                protocol: None,
                subprotocol: None,
                record,
                certificates,
            })
        }
    }

    /// Stamps an emitted record with its scan tags. Skips pass through.
    pub fn tagged(self, protocol: &'static str, subprotocol: &'static str) -> Self {
        match self {
            Outcome::Emit(output) => Outcome::Emit(TransformOutput {
                protocol: Some(protocol),
                subprotocol: Some(subprotocol),
                ..output
            }),
            skip => skip,
        }
    }

    pub fn is_skip(&self) -> bool {
        matches!(self, Outcome::Skip(_))
    }

    pub fn skip_reason(&self) -> Option<SkipReason> {
        match self {
            Outcome::Skip(reason) => Some(*reason),
            Outcome::Emit(_) => None,
        }
    }

    pub fn output(&self) -> Option<&TransformOutput> {
        match self {
            Outcome::Emit(output) => Some(output),
            Outcome::Skip(_) => None,
        }
    }

    pub fn into_output(self) -> Option<TransformOutput> {
        match self {
            Outcome::Emit(output) => Some(output),
            Outcome::Skip(_) => None,
        }
    }
}
