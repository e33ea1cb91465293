//! Named transforms.
//!
//! A transform maps one raw probe record to an [`Outcome`]. Transforms hold no
//! per-record state, so a single instance can be shared across threads and
//! called concurrently.
//!
//! | Name             | Record shape   | TLS |
//! |------------------|----------------|-----|
//! | `http/generic`   | [`HttpRecord`](crate::assemble::HttpRecord)  | yes |
//! | `http/www`       | [`HttpRecord`](crate::assemble::HttpRecord)  | yes |
//! | `http/openproxy` | [`ProxyRecord`](crate::assemble::ProxyRecord) | no  |


use serde_json::Value;
use strum_macros::{Display, EnumIter, EnumString, IntoStaticStr};

use crate::assemble::{assemble_http, assemble_proxy, Outcome};
use crate::tls::{HandshakeParser, ProbeHandshakeParser};

/// Identifies a transform by its canonical name.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter, EnumString, IntoStaticStr,
)]
pub enum TransformKind {
    #[strum(serialize = "http/generic")]
    HttpGeneric,
    #[strum(serialize = "http/www")]
    HttpWww,
    #[strum(serialize = "http/openproxy")]
    OpenProxy,
}

impl TransformKind {
    pub fn name(&self) -> &'static str {
        (*self).into()
    }

    /// Protocol tag written on records from this transform.
    pub fn protocol(&self) -> &'static str {
        match self {
            TransformKind::HttpGeneric | TransformKind::OpenProxy => "http",
            TransformKind::HttpWww => "http_www",
        }
    }

    /// Subprotocol tag written on records from this transform.
    pub fn subprotocol(&self) -> &'static str {
        match self {
            TransformKind::HttpGeneric | TransformKind::HttpWww => "get",
            TransformKind::OpenProxy => "open_proxy",
        }
    }

    /// Builds the transform with the default handshake parser.
    pub fn build(self) -> Box<dyn Transform> {
        match self {
            TransformKind::HttpGeneric => Box::new(HttpTransform::new()),
            TransformKind::HttpWww => Box::new(HttpTransform::www()),
            TransformKind::OpenProxy => Box::new(OpenProxyTransform),
        }
    }
}

/// A pure, per-record normalization.
pub trait Transform: Send + Sync {
    fn kind(&self) -> TransformKind;

    fn transform(&self, record: &Value) -> Outcome;

    fn name(&self) -> &'static str {
        self.kind().name()
    }
}

/// The generic HTTP transform (`http/generic`, `http/www`).
#[derive(Debug, Clone)]
pub struct HttpTransform<P = ProbeHandshakeParser> {
    kind: TransformKind,
    parser: P,
}

impl HttpTransform {
    pub fn new() -> Self {
        Self::with_parser(ProbeHandshakeParser)
    }

    pub fn www() -> Self {
        HttpTransform {
            kind: TransformKind::HttpWww,
            parser: ProbeHandshakeParser,
        }
    }
}

impl Default for HttpTransform {
    fn default() -> Self {
        Self::new()
    }
}

impl<P: HandshakeParser> HttpTransform<P> {
    /// `http/generic` with a caller-supplied handshake parser.
    pub fn with_parser(parser: P) -> Self {
        HttpTransform {
            kind: TransformKind::HttpGeneric,
            parser,
        }
    }
}

impl<P: HandshakeParser> Transform for HttpTransform<P> {
    fn kind(&self) -> TransformKind {
        self.kind
    }

    fn transform(&self, record: &Value) -> Outcome {
        assemble_http(record, &self.parser).tagged(self.kind.protocol(), self.kind.subprotocol())
    }
}

/// The open-proxy transform (`http/openproxy`).
#[derive(Debug, Clone, Copy, Default)]
pub struct OpenProxyTransform;

impl Transform for OpenProxyTransform {
    fn kind(&self) -> TransformKind {
        TransformKind::OpenProxy
    }

    fn transform(&self, record: &Value) -> Outcome {
        let kind = self.kind();
        assemble_proxy(record).tagged(kind.protocol(), kind.subprotocol())
    }
}

/// Applies `http/generic` with the default handshake parser.
///
/// # Examples
///
/// ```
/// use probe_normalizer::{transform, Outcome, SkipReason};
/// use serde_json::json;
///
/// let failed = json!({"error_component": "connect"});
/// assert_eq!(transform(&failed), Outcome::Skip(SkipReason::ConnectionError));
///
/// let ok = json!({"data": {"http": {"response": {"status_code": 200}}}});
/// assert!(!transform(&ok).is_skip());
/// ```
pub fn transform(record: &Value) -> Outcome {
    HttpTransform::new().transform(record)
}
