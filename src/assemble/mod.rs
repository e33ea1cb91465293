//! Record assembly.
//!
//! Combines TLS extraction and response normalization into an output record,
//! applying the drop-empty policy: a record with no populated key becomes a
//! skip, never an empty record.
//!
//! Two record shapes exist:
//! - [`HttpRecord`]: flat `tls`/`tls_initial` plus response fields
//! - [`ProxyRecord`]: separate `connect` and `get` phases, no TLS

mod generic;
mod proxy;
mod types;

pub use generic::assemble_http;
pub use proxy::assemble_proxy;
pub use types::{HttpRecord, OutputRecord, Outcome, ProxyRecord, TransformOutput};

use crate::config::CONNECT_ERROR_COMPONENT;
use crate::resolve::Resolved;

/// True when the probe reports failing in the connect phase.
pub(crate) fn is_connection_error(root: Resolved<'_>) -> bool {
    root.get("error_component").as_str() == Some(CONNECT_ERROR_COMPONENT)
}
