//! Header canonicalization.
//!
//! The probe reports headers as `name -> [observed values]`, plus a synthetic
//! `unknown` bucket holding `{ "key": ..., "value": [...] }` entries for headers it
//! could not classify. Canonical form keeps a single value per header.

use serde_json::{Map, Value};

use crate::config::{UNKNOWN_HEADERS_KEY, VOLATILE_HEADERS};

/// Builds the canonical header map from the probe's header map.
///
/// - `set_cookie` and `date` are dropped.
/// - Every other header keeps only its first observed value; a header with an
///   empty value list is dropped.
/// - Each `unknown` entry has its value list collapsed to the first element;
///   entries with an empty or missing value list are dropped, and so is the
///   `unknown` bucket itself when nothing survives.
/// - Values that are not lists (already collapsed) are kept as they are;
///   `null` values are dropped.
///
/// The input is never modified; the result is a fresh map.
pub fn canonicalize_headers(headers: &Map<String, Value>) -> Map<String, Value> {
    let mut out = Map::new();

    for (name, value) in headers {
        if VOLATILE_HEADERS.contains(&name.as_str()) {
            continue;
        }

        let canonical = if name == UNKNOWN_HEADERS_KEY {
            collapse_unknown(value)
        } else {
            first_value(value)
        };

        if let Some(canonical) = canonical {
            out.insert(name.clone(), canonical);
        }
    }

    out
}

/// First element of a value list, or the value itself if it is not a list.
// TODO: confirm with index consumers whether multi-valued known headers
// should keep the first value or join them.
fn first_value(value: &Value) -> Option<Value> {
    match value {
        Value::Array(values) => values.first().cloned(),
        Value::Null => None,
        other => Some(other.clone()),
    }
}

fn collapse_unknown(value: &Value) -> Option<Value> {
    let entries = value.as_array()?;

    let collapsed: Vec<Value> = entries
        .iter()
        .filter_map(|entry| {
            let fields = entry.as_object()?;
            let first = first_value(fields.get("value")?)?;
            let mut fields = fields.clone();
            fields.insert("value".to_string(), first);
            Some(Value::Object(fields))
        })
        .collect();

    if collapsed.is_empty() {
        None
    } else {
        Some(Value::Array(collapsed))
    }
}
