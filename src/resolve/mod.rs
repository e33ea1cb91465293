//! Fail-soft access into raw probe records.
//!
//! Probe output is a JSON tree whose shape depends on how far the probe got.
//! [`Resolved`] wraps a position in that tree: every lookup on it returns another
//! `Resolved`, and any missing key, wrong-typed container or out-of-range index
//! yields [`Resolved::Absent`] instead of an error. Callers chain lookups freely
//! and inspect the result once at the end.
//!
//! JSON `null` is treated the same as a missing key.


use serde_json::{Map, Value};

/// One step of a path: a map key or a sequence index.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Segment<'p> {
    Key(&'p str),
    Index(usize),
}

impl<'p> From<&'p str> for Segment<'p> {
    fn from(key: &'p str) -> Self {
        Segment::Key(key)
    }
}

impl From<usize> for Segment<'_> {
    fn from(index: usize) -> Self {
        Segment::Index(index)
    }
}

/// The result of resolving a path: a borrowed value, or an explicit absence.
///
/// `Absent` is distinct from a present-but-empty value such as `""` or `[]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Resolved<'a> {
    Present(&'a Value),
    Absent,
}

impl<'a> From<&'a Value> for Resolved<'a> {
    fn from(value: &'a Value) -> Self {
        Resolved::new(value)
    }
}

impl<'a> From<Option<&'a Value>> for Resolved<'a> {
    fn from(value: Option<&'a Value>) -> Self {
        value.map_or(Resolved::Absent, Resolved::new)
    }
}

impl<'a> Resolved<'a> {
    /// Starts a resolution at `value`. A `null` root is already absent.
    pub fn new(value: &'a Value) -> Self {
        if value.is_null() {
            Resolved::Absent
        } else {
            Resolved::Present(value)
        }
    }

    /// Looks up `key` if this is a map.
    pub fn get(self, key: &str) -> Resolved<'a> {
        match self {
            Resolved::Present(Value::Object(map)) => map.get(key).into(),
            _ => Resolved::Absent,
        }
    }

    /// Looks up `index` if this is a sequence.
    pub fn at(self, index: usize) -> Resolved<'a> {
        match self {
            Resolved::Present(Value::Array(items)) => items.get(index).into(),
            _ => Resolved::Absent,
        }
    }

    /// Applies one path segment.
    pub fn step(self, segment: Segment<'_>) -> Resolved<'a> {
        match segment {
            Segment::Key(key) => self.get(key),
            Segment::Index(index) => self.at(index),
        }
    }

    pub fn is_present(&self) -> bool {
        matches!(self, Resolved::Present(_))
    }

    pub fn is_absent(&self) -> bool {
        matches!(self, Resolved::Absent)
    }

    pub fn value(self) -> Option<&'a Value> {
        match self {
            Resolved::Present(value) => Some(value),
            Resolved::Absent => None,
        }
    }

    pub fn as_str(self) -> Option<&'a str> {
        self.value().and_then(Value::as_str)
    }

    pub fn as_u64(self) -> Option<u64> {
        self.value().and_then(Value::as_u64)
    }

    pub fn as_bool(self) -> Option<bool> {
        self.value().and_then(Value::as_bool)
    }

    pub fn as_array(self) -> Option<&'a Vec<Value>> {
        self.value().and_then(Value::as_array)
    }

    pub fn as_object(self) -> Option<&'a Map<String, Value>> {
        self.value().and_then(Value::as_object)
    }

    /// Iterates a sequence as resolved nodes; anything else yields nothing.
    ///
    /// Each item is a fresh root, so hops of a redirect chain resolve with the
    /// same rules as the record they came from.
    pub fn items(self) -> impl Iterator<Item = Resolved<'a>> {
        self.as_array()
            .into_iter()
            .flatten()
            .map(Resolved::new)
    }
}

/// Resolves `path` from `record`, stopping at the first step that cannot be taken.
///
/// # Examples
///
/// ```
/// use probe_normalizer::resolve::{resolve, Segment};
/// use serde_json::json;
///
/// let record = json!({"data": {"http": {"redirect_response_chain": [{"status_code": 301}]}}});
/// let code = resolve(
///     &record,
///     &[
///         "data".into(),
///         "http".into(),
///         "redirect_response_chain".into(),
///         Segment::Index(0),
///         "status_code".into(),
///     ],
/// );
/// assert_eq!(code.as_u64(), Some(301));
/// assert!(resolve(&record, &["data".into(), "tls".into()]).is_absent());
/// ```
pub fn resolve<'a>(record: &'a Value, path: &[Segment<'_>]) -> Resolved<'a> {
    path.iter()
        .fold(Resolved::new(record), |node, segment| node.step(*segment))
}

/// Resolves a dotted path such as `data.http.response.status_code`.
///
/// A component made only of ASCII digits indexes into a sequence; on a map it
/// is looked up as a key instead.
pub fn resolve_dotted<'a>(record: &'a Value, path: &str) -> Resolved<'a> {
    path.split('.')
        .filter(|component| !component.is_empty())
        .fold(Resolved::new(record), |node, component| {
            match (node, component.parse::<usize>()) {
                (Resolved::Present(Value::Array(_)), Ok(index)) => node.at(index),
                _ => node.get(component),
            }
        })
}
