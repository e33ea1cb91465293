//! Certificate records and first-seen deduplication.

use std::collections::HashSet;

use serde::{Serialize, Serializer};
use serde_json::Value;

/// A certificate observed in a handshake.
///
/// `raw` is the canonical encoding as delivered by the probe and is the
/// identity used for deduplication; `parsed` carries whatever decoded
/// attributes the handshake parser attached.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Certificate {
    pub raw: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parsed: Option<Value>,
}

impl Certificate {
    pub fn new(raw: impl Into<String>) -> Self {
        Certificate {
            raw: raw.into(),
            parsed: None,
        }
    }

    pub fn with_parsed(mut self, parsed: Value) -> Self {
        self.parsed = Some(parsed);
        self
    }
}

/// Certificates keyed by `raw`, in first-seen order.
///
/// Inserting a certificate whose `raw` is already present is a no-op, so the
/// first copy's attributes win and no two entries ever share a `raw` value.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CertificateSet {
    entries: Vec<Certificate>,
    seen: HashSet<String>,
}

impl CertificateSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds `cert` unless its `raw` is already present. Returns whether it was added.
    pub fn insert(&mut self, cert: Certificate) -> bool {
        if self.seen.contains(&cert.raw) {
            return false;
        }
        self.seen.insert(cert.raw.clone());
        self.entries.push(cert);
        true
    }

    /// Folds `other` into this set; duplicates from `other` are dropped.
    pub fn union(mut self, other: impl IntoIterator<Item = Certificate>) -> Self {
        self.extend(other);
        self
    }

    pub fn contains(&self, raw: &str) -> bool {
        self.seen.contains(raw)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Certificate> {
        self.entries.iter()
    }

    /// The `raw` keys in insertion order.
    pub fn raw_keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|cert| cert.raw.as_str())
    }

    pub fn into_vec(self) -> Vec<Certificate> {
        self.entries
    }
}

impl Extend<Certificate> for CertificateSet {
    fn extend<I: IntoIterator<Item = Certificate>>(&mut self, iter: I) {
        for cert in iter {
            self.insert(cert);
        }
    }
}

impl FromIterator<Certificate> for CertificateSet {
    fn from_iter<I: IntoIterator<Item = Certificate>>(iter: I) -> Self {
        let mut set = CertificateSet::new();
        set.extend(iter);
        set
    }
}

impl IntoIterator for CertificateSet {
    type Item = Certificate;
    type IntoIter = std::vec::IntoIter<Certificate>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl<'a> IntoIterator for &'a CertificateSet {
    type Item = &'a Certificate;
    type IntoIter = std::slice::Iter<'a, Certificate>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

impl Serialize for CertificateSet {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(&self.entries)
    }
}
