//! Parsed sheet entries and their metadata.
//!
//! # Design Decisions
//! - Metadata keeps insertion order; re-inserting a key replaces the value
//!   in place (last value wins, first position kept)
//! - The same ordered map type is used for an entry's metadata and for the
//!   merged result of a query
//! - Backed by an insertion-ordered hash map, so merging stays linear in
//!   the number of merged pairs

use indexmap::IndexMap;
use serde::ser::{Serialize, SerializeMap, Serializer};
use thiserror::Error;

use crate::routing::matcher::PathPattern;

/// Errors from building a [`PatternEntry`].
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PatternError {
    #[error("pattern is empty")]
    Empty,
}

/// Ordered mapping from metadata key to value.
///
/// Equality compares contents, not order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Metadata {
    pairs: IndexMap<String, String>,
}

impl Metadata {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or overwrite `key`. Returns the previous value, if any.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) -> Option<String> {
        self.pairs.insert(key.into(), value.into())
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.pairs.get(key).map(String::as_str)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.pairs.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// Iterate pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.pairs.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Overlay `other` onto `self`; keys in `other` win.
    pub fn extend_from(&mut self, other: &Metadata) {
        self.pairs.reserve(other.len());
        for (key, value) in &other.pairs {
            match self.pairs.get_mut(key) {
                Some(existing) => existing.clone_from(value),
                None => {
                    self.pairs.insert(key.clone(), value.clone());
                }
            }
        }
    }

    /// Drop every pair whose key fails `keep`.
    pub fn retain_keys(&mut self, mut keep: impl FnMut(&str) -> bool) {
        self.pairs.retain(|k, _| keep(k.as_str()));
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Metadata {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut metadata = Metadata::new();
        for (key, value) in iter {
            metadata.insert(key, value);
        }
        metadata
    }
}

impl Serialize for Metadata {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.pairs.len()))?;
        for (key, value) in &self.pairs {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}

/// One parsed sheet entry: a path pattern plus its metadata.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PatternEntry {
    pub pattern: PathPattern,
    pub metadata: Metadata,
}

impl PatternEntry {
    /// Build an entry from a raw pattern string.
    pub fn new(pattern: &str, metadata: Metadata) -> Result<Self, PatternError> {
        Ok(Self {
            pattern: PathPattern::parse(pattern)?,
            metadata,
        })
    }

    pub fn matches(&self, path: &str) -> bool {
        self.pattern.matches(path)
    }
}
