//! Match lookup and merge.
//!
//! # Responsibilities
//! - Index entry patterns at construction
//! - Look up every entry matching a path
//! - Merge matching metadata in source order
//!
//! # Design Decisions
//! - Immutable after construction (thread-safe without locks)
//! - O(1) exact lookup via HashMap
//! - O(n) prefix scan (acceptable for typical sheet sizes)
//! - Positions are sorted before merging, so the index never changes precedence

use std::collections::HashMap;

use crate::entry::{Metadata, PatternEntry};
use crate::routing::matcher::PathPattern;

/// Compiled lookup index over a list of entries.
#[derive(Debug, Clone, Default)]
pub struct Router {
    /// Exact path -> source positions, ascending.
    exact: HashMap<String, Vec<usize>>,
    /// Prefix patterns with their source positions, ascending.
    prefixes: Vec<(String, usize)>,
}

impl Router {
    /// Build the index. Positions refer to `entries`.
    pub fn new(entries: &[PatternEntry]) -> Self {
        let mut exact: HashMap<String, Vec<usize>> = HashMap::new();
        let mut prefixes = Vec::new();

        for (position, entry) in entries.iter().enumerate() {
            match &entry.pattern {
                PathPattern::Exact(path) => exact.entry(path.clone()).or_default().push(position),
                PathPattern::Prefix(prefix) => prefixes.push((prefix.clone(), position)),
            }
        }

        Self { exact, prefixes }
    }

    /// Source positions of all entries matching `path`, ascending.
    pub fn lookup(&self, path: &str) -> Vec<usize> {
        let mut positions: Vec<usize> = self
            .prefixes
            .iter()
            .filter(|(prefix, _)| path.starts_with(prefix.as_str()))
            .map(|(_, position)| *position)
            .collect();

        if let Some(exact) = self.exact.get(path) {
            positions.extend_from_slice(exact);
            positions.sort_unstable();
        }

        positions
    }

    pub fn exact_count(&self) -> usize {
        self.exact.values().map(Vec::len).sum()
    }

    pub fn prefix_count(&self) -> usize {
        self.prefixes.len()
    }
}

/// Merge the metadata of `entries` at `positions`, in the order given.
///
/// Later positions overwrite keys set by earlier ones.
pub fn merge(entries: &[PatternEntry], positions: &[usize]) -> Metadata {
    let mut merged = Metadata::new();
    for entry in positions.iter().filter_map(|&p| entries.get(p)) {
        merged.extend_from(&entry.metadata);
    }
    merged
}
