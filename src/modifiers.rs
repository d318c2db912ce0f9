//! The modifiers facade.
//!
//! # Responsibilities
//! - Own the parsed entries and their lookup index
//! - Answer `get_modifiers(path)` with the merged metadata
//!
//! # Design Decisions
//! - Immutable after construction; `Send + Sync`, shareable via `Arc`
//! - The key filter is applied once when the config is built
//! - Every query returns a fresh map

use std::fmt;
use std::sync::Arc;

use serde_json::Value;

use crate::config::schema::AppConfig;
use crate::entry::{Metadata, PatternEntry};
use crate::observability::metrics;
use crate::routing::router::{merge, Router};
use crate::sheet::document::{DocumentError, SheetDocument};
use crate::sheet::filter::{KeyFilter, KeyRules};
use crate::sheet::parser::{parse_with_columns, SheetColumns};

/// Parsed modifier sheet, ready for queries.
#[derive(Clone, Default)]
pub struct ModifiersConfig {
    entries: Vec<PatternEntry>,
    router: Router,
    key_filter: Option<Arc<dyn KeyFilter>>,
}

impl ModifiersConfig {
    /// Build from already-parsed entries.
    ///
    /// When `key_filter` is given it is applied to the entries here, so a
    /// filter passed at construction has the same effect as one passed to
    /// the parser.
    pub fn new(mut entries: Vec<PatternEntry>, key_filter: Option<Arc<dyn KeyFilter>>) -> Self {
        if let Some(filter) = &key_filter {
            for entry in &mut entries {
                entry.metadata.retain_keys(|key| filter.keep(key));
            }
        }
        Self::from_filtered(entries, key_filter)
    }

    /// A config without entries. Every query yields an empty map.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Parse sheet rows (default column names) and build the config.
    pub fn from_modifier_sheet(rows: &[Value], key_filter: Option<Arc<dyn KeyFilter>>) -> Self {
        Self::from_sheet_with_columns(rows, &SheetColumns::default(), key_filter)
    }

    /// Parse sheet rows with custom column names and build the config.
    pub fn from_sheet_with_columns(
        rows: &[Value],
        columns: &SheetColumns,
        key_filter: Option<Arc<dyn KeyFilter>>,
    ) -> Self {
        let entries = parse_with_columns(rows, columns, key_filter.as_deref());
        Self::from_filtered(entries, key_filter)
    }

    /// Build from a sheet document as directed by the application config.
    pub fn from_document(document: &SheetDocument, config: &AppConfig) -> Result<Self, DocumentError> {
        let rows = document.rows(Some(config.sheet.sheet_name.as_str()))?;
        let rules = KeyRules::from_config(&config.filter);
        let key_filter: Option<Arc<dyn KeyFilter>> = if rules.is_permissive() {
            None
        } else {
            Some(Arc::new(rules))
        };
        Ok(Self::from_sheet_with_columns(
            rows,
            &SheetColumns::from(&config.sheet),
            key_filter,
        ))
    }

    fn from_filtered(entries: Vec<PatternEntry>, key_filter: Option<Arc<dyn KeyFilter>>) -> Self {
        let router = Router::new(&entries);
        metrics::record_entries(entries.len());
        tracing::debug!(
            entries = entries.len(),
            exact = router.exact_count(),
            prefix = router.prefix_count(),
            "Modifiers config built"
        );
        Self {
            entries,
            router,
            key_filter,
        }
    }

    /// Merged metadata of every entry matching `path`.
    ///
    /// Entries are applied in sheet order; on key collisions the later
    /// entry wins. An unmatched path yields an empty map.
    pub fn get_modifiers(&self, path: &str) -> Metadata {
        let positions = self.router.lookup(path);
        metrics::record_query(!positions.is_empty());
        tracing::trace!(path, matches = positions.len(), "Resolving modifiers");
        merge(&self.entries, &positions)
    }

    /// The entries matching `path`, in merge order.
    pub fn matching_entries(&self, path: &str) -> Vec<&PatternEntry> {
        self.router
            .lookup(path)
            .into_iter()
            .filter_map(|position| self.entries.get(position))
            .collect()
    }

    pub fn entries(&self) -> &[PatternEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The filter this config was built with.
    pub fn key_filter(&self) -> Option<&dyn KeyFilter> {
        self.key_filter.as_deref()
    }
}

impl fmt::Debug for ModifiersConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ModifiersConfig")
            .field("entries", &self.entries)
            .field("key_filter", &self.key_filter.is_some())
            .finish()
    }
}
