//! Modifier sheet parsing.
//!
//! # Responsibilities
//! - Turn raw rows into an ordered list of entries
//! - Coalesce consecutive key/value rows sharing a path
//! - Apply the key filter once, at parse time
//!
//! # Design Decisions
//! - Permissive: bad rows are logged and skipped, never fatal
//! - Output keeps row order; nothing is sorted

use serde_json::Value;

use crate::config::schema::SheetConfig;
use crate::entry::{Metadata, PatternEntry};
use crate::observability::metrics;
use crate::sheet::filter::KeyFilter;
use crate::sheet::row::{classify, RowShape};

/// Names of the columns with a special role.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SheetColumns {
    /// Column holding the path pattern.
    pub path: String,
    /// Key column of key/value sheets.
    pub key: String,
    /// Value column of key/value sheets.
    pub value: String,
}

impl Default for SheetColumns {
    fn default() -> Self {
        Self {
            path: "URL".to_string(),
            key: "Key".to_string(),
            value: "Value".to_string(),
        }
    }
}

impl From<&SheetConfig> for SheetColumns {
    fn from(config: &SheetConfig) -> Self {
        Self {
            path: config.path_column.clone(),
            key: config.key_column.clone(),
            value: config.value_column.clone(),
        }
    }
}

/// Parse rows using the default column names.
pub fn parse_modifier_sheet(rows: &[Value], filter: Option<&dyn KeyFilter>) -> Vec<PatternEntry> {
    parse_with_columns(rows, &SheetColumns::default(), filter)
}

/// Parse rows into entries, in row order.
pub fn parse_with_columns(
    rows: &[Value],
    columns: &SheetColumns,
    filter: Option<&dyn KeyFilter>,
) -> Vec<PatternEntry> {
    let keep = |key: &str| filter.map_or(true, |f| f.keep(key));

    let mut entries = Vec::new();
    // Open key/value run: (path, metadata)
    let mut run: Option<(String, Metadata)> = None;
    let mut skipped = 0usize;

    for (index, row) in rows.iter().enumerate() {
        match classify(row, columns) {
            RowShape::Wide { path, cells } => {
                flush(&mut entries, run.take());
                let metadata = cells
                    .into_iter()
                    .filter(|&(key, _)| keep(key))
                    .collect::<Metadata>();
                push_entry(&mut entries, &path, metadata);
            }
            RowShape::KeyValue { path, key, value } => {
                let continues = matches!(&run, Some((open, _)) if *open == path);
                if !continues {
                    flush(&mut entries, run.take());
                    run = Some((path, Metadata::new()));
                }
                if let (Some((_, metadata)), Some(value)) = (run.as_mut(), value) {
                    if keep(key.as_str()) {
                        metadata.insert(key, value);
                    }
                }
            }
            RowShape::Skip(reason) => {
                skipped += 1;
                metrics::record_row_skipped(reason.label());
                tracing::debug!(row = index, reason = %reason, "Skipping sheet row");
            }
        }
    }
    flush(&mut entries, run);

    metrics::record_rows_parsed(rows.len());
    tracing::info!(
        rows = rows.len(),
        entries = entries.len(),
        skipped,
        "Modifier sheet parsed"
    );

    entries
}

fn flush(entries: &mut Vec<PatternEntry>, run: Option<(String, Metadata)>) {
    if let Some((path, metadata)) = run {
        push_entry(entries, &path, metadata);
    }
}

fn push_entry(entries: &mut Vec<PatternEntry>, path: &str, metadata: Metadata) {
    match PatternEntry::new(path, metadata) {
        Ok(entry) => entries.push(entry),
        Err(e) => tracing::debug!(path, error = %e, "Skipping invalid pattern"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::routing::matcher::PathPattern;
    use serde_json::json;

    fn pairs(entry: &PatternEntry) -> Vec<(&str, &str)> {
        entry.metadata.iter().collect()
    }

    #[test]
    fn test_wide_rows_keep_order() {
        let rows = vec![
            json!({"URL": "/a/*", "title": "A", "description": ""}),
            json!({"URL": "/a/b", "title": "", "description": "B"}),
        ];
        let entries = parse_modifier_sheet(&rows, None);

        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].pattern, PathPattern::Prefix("/a/".into()));
        assert_eq!(pairs(&entries[0]), vec![("title", "A")]);
        assert_eq!(entries[1].pattern, PathPattern::Exact("/a/b".into()));
        assert_eq!(pairs(&entries[1]), vec![("description", "B")]);
    }

    #[test]
    fn test_key_value_rows_coalesce() {
        let rows = vec![
            json!({"URL": "/*", "Key": "title", "Value": "ACME CORP"}),
            json!({"URL": "/*", "Key": "description", "Value": "Lorem"}),
            json!({"URL": "/news/*", "Key": "category", "Value": "news"}),
            json!({"URL": "/*", "Key": "keywords", "Value": "ACME"}),
        ];
        let entries = parse_modifier_sheet(&rows, None);

        assert_eq!(entries.len(), 3);
        assert_eq!(
            pairs(&entries[0]),
            vec![("title", "ACME CORP"), ("description", "Lorem")]
        );
        assert_eq!(pairs(&entries[1]), vec![("category", "news")]);
        assert_eq!(pairs(&entries[2]), vec![("keywords", "ACME")]);
    }

    #[test]
    fn test_key_value_duplicate_key_last_wins() {
        let rows = vec![
            json!({"URL": "/x", "Key": "title", "Value": "first"}),
            json!({"URL": "/x", "Key": "title", "Value": "second"}),
        ];
        let entries = parse_modifier_sheet(&rows, None);
        assert_eq!(entries.len(), 1);
        assert_eq!(pairs(&entries[0]), vec![("title", "second")]);
    }

    #[test]
    fn test_skipped_rows_do_not_break_run() {
        let rows = vec![
            json!({"URL": "/x", "Key": "a", "Value": "1"}),
            json!({"URL": "", "Key": "ignored", "Value": "0"}),
            json!({"URL": "/x", "Key": "b", "Value": "2"}),
        ];
        let entries = parse_modifier_sheet(&rows, None);
        assert_eq!(entries.len(), 1);
        assert_eq!(pairs(&entries[0]), vec![("a", "1"), ("b", "2")]);
    }

    #[test]
    fn test_wide_row_ends_run() {
        let rows = vec![
            json!({"URL": "/x", "Key": "a", "Value": "1"}),
            json!({"URL": "/x", "title": "T"}),
            json!({"URL": "/x", "Key": "b", "Value": "2"}),
        ];
        let entries = parse_modifier_sheet(&rows, None);
        assert_eq!(entries.len(), 3);
    }

    #[test]
    fn test_empty_value_pair_still_opens_entry() {
        let rows = vec![json!({"URL": "/x", "Key": "a", "Value": ""})];
        let entries = parse_modifier_sheet(&rows, None);
        assert_eq!(entries.len(), 1);
        assert!(entries[0].metadata.is_empty());
    }

    #[test]
    fn test_filter_applies_to_both_shapes() {
        let rows = vec![
            json!({"URL": "/w", "title": "T", "keywords": "K"}),
            json!({"URL": "/kv", "Key": "title", "Value": "T"}),
            json!({"URL": "/kv", "Key": "keywords", "Value": "K"}),
        ];
        let filter = |key: &str| key != "title";
        let entries = parse_modifier_sheet(&rows, Some(&filter));

        assert_eq!(entries.len(), 2);
        for entry in &entries {
            assert!(!entry.metadata.contains_key("title"));
            assert_eq!(entry.metadata.get("keywords"), Some("K"));
        }
    }

    #[test]
    fn test_malformed_rows_skipped() {
        let rows = vec![
            json!(42),
            json!({"title": "no path"}),
            json!({"URL": "/a", "nested": {"x": 1}}),
            json!({"URL": "/ok", "title": "T"}),
        ];
        let entries = parse_modifier_sheet(&rows, None);
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].pattern, PathPattern::Exact("/ok".into()));
    }

    #[test]
    fn test_lone_value_column_is_metadata() {
        let rows = vec![
            json!({"URL": "/x", "value": "42"}),
            json!({"URL": "/y", "Key": "", "Value": "", "title": "Y"}),
        ];
        let entries = parse_modifier_sheet(&rows, None);

        assert_eq!(entries.len(), 2);
        assert_eq!(pairs(&entries[0]), vec![("value", "42")]);
        assert_eq!(pairs(&entries[1]), vec![("title", "Y")]);
    }

    #[test]
    fn test_numeric_path() {
        let rows = vec![json!({"URL": 404, "title": "Not Found"})];
        let entries = parse_modifier_sheet(&rows, None);
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].pattern, PathPattern::Exact("404".into()));
    }

    #[test]
    fn test_empty_sheet() {
        assert!(parse_modifier_sheet(&[], None).is_empty());
    }
}
