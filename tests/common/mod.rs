//! Shared helpers for integration tests.

use std::path::PathBuf;

use modifiers_config::sheet::SheetDocument;
use modifiers_config::Metadata;
use serde_json::Value;

/// Path of a file under `tests/fixtures`.
pub fn fixture_path(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

/// Rows of the default sheet of a fixture document.
pub fn fixture_rows(name: &str) -> Vec<Value> {
    let document = SheetDocument::from_file(&fixture_path(name)).expect("fixture should load");
    document
        .rows(None)
        .expect("fixture should contain rows")
        .to_vec()
}

/// Build expected metadata from literal pairs.
#[allow(dead_code)]
pub fn metadata(pairs: &[(&str, &str)]) -> Metadata {
    pairs.iter().copied().collect()
}

/// Metadata as sorted pairs, for order-insensitive comparison.
#[allow(dead_code)]
pub fn sorted(metadata: &Metadata) -> Vec<(String, String)> {
    let mut pairs: Vec<(String, String)> = metadata
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    pairs.sort();
    pairs
}
