//! Sheet documents as served by the content pipeline.
//!
//! Accepted shapes:
//! - a bare array of rows
//! - a single sheet: `{ "data": [...] }`
//! - a multi-sheet: `{ ":names": ["default", ...], "default": { "data": [...] } }`

use std::path::Path;

use serde_json::Value;
use thiserror::Error;

/// Sheet selected from a multi-sheet document when none is named.
pub const DEFAULT_SHEET: &str = "default";

/// Errors from reading a sheet document.
#[derive(Error, Debug)]
pub enum DocumentError {
    #[error("failed to read sheet document: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse sheet JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("sheet '{0}' not found in document")]
    SheetNotFound(String),
    #[error("document contains no rows array")]
    NoRows,
}

/// A parsed sheet document.
#[derive(Debug, Clone)]
pub struct SheetDocument {
    root: Value,
}

impl SheetDocument {
    /// Parse a document from JSON text.
    pub fn parse(content: &str) -> Result<Self, DocumentError> {
        Ok(Self {
            root: serde_json::from_str(content)?,
        })
    }

    /// Load a document from a JSON file.
    pub fn from_file(path: &Path) -> Result<Self, DocumentError> {
        let content = std::fs::read_to_string(path)?;
        Self::parse(&content)
    }

    /// Names listed by a multi-sheet document, empty otherwise.
    pub fn sheet_names(&self) -> Vec<&str> {
        self.root
            .get(":names")
            .and_then(Value::as_array)
            .map(|names| names.iter().filter_map(Value::as_str).collect())
            .unwrap_or_default()
    }

    /// Rows of the document, picking `sheet` (or [`DEFAULT_SHEET`]) from a multi-sheet.
    pub fn rows(&self, sheet: Option<&str>) -> Result<&[Value], DocumentError> {
        match &self.root {
            Value::Array(rows) => Ok(rows.as_slice()),
            Value::Object(object)
                if object.contains_key(":names")
                    || sheet.is_some_and(|name| object.contains_key(name)) =>
            {
                let name = sheet.unwrap_or(DEFAULT_SHEET);
                let sheet = object
                    .get(name)
                    .ok_or_else(|| DocumentError::SheetNotFound(name.to_string()))?;
                data_rows(sheet).ok_or(DocumentError::NoRows)
            }
            other => data_rows(other).ok_or(DocumentError::NoRows),
        }
    }
}

fn data_rows(sheet: &Value) -> Option<&[Value]> {
    sheet.get("data").and_then(Value::as_array).map(Vec::as_slice)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bare_array() {
        let doc = SheetDocument::parse(r#"[{"URL": "/a", "title": "A"}]"#).unwrap();
        assert_eq!(doc.rows(None).unwrap().len(), 1);
    }

    #[test]
    fn test_single_sheet() {
        let doc = SheetDocument::parse(r#"{"total": 1, "data": [{"URL": "/a"}]}"#).unwrap();
        assert_eq!(doc.rows(None).unwrap().len(), 1);
        assert!(doc.sheet_names().is_empty());
    }

    #[test]
    fn test_multi_sheet() {
        let doc = SheetDocument::parse(
            r#"{
                ":names": ["default", "extra"],
                "default": {"data": [{"URL": "/a"}]},
                "extra": {"data": [{"URL": "/b"}, {"URL": "/c"}]}
            }"#,
        )
        .unwrap();
        assert_eq!(doc.sheet_names(), vec!["default", "extra"]);
        assert_eq!(doc.rows(None).unwrap().len(), 1);
        assert_eq!(doc.rows(Some("extra")).unwrap().len(), 2);
        assert!(matches!(
            doc.rows(Some("missing")),
            Err(DocumentError::SheetNotFound(name)) if name == "missing"
        ));
    }

    #[test]
    fn test_named_sheet_without_names_list() {
        let doc = SheetDocument::parse(r#"{"default": {"data": [{"URL": "/a"}]}}"#).unwrap();
        assert_eq!(doc.rows(Some("default")).unwrap().len(), 1);
        assert!(matches!(doc.rows(None), Err(DocumentError::NoRows)));
    }

    #[test]
    fn test_sheet_name_ignored_for_single_sheet() {
        let doc = SheetDocument::parse(r#"{"data": [{"URL": "/a"}]}"#).unwrap();
        assert_eq!(doc.rows(Some(DEFAULT_SHEET)).unwrap().len(), 1);
    }

    #[test]
    fn test_no_rows() {
        let doc = SheetDocument::parse(r#"{"hello": "world"}"#).unwrap();
        assert!(matches!(doc.rows(None), Err(DocumentError::NoRows)));
        assert!(matches!(
            SheetDocument::parse("not json"),
            Err(DocumentError::Parse(_))
        ));
    }
}
