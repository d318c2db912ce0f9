//! Row shape classification.
//!
//! # Design Decisions
//! - Classification is a pure function of one row and the column roles
//! - Column roles match ASCII case-insensitively; metadata keys keep their case
//! - Empty strings and `null` count as missing cells
//! - A key/value row has both the key and the value column and no other
//!   non-empty metadata cells; otherwise `Key`/`Value` are plain metadata
//!   columns of a wide row
//! - Only the first column naming the path role is the path; later ones are
//!   ordinary metadata columns

use std::fmt;

use serde_json::Value;

use crate::sheet::parser::SheetColumns;

/// Why a row produced no entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SkipReason {
    /// The row is not a JSON object.
    NotAnObject,
    /// Path column absent or empty.
    MissingPath,
    /// A cell holds an array or object.
    NonScalarCell(String),
    /// Key/value row with an empty key.
    IncompleteKeyValue,
    /// No columns besides the path.
    NoMetadata,
}

impl SkipReason {
    /// Stable label for metrics.
    pub fn label(&self) -> &'static str {
        match self {
            SkipReason::NotAnObject => "not_an_object",
            SkipReason::MissingPath => "missing_path",
            SkipReason::NonScalarCell(_) => "non_scalar_cell",
            SkipReason::IncompleteKeyValue => "incomplete_key_value",
            SkipReason::NoMetadata => "no_metadata",
        }
    }
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SkipReason::NotAnObject => write!(f, "row is not an object"),
            SkipReason::MissingPath => write!(f, "row has no path"),
            SkipReason::NonScalarCell(column) => write!(f, "column '{column}' is not a scalar"),
            SkipReason::IncompleteKeyValue => write!(f, "key/value row is incomplete"),
            SkipReason::NoMetadata => write!(f, "row has no metadata columns"),
        }
    }
}

/// The shape of one sheet row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RowShape<'a> {
    /// One metadata column per key. Only non-empty cells are listed.
    Wide {
        path: String,
        cells: Vec<(&'a str, String)>,
    },
    /// A single key/value pair. `value` is `None` when the value cell is empty.
    KeyValue {
        path: String,
        key: String,
        value: Option<String>,
    },
    Skip(SkipReason),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Role {
    Key,
    Value,
    Other,
}

/// Coerce a cell to a string. `Ok(None)` means missing.
///
/// Blank cells count as missing; non-blank text is kept verbatim.
fn scalar(value: &Value) -> Result<Option<String>, ()> {
    let text = match value {
        Value::Null => return Ok(None),
        Value::String(s) => s.clone(),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Array(_) | Value::Object(_) => return Err(()),
    };
    if text.trim().is_empty() {
        Ok(None)
    } else {
        Ok(Some(text))
    }
}

/// Classify a row.
pub fn classify<'a>(row: &'a Value, columns: &SheetColumns) -> RowShape<'a> {
    let Some(object) = row.as_object() else {
        return RowShape::Skip(SkipReason::NotAnObject);
    };

    let mut path_cell: Option<&'a Value> = None;
    let mut cells: Vec<(&'a str, Option<String>, Role)> = Vec::with_capacity(object.len());
    for (name, value) in object {
        if path_cell.is_none() && name.eq_ignore_ascii_case(&columns.path) {
            path_cell = Some(value);
            continue;
        }
        let role = if name.eq_ignore_ascii_case(&columns.key) {
            Role::Key
        } else if name.eq_ignore_ascii_case(&columns.value) {
            Role::Value
        } else {
            Role::Other
        };
        match scalar(value) {
            Ok(text) => cells.push((name.as_str(), text, role)),
            Err(()) => return RowShape::Skip(SkipReason::NonScalarCell(name.clone())),
        }
    }

    let path = match path_cell.map(scalar) {
        Some(Ok(Some(path))) => path.trim().to_string(),
        Some(Err(())) => return RowShape::Skip(SkipReason::NonScalarCell(columns.path.clone())),
        Some(Ok(None)) | None => return RowShape::Skip(SkipReason::MissingPath),
    };

    if cells.is_empty() {
        return RowShape::Skip(SkipReason::NoMetadata);
    }

    let has_other = cells
        .iter()
        .any(|(_, text, role)| *role == Role::Other && text.is_some());
    let key_cell = cells.iter().find(|(_, _, role)| *role == Role::Key);
    let value_cell = cells.iter().find(|(_, _, role)| *role == Role::Value);

    if let (false, Some((_, key, _)), Some((_, value, _))) = (has_other, key_cell, value_cell) {
        return match key {
            Some(key) => RowShape::KeyValue {
                path,
                key: key.trim().to_string(),
                value: value.clone(),
            },
            None => RowShape::Skip(SkipReason::IncompleteKeyValue),
        };
    }

    RowShape::Wide {
        path,
        cells: cells
            .into_iter()
            .filter_map(|(name, text, _)| text.map(|t| (name, t)))
            .collect(),
    }
}
