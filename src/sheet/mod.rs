//! Modifier sheet ingestion.
//!
//! # Data Flow
//! ```text
//! JSON document (file or string)
//!     → document.rs (extract the rows array)
//!     → row.rs (classify: wide, key/value or skip)
//!     → parser.rs (build entries, coalesce key/value runs)
//!     → filter.rs (drop unwanted keys, once)
//!     → Vec<PatternEntry> in row order
//! ```
//!
//! # Design Decisions
//! - Malformed rows are skipped; a sheet never fails to parse as a whole
//! - Filtering happens here so queries never pay for it

pub mod document;
pub mod filter;
pub mod parser;
pub mod row;

pub use document::{DocumentError, SheetDocument};
pub use filter::{KeyFilter, KeyRules};
pub use parser::{parse_modifier_sheet, parse_with_columns, SheetColumns};
