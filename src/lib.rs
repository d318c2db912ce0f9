//! Path-pattern driven page metadata ("modifier sheets").
//!
//! A modifier sheet is a table of path patterns with metadata columns.
//! [`ModifiersConfig`] parses such a sheet once and answers, for any request
//! path, the merged metadata of every matching row.

pub mod config;
pub mod entry;
pub mod modifiers;
pub mod observability;
pub mod routing;
pub mod sheet;

pub use config::schema::AppConfig;
pub use entry::{Metadata, PatternEntry, PatternError};
pub use modifiers::ModifiersConfig;
pub use routing::matcher::PathPattern;
pub use sheet::filter::{KeyFilter, KeyRules};
pub use sheet::parser::{parse_modifier_sheet, SheetColumns};
