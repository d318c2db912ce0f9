//! Configuration schema definitions.
//!
//! This module defines the application configuration for the `modifiers` tool.
//! All types derive Serde traits for deserialization from config files.

use serde::{Deserialize, Serialize};

use crate::config::loader::ConfigError;
use crate::sheet::document::DEFAULT_SHEET;

/// Root configuration.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct AppConfig {
    /// Sheet layout: column roles and sheet selection.
    pub sheet: SheetConfig,

    /// Metadata key filtering.
    pub filter: FilterConfig,

    /// Observability settings.
    pub observability: ObservabilityConfig,
}

impl AppConfig {
    /// Parse and validate configuration from a TOML string.
    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        crate::config::loader::parse_config(content)
    }
}

/// Sheet layout configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct SheetConfig {
    /// Column holding the path pattern.
    pub path_column: String,

    /// Key column of key/value sheets.
    pub key_column: String,

    /// Value column of key/value sheets.
    pub value_column: String,

    /// Sheet to read from multi-sheet documents.
    pub sheet_name: String,
}

impl Default for SheetConfig {
    fn default() -> Self {
        Self {
            path_column: "URL".to_string(),
            key_column: "Key".to_string(),
            value_column: "Value".to_string(),
            sheet_name: DEFAULT_SHEET.to_string(),
        }
    }
}

/// Key filter configuration.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct FilterConfig {
    /// Keys to keep. Empty keeps every key.
    pub allow: Vec<String>,

    /// Keys to drop. Wins over `allow`.
    pub deny: Vec<String>,
}

/// Observability configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Log level (trace, debug, info, warn, error).
    pub log_level: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "warn".to_string(),
        }
    }
}
