//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Column roles must be named and distinct
//! - Filter lists must not contradict each other
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Validation is pure function: AppConfig → Result<(), Vec<ValidationError>>
//! - Runs before config is accepted into the system

use thiserror::Error;

use crate::config::schema::AppConfig;

const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

/// A single semantic problem in the configuration.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("sheet.{0} must not be empty")]
    EmptyColumn(&'static str),
    #[error("sheet.{0} and sheet.{1} name the same column")]
    DuplicateColumn(&'static str, &'static str),
    #[error("sheet.sheet_name must not be empty")]
    EmptySheetName,
    #[error("key '{0}' is both allowed and denied")]
    ConflictingKey(String),
    #[error("observability.log_level '{0}' is not one of trace, debug, info, warn, error")]
    InvalidLogLevel(String),
}

/// Validate a parsed configuration.
pub fn validate_config(config: &AppConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    let columns = [
        ("path_column", config.sheet.path_column.trim()),
        ("key_column", config.sheet.key_column.trim()),
        ("value_column", config.sheet.value_column.trim()),
    ];
    for &(field, name) in &columns {
        if name.is_empty() {
            errors.push(ValidationError::EmptyColumn(field));
        }
    }
    for (i, &(field_a, a)) in columns.iter().enumerate() {
        for &(field_b, b) in &columns[i + 1..] {
            if !a.is_empty() && a.eq_ignore_ascii_case(b) {
                errors.push(ValidationError::DuplicateColumn(field_a, field_b));
            }
        }
    }

    if config.sheet.sheet_name.trim().is_empty() {
        errors.push(ValidationError::EmptySheetName);
    }

    for key in &config.filter.allow {
        if config.filter.deny.contains(key) {
            errors.push(ValidationError::ConflictingKey(key.clone()));
        }
    }

    let level = config.observability.log_level.to_ascii_lowercase();
    if !LOG_LEVELS.contains(&level.as_str()) {
        errors.push(ValidationError::InvalidLogLevel(
            config.observability.log_level.clone(),
        ));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        assert_eq!(validate_config(&AppConfig::default()), Ok(()));
    }

    #[test]
    fn test_collects_all_errors() {
        let mut config = AppConfig::default();
        config.sheet.path_column = "key".into();
        config.sheet.value_column = " ".into();
        config.sheet.sheet_name = String::new();
        config.filter.allow = vec!["title".into()];
        config.filter.deny = vec!["title".into()];
        config.observability.log_level = "verbose".into();

        let errors = validate_config(&config).unwrap_err();
        assert_eq!(
            errors,
            vec![
                ValidationError::EmptyColumn("value_column"),
                ValidationError::DuplicateColumn("path_column", "key_column"),
                ValidationError::EmptySheetName,
                ValidationError::ConflictingKey("title".into()),
                ValidationError::InvalidLogLevel("verbose".into()),
            ]
        );
    }

    #[test]
    fn test_log_level_case_insensitive() {
        let mut config = AppConfig::default();
        config.observability.log_level = "DEBUG".into();
        assert!(validate_config(&config).is_ok());
    }
}
