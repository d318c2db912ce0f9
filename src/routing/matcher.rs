//! Path pattern matching.
//!
//! # Responsibilities
//! - Parse the path cell of a sheet row into a pattern
//! - Match a request path against a pattern
//!
//! # Design Decisions
//! - Matching is case-sensitive and byte-exact; paths are opaque strings
//! - Only a trailing `*` is a wildcard; a `*` anywhere else is literal
//! - Prefix matching is a plain string-prefix test, not segment-aware:
//!   `/a/b*` matches `/a/bc` as well as `/a/b/c`
//! - No regex, so matching stays O(len(pattern))

use std::fmt;

use crate::entry::PatternError;

/// Wildcard marker terminating a prefix pattern.
pub const WILDCARD: char = '*';

/// A parsed path pattern.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum PathPattern {
    /// Matches only the identical path, trailing slash included.
    Exact(String),
    /// Matches every path starting with the literal prefix.
    Prefix(String),
}

impl PathPattern {
    /// Parse a raw pattern. Surrounding whitespace is trimmed.
    pub fn parse(raw: &str) -> Result<Self, PatternError> {
        let raw = raw.trim();
        if raw.is_empty() {
            return Err(PatternError::Empty);
        }
        Ok(match raw.strip_suffix(WILDCARD) {
            Some(prefix) => PathPattern::Prefix(prefix.to_string()),
            None => PathPattern::Exact(raw.to_string()),
        })
    }

    /// Returns true if `path` matches this pattern.
    pub fn matches(&self, path: &str) -> bool {
        match self {
            PathPattern::Exact(exact) => path == exact,
            PathPattern::Prefix(prefix) => path.starts_with(prefix.as_str()),
        }
    }

    /// Short label used in logs and CLI output.
    pub fn kind(&self) -> &'static str {
        match self {
            PathPattern::Exact(_) => "exact",
            PathPattern::Prefix(_) => "prefix",
        }
    }
}

impl fmt::Display for PathPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PathPattern::Exact(exact) => f.write_str(exact),
            PathPattern::Prefix(prefix) => write!(f, "{prefix}{WILDCARD}"),
        }
    }
}
