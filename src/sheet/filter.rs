//! Metadata key filtering.

use std::collections::HashSet;

use crate::config::schema::FilterConfig;

/// Decides which metadata keys survive parsing.
pub trait KeyFilter: Send + Sync {
    /// Returns true if `key` should be kept.
    fn keep(&self, key: &str) -> bool;
}

impl<F> KeyFilter for F
where
    F: Fn(&str) -> bool + Send + Sync,
{
    fn keep(&self, key: &str) -> bool {
        self(key)
    }
}

/// Allow/deny lists of exact key names.
///
/// An empty allow list allows every key. The deny list always wins.
#[derive(Debug, Clone, Default)]
pub struct KeyRules {
    allow: HashSet<String>,
    deny: HashSet<String>,
}

impl KeyRules {
    pub fn new<A, D>(allow: A, deny: D) -> Self
    where
        A: IntoIterator,
        A::Item: Into<String>,
        D: IntoIterator,
        D::Item: Into<String>,
    {
        Self {
            allow: allow.into_iter().map(Into::into).collect(),
            deny: deny.into_iter().map(Into::into).collect(),
        }
    }

    pub fn from_config(config: &FilterConfig) -> Self {
        Self::new(config.allow.iter().cloned(), config.deny.iter().cloned())
    }

    /// True when the rules let every key through.
    pub fn is_permissive(&self) -> bool {
        self.allow.is_empty() && self.deny.is_empty()
    }
}

impl KeyFilter for KeyRules {
    fn keep(&self, key: &str) -> bool {
        if self.deny.contains(key) {
            return false;
        }
        self.allow.is_empty() || self.allow.contains(key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_closure_filter() {
        let filter = |key: &str| key != "title";
        assert!(!filter.keep("title"));
        assert!(filter.keep("description"));
    }

    #[test]
    fn test_deny_list() {
        let rules = KeyRules::new(Vec::<String>::new(), ["title"]);
        assert!(!rules.keep("title"));
        assert!(rules.keep("Title")); // Case sensitive
        assert!(rules.keep("keywords"));
    }

    #[test]
    fn test_allow_list() {
        let rules = KeyRules::new(["title", "description"], Vec::<String>::new());
        assert!(rules.keep("title"));
        assert!(!rules.keep("keywords"));
    }

    #[test]
    fn test_deny_beats_allow() {
        let rules = KeyRules::new(["title"], ["title"]);
        assert!(!rules.keep("title"));
    }

    #[test]
    fn test_permissive() {
        assert!(KeyRules::default().is_permissive());
        assert!(KeyRules::default().keep("anything"));
        assert!(!KeyRules::new(["a"], Vec::<String>::new()).is_permissive());
    }
}
