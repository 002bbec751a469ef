//! Option matching
//!
//! Decides whether a declared option matches what the user typed. Suggestion
//! filtering uses the configured `MatchMode`; commit resolution always uses
//! `matches_exact`, even when a custom predicate is installed.

use std::fmt;
use std::sync::Arc;

use crate::options::OptionEntry;

/// Caller supplied match predicate
pub type MatchPredicate = Arc<dyn Fn(&OptionEntry, &str) -> bool + Send + Sync>;

/// How suggestions are filtered against the typed query
#[derive(Clone, Default)]
pub enum MatchMode {
    /// Option text starts with the query (leading whitespace ignored)
    StartsWith,
    /// Option text contains the query anywhere
    #[default]
    Contains,
    /// Caller supplied predicate replacing the built-in modes
    Custom(MatchPredicate),
}

impl fmt::Debug for MatchMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MatchMode::StartsWith => write!(f, "StartsWith"),
            MatchMode::Contains => write!(f, "Contains"),
            MatchMode::Custom(_) => write!(f, "Custom(..)"),
        }
    }
}

impl MatchMode {
    pub fn custom(predicate: impl Fn(&OptionEntry, &str) -> bool + Send + Sync + 'static) -> Self {
        MatchMode::Custom(Arc::new(predicate))
    }

    /// Parse the declared attribute value; anything unknown means `Contains`
    pub fn from_attr(value: &str) -> Self {
        match value.trim().to_lowercase().as_str() {
            "startswith" => MatchMode::StartsWith,
            _ => MatchMode::Contains,
        }
    }

    /// Attribute form of the mode, `None` for custom predicates
    pub fn attr_value(&self) -> Option<&'static str> {
        match self {
            MatchMode::StartsWith => Some("startswith"),
            MatchMode::Contains => Some("contains"),
            MatchMode::Custom(_) => None,
        }
    }

    pub fn is_custom(&self) -> bool {
        matches!(self, MatchMode::Custom(_))
    }
}

/// Test one option against a query with the given mode
pub fn matches(option: &OptionEntry, query: &str, mode: &MatchMode) -> bool {
    match mode {
        MatchMode::StartsWith => option_starts_with(option, query),
        MatchMode::Contains => option_contains(option, query),
        MatchMode::Custom(predicate) => predicate(option, query),
    }
}

/// Case-insensitive equality of the option text and the query, both trimmed
pub fn matches_exact(option: &OptionEntry, query: &str) -> bool {
    searchable_text(option).trim().to_lowercase() == query.trim().to_lowercase()
}

fn option_contains(option: &OptionEntry, query: &str) -> bool {
    searchable_text(option)
        .to_lowercase()
        .contains(&query.to_lowercase())
}

fn option_starts_with(option: &OptionEntry, query: &str) -> bool {
    searchable_text(option)
        .trim_start()
        .to_lowercase()
        .starts_with(&query.to_lowercase())
}

fn searchable_text(option: &OptionEntry) -> &str {
    if option.text.is_empty() {
        &option.content
    } else {
        &option.text
    }
}

#[cfg(test)]
#[path = "matcher_tests.rs"]
mod matcher_tests;
