use serde::{Deserialize, Serialize};

use crate::markup;
use crate::options::OptionEntry;

/// Text of the disabled entry shown when a round produced nothing
pub const NO_RESULTS_TEXT: &str = "No matching results.";

/// A candidate handed to the session, by local filtering or by a provider
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Suggestion {
    pub value: String,
    /// Display content; empty means "use the value"
    #[serde(default)]
    pub content: String,
    /// `content` is HTML rather than plain text
    #[serde(default)]
    pub markup: bool,
    #[serde(default)]
    pub icon: Option<String>,
    #[serde(default)]
    pub disabled: bool,
}

impl Suggestion {
    pub fn new(value: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            content: content.into(),
            markup: false,
            icon: None,
            disabled: false,
        }
    }

    pub fn with_markup(mut self, markup: bool) -> Self {
        self.markup = markup;
        self
    }

    pub fn with_icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = Some(icon.into());
        self
    }

    pub fn with_disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }
}

impl From<&OptionEntry> for Suggestion {
    fn from(entry: &OptionEntry) -> Self {
        Self {
            value: entry.value.clone(),
            content: entry.content.clone(),
            markup: entry.is_markup,
            icon: (!entry.icon.is_empty()).then(|| entry.icon.clone()),
            disabled: entry.disabled,
        }
    }
}

/// Identity of a rendered suggestion entry, unique per widget
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SuggestionId(pub(crate) u64);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SuggestionKind {
    Candidate,
    /// Synthesized placeholder for an empty round
    NoResults,
}

/// An entry of the rendered suggestion list
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SuggestionItem {
    pub id: SuggestionId,
    pub value: String,
    pub content: String,
    pub is_markup: bool,
    /// Plain text derived from `content`
    pub text: String,
    pub icon: Option<String>,
    pub disabled: bool,
    pub kind: SuggestionKind,
}

impl SuggestionItem {
    pub(crate) fn candidate(id: SuggestionId, suggestion: Suggestion) -> Self {
        let content = if suggestion.content.is_empty() {
            suggestion.value.clone()
        } else {
            suggestion.content
        };
        Self {
            id,
            text: markup::display_text(&content, suggestion.markup),
            value: suggestion.value,
            content,
            is_markup: suggestion.markup,
            icon: suggestion.icon.filter(|icon| !icon.is_empty()),
            disabled: suggestion.disabled,
            kind: SuggestionKind::Candidate,
        }
    }

    pub(crate) fn no_results(id: SuggestionId) -> Self {
        Self {
            id,
            value: String::new(),
            content: format!("<em>{}</em>", NO_RESULTS_TEXT),
            is_markup: true,
            text: NO_RESULTS_TEXT.to_string(),
            icon: None,
            disabled: true,
            kind: SuggestionKind::NoResults,
        }
    }

    /// Whether virtual focus and picking may land on this entry
    pub fn is_selectable(&self) -> bool {
        !self.disabled && self.kind == SuggestionKind::Candidate
    }

    pub fn is_placeholder(&self) -> bool {
        self.kind == SuggestionKind::NoResults
    }
}
