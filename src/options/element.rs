use serde::{Deserialize, Serialize};

use crate::markup;

/// A declared option as the host provides it
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct OptionElement {
    pub value: String,
    /// Display content; empty means "use the value"
    #[serde(default)]
    pub content: String,
    /// `content` is HTML rather than plain text
    #[serde(default)]
    pub markup: bool,
    #[serde(default)]
    pub icon: String,
    #[serde(default)]
    pub disabled: bool,
    #[serde(default)]
    pub selected: bool,
}

impl OptionElement {
    pub fn new(value: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            content: content.into(),
            ..Self::default()
        }
    }

    pub fn with_markup(mut self, markup: bool) -> Self {
        self.markup = markup;
        self
    }

    pub fn with_icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = icon.into();
        self
    }

    pub fn with_disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    pub fn with_selected(mut self, selected: bool) -> Self {
        self.selected = selected;
        self
    }

    /// Content to display, falling back to the value
    pub fn effective_content(&self) -> &str {
        if self.content.is_empty() {
            &self.value
        } else {
            &self.content
        }
    }
}

/// Read-only snapshot of an option held by the index
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct OptionEntry {
    pub value: String,
    /// Original content, HTML when `is_markup`
    pub content: String,
    pub is_markup: bool,
    /// Plain display text derived from `content`
    pub text: String,
    pub icon: String,
    pub disabled: bool,
}

impl OptionEntry {
    pub fn new(value: impl Into<String>, content: impl Into<String>) -> Self {
        let content = content.into();
        Self {
            value: value.into(),
            text: markup::display_text(&content, false),
            content,
            is_markup: false,
            icon: String::new(),
            disabled: false,
        }
    }

    pub fn with_markup(mut self, is_markup: bool) -> Self {
        self.is_markup = is_markup;
        self.text = markup::display_text(&self.content, is_markup);
        self
    }
}

impl From<&OptionElement> for OptionEntry {
    fn from(element: &OptionElement) -> Self {
        let content = element.effective_content().to_string();
        Self {
            value: element.value.clone(),
            text: markup::display_text(&content, element.markup),
            content,
            is_markup: element.markup,
            icon: element.icon.clone(),
            disabled: element.disabled,
        }
    }
}
