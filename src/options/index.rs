use std::collections::HashMap;

use super::element::{OptionElement, OptionEntry};

/// Value lookup over the declared options
///
/// Entries keep source order. When values repeat, the map points at the last
/// one while `options()` keeps every entry positionally.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct OptionIndex {
    options: Vec<OptionEntry>,
    by_value: HashMap<String, usize>,
}

impl OptionIndex {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_elements(elements: &[OptionElement]) -> Self {
        let mut index = Self::new();
        index.rebuild(elements);
        index
    }

    /// Discard the cache and repopulate it from the source
    pub fn rebuild(&mut self, elements: &[OptionElement]) {
        self.options.clear();
        self.by_value.clear();

        for element in elements {
            self.by_value
                .insert(element.value.clone(), self.options.len());
            self.options.push(OptionEntry::from(element));
        }
    }

    pub fn lookup(&self, value: &str) -> Option<&OptionEntry> {
        self.by_value.get(value).map(|&i| &self.options[i])
    }

    pub fn contains(&self, value: &str) -> bool {
        self.by_value.contains_key(value)
    }

    /// All entries in source order
    pub fn options(&self) -> &[OptionEntry] {
        &self.options
    }

    pub fn len(&self) -> usize {
        self.options.len()
    }

    pub fn is_empty(&self) -> bool {
        self.options.is_empty()
    }
}
