//! Virtual focus over the suggestion list
//!
//! Keyboard focus stays in the text input while the arrow keys move a marker
//! over the rendered suggestions. Only selectable entries can hold it.

use crate::suggestions::{SuggestionId, SuggestionItem};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct VirtualFocus {
    focused: Option<SuggestionId>,
}

impl VirtualFocus {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn focused(&self) -> Option<SuggestionId> {
        self.focused
    }

    pub fn clear(&mut self) {
        self.focused = None;
    }

    pub fn focused_item<'a>(&self, items: &'a [SuggestionItem]) -> Option<&'a SuggestionItem> {
        let id = self.focused?;
        items
            .iter()
            .find(|item| item.id == id && item.is_selectable())
    }

    /// Move to the next selectable entry
    ///
    /// With nothing focused the first entry is taken; at the end focus stays
    /// put. Returns the newly focused entry.
    pub fn focus_next(&mut self, items: &[SuggestionItem]) -> Option<SuggestionId> {
        let selectable = selectable_ids(items);
        let next = match self.current_position(&selectable) {
            Some(position) if position + 1 < selectable.len() => selectable[position + 1],
            Some(_) => return None,
            None => *selectable.first()?,
        };
        self.focused = Some(next);
        Some(next)
    }

    /// Move to the previous selectable entry
    ///
    /// With nothing focused the last entry is taken. Moving up from the first
    /// entry clears the focus, handing it back to the input.
    pub fn focus_previous(&mut self, items: &[SuggestionItem]) -> Option<SuggestionId> {
        let selectable = selectable_ids(items);
        match self.current_position(&selectable) {
            Some(0) => {
                self.focused = None;
                None
            }
            Some(position) => {
                let previous = selectable[position - 1];
                self.focused = Some(previous);
                Some(previous)
            }
            None => {
                let last = *selectable.last()?;
                self.focused = Some(last);
                Some(last)
            }
        }
    }

    /// Pointer hover; landing on a disabled entry clears the focus
    pub fn hover(&mut self, items: &[SuggestionItem], id: SuggestionId) {
        self.focused = items
            .iter()
            .find(|item| item.id == id)
            .filter(|item| item.is_selectable())
            .map(|item| item.id);
    }

    fn current_position(&self, selectable: &[SuggestionId]) -> Option<usize> {
        let id = self.focused?;
        selectable.iter().position(|candidate| *candidate == id)
    }
}

fn selectable_ids(items: &[SuggestionItem]) -> Vec<SuggestionId> {
    items
        .iter()
        .filter(|item| item.is_selectable())
        .map(|item| item.id)
        .collect()
}

#[cfg(test)]
#[path = "navigator_tests.rs"]
mod navigator_tests;
