use super::element::OptionElement;
use crate::observer::{MutationObserver, MutationRecord};

/// The declared, ordered option set
///
/// Structural edits (insert/remove) are reported to the attached observer.
/// Attribute edits (selected, value, content) are not; the widget routes those
/// as item-level signals instead.
#[derive(Debug, Default)]
pub struct OptionSource {
    items: Vec<OptionElement>,
    observer: MutationObserver,
}

impl OptionSource {
    pub fn new(items: Vec<OptionElement>) -> Self {
        Self {
            items,
            observer: MutationObserver::new(),
        }
    }

    pub fn items(&self) -> &[OptionElement] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// First option declared with `value`
    pub fn find(&self, value: &str) -> Option<&OptionElement> {
        self.items.iter().find(|item| item.value == value)
    }

    fn find_mut(&mut self, value: &str) -> Option<&mut OptionElement> {
        self.items.iter_mut().find(|item| item.value == value)
    }

    pub fn selected_items(&self) -> Vec<&OptionElement> {
        self.items.iter().filter(|item| item.selected).collect()
    }

    pub fn observer(&self) -> &MutationObserver {
        &self.observer
    }

    pub fn observer_mut(&mut self) -> &mut MutationObserver {
        &mut self.observer
    }

    pub fn push(&mut self, item: OptionElement) {
        let value = item.value.clone();
        self.items.push(item);
        self.observer.notify(MutationRecord::ChildList {
            added: vec![value],
            removed: vec![],
        });
    }

    /// Insert at `index`, clamped to the end of the list
    pub fn insert(&mut self, index: usize, item: OptionElement) {
        let value = item.value.clone();
        let index = index.min(self.items.len());
        self.items.insert(index, item);
        self.observer.notify(MutationRecord::ChildList {
            added: vec![value],
            removed: vec![],
        });
    }

    /// Remove the first option declared with `value`
    pub fn remove(&mut self, value: &str) -> Option<OptionElement> {
        let position = self.items.iter().position(|item| item.value == value)?;
        let removed = self.items.remove(position);
        self.observer.notify(MutationRecord::ChildList {
            added: vec![],
            removed: vec![removed.value.clone()],
        });
        Some(removed)
    }

    /// Replace the whole option set
    pub fn replace(&mut self, items: Vec<OptionElement>) {
        let removed = self.items.drain(..).map(|item| item.value).collect();
        let added = items.iter().map(|item| item.value.clone()).collect();
        self.items = items;
        self.observer
            .notify(MutationRecord::ChildList { added, removed });
    }

    pub fn clear(&mut self) {
        self.replace(Vec::new());
    }

    /// Set the selected mark, returning whether it changed
    pub fn set_selected(&mut self, value: &str, selected: bool) -> bool {
        match self.find_mut(value) {
            Some(item) if item.selected != selected => {
                item.selected = selected;
                true
            }
            _ => false,
        }
    }

    pub fn set_value(&mut self, old: &str, new: &str) -> bool {
        match self.find_mut(old) {
            Some(item) => {
                item.value = new.to_string();
                true
            }
            None => false,
        }
    }

    pub fn set_content(&mut self, value: &str, content: &str) -> bool {
        match self.find_mut(value) {
            Some(item) => {
                item.content = content.to_string();
                true
            }
            None => false,
        }
    }

    pub fn set_disabled(&mut self, value: &str, disabled: bool) -> bool {
        match self.find_mut(value) {
            Some(item) => {
                item.disabled = disabled;
                true
            }
            None => false,
        }
    }

    pub fn deselect_all(&mut self) {
        for item in &mut self.items {
            item.selected = false;
        }
    }

    /// Deselect every option except the first one declared with `value`
    pub fn deselect_except(&mut self, value: &str) {
        let keep = self.items.iter().position(|item| item.value == value);
        for (i, item) in self.items.iter_mut().enumerate() {
            if Some(i) != keep {
                item.selected = false;
            }
        }
    }
}
