use super::tags::{Tag, TagList};

/// Ordered, duplicate-free selected values plus their tags
#[derive(Debug, Clone, Default)]
pub struct SelectionStore {
    values: Vec<String>,
    tags: TagList,
    /// Snapshot taken once the widget is initialized, restored by `reset`
    initial: Vec<String>,
}

impl SelectionStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn values(&self) -> &[String] {
        &self.values
    }

    /// First selected value or the empty string
    pub fn first(&self) -> &str {
        self.values.first().map(String::as_str).unwrap_or("")
    }

    pub fn contains(&self, value: &str) -> bool {
        self.values.iter().any(|v| v == value)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn tags(&self) -> &TagList {
        &self.tags
    }

    pub fn tags_mut(&mut self) -> &mut TagList {
        &mut self.tags
    }

    /// Append a value with its tag; returns false if the value is already selected
    pub fn insert_tagged(&mut self, tag: Tag) -> bool {
        if self.contains(&tag.value) {
            log::warn!("Tried to add value that was already present: {}", tag.value);
            return false;
        }
        self.values.push(tag.value.clone());
        self.tags.add(tag);
        true
    }

    /// Remove a value and its tag; returns false if it was not selected
    pub fn remove(&mut self, value: &str) -> bool {
        let Some(position) = self.values.iter().position(|v| v == value) else {
            log::warn!("Tried to remove value that is not selected: {}", value);
            return false;
        };
        self.values.remove(position);
        self.tags.remove(value);
        true
    }

    /// Replace the selection with at most one untagged value
    pub fn set_single(&mut self, value: Option<String>) {
        self.tags.clear();
        self.values = value.into_iter().collect();
    }

    /// Drop every value and tag
    pub fn reset_values(&mut self) {
        self.values.clear();
        self.tags.clear();
    }

    pub fn capture_initial(&mut self) {
        self.initial = self.values.clone();
    }

    pub fn initial(&self) -> &[String] {
        &self.initial
    }
}
