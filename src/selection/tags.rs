use crate::markup;

/// Removable token representing one selected value
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tag {
    pub value: String,
    /// Label content as given, markup when `is_markup`
    pub content: String,
    pub is_markup: bool,
    /// Plain text shown in the terminal
    pub label: String,
}

impl Tag {
    pub fn new(value: impl Into<String>, content: impl Into<String>, is_markup: bool) -> Self {
        let content = content.into();
        Self {
            value: value.into(),
            label: markup::display_text(&content, is_markup),
            content,
            is_markup,
        }
    }
}

/// Ordered tag container rendered next to the input in multi-select mode
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TagList {
    tags: Vec<Tag>,
    /// Form name, only set while in multi-select mode
    pub name: String,
    pub disabled: bool,
}

impl TagList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, tag: Tag) {
        self.tags.push(tag);
    }

    /// Remove the tag bound to `value`
    pub fn remove(&mut self, value: &str) -> Option<Tag> {
        let position = self.tags.iter().position(|tag| tag.value == value)?;
        Some(self.tags.remove(position))
    }

    pub fn clear(&mut self) {
        self.tags.clear();
    }

    pub fn get(&self, value: &str) -> Option<&Tag> {
        self.tags.iter().find(|tag| tag.value == value)
    }

    pub fn last(&self) -> Option<&Tag> {
        self.tags.last()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Tag> {
        self.tags.iter()
    }

    pub fn len(&self) -> usize {
        self.tags.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tags.is_empty()
    }
}
