use ratatui::layout::Rect;

/// A clickable part of the screen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Region {
    InputField,
    Trigger,
    /// Remove mark of the tag at this index
    TagRemove(usize),
    /// Body of the tag at this index
    Tag(usize),
    /// Inner area of the suggestion popup
    SuggestionList,
    DoneButton,
}

/// On-screen area of one rendered tag
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagRegion {
    pub value: String,
    pub area: Rect,
    pub remove: Rect,
}

/// Areas recorded by the last render
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LayoutRegions {
    pub input_field: Option<Rect>,
    pub trigger: Option<Rect>,
    pub tags: Vec<TagRegion>,
    pub suggestion_list: Option<Rect>,
    pub done_button: Option<Rect>,
}

impl LayoutRegions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// Any area that belongs to the combobox itself
    pub fn contains_widget(&self, column: u16, row: u16) -> bool {
        let inside = |rect: &Option<Rect>| rect.is_some_and(|r| contains(r, column, row));
        inside(&self.input_field)
            || inside(&self.trigger)
            || inside(&self.suggestion_list)
            || self.tags.iter().any(|tag| contains(tag.area, column, row))
    }
}

pub(super) fn contains(rect: Rect, column: u16, row: u16) -> bool {
    column >= rect.x
        && column < rect.x.saturating_add(rect.width)
        && row >= rect.y
        && row < rect.y.saturating_add(rect.height)
}
