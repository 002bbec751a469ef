//! Pointer handling over the regions recorded by the last render

use std::time::Instant;

use ratatui::crossterm::event::{MouseButton, MouseEvent, MouseEventKind};

use super::focus::FocusTarget;
use super::state::Combobox;
use crate::layout::{Region, region_at};
use crate::suggestions::SuggestionId;

impl Combobox {
    /// Handle a mouse event
    ///
    /// Returns true if the event landed on the widget. A press anywhere else
    /// moves real focus outside.
    pub fn handle_mouse(&mut self, mouse: MouseEvent, now: Instant) -> bool {
        if self.disabled {
            return false;
        }

        let region = region_at(&self.layout_regions, mouse.column, mouse.row);
        match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => self.handle_press(region, mouse),
            MouseEventKind::Moved => {
                if region == Some(Region::SuggestionList) {
                    self.hover_list(mouse);
                    true
                } else {
                    false
                }
            }
            MouseEventKind::ScrollDown if region == Some(Region::SuggestionList) => {
                self.list_scroll.scroll_down(1);
                self.on_list_scroll(now);
                true
            }
            MouseEventKind::ScrollUp if region == Some(Region::SuggestionList) => {
                self.list_scroll.scroll_up(1);
                self.on_list_scroll(now);
                true
            }
            _ => false,
        }
    }

    fn handle_press(&mut self, region: Option<Region>, mouse: MouseEvent) -> bool {
        match region {
            Some(Region::SuggestionList) => {
                // Pressing an entry must not blur the input first
                if let Some(id) = self.suggestion_at(mouse.row) {
                    self.pick_suggestion(id);
                }
                true
            }
            Some(Region::Trigger) => {
                self.toggle_suggestions();
                true
            }
            Some(Region::TagRemove(index)) => {
                if let Some(value) = self.layout_regions.tags.get(index).map(|tag| tag.value.clone()) {
                    self.remove_tag(&value);
                }
                true
            }
            Some(Region::Tag(_)) => {
                self.focus(FocusTarget::Tags);
                true
            }
            Some(Region::InputField) => {
                self.focus(FocusTarget::Input);
                true
            }
            Some(Region::DoneButton) | None => {
                self.focus(FocusTarget::Outside);
                false
            }
        }
    }

    fn hover_list(&mut self, mouse: MouseEvent) {
        match self.suggestion_at(mouse.row) {
            Some(id) => self.focus.hover(self.session.items(), id),
            None => self.focus.clear(),
        }
    }

    /// Entry rendered at screen `row`, if any
    fn suggestion_at(&self, row: u16) -> Option<SuggestionId> {
        let list = self.layout_regions.suggestion_list?;
        let relative = row.checked_sub(list.y)? as usize;
        let index = relative + self.list_scroll.offset as usize;
        self.session.items().get(index).map(|item| item.id)
    }
}
