//! Real focus between the widget parts, and post-render work

use std::time::Instant;

use super::resolution::CommitSource;
use super::state::Combobox;
use crate::frame::FrameTask;

/// Where keyboard focus actually is
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusTarget {
    Input,
    Trigger,
    List,
    Tags,
    /// Anywhere outside the widget
    Outside,
}

impl FocusTarget {
    pub fn is_inside(self) -> bool {
        self != FocusTarget::Outside
    }
}

impl Combobox {
    /// Move real focus to `to`
    ///
    /// Leaving the input for somewhere outside commits the typed text in
    /// single mode. Otherwise leaving the widget, or leaving the list for
    /// another part, closes the suggestions.
    pub fn focus(&mut self, to: FocusTarget) {
        let from = self.real_focus;
        if from == to {
            return;
        }
        self.real_focus = to;

        let leaving = !to.is_inside();
        if from == FocusTarget::Input && leaving && !self.multiple {
            self.handle_input_change();
            self.commit(CommitSource::Blur);
        } else if (leaving || from == FocusTarget::List) && self.session.is_open() {
            self.hide_suggestions();
        }
    }

    pub fn is_focused(&self) -> bool {
        self.real_focus.is_inside()
    }

    /// Toggle the suggestion list, as the trigger button does
    pub fn toggle_suggestions(&mut self) {
        if self.disabled || self.read_only {
            return;
        }

        if self.session.is_open() {
            self.hide_suggestions_and_focus();
        } else {
            self.show_suggestions();
            self.real_focus = FocusTarget::Input;
        }
    }

    /// Run the work deferred until the frame showing it was rendered
    pub fn flush_frame(&mut self, now: Instant) {
        for task in self.frame.take() {
            match task {
                FrameTask::ScrollIntoView(id) => {
                    if let Some(row) = self.session.position(id)
                        && self.list_scroll.ensure_visible(row)
                    {
                        self.on_list_scroll(now);
                    }
                }
                FrameTask::ScrollToBottom => self.list_scroll.jump_to_bottom(),
                FrameTask::FocusInput => self.real_focus = FocusTarget::Input,
            }
        }
    }
}
