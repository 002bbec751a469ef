//! Turning typed text or a picked suggestion into a committed value

use super::session_ops::MatchKind;
use super::state::Combobox;
use crate::frame::FrameTask;
use crate::suggestions::SuggestionId;

/// What caused a commit attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommitSource {
    Enter,
    /// Focus left the widget from the input (single mode)
    Blur,
}

impl Combobox {
    /// Resolve the current text into a value
    ///
    /// The virtually focused suggestion wins over the typed text. An exact
    /// match against the declared options (or, failing those, the rendered
    /// suggestions) selects that option; otherwise strict selection marks the
    /// widget invalid and free mode commits the text as is.
    pub fn commit(&mut self, source: CommitSource) {
        let text = self.effective_commit_text(source);
        let candidates = self.get_matches(&text, MatchKind::Exact);
        let exact = candidates
            .iter()
            .find(|entry| entry.text == text.trim())
            .or_else(|| candidates.first())
            .cloned();

        if let Some(entry) = exact {
            let changed = if self.multiple {
                self.select_item(&entry.value, Some(&entry.text), false);
                !text.trim().is_empty() && self.add_value(&entry.value, Some(&entry.text), false)
            } else {
                let changed = self.value() != entry.value;
                self.select_item(&entry.value, Some(&entry.text), false);
                self.set_value(entry.value.clone());
                changed
            };

            if self.force_selection {
                self.invalid = false;
            }
            self.hide_suggestions();
            if changed {
                self.emit_change();
            }
        } else if self.force_selection {
            log::debug!("`{}` matches no option", text);
            self.invalid = if self.multiple {
                !text.is_empty() || self.selection.is_empty()
            } else {
                true
            };
        } else {
            let changed = if self.multiple {
                !text.trim().is_empty() && self.add_value(&text, None, false)
            } else {
                let changed = self.value() != text;
                self.set_value(text.clone());
                changed
            };

            self.hide_suggestions();
            if changed {
                self.emit_change();
            }
        }

        self.update_trigger_label(None);
    }

    /// Commit a rendered suggestion, as a click on it does
    pub fn pick_suggestion(&mut self, id: SuggestionId) {
        let Some(item) = self
            .session
            .item(id)
            .filter(|item| item.is_selectable())
            .cloned()
        else {
            return;
        };

        self.select_item(&item.value, Some(&item.content), item.is_markup);
        if self.multiple {
            self.add_value(&item.value, Some(&item.content), item.is_markup);
        } else {
            self.set_value(item.value.clone());
            // The value may be unchanged; the input still shows this item
            self.set_input_values(&item.value, &item.text);
        }

        self.frame.schedule(FrameTask::FocusInput);
        self.hide_suggestions();
        self.emit_change();
    }

    /// Text to resolve: the virtually focused entry, the only candidate for
    /// Enter, or what was typed
    ///
    /// The only candidate stands in for the text only when the list is
    /// current (no round pending for newer text) and selection is not strict.
    fn effective_commit_text(&self, source: CommitSource) -> String {
        if !self.session.is_open() {
            return self.input_text();
        }

        let items = self.session.items();
        if let Some(item) = self.focus.focused_item(items) {
            return item.text.clone();
        }
        if source == CommitSource::Enter
            && !self.force_selection
            && !self.session.is_typing_pending()
            && let Some(item) = self.session.sole_selectable()
        {
            return item.text.clone();
        }
        self.input_text()
    }

    /// Single mode: leaving the input with cleared text (or, under strict
    /// selection, with text naming no option) drops the selected marks
    pub(super) fn handle_input_change(&mut self) {
        if self.multiple {
            return;
        }

        let text = self.input_text().to_lowercase();
        if self.force_selection || text.is_empty() {
            let stale: Vec<String> = self
                .source
                .items()
                .iter()
                .filter(|item| item.selected && item.value.to_lowercase() != text)
                .map(|item| item.value.clone())
                .collect();
            for value in stale {
                self.set_option_selected(&value, false);
            }
        }
    }
}
