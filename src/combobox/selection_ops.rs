//! Committed values and their mirror in the declared options
//!
//! Every engine-side edit of the option source runs with the mutation
//! observer suspended, so only host edits trigger re-derivation.

use super::focus::FocusTarget;
use super::state::Combobox;
use crate::observer::MutationRecord;
use crate::options::OptionElement;
use crate::selection::Tag;

impl Combobox {
    /// Replace the committed values
    ///
    /// Duplicates are dropped, `[""]` counts as empty and, with strict
    /// selection, unknown values are rejected and the widget marked invalid.
    /// No change event is emitted.
    pub fn set_values<I, S>(&mut self, values: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut accepted: Vec<String> = Vec::new();
        let mut rejected = false;
        for value in values.into_iter().map(Into::into) {
            if value.is_empty() || accepted.contains(&value) {
                continue;
            }
            if self.force_selection && !self.index.contains(&value) {
                log::warn!("rejecting unknown value `{}`", value);
                rejected = true;
                continue;
            }
            accepted.push(value);
        }
        if rejected {
            self.invalid = true;
        }

        if self.multiple {
            self.clear_values();
            for value in accepted {
                self.select_item(&value, None, false);
                self.add_value(&value, None, false);
            }
        } else {
            let value = accepted.into_iter().next();
            match value.as_deref() {
                Some(value) if self.index.contains(value) => {
                    let value = value.to_string();
                    self.with_observer_suspended(|combo| {
                        combo.source.deselect_except(&value);
                        combo.source.set_selected(&value, true);
                    });
                }
                _ => self.with_observer_suspended(|combo| combo.source.deselect_all()),
            }
            self.selection.set_single(value);
            self.reflect_current_value();
        }
    }

    pub fn set_value(&mut self, value: impl Into<String>) {
        self.set_values([value.into()]);
    }

    /// Commit `value` as a tag in multiple mode
    ///
    /// Content falls back to the declared option, then to the raw value.
    /// Returns false for an empty value or one already committed.
    pub fn add_value(&mut self, value: &str, content: Option<&str>, is_markup: bool) -> bool {
        if value.is_empty() {
            return false;
        }
        let (content, is_markup) = match content.filter(|content| !content.is_empty()) {
            Some(content) => (content.to_string(), is_markup),
            None => match self.index.lookup(value) {
                Some(entry) => (entry.content.clone(), entry.is_markup),
                None => (value.to_string(), false),
            },
        };

        if !self.selection.insert_tagged(Tag::new(value, content, is_markup)) {
            return false;
        }
        self.set_input_values("", "");
        true
    }

    /// Remove a committed value, emitting a change event
    pub fn remove_value(&mut self, value: &str) -> bool {
        if !self.selection.remove(value) {
            return false;
        }
        self.with_observer_suspended(|combo| {
            combo.source.set_selected(value, false);
        });
        self.emit_change();
        true
    }

    /// Drop every committed value and selected mark
    pub fn clear_values(&mut self) {
        self.selection.reset_values();
        self.with_observer_suspended(|combo| combo.source.deselect_all());
    }

    /// Empty the value and the text input
    pub fn clear(&mut self) {
        self.set_value("");
        self.set_input_text("");
        if self.multiple {
            self.clear_values();
        }
    }

    /// Restore the values derived when the widget was created
    pub fn reset(&mut self) {
        let initial = self.selection.initial().to_vec();
        self.set_values(initial);
    }

    /// Remove a tag the user dismissed
    ///
    /// Focus returns to the input once the last tag is gone.
    pub fn remove_tag(&mut self, value: &str) -> bool {
        if !self.can_edit() {
            return false;
        }
        let removed = self.remove_value(value);
        if self.selection.is_empty() {
            self.real_focus = FocusTarget::Input;
        }
        self.update_trigger_label(None);
        removed
    }

    // Host edits of the declared options

    pub fn append_option(&mut self, option: OptionElement) {
        self.source.push(option);
    }

    pub fn insert_option(&mut self, index: usize, option: OptionElement) {
        self.source.insert(index, option);
    }

    pub fn remove_option(&mut self, value: &str) -> Option<OptionElement> {
        self.source.remove(value)
    }

    pub fn replace_options(&mut self, options: Vec<OptionElement>) {
        self.source.replace(options);
    }

    pub fn clear_options(&mut self) {
        self.source.clear();
    }

    /// Process structural edits recorded since the last flush
    ///
    /// Returns true if the selection was re-derived.
    pub fn flush_mutations(&mut self) -> bool {
        let records = self.source.observer_mut().take_records();
        let structural = records
            .iter()
            .any(|record| matches!(record, MutationRecord::ChildList { .. }));
        if structural {
            log::debug!("{} option mutation(s), re-deriving selection", records.len());
            self.set_state_from_source();
        }
        structural
    }

    /// Toggle the selected mark of a declared option, as the host would
    pub fn set_option_selected(&mut self, value: &str, selected: bool) {
        if self.source.set_selected(value, selected) {
            self.handle_item_selected_change(value, selected);
        }
    }

    pub fn set_option_value(&mut self, old: &str, new: &str) {
        if self.source.set_value(old, new) {
            self.index.rebuild(self.source.items());
        }
    }

    pub fn set_option_content(&mut self, value: &str, content: &str) {
        if self.source.set_content(value, content) {
            self.index.rebuild(self.source.items());
        }
    }

    pub fn set_option_disabled(&mut self, value: &str, disabled: bool) {
        if self.source.set_disabled(value, disabled) {
            self.index.rebuild(self.source.items());
        }
    }

    // Internal

    pub(super) fn with_observer_suspended<R>(&mut self, f: impl FnOnce(&mut Self) -> R) -> R {
        self.source.observer_mut().suspend();
        let result = f(self);
        self.source.observer_mut().resume();
        result
    }

    /// Rebuild the index and derive the committed values from the declared
    /// selected marks
    pub(super) fn set_state_from_source(&mut self) {
        self.index.rebuild(self.source.items());

        let selected: Vec<(String, String, bool)> = self
            .source
            .selected_items()
            .into_iter()
            .map(|item| {
                (
                    item.value.clone(),
                    item.effective_content().to_string(),
                    item.markup,
                )
            })
            .collect();

        if self.multiple {
            self.selection.reset_values();
            for (value, content, markup) in &selected {
                self.add_value(value, Some(content), *markup);
            }
        } else if let Some((last, _, _)) = selected.last() {
            let last = last.clone();
            self.with_observer_suspended(|combo| combo.source.deselect_except(&last));
            self.set_value(last);
        } else {
            self.set_value("");
        }
    }

    /// Mark `value` selected in the declared options, adding an option for it
    /// if none exists
    pub(super) fn select_item(&mut self, value: &str, content: Option<&str>, is_markup: bool) {
        let multiple = self.multiple;
        self.with_observer_suspended(|combo| {
            if combo.source.find(value).is_some() {
                if !multiple {
                    combo.source.deselect_except(value);
                }
                combo.source.set_selected(value, true);
                return;
            }

            let content = content.filter(|content| !content.is_empty()).unwrap_or(value);
            if !multiple {
                combo.source.deselect_all();
            }
            log::debug!("adding option for committed value `{}`", value);
            combo
                .source
                .push(
                    OptionElement::new(value, content)
                        .with_markup(is_markup)
                        .with_selected(true),
                );
            combo.index.rebuild(combo.source.items());
        });
    }

    /// Show the current single value in the hidden field and the input
    pub(super) fn reflect_current_value(&mut self) {
        let value = self.value().to_string();
        let text = if value.is_empty() {
            String::new()
        } else {
            self.index
                .lookup(&value)
                .map(|entry| entry.text.clone())
                .unwrap_or_else(|| value.clone())
        };
        self.set_input_values(&value, &text);
    }

    /// Set the hidden field and the input text
    ///
    /// In single mode an empty text leaves the input alone.
    pub(super) fn set_input_values(&mut self, value: &str, text: &str) {
        self.field.value = value.to_string();
        if self.multiple || !text.is_empty() {
            self.set_input_text(text.trim());
        }
    }

    fn handle_item_selected_change(&mut self, value: &str, selected: bool) {
        if self.multiple {
            if selected {
                let (content, markup) = self
                    .source
                    .find(value)
                    .map(|item| (Some(item.effective_content().to_string()), item.markup))
                    .unwrap_or((None, false));
                self.add_value(value, content.as_deref(), markup);
            } else {
                self.remove_value(value);
            }
        } else if selected {
            self.set_value(value);
            self.invalid = false;
        } else if self.value() == value {
            self.set_value("");
            self.emit_change();
        }
    }
}
