//! Keyboard handling while the widget has focus

use std::time::Instant;

use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use tui_textarea::{CursorMove, Input, Key};

use super::focus::FocusTarget;
use super::resolution::CommitSource;
use super::state::Combobox;
use crate::frame::FrameTask;

impl Combobox {
    /// Handle a key press
    ///
    /// Returns true if the key was consumed; unconsumed keys (Tab without a
    /// trapped focus, Esc with a closed list) are left to the host.
    pub fn handle_key(&mut self, key: KeyEvent, now: Instant) -> bool {
        if self.disabled {
            return false;
        }

        if self.real_focus == FocusTarget::Trigger {
            return self.handle_trigger_key(key);
        }

        match key.code {
            KeyCode::Esc => {
                if !self.session.is_open() {
                    return false;
                }
                self.hide_suggestions_and_focus();
                true
            }
            KeyCode::Up => {
                self.handle_up(key.modifiers.contains(KeyModifiers::ALT));
                true
            }
            KeyCode::Down => {
                self.handle_down();
                true
            }
            // Trap focus while an entry is virtually focused
            KeyCode::Tab => self.session.is_open() && self.focused_suggestion().is_some(),
            KeyCode::BackTab => {
                if !self.session.is_open() {
                    return false;
                }
                self.hide_suggestions_and_focus();
                true
            }
            KeyCode::Enter => {
                self.commit(CommitSource::Enter);
                true
            }
            KeyCode::Char(' ') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.toggle_suggestions();
                true
            }
            KeyCode::Backspace if self.multiple && self.input_text().is_empty() => {
                if let Some(last) = self.selection.tags().last().map(|tag| tag.value.clone()) {
                    self.remove_tag(&last);
                }
                true
            }
            _ => self.handle_text_key(key, now),
        }
    }

    fn handle_trigger_key(&mut self, key: KeyEvent) -> bool {
        match key.code {
            KeyCode::Enter | KeyCode::Char(' ') => {
                self.toggle_suggestions();
                true
            }
            KeyCode::Esc if self.session.is_open() => {
                self.hide_suggestions_and_focus();
                true
            }
            _ => false,
        }
    }

    fn handle_up(&mut self, alt: bool) {
        if !self.session.is_open() {
            self.show_suggestions();
            return;
        }

        if alt {
            self.hide_suggestions();
        } else if let Some(id) = self.focus.focus_previous(self.session.items()) {
            self.frame.schedule(FrameTask::ScrollIntoView(id));
        }
    }

    fn handle_down(&mut self) {
        if !self.session.is_open() {
            self.show_suggestions();
            return;
        }

        if let Some(id) = self.focus.focus_next(self.session.items()) {
            self.frame.schedule(FrameTask::ScrollIntoView(id));
        }
    }

    /// Editing and cursor keys for the text input
    fn handle_text_key(&mut self, key: KeyEvent, now: Instant) -> bool {
        let input: Input = key.into();

        if self.read_only {
            return match input.key {
                Key::Left | Key::Right | Key::Home | Key::End => {
                    self.input.input(input);
                    true
                }
                _ => false,
            };
        }

        // Only one line exists
        if matches!(input.key, Key::Enter) || (input.ctrl && matches!(input.key, Key::Char('m' | 'j'))) {
            return true;
        }

        if let Key::Char(_) = input.key
            && !input.ctrl
            && !input.alt
            && let Some(limit) = self.max_length
            && self.input_text().chars().count() >= limit
        {
            return true;
        }

        if self.input.input(input) {
            self.collapse_to_single_line();
            self.handle_input_event(now);
        }
        true
    }

    /// Insert pasted text at the cursor as if typed
    ///
    /// Line breaks become spaces and the text is cut to `max_length`.
    pub fn handle_paste(&mut self, text: &str, now: Instant) -> bool {
        if self.disabled || self.read_only {
            return false;
        }

        let mut text = text.replace("\r\n", " ").replace(['\n', '\r'], " ");
        if let Some(limit) = self.max_length {
            let room = limit.saturating_sub(self.input_text().chars().count());
            text = text.chars().take(room).collect();
        }
        if text.is_empty() {
            return true;
        }

        self.input.insert_str(&text);
        self.handle_input_event(now);
        true
    }

    /// Paste or yank may bring line breaks into the input
    fn collapse_to_single_line(&mut self) {
        if self.input.lines().len() <= 1 {
            return;
        }
        let joined = self.input.lines().join(" ");
        self.set_input_text(&joined);
        self.input.move_cursor(CursorMove::End);
    }
}
