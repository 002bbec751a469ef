use std::time::Instant;

use ratatui::crossterm::event::{
    Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};

use super::state::{App, ExitAction, Focus};
use crate::combobox::FocusTarget;
use crate::layout::{Region, region_at};

impl App {
    /// Handle one terminal event
    pub fn handle_event(&mut self, event: Event, now: Instant) {
        match event {
            // Check that it's a key press event to avoid duplicates
            Event::Key(key) if key.kind == KeyEventKind::Press => self.handle_key_event(key, now),
            Event::Mouse(mouse) => self.handle_mouse_event(mouse, now),
            Event::Paste(text) if self.focus == Focus::Widget => {
                self.combo.handle_paste(&text, now);
            }
            _ => {}
        }
    }

    fn handle_key_event(&mut self, key: KeyEvent, now: Instant) {
        if self.handle_global_keys(key) {
            return;
        }

        match self.focus {
            Focus::Widget => {
                if !self.combo.handle_key(key, now) {
                    self.handle_unconsumed_widget_key(key);
                }
            }
            Focus::DoneButton => self.handle_done_key(key),
        }
    }

    /// Returns true if the key was handled
    fn handle_global_keys(&mut self, key: KeyEvent) -> bool {
        if !key.modifiers.contains(KeyModifiers::CONTROL) {
            return false;
        }
        match key.code {
            KeyCode::Char('c') => {
                self.quit(ExitAction::Cancel);
                true
            }
            KeyCode::Char('d') => {
                self.quit(ExitAction::Accept);
                true
            }
            _ => false,
        }
    }

    /// Tab order: input, trigger, Done
    fn handle_unconsumed_widget_key(&mut self, key: KeyEvent) {
        match (key.code, self.combo.real_focus()) {
            (KeyCode::Tab, FocusTarget::Trigger) => self.focus_done(),
            (KeyCode::Tab, _) => self.combo.focus(FocusTarget::Trigger),
            (KeyCode::BackTab, FocusTarget::Trigger) => self.combo.focus(FocusTarget::Input),
            (KeyCode::BackTab, _) => self.focus_done(),
            _ => {}
        }
    }

    fn handle_done_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Enter | KeyCode::Char(' ') => self.quit(ExitAction::Accept),
            KeyCode::Esc => self.quit(ExitAction::Cancel),
            KeyCode::Tab => self.focus_widget(FocusTarget::Input),
            KeyCode::BackTab => self.focus_widget(FocusTarget::Trigger),
            _ => {}
        }
    }

    fn handle_mouse_event(&mut self, mouse: MouseEvent, now: Instant) {
        if self.combo.handle_mouse(mouse, now) {
            self.focus = Focus::Widget;
            return;
        }

        let pressed = matches!(mouse.kind, MouseEventKind::Down(MouseButton::Left));
        if pressed
            && region_at(&self.combo.layout_regions, mouse.column, mouse.row) == Some(Region::DoneButton)
        {
            self.focus = Focus::DoneButton;
            self.quit(ExitAction::Accept);
        }
    }

    fn focus_done(&mut self) {
        self.combo.focus(FocusTarget::Outside);
        self.focus = Focus::DoneButton;
    }

    fn focus_widget(&mut self, target: FocusTarget) {
        self.combo.focus(target);
        self.focus = Focus::Widget;
    }
}
