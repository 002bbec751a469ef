//! Fixtures shared by the combobox tests

use std::time::{Duration, Instant};

use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::{ComboEvent, Combobox, Settings};
use crate::options::OptionElement;

pub fn two_countries() -> Vec<OptionElement> {
    vec![
        OptionElement::new("us", "United States"),
        OptionElement::new("ca", "Canada"),
    ]
}

pub fn countries() -> Vec<OptionElement> {
    vec![
        OptionElement::new("us", "United States"),
        OptionElement::new("uk", "United Kingdom"),
        OptionElement::new("ca", "Canada"),
        OptionElement::new("fr", "France"),
        OptionElement::new("mx", "Mexico"),
    ]
}

/// Immediate rounds so typing is fully synchronous
pub fn settings() -> Settings {
    Settings::default().delay(Duration::ZERO)
}

pub fn single(options: Vec<OptionElement>) -> Combobox {
    Combobox::new(options, settings())
}

pub fn multi(options: Vec<OptionElement>) -> Combobox {
    Combobox::new(options, settings().multiple(true))
}

pub fn key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

pub fn key_with(code: KeyCode, modifiers: KeyModifiers) -> KeyEvent {
    KeyEvent::new(code, modifiers)
}

pub fn type_text(combo: &mut Combobox, text: &str, now: Instant) {
    for ch in text.chars() {
        combo.handle_key(key(KeyCode::Char(ch)), now);
    }
}

pub fn change_count(events: &[ComboEvent]) -> usize {
    events
        .iter()
        .filter(|event| matches!(event, ComboEvent::Change { .. }))
        .count()
}

pub fn suggestion_values(combo: &Combobox) -> Vec<String> {
    combo
        .suggestions()
        .iter()
        .filter(|item| !item.is_placeholder())
        .map(|item| item.value.clone())
        .collect()
}
