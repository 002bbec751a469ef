//! Tests for keyboard handling

use super::test_support::*;
use super::*;
use ratatui::crossterm::event::{KeyCode, KeyModifiers};
use std::time::Instant;

fn focused_value(combo: &Combobox) -> Option<String> {
    let id = combo.focused_suggestion()?;
    combo
        .suggestions()
        .iter()
        .find(|item| item.id == id)
        .map(|item| item.value.clone())
}

#[test]
fn test_down_opens_without_focusing() {
    let now = Instant::now();
    let mut combo = single(countries());

    assert!(combo.handle_key(key(KeyCode::Down), now));
    assert!(combo.is_open());
    assert_eq!(combo.focused_suggestion(), None);

    combo.handle_key(key(KeyCode::Down), now);
    assert_eq!(focused_value(&combo).as_deref(), Some("us"));
}

#[test]
fn test_up_when_closed_opens() {
    let now = Instant::now();
    let mut combo = single(countries());
    combo.handle_key(key(KeyCode::Up), now);

    assert!(combo.is_open());
    assert_eq!(combo.focused_suggestion(), None);
}

#[test]
fn test_up_wraps_to_last_then_back_to_input() {
    let now = Instant::now();
    let mut combo = single(countries());
    combo.show_suggestions();

    combo.handle_key(key(KeyCode::Up), now);
    assert_eq!(focused_value(&combo).as_deref(), Some("mx"));

    combo.handle_key(key(KeyCode::Down), now);
    assert_eq!(focused_value(&combo).as_deref(), Some("mx"));

    for _ in 0..4 {
        combo.handle_key(key(KeyCode::Up), now);
    }
    assert_eq!(focused_value(&combo).as_deref(), Some("us"));
    combo.handle_key(key(KeyCode::Up), now);
    assert_eq!(combo.focused_suggestion(), None);
    assert!(combo.is_open());
}

#[test]
fn test_alt_up_closes() {
    let now = Instant::now();
    let mut combo = single(countries());
    combo.show_suggestions();
    combo.handle_key(key(KeyCode::Down), now);

    combo.handle_key(key_with(KeyCode::Up, KeyModifiers::ALT), now);
    assert!(!combo.is_open());
    assert_eq!(combo.focused_suggestion(), None);
}

#[test]
fn test_tab_trapped_only_with_virtual_focus() {
    let now = Instant::now();
    let mut combo = single(countries());
    assert!(!combo.handle_key(key(KeyCode::Tab), now));

    combo.show_suggestions();
    assert!(!combo.handle_key(key(KeyCode::Tab), now));

    combo.handle_key(key(KeyCode::Down), now);
    assert!(combo.handle_key(key(KeyCode::Tab), now));
    assert!(combo.is_open());
}

#[test]
fn test_back_tab_closes_and_returns_to_input() {
    let now = Instant::now();
    let mut combo = single(countries());
    combo.show_suggestions();
    combo.focus(FocusTarget::List);

    assert!(combo.handle_key(key(KeyCode::BackTab), now));
    assert!(!combo.is_open());
    assert_eq!(combo.real_focus(), FocusTarget::Input);
}

#[test]
fn test_escape_hides_or_passes_through() {
    let now = Instant::now();
    let mut combo = single(countries());
    assert!(!combo.handle_key(key(KeyCode::Esc), now));

    combo.show_suggestions();
    assert!(combo.handle_key(key(KeyCode::Esc), now));
    assert!(!combo.is_open());
    assert_eq!(combo.real_focus(), FocusTarget::Input);
}

#[test]
fn test_ctrl_space_toggles() {
    let now = Instant::now();
    let mut combo = single(countries());
    let ctrl_space = key_with(KeyCode::Char(' '), KeyModifiers::CONTROL);

    combo.handle_key(ctrl_space, now);
    assert!(combo.is_open());
    assert_eq!(combo.input_text(), "");

    combo.handle_key(ctrl_space, now);
    assert!(!combo.is_open());
}

#[test]
fn test_trigger_focus_enter_toggles() {
    let now = Instant::now();
    let mut combo = single(countries());
    combo.focus(FocusTarget::Trigger);

    assert!(combo.handle_key(key(KeyCode::Enter), now));
    assert!(combo.is_open());
    assert_eq!(combo.real_focus(), FocusTarget::Input);
}

#[test]
fn test_backspace_on_empty_input_removes_last_tag() {
    let now = Instant::now();
    let mut combo = multi(countries());
    combo.set_values(["us", "ca"]);
    combo.drain_events();

    combo.handle_key(key(KeyCode::Backspace), now);
    assert_eq!(combo.values(), &["us"]);
    assert_eq!(change_count(&combo.drain_events()), 1);
}

#[test]
fn test_backspace_edits_text_first() {
    let now = Instant::now();
    let mut combo = multi(countries());
    combo.set_values(["us"]);
    type_text(&mut combo, "ca", now);

    combo.handle_key(key(KeyCode::Backspace), now);
    assert_eq!(combo.input_text(), "c");
    assert_eq!(combo.values(), &["us"]);
}

#[test]
fn test_read_only_blocks_editing() {
    let now = Instant::now();
    let mut combo = single(countries());
    combo.set_value("ca");
    combo.set_read_only(true);

    assert!(!combo.handle_key(key(KeyCode::Char('x')), now));
    assert!(combo.handle_key(key(KeyCode::Left), now));
    assert_eq!(combo.input_text(), "Canada");

    combo.toggle_suggestions();
    assert!(!combo.is_open());
}

#[test]
fn test_max_length_caps_input() {
    let now = Instant::now();
    let mut combo = single(countries());
    combo.set_max_length(Some(3));
    type_text(&mut combo, "franc", now);

    assert_eq!(combo.input_text(), "fra");
}

#[test]
fn test_disabled_ignores_keys() {
    let now = Instant::now();
    let mut combo = single(countries());
    combo.set_disabled(true);

    assert!(!combo.handle_key(key(KeyCode::Down), now));
    assert!(!combo.handle_key(key(KeyCode::Char('a')), now));
    assert!(!combo.is_open());
    assert_eq!(combo.input_text(), "");
}

#[test]
fn test_enter_never_adds_a_line() {
    let now = Instant::now();
    let mut combo = single(countries());
    type_text(&mut combo, "zz", now);
    combo.handle_key(key_with(KeyCode::Char('m'), KeyModifiers::CONTROL), now);

    assert_eq!(combo.input().lines().len(), 1);
}

#[test]
fn test_down_scrolls_focused_entry_into_view() {
    let now = Instant::now();
    let mut combo = single(countries());
    combo.show_suggestions();
    let rows = combo.list_rows();
    combo.list_scroll_mut().update_bounds(rows, 2);

    for _ in 0..4 {
        combo.handle_key(key(KeyCode::Down), now);
    }
    combo.flush_frame(now);

    assert_eq!(focused_value(&combo).as_deref(), Some("fr"));
    assert_eq!(combo.list_scroll().offset, 2);
}

#[test]
fn test_paste_joins_lines_and_runs_a_round() {
    let now = Instant::now();
    let mut combo = single(countries());

    assert!(combo.handle_paste("Uni\nted", now));

    assert_eq!(combo.input_text(), "Uni ted");
    assert!(combo.is_open());
}

#[test]
fn test_paste_respects_max_length() {
    let now = Instant::now();
    let mut combo = single(countries());
    combo.set_max_length(Some(4));
    type_text(&mut combo, "ca", now);

    combo.handle_paste("nada", now);

    assert_eq!(combo.input_text(), "cana");
}

#[test]
fn test_paste_ignored_when_read_only() {
    let now = Instant::now();
    let mut combo = single(countries());
    combo.set_read_only(true);

    assert!(!combo.handle_paste("us", now));
    assert_eq!(combo.input_text(), "");
}
