//! Tests for suggestion rounds, loading and pagination

use super::test_support::*;
use super::*;
use crate::suggestions::{Claim, Suggestion, SuggestionRequest};
use insta::assert_debug_snapshot;
use ratatui::crossterm::event::KeyCode;
use std::cell::RefCell;
use std::rc::Rc;
use std::time::{Duration, Instant};

type RequestLog = Rc<RefCell<Vec<SuggestionRequest>>>;

fn recording_provider(claim: Claim) -> (RequestLog, impl FnMut(&SuggestionRequest) -> Claim) {
    let seen = Rc::new(RefCell::new(Vec::new()));
    let log = Rc::clone(&seen);
    let provider = move |request: &SuggestionRequest| {
        log.borrow_mut().push(request.clone());
        claim
    };
    (seen, provider)
}

fn requests(events: &[ComboEvent]) -> Vec<(String, usize, bool)> {
    events
        .iter()
        .filter_map(|event| match event {
            ComboEvent::SuggestionsRequested { request, claimed } => {
                Some((request.query.clone(), request.start, *claimed))
            }
            _ => None,
        })
        .collect()
}

#[test]
fn test_typing_filters_locally() {
    let now = Instant::now();
    let mut combo = single(countries());
    type_text(&mut combo, "Unit", now);

    assert!(combo.is_open());
    assert_eq!(suggestion_values(&combo), vec!["us", "uk"]);
    assert_eq!(combo.trigger_label(), "Show 2 suggestions");
}

#[test]
fn test_starts_with_mode() {
    let now = Instant::now();
    let mut combo = Combobox::new(
        countries(),
        settings().match_mode(crate::matcher::MatchMode::StartsWith),
    );
    type_text(&mut combo, "an", now);

    // "Canada" and "France" contain "an" but do not start with it
    assert!(suggestion_values(&combo).is_empty());
    assert!(combo.suggestions()[0].is_placeholder());
}

#[test]
fn test_custom_predicate_filters() {
    let now = Instant::now();
    let mode = crate::matcher::MatchMode::custom(|option, query| option.value == query);
    let mut combo = Combobox::new(countries(), settings().match_mode(mode));
    type_text(&mut combo, "mx", now);

    assert_eq!(suggestion_values(&combo), vec!["mx"]);
}

#[test]
fn test_request_carries_normalized_query() {
    let now = Instant::now();
    let mut combo = single(countries());
    type_text(&mut combo, " CA", now);

    let events = combo.drain_events();
    let last = requests(&events).pop();
    assert_eq!(last, Some(("ca".to_string(), 0, false)));
}

#[test]
fn test_debounce_collapses_keystrokes() {
    let start = Instant::now();
    let mut combo = Combobox::new(countries(), Settings::default().delay(Duration::from_millis(50)));

    combo.handle_key(key(KeyCode::Char('c')), start);
    combo.tick(start + Duration::from_millis(10));
    combo.handle_key(key(KeyCode::Char('a')), start + Duration::from_millis(10));
    combo.tick(start + Duration::from_millis(20));
    combo.handle_key(key(KeyCode::Char('n')), start + Duration::from_millis(20));

    combo.tick(start + Duration::from_millis(69));
    assert!(requests(&combo.drain_events()).is_empty());
    assert!(!combo.is_open());

    assert_eq!(combo.next_deadline(), Some(start + Duration::from_millis(70)));
    combo.tick(start + Duration::from_millis(70));
    assert_eq!(requests(&combo.drain_events()), vec![("can".to_string(), 0, false)]);
    assert_eq!(suggestion_values(&combo), vec!["ca"]);

    combo.tick(start + Duration::from_millis(500));
    assert!(requests(&combo.drain_events()).is_empty());
}

#[test]
fn test_hide_cancels_pending_round() {
    let start = Instant::now();
    let mut combo = Combobox::new(countries(), Settings::default());
    combo.handle_key(key(KeyCode::Char('c')), start);
    combo.hide_suggestions();
    combo.tick(start + Duration::from_secs(1));

    assert!(!combo.is_open());
    assert!(requests(&combo.drain_events()).is_empty());
}

#[test]
fn test_typing_clears_invalid() {
    let now = Instant::now();
    let mut combo = single(countries());
    combo.set_invalid(true);
    type_text(&mut combo, "x", now);
    assert!(!combo.is_invalid());
}

#[test]
fn test_claimed_round_waits_for_results() {
    let now = Instant::now();
    let (seen, provider) = recording_provider(Claim::Claimed);
    let mut combo = single(countries());
    combo.set_provider(provider);

    type_text(&mut combo, "ger", now);

    assert!(combo.is_open());
    assert!(combo.is_loading());
    assert!(combo.suggestions().is_empty());
    assert_eq!(seen.borrow().last().map(|r| r.query.as_str()), Some("ger"));

    combo.add_suggestions(vec![Suggestion::new("de", "Germany")], true);
    assert!(!combo.is_loading());
    assert_eq!(suggestion_values(&combo), vec!["de"]);
    assert_eq!(combo.trigger_label(), "Show suggestion");
}

#[test]
fn test_declining_provider_falls_back_to_local() {
    let now = Instant::now();
    let (seen, provider) = recording_provider(Claim::Declined);
    let mut combo = single(countries());
    combo.set_provider(provider);
    type_text(&mut combo, "fra", now);

    assert_eq!(seen.borrow().len(), 3);
    assert_eq!(suggestion_values(&combo), vec!["fr"]);
    assert!(!combo.is_loading());
}

#[test]
fn test_results_after_dismissal_are_dropped() {
    let now = Instant::now();
    let (_seen, provider) = recording_provider(Claim::Claimed);
    let mut combo = single(countries());
    combo.set_provider(provider);
    type_text(&mut combo, "g", now);

    combo.hide_suggestions();
    combo.add_suggestions(vec![Suggestion::new("de", "Germany")], true);

    assert!(combo.suggestions().is_empty());
    assert!(!combo.is_open());
    assert!(!combo.is_loading());
}

#[test]
fn test_page_results_after_close_append_without_placeholder() {
    let mut combo = single(countries());
    combo.show_suggestions();
    assert_eq!(combo.suggestions().len(), 5);
    combo.hide_suggestions();

    combo.add_suggestions(vec![Suggestion::new("de", "Germany")], false);
    combo.add_suggestions(Vec::new(), false);

    assert_eq!(combo.suggestions().len(), 6);
    assert!(!combo.suggestions().iter().any(|item| item.is_placeholder()));
}

#[test]
fn test_multi_suppresses_selected_values() {
    let now = Instant::now();
    let mut combo = multi(countries());
    combo.set_values(["us"]);
    type_text(&mut combo, "united", now);

    assert_eq!(suggestion_values(&combo), vec!["uk"]);
}

#[test]
fn test_no_results_placeholder() {
    let now = Instant::now();
    let mut combo = single(countries());
    type_text(&mut combo, "zzz", now);

    assert_debug_snapshot!(
        combo.suggestions().iter().map(|i| (&i.text, i.disabled)).collect::<Vec<_>>(),
        @r#"
    [
        (
            "No matching results.",
            true,
        ),
    ]
    "#
    );
    assert_eq!(combo.trigger_label(), "Show suggestions");
    assert_eq!(combo.focused_suggestion(), None);
}

#[test]
fn test_add_suggestions_empty_clear_yields_placeholder() {
    let mut combo = single(countries());
    combo.add_suggestions(Vec::new(), true);

    assert_eq!(combo.suggestions().len(), 1);
    assert!(combo.suggestions()[0].disabled);
}

#[test]
fn test_append_keeps_virtual_focus() {
    let mut combo = single(countries());
    combo.show_suggestions();
    combo.handle_key(key(KeyCode::Down), Instant::now());
    let focused = combo.focused_suggestion();
    assert!(focused.is_some());

    combo.add_suggestions(vec![Suggestion::new("de", "Germany")], false);
    assert_eq!(combo.focused_suggestion(), focused);

    combo.add_suggestions(vec![Suggestion::new("de", "Germany")], true);
    assert_eq!(combo.focused_suggestion(), None);
}

#[test]
fn test_scroll_near_bottom_requests_next_page() {
    let start = Instant::now();
    let (seen, provider) = recording_provider(Claim::Declined);
    let mut combo = single(countries());
    combo.set_provider(provider);
    combo.show_suggestions();
    let rows = combo.list_rows();
    combo.list_scroll_mut().update_bounds(rows, 2);

    combo.list_scroll_mut().scroll_down(1);
    combo.on_list_scroll(start);
    combo.tick(start + Duration::from_millis(50));
    assert_eq!(seen.borrow().len(), 1);

    combo.tick(start + Duration::from_millis(100));
    let log = seen.borrow();
    assert_eq!(log.len(), 2);
    assert_eq!(log[1].start, 5);
    assert_eq!(log[1].round, log[0].round);
}

#[test]
fn test_scroll_far_from_bottom_requests_nothing() {
    let start = Instant::now();
    let (seen, provider) = recording_provider(Claim::Declined);
    let mut combo = single(countries());
    combo.set_provider(provider);
    combo.show_suggestions();
    combo.add_suggestions((0..20).map(|i| Suggestion::new(format!("v{i}"), "")).collect(), false);
    let rows = combo.list_rows();
    combo.list_scroll_mut().update_bounds(rows, 5);

    combo.on_list_scroll(start);
    combo.tick(start + SCROLL_WAIT);
    assert_eq!(seen.borrow().len(), 1);
}

const SCROLL_WAIT: Duration = Duration::from_millis(100);

#[test]
fn test_claimed_page_sets_loading() {
    let start = Instant::now();
    let (_seen, provider) = recording_provider(Claim::Claimed);
    let mut combo = single(countries());
    combo.set_provider(provider);
    combo.show_suggestions();
    combo.add_suggestions(vec![Suggestion::new("a", "A"), Suggestion::new("b", "B")], true);
    assert!(!combo.is_loading());

    let rows = combo.list_rows();
    combo.list_scroll_mut().update_bounds(rows, 5);
    combo.on_list_scroll(start);
    combo.tick(start + SCROLL_WAIT);

    assert!(combo.is_loading());
    assert_eq!(combo.list_rows(), 3);
}

#[test]
fn test_loading_at_bottom_pins_loading_row() {
    let now = Instant::now();
    let mut combo = single(countries());
    combo.show_suggestions();
    let rows = combo.list_rows();
    combo.list_scroll_mut().update_bounds(rows, 3);
    combo.list_scroll_mut().jump_to_bottom();

    combo.set_loading(true);
    let rows = combo.list_rows();
    combo.list_scroll_mut().update_bounds(rows, 3);
    combo.flush_frame(now);

    assert_eq!(combo.list_scroll().offset, 3);
    assert!(combo.list_scroll().is_at_bottom());
}

#[test]
fn test_clear_suggestions_resets_label() {
    let mut combo = single(countries());
    combo.show_suggestions();
    assert_eq!(combo.trigger_label(), "Show 5 suggestions");

    combo.clear_suggestions();
    assert!(combo.suggestions().is_empty());
    assert_eq!(combo.trigger_label(), "Show suggestions");
}

#[test]
fn test_hide_emits_signal() {
    let mut combo = single(countries());
    combo.show_suggestions();
    combo.drain_events();
    combo.hide_suggestions();

    assert_eq!(combo.drain_events(), vec![ComboEvent::SuggestionsHidden]);
}

#[test]
fn test_hide_when_closed_is_silent() {
    let mut combo = single(countries());
    combo.hide_suggestions();
    assert!(combo.drain_events().is_empty());

    combo.set_input_text("Canada");
    combo.commit(CommitSource::Enter);
    let events = combo.drain_events();
    assert!(!events.contains(&ComboEvent::SuggestionsHidden));
    assert_eq!(change_count(&events), 1);
}
