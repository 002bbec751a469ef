//! Tests for option matching

use super::*;

fn option(content: &str) -> OptionEntry {
    OptionEntry::new("v", content)
}

#[test]
fn test_contains_is_case_insensitive() {
    let us = option("United States");
    assert!(matches(&us, "unit", &MatchMode::Contains));
    assert!(matches(&us, "STATES", &MatchMode::Contains));
    assert!(matches(&us, "d s", &MatchMode::Contains));
    assert!(!matches(&us, "canada", &MatchMode::Contains));
}

#[test]
fn test_starts_with_ignores_leading_whitespace() {
    let us = option("   United States");
    assert!(matches(&us, "united", &MatchMode::StartsWith));
    assert!(!matches(&us, "states", &MatchMode::StartsWith));
}

#[test]
fn test_empty_query_matches_everything() {
    let us = option("United States");
    assert!(matches(&us, "", &MatchMode::Contains));
    assert!(matches(&us, "", &MatchMode::StartsWith));
}

#[test]
fn test_tolerates_empty_text() {
    let empty = OptionEntry {
        value: "x".to_string(),
        ..OptionEntry::default()
    };
    assert!(matches(&empty, "", &MatchMode::Contains));
    assert!(!matches(&empty, "a", &MatchMode::Contains));
    assert!(!matches(&empty, "a", &MatchMode::StartsWith));
    assert!(!matches_exact(&empty, "a"));
}

#[test]
fn test_matches_against_plain_text_not_markup() {
    let bold = option("<b>Canada</b>").with_markup(true);
    assert!(matches(&bold, "canada", &MatchMode::StartsWith));
    assert!(!matches(&bold, "<b>", &MatchMode::Contains));
}

#[test]
fn test_plain_label_matched_literally() {
    let price = option("Price < 10 EUR");
    assert_eq!(price.text, "Price < 10 EUR");
    assert!(matches(&price, "< 10", &MatchMode::Contains));
}

#[test]
fn test_exact_trims_and_ignores_case() {
    let us = option("United States");
    assert!(matches_exact(&us, "united states"));
    assert!(matches_exact(&us, "  United States "));
    assert!(!matches_exact(&us, "United"));
}

#[test]
fn test_custom_predicate_replaces_mode() {
    let by_value = MatchMode::custom(|option, query| option.value == query);
    let us = OptionEntry::new("us", "United States");

    assert!(matches(&us, "us", &by_value));
    assert!(!matches(&us, "United", &by_value));
    assert!(by_value.is_custom());
}

#[test]
fn test_from_attr() {
    assert!(matches!(MatchMode::from_attr("StartsWith"), MatchMode::StartsWith));
    assert!(matches!(MatchMode::from_attr("contains"), MatchMode::Contains));
    assert!(matches!(MatchMode::from_attr("fuzzy"), MatchMode::Contains));
}

#[test]
fn test_attr_value_and_debug() {
    assert_eq!(MatchMode::StartsWith.attr_value(), Some("startswith"));
    assert_eq!(MatchMode::default().attr_value(), Some("contains"));

    let custom = MatchMode::custom(|_, _| true);
    assert_eq!(custom.attr_value(), None);
    assert_eq!(format!("{:?}", custom), "Custom(..)");
}
