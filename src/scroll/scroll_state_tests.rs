//! Tests for ScrollState

use super::*;
use proptest::prelude::*;

#[test]
fn test_update_bounds_clamps_offset() {
    let mut scroll = ScrollState::new();
    scroll.update_bounds(20, 5);
    scroll.jump_to_bottom();
    assert_eq!(scroll.offset, 15);

    scroll.update_bounds(8, 5);
    assert_eq!(scroll.offset, 3);
    assert_eq!(scroll.max_offset, 3);
}

#[test]
fn test_short_content_has_no_scroll() {
    let mut scroll = ScrollState::new();
    scroll.update_bounds(3, 5);
    scroll.scroll_down(10);

    assert_eq!(scroll.offset, 0);
    assert!(scroll.is_at_bottom());
}

#[test]
fn test_near_bottom_threshold() {
    let mut scroll = ScrollState::new();
    scroll.update_bounds(20, 5);

    scroll.offset = 12;
    assert!(!scroll.is_near_bottom(NEAR_BOTTOM_ROWS));

    scroll.offset = 13;
    assert!(scroll.is_near_bottom(NEAR_BOTTOM_ROWS));
    assert!(!scroll.is_at_bottom());
}

#[test]
fn test_ensure_visible_below_viewport() {
    let mut scroll = ScrollState::new();
    scroll.update_bounds(20, 5);

    assert!(scroll.ensure_visible(7));
    assert_eq!(scroll.offset, 3);

    assert!(!scroll.ensure_visible(5));
    assert_eq!(scroll.offset, 3);
}

#[test]
fn test_ensure_visible_above_viewport() {
    let mut scroll = ScrollState::new();
    scroll.update_bounds(20, 5);
    scroll.offset = 10;

    assert!(scroll.ensure_visible(2));
    assert_eq!(scroll.offset, 2);
}

#[test]
fn test_ensure_visible_without_viewport() {
    let mut scroll = ScrollState::new();
    assert!(!scroll.ensure_visible(4));
}

// Feature: list scrolling, Property 1: ensure_visible puts the row on screen
proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    #[test]
    fn prop_ensure_visible_contains_row(
        rows in 1usize..200,
        viewport in 1u16..30,
        start in 0u16..200,
        target_seed in any::<usize>(),
    ) {
        let mut scroll = ScrollState::new();
        scroll.update_bounds(rows, viewport);
        scroll.scroll_down(start);

        let target = target_seed % rows;
        scroll.ensure_visible(target);

        let target = target as u16;
        prop_assert!(scroll.offset <= target);
        prop_assert!(target < scroll.offset + viewport);
        prop_assert!(scroll.offset <= scroll.max_offset);
    }
}
