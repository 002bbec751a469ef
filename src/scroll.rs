mod scroll_state;

pub use scroll_state::{NEAR_BOTTOM_ROWS, ScrollState};

#[cfg(test)]
#[path = "scroll/scroll_state_tests.rs"]
mod scroll_state_tests;
