//! Suggestion session
//!
//! Holds the transient suggestion list shown under the input, the loading flag,
//! the open/closed state of the list and the debounce timers that decide when
//! a new suggestion round fires.

mod debouncer;
mod item;
mod request;
mod session;

pub use debouncer::Debouncer;
pub use item::{NO_RESULTS_TEXT, Suggestion, SuggestionId, SuggestionItem, SuggestionKind};
pub use request::{Claim, SuggestionProvider, SuggestionRequest};
pub use session::{AppendOutcome, SCROLL_DEBOUNCE, SuggestionSession};
