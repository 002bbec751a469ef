//! Autocomplete combobox engine
//!
//! `Combobox` owns the declared options, the committed selection, the text
//! input and the suggestion list, and keeps them consistent while keys, pointer
//! events, focus changes and programmatic edits arrive. It never draws; see
//! `render` for the terminal view.

mod attributes;
mod events;
mod focus;
mod keys;
mod mouse;
mod resolution;
mod selection_ops;
mod session_ops;
mod settings;
mod state;

pub use events::ComboEvent;
pub use focus::FocusTarget;
pub use resolution::CommitSource;
pub use settings::{DEFAULT_DELAY, Settings};
pub use state::{Combobox, HiddenField};

#[cfg(test)]
#[path = "combobox/test_support.rs"]
mod test_support;




#[cfg(test)]
#[path = "combobox/session_ops_tests.rs"]
mod session_ops_tests;


#[cfg(test)]
#[path = "combobox/keys_tests.rs"]
mod keys_tests;
