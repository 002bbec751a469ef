//! Terminal autocomplete combobox
//!
//! A text input paired with a suggestion list, in single-value or tagged
//! multi-value mode, with optional strict selection and paginated remote
//! suggestions.

pub mod app;
pub mod combobox;
pub mod config;
pub mod error;
pub mod frame;
pub mod input;
pub mod layout;
pub mod markup;
pub mod matcher;
pub mod navigator;
pub mod observer;
pub mod options;
pub mod provider;
pub mod render;
pub mod scroll;
pub mod selection;
pub mod suggestions;
pub mod widgets;

pub use combobox::{ComboEvent, Combobox, CommitSource, FocusTarget, Settings};
pub use error::ComboError;
pub use options::OptionElement;
pub use suggestions::{Claim, Suggestion, SuggestionProvider, SuggestionRequest};
