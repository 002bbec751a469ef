//! Declared option set and its lookup index
//!
//! `OptionSource` holds the declared options in order, the way a host lays them
//! out. `OptionIndex` is a cache rebuilt from the source and consulted for
//! value lookups, matching and strict-selection validation.

mod element;
mod index;
mod source;

pub use element::{OptionElement, OptionEntry};
pub use index::OptionIndex;
pub use source::OptionSource;
