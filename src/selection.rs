//! Selected values and their tags
//!
//! `SelectionStore` owns the ordered, duplicate-free list of selected values.
//! In multi-select mode each value has exactly one `Tag` in the `TagList`; in
//! single-select mode the list holds at most one value and no tags.

mod store;
mod tags;

pub use store::SelectionStore;
pub use tags::{Tag, TagList};
