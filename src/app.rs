//! Terminal host around one combobox
//!
//! Owns the widget, an optional remote provider feed and a "Done" button, and
//! decides when the program ends and what it prints.

mod events;
mod output;
mod render;
mod state;

pub use output::OutputFormat;
pub use state::{App, ExitAction, Focus};
