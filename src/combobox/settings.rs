use std::time::Duration;

use crate::matcher::MatchMode;

/// Pause after the last keystroke before a suggestion round runs
pub const DEFAULT_DELAY: Duration = Duration::from_millis(200);

/// Properties declared when the widget is created
///
/// Applying them at construction keeps declared-selected options intact;
/// switching `multiple` later through the setter clears the selection.
#[derive(Debug, Clone)]
pub struct Settings {
    pub multiple: bool,
    pub delay: Duration,
    pub force_selection: bool,
    pub match_mode: MatchMode,
    pub placeholder: String,
    pub max_length: Option<usize>,
    pub icon: String,
    pub name: String,
    pub disabled: bool,
    pub read_only: bool,
    pub required: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            multiple: false,
            delay: DEFAULT_DELAY,
            force_selection: false,
            match_mode: MatchMode::default(),
            placeholder: String::new(),
            max_length: None,
            icon: String::new(),
            name: String::new(),
            disabled: false,
            read_only: false,
            required: false,
        }
    }
}

impl Settings {
    pub fn multiple(mut self, multiple: bool) -> Self {
        self.multiple = multiple;
        self
    }

    pub fn delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    pub fn force_selection(mut self, force_selection: bool) -> Self {
        self.force_selection = force_selection;
        self
    }

    pub fn match_mode(mut self, match_mode: MatchMode) -> Self {
        self.match_mode = match_mode;
        self
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }
}
