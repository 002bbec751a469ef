// Configuration type definitions

use std::time::Duration;

use serde::Deserialize;

use crate::combobox::{DEFAULT_DELAY, Settings};
use crate::matcher::MatchMode;
use crate::provider::RemoteSettings;

/// Built-in suggestion filter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum MatchConfig {
    StartsWith,
    #[default]
    Contains,
}

impl From<MatchConfig> for MatchMode {
    fn from(value: MatchConfig) -> Self {
        match value {
            MatchConfig::StartsWith => MatchMode::StartsWith,
            MatchConfig::Contains => MatchMode::Contains,
        }
    }
}

fn default_delay() -> u64 {
    DEFAULT_DELAY.as_millis() as u64
}

/// Widget defaults section
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct WidgetConfig {
    #[serde(default)]
    pub multiple: bool,
    #[serde(default)]
    pub force_selection: bool,
    /// Typing delay in milliseconds
    #[serde(default = "default_delay")]
    pub delay: u64,
    #[serde(default, rename = "match")]
    pub match_mode: MatchConfig,
    #[serde(default)]
    pub placeholder: String,
    #[serde(default)]
    pub max_length: Option<usize>,
    #[serde(default)]
    pub icon: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub required: bool,
}

impl Default for WidgetConfig {
    fn default() -> Self {
        WidgetConfig {
            multiple: false,
            force_selection: false,
            delay: default_delay(),
            match_mode: MatchConfig::Contains,
            placeholder: String::new(),
            max_length: None,
            icon: String::new(),
            name: String::new(),
            required: false,
        }
    }
}

impl WidgetConfig {
    pub fn settings(&self) -> Settings {
        Settings {
            multiple: self.multiple,
            delay: Duration::from_millis(self.delay),
            force_selection: self.force_selection,
            match_mode: self.match_mode.into(),
            placeholder: self.placeholder.clone(),
            max_length: self.max_length,
            icon: self.icon.clone(),
            name: self.name.clone(),
            required: self.required,
            ..Settings::default()
        }
    }
}

fn default_page_size() -> usize {
    20
}

fn default_latency_ms() -> u64 {
    150
}

/// Remote provider section
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RemoteConfig {
    #[serde(default = "default_page_size")]
    pub page_size: usize,
    #[serde(default = "default_latency_ms")]
    pub latency_ms: u64,
}

impl Default for RemoteConfig {
    fn default() -> Self {
        RemoteConfig {
            page_size: default_page_size(),
            latency_ms: default_latency_ms(),
        }
    }
}

impl RemoteConfig {
    pub fn settings(&self) -> RemoteSettings {
        RemoteSettings {
            page_size: self.page_size.max(1),
            latency: Duration::from_millis(self.latency_ms),
        }
    }
}

/// Root configuration structure
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub widget: WidgetConfig,
    #[serde(default)]
    pub remote: RemoteConfig,
}
