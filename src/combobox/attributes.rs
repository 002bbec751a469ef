//! String attribute surface
//!
//! Hosts that configure the widget from markup or key=value pairs go through
//! here. Reads are derived from the live properties, so setters reflect.

use std::time::Duration;

use super::state::Combobox;
use crate::error::ComboError;
use crate::matcher::MatchMode;

/// Attribute names understood by `set_attribute`
pub const ATTRIBUTES: &[&str] = &[
    "multiple",
    "delay",
    "forceselection",
    "placeholder",
    "maxlength",
    "icon",
    "match",
    "loading",
    "disabled",
    "readonly",
    "required",
    "invalid",
    "name",
    "value",
];

/// Presence means true, except for the literal "false"
fn boolean_attr(value: Option<&str>) -> bool {
    value.is_some_and(|value| value != "false")
}

impl Combobox {
    /// Apply an attribute; `None` removes it
    ///
    /// Unknown names are ignored with a warning.
    pub fn set_attribute(&mut self, name: &str, value: Option<&str>) {
        match name.to_ascii_lowercase().as_str() {
            "multiple" => self.set_multiple(boolean_attr(value)),
            "delay" => match value.map(|value| value.trim().parse::<u64>()) {
                Some(Ok(ms)) => self.set_delay(Duration::from_millis(ms)),
                _ => log::warn!("ignoring delay {:?}", value),
            },
            "forceselection" => self.set_force_selection(boolean_attr(value)),
            "placeholder" => self.set_placeholder(value.unwrap_or_default()),
            "maxlength" => self.set_max_length(value.and_then(|value| value.trim().parse().ok())),
            "icon" => self.set_icon(value.unwrap_or_default()),
            "match" => self.set_match_mode(MatchMode::from_attr(value.unwrap_or_default())),
            "loading" => self.set_loading(boolean_attr(value)),
            "disabled" => self.set_disabled(boolean_attr(value)),
            "readonly" => self.set_read_only(boolean_attr(value)),
            "required" => self.set_required(boolean_attr(value)),
            "invalid" => self.set_invalid(boolean_attr(value)),
            "name" => self.set_name(value.unwrap_or_default()),
            "value" => self.set_value(value.unwrap_or_default()),
            other => log::warn!("unknown attribute `{}`", other),
        }
    }

    /// Apply a `key=value` assignment; a bare key sets a boolean attribute
    pub fn apply_assignment(&mut self, assignment: &str) -> Result<(), ComboError> {
        let (name, value) = match assignment.split_once('=') {
            Some((name, value)) => (name.trim(), Some(value)),
            None => (assignment.trim(), Some("")),
        };
        if name.is_empty() || !ATTRIBUTES.contains(&name.to_ascii_lowercase().as_str()) {
            return Err(ComboError::InvalidAttribute(assignment.to_string()));
        }
        self.set_attribute(name, value);
        Ok(())
    }

    /// Current attribute value, `None` when absent
    pub fn attribute(&self, name: &str) -> Option<String> {
        let flag = |on: bool| on.then(String::new);
        match name.to_ascii_lowercase().as_str() {
            "multiple" => flag(self.multiple),
            "delay" => Some(self.delay().as_millis().to_string()),
            "forceselection" => flag(self.force_selection),
            "placeholder" => (!self.placeholder.is_empty()).then(|| self.placeholder.clone()),
            "maxlength" => self.max_length.map(|limit| limit.to_string()),
            "icon" => (!self.icon.is_empty()).then(|| self.icon.clone()),
            "match" => self.match_mode.attr_value().map(str::to_string),
            "loading" => flag(self.is_loading()),
            "disabled" => flag(self.disabled),
            "readonly" => flag(self.read_only),
            "required" => flag(self.required),
            "invalid" => flag(self.invalid),
            "name" => (!self.name.is_empty()).then(|| self.name.clone()),
            "value" => Some(self.value().to_string()),
            _ => None,
        }
    }
}
