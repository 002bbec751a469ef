//! Formatting the committed values for stdout

use crate::combobox::Combobox;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum OutputFormat {
    /// One value per line
    #[default]
    Lines,
    /// JSON array of values
    Json,
    /// `value<TAB>text` per value
    Pairs,
}

impl OutputFormat {
    pub fn format(self, combo: &Combobox) -> String {
        let values = combo.values();
        match self {
            OutputFormat::Lines => values.join("\n"),
            OutputFormat::Json => serde_json::to_string(values).unwrap_or_else(|_| "[]".to_string()),
            OutputFormat::Pairs => values
                .iter()
                .map(|value| format!("{}\t{}", value, display_text(combo, value)))
                .collect::<Vec<_>>()
                .join("\n"),
        }
    }
}

/// Text shown for a committed value
pub fn display_text(combo: &Combobox, value: &str) -> String {
    if let Some(tag) = combo.tags().get(value) {
        return tag.label.clone();
    }
    combo
        .index()
        .lookup(value)
        .map(|entry| entry.text.clone())
        .unwrap_or_else(|| value.to_string())
}
