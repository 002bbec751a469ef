use std::fs::File;
use std::io::{self, Read};
use std::path::Path;

use serde::Deserialize;

use crate::error::ComboError;
use crate::options::OptionElement;

/// Layout of a declared option list
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OptionFormat {
    /// `[[option]]` tables
    Toml,
    /// Array of option objects or plain strings
    Json,
    /// One `value<TAB>content` per line
    Lines,
}

impl OptionFormat {
    fn name(self) -> &'static str {
        match self {
            OptionFormat::Toml => "TOML",
            OptionFormat::Json => "JSON",
            OptionFormat::Lines => "line",
        }
    }

    fn from_path(path: &Path) -> Option<Self> {
        match path.extension()?.to_str()?.to_ascii_lowercase().as_str() {
            "toml" => Some(OptionFormat::Toml),
            "json" => Some(OptionFormat::Json),
            "txt" | "tsv" => Some(OptionFormat::Lines),
            _ => None,
        }
    }

    /// Guess from the first significant characters
    pub fn sniff(text: &str) -> Self {
        let trimmed = text.trim_start();
        if trimmed.starts_with("[[") {
            OptionFormat::Toml
        } else if trimmed.starts_with('[') {
            OptionFormat::Json
        } else {
            OptionFormat::Lines
        }
    }
}

#[derive(Deserialize)]
struct TomlOptions {
    #[serde(default)]
    option: Vec<OptionElement>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum JsonOption {
    Value(String),
    Element(OptionElement),
}

/// Read declared options from stdin or a file
pub struct OptionReader;

impl OptionReader {
    /// Read options from `path`, or stdin when `None`
    ///
    /// The format follows the file extension, else the content.
    pub fn read_options(path: Option<&Path>) -> Result<Vec<OptionElement>, ComboError> {
        let (text, format) = match path {
            Some(file_path) => {
                let mut file = File::open(file_path)?;
                let mut contents = String::new();
                file.read_to_string(&mut contents)?;
                (contents, OptionFormat::from_path(file_path))
            }
            None => {
                let mut buffer = String::new();
                io::stdin().read_to_string(&mut buffer)?;
                (buffer, None)
            }
        };

        let format = format.unwrap_or_else(|| OptionFormat::sniff(&text));
        Self::parse_options(&text, format)
    }

    pub fn parse_options(text: &str, format: OptionFormat) -> Result<Vec<OptionElement>, ComboError> {
        let invalid = |message: String| ComboError::InvalidOptions {
            format: format.name(),
            message,
        };

        let options = match format {
            OptionFormat::Toml => {
                toml::from_str::<TomlOptions>(text)
                    .map_err(|e| invalid(e.message().to_string()))?
                    .option
            }
            OptionFormat::Json => serde_json::from_str::<Vec<JsonOption>>(text)
                .map_err(|e| invalid(e.to_string()))?
                .into_iter()
                .map(|option| match option {
                    JsonOption::Value(value) => OptionElement::new(value, ""),
                    JsonOption::Element(element) => element,
                })
                .collect(),
            OptionFormat::Lines => parse_lines(text),
        };

        if let Some(position) = options.iter().position(|option| option.value.is_empty()) {
            return Err(invalid(format!("option {} has an empty value", position + 1)));
        }
        if options.is_empty() {
            return Err(ComboError::NoOptions);
        }
        Ok(options)
    }
}

/// Blank lines and lines starting with `#` are skipped
fn parse_lines(text: &str) -> Vec<OptionElement> {
    text.lines()
        .map(|line| line.trim_end_matches('\r'))
        .filter(|line| !line.trim().is_empty() && !line.trim_start().starts_with('#'))
        .map(|line| match line.split_once('\t') {
            Some((value, content)) => OptionElement::new(value.trim(), content.trim()),
            None => OptionElement::new(line.trim(), ""),
        })
        .collect()
}

#[cfg(test)]
#[path = "reader_tests.rs"]
mod reader_tests;
