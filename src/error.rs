use thiserror::Error;

/// Custom error types for comboline
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ComboError {
    #[error("Invalid {format} option list: {message}")]
    InvalidOptions { format: &'static str, message: String },

    #[error("Option list is empty. Provide options as TOML, JSON or one `value<TAB>label` per line.")]
    NoOptions,

    #[error("Invalid attribute assignment `{0}`, expected key=value")]
    InvalidAttribute(String),

    #[error("IO error: {0}")]
    Io(String),
}

impl From<std::io::Error> for ComboError {
    fn from(err: std::io::Error) -> Self {
        ComboError::Io(err.to_string())
    }
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod error_tests;
