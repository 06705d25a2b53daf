//! Error types for Wick

use thiserror::Error;

/// The main error type for Wick operations
#[derive(Debug, Error)]
pub enum WickError {
    #[error("Unknown property: {0}")]
    UnknownProperty(String),

    #[error("Property decode error: {0}")]
    Decode(String),

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(String),
}

/// Result type alias for Wick operations
pub type Result<T> = std::result::Result<T, WickError>;

impl From<toml::de::Error> for WickError {
    fn from(err: toml::de::Error) -> Self {
        WickError::TomlParse(err.to_string())
    }
}
