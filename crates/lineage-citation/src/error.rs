//! Error types for citation handling

use thiserror::Error;

/// Errors that can occur while configuring citation output
///
/// Formatting itself never fails: broken citations render as empty text.
#[derive(Error, Debug)]
pub enum CitationError {
    /// Invalid configuration value
    #[error("Configuration error: {0}")]
    Config(String),

    /// TOML parsing error
    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    /// TOML serialization error
    #[error("TOML serialize error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),
}
