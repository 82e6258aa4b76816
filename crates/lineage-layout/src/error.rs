//! Layout error types

use thiserror::Error;

/// Errors that can occur while computing page geometry
#[derive(Error, Debug, PartialEq)]
pub enum LayoutError {
    /// Custom page dimension below the printable floor
    #[error("Custom page {dimension} must be at least {minimum}pt, got {value}pt")]
    PageTooSmall {
        /// Which dimension was rejected ("width" or "height")
        dimension: &'static str,
        /// Supplied value in points
        value: f64,
        /// Smallest accepted value in points
        minimum: f64,
    },

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}
