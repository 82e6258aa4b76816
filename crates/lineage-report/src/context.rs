//! Request-scoped report context

use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Target output of a report run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputMode {
    /// Browser page
    #[default]
    Html,
    /// Printable document
    Pdf,
}

impl FromStr for OutputMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "html" => Ok(OutputMode::Html),
            "pdf" => Ok(OutputMode::Pdf),
            _ => Err(format!("Invalid output mode: {}", s)),
        }
    }
}

/// What a report run needs to know about its caller
///
/// Passed explicitly; nothing in the engine reads global state.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportContext {
    /// Page title; empty means the report's own title
    pub title: String,

    /// Output target
    pub output: OutputMode,
}

impl ReportContext {
    /// Context with a title and the default output
    pub fn titled(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            output: OutputMode::default(),
        }
    }
}
