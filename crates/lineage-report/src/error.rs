//! Report error types

use lineage_citation::CitationError;
use lineage_layout::LayoutError;
use thiserror::Error;

/// Errors that can occur while building or running a report
#[derive(Error, Debug)]
pub enum ReportError {
    /// Page geometry could not be computed
    #[error("Layout error: {0}")]
    Layout(#[from] LayoutError),

    /// Citation markup is invalid
    #[error("Citation error: {0}")]
    Citation(#[from] CitationError),

    /// Report data could not be serialized
    #[error("Serialization error: {0}")]
    Json(#[from] serde_json::Error),

    /// No report with this name is registered
    #[error("Unknown report: {0}")]
    UnknownReport(String),

    /// The subject input was left empty
    #[error("Missing input: {0}")]
    MissingInput(String),

    /// The subject record does not exist
    #[error("Record not found: {0}")]
    RecordNotFound(String),

    /// The subject record has the wrong type
    #[error("Record {xref} is a {found}, expected {expected}")]
    WrongRecordType {
        /// Record identifier
        xref: String,
        /// Tag the report needs
        expected: &'static str,
        /// Tag the record has
        found: String,
    },
}
