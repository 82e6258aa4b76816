//! Configuration for citation formatting

use crate::error::CitationError;
use serde::{Deserialize, Serialize};

/// Where the citation's page and text detail is placed
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PagePlacement {
    /// After the complete bibliographic string: `Author, Title (Publisher): page text`
    #[default]
    Trailing,
    /// Right after the first recognized source fact (`AUTH`, `TITL` or `PUBL`)
    AfterFirstFact,
}

/// Configuration for the citation formatter
///
/// The title markup is a rendering-layer convention: HTML templates want
/// `<u>...</u>`, plain text output wants nothing. Fields missing from a
/// TOML table keep the HTML defaults.
///
/// # Examples
///
/// ```
/// use lineage_citation::{CitationConfig, PagePlacement};
///
/// let config = CitationConfig::default();
/// assert_eq!(config.title_open, "<u>");
/// assert_eq!(config.page_placement, PagePlacement::Trailing);
///
/// let config = CitationConfig::plain();
/// assert!(config.title_open.is_empty());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CitationConfig {
    /// Marker emitted before a source title
    pub title_open: String,

    /// Marker emitted after a source title
    pub title_close: String,

    /// Placement of page and text detail
    pub page_placement: PagePlacement,
}

impl Default for CitationConfig {
    /// HTML underline markup, trailing page detail
    fn default() -> Self {
        Self::html()
    }
}

impl CitationConfig {
    /// Underlined titles for HTML templates
    pub fn html() -> Self {
        Self::with_markup("<u>", "</u>")
    }

    /// Undecorated titles for plain text output
    pub fn plain() -> Self {
        Self::with_markup("", "")
    }

    /// Emphasized titles for Markdown output
    pub fn markdown() -> Self {
        Self::with_markup("_", "_")
    }

    /// Custom title markup with trailing page detail
    pub fn with_markup(open: impl Into<String>, close: impl Into<String>) -> Self {
        Self {
            title_open: open.into(),
            title_close: close.into(),
            page_placement: PagePlacement::Trailing,
        }
    }

    /// Validate the configuration
    ///
    /// Title markers come in pairs: both set or both empty.
    pub fn validate(&self) -> Result<(), CitationError> {
        if self.title_open.is_empty() != self.title_close.is_empty() {
            return Err(CitationError::Config(
                "title_open and title_close must both be set or both be empty".to_string(),
            ));
        }
        if self.title_open.contains('\n') || self.title_close.contains('\n') {
            return Err(CitationError::Config(
                "title markers cannot contain newlines".to_string(),
            ));
        }
        Ok(())
    }

    /// Load configuration from TOML string
    pub fn from_toml(toml_str: &str) -> Result<Self, CitationError> {
        let config: Self = toml::from_str(toml_str)?;
        config.validate()?;
        Ok(config)
    }

    /// Serialize configuration to TOML string
    pub fn to_toml(&self) -> Result<String, CitationError> {
        Ok(toml::to_string_pretty(self)?)
    }
}
