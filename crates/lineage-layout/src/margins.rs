//! Page margins, in points

use crate::error::LayoutError;
use serde::{Deserialize, Serialize};

/// Page margins used to derive the layout boxes
///
/// Defaults: left 51pt (about 18 mm), right 28pt, top 76pt, bottom 60pt,
/// header 14pt, footer 28pt.
///
/// # Examples
///
/// ```
/// use lineage_layout::Margins;
///
/// let margins = Margins::default();
/// assert_eq!(margins.left, 51.0);
/// assert!(margins.validate().is_ok());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Margins {
    /// Left margin
    pub left: f64,

    /// Right margin
    pub right: f64,

    /// Top margin, including the header
    pub top: f64,

    /// Bottom margin, including the footer
    pub bottom: f64,

    /// Header margin
    pub header: f64,

    /// Footer margin
    pub footer: f64,
}

impl Default for Margins {
    fn default() -> Self {
        Self {
            left: 51.0,
            right: 28.0,
            top: 76.0,
            bottom: 60.0,
            header: 14.0,
            footer: 28.0,
        }
    }
}

impl Margins {
    /// Validate the margins
    ///
    /// All margins must be finite and non-negative, and the header and footer
    /// must fit inside the top and bottom margins.
    pub fn validate(&self) -> Result<(), LayoutError> {
        let all = [
            ("left", self.left),
            ("right", self.right),
            ("top", self.top),
            ("bottom", self.bottom),
            ("header", self.header),
            ("footer", self.footer),
        ];
        for (name, value) in all {
            if !value.is_finite() || value < 0.0 {
                return Err(LayoutError::Config(format!(
                    "{} margin must be a non-negative number, got {}",
                    name, value
                )));
            }
        }

        if self.header > self.top {
            return Err(LayoutError::Config(
                "header margin cannot exceed top margin".to_string(),
            ));
        }
        if self.footer > self.bottom {
            return Err(LayoutError::Config(
                "footer margin cannot exceed bottom margin".to_string(),
            ));
        }
        Ok(())
    }

    /// Load margins from TOML string; missing fields keep their defaults
    pub fn from_toml(toml_str: &str) -> Result<Self, LayoutError> {
        let margins: Self = toml::from_str(toml_str)
            .map_err(|e| LayoutError::Config(format!("Failed to parse TOML: {}", e)))?;
        margins.validate()?;
        Ok(margins)
    }
}
