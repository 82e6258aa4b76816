//! Configuration management for the CLI.

use crate::error::{CliError, Result};
use lineage_citation::CitationConfig;
use lineage_layout::Margins;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// CLI configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Global settings
    #[serde(default)]
    pub settings: Settings,

    /// Page margins in points
    #[serde(default)]
    pub margins: Margins,

    /// Citation markup
    #[serde(default)]
    pub citation: CitationConfig,
}

/// Global CLI settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Enable colored output
    #[serde(default = "default_true")]
    pub color: bool,

    /// Default output format
    #[serde(default = "default_format")]
    pub format: OutputFormat,

    /// Paper size used when a command names none
    #[serde(default = "default_page_size")]
    pub page_size: String,
}

/// Output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Table format
    Table,
    /// JSON format
    Json,
}

impl From<crate::cli::CliFormat> for OutputFormat {
    fn from(format: crate::cli::CliFormat) -> Self {
        match format {
            crate::cli::CliFormat::Table => OutputFormat::Table,
            crate::cli::CliFormat::Json => OutputFormat::Json,
        }
    }
}

impl Config {
    /// Get the default configuration file path.
    pub fn path() -> Result<PathBuf> {
        let home = dirs::home_dir()
            .ok_or_else(|| CliError::Config("Could not find home directory".into()))?;
        Ok(home.join(".lineage").join("config.toml"))
    }

    /// Load the default configuration file, or defaults if it does not exist.
    pub fn load() -> Result<Self> {
        let path = Self::path()?;
        if path.exists() {
            Self::load_from(&path)
        } else {
            debug!(path = %path.display(), "no config file, using defaults");
            Ok(Self::default())
        }
    }

    /// Load and validate a configuration file.
    pub fn load_from(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)?;
        let config: Config = toml::from_str(&contents)?;
        config.validate()?;
        debug!(path = %path.display(), "config loaded");
        Ok(config)
    }

    /// Save configuration to a file, creating parent directories.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        let contents = toml::to_string_pretty(self)
            .map_err(|e| CliError::Config(format!("Failed to serialize config: {}", e)))?;
        fs::write(path, contents)?;
        Ok(())
    }

    /// Validate margins and citation markup.
    pub fn validate(&self) -> Result<()> {
        self.margins.validate()?;
        self.citation.validate()?;
        if self.settings.page_size.trim().is_empty() {
            return Err(CliError::Config("page_size cannot be empty".to_string()));
        }
        Ok(())
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            color: true,
            format: OutputFormat::Table,
            page_size: default_page_size(),
        }
    }
}

fn default_true() -> bool {
    true
}

fn default_format() -> OutputFormat {
    OutputFormat::Table
}

fn default_page_size() -> String {
    "A4".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use lineage_citation::PagePlacement;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert!(config.settings.color);
        assert_eq!(config.settings.format, OutputFormat::Table);
        assert_eq!(config.settings.page_size, "A4");
        assert_eq!(config.margins, Margins::default());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_file_keeps_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(
            &path,
            "[settings]\nformat = \"json\"\n\n[margins]\nleft = 36.0\n\n[citation]\ntitle_open = \"\"\ntitle_close = \"\"\npage_placement = \"after_first_fact\"\n",
        )
        .unwrap();

        let config = Config::load_from(&path).unwrap();
        assert_eq!(config.settings.format, OutputFormat::Json);
        assert!(config.settings.color);
        assert_eq!(config.margins.left, 36.0);
        assert_eq!(config.margins.right, 28.0);
        assert_eq!(config.citation.title_open, "");
        assert_eq!(config.citation.page_placement, PagePlacement::AfterFirstFact);
    }

    #[test]
    fn test_save_and_reload() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        let mut config = Config::default();
        config.settings.page_size = "letter".to_string();
        config.save_to(&path).unwrap();

        let reloaded = Config::load_from(&path).unwrap();
        assert_eq!(reloaded.settings.page_size, "letter");
        assert_eq!(reloaded.citation.title_open, "<u>");
    }

    #[test]
    fn test_invalid_margins_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "[margins]\nheader = 500.0\n").unwrap();

        assert!(matches!(Config::load_from(&path), Err(CliError::Layout(_))));
    }

    #[test]
    fn test_unpaired_markup_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "[citation]\ntitle_open = \"<i>\"\ntitle_close = \"\"\n").unwrap();

        assert!(matches!(Config::load_from(&path), Err(CliError::Citation(_))));
    }

    #[test]
    fn test_citation_placement_alone_keeps_markup() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "[citation]\npage_placement = \"after_first_fact\"\n").unwrap();

        let config = Config::load_from(&path).unwrap();
        assert_eq!(config.citation.title_open, "<u>");
        assert_eq!(config.citation.title_close, "</u>");
        assert_eq!(config.citation.page_placement, PagePlacement::AfterFirstFact);
    }
}
