//! Configuration module

use crate::error::CliError;
use crate::output::OutputFormat;
use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::Path;
use wordcase_core::{CaseStyle, Locale, DEFAULT_LOCALE};

/// CLI configuration structure
#[derive(Debug, Deserialize, Default, PartialEq)]
pub struct CliConfig {
    /// Conversion defaults
    #[serde(default)]
    pub conversion: ConversionConfig,

    /// Output configuration
    #[serde(default)]
    pub output: OutputConfig,
}

/// Conversion-related configuration
#[derive(Debug, Deserialize, PartialEq)]
#[serde(default)]
pub struct ConversionConfig {
    /// Default style name
    pub style: String,

    /// Default locale tag
    pub locale: String,

    /// When set, words are joined with this delimiter instead of `style`
    pub delimiter: Option<String>,

    /// Capitalize words in the custom style
    pub capitalize_words: bool,
}

impl Default for ConversionConfig {
    fn default() -> Self {
        Self {
            style: "snake".to_string(),
            locale: DEFAULT_LOCALE.to_string(),
            delimiter: None,
            capitalize_words: false,
        }
    }
}

impl ConversionConfig {
    /// The style this section selects
    pub fn case_style(&self) -> Result<CaseStyle> {
        match &self.delimiter {
            Some(delimiter) => Ok(CaseStyle::custom(delimiter.clone(), self.capitalize_words)),
            None => {
                if self.capitalize_words {
                    return Err(CliError::ConfigError(
                        "capitalize_words requires a delimiter".to_string(),
                    )
                    .into());
                }
                let style = self
                    .style
                    .parse::<CaseStyle>()
                    .map_err(|e| CliError::ConfigError(e.to_string()))?;
                Ok(style)
            }
        }
    }

    /// The locale this section selects
    pub fn parsed_locale(&self) -> Result<Locale> {
        let locale =
            Locale::parse(&self.locale).map_err(|e| CliError::ConfigError(e.to_string()))?;
        Ok(locale)
    }
}

/// Output-related configuration
#[derive(Debug, Deserialize, PartialEq)]
#[serde(default)]
pub struct OutputConfig {
    /// Default output format
    pub format: OutputFormat,

    /// Pretty print JSON output
    pub pretty_json: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::Text,
            pretty_json: true,
        }
    }
}

impl CliConfig {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        let config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;
        log::debug!("loaded configuration from {}", path.display());
        Ok(config)
    }

    /// Load from `path` if given, otherwise use defaults
    pub fn load_or_default(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::load(path),
            None => Ok(Self::default()),
        }
    }
}
