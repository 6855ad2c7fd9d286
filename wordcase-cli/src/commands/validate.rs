//! Validate command implementation

use crate::config::CliConfig;
use anyhow::Result;
use clap::Args;
use std::path::PathBuf;

/// Arguments for the validate command
#[derive(Debug, Args)]
pub struct ValidateArgs {
    /// Path to configuration file to validate
    #[arg(short, long, value_name = "FILE", required = true)]
    pub config: PathBuf,
}

impl ValidateArgs {
    /// Execute the validate command
    pub fn execute(&self) -> Result<()> {
        println!("Validating configuration: {}", self.config.display());

        let checked = CliConfig::load(&self.config).and_then(|config| {
            let style = config.conversion.case_style()?;
            let locale = config.conversion.parsed_locale()?;
            Ok((config, style, locale))
        });

        match checked {
            Ok((config, style, locale)) => {
                println!("✓ Configuration is valid!");
                println!("  Style: {style}");
                println!("  Locale: {locale}");
                println!("  Format: {}", config.output.format.as_str());
                Ok(())
            }
            Err(e) => {
                println!("✗ Configuration is invalid!");
                println!("  Error: {e:#}");
                Err(anyhow::anyhow!("Validation failed: {e:#}"))
            }
        }
    }
}
