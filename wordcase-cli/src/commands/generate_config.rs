//! Generate config command implementation

use crate::error::CliError;
use anyhow::{Context, Result};
use clap::Args;
use std::path::PathBuf;
use wordcase_core::{CaseStyle, Locale};

/// Arguments for the generate-config command
#[derive(Debug, Args)]
pub struct GenerateConfigArgs {
    /// Default locale tag written to the template
    #[arg(short, long, value_name = "TAG", default_value = "en")]
    pub locale: String,

    /// Default style written to the template
    #[arg(short, long, value_name = "STYLE", default_value = "snake")]
    pub style: String,

    /// Output file path
    #[arg(short, long, value_name = "FILE", required = true)]
    pub output: PathBuf,
}

impl GenerateConfigArgs {
    /// Execute the generate-config command
    pub fn execute(&self) -> Result<()> {
        use std::fs;

        let template = self.generate_template()?;

        println!("Generating configuration template...");
        println!("  Locale: {}", self.locale);
        println!("  Style: {}", self.style);
        println!("  Output file: {}", self.output.display());

        fs::write(&self.output, template)
            .with_context(|| format!("Failed to write to {}", self.output.display()))?;

        println!("✓ Configuration template generated successfully!");
        println!();
        println!("Next steps:");
        println!("1. Edit the configuration file to set your defaults");
        println!("2. Validate your configuration:");
        println!("   wordcase validate -c {}", self.output.display());
        println!("3. Use it for conversion:");
        println!(
            "   wordcase convert -c {} \"some words\"",
            self.output.display()
        );

        Ok(())
    }

    /// Generate template configuration content
    ///
    /// Fails if the style or locale would produce a file that does not validate.
    fn generate_template(&self) -> Result<String> {
        let style = self
            .style
            .parse::<CaseStyle>()
            .map_err(|e| CliError::ConfigError(e.to_string()))?;
        let locale =
            Locale::parse(&self.locale).map_err(|e| CliError::ConfigError(e.to_string()))?;

        Ok(format!(
            r#"# wordcase configuration

[conversion]
# Built-in style: camel, pascal, snake, kebab or constant
style = "{}"

# Locale tag used for upper/lower case mapping (e.g. "en", "fr", "tr")
locale = "{}"

# Uncomment to join words with a custom delimiter instead of `style`
# delimiter = " "

# Capitalize every word (only applies together with `delimiter`)
capitalize_words = false

[output]
# text, json or markdown
format = "text"

# Pretty print JSON output
pretty_json = true
"#,
            style.name(),
            locale
        ))
    }
}
