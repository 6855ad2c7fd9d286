//! Convert command implementation

use crate::config::{CliConfig, ConversionConfig};
use crate::error::CliError;
use crate::input::{resolve_patterns, FileReader};
use crate::output::{create_formatter, OutputFormat, OutputFormatter};
use crate::progress::ProgressReporter;
use anyhow::{Context, Result};
use clap::Args;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;
use wordcase_core::{CaseStyle, Converter};

/// Arguments for the convert command
#[derive(Debug, Args)]
pub struct ConvertArgs {
    /// Strings to convert (files or stdin are read when omitted)
    #[arg(value_name = "TEXT")]
    pub text: Vec<String>,

    /// Input files or patterns (supports glob); every line is converted
    #[arg(short, long, value_name = "FILE/PATTERN", conflicts_with = "text")]
    pub input: Vec<String>,

    /// Output file (default: stdout)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Casing style
    #[arg(short, long, value_enum)]
    pub style: Option<Style>,

    /// Locale tag for case mapping (e.g. en, fr, tr)
    #[arg(short, long, value_name = "TAG")]
    pub locale: Option<String>,

    /// Join words with this delimiter instead of a built-in style
    #[arg(short, long, value_name = "DELIM", conflicts_with = "style")]
    pub delimiter: Option<String>,

    /// Capitalize every word (only with a custom delimiter)
    #[arg(long)]
    pub capitalize_words: bool,

    /// Output format
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Configuration file
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,

    /// Increase verbosity
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

/// Built-in styles selectable with `--style`
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum Style {
    /// helloWorldExample
    #[value(alias = "camelCase", alias = "lower-camel")]
    Camel,
    /// HelloWorldExample
    #[value(alias = "PascalCase", alias = "upper-camel")]
    Pascal,
    /// hello_world_example
    #[value(alias = "snake_case")]
    Snake,
    /// hello-world-example
    #[value(alias = "kebab-case")]
    Kebab,
    /// HELLO_WORLD_EXAMPLE
    #[value(alias = "CONSTANT_CASE", alias = "screaming-snake")]
    Constant,
}

impl From<Style> for CaseStyle {
    fn from(style: Style) -> Self {
        match style {
            Style::Camel => CaseStyle::Camel,
            Style::Pascal => CaseStyle::Pascal,
            Style::Snake => CaseStyle::Snake,
            Style::Kebab => CaseStyle::Kebab,
            Style::Constant => CaseStyle::Constant,
        }
    }
}

impl ConvertArgs {
    /// Execute the convert command
    pub fn execute(&self) -> Result<()> {
        self.init_logging()?;

        log::info!("Starting conversion");
        log::debug!("Arguments: {:?}", self);

        let config = CliConfig::load_or_default(self.config.as_deref())?;
        let style = self.resolve_style(&config.conversion)?;
        let locale = self
            .locale
            .as_deref()
            .unwrap_or(config.conversion.locale.as_str());
        let converter = Converter::with_locale(locale)
            .map_err(|e| CliError::ConversionError(e.to_string()))?;
        log::info!("Style: {style}, locale: {}", converter.locale());

        let writer: Box<dyn Write + Send + Sync> = match &self.output {
            Some(path) => Box::new(BufWriter::new(File::create(path).with_context(|| {
                format!("Failed to create output file: {}", path.display())
            })?)),
            None => Box::new(io::stdout()),
        };
        let format = self.format.unwrap_or(config.output.format);
        let mut formatter = create_formatter(format, writer, config.output.pretty_json);

        if !self.text.is_empty() {
            convert_all(&converter, &style, &self.text, formatter.as_mut())?;
        } else if !self.input.is_empty() {
            let files = resolve_patterns(&self.input)?;
            log::info!("Converting {} file(s)", files.len());

            let mut progress = ProgressReporter::new(self.quiet);
            progress.init_files(files.len() as u64);
            for path in &files {
                let lines = FileReader::read_lines(path)?;
                convert_all(&converter, &style, &lines, formatter.as_mut())?;
                progress.file_completed(&path.display().to_string());
            }
            progress.finish();
        } else {
            log::info!("Reading lines from stdin");
            let lines = FileReader::read_lines_from(io::stdin().lock())?;
            convert_all(&converter, &style, &lines, formatter.as_mut())?;
        }

        formatter.finish()
    }

    /// Pick the style from flags first, then from the configuration
    pub fn resolve_style(&self, config: &ConversionConfig) -> Result<CaseStyle> {
        let style = match (&self.delimiter, self.style) {
            (Some(delimiter), _) => CaseStyle::custom(
                delimiter.clone(),
                self.capitalize_words || config.capitalize_words,
            ),
            (None, Some(style)) => style.into(),
            (None, None) => match config.case_style()? {
                CaseStyle::Custom { delimiter, .. } if self.capitalize_words => {
                    CaseStyle::custom(delimiter, true)
                }
                style => style,
            },
        };

        if self.capitalize_words && !matches!(style, CaseStyle::Custom { .. }) {
            return Err(CliError::ConfigError(
                "--capitalize-words requires --delimiter".to_string(),
            )
            .into());
        }

        Ok(style)
    }

    /// Initialize logging based on verbosity level
    fn init_logging(&self) -> Result<()> {
        let log_level = match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        };

        if !self.quiet {
            env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level))
                .try_init()
                .context("Failed to initialize logger")?;
        }

        Ok(())
    }
}

fn convert_all(
    converter: &Converter,
    style: &CaseStyle,
    inputs: &[String],
    formatter: &mut dyn OutputFormatter,
) -> Result<()> {
    for input in inputs {
        let output = converter.convert(input, style);
        formatter.format_conversion(input, &output)?;
    }
    Ok(())
}
