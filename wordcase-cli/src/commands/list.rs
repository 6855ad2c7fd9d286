//! List command implementation

use super::ListCommands;
use crate::output::OutputFormat;
use anyhow::Result;
use std::io::Write;
use wordcase_core::{CaseStyle, Converter};

const SAMPLE: &str = "hello world example";

/// Print the requested listing to `out`
pub fn execute<W: Write>(subcommand: ListCommands, out: &mut W) -> Result<()> {
    match subcommand {
        ListCommands::Styles => {
            let converter = Converter::new();
            writeln!(out, "Built-in styles (example: \"{SAMPLE}\"):")?;
            for style in CaseStyle::BUILTIN {
                writeln!(
                    out,
                    "  {:<10} {}",
                    style.name(),
                    converter.convert(SAMPLE, &style)
                )?;
            }
            writeln!(out, "  {:<10} use --delimiter [--capitalize-words]", "custom")?;
        }
        ListCommands::Formats => {
            writeln!(out, "Output formats:")?;
            for format in OutputFormat::ALL {
                writeln!(out, "  {:<10} {}", format.as_str(), format.description())?;
            }
        }
    }
    out.flush()?;
    Ok(())
}
