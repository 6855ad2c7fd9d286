//! Markdown output formatter

use super::OutputFormatter;
use anyhow::Result;
use std::io::Write;

/// Markdown formatter - outputs conversions as a two-column table
pub struct MarkdownFormatter<W: Write> {
    writer: W,
    conversion_count: usize,
}

impl<W: Write> MarkdownFormatter<W> {
    /// Create a new markdown formatter
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            conversion_count: 0,
        }
    }
}

/// Escape table cell delimiters
fn cell(text: &str) -> String {
    text.replace('|', "\\|")
}

impl<W: Write + Send + Sync> OutputFormatter for MarkdownFormatter<W> {
    fn format_conversion(&mut self, input: &str, output: &str) -> Result<()> {
        if self.conversion_count == 0 {
            writeln!(self.writer, "| Input | Output |")?;
            writeln!(self.writer, "| --- | --- |")?;
        }
        self.conversion_count += 1;
        writeln!(self.writer, "| {} | `{}` |", cell(input), cell(output))?;
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        writeln!(self.writer)?;
        writeln!(self.writer, "---")?;
        writeln!(self.writer, "*Total conversions: {}*", self.conversion_count)?;
        self.writer.flush()?;
        Ok(())
    }
}
