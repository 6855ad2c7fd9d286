//! File and stdin reading utilities

use anyhow::{Context, Result};
use std::fs;
use std::io::BufRead;
use std::path::Path;

/// Reads conversion inputs, one per line
pub struct FileReader;

impl FileReader {
    /// Read a file as UTF-8 text
    pub fn read_text(path: &Path) -> Result<String> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read file: {}", path.display()))?;

        Ok(content)
    }

    /// Read a file and split it into lines
    ///
    /// Line terminators (`\n` or `\r\n`) are removed. Blank lines are kept so
    /// the output lines up with the input.
    pub fn read_lines(path: &Path) -> Result<Vec<String>> {
        let content = Self::read_text(path)?;
        Ok(content.lines().map(str::to_string).collect())
    }

    /// Read every line from a buffered reader such as stdin
    pub fn read_lines_from<R: BufRead>(reader: R) -> Result<Vec<String>> {
        reader
            .lines()
            .collect::<std::io::Result<Vec<_>>>()
            .context("Failed to read input lines")
    }
}
