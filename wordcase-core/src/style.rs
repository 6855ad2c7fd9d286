//! Casing styles
//!
//! A style is a per-word transform, an optional exception for the first word,
//! and the delimiter placed between words.

use crate::casing::WordTransform;
use crate::error::{CaseError, Result};
use std::fmt;
use std::str::FromStr;

/// A word-joining convention
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "lowercase")
)]
pub enum CaseStyle {
    /// `helloWorldExample`
    Camel,
    /// `HelloWorldExample`
    Pascal,
    /// `hello_world_example`
    Snake,
    /// `hello-world-example`
    Kebab,
    /// `HELLO_WORLD_EXAMPLE`
    Constant,
    /// Caller-chosen delimiter, words lowercased or capitalized
    Custom {
        /// Placed between consecutive words
        delimiter: String,
        /// Capitalize every word instead of lowercasing it
        capitalize_words: bool,
    },
}

impl CaseStyle {
    /// The styles that take no parameters
    pub const BUILTIN: [CaseStyle; 5] = [
        CaseStyle::Camel,
        CaseStyle::Pascal,
        CaseStyle::Snake,
        CaseStyle::Kebab,
        CaseStyle::Constant,
    ];

    /// Build a custom style
    pub fn custom(delimiter: impl Into<String>, capitalize_words: bool) -> Self {
        CaseStyle::Custom {
            delimiter: delimiter.into(),
            capitalize_words,
        }
    }

    /// Transform applied to every word after the first
    pub fn word_transform(&self) -> WordTransform {
        match self {
            CaseStyle::Camel | CaseStyle::Pascal => WordTransform::Capitalize,
            CaseStyle::Snake | CaseStyle::Kebab => WordTransform::Lowercase,
            CaseStyle::Constant => WordTransform::Uppercase,
            CaseStyle::Custom {
                capitalize_words: true,
                ..
            } => WordTransform::Capitalize,
            CaseStyle::Custom {
                capitalize_words: false,
                ..
            } => WordTransform::Lowercase,
        }
    }

    /// Transform applied to the first word
    ///
    /// Only camel case treats the first word differently.
    pub fn first_word_transform(&self) -> WordTransform {
        match self {
            CaseStyle::Camel => WordTransform::Lowercase,
            other => other.word_transform(),
        }
    }

    /// Delimiter placed between words
    pub fn delimiter(&self) -> &str {
        match self {
            CaseStyle::Camel | CaseStyle::Pascal => "",
            CaseStyle::Snake | CaseStyle::Constant => "_",
            CaseStyle::Kebab => "-",
            CaseStyle::Custom { delimiter, .. } => delimiter,
        }
    }

    /// Canonical short name, as accepted by [`FromStr`]
    pub fn name(&self) -> &'static str {
        match self {
            CaseStyle::Camel => "camel",
            CaseStyle::Pascal => "pascal",
            CaseStyle::Snake => "snake",
            CaseStyle::Kebab => "kebab",
            CaseStyle::Constant => "constant",
            CaseStyle::Custom { .. } => "custom",
        }
    }
}

impl FromStr for CaseStyle {
    type Err = CaseError;

    /// Parse a built-in style name
    ///
    /// `custom` is not accepted here since it needs a delimiter; use
    /// [`CaseStyle::custom`].
    fn from_str(s: &str) -> Result<Self> {
        let style = match s.trim() {
            "camel" | "camelCase" | "lower-camel" => CaseStyle::Camel,
            "pascal" | "PascalCase" | "upper-camel" => CaseStyle::Pascal,
            "snake" | "snake_case" => CaseStyle::Snake,
            "kebab" | "kebab-case" => CaseStyle::Kebab,
            "constant" | "CONSTANT_CASE" | "screaming-snake" => CaseStyle::Constant,
            _ => {
                return Err(CaseError::UnknownStyle {
                    name: s.to_string(),
                })
            }
        };
        Ok(style)
    }
}

impl fmt::Display for CaseStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CaseStyle::Custom {
                delimiter,
                capitalize_words,
            } => write!(
                f,
                "custom(delimiter={delimiter:?}, capitalize_words={capitalize_words})"
            ),
            builtin => f.write_str(builtin.name()),
        }
    }
}
