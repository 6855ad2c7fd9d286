//! Locale tags for case mapping

use crate::error::{CaseError, Result};
use icu_locid::LanguageIdentifier;
use std::fmt;
use std::str::FromStr;

/// Locale tag used when the caller does not choose one
pub const DEFAULT_LOCALE: &str = "en";

/// A parsed locale tag selecting language-specific case mapping rules
///
/// Only the syntax of the tag is checked. A well-formed tag whose language has
/// no special casing rules (which is most of them) behaves like the root
/// mapping.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Locale {
    langid: LanguageIdentifier,
}

impl Locale {
    /// Parse a locale tag such as `"en"`, `"fr"` or `"tr-TR"`
    pub fn parse(tag: &str) -> Result<Self> {
        let langid = tag
            .parse::<LanguageIdentifier>()
            .map_err(|e| CaseError::InvalidLocale {
                tag: tag.to_string(),
                reason: e.to_string(),
            })?;
        log::trace!("parsed locale tag '{tag}' as {langid}");
        Ok(Self { langid })
    }

    /// The underlying language identifier
    pub fn langid(&self) -> &LanguageIdentifier {
        &self.langid
    }

    /// The primary language subtag, e.g. `"tr"` for `"tr-TR"`
    pub fn language(&self) -> &str {
        self.langid.language.as_str()
    }
}

impl Default for Locale {
    fn default() -> Self {
        Self {
            langid: icu_locid::langid!("en"),
        }
    }
}

impl FromStr for Locale {
    type Err = CaseError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.langid)
    }
}

impl From<LanguageIdentifier> for Locale {
    fn from(langid: LanguageIdentifier) -> Self {
        Self { langid }
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Locale {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_str(self)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Locale {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let tag = <String as serde::Deserialize>::deserialize(deserializer)?;
        Locale::parse(&tag).map_err(serde::de::Error::custom)
    }
}
