//! Locale-aware case mapping of single words

use crate::locale::Locale;
use icu_casemap::CaseMapper;

/// How a single word is cased before joining
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "lowercase")
)]
pub enum WordTransform {
    /// Full lowercase
    Lowercase,
    /// Full uppercase
    Uppercase,
    /// First character uppercase, the rest lowercase
    Capitalize,
}

/// Case mapper bound to one locale
///
/// Mappings are full (not simple) mappings, so a word may change length:
/// `"ß"` uppercases to `"SS"`.
#[derive(Debug, Clone, Default)]
pub struct LocaleCaser {
    locale: Locale,
}

impl LocaleCaser {
    /// Create a caser for `locale`
    pub fn new(locale: Locale) -> Self {
        Self { locale }
    }

    /// The locale whose rules this caser applies
    pub fn locale(&self) -> &Locale {
        &self.locale
    }

    /// Lowercase `word` under this locale's rules
    pub fn lowercase(&self, word: &str) -> String {
        CaseMapper::new().lowercase_to_string(word, self.locale.langid())
    }

    /// Uppercase `word` under this locale's rules
    pub fn uppercase(&self, word: &str) -> String {
        CaseMapper::new().uppercase_to_string(word, self.locale.langid())
    }

    /// Uppercase the first character of `word` and lowercase the remainder
    ///
    /// The two halves are mapped independently, so the first character never
    /// influences how the rest is lowercased.
    pub fn capitalize(&self, word: &str) -> String {
        let Some(first) = word.chars().next() else {
            return String::new();
        };
        let (head, tail) = word.split_at(first.len_utf8());

        let mut capitalized = self.uppercase(head);
        capitalized.push_str(&self.lowercase(tail));
        capitalized
    }

    /// Apply `transform` to `word`
    pub fn apply(&self, word: &str, transform: WordTransform) -> String {
        match transform {
            WordTransform::Lowercase => self.lowercase(word),
            WordTransform::Uppercase => self.uppercase(word),
            WordTransform::Capitalize => self.capitalize(word),
        }
    }
}
