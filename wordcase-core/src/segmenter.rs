//! Word segmentation by Unicode letter runs
//!
//! A word is a maximal run of characters whose general category is one of the
//! letter categories (Lu, Ll, Lt, Lm, Lo). Everything else, including digits,
//! whitespace, punctuation, symbols and combining marks, only separates words
//! and never appears inside one.
//!
//! Boundaries come from separators alone. A case transition such as the one in
//! `"helloWorld"` does not start a new word.

use std::iter::FusedIterator;
use unicode_general_category::{get_general_category, GeneralCategory};

/// Returns true if `c` belongs to one of the Unicode letter categories
#[inline]
pub fn is_letter(c: char) -> bool {
    matches!(
        get_general_category(c),
        GeneralCategory::UppercaseLetter
            | GeneralCategory::LowercaseLetter
            | GeneralCategory::TitlecaseLetter
            | GeneralCategory::ModifierLetter
            | GeneralCategory::OtherLetter
    )
}

/// Split `input` into its letter runs, in order of appearance
///
/// ```
/// use wordcase_core::split_words;
///
/// let words: Vec<&str> = split_words("hello, wörld 42 again").collect();
/// assert_eq!(words, ["hello", "wörld", "again"]);
/// ```
pub fn split_words(input: &str) -> Words<'_> {
    Words { rest: input }
}

/// Iterator over the words of a string, see [`split_words`]
///
/// Yields non-empty slices borrowed from the input.
#[derive(Debug, Clone)]
pub struct Words<'a> {
    rest: &'a str,
}

impl<'a> Iterator for Words<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<&'a str> {
        let start = self.rest.find(is_letter)?;
        let tail = &self.rest[start..];
        let len = tail.find(|c: char| !is_letter(c)).unwrap_or(tail.len());

        let (word, rest) = tail.split_at(len);
        self.rest = rest;
        Some(word)
    }
}

impl FusedIterator for Words<'_> {}
