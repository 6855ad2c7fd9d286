//! Locale-aware word case conversion
//!
//! This crate splits a string into words, where a word is a maximal run of
//! Unicode letters, and joins the words back together in one of several
//! casing styles. Case mapping follows the rules of the requested locale, so
//! Turkish dotted and dotless `i` and similar language-specific mappings come
//! out right.
//!
//! # Example
//!
//! ```rust
//! use wordcase_core::{to_camel_case, to_constant_case, CaseStyle, Converter};
//!
//! assert_eq!(to_camel_case("hello world example", "en").unwrap(), "helloWorldExample");
//! assert_eq!(to_constant_case("héllo wôrld", "fr").unwrap(), "HÉLLO_WÔRLD");
//!
//! let converter = Converter::with_locale("tr").unwrap();
//! assert_eq!(converter.convert("istanbul", &CaseStyle::Pascal), "İstanbul");
//! ```
//!
//! Word boundaries come only from non-letter characters. `"helloWorld"` is a
//! single word, so `to_snake_case("helloWorld", "en")` yields `"helloworld"`.

#![warn(missing_docs)]

pub mod casing;
pub mod convert;
pub mod error;
pub mod locale;
pub mod segmenter;
pub mod style;

// Re-export key types
pub use casing::{LocaleCaser, WordTransform};
pub use convert::{
    to_camel_case, to_constant_case, to_custom_case, to_kebab_case, to_pascal_case,
    to_snake_case, Converter,
};
pub use error::{CaseError, Result};
pub use locale::{Locale, DEFAULT_LOCALE};
pub use segmenter::{is_letter, split_words, Words};
pub use style::CaseStyle;
