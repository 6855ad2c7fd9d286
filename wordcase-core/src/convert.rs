//! Word joining and the conversion entry points

use crate::casing::LocaleCaser;
use crate::error::Result;
use crate::locale::Locale;
use crate::segmenter::split_words;
use crate::style::CaseStyle;

/// Converts strings between casing styles under a fixed locale
///
/// Holds no state besides the locale, so one converter can be reused for any
/// number of inputs and styles.
#[derive(Debug, Clone, Default)]
pub struct Converter {
    caser: LocaleCaser,
}

impl Converter {
    /// Create a converter using the default (`"en"`) locale
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a converter for the given locale tag
    pub fn with_locale(tag: &str) -> Result<Self> {
        Ok(Self::from_locale(Locale::parse(tag)?))
    }

    /// Create a converter for an already parsed locale
    pub fn from_locale(locale: Locale) -> Self {
        Self {
            caser: LocaleCaser::new(locale),
        }
    }

    /// The locale this converter applies
    pub fn locale(&self) -> &Locale {
        self.caser.locale()
    }

    /// Split `input` into words and join them in `style`
    ///
    /// Returns an empty string when `input` contains no letters.
    pub fn convert(&self, input: &str, style: &CaseStyle) -> String {
        let delimiter = style.delimiter();
        let mut output = String::with_capacity(input.len());

        for (index, word) in split_words(input).enumerate() {
            let transform = if index == 0 {
                style.first_word_transform()
            } else {
                output.push_str(delimiter);
                style.word_transform()
            };
            output.push_str(&self.caser.apply(word, transform));
        }

        log::trace!(
            "converted {input:?} to {output:?} ({style}, locale {})",
            self.locale()
        );
        output
    }
}

fn convert_with(input: &str, locale: &str, style: &CaseStyle) -> Result<String> {
    Ok(Converter::with_locale(locale)?.convert(input, style))
}

/// Convert to camelCase: first word lowercased, later words capitalized, no delimiter
///
/// ```
/// use wordcase_core::to_camel_case;
///
/// assert_eq!(to_camel_case("hello world example", "en").unwrap(), "helloWorldExample");
/// ```
pub fn to_camel_case(input: &str, locale: &str) -> Result<String> {
    convert_with(input, locale, &CaseStyle::Camel)
}

/// Convert to PascalCase: every word capitalized, no delimiter
pub fn to_pascal_case(input: &str, locale: &str) -> Result<String> {
    convert_with(input, locale, &CaseStyle::Pascal)
}

/// Convert to snake_case: every word lowercased, joined with `_`
pub fn to_snake_case(input: &str, locale: &str) -> Result<String> {
    convert_with(input, locale, &CaseStyle::Snake)
}

/// Convert to kebab-case: every word lowercased, joined with `-`
pub fn to_kebab_case(input: &str, locale: &str) -> Result<String> {
    convert_with(input, locale, &CaseStyle::Kebab)
}

/// Convert to CONSTANT_CASE: every word uppercased, joined with `_`
pub fn to_constant_case(input: &str, locale: &str) -> Result<String> {
    convert_with(input, locale, &CaseStyle::Constant)
}

/// Join words with `delimiter`, capitalizing each word if `capitalize_words`
/// is set and lowercasing it otherwise
///
/// ```
/// use wordcase_core::to_custom_case;
///
/// assert_eq!(
///     to_custom_case("hello world example", " ", true, "en").unwrap(),
///     "Hello World Example"
/// );
/// ```
pub fn to_custom_case(
    input: &str,
    delimiter: &str,
    capitalize_words: bool,
    locale: &str,
) -> Result<String> {
    convert_with(
        input,
        locale,
        &CaseStyle::custom(delimiter, capitalize_words),
    )
}
