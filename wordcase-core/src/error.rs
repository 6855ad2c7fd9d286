//! Error types for case conversion

use thiserror::Error;

/// Errors raised while preparing a conversion
///
/// Splitting and case mapping themselves never fail. Only the parameters
/// that come in as strings (locale tags and style names) are validated.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CaseError {
    /// The locale tag is not a well-formed BCP 47 language identifier
    #[error("invalid locale tag '{tag}': {reason}")]
    InvalidLocale {
        /// The tag as supplied by the caller
        tag: String,
        /// Parser message
        reason: String,
    },

    /// The style name does not match any built-in casing style
    #[error("unknown case style '{name}'")]
    UnknownStyle {
        /// The style name as supplied by the caller
        name: String,
    },
}

/// Result type for case conversion operations
pub type Result<T> = std::result::Result<T, CaseError>;
