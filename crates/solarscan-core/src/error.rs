//! Error types for response parsing and caller inputs.

use thiserror::Error;

/// Result type for response parsing.
pub type ParseResult<T> = Result<T, ParseError>;

/// Errors raised while turning a model response into roof attributes.
///
/// Every variant keeps the original response text so callers can show it
/// next to the error category.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ParseError {
    /// The response contains no `{` ... `}` span.
    #[error("No JSON object found in model response")]
    NoJsonFound {
        /// Original response text
        raw: String,
    },

    /// The extracted span is not a valid JSON object.
    #[error("Malformed JSON in model response: {reason}")]
    MalformedJson {
        /// Decoder message
        reason: String,
        /// Original response text
        raw: String,
    },

    /// A required field is absent or has the wrong type.
    #[error("Missing or mistyped field: {field}")]
    MissingField {
        /// Name of the offending field
        field: &'static str,
        /// Original response text
        raw: String,
    },

    /// A required field is present but outside its allowed range.
    #[error("Invalid value for {field}: {reason}")]
    InvalidValue {
        /// Name of the offending field
        field: &'static str,
        /// What constraint was violated
        reason: String,
        /// Original response text
        raw: String,
    },
}

impl ParseError {
    /// The unmodified model response that failed to parse.
    pub fn raw_text(&self) -> &str {
        match self {
            ParseError::NoJsonFound { raw }
            | ParseError::MalformedJson { raw, .. }
            | ParseError::MissingField { raw, .. }
            | ParseError::InvalidValue { raw, .. } => raw,
        }
    }

    /// Short human-readable label for the failure kind.
    pub fn category(&self) -> &'static str {
        match self {
            ParseError::NoJsonFound { .. } => "no JSON found",
            ParseError::MalformedJson { .. } => "malformed JSON",
            ParseError::MissingField { .. } => "missing field",
            ParseError::InvalidValue { .. } => "invalid value",
        }
    }

    /// Name of the field involved, if the error concerns a single field.
    pub fn field(&self) -> Option<&'static str> {
        match self {
            ParseError::MissingField { field, .. } | ParseError::InvalidValue { field, .. } => {
                Some(field)
            }
            _ => None,
        }
    }
}

/// Errors for caller-supplied scalar inputs.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum InputError {
    /// Electricity rate is negative or not finite.
    #[error("Invalid electricity rate: {0} (must be a finite value >= 0)")]
    InvalidRate(f64),

    /// Location string is empty.
    #[error("Location cannot be empty")]
    EmptyLocation,
}
