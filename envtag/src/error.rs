//! Error types for tag-driven environment population

use std::fmt;

/// Which side of an inclusive `min`/`max` range a check refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Bound {
    Min,
    Max,
}

impl fmt::Display for Bound {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Bound::Min => f.write_str("min"),
            Bound::Max => f.write_str("max"),
        }
    }
}

/// Errors that can occur while configuring a parser or populating a struct.
///
/// Every variant is terminal for the current call: resolution stops at the
/// first failing field, in declaration order, nested structs included.
#[derive(Debug, thiserror::Error)]
pub enum EnvError {
    /// A `required` field resolved to an empty value after defaulting.
    #[error("environment variable for field '{field}' is required but not set (tried {})", .names.join(", "))]
    Missing {
        /// Declared name of the field
        field: String,
        /// Every candidate key that was looked up, prefix included
        names: Vec<String>,
    },

    /// The value could not be parsed as the field's integer or float type.
    #[error("invalid numeric value '{value}' for field '{field}' ({type_name}): {message}")]
    InvalidNumber {
        field: String,
        value: String,
        /// Fully qualified type name that parsing was attempted for
        type_name: String,
        /// Error message from the underlying parser
        message: String,
    },

    /// The value is not an accepted boolean token.
    #[error("invalid boolean value '{value}' for field '{field}'")]
    InvalidBool { field: String, value: String },

    /// A numeric value parsed fine but lies outside an inclusive bound.
    #[error("value {value} for field '{field}' violates {bound} = {limit}")]
    OutOfRange {
        field: String,
        value: String,
        bound: Bound,
        limit: f64,
    },

    /// The `min` or `max` option itself is not a number.
    #[error("invalid {bound} value '{value}' on field '{field}'")]
    InvalidBound {
        field: String,
        bound: Bound,
        value: String,
    },

    /// The value failed its declared `v_*` format check.
    #[error("field '{field}' failed {validator}: {reason}")]
    Validation {
        field: String,
        /// Keyword of the validator that rejected the value
        validator: &'static str,
        reason: String,
    },

    /// More than one mutually exclusive `v_*` option was declared on a field.
    #[error("multiple exclusive validators on field '{field}': {}; only one is allowed", .validators.join(", "))]
    ExclusiveValidators {
        field: String,
        validators: Vec<&'static str>,
    },

    /// The option separator and the list separator would become equal.
    #[error("option separator and list separator must differ (both '{separator}')")]
    SeparatorConflict { separator: String },

    /// A separator was set to the empty string.
    #[error("separators must not be empty")]
    EmptySeparator,
}

impl EnvError {
    /// Create a numeric parse error for type `T`
    pub(crate) fn invalid_number<T>(
        field: impl Into<String>,
        value: impl Into<String>,
        message: impl fmt::Display,
    ) -> Self {
        Self::InvalidNumber {
            field: field.into(),
            value: value.into(),
            type_name: std::any::type_name::<T>().to_string(),
            message: message.to_string(),
        }
    }

    /// Create a missing required value error
    pub(crate) fn missing(field: impl Into<String>, names: Vec<String>) -> Self {
        Self::Missing {
            field: field.into(),
            names,
        }
    }
}
