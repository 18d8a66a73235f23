//! Error types for card construction and serialization.

use thiserror::Error;

/// Error type for building and serializing card messages.
///
/// Every variant names the offending field so callers can point
/// users at the exact part of the card that was rejected.
#[derive(Debug, Error)]
pub enum CardError {
    /// A field holds a value outside its allowed domain.
    ///
    /// Empty text, malformed URLs, unknown attachment extensions,
    /// empty or nested sections all land here.
    #[error("Invalid value for {field}: {reason}")]
    InvalidValue {
        /// Name of the rejected field
        field: &'static str,
        /// Rule that was violated
        reason: String,
    },

    /// A field holds a value of the wrong shape.
    #[error("Invalid type for {field}: {reason}")]
    InvalidType {
        /// Name of the rejected field
        field: &'static str,
        /// Expected shape
        reason: String,
    },

    /// An optional field was given while the field it depends on is absent.
    #[error("{component} was given, but no {requires} was provided")]
    MissingComponent {
        /// The dependent field that was supplied
        component: &'static str,
        /// The prerequisite field that is missing
        requires: &'static str,
    },

    /// The validated card could not be encoded as JSON.
    #[error("Failed to serialize card: {0}")]
    Serialize(#[from] serde_json::Error),
}

impl CardError {
    /// Creates an `InvalidValue` error.
    #[must_use]
    pub fn invalid_value(field: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidValue {
            field,
            reason: reason.into(),
        }
    }

    /// Creates an `InvalidType` error.
    #[must_use]
    pub fn invalid_type(field: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidType {
            field,
            reason: reason.into(),
        }
    }

    /// Creates a `MissingComponent` error.
    #[must_use]
    pub const fn missing(component: &'static str, requires: &'static str) -> Self {
        Self::MissingComponent {
            component,
            requires,
        }
    }

    /// Returns true for value-domain errors.
    #[must_use]
    pub const fn is_invalid_value(&self) -> bool {
        matches!(self, Self::InvalidValue { .. })
    }

    /// Returns true for type-shape errors.
    #[must_use]
    pub const fn is_invalid_type(&self) -> bool {
        matches!(self, Self::InvalidType { .. })
    }

    /// Returns true for missing-dependent-component errors.
    #[must_use]
    pub const fn is_missing_component(&self) -> bool {
        matches!(self, Self::MissingComponent { .. })
    }
}
