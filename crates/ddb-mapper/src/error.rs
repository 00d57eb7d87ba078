//! Error types raised by generated converters and builders

use thiserror::Error;

/// Result type alias for item conversions
pub type ConversionResult<T> = Result<T, ConversionError>;

/// An item does not have the shape a converter expects
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConversionError {
    /// A non-nullable attribute is absent from the item
    #[error("missing required attribute `{name}`")]
    MissingAttribute { name: String },

    /// The stored value has a different variant than the attribute's type
    #[error("expected {expected} value, found {actual}")]
    TypeMismatch {
        expected: &'static str,
        actual: &'static str,
    },

    /// A number value could not be parsed into the target type
    #[error("invalid number `{value}` for {target}")]
    InvalidNumber { value: String, target: &'static str },

    /// Failure while reading a specific attribute
    #[error("attribute `{name}`: {source}")]
    Attribute {
        name: String,
        #[source]
        source: Box<ConversionError>,
    },

    /// The record builder rejected the converted values
    #[error(transparent)]
    Validation(#[from] ValidationError),
}

impl ConversionError {
    pub fn missing_attribute(name: impl Into<String>) -> Self {
        ConversionError::MissingAttribute { name: name.into() }
    }

    pub fn type_mismatch(expected: &'static str, actual: &'static str) -> Self {
        ConversionError::TypeMismatch { expected, actual }
    }

    /// Attach the item key being read
    ///
    /// `MissingAttribute` already names its key and is returned unchanged.
    pub fn at(self, name: &str) -> Self {
        match self {
            ConversionError::MissingAttribute { .. } => self,
            other => ConversionError::Attribute {
                name: name.to_string(),
                source: Box::new(other),
            },
        }
    }

    /// The item key this error refers to, if any
    pub fn attribute(&self) -> Option<&str> {
        match self {
            ConversionError::MissingAttribute { name } | ConversionError::Attribute { name, .. } => {
                Some(name)
            }
            ConversionError::Validation(ValidationError::MissingAttribute { name }) => Some(name),
            _ => None,
        }
    }

    /// The innermost error, with attribute context removed
    pub fn root_cause(&self) -> &ConversionError {
        match self {
            ConversionError::Attribute { source, .. } => source.root_cause(),
            other => other,
        }
    }
}

/// A builder was asked to build with required attributes unset
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("required attribute `{name}` was not set")]
    MissingAttribute { name: String },
}

impl ValidationError {
    pub fn missing_attribute(name: impl Into<String>) -> Self {
        ValidationError::MissingAttribute { name: name.into() }
    }
}
