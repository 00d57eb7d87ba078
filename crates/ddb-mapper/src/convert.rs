//! Value readers used by generated `from_item` implementations
//!
//! Each reader checks the value's variant and fails with
//! [`ConversionError::TypeMismatch`] when it does not match.

use crate::error::ConversionError;
use crate::value::AttributeValue;
use std::collections::HashMap;
use std::str::FromStr;

pub fn string(value: &AttributeValue) -> Result<String, ConversionError> {
    match value {
        AttributeValue::S(s) => Ok(s.clone()),
        other => Err(ConversionError::type_mismatch("S", other.type_name())),
    }
}

/// Parse a number value into any [`FromStr`] numeric type
pub fn number<T: FromStr>(value: &AttributeValue) -> Result<T, ConversionError> {
    match value {
        AttributeValue::N(n) => n.parse().map_err(|_| ConversionError::InvalidNumber {
            value: n.clone(),
            target: std::any::type_name::<T>(),
        }),
        other => Err(ConversionError::type_mismatch("N", other.type_name())),
    }
}

pub fn boolean(value: &AttributeValue) -> Result<bool, ConversionError> {
    match value {
        AttributeValue::Bool(b) => Ok(*b),
        other => Err(ConversionError::type_mismatch("BOOL", other.type_name())),
    }
}

pub fn binary(value: &AttributeValue) -> Result<Vec<u8>, ConversionError> {
    match value {
        AttributeValue::B(b) => Ok(b.clone()),
        other => Err(ConversionError::type_mismatch("B", other.type_name())),
    }
}

pub fn list(value: &AttributeValue) -> Result<&[AttributeValue], ConversionError> {
    match value {
        AttributeValue::L(l) => Ok(l),
        other => Err(ConversionError::type_mismatch("L", other.type_name())),
    }
}

pub fn map(value: &AttributeValue) -> Result<&HashMap<String, AttributeValue>, ConversionError> {
    match value {
        AttributeValue::M(m) => Ok(m),
        other => Err(ConversionError::type_mismatch("M", other.type_name())),
    }
}
