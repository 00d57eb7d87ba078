//! Converter and schema traits implemented by generated code

use crate::error::ConversionError;
use crate::item::Item;
use crate::value::AttributeValue;
use serde::{Deserialize, Serialize};

/// Bidirectional mapping between a record type and items
///
/// Generated converters guarantee `from_item(&to_item(r)) == Ok(r)`.
pub trait ItemConverter<T> {
    /// Convert a record into an item
    fn to_item(&self, from: &T) -> Item;

    /// Convert an item back into a record
    fn from_item(&self, item: &Item) -> Result<T, ConversionError>;
}

/// The value kinds a key attribute may take
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum KeyKind {
    S,
    N,
    B,
}

impl KeyKind {
    /// The item value tag for this kind
    pub fn as_str(&self) -> &'static str {
        match self {
            KeyKind::S => "S",
            KeyKind::N => "N",
            KeyKind::B => "B",
        }
    }

    pub fn matches(&self, value: &AttributeValue) -> bool {
        matches!(
            (self, value),
            (KeyKind::S, AttributeValue::S(_))
                | (KeyKind::N, AttributeValue::N(_))
                | (KeyKind::B, AttributeValue::B(_))
        )
    }
}

impl std::fmt::Display for KeyKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Name and value kind of a primary key attribute
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct KeySpec {
    pub name: String,
    pub kind: KeyKind,
}

impl KeySpec {
    pub fn new(name: impl Into<String>, kind: KeyKind) -> Self {
        Self {
            name: name.into(),
            kind,
        }
    }

    pub fn string(name: impl Into<String>) -> Self {
        Self::new(name, KeyKind::S)
    }

    pub fn number(name: impl Into<String>) -> Self {
        Self::new(name, KeyKind::N)
    }

    pub fn binary(name: impl Into<String>) -> Self {
        Self::new(name, KeyKind::B)
    }
}

/// Binds a record type to its converter and primary key layout
pub trait ItemSchema {
    /// The record type this schema maps
    type Item;

    fn converter(&self) -> &dyn ItemConverter<Self::Item>;

    fn partition_key(&self) -> KeySpec;

    fn sort_key(&self) -> Option<KeySpec> {
        None
    }

    /// Partition key followed by the sort key, if any
    fn key_specs(&self) -> Vec<KeySpec> {
        let mut specs = vec![self.partition_key()];
        specs.extend(self.sort_key());
        specs
    }
}
