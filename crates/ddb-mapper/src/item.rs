//! Schemaless items

use crate::error::ConversionError;
use crate::value::AttributeValue;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap, btree_map};

/// A string-keyed map of attribute values representing one stored record
///
/// Keys iterate in sorted order so debug output and JSON are stable.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Item(BTreeMap<String, AttributeValue>);

impl Item {
    /// Create an empty item
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a value, returning the previous value stored under `key`
    pub fn insert(&mut self, key: impl Into<String>, value: AttributeValue) -> Option<AttributeValue> {
        self.0.insert(key.into(), value)
    }

    pub fn get(&self, key: &str) -> Option<&AttributeValue> {
        self.0.get(key)
    }

    pub fn remove(&mut self, key: &str) -> Option<AttributeValue> {
        self.0.remove(key)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    /// Get the value of a non-nullable attribute
    pub fn required(&self, key: &str) -> Result<&AttributeValue, ConversionError> {
        self.0
            .get(key)
            .ok_or_else(|| ConversionError::missing_attribute(key))
    }

    /// Get the value of a nullable attribute
    ///
    /// An explicit `NULL` value reads the same as an absent key.
    pub fn optional(&self, key: &str) -> Option<&AttributeValue> {
        self.0.get(key).filter(|value| !value.is_null())
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    pub fn iter(&self) -> btree_map::Iter<'_, String, AttributeValue> {
        self.0.iter()
    }

    /// Keep only the attributes whose keys satisfy `keep`
    pub fn retain(&mut self, mut keep: impl FnMut(&str) -> bool) {
        self.0.retain(|key, _| keep(key));
    }

    pub fn into_inner(self) -> BTreeMap<String, AttributeValue> {
        self.0
    }

    /// Parse an item from DynamoDB JSON
    pub fn from_json(bytes: &[u8]) -> Result<Self, serde_json::Error> {
        if bytes.is_empty() {
            return Ok(Self::default());
        }
        serde_json::from_slice(bytes)
    }

    /// Render the item as DynamoDB JSON
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}

/// Build an item from key/value pairs
///
/// # Example
///
/// ```
/// use ddb_mapper::{AttributeValue, item_of};
///
/// let item = item_of([
///     ("id", AttributeValue::N("123".into())),
///     ("fName", AttributeValue::S("Steve".into())),
/// ]);
///
/// assert_eq!(item.len(), 2);
/// ```
pub fn item_of<K: Into<String>>(pairs: impl IntoIterator<Item = (K, AttributeValue)>) -> Item {
    pairs.into_iter().collect()
}

impl<K: Into<String>> FromIterator<(K, AttributeValue)> for Item {
    fn from_iter<I: IntoIterator<Item = (K, AttributeValue)>>(iter: I) -> Self {
        Item(iter.into_iter().map(|(k, v)| (k.into(), v)).collect())
    }
}

impl IntoIterator for Item {
    type Item = (String, AttributeValue);
    type IntoIter = btree_map::IntoIter<String, AttributeValue>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a Item {
    type Item = (&'a String, &'a AttributeValue);
    type IntoIter = btree_map::Iter<'a, String, AttributeValue>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl From<HashMap<String, AttributeValue>> for Item {
    fn from(map: HashMap<String, AttributeValue>) -> Self {
        Item(map.into_iter().collect())
    }
}

impl From<Item> for HashMap<String, AttributeValue> {
    fn from(item: Item) -> Self {
        item.0.into_iter().collect()
    }
}
