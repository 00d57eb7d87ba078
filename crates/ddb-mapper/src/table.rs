//! Mapper entry point and typed table handles

use crate::error::ConversionError;
use crate::item::Item;
use crate::schema::ItemSchema;

/// Entry point that hands out typed tables
///
/// Generated `{Name}TableExt` traits are implemented for this type.
#[derive(Debug, Clone, Default)]
pub struct Mapper {
    _private: (),
}

impl Mapper {
    pub fn new() -> Self {
        Self::default()
    }

    /// Bind a table name to a schema
    pub fn get_table<S: ItemSchema>(&self, name: impl Into<String>, schema: S) -> Table<S> {
        Table {
            name: name.into(),
            schema,
        }
    }
}

/// A table whose items are mapped through a schema
#[derive(Debug, Clone)]
pub struct Table<S> {
    name: String,
    schema: S,
}

impl<S: ItemSchema> Table<S> {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn schema(&self) -> &S {
        &self.schema
    }

    pub fn to_item(&self, record: &S::Item) -> Item {
        self.schema.converter().to_item(record)
    }

    pub fn from_item(&self, item: &Item) -> Result<S::Item, ConversionError> {
        self.schema.converter().from_item(item)
    }

    /// Project a record onto its primary key attributes
    pub fn key_of(&self, record: &S::Item) -> Item {
        let keys = self.schema.key_specs();
        let mut item = self.to_item(record);
        item.retain(|name| keys.iter().any(|spec| spec.name == name));
        item
    }

    /// Check that an item carries every key attribute with the right kind
    pub fn validate_key(&self, item: &Item) -> Result<(), ConversionError> {
        for spec in self.schema.key_specs() {
            let value = item.required(&spec.name)?;
            if !spec.kind.matches(value) {
                return Err(
                    ConversionError::type_mismatch(spec.kind.as_str(), value.type_name())
                        .at(&spec.name),
                );
            }
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "table/table_tests.rs"]
mod table_tests;
