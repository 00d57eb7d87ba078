//! # ddb-mapper
//!
//! Runtime support for generated DynamoDB item mappers.
//!
//! Records annotated with `#[derive(DynamoDbItem)]` (or run through the
//! `ddb-mapper` code generator) get a converter that maps them to and from
//! schemaless [`Item`]s:
//!
//! ```ignore
//! use ddb_mapper::prelude::*;
//!
//! #[derive(Debug, Clone, PartialEq, DynamoDbItem)]
//! pub struct User {
//!     #[ddb(partition_key)]
//!     pub id: i32,
//!     #[ddb(name = "fName")]
//!     pub first_name: String,
//!     pub tags: Option<Vec<String>>,
//! }
//!
//! let item = UserConverter.to_item(&user);
//! let back = UserConverter.from_item(&item)?;
//!
//! let table = Mapper::new().get_user_table("users");
//! ```
//!
//! ## Crate Structure
//!
//! - [`AttributeValue`] / [`Item`] - the schemaless item model
//! - [`ItemConverter`] / [`ItemSchema`] - traits implemented by generated code
//! - [`convert`] - value readers called from generated `from_item`
//! - [`Mapper`] / [`Table`] - typed table handles
//! - [`ConversionError`] / [`ValidationError`] - errors raised by generated code

pub mod convert;
mod error;
mod item;
mod schema;
mod table;
mod value;

pub use error::{ConversionError, ConversionResult, ValidationError};
pub use item::{Item, item_of};
pub use schema::{ItemConverter, ItemSchema, KeyKind, KeySpec};
pub use table::{Mapper, Table};
pub use value::AttributeValue;

// Re-export the derive macros
pub use ddb_mapper_macros::{DynamoDbAttributes, DynamoDbItem};

/// Prelude module for convenient imports.
///
/// Use `use ddb_mapper::prelude::*;` to import the item model, the converter
/// traits and the derive macro.
pub mod prelude {
    pub use crate::{
        AttributeValue, ConversionError, DynamoDbAttributes, DynamoDbItem, Item, ItemConverter,
        ItemSchema, KeySpec, Mapper, Table, ValidationError, item_of,
    };
}
