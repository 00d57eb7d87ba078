//! Generation-time errors
//!
//! Both error kinds are scoped to a single declaration. They are collected as
//! diagnostics and never abort a generation pass.

use thiserror::Error;

/// An item declaration failed structural validation during scanning
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DiscoveryError {
    /// Only structs with named fields can be mapped
    #[error("`{declaration}` is a {kind}, only structs with named fields can be items")]
    NotConcrete { declaration: String, kind: String },

    #[error("`{declaration}` has unnamed fields, item attributes must be named")]
    UnnamedFields { declaration: String },

    #[error("`{declaration}` has unbound type parameters: {}", params.join(", "))]
    GenericDeclaration {
        declaration: String,
        params: Vec<String>,
    },

    #[error("`{declaration}.{attribute}` has an unresolved type `{ty}`")]
    UnresolvedType {
        declaration: String,
        attribute: String,
        ty: String,
    },

    #[error("`{declaration}.{attribute}` is marked as both partition key and sort key")]
    ConflictingKeyRoles {
        declaration: String,
        attribute: String,
    },

    #[error("`{declaration}.{attribute}` has more than one attribute name override")]
    DuplicateAttributeOverride {
        declaration: String,
        attribute: String,
    },
}

/// A class descriptor violates a schema invariant
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SchemaValidationError {
    #[error("`{declaration}`: attributes {} all map to item key `{key}`", attributes.join(", "))]
    DuplicateItemKey {
        declaration: String,
        key: String,
        attributes: Vec<String>,
    },

    #[error("`{declaration}` has no partition key")]
    MissingPartitionKey { declaration: String },

    #[error("`{declaration}` has more than one partition key: {}", attributes.join(", "))]
    MultiplePartitionKeys {
        declaration: String,
        attributes: Vec<String>,
    },

    #[error("`{declaration}` has more than one sort key: {}", attributes.join(", "))]
    MultipleSortKeys {
        declaration: String,
        attributes: Vec<String>,
    },

    /// The attribute's type, or a type nested inside it, has no item conversion
    #[error("`{declaration}.{attribute}`: type `{ty}` cannot be converted to an item value")]
    UnsupportedType {
        declaration: String,
        attribute: String,
        ty: String,
    },

    /// Keys must be non-nullable text, number or binary values
    #[error("`{declaration}.{attribute}`: {role} must be a non-nullable string, number or binary, found `{ty}`")]
    InvalidKeyType {
        declaration: String,
        attribute: String,
        role: String,
        ty: String,
    },

    /// Another record already generates this file in the destination module
    #[error("`{declaration}`: `{module}` already contains a generated `{file_name}`")]
    GeneratedNameCollision {
        declaration: String,
        module: String,
        file_name: String,
    },

    /// Generated items cannot be more visible than the record they expose
    #[error("`{declaration}`: visibility `{requested}` is wider than the record's `{record}`")]
    VisibilityExceedsRecord {
        declaration: String,
        requested: String,
        record: String,
    },

    /// The destination module cannot name the record or its fields
    #[error("`{declaration}`: destination `{destination}` is outside {scope}, which the generated code needs to reach")]
    UnreachableDestination {
        declaration: String,
        destination: String,
        scope: String,
    },
}

impl SchemaValidationError {
    /// Short name of the violated rule
    pub fn rule(&self) -> &'static str {
        match self {
            SchemaValidationError::DuplicateItemKey { .. } => "unique-item-keys",
            SchemaValidationError::MissingPartitionKey { .. }
            | SchemaValidationError::MultiplePartitionKeys { .. } => "one-partition-key",
            SchemaValidationError::MultipleSortKeys { .. } => "at-most-one-sort-key",
            SchemaValidationError::UnsupportedType { .. } => "convertible-types",
            SchemaValidationError::InvalidKeyType { .. } => "key-types",
            SchemaValidationError::GeneratedNameCollision { .. } => "unique-generated-files",
            SchemaValidationError::VisibilityExceedsRecord { .. } => "visibility-within-record",
            SchemaValidationError::UnreachableDestination { .. } => "reachable-destination",
        }
    }
}
