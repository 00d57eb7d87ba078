//! Normalized descriptors produced by the scanner.

use crate::declaration::{SourceLocation, SourceVisibility};
use crate::types::TypeRef;
use std::fmt;

/// The role a property plays in the item's primary key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum KeyRole {
    #[default]
    None,
    Partition,
    Sort,
}

impl fmt::Display for KeyRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            KeyRole::None => write!(f, "none"),
            KeyRole::Partition => write!(f, "partition key"),
            KeyRole::Sort => write!(f, "sort key"),
        }
    }
}

/// One mapped property of a record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttributeDescriptor {
    /// Declared field name, possibly a raw identifier (`r#type`).
    pub name: String,
    pub ty: TypeRef,

    /// Explicit item key, if overridden.
    pub item_name: Option<String>,

    pub key_role: KeyRole,
}

impl AttributeDescriptor {
    pub fn new(name: impl Into<String>, ty: TypeRef) -> Self {
        Self {
            name: name.into(),
            ty,
            item_name: None,
            key_role: KeyRole::None,
        }
    }

    pub fn renamed(mut self, item_name: impl Into<String>) -> Self {
        self.item_name = Some(item_name.into());
        self
    }

    pub fn with_role(mut self, key_role: KeyRole) -> Self {
        self.key_role = key_role;
        self
    }

    /// The field name without any raw identifier prefix.
    pub fn plain_name(&self) -> &str {
        self.name.strip_prefix("r#").unwrap_or(&self.name)
    }

    /// The key this attribute is stored under: the override, else the field name.
    pub fn item_key(&self) -> &str {
        self.item_name.as_deref().unwrap_or_else(|| self.plain_name())
    }
}

/// A validated item declaration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassDescriptor {
    pub name: String,
    pub namespace: String,
    pub visibility: SourceVisibility,
    pub attributes: Vec<AttributeDescriptor>,

    /// `Default` is implemented and every attribute is publicly settable.
    pub has_mutable_default: bool,

    /// Every attribute can be named from outside the record's module.
    pub fields_visible: bool,

    pub location: SourceLocation,
}

impl ClassDescriptor {
    pub fn new(namespace: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            namespace: namespace.into(),
            visibility: SourceVisibility::Public,
            attributes: Vec::new(),
            has_mutable_default: false,
            fields_visible: true,
            location: SourceLocation::default(),
        }
    }

    pub fn with_attribute(mut self, attribute: AttributeDescriptor) -> Self {
        self.attributes.push(attribute);
        self
    }

    /// The record as a type reference.
    pub fn record_type(&self) -> TypeRef {
        TypeRef::new(self.namespace.clone(), self.name.clone())
    }

    pub fn qualified_name(&self) -> String {
        if self.namespace.is_empty() {
            self.name.clone()
        } else {
            format!("{}::{}", self.namespace, self.name)
        }
    }
}
