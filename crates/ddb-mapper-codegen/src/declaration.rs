//! Declarations handed to the generator by a front-end.
//!
//! A front-end (the syn-based [`crate::source`] parser, or the derive macro)
//! describes every type it can see as a [`Declaration`]. The generator never
//! inspects host-language reflection; it only reads these records.

use crate::types::TypeRef;
use std::fmt;

/// Annotations the generator understands.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Annotation {
    /// Marks a declaration as a mappable item type.
    Item,

    /// Overrides the item key for a property.
    Attribute { name: String },

    /// Marks a property as the partition key.
    PartitionKey,

    /// Marks a property as the sort key.
    SortKey,
}

/// The shape of a declaration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeclarationKind {
    Struct,
    TupleStruct,
    UnitStruct,
    Enum,
    Trait,
    Union,
}

impl fmt::Display for DeclarationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DeclarationKind::Struct => write!(f, "struct"),
            DeclarationKind::TupleStruct => write!(f, "tuple struct"),
            DeclarationKind::UnitStruct => write!(f, "unit struct"),
            DeclarationKind::Enum => write!(f, "enum"),
            DeclarationKind::Trait => write!(f, "trait"),
            DeclarationKind::Union => write!(f, "union"),
        }
    }
}

/// Visibility of the source declaration.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SourceVisibility {
    #[default]
    Private,
    Crate,
    Public,
    /// `pub(super)`, `pub(in path)` and friends, kept verbatim.
    Restricted(String),
}

impl SourceVisibility {
    /// The modifier as it appears in source, with a trailing space when non-empty.
    pub fn modifier(&self) -> String {
        match self {
            SourceVisibility::Private => String::new(),
            SourceVisibility::Crate => "pub(crate) ".to_string(),
            SourceVisibility::Public => "pub ".to_string(),
            SourceVisibility::Restricted(vis) => format!("{vis} "),
        }
    }
}

/// The declared type of a property.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeclaredType {
    Resolved(TypeRef),
    /// The front-end could not resolve the type; the source spelling is kept.
    Unresolved(String),
}

/// Where a declaration came from.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SourceLocation {
    pub file: String,
    pub line: usize,
}

impl SourceLocation {
    pub fn new(file: impl Into<String>, line: usize) -> Self {
        Self {
            file: file.into(),
            line,
        }
    }
}

impl fmt::Display for SourceLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.file.is_empty() {
            write!(f, "<unknown>")
        } else {
            write!(f, "{}:{}", self.file, self.line)
        }
    }
}

/// A property (field) of a declaration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeclaredProperty {
    pub name: String,
    pub ty: DeclaredType,

    /// Whether the field can be assigned from outside the type.
    pub settable: bool,

    pub annotations: Vec<Annotation>,
}

impl DeclaredProperty {
    pub fn new(name: impl Into<String>, ty: TypeRef) -> Self {
        Self {
            name: name.into(),
            ty: DeclaredType::Resolved(ty),
            settable: true,
            annotations: Vec::new(),
        }
    }

    pub fn annotated(mut self, annotation: Annotation) -> Self {
        self.annotations.push(annotation);
        self
    }
}

/// A type declaration visible to the generator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Declaration {
    pub name: String,
    pub namespace: String,
    pub kind: DeclarationKind,

    /// Names of unbound type parameters.
    pub type_params: Vec<String>,

    pub visibility: SourceVisibility,
    pub properties: Vec<DeclaredProperty>,
    pub annotations: Vec<Annotation>,

    /// The type implements `Default`.
    pub default_constructible: bool,

    pub location: SourceLocation,
}

impl Declaration {
    /// A public struct with no properties or annotations.
    pub fn new(namespace: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            namespace: namespace.into(),
            kind: DeclarationKind::Struct,
            type_params: Vec::new(),
            visibility: SourceVisibility::Public,
            properties: Vec::new(),
            annotations: Vec::new(),
            default_constructible: false,
            location: SourceLocation::default(),
        }
    }

    pub fn annotated(mut self, annotation: Annotation) -> Self {
        self.annotations.push(annotation);
        self
    }

    pub fn with_property(mut self, property: DeclaredProperty) -> Self {
        self.properties.push(property);
        self
    }

    pub fn is_item(&self) -> bool {
        self.annotations.contains(&Annotation::Item)
    }

    /// `namespace::Name`, or just `Name` without a namespace.
    pub fn qualified_name(&self) -> String {
        if self.namespace.is_empty() {
            self.name.clone()
        } else {
            format!("{}::{}", self.namespace, self.name)
        }
    }
}
