//! Type references used by declarations, plans and emitted code.
//!
//! A [`TypeRef`] names a concrete or generic type by namespace and simple
//! name. It is a plain value: two references are equal when namespace, name,
//! nullability and generic parameters all match.
//!
//! # Rendering
//!
//! | TypeRef | Rendered |
//! |---------|----------|
//! | `("", "i32")` | `i32` |
//! | `("std::string", "String")` | `::std::string::String` |
//! | `("crate::model", "User")` | `crate::model::User` |
//! | nullable `("", "i32")` | `::std::option::Option<i32>` |

use std::fmt;

/// A reference to a concrete or generic type.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TypeRef {
    /// Module path, empty for primitives and unqualified names.
    pub namespace: String,

    /// Simple name.
    pub name: String,

    /// Whether the value may be absent (`Option<T>`).
    pub nullable: bool,

    /// Generic parameters, empty for non-generic types.
    pub generics: Vec<TypeRef>,
}

impl TypeRef {
    pub fn new(namespace: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            namespace: namespace.into(),
            name: name.into(),
            nullable: false,
            generics: Vec::new(),
        }
    }

    pub fn with_generics(mut self, generics: Vec<TypeRef>) -> Self {
        self.generics = generics;
        self
    }

    /// A nullable copy of this reference.
    pub fn nullable(&self) -> Self {
        Self {
            nullable: true,
            ..self.clone()
        }
    }

    /// A non-nullable copy of this reference.
    pub fn non_null(&self) -> Self {
        Self {
            nullable: false,
            ..self.clone()
        }
    }

    /// Whether this reference names `namespace::name`, ignoring generics and nullability.
    pub fn is(&self, namespace: &str, name: &str) -> bool {
        self.namespace == namespace && self.name == name
    }

    /// Render the reference as Rust source.
    pub fn render(&self) -> String {
        let base = self.render_base(true);
        if self.nullable {
            format!("::std::option::Option<{base}>")
        } else {
            base
        }
    }

    fn render_base(&self, qualified: bool) -> String {
        let mut out = if !qualified || self.namespace.is_empty() {
            self.name.clone()
        } else if is_relative_path(&self.namespace) {
            format!("{}::{}", self.namespace, self.name)
        } else {
            format!("::{}::{}", self.namespace, self.name)
        };

        if !self.generics.is_empty() {
            let params: Vec<String> = self
                .generics
                .iter()
                .map(|g| if qualified { g.render() } else { g.to_string() })
                .collect();
            out.push('<');
            out.push_str(&params.join(", "));
            out.push('>');
        }

        out
    }
}

/// Short spelling used in diagnostics, e.g. `Option<Vec<String>>`.
impl fmt::Display for TypeRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let base = self.render_base(false);
        if self.nullable {
            write!(f, "Option<{base}>")
        } else {
            write!(f, "{base}")
        }
    }
}

fn is_relative_path(namespace: &str) -> bool {
    matches!(
        namespace.split("::").next(),
        Some("crate") | Some("self") | Some("super")
    )
}

/// Catalogue of the type references the generator knows about.
pub struct Types;

impl Types {
    pub const STRING_NAMESPACE: &'static str = "std::string";
    pub const VEC_NAMESPACE: &'static str = "std::vec";
    pub const COLLECTIONS_NAMESPACE: &'static str = "std::collections";

    /// Integer and float primitives, all stored as number values.
    pub const NUMBERS: &'static [&'static str] = &[
        "i8", "i16", "i32", "i64", "i128", "isize", "u8", "u16", "u32", "u64", "u128", "usize",
        "f32", "f64",
    ];

    /// A builtin such as `i32` or `bool`
    pub fn primitive(name: &str) -> TypeRef {
        TypeRef::new("", name)
    }

    pub fn string() -> TypeRef {
        TypeRef::new(Self::STRING_NAMESPACE, "String")
    }

    pub fn bool() -> TypeRef {
        Self::primitive("bool")
    }

    /// `Vec<u8>`, stored as a binary value
    pub fn bytes() -> TypeRef {
        Self::list(Self::primitive("u8"))
    }

    /// `Vec<element>`
    pub fn list(element: TypeRef) -> TypeRef {
        TypeRef::new(Self::VEC_NAMESPACE, "Vec").with_generics(vec![element])
    }

    /// `HashMap<key, value>`
    pub fn map(key: TypeRef, value: TypeRef) -> TypeRef {
        TypeRef::new(Self::COLLECTIONS_NAMESPACE, "HashMap").with_generics(vec![key, value])
    }

    /// `BTreeMap<key, value>`
    pub fn btree_map(key: TypeRef, value: TypeRef) -> TypeRef {
        TypeRef::new(Self::COLLECTIONS_NAMESPACE, "BTreeMap").with_generics(vec![key, value])
    }

    /// `HashMap<String, value>`
    pub fn string_map(value: TypeRef) -> TypeRef {
        Self::map(Self::string(), value)
    }

    pub fn is_number(ty: &TypeRef) -> bool {
        ty.namespace.is_empty() && ty.generics.is_empty() && Self::NUMBERS.contains(&ty.name.as_str())
    }

    pub fn is_string(ty: &TypeRef) -> bool {
        ty.is(Self::STRING_NAMESPACE, "String") && ty.generics.is_empty()
    }

    pub fn is_bool(ty: &TypeRef) -> bool {
        ty.is("", "bool") && ty.generics.is_empty()
    }

    pub fn is_bytes(ty: &TypeRef) -> bool {
        ty.is(Self::VEC_NAMESPACE, "Vec")
            && ty.generics.len() == 1
            && ty.generics[0] == Self::primitive("u8")
    }

    pub fn is_list(ty: &TypeRef) -> bool {
        ty.is(Self::VEC_NAMESPACE, "Vec") && ty.generics.len() == 1
    }

    pub fn is_map(ty: &TypeRef) -> bool {
        (ty.is(Self::COLLECTIONS_NAMESPACE, "HashMap")
            || ty.is(Self::COLLECTIONS_NAMESPACE, "BTreeMap"))
            && ty.generics.len() == 2
    }
}

#[cfg(test)]
#[path = "types/types_tests.rs"]
mod types_tests;
