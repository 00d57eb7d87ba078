//! Rust source front-end.
//!
//! Parses Rust source with [`syn`] and describes every type declaration it
//! finds as a [`Declaration`]. Inline modules are walked recursively; their
//! declarations get the nested module path as namespace.
//!
//! # Recognized attributes
//!
//! | Attribute | Placement | Meaning |
//! |-----------|-----------|---------|
//! | `#[derive(DynamoDbItem)]` / `#[ddb(item)]` | struct | item declaration |
//! | `#[ddb(default)]` | struct | constructible through `Default` |
//! | `#[ddb(partition_key)]` | field | partition key |
//! | `#[ddb(sort_key)]` | field | sort key |
//! | `#[ddb(name = "...")]` | field | item key override |
//!
//! The derive-only container options (`always_generate_builders`,
//! `visibility`, `get_table_extension`) are accepted and ignored here; the
//! CLI takes those from its configuration instead.
//!
//! # Type resolution
//!
//! Primitives, `String`, `Option<T>`, `Vec<T>`, `HashMap<K, V>` and
//! `BTreeMap<K, V>` are recognized by their last path segment. Other paths
//! become named types. References, tuples, arrays, slices and trait objects
//! stay unresolved and are reported by the scanner.

use crate::declaration::{
    Annotation, Declaration, DeclarationKind, DeclaredProperty, DeclaredType, SourceLocation,
    SourceVisibility,
};
use crate::types::{TypeRef, Types};
use anyhow::{Context, Result};
use quote::ToTokens;
use std::path::Path;
use syn::punctuated::Punctuated;
use syn::spanned::Spanned;
use syn::{Attribute, Fields, GenericArgument, Item, PathArguments, Token, Type};

/// Attribute namespace shared with the derive macro.
pub const ATTRIBUTE: &str = "ddb";

/// Name of the derive that marks an item.
pub const DERIVE: &str = "DynamoDbItem";

/// Container options that only the derive macro interprets.
const DERIVE_OPTIONS: &[&str] = &["always_generate_builders", "visibility", "get_table_extension"];

/// Parse a Rust source file whose items live in `module`.
pub fn parse_file(path: &Path, module: &str) -> Result<Vec<Declaration>> {
    let content =
        std::fs::read_to_string(path).with_context(|| format!("Failed to read {path:?}"))?;

    parse_source(&content, &path.display().to_string(), module)
}

/// Parse Rust source code whose items live in `module`.
///
/// `file` is only used for source locations.
pub fn parse_source(source: &str, file: &str, module: &str) -> Result<Vec<Declaration>> {
    let parsed =
        syn::parse_file(source).with_context(|| format!("Failed to parse Rust source: {file}"))?;

    let mut declarations = Vec::new();
    collect(&parsed.items, file, module, &mut declarations)?;

    tracing::debug!(file, module, declarations = declarations.len(), "parsed source");
    Ok(declarations)
}

fn collect(items: &[Item], file: &str, module: &str, out: &mut Vec<Declaration>) -> Result<()> {
    let first = out.len();

    for item in items {
        let declaration = match item {
            Item::Struct(s) => from_struct(s, file, module)?,
            Item::Enum(e) => opaque(
                &e.ident,
                &e.vis,
                &e.attrs,
                &e.generics,
                DeclarationKind::Enum,
                file,
                module,
            )?,
            Item::Union(u) => opaque(
                &u.ident,
                &u.vis,
                &u.attrs,
                &u.generics,
                DeclarationKind::Union,
                file,
                module,
            )?,
            Item::Trait(t) => opaque(
                &t.ident,
                &t.vis,
                &t.attrs,
                &t.generics,
                DeclarationKind::Trait,
                file,
                module,
            )?,
            Item::Mod(m) => {
                if let Some((_, content)) = &m.content {
                    let nested = join_module(module, &m.ident.to_string());
                    collect(content, file, &nested, out)?;
                }
                continue;
            }
            _ => continue,
        };
        out.push(declaration);
    }

    // `impl Default for T` makes T default-constructible within this module
    for item in items {
        if let Item::Impl(imp) = item
            && let Some(name) = default_impl_target(imp)
        {
            for declaration in out[first..]
                .iter_mut()
                .filter(|d| d.namespace == module && d.name == name)
            {
                declaration.default_constructible = true;
            }
        }
    }

    Ok(())
}

fn from_struct(s: &syn::ItemStruct, file: &str, module: &str) -> Result<Declaration> {
    let mut declaration = opaque(
        &s.ident,
        &s.vis,
        &s.attrs,
        &s.generics,
        DeclarationKind::Struct,
        file,
        module,
    )?;

    match &s.fields {
        Fields::Named(fields) => {
            for field in &fields.named {
                declaration.properties.push(property(field).with_context(|| {
                    format!("{}: invalid attribute on `{}`", declaration.location, s.ident)
                })?);
            }
        }
        Fields::Unnamed(_) => declaration.kind = DeclarationKind::TupleStruct,
        Fields::Unit => declaration.kind = DeclarationKind::UnitStruct,
    }

    if derives(&s.attrs, "Default") {
        declaration.default_constructible = true;
    }

    Ok(declaration)
}

/// A declaration without properties.
fn opaque(
    ident: &syn::Ident,
    vis: &syn::Visibility,
    attrs: &[Attribute],
    generics: &syn::Generics,
    kind: DeclarationKind,
    file: &str,
    module: &str,
) -> Result<Declaration> {
    let location = SourceLocation::new(file, ident.span().start().line);
    let container = container_attributes(attrs)
        .with_context(|| format!("{location}: invalid attribute on `{ident}`"))?;

    let mut annotations = Vec::new();
    if container.item || derives(attrs, DERIVE) {
        annotations.push(Annotation::Item);
    }

    Ok(Declaration {
        name: ident.to_string(),
        namespace: module.to_string(),
        kind,
        type_params: generic_params(generics),
        visibility: source_visibility(vis),
        properties: Vec::new(),
        annotations,
        default_constructible: container.default,
        location,
    })
}

fn property(field: &syn::Field) -> syn::Result<DeclaredProperty> {
    let name = match &field.ident {
        Some(ident) => ident.to_string(),
        None => return Err(syn::Error::new(field.span(), "field must have a name")),
    };

    Ok(DeclaredProperty {
        name,
        ty: resolve_type(&field.ty),
        settable: !matches!(field.vis, syn::Visibility::Inherited),
        annotations: field_annotations(&field.attrs)?,
    })
}

#[derive(Debug, Default)]
struct ContainerAttributes {
    item: bool,
    default: bool,
}

fn container_attributes(attrs: &[Attribute]) -> syn::Result<ContainerAttributes> {
    let mut container = ContainerAttributes::default();

    for attr in attrs.iter().filter(|a| a.path().is_ident(ATTRIBUTE)) {
        attr.parse_nested_meta(|meta| {
            if meta.path.is_ident("item") {
                container.item = true;
            } else if meta.path.is_ident("default") {
                container.default = true;
            } else if DERIVE_OPTIONS.iter().any(|option| meta.path.is_ident(option)) {
                if meta.input.peek(Token![=]) {
                    let _: syn::Expr = meta.value()?.parse()?;
                }
            } else {
                return Err(meta.error("unknown ddb container attribute"));
            }
            Ok(())
        })?;
    }

    Ok(container)
}

/// Parse the `#[ddb(...)]` attributes of a field.
pub fn field_annotations(attrs: &[Attribute]) -> syn::Result<Vec<Annotation>> {
    let mut annotations = Vec::new();

    for attr in attrs.iter().filter(|a| a.path().is_ident(ATTRIBUTE)) {
        attr.parse_nested_meta(|meta| {
            if meta.path.is_ident("partition_key") {
                annotations.push(Annotation::PartitionKey);
            } else if meta.path.is_ident("sort_key") {
                annotations.push(Annotation::SortKey);
            } else if meta.path.is_ident("name") {
                let name: syn::LitStr = meta.value()?.parse()?;
                annotations.push(Annotation::Attribute { name: name.value() });
            } else {
                return Err(meta.error("unknown ddb field attribute"));
            }
            Ok(())
        })?;
    }

    Ok(annotations)
}

/// Whether `#[derive(...)]` lists `name`, with or without a path.
fn derives(attrs: &[Attribute], name: &str) -> bool {
    attrs
        .iter()
        .filter(|a| a.path().is_ident("derive"))
        .filter_map(|a| {
            a.parse_args_with(Punctuated::<syn::Path, Token![,]>::parse_terminated)
                .ok()
        })
        .flatten()
        .any(|path| path.segments.last().is_some_and(|s| s.ident == name))
}

/// The self type of an `impl Default for T` block, when `T` is a plain name.
fn default_impl_target(imp: &syn::ItemImpl) -> Option<String> {
    let (_, trait_path, _) = imp.trait_.as_ref()?;
    if !trait_path.segments.last().is_some_and(|s| s.ident == "Default") {
        return None;
    }
    match imp.self_ty.as_ref() {
        Type::Path(tp) if tp.qself.is_none() => {
            tp.path.segments.last().map(|s| s.ident.to_string())
        }
        _ => None,
    }
}

fn generic_params(generics: &syn::Generics) -> Vec<String> {
    generics
        .params
        .iter()
        .map(|param| match param {
            syn::GenericParam::Type(t) => t.ident.to_string(),
            syn::GenericParam::Lifetime(l) => l.lifetime.to_string(),
            syn::GenericParam::Const(c) => c.ident.to_string(),
        })
        .collect()
}

/// Map a `syn` visibility to a [`SourceVisibility`].
pub fn source_visibility(vis: &syn::Visibility) -> SourceVisibility {
    match vis {
        syn::Visibility::Public(_) => SourceVisibility::Public,
        syn::Visibility::Inherited => SourceVisibility::Private,
        syn::Visibility::Restricted(r) if r.in_token.is_none() && r.path.is_ident("crate") => {
            SourceVisibility::Crate
        }
        syn::Visibility::Restricted(r) => {
            let path = path_string(&r.path);
            if r.in_token.is_some() {
                SourceVisibility::Restricted(format!("pub(in {path})"))
            } else {
                SourceVisibility::Restricted(format!("pub({path})"))
            }
        }
    }
}

/// Resolve a `syn` type into a [`DeclaredType`].
pub fn resolve_type(ty: &Type) -> DeclaredType {
    match resolve(ty) {
        Some(resolved) => DeclaredType::Resolved(resolved),
        None => DeclaredType::Unresolved(spelling(ty)),
    }
}

fn resolve(ty: &Type) -> Option<TypeRef> {
    match ty {
        Type::Paren(inner) => resolve(&inner.elem),
        Type::Group(inner) => resolve(&inner.elem),
        Type::Path(tp) if tp.qself.is_none() => resolve_path(&tp.path),
        _ => None,
    }
}

fn resolve_path(path: &syn::Path) -> Option<TypeRef> {
    let last = path.segments.last()?;
    let name = last.ident.to_string();
    let args = type_arguments(&last.arguments)?;

    let resolved = match (name.as_str(), args.as_slice()) {
        ("Option", [inner]) => {
            let inner = resolve(inner)?;
            // Option<Option<T>> has no distinct item encoding
            if inner.nullable {
                return None;
            }
            return Some(inner.nullable());
        }
        ("String", []) => Types::string(),
        ("bool", []) if path.segments.len() == 1 => Types::bool(),
        (primitive, []) if path.segments.len() == 1 && Types::NUMBERS.contains(&primitive) => {
            Types::primitive(primitive)
        }
        ("Vec", [element]) => Types::list(resolve(element)?),
        ("HashMap", [key, value]) => Types::map(resolve(key)?, resolve(value)?),
        ("BTreeMap", [key, value]) => Types::btree_map(resolve(key)?, resolve(value)?),
        _ => {
            let namespace = path
                .segments
                .iter()
                .take(path.segments.len() - 1)
                .map(|s| s.ident.to_string())
                .collect::<Vec<_>>()
                .join("::");
            let generics = args
                .iter()
                .map(|arg| resolve(arg))
                .collect::<Option<Vec<_>>>()?;
            TypeRef::new(namespace, name).with_generics(generics)
        }
    };

    Some(resolved)
}

/// Type arguments of a path segment; `None` if any argument is not a type.
fn type_arguments(arguments: &PathArguments) -> Option<Vec<&Type>> {
    match arguments {
        PathArguments::None => Some(Vec::new()),
        PathArguments::AngleBracketed(args) => args
            .args
            .iter()
            .map(|arg| match arg {
                GenericArgument::Type(ty) => Some(ty),
                _ => None,
            })
            .collect(),
        PathArguments::Parenthesized(_) => None,
    }
}

fn path_string(path: &syn::Path) -> String {
    path.segments
        .iter()
        .map(|s| s.ident.to_string())
        .collect::<Vec<_>>()
        .join("::")
}

/// Source spelling of a type, with token spacing tidied up.
fn spelling(ty: &Type) -> String {
    ty.to_token_stream()
        .to_string()
        .replace(" < ", "<")
        .replace(" >", ">")
        .replace("& ", "&")
        .replace(" ,", ",")
        .replace(" :: ", "::")
}

fn join_module(parent: &str, child: &str) -> String {
    if parent.is_empty() {
        child.to_string()
    } else {
        format!("{parent}::{child}")
    }
}
