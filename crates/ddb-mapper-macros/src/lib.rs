//! ddb-mapper-macros - `#[derive(DynamoDbItem)]` and `#[derive(DynamoDbAttributes)]`
//!
//! The derive describes the annotated struct as a
//! [`Declaration`](ddb_mapper_codegen::Declaration), runs the generator on it
//! and splices the generated converter, schema, table extension and builder
//! next to the struct. Validation failures become `compile_error!`s.

use darling::ast::Data;
use darling::util::Ignored;
use darling::{FromDeriveInput, FromField};
use ddb_mapper_codegen::source::{resolve_type, source_visibility};
use ddb_mapper_codegen::{
    Annotation, CodegenOptions, Declaration, DeclarationKind, DeclaredProperty,
    GenerateBuilderClasses, Generator, Visibility,
};
use proc_macro::TokenStream;
use quote::quote;
use syn::{DeriveInput, parse_macro_input};

/// Container options for the DynamoDbItem derive
#[derive(Debug, FromDeriveInput)]
#[darling(attributes(ddb), supports(struct_any, enum_any))]
struct ItemOpts {
    ident: syn::Ident,
    vis: syn::Visibility,
    generics: syn::Generics,
    data: Data<Ignored, FieldOpts>,

    /// The record can be built with `Default` and field assignment
    #[darling(default)]
    default: bool,

    #[darling(default)]
    always_generate_builders: bool,

    #[darling(default)]
    visibility: Option<String>,

    #[darling(default)]
    get_table_extension: Option<bool>,
}

/// Field options for the DynamoDbItem derive
#[derive(Debug, FromField)]
#[darling(attributes(ddb))]
struct FieldOpts {
    ident: Option<syn::Ident>,
    ty: syn::Type,

    #[darling(default)]
    partition_key: bool,

    #[darling(default)]
    sort_key: bool,

    /// Item key override
    #[darling(default)]
    name: Option<String>,
}

/// Derive an item converter, schema and builder for a struct
///
/// # Example
///
/// ```ignore
/// #[derive(Debug, Clone, PartialEq, DynamoDbItem)]
/// #[ddb(visibility = "public")]
/// pub struct User {
///     #[ddb(partition_key)]
///     pub id: i32,
///     #[ddb(name = "fName")]
///     pub first_name: String,
///     pub age: Option<i32>,
/// }
/// ```
///
/// generates `UserConverter`, `UserSchema`, `UserTableExt` and `UserBuilder`.
#[proc_macro_derive(DynamoDbItem, attributes(ddb))]
pub fn derive_dynamo_db_item(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    TokenStream::from(expand(&input))
}

/// Register the `#[ddb(...)]` attributes without generating anything
///
/// For records whose items are written ahead of time by the `ddb-mapper`
/// CLI, which reads the same attributes from source.
///
/// ```ignore
/// #[derive(DynamoDbAttributes)]
/// #[ddb(item)]
/// pub struct User {
///     #[ddb(partition_key)]
///     pub id: i32,
/// }
/// ```
#[proc_macro_derive(DynamoDbAttributes, attributes(ddb))]
pub fn derive_dynamo_db_attributes(_input: TokenStream) -> TokenStream {
    TokenStream::new()
}

/// Expand a derive input into the generated items or compile errors.
fn expand(input: &DeriveInput) -> proc_macro2::TokenStream {
    let opts = match ItemOpts::from_derive_input(input) {
        Ok(opts) => opts,
        Err(e) => return e.write_errors(),
    };

    let options = match codegen_options(&opts) {
        Ok(options) => options,
        Err(e) => return e.to_compile_error(),
    };

    let declaration = declaration(&opts);
    let code = match Generator::new(options).expand(&declaration) {
        Ok(code) => code,
        Err(diagnostics) => {
            let errors = diagnostics
                .iter()
                .map(|diagnostic| syn::Error::new(opts.ident.span(), diagnostic.kind.to_string()))
                .reduce(|mut all, next| {
                    all.combine(next);
                    all
                });
            return errors
                .map(|e| e.to_compile_error())
                .unwrap_or_default();
        }
    };

    match code.parse::<proc_macro2::TokenStream>() {
        Ok(tokens) => tokens,
        Err(e) => {
            let message = format!("generated code for `{}` does not parse: {e}", opts.ident);
            quote! { ::std::compile_error!(#message); }
        }
    }
}

fn codegen_options(opts: &ItemOpts) -> syn::Result<CodegenOptions> {
    let visibility = match &opts.visibility {
        Some(value) => value
            .parse::<Visibility>()
            .map_err(|e| syn::Error::new(opts.ident.span(), e))?,
        None => Visibility::Implicit,
    };

    let generate_builder_classes = if opts.always_generate_builders {
        GenerateBuilderClasses::Always
    } else {
        GenerateBuilderClasses::WhenRequired
    };

    Ok(CodegenOptions {
        generate_builder_classes,
        visibility,
        generate_get_table_extension: opts.get_table_extension.unwrap_or(true),
        ..CodegenOptions::default()
    })
}

/// Describe the derive input the way the source front-end would.
///
/// Generated items live in the record's module, so every field is settable
/// and the namespace is left empty.
fn declaration(opts: &ItemOpts) -> Declaration {
    let mut declaration = Declaration::new("", opts.ident.to_string()).annotated(Annotation::Item);
    declaration.visibility = source_visibility(&opts.vis);
    declaration.default_constructible = opts.default;
    declaration.type_params = opts
        .generics
        .params
        .iter()
        .map(|param| match param {
            syn::GenericParam::Type(t) => t.ident.to_string(),
            syn::GenericParam::Lifetime(l) => l.lifetime.to_string(),
            syn::GenericParam::Const(c) => c.ident.to_string(),
        })
        .collect();

    match &opts.data {
        Data::Enum(_) => declaration.kind = DeclarationKind::Enum,
        Data::Struct(fields) if fields.is_tuple() => declaration.kind = DeclarationKind::TupleStruct,
        Data::Struct(fields) if fields.is_unit() => declaration.kind = DeclarationKind::UnitStruct,
        Data::Struct(fields) => {
            declaration.properties = fields.iter().filter_map(property).collect();
        }
    }

    declaration
}

fn property(field: &FieldOpts) -> Option<DeclaredProperty> {
    let ident = field.ident.as_ref()?;

    let mut annotations = Vec::new();
    if field.partition_key {
        annotations.push(Annotation::PartitionKey);
    }
    if field.sort_key {
        annotations.push(Annotation::SortKey);
    }
    if let Some(name) = &field.name {
        annotations.push(Annotation::Attribute { name: name.clone() });
    }

    Some(DeclaredProperty {
        name: ident.to_string(),
        ty: resolve_type(&field.ty),
        settable: true,
        annotations,
    })
}
