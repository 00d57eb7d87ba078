//! # ddb-mapper-codegen
//!
//! Generates item converters, schemas and builders for record types
//! annotated as DynamoDB items.
//!
//! ## Pipeline
//!
//! ```text
//! Rust source / derive input
//!     ↓
//!  [source]        → Declaration
//!     ↓
//!  [scan]          → ClassDescriptor     (DiscoveryError)
//!     ↓
//!  [plan]          → SchemaPlan          (SchemaValidationError)
//!     ↓
//!  [render]        → converter, schema, table extension, builder
//!     ↓
//!  [generator]     → GeneratedFile / inline source
//! ```
//!
//! Declarations that fail a stage are reported as [`Diagnostic`]s and
//! skipped. The remaining declarations are still generated.
//!
//! ## Crate Structure
//!
//! - [`types`] - type references and the catalogue of known types
//! - [`declaration`] / [`descriptor`] - front-end input and scanner output
//! - [`source`] - `syn` front-end for Rust source files
//! - [`config`] - generation options
//! - [`scope`] - where generated items can be named from
//! - [`generator`] - the orchestrator

pub mod config;
pub mod declaration;
pub mod descriptor;
pub mod diagnostics;
pub mod error;
pub mod generator;
pub mod naming;
pub mod plan;
pub mod render;
pub mod scan;
pub mod scope;
pub mod source;
pub mod types;

pub use config::{CodegenOptions, DestinationPackage, GenerateBuilderClasses, Visibility};
pub use declaration::{
    Annotation, Declaration, DeclarationKind, DeclaredProperty, DeclaredType, SourceLocation,
    SourceVisibility,
};
pub use descriptor::{AttributeDescriptor, ClassDescriptor, KeyRole};
pub use diagnostics::{Diagnostic, DiagnosticKind, Diagnostics};
pub use error::{DiscoveryError, SchemaValidationError};
pub use generator::{GeneratedFile, Generation, GenerationPass, Generator};
pub use plan::{SchemaPlan, ValuePlan, ValueShape, build_plan};
pub use scan::{ScanOutcome, ScanToken};
pub use scope::Scope;
pub use types::{TypeRef, Types};
