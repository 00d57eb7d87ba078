//! Source emitters
//!
//! Each emitter turns a validated [`SchemaPlan`] into Rust source text.
//! Emitted code refers to every runtime item by its absolute path
//! (`::ddb_mapper::..`, `::std::..`) so it compiles no matter what the
//! surrounding module imports.
//!
//! Two placements are supported:
//!
//! - **file**: items live in a generated module next to other generated
//!   modules and reach the record through its full path.
//! - **inline**: items are spliced next to the record by the derive macro.

pub mod builder;
pub mod converter;
pub mod schema;

use crate::plan::SchemaPlan;

/// Header written at the top of every generated file.
pub const FILE_HEADER: &str = "// Code generated by ddb-mapper-codegen. DO NOT EDIT.\n";

/// Placement-dependent names shared by the emitters.
#[derive(Debug, Clone)]
pub struct RenderContext<'a> {
    pub plan: &'a SchemaPlan,

    /// Path to the record type.
    pub record: String,

    /// Path to the generated builder type.
    pub builder: String,

    /// Visibility modifier for generated items, with trailing space.
    pub modifier: String,

    pub inline: bool,
}

impl<'a> RenderContext<'a> {
    /// Context for items written to the destination module.
    ///
    /// The destination is a different module from the record's, so the
    /// modifier names the plan's scope by absolute path.
    pub fn file(plan: &'a SchemaPlan) -> Self {
        Self {
            plan,
            record: plan.record.render(),
            builder: format!("super::{}", plan.builder_name()),
            modifier: plan.scope.modifier(),
            inline: false,
        }
    }

    /// Context for items spliced next to the record.
    pub fn inline(plan: &'a SchemaPlan) -> Self {
        Self {
            plan,
            record: plan.name.clone(),
            builder: plan.builder_name(),
            modifier: plan.modifier(),
            inline: true,
        }
    }
}

/// Quote `s` as a Rust string literal.
pub(crate) fn literal(s: &str) -> String {
    format!("{s:?}")
}
