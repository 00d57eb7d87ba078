//! Builder emitter
//!
//! A builder is emitted when [`SchemaPlan::needs_builder`] holds. It keeps
//! one optional slot per attribute and reports the first unset required
//! attribute, in declaration order, when built.
//!
//! Setters are named `with_{field}` so no field can collide with `new` or
//! `build`.
//!
//! [`SchemaPlan::needs_builder`]: crate::plan::SchemaPlan::needs_builder

use super::{RenderContext, literal};
use crate::plan::PlannedAttribute;

/// Emit `{Name}Builder`.
pub fn render_builder(ctx: &RenderContext<'_>) -> String {
    let plan = ctx.plan;
    let record = &ctx.record;
    let vis = &ctx.modifier;
    let builder = plan.builder_name();
    let mut code = String::new();

    code.push_str(&format!("/// Builds [`{record}`] values field by field.\n"));
    code.push_str("#[derive(Debug, Clone, Default)]\n");
    code.push_str(&format!("{vis}struct {builder} {{\n"));
    for attribute in &plan.attributes {
        code.push_str(&format!(
            "    {}: ::std::option::Option<{}>,\n",
            attribute.field(),
            attribute.value.ty.non_null().render()
        ));
    }
    code.push_str("}\n\n");

    code.push_str(&format!("impl {builder} {{\n"));
    code.push_str(&format!("    {vis}fn new() -> Self {{\n"));
    code.push_str("        ::std::default::Default::default()\n");
    code.push_str("    }\n");

    for attribute in &plan.attributes {
        let field = attribute.field();
        code.push('\n');
        code.push_str(&format!(
            "    {vis}fn {}(mut self, value: {}) -> Self {{\n",
            setter_name(attribute),
            attribute.value.ty.render()
        ));
        if attribute.is_nullable() {
            code.push_str(&format!("        self.{field} = value;\n"));
        } else {
            code.push_str(&format!(
                "        self.{field} = ::std::option::Option::Some(value);\n"
            ));
        }
        code.push_str("        self\n");
        code.push_str("    }\n");
    }

    code.push_str(&format!(
        "\n    /// Fails with the first required attribute that was not set.\n    {vis}fn build(self) -> ::std::result::Result<{record}, ::ddb_mapper::ValidationError> {{\n"
    ));
    code.push_str(&format!("        ::std::result::Result::Ok({record} {{\n"));
    for attribute in &plan.attributes {
        let field = attribute.field();
        if attribute.is_nullable() {
            code.push_str(&format!("            {field}: self.{field},\n"));
        } else {
            code.push_str(&format!(
                "            {field}: self.{field}.ok_or_else(|| ::ddb_mapper::ValidationError::missing_attribute({}))?,\n",
                literal(attribute.plain_field())
            ));
        }
    }
    code.push_str("        })\n");
    code.push_str("    }\n");
    code.push_str("}\n");

    code
}

/// Name of the builder method setting `attribute`.
pub fn setter_name(attribute: &PlannedAttribute) -> String {
    format!("with_{}", attribute.plain_field())
}
