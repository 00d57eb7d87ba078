//! Schema and table extension emitter

use super::{RenderContext, literal};
use crate::naming::table_accessor;
use crate::plan::PlannedAttribute;

/// Emit `{Name}Schema` implementing `ItemSchema`.
pub fn render_schema(ctx: &RenderContext<'_>) -> String {
    let plan = ctx.plan;
    let record = &ctx.record;
    let mut code = String::new();

    code.push_str(&format!(
        "/// Item schema for [`{record}`]: its converter and primary key.\n"
    ));
    code.push_str("#[derive(Debug, Clone, Copy, Default)]\n");
    code.push_str(&format!("{}struct {};\n\n", ctx.modifier, plan.schema_name()));

    code.push_str(&format!(
        "impl ::ddb_mapper::ItemSchema for {} {{\n",
        plan.schema_name()
    ));
    code.push_str(&format!("    type Item = {record};\n\n"));
    code.push_str(&format!(
        "    fn converter(&self) -> &dyn ::ddb_mapper::ItemConverter<{record}> {{\n"
    ));
    code.push_str(&format!("        &{}\n", plan.converter_name()));
    code.push_str("    }\n\n");

    code.push_str("    fn partition_key(&self) -> ::ddb_mapper::KeySpec {\n");
    code.push_str(&format!("        {}\n", key_spec(plan.partition_attribute())));
    code.push_str("    }\n");

    if let Some(sort) = plan.sort_attribute() {
        code.push_str("\n    fn sort_key(&self) -> ::std::option::Option<::ddb_mapper::KeySpec> {\n");
        code.push_str(&format!(
            "        ::std::option::Option::Some({})\n",
            key_spec(sort)
        ));
        code.push_str("    }\n");
    }

    code.push_str("}\n");
    code
}

/// Emit `{Name}TableExt`, adding a typed table accessor to `Mapper`.
pub fn render_table_extension(ctx: &RenderContext<'_>) -> String {
    let plan = ctx.plan;
    let trait_name = plan.table_ext_name();
    let accessor = table_accessor(&plan.name);
    let schema = plan.schema_name();
    let signature = format!(
        "fn {accessor}(&self, name: impl ::std::convert::Into<::std::string::String>) -> ::ddb_mapper::Table<{schema}>"
    );
    let mut code = String::new();

    code.push_str(&format!(
        "/// Opens tables of [`{}`] items from a [`::ddb_mapper::Mapper`].\n",
        ctx.record
    ));
    code.push_str(&format!("{}trait {trait_name} {{\n", ctx.modifier));
    code.push_str(&format!("    {signature};\n"));
    code.push_str("}\n\n");

    code.push_str(&format!(
        "impl {trait_name} for ::ddb_mapper::Mapper {{\n"
    ));
    code.push_str(&format!("    {signature} {{\n"));
    code.push_str(&format!("        self.get_table(name, {schema})\n"));
    code.push_str("    }\n");
    code.push_str("}\n");

    code
}

fn key_spec(attribute: &PlannedAttribute) -> String {
    let kind = attribute.value.key_kind().unwrap_or("S");
    format!(
        "::ddb_mapper::KeySpec::new({}, ::ddb_mapper::KeyKind::{kind})",
        literal(&attribute.key)
    )
}
