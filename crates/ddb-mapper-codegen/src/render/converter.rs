//! Converter emitter
//!
//! Emits `{Name}Converter`, the `ItemConverter` implementation for a record.
//! Value expressions are built recursively from the attribute's
//! [`ValuePlan`], so lists and maps of any depth round-trip.

use super::builder::setter_name;
use super::{RenderContext, literal};
use crate::plan::{PlannedAttribute, ValuePlan, ValueShape};

const ATTRIBUTE_VALUE: &str = "::ddb_mapper::AttributeValue";
const CONVERT: &str = "::ddb_mapper::convert";
const RESULT: &str = "::std::result::Result";
const SOME: &str = "::std::option::Option::Some";
const NONE: &str = "::std::option::Option::None";

/// How a value expression is reached.
#[derive(Debug, Clone, Copy)]
enum Access<'e> {
    /// A place of the value's type, e.g. `from.id`.
    Place(&'e str),
    /// A reference to the value, e.g. a closure parameter.
    Ref(&'e str),
}

impl Access<'_> {
    fn expr(&self) -> &str {
        match self {
            Access::Place(expr) | Access::Ref(expr) => expr,
        }
    }

    /// Expression usable as a `match` scrutinee of reference type.
    fn borrowed(&self) -> String {
        match self {
            Access::Place(expr) => format!("&{expr}"),
            Access::Ref(expr) => expr.to_string(),
        }
    }

    /// Expression of the value itself, for `Copy` types.
    fn copied(&self) -> String {
        match self {
            Access::Place(expr) => expr.to_string(),
            Access::Ref(expr) => format!("*{expr}"),
        }
    }
}

/// Emit the converter struct and its `ItemConverter` impl.
pub fn render_converter(ctx: &RenderContext<'_>) -> String {
    let plan = ctx.plan;
    let record = &ctx.record;
    let mut code = String::new();

    code.push_str(&format!(
        "/// Converts [`{record}`] records to and from items.\n"
    ));
    code.push_str("#[derive(Debug, Clone, Copy, Default)]\n");
    code.push_str(&format!("{}struct {};\n\n", ctx.modifier, plan.converter_name()));

    code.push_str(&format!(
        "impl ::ddb_mapper::ItemConverter<{record}> for {} {{\n",
        plan.converter_name()
    ));

    // to_item
    code.push_str(&format!(
        "    fn to_item(&self, from: &{record}) -> ::ddb_mapper::Item {{\n"
    ));
    code.push_str("        let mut item = ::ddb_mapper::Item::new();\n");
    for attribute in &plan.attributes {
        code.push_str(&write_attribute(attribute));
    }
    code.push_str("        item\n");
    code.push_str("    }\n\n");

    // from_item
    code.push_str(&format!(
        "    fn from_item(&self, item: &::ddb_mapper::Item) -> {RESULT}<{record}, ::ddb_mapper::ConversionError> {{\n"
    ));
    for attribute in &plan.attributes {
        code.push_str(&read_attribute(attribute));
    }
    code.push_str(&construct_record(ctx));
    code.push_str("    }\n");
    code.push_str("}\n");

    code
}

/// Statement inserting one attribute into `item`.
fn write_attribute(attribute: &PlannedAttribute) -> String {
    let key = literal(&attribute.key);
    let place = format!("from.{}", attribute.field());

    if attribute.is_nullable() {
        let present = non_null(&attribute.value);
        format!(
            "        if let {SOME}(value) = &{place} {{\n            item.insert({key}, {});\n        }}\n",
            to_value(&present, Access::Ref("value"), 0)
        )
    } else {
        format!(
            "        item.insert({key}, {});\n",
            to_value(&attribute.value, Access::Place(&place), 0)
        )
    }
}

/// Statement reading one attribute from `item` into a `field_*` local.
fn read_attribute(attribute: &PlannedAttribute) -> String {
    let key = literal(&attribute.key);
    let local = local_name(attribute);
    let value = from_value(&non_null(&attribute.value), "value", 0);

    if attribute.is_nullable() {
        format!(
            "        let {local} = item\n            .optional({key})\n            .map(|value| {value})\n            .transpose()\n            .map_err(|err| err.at({key}))?;\n"
        )
    } else {
        format!(
            "        let {local} = item\n            .required({key})\n            .and_then(|value| {value})\n            .map_err(|err| err.at({key}))?;\n"
        )
    }
}

/// Tail expression building the record from the `field_*` locals.
fn construct_record(ctx: &RenderContext<'_>) -> String {
    let plan = ctx.plan;
    let mut code = String::new();

    if plan.needs_builder() {
        code.push_str(&format!("        {}::new()\n", ctx.builder));
        for attribute in &plan.attributes {
            code.push_str(&format!(
                "            .{}({})\n",
                setter_name(attribute),
                local_name(attribute)
            ));
        }
        code.push_str("            .build()\n");
        code.push_str("            .map_err(::ddb_mapper::ConversionError::from)\n");
    } else {
        code.push_str(&format!(
            "        let mut record: {} = ::std::default::Default::default();\n",
            ctx.record
        ));
        for attribute in &plan.attributes {
            code.push_str(&format!(
                "        record.{} = {};\n",
                attribute.field(),
                local_name(attribute)
            ));
        }
        code.push_str(&format!("        {RESULT}::Ok(record)\n"));
    }

    code
}

fn local_name(attribute: &PlannedAttribute) -> String {
    format!("field_{}", attribute.plain_field())
}

fn non_null(plan: &ValuePlan) -> ValuePlan {
    ValuePlan {
        ty: plan.ty.non_null(),
        shape: plan.shape.clone(),
    }
}

/// Expression of type `AttributeValue` for the value at `access`.
fn to_value(plan: &ValuePlan, access: Access<'_>, depth: usize) -> String {
    if plan.is_nullable() {
        let binding = format!("v{depth}");
        let present = to_value(&non_null(plan), Access::Ref(&binding), depth + 1);
        return format!(
            "match {} {{ {SOME}({binding}) => {present}, {NONE} => {ATTRIBUTE_VALUE}::Null(true) }}",
            access.borrowed()
        );
    }

    let expr = access.expr();
    match &plan.shape {
        ValueShape::Text => format!("{ATTRIBUTE_VALUE}::S({expr}.clone())"),
        ValueShape::Number => format!("{ATTRIBUTE_VALUE}::N({expr}.to_string())"),
        ValueShape::Bool => format!("{ATTRIBUTE_VALUE}::Bool({})", access.copied()),
        ValueShape::Binary => format!("{ATTRIBUTE_VALUE}::B({expr}.clone())"),
        ValueShape::List(element) => {
            let binding = format!("v{depth}");
            let inner = to_value(element, Access::Ref(&binding), depth + 1);
            format!("{ATTRIBUTE_VALUE}::L({expr}.iter().map(|{binding}| {inner}).collect())")
        }
        ValueShape::Map(element) => {
            let key = format!("k{depth}");
            let binding = format!("v{depth}");
            let inner = to_value(element, Access::Ref(&binding), depth + 1);
            format!(
                "{ATTRIBUTE_VALUE}::M({expr}.iter().map(|({key}, {binding})| ({key}.clone(), {inner})).collect())"
            )
        }
    }
}

/// Expression of type `Result<T, ConversionError>` reading the
/// `&AttributeValue` named `value`.
fn from_value(plan: &ValuePlan, value: &str, depth: usize) -> String {
    if plan.is_nullable() {
        let binding = format!("v{depth}");
        let present = from_value(&non_null(plan), &binding, depth + 1);
        return format!(
            "match {value} {{ {ATTRIBUTE_VALUE}::Null(_) => {RESULT}::Ok({NONE}), {binding} => {present}.map({SOME}) }}"
        );
    }

    match &plan.shape {
        ValueShape::Text => format!("{CONVERT}::string({value})"),
        ValueShape::Number => format!("{CONVERT}::number::<{}>({value})", plan.ty.render()),
        ValueShape::Bool => format!("{CONVERT}::boolean({value})"),
        ValueShape::Binary => format!("{CONVERT}::binary({value})"),
        ValueShape::List(element) => {
            let list = format!("l{depth}");
            let binding = format!("v{depth}");
            let inner = from_value(element, &binding, depth + 1);
            format!(
                "{CONVERT}::list({value}).and_then(|{list}| {list}.iter().map(|{binding}| {inner}).collect::<{RESULT}<{}, ::ddb_mapper::ConversionError>>())",
                plan.ty.render()
            )
        }
        ValueShape::Map(element) => {
            let map = format!("m{depth}");
            let key = format!("k{depth}");
            let binding = format!("v{depth}");
            let converted = format!("x{depth}");
            let inner = from_value(element, &binding, depth + 1);
            format!(
                "{CONVERT}::map({value}).and_then(|{map}| {map}.iter().map(|({key}, {binding})| {inner}.map(|{converted}| ({key}.clone(), {converted}))).collect::<{RESULT}<{}, ::ddb_mapper::ConversionError>>())",
                plan.ty.render()
            )
        }
    }
}
