#![allow(non_snake_case)]

use super::*;
use crate::schema::{ItemConverter, KeySpec};
use crate::value::AttributeValue;
use crate::{convert, item_of};

#[derive(Debug, Clone, PartialEq)]
struct Order {
    customer: String,
    placed_at: i64,
    total: f64,
}

struct OrderConverter;

impl ItemConverter<Order> for OrderConverter {
    fn to_item(&self, from: &Order) -> Item {
        item_of([
            ("customer", AttributeValue::S(from.customer.clone())),
            ("placedAt", AttributeValue::N(from.placed_at.to_string())),
            ("total", AttributeValue::N(from.total.to_string())),
        ])
    }

    fn from_item(&self, item: &Item) -> Result<Order, ConversionError> {
        Ok(Order {
            customer: convert::string(item.required("customer")?)?,
            placed_at: convert::number(item.required("placedAt")?)?,
            total: convert::number(item.required("total")?)?,
        })
    }
}

struct OrderSchema;

impl ItemSchema for OrderSchema {
    type Item = Order;

    fn converter(&self) -> &dyn ItemConverter<Order> {
        &OrderConverter
    }

    fn partition_key(&self) -> KeySpec {
        KeySpec::string("customer")
    }

    fn sort_key(&self) -> Option<KeySpec> {
        Some(KeySpec::number("placedAt"))
    }
}

fn order() -> Order {
    Order {
        customer: "c-1".into(),
        placed_at: 1_700_000_000,
        total: 12.5,
    }
}

#[test]
fn Mapper___get_table___binds_name() {
    let table = Mapper::new().get_table("orders", OrderSchema);

    assert_eq!(table.name(), "orders");
    assert_eq!(table.schema().key_specs().len(), 2);
}

#[test]
fn Table___to_item_from_item___roundtrips() {
    let table = Mapper::new().get_table("orders", OrderSchema);

    let item = table.to_item(&order());

    assert_eq!(table.from_item(&item).unwrap(), order());
}

#[test]
fn Table___key_of___keeps_only_key_attributes() {
    let table = Mapper::new().get_table("orders", OrderSchema);

    let key = table.key_of(&order());

    let names: Vec<&str> = key.keys().collect();
    assert_eq!(names, vec!["customer", "placedAt"]);
}

#[test]
fn Table___validate_key___rejects_wrong_kind() {
    let table = Mapper::new().get_table("orders", OrderSchema);
    let key = item_of([
        ("customer", AttributeValue::S("c-1".into())),
        ("placedAt", AttributeValue::S("yesterday".into())),
    ]);

    let err = table.validate_key(&key).unwrap_err();

    assert_eq!(err.attribute(), Some("placedAt"));
    assert_eq!(err.root_cause(), &ConversionError::type_mismatch("N", "S"));
}

#[test]
fn Table___validate_key___rejects_missing_sort_key() {
    let table = Mapper::new().get_table("orders", OrderSchema);
    let key = item_of([("customer", AttributeValue::S("c-1".into()))]);

    let err = table.validate_key(&key).unwrap_err();

    assert_eq!(err, ConversionError::missing_attribute("placedAt"));
}
