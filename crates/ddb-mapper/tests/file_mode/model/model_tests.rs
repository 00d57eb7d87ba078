use super::mapper::schemas::*;
use super::{Reading, Session};
use ddb_mapper::{
    AttributeValue, ConversionError, ItemConverter, ItemSchema, KeyKind, KeySpec, Mapper,
    ValidationError, item_of,
};
use std::collections::HashMap;

fn session() -> Session {
    Session {
        token: "t-1".to_string(),
        user_id: 42,
        scopes: Some(vec!["read".to_string(), "write".to_string()]),
    }
}

fn reading() -> Reading {
    Reading {
        sensor: "kitchen".to_string(),
        taken_at: 1_700_000_000,
        value: 21.5,
        labels: HashMap::from([("unit".to_string(), "celsius".to_string())]),
    }
}

// private record, builder

#[test]
fn SessionConverter___round_trip___rebuilds_private_record() {
    let item = SessionConverter.to_item(&session());

    assert_eq!(item.get("uid"), Some(&AttributeValue::N("42".to_string())));
    assert_eq!(SessionConverter.from_item(&item), Ok(session()));
}

#[test]
fn SessionConverter___no_scopes___omits_key_and_reads_none() {
    let record = Session {
        scopes: None,
        ..session()
    };

    let item = SessionConverter.to_item(&record);

    assert_eq!(item.keys().collect::<Vec<_>>(), vec!["token", "uid"]);
    assert_eq!(SessionConverter.from_item(&item), Ok(record));
}

#[test]
fn SessionConverter___missing_uid___names_item_key() {
    let item = item_of([("token", AttributeValue::S("t-1".to_string()))]);

    let err = SessionConverter.from_item(&item).unwrap_err();

    assert_eq!(err, ConversionError::missing_attribute("uid"));
}

#[test]
fn SessionBuilder___required_field_unset___fails_with_field_name() {
    let err = SessionBuilder::new()
        .with_token("t-1".to_string())
        .build()
        .unwrap_err();

    assert_eq!(err, ValidationError::missing_attribute("user_id"));
}

#[test]
fn Mapper___session_table___binds_schema() {
    let table = Mapper::new().get_session_table("sessions");

    assert_eq!(table.name(), "sessions");
    assert_eq!(
        table.key_of(&session()),
        item_of([("token", AttributeValue::S("t-1".to_string()))])
    );
}

// Default record with a sort key

#[test]
fn ReadingConverter___round_trip___assigns_fields_on_default() {
    let item = ReadingConverter.to_item(&reading());

    assert_eq!(
        item.get("labels"),
        Some(&AttributeValue::M(
            [("unit".to_string(), AttributeValue::S("celsius".to_string()))]
                .into_iter()
                .collect()
        ))
    );
    assert_eq!(ReadingConverter.from_item(&item), Ok(reading()));
}

#[test]
fn ReadingSchema___keys___partition_and_sort() {
    assert_eq!(
        ReadingSchema.key_specs(),
        vec![
            KeySpec::new("sensor", KeyKind::S),
            KeySpec::new("taken_at", KeyKind::N),
        ]
    );
}

#[test]
fn Mapper___reading_table___key_projection_is_valid() {
    let table = Mapper::new().get_reading_table("readings");

    let key = table.key_of(&reading());

    assert_eq!(key.len(), 2);
    assert!(table.validate_key(&key).is_ok());
    assert_eq!(table.from_item(&table.to_item(&reading())).unwrap(), reading());
}
