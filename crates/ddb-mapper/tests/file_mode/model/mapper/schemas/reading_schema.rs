// Code generated by ddb-mapper-codegen. DO NOT EDIT.

/// Converts [`crate::model::Reading`] records to and from items.
#[derive(Debug, Clone, Copy, Default)]
pub(crate) struct ReadingConverter;

impl ::ddb_mapper::ItemConverter<crate::model::Reading> for ReadingConverter {
    fn to_item(&self, from: &crate::model::Reading) -> ::ddb_mapper::Item {
        let mut item = ::ddb_mapper::Item::new();
        item.insert("sensor", ::ddb_mapper::AttributeValue::S(from.sensor.clone()));
        item.insert("taken_at", ::ddb_mapper::AttributeValue::N(from.taken_at.to_string()));
        item.insert("value", ::ddb_mapper::AttributeValue::N(from.value.to_string()));
        item.insert("labels", ::ddb_mapper::AttributeValue::M(from.labels.iter().map(|(k0, v0)| (k0.clone(), ::ddb_mapper::AttributeValue::S(v0.clone()))).collect()));
        item
    }

    fn from_item(&self, item: &::ddb_mapper::Item) -> ::std::result::Result<crate::model::Reading, ::ddb_mapper::ConversionError> {
        let field_sensor = item
            .required("sensor")
            .and_then(|value| ::ddb_mapper::convert::string(value))
            .map_err(|err| err.at("sensor"))?;
        let field_taken_at = item
            .required("taken_at")
            .and_then(|value| ::ddb_mapper::convert::number::<i64>(value))
            .map_err(|err| err.at("taken_at"))?;
        let field_value = item
            .required("value")
            .and_then(|value| ::ddb_mapper::convert::number::<f64>(value))
            .map_err(|err| err.at("value"))?;
        let field_labels = item
            .required("labels")
            .and_then(|value| ::ddb_mapper::convert::map(value).and_then(|m0| m0.iter().map(|(k0, v0)| ::ddb_mapper::convert::string(v0).map(|x0| (k0.clone(), x0))).collect::<::std::result::Result<::std::collections::HashMap<::std::string::String, ::std::string::String>, ::ddb_mapper::ConversionError>>()))
            .map_err(|err| err.at("labels"))?;
        let mut record: crate::model::Reading = ::std::default::Default::default();
        record.sensor = field_sensor;
        record.taken_at = field_taken_at;
        record.value = field_value;
        record.labels = field_labels;
        ::std::result::Result::Ok(record)
    }
}

/// Item schema for [`crate::model::Reading`]: its converter and primary key.
#[derive(Debug, Clone, Copy, Default)]
pub(crate) struct ReadingSchema;

impl ::ddb_mapper::ItemSchema for ReadingSchema {
    type Item = crate::model::Reading;

    fn converter(&self) -> &dyn ::ddb_mapper::ItemConverter<crate::model::Reading> {
        &ReadingConverter
    }

    fn partition_key(&self) -> ::ddb_mapper::KeySpec {
        ::ddb_mapper::KeySpec::new("sensor", ::ddb_mapper::KeyKind::S)
    }

    fn sort_key(&self) -> ::std::option::Option<::ddb_mapper::KeySpec> {
        ::std::option::Option::Some(::ddb_mapper::KeySpec::new("taken_at", ::ddb_mapper::KeyKind::N))
    }
}

/// Opens tables of [`crate::model::Reading`] items from a [`::ddb_mapper::Mapper`].
pub(crate) trait ReadingTableExt {
    fn get_reading_table(&self, name: impl ::std::convert::Into<::std::string::String>) -> ::ddb_mapper::Table<ReadingSchema>;
}

impl ReadingTableExt for ::ddb_mapper::Mapper {
    fn get_reading_table(&self, name: impl ::std::convert::Into<::std::string::String>) -> ::ddb_mapper::Table<ReadingSchema> {
        self.get_table(name, ReadingSchema)
    }
}
