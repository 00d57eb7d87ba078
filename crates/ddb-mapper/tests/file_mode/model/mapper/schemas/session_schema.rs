// Code generated by ddb-mapper-codegen. DO NOT EDIT.

/// Converts [`crate::model::Session`] records to and from items.
#[derive(Debug, Clone, Copy, Default)]
pub(in crate::model) struct SessionConverter;

impl ::ddb_mapper::ItemConverter<crate::model::Session> for SessionConverter {
    fn to_item(&self, from: &crate::model::Session) -> ::ddb_mapper::Item {
        let mut item = ::ddb_mapper::Item::new();
        item.insert("token", ::ddb_mapper::AttributeValue::S(from.token.clone()));
        item.insert("uid", ::ddb_mapper::AttributeValue::N(from.user_id.to_string()));
        if let ::std::option::Option::Some(value) = &from.scopes {
            item.insert("scopes", ::ddb_mapper::AttributeValue::L(value.iter().map(|v0| ::ddb_mapper::AttributeValue::S(v0.clone())).collect()));
        }
        item
    }

    fn from_item(&self, item: &::ddb_mapper::Item) -> ::std::result::Result<crate::model::Session, ::ddb_mapper::ConversionError> {
        let field_token = item
            .required("token")
            .and_then(|value| ::ddb_mapper::convert::string(value))
            .map_err(|err| err.at("token"))?;
        let field_user_id = item
            .required("uid")
            .and_then(|value| ::ddb_mapper::convert::number::<u64>(value))
            .map_err(|err| err.at("uid"))?;
        let field_scopes = item
            .optional("scopes")
            .map(|value| ::ddb_mapper::convert::list(value).and_then(|l0| l0.iter().map(|v0| ::ddb_mapper::convert::string(v0)).collect::<::std::result::Result<::std::vec::Vec<::std::string::String>, ::ddb_mapper::ConversionError>>()))
            .transpose()
            .map_err(|err| err.at("scopes"))?;
        super::SessionBuilder::new()
            .with_token(field_token)
            .with_user_id(field_user_id)
            .with_scopes(field_scopes)
            .build()
            .map_err(::ddb_mapper::ConversionError::from)
    }
}

/// Item schema for [`crate::model::Session`]: its converter and primary key.
#[derive(Debug, Clone, Copy, Default)]
pub(in crate::model) struct SessionSchema;

impl ::ddb_mapper::ItemSchema for SessionSchema {
    type Item = crate::model::Session;

    fn converter(&self) -> &dyn ::ddb_mapper::ItemConverter<crate::model::Session> {
        &SessionConverter
    }

    fn partition_key(&self) -> ::ddb_mapper::KeySpec {
        ::ddb_mapper::KeySpec::new("token", ::ddb_mapper::KeyKind::S)
    }
}

/// Opens tables of [`crate::model::Session`] items from a [`::ddb_mapper::Mapper`].
pub(in crate::model) trait SessionTableExt {
    fn get_session_table(&self, name: impl ::std::convert::Into<::std::string::String>) -> ::ddb_mapper::Table<SessionSchema>;
}

impl SessionTableExt for ::ddb_mapper::Mapper {
    fn get_session_table(&self, name: impl ::std::convert::Into<::std::string::String>) -> ::ddb_mapper::Table<SessionSchema> {
        self.get_table(name, SessionSchema)
    }
}
