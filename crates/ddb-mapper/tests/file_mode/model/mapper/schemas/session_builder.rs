// Code generated by ddb-mapper-codegen. DO NOT EDIT.

/// Builds [`crate::model::Session`] values field by field.
#[derive(Debug, Clone, Default)]
pub(in crate::model) struct SessionBuilder {
    token: ::std::option::Option<::std::string::String>,
    user_id: ::std::option::Option<u64>,
    scopes: ::std::option::Option<::std::vec::Vec<::std::string::String>>,
}

impl SessionBuilder {
    pub(in crate::model) fn new() -> Self {
        ::std::default::Default::default()
    }

    pub(in crate::model) fn with_token(mut self, value: ::std::string::String) -> Self {
        self.token = ::std::option::Option::Some(value);
        self
    }

    pub(in crate::model) fn with_user_id(mut self, value: u64) -> Self {
        self.user_id = ::std::option::Option::Some(value);
        self
    }

    pub(in crate::model) fn with_scopes(mut self, value: ::std::option::Option<::std::vec::Vec<::std::string::String>>) -> Self {
        self.scopes = value;
        self
    }

    /// Fails with the first required attribute that was not set.
    pub(in crate::model) fn build(self) -> ::std::result::Result<crate::model::Session, ::ddb_mapper::ValidationError> {
        ::std::result::Result::Ok(crate::model::Session {
            token: self.token.ok_or_else(|| ::ddb_mapper::ValidationError::missing_attribute("token"))?,
            user_id: self.user_id.ok_or_else(|| ::ddb_mapper::ValidationError::missing_attribute("user_id"))?,
            scopes: self.scopes,
        })
    }
}
