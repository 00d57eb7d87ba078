// Code generated by ddb-mapper-codegen. DO NOT EDIT.

mod reading_schema;
mod session_builder;
mod session_schema;

#[allow(unused_imports)]
pub(crate) use reading_schema::*;
#[allow(unused_imports)]
pub(in crate::model) use session_builder::*;
#[allow(unused_imports)]
pub(in crate::model) use session_schema::*;
