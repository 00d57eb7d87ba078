//! Records generated into `mapper::schemas` by the CLI

use ddb_mapper::DynamoDbAttributes;
use std::collections::HashMap;

mod mapper;
mod model_tests;

/// Private record with private fields, rebuilt through its builder.
#[derive(Debug, Clone, PartialEq, DynamoDbAttributes)]
#[ddb(item)]
struct Session {
    #[ddb(partition_key)]
    token: String,
    #[ddb(name = "uid")]
    user_id: u64,
    scopes: Option<Vec<String>>,
}

/// Rebuilt through `Default` and field assignment.
#[derive(Debug, Clone, Default, PartialEq, DynamoDbAttributes)]
#[ddb(item)]
pub(crate) struct Reading {
    #[ddb(partition_key)]
    pub sensor: String,
    #[ddb(sort_key)]
    pub taken_at: i64,
    pub value: f64,
    pub labels: HashMap<String, String>,
}
