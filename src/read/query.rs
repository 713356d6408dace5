use crate::{common, error};

use aws_sdk_dynamodb::{Client, types};
use serde::Serialize;
use std::collections;

/// Query request, ready to send.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct QueryInput {
    /// Whether to use a strongly consistent read.
    pub consistent_read: Option<bool>,
    /// Name aliases referenced by the key condition.
    pub expression_attribute_names: Option<collections::HashMap<String, String>>,
    /// Value placeholders referenced by the key condition.
    pub expression_attribute_values: Option<collections::HashMap<String, types::AttributeValue>>,
    /// Secondary index to query instead of the base table.
    pub index_name: Option<String>,
    /// Partition key equality, optionally followed by a sort key condition.
    pub key_condition_expression: String,
    /// Maximum number of items to evaluate.
    pub limit: Option<i32>,
    /// Ascending (`true`, the default) or descending sort key order.
    pub scan_index_forward: Option<bool>,
    /// The table to read from.
    pub table_name: String,
}

/// Query request.
///
/// Only the first page is fetched: callers that need more narrow the key condition or raise
/// the limit.
///
/// ```rust
/// use dynamodb_service::{common, read};
///
/// let query = read::query::Query {
///     partition_key: common::key::Key::new("pk", "USER#1".to_string()),
///     sort_key_condition: Some(common::condition::KeyCondition::new(
///         "sk",
///         common::condition::Condition::BeginsWith("BOOK#".to_string()),
///     )),
///     ..Default::default()
/// };
/// ```
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Query<T> {
    /// Whether to use a consistent read (not supported on global secondary indexes).
    pub consistent_read: Option<bool>,
    /// The name of a secondary index to query.
    pub index_name: Option<String>,
    /// The maximum number of items to evaluate.
    pub limit: Option<i32>,
    /// The partition key value to query for.
    pub partition_key: common::key::Key<T>,
    /// Whether to scan the index forward (ascending) or backward (descending).
    pub scan_index_forward: Option<bool>,
    /// Optional condition to apply to the sort key.
    pub sort_key_condition: Option<common::condition::KeyCondition<T>>,
}

impl<T: Serialize> Query<T> {
    pub(crate) fn into_input(self, table_name: impl Into<String>) -> error::Result<QueryInput> {
        let partition_key = common::condition::KeyCondition::new(
            self.partition_key.name,
            common::condition::Condition::Equals(self.partition_key.value),
        );
        let mut conditions = vec![partition_key];
        conditions.extend(self.sort_key_condition);
        let mut input = QueryInput {
            consistent_read: self.consistent_read,
            index_name: self.index_name,
            limit: self.limit,
            scan_index_forward: self.scan_index_forward,
            table_name: table_name.into(),
            ..Default::default()
        };
        let key_condition = common::condition::KeyCondition::get_expression_operation(conditions)?;
        input.key_condition_expression = key_condition.merge_into(
            &mut input.expression_attribute_names,
            &mut input.expression_attribute_values,
        )?;
        Ok(input)
    }
}

impl QueryInput {
    /// Send the request, returning the items of the first page.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(name = "dynamodb_service.query", skip(client), err)
    )]
    pub(crate) async fn send(self, client: &Client) -> error::Result<Vec<common::Item>> {
        let output = client
            .query()
            .set_consistent_read(self.consistent_read)
            .set_expression_attribute_names(self.expression_attribute_names)
            .set_expression_attribute_values(self.expression_attribute_values)
            .set_index_name(self.index_name)
            .key_condition_expression(self.key_condition_expression)
            .set_limit(self.limit)
            .set_scan_index_forward(self.scan_index_forward)
            .table_name(self.table_name)
            .send()
            .await
            .map_err(|sdk_error| error::Error::transport("Query", sdk_error))?;
        Ok(output.items.unwrap_or_default())
    }
}
