use crate::{common, error};

use aws_sdk_dynamodb::types;
use serde::Serialize;
use std::collections;

/// Write request parameters after conversion from [`WriteArgs`].
///
/// Holds the resolved condition expression and attribute maps, ready for a DynamoDB call.
/// Attribute maps are `None` rather than empty, since DynamoDB rejects empty maps.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct WriteInput {
    /// Condition that must hold for the write to go through.
    pub condition_expression: Option<String>,
    /// Name aliases referenced by the condition and update expressions.
    pub expression_attribute_names: Option<collections::HashMap<String, String>>,
    /// Value placeholders referenced by the condition and update expressions.
    pub expression_attribute_values: Option<collections::HashMap<String, types::AttributeValue>>,
    /// Which item attributes to return.
    pub return_values: Option<types::ReturnValue>,
    /// Which item attributes to return when the condition fails.
    pub return_values_on_condition_check_failure:
        Option<types::ReturnValuesOnConditionCheckFailure>,
    /// The table to write to.
    pub table_name: String,
}

impl WriteInput {
    /// Merge an expression into this write request, returning the expression string.
    pub(crate) fn merge_expression(
        &mut self,
        operation: common::ExpressionInput,
    ) -> error::Result<String> {
        operation.merge_into(
            &mut self.expression_attribute_names,
            &mut self.expression_attribute_values,
        )
    }
}

/// Arguments common to all write requests (Put, Update, Delete).
///
/// ```rust
/// use aws_sdk_dynamodb::types;
/// use dynamodb_service::{common::condition, write};
///
/// let write_args = write::common::WriteArgs {
///     conditions: vec![condition::KeyCondition::new("pk", condition::Condition::Exists)],
///     return_values: Some(types::ReturnValue::AllNew),
///     ..write::common::WriteArgs::<String>::default()
/// };
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct WriteArgs<T> {
    /// Conditions that must all hold for the write to succeed.
    ///
    /// If any condition is false, the store rejects the write with a conditional check error.
    pub conditions: Vec<common::condition::KeyCondition<T>>,
    /// Which item attributes to return in the response.
    ///
    /// When unset, update requests return `AllNew` and delete requests return `AllOld`.
    pub return_values: Option<types::ReturnValue>,
    /// Which item attributes to return if a condition check fails.
    pub return_values_on_condition_check_failure:
        Option<types::ReturnValuesOnConditionCheckFailure>,
}

impl<T> Default for WriteArgs<T> {
    fn default() -> Self {
        Self {
            conditions: Vec::new(),
            return_values: None,
            return_values_on_condition_check_failure: None,
        }
    }
}

impl<T: Serialize> WriteArgs<T> {
    pub(crate) fn into_input(self, table_name: impl Into<String>) -> error::Result<WriteInput> {
        let mut write_input = WriteInput {
            return_values: self.return_values,
            return_values_on_condition_check_failure: self.return_values_on_condition_check_failure,
            table_name: table_name.into(),
            ..Default::default()
        };
        if !self.conditions.is_empty() {
            let condition =
                common::condition::KeyCondition::get_expression_operation(self.conditions)?;
            write_input.condition_expression = Some(write_input.merge_expression(condition)?);
        }
        Ok(write_input)
    }
}

/// apply common write request settings to a builder
#[macro_export]
macro_rules! apply_write_input {
    ($builder:expr, $write_input:expr) => {
        $builder
            .set_condition_expression($write_input.condition_expression)
            .set_expression_attribute_names($write_input.expression_attribute_names)
            .set_expression_attribute_values($write_input.expression_attribute_values)
            .set_return_values($write_input.return_values)
            .set_return_values_on_condition_check_failure(
                $write_input.return_values_on_condition_check_failure,
            )
            .table_name($write_input.table_name)
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    use rstest::rstest;
    use serde_json::{Value, json};

    #[rstest]
    #[case::empty(
        WriteArgs::default(),
        WriteInput {
            table_name: "a".to_string(),
            ..Default::default()
        }
    )]
    #[case::return_values_only(
        WriteArgs {
            return_values: Some(
                types::ReturnValue::AllOld
            ),
            return_values_on_condition_check_failure: Some(
                types::ReturnValuesOnConditionCheckFailure::AllOld
            ),
            ..Default::default()
        },
        WriteInput {
            return_values: Some(
                types::ReturnValue::AllOld
            ),
            return_values_on_condition_check_failure: Some(
                types::ReturnValuesOnConditionCheckFailure::AllOld
            ),
            table_name: "a".to_string(),
            ..Default::default()
        }
    )]
    #[case::conditions(
        WriteArgs {
            conditions: vec![
                common::condition::KeyCondition::new(
                    "pk",
                    common::condition::Condition::Exists,
                ),
                common::condition::KeyCondition::new(
                    "version",
                    common::condition::Condition::Equals(json!(2)),
                ),
            ],
            ..Default::default()
        },
        WriteInput {
            condition_expression: Some(
                "attribute_exists(#pk) AND #version = :version_eq0".to_string()
            ),
            expression_attribute_names: Some(
                collections::HashMap::from(
                    [
                        ("#pk".to_string(), "pk".to_string()),
                        ("#version".to_string(), "version".to_string()),
                    ]
                )
            ),
            expression_attribute_values: Some(
                collections::HashMap::from(
                    [
                        (
                            ":version_eq0".to_string(),
                            types::AttributeValue::N(
                                "2".to_string()
                            )
                        ),
                    ]
                )
            ),
            table_name: "a".to_string(),
            ..Default::default()
        }
    )]
    #[case::condition_without_values(
        WriteArgs {
            conditions: vec![
                common::condition::KeyCondition::new(
                    "pk",
                    common::condition::Condition::NotExists,
                ),
            ],
            ..Default::default()
        },
        WriteInput {
            condition_expression: Some(
                "attribute_not_exists(#pk)".to_string()
            ),
            expression_attribute_names: Some(
                collections::HashMap::from(
                    [
                        ("#pk".to_string(), "pk".to_string()),
                    ]
                )
            ),
            table_name: "a".to_string(),
            ..Default::default()
        }
    )]
    fn test_write_args_into_input(#[case] args: WriteArgs<Value>, #[case] expected: WriteInput) {
        let actual = args.into_input("a").unwrap();
        assert_eq!(actual, expected);
    }
}
