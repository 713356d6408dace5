use crate::common;

use aws_sdk_dynamodb::types;
use serde::Serialize;
use serde_dynamo::{Result, to_attribute_value};
use std::collections;

/// Separator for conditions that must all hold.
const AND: &str = " AND ";

/// Condition types for key conditions and conditional writes.
///
/// ```rust
/// use dynamodb_service::common::condition;
///
/// let eq = condition::Condition::Equals("value".to_string());
/// let gt = condition::Condition::GreaterThan(100);
/// let exists: condition::Condition<String> = condition::Condition::Exists;
/// ```
#[derive(Clone, Debug, PartialEq)]
pub enum Condition<T> {
    /// Checks if an attribute begins with a specified prefix (string types only).
    BeginsWith(String),
    /// Checks if an attribute value is between two values (inclusive).
    Between(T, T),
    /// Checks if an attribute value equals a specified value.
    Equals(T),
    /// Checks if an attribute exists.
    Exists,
    /// Checks if an attribute value is greater than a specified value.
    GreaterThan(T),
    /// Checks if an attribute value is greater than or equal to a specified value.
    GreaterThanOrEqual(T),
    /// Checks if an attribute value is less than a specified value.
    LessThan(T),
    /// Checks if an attribute value is less than or equal to a specified value.
    LessThanOrEqual(T),
    /// Checks if an attribute does not exist.
    NotExists,
    /// Checks if an attribute value does not equal a specified value.
    NotEqual(T),
}

impl<T: Serialize> Condition<T> {
    fn get_expression(
        self,
        name: &str,
        name_placeholder: &str,
        index: &mut usize,
    ) -> Result<(String, collections::HashMap<String, types::AttributeValue>)> {
        let mut values = collections::HashMap::new();
        let mut bind = |suffix: &str, value: types::AttributeValue| {
            let value_placeholder = format!(":{name}_{suffix}{index}");
            *index += 1;
            values.insert(value_placeholder.clone(), value);
            value_placeholder
        };
        let expression = match self {
            Self::BeginsWith(prefix) => {
                let value = bind("begins_with", types::AttributeValue::S(prefix));
                format!("begins_with({name_placeholder}, {value})")
            }
            Self::Between(low, high) => {
                let low = bind("between", to_attribute_value(low)?);
                let high = bind("between", to_attribute_value(high)?);
                format!("{name_placeholder} BETWEEN {low} AND {high}")
            }
            Self::Equals(value) => {
                let value = bind("eq", to_attribute_value(value)?);
                format!("{name_placeholder} = {value}")
            }
            Self::Exists => format!("attribute_exists({name_placeholder})"),
            Self::GreaterThan(value) => {
                let value = bind("gt", to_attribute_value(value)?);
                format!("{name_placeholder} > {value}")
            }
            Self::GreaterThanOrEqual(value) => {
                let value = bind("gte", to_attribute_value(value)?);
                format!("{name_placeholder} >= {value}")
            }
            Self::LessThan(value) => {
                let value = bind("lt", to_attribute_value(value)?);
                format!("{name_placeholder} < {value}")
            }
            Self::LessThanOrEqual(value) => {
                let value = bind("lte", to_attribute_value(value)?);
                format!("{name_placeholder} <= {value}")
            }
            Self::NotExists => format!("attribute_not_exists({name_placeholder})"),
            Self::NotEqual(value) => {
                let value = bind("ne", to_attribute_value(value)?);
                format!("{name_placeholder} <> {value}")
            }
        };
        Ok((expression, values))
    }
}

/// Condition applied to a top-level attribute.
///
/// ```rust
/// use dynamodb_service::common::condition;
///
/// let condition = condition::KeyCondition::new(
///     "sk",
///     condition::Condition::BeginsWith("BOOK#".to_string()),
/// );
/// # let _: condition::KeyCondition<String> = condition;
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct KeyCondition<T> {
    /// The condition to apply to the attribute.
    pub condition: Condition<T>,
    /// The name of the attribute to apply the condition to.
    pub name: String,
}

impl<T> KeyCondition<T> {
    /// Create a condition on the named attribute.
    pub fn new(name: impl Into<String>, condition: Condition<T>) -> Self {
        Self {
            condition,
            name: name.into(),
        }
    }
}

impl<T: Serialize> KeyCondition<T> {
    /// Join the conditions with `AND` into a single expression.
    pub(crate) fn get_expression_operation(conditions: Vec<Self>) -> Result<common::ExpressionInput> {
        let mut operations = Vec::with_capacity(conditions.len());
        let mut index = 0;
        for condition in conditions {
            let (placeholder, _) = common::add_placeholder(&[], &condition.name);
            let (expression, expression_attribute_values) =
                condition
                    .condition
                    .get_expression(&condition.name, &placeholder, &mut index)?;
            operations.push(common::ExpressionInput {
                expression,
                expression_attribute_names: collections::HashMap::from([(
                    placeholder,
                    condition.name,
                )]),
                expression_attribute_values,
            });
        }
        Ok(common::ExpressionInput::merge(AND, operations))
    }
}
