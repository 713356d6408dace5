//! Common utilities for DynamoDB requests.
//!
//! This module provides shared types used across read and write requests,
//! including key handling, condition expressions, and the update-expression builder.

/// Condition expression building for key conditions and conditional writes.
pub mod condition;

/// Key types for identifying items in DynamoDB tables.
pub mod key;

/// Update-expression building from flat or dotted-key payloads.
pub mod update;

use crate::error;

use aws_sdk_dynamodb::types;
use std::collections;

/// A raw DynamoDB item, as sent to or returned by the store.
pub type Item = collections::HashMap<String, types::AttributeValue>;

/// Separator for attribute path components.
pub(crate) const PATH_SEPARATOR: &str = ".";

pub(crate) fn add_placeholder(keys: &[String], identifier: &str) -> (String, Vec<String>) {
    let placeholder = format!("#{identifier}");
    let mut new_keys = Vec::with_capacity(keys.len() + 1);
    new_keys.extend_from_slice(keys);
    new_keys.push(placeholder.clone());
    (placeholder, new_keys)
}

fn get_expression(left: String, operator: &str, right: String) -> String {
    if left.is_empty() {
        right
    } else if right.is_empty() {
        left
    } else {
        format!("{left}{operator}{right}")
    }
}

/// An expression together with the name aliases and value placeholders it references.
///
/// This is the triple DynamoDB expects for update, condition and key-condition expressions.
///
/// ```rust
/// use dynamodb_service::common;
///
/// let params = common::ExpressionInput::default();
/// assert!(params.expression.is_empty());
/// ```
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ExpressionInput {
    /// The expression string, e.g. `SET #a = :a`.
    pub expression: String,
    /// Alias token (`#name`) to the attribute name it stands for.
    pub expression_attribute_names: collections::HashMap<String, String>,
    /// Placeholder token (`:name`) to the value it stands for.
    pub expression_attribute_values: collections::HashMap<String, types::AttributeValue>,
}

impl ExpressionInput {
    pub(crate) fn merge(operator: &str, items: Vec<Self>) -> Self {
        let mut operation = Self::default();
        for item in items {
            operation
                .expression_attribute_names
                .extend(item.expression_attribute_names);
            operation
                .expression_attribute_values
                .extend(item.expression_attribute_values);
            operation.expression = get_expression(operation.expression, operator, item.expression);
        }
        operation
    }

    pub(crate) fn merge_into(
        self,
        names: &mut Option<collections::HashMap<String, String>>,
        values: &mut Option<collections::HashMap<String, types::AttributeValue>>,
    ) -> error::Result<String> {
        if !self.expression_attribute_names.is_empty() {
            names
                .get_or_insert_with(collections::HashMap::new)
                .extend(self.expression_attribute_names);
        }
        if !self.expression_attribute_values.is_empty() {
            let bound = values.get_or_insert_with(collections::HashMap::new);
            for (placeholder, value) in self.expression_attribute_values {
                match bound.get(&placeholder) {
                    Some(existing) if *existing != value => {
                        return Err(error::Error::PlaceholderConflict { placeholder });
                    }
                    Some(_) => {}
                    None => {
                        bound.insert(placeholder, value);
                    }
                }
            }
        }
        Ok(self.expression)
    }
}
