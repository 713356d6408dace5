use crate::common;

use aws_sdk_dynamodb::types;
use indexmap::IndexMap;
use serde::Serialize;
use serde_dynamo::to_attribute_value;
use std::collections;

/// Update payload: attribute path to new value.
///
/// A key without `.` names a top-level attribute; a dotted key such as `"address.city"`
/// names an attribute nested inside a map. Keys are processed in insertion order.
pub type UpdatePayload<T> = IndexMap<String, T>;

/// Errors raised while building update parameters.
#[derive(Debug, thiserror::Error)]
pub enum UpdateParamsError {
    /// The key has a leading, trailing or doubled `.`, or is empty.
    #[error("update key `{key}` contains an empty path fragment")]
    EmptyFragment {
        /// The offending payload key.
        key: String,
    },
    /// Two keys end in the same fragment but carry different values.
    #[error("placeholder `{placeholder}` is bound by `{first}` and `{second}` with different values")]
    PlaceholderConflict {
        /// The shared value placeholder.
        placeholder: String,
        /// The key that registered the placeholder first.
        first: String,
        /// The key that tried to rebind it.
        second: String,
    },
    /// A value could not be converted to a DynamoDB attribute value.
    #[error(transparent)]
    Value(#[from] serde_dynamo::Error),
}

/// Build the `SET` update expression and its name and value maps from a payload.
///
/// - a simple key `a` becomes `#a = :a`, and is skipped when its value is null
/// - a nested key `a.b.c` becomes `#a.#b.#c = :c`, with one alias per fragment
///
/// An empty payload, or one whose simple keys are all null, yields the bare expression `SET`;
/// callers decide whether such an update is worth sending.
///
/// ```rust
/// use dynamodb_service::common::update;
/// use serde_json::json;
///
/// let payload = update::UpdatePayload::from([
///     ("pk".to_string(), json!("x")),
///     ("meta.owner".to_string(), json!("alice")),
/// ]);
/// let params = update::build(&payload).unwrap();
/// assert_eq!(params.expression, "SET #pk = :pk, #meta.#owner = :owner");
/// ```
pub fn build<T: Serialize>(
    payload: &UpdatePayload<T>,
) -> Result<common::ExpressionInput, UpdateParamsError> {
    let mut clauses = Vec::with_capacity(payload.len());
    let mut expression_attribute_names = collections::HashMap::new();
    let mut expression_attribute_values: collections::HashMap<String, types::AttributeValue> =
        collections::HashMap::new();
    let mut bound_by: collections::HashMap<String, &str> = collections::HashMap::new();

    for (key, value) in payload {
        let fragments: Vec<&str> = key.split(common::PATH_SEPARATOR).collect();
        if fragments.iter().any(|fragment| fragment.is_empty()) {
            return Err(UpdateParamsError::EmptyFragment { key: key.clone() });
        }
        let Some(last) = fragments.last() else {
            return Err(UpdateParamsError::EmptyFragment { key: key.clone() });
        };
        let value: types::AttributeValue = to_attribute_value(value)?;
        if fragments.len() == 1 && matches!(value, types::AttributeValue::Null(_)) {
            continue;
        }

        let mut path = Vec::with_capacity(fragments.len());
        for fragment in &fragments {
            let (placeholder, new_path) = common::add_placeholder(&path, fragment);
            path = new_path;
            expression_attribute_names.insert(placeholder, fragment.to_string());
        }

        let value_placeholder = format!(":{last}");
        match expression_attribute_values.get(&value_placeholder) {
            Some(existing) if *existing != value => {
                let first = bound_by.get(&value_placeholder).copied().unwrap_or_default();
                return Err(UpdateParamsError::PlaceholderConflict {
                    placeholder: value_placeholder,
                    first: first.to_string(),
                    second: key.clone(),
                });
            }
            Some(_) => {}
            None => {
                bound_by.insert(value_placeholder.clone(), key.as_str());
                expression_attribute_values.insert(value_placeholder.clone(), value);
            }
        }

        let path = path.join(common::PATH_SEPARATOR);
        clauses.push(format!("{path} = {value_placeholder}"));
    }

    let expression = if clauses.is_empty() {
        "SET".to_string()
    } else {
        format!("SET {}", clauses.join(", "))
    };
    Ok(common::ExpressionInput {
        expression,
        expression_attribute_names,
        expression_attribute_values,
    })
}
