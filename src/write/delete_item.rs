use crate::{common, error, write};

use aws_sdk_dynamodb::{Client, types};
use serde::Serialize;

/// Delete item request, ready to send.
#[derive(Clone, Debug, PartialEq)]
pub struct DeleteItemInput {
    /// Primary key of the item to delete.
    pub keys: common::Item,
    /// Condition, return values and table name.
    pub write_input: write::common::WriteInput,
}

/// Delete item request.
///
/// ```rust
/// use dynamodb_service::{common, write};
///
/// let delete_item = write::delete_item::DeleteItem {
///     keys: common::key::Keys::partition("id", "1".to_string()),
///     write_args: write::common::WriteArgs::default(),
/// };
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct DeleteItem<T> {
    /// The primary key of the item to delete.
    pub keys: common::key::Keys<T>,
    /// Additional write arguments (condition, return values).
    pub write_args: write::common::WriteArgs<T>,
}

impl<T: Serialize> DeleteItem<T> {
    /// Build the request; the deleted item is returned unless other return values were asked for.
    pub(crate) fn into_input(self, table_name: impl Into<String>) -> error::Result<DeleteItemInput> {
        let keys = self.keys.into_item()?;
        let mut write_input = self.write_args.into_input(table_name)?;
        write_input
            .return_values
            .get_or_insert(types::ReturnValue::AllOld);
        Ok(DeleteItemInput { keys, write_input })
    }
}

impl DeleteItemInput {
    /// Send the request, returning the attributes selected by the return values.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(name = "dynamodb_service.delete_item", skip(client), err)
    )]
    pub(crate) async fn send(self, client: &Client) -> error::Result<Option<common::Item>> {
        let builder = client.delete_item().set_key(Some(self.keys));
        let output = crate::apply_write_input!(builder, self.write_input)
            .send()
            .await
            .map_err(|sdk_error| error::Error::transport("DeleteItem", sdk_error))?;
        Ok(output.attributes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use rstest::rstest;
    use serde_json::{Value, json};
    use std::collections;

    #[rstest]
    #[case::defaults_to_all_old(
        DeleteItem {
            keys: common::key::Keys::partition("id", json!("1")),
            write_args: write::common::WriteArgs::default(),
        },
        DeleteItemInput {
            keys: common::Item::from(
                [
                    (
                        "id".to_string(),
                        types::AttributeValue::S(
                            "1".to_string()
                        )
                    ),
                ]
            ),
            write_input: write::common::WriteInput {
                return_values: Some(
                    types::ReturnValue::AllOld
                ),
                table_name: "books".to_string(),
                ..Default::default()
            },
        }
    )]
    #[case::explicit_none(
        DeleteItem {
            keys: common::key::Keys::partition("id", json!("1")),
            write_args: write::common::WriteArgs {
                return_values: Some(
                    types::ReturnValue::None
                ),
                ..Default::default()
            },
        },
        DeleteItemInput {
            keys: common::Item::from(
                [
                    (
                        "id".to_string(),
                        types::AttributeValue::S(
                            "1".to_string()
                        )
                    ),
                ]
            ),
            write_input: write::common::WriteInput {
                return_values: Some(
                    types::ReturnValue::None
                ),
                table_name: "books".to_string(),
                ..Default::default()
            },
        }
    )]
    #[case::conditional(
        DeleteItem {
            keys: common::key::Keys::composite("pk", json!("USER#1"), "sk", json!(" ")),
            write_args: write::common::WriteArgs {
                conditions: vec![
                    common::condition::KeyCondition::new(
                        "status",
                        common::condition::Condition::Equals(json!("inactive")),
                    ),
                ],
                ..Default::default()
            },
        },
        DeleteItemInput {
            keys: common::Item::from(
                [
                    (
                        "pk".to_string(),
                        types::AttributeValue::S(
                            "USER#1".to_string()
                        )
                    ),
                    (
                        "sk".to_string(),
                        types::AttributeValue::S(
                            " ".to_string()
                        )
                    ),
                ]
            ),
            write_input: write::common::WriteInput {
                condition_expression: Some(
                    "#status = :status_eq0".to_string()
                ),
                expression_attribute_names: Some(
                    collections::HashMap::from(
                        [
                            ("#status".to_string(), "status".to_string()),
                        ]
                    )
                ),
                expression_attribute_values: Some(
                    collections::HashMap::from(
                        [
                            (
                                ":status_eq0".to_string(),
                                types::AttributeValue::S(
                                    "inactive".to_string()
                                )
                            ),
                        ]
                    )
                ),
                return_values: Some(
                    types::ReturnValue::AllOld
                ),
                table_name: "books".to_string(),
                ..Default::default()
            },
        }
    )]
    fn test_delete_item(#[case] args: DeleteItem<Value>, #[case] expected: DeleteItemInput) {
        let actual = args.into_input("books").unwrap();
        assert_eq!(actual, expected);
    }
}
