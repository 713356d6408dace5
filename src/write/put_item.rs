use crate::{common, error, write};

use aws_sdk_dynamodb::Client;
use serde::Serialize;
use serde_dynamo::to_item;

/// Put item request, ready to send.
#[derive(Clone, Debug, PartialEq)]
pub struct PutItemInput {
    /// The item to write.
    pub item: common::Item,
    /// Condition, return values and table name.
    pub write_input: write::common::WriteInput,
}

/// Put item request.
///
/// ```rust
/// use dynamodb_service::write;
/// use serde_json::json;
///
/// let put_item = write::put_item::PutItem {
///     item: json!({"pk": "USER#1", "sk": " "}),
///     write_args: write::common::WriteArgs::<String>::default(),
/// };
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct PutItem<I, T> {
    /// The item to put into the table.
    pub item: I,
    /// Additional write arguments (condition, return values).
    pub write_args: write::common::WriteArgs<T>,
}

impl<I: Serialize, T: Serialize> PutItem<I, T> {
    pub(crate) fn into_input(self, table_name: impl Into<String>) -> error::Result<PutItemInput> {
        let item = to_item(self.item)?;
        let write_input = self.write_args.into_input(table_name)?;
        Ok(PutItemInput { item, write_input })
    }
}

impl PutItemInput {
    /// Send the request, returning the previous item when `AllOld` was requested.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(name = "dynamodb_service.put_item", skip(client), err)
    )]
    pub(crate) async fn send(self, client: &Client) -> error::Result<Option<common::Item>> {
        let builder = client.put_item().set_item(Some(self.item));
        let output = crate::apply_write_input!(builder, self.write_input)
            .send()
            .await
            .map_err(|sdk_error| error::Error::transport("PutItem", sdk_error))?;
        Ok(output.attributes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use aws_sdk_dynamodb::types;
    use rstest::rstest;
    use serde_json::{Value, json};
    use std::collections;

    #[rstest]
    #[case::plain(
        PutItem {
            item: json!(
                {
                    "pk": "USER#1",
                    "sk": " "
                }
            ),
            write_args: write::common::WriteArgs::default(),
        },
        PutItemInput {
            item: common::Item::from(
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
                table_name: "users".to_string(),
                ..Default::default()
            },
        }
    )]
    #[case::create_only(
        PutItem {
            item: json!(
                {
                    "pk": "USER#1"
                }
            ),
            write_args: write::common::WriteArgs {
                conditions: vec![
                    common::condition::KeyCondition::new(
                        "pk",
                        common::condition::Condition::NotExists,
                    ),
                ],
                return_values: Some(
                    types::ReturnValue::AllOld
                ),
                ..Default::default()
            },
        },
        PutItemInput {
            item: common::Item::from(
                [
                    (
                        "pk".to_string(),
                        types::AttributeValue::S(
                            "USER#1".to_string()
                        )
                    ),
                ]
            ),
            write_input: write::common::WriteInput {
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
                return_values: Some(
                    types::ReturnValue::AllOld
                ),
                table_name: "users".to_string(),
                ..Default::default()
            },
        }
    )]
    fn test_put_item(#[case] args: PutItem<Value, Value>, #[case] expected: PutItemInput) {
        let actual = args.into_input("users").unwrap();
        assert_eq!(actual, expected);
    }

    #[test]
    fn test_put_item_rejects_non_map_item() {
        let put_item = PutItem {
            item: json!("not a map"),
            write_args: write::common::WriteArgs::<Value>::default(),
        };
        assert!(put_item.into_input("users").is_err());
    }
}
