use crate::{common, error, write};

use aws_sdk_dynamodb::{Client, types};
use serde::Serialize;

/// Update item request, ready to send.
#[derive(Clone, Debug, PartialEq)]
pub struct UpdateItemInput {
    /// Primary key of the item to update.
    pub keys: common::Item,
    /// The `SET` expression built from the payload.
    pub update_expression: String,
    /// Condition, attribute maps, return values and table name.
    pub write_input: write::common::WriteInput,
}

/// Update item request.
///
/// ```rust,no_run
/// use dynamodb_service::{common, service, write};
/// use serde_json::json;
///
/// # #[derive(serde::Deserialize, serde::Serialize)]
/// # struct User { pk: String, sk: String }
/// # impl dynamodb_service::schema::Entity for User {}
/// # async fn example(users: &service::BaseService<User>) -> Result<(), Box<dyn std::error::Error>> {
/// let update_item = write::update_item::UpdateItem {
///     keys: common::key::Keys::composite("pk", json!("USER#1"), "sk", json!(" ")),
///     payload: common::update::UpdatePayload::from([
///         ("profile.nickname".to_string(), json!("jj")),
///     ]),
///     write_args: write::common::WriteArgs {
///         conditions: vec![common::condition::KeyCondition::new(
///             "pk",
///             common::condition::Condition::Exists,
///         )],
///         ..Default::default()
///     },
/// };
/// users.update_with(update_item).await?;
/// # Ok(())
/// # }
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct UpdateItem<T> {
    /// The primary key of the item to update.
    pub keys: common::key::Keys<T>,
    /// Attribute path to new value; see [`common::update::build`].
    pub payload: common::update::UpdatePayload<T>,
    /// Additional write arguments (condition, return values).
    pub write_args: write::common::WriteArgs<T>,
}

impl<T: Serialize> UpdateItem<T> {
    /// Build the request; `AllNew` is returned unless other return values were asked for.
    pub(crate) fn into_input(self, table_name: impl Into<String>) -> error::Result<UpdateItemInput> {
        let update = common::update::build(&self.payload)?;
        if update.expression_attribute_values.is_empty() {
            return Err(error::Error::EmptyUpdate);
        }
        let keys = self.keys.into_item()?;
        let mut write_input = self.write_args.into_input(table_name)?;
        write_input
            .return_values
            .get_or_insert(types::ReturnValue::AllNew);
        let update_expression = write_input.merge_expression(update)?;
        Ok(UpdateItemInput {
            keys,
            update_expression,
            write_input,
        })
    }
}

impl UpdateItemInput {
    /// Send the request, returning the attributes selected by the return values.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(name = "dynamodb_service.update_item", skip(client), err)
    )]
    pub(crate) async fn send(self, client: &Client) -> error::Result<Option<common::Item>> {
        let builder = client
            .update_item()
            .set_key(Some(self.keys))
            .update_expression(self.update_expression);
        let output = crate::apply_write_input!(builder, self.write_input)
            .send()
            .await
            .map_err(|sdk_error| error::Error::transport("UpdateItem", sdk_error))?;
        Ok(output.attributes)
    }
}
