use crate::{common, error};

use aws_sdk_dynamodb::Client;
use serde::Serialize;
use serde_dynamo::Result;

/// Get item request, ready to send.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct GetItemInput {
    /// Whether to use a strongly consistent read.
    pub consistent_read: Option<bool>,
    /// Primary key of the item to fetch.
    pub keys: common::Item,
    /// The table to read from.
    pub table_name: String,
}

/// Get item request.
///
/// ```rust
/// use dynamodb_service::{common, read};
///
/// let get_item = read::get_item::GetItem {
///     keys: common::key::Keys::partition("id", "1".to_string()),
///     consistent_read: Some(true),
/// };
/// ```
#[derive(Clone, Debug, Default, PartialEq)]
pub struct GetItem<T> {
    /// Whether to use a consistent read.
    ///
    /// `true` for strongly consistent reads, `false` or `None` for eventually consistent reads.
    pub consistent_read: Option<bool>,
    /// The primary key of the item to retrieve.
    pub keys: common::key::Keys<T>,
}

impl<T: Serialize> GetItem<T> {
    pub(crate) fn into_input(self, table_name: impl Into<String>) -> Result<GetItemInput> {
        Ok(GetItemInput {
            consistent_read: self.consistent_read,
            keys: self.keys.into_item()?,
            table_name: table_name.into(),
        })
    }
}

impl GetItemInput {
    /// Send the request; `None` when no item has the key.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(name = "dynamodb_service.get_item", skip(client), err)
    )]
    pub(crate) async fn send(self, client: &Client) -> error::Result<Option<common::Item>> {
        let output = client
            .get_item()
            .set_key(Some(self.keys))
            .set_consistent_read(self.consistent_read)
            .table_name(self.table_name)
            .send()
            .await
            .map_err(|sdk_error| error::Error::transport("GetItem", sdk_error))?;
        Ok(output.item)
    }
}
