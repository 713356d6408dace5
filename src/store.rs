//! The document store a service delegates to.
//!
//! [`DocumentStore`] is the capability set the base service needs from DynamoDB: one method
//! per request type, each taking a fully built input and returning raw items. The DynamoDB
//! [`Client`] implements it; tests and custom backends can provide their own.

use crate::{common, error, read, write};

use async_trait::async_trait;
use aws_sdk_dynamodb::Client;
use std::sync::Arc;

/// Raw item operations against a table.
#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// Fetch one item by key; `None` when it does not exist.
    async fn get_item(&self, input: read::get_item::GetItemInput)
    -> error::Result<Option<common::Item>>;

    /// Write one item; returns the previous item when `AllOld` was requested.
    async fn put_item(
        &self,
        input: write::put_item::PutItemInput,
    ) -> error::Result<Option<common::Item>>;

    /// Apply an update expression; returns the attributes selected by the return values.
    async fn update_item(
        &self,
        input: write::update_item::UpdateItemInput,
    ) -> error::Result<Option<common::Item>>;

    /// Delete one item; returns the attributes selected by the return values.
    async fn delete_item(
        &self,
        input: write::delete_item::DeleteItemInput,
    ) -> error::Result<Option<common::Item>>;

    /// Run a key-condition query and return the first page of items.
    async fn query(&self, input: read::query::QueryInput) -> error::Result<Vec<common::Item>>;
}

#[async_trait]
impl DocumentStore for Client {
    async fn get_item(
        &self,
        input: read::get_item::GetItemInput,
    ) -> error::Result<Option<common::Item>> {
        input.send(self).await
    }

    async fn put_item(
        &self,
        input: write::put_item::PutItemInput,
    ) -> error::Result<Option<common::Item>> {
        input.send(self).await
    }

    async fn update_item(
        &self,
        input: write::update_item::UpdateItemInput,
    ) -> error::Result<Option<common::Item>> {
        input.send(self).await
    }

    async fn delete_item(
        &self,
        input: write::delete_item::DeleteItemInput,
    ) -> error::Result<Option<common::Item>> {
        input.send(self).await
    }

    async fn query(&self, input: read::query::QueryInput) -> error::Result<Vec<common::Item>> {
        input.send(self).await
    }
}

#[async_trait]
impl<S: DocumentStore + ?Sized> DocumentStore for Arc<S> {
    async fn get_item(
        &self,
        input: read::get_item::GetItemInput,
    ) -> error::Result<Option<common::Item>> {
        (**self).get_item(input).await
    }

    async fn put_item(
        &self,
        input: write::put_item::PutItemInput,
    ) -> error::Result<Option<common::Item>> {
        (**self).put_item(input).await
    }

    async fn update_item(
        &self,
        input: write::update_item::UpdateItemInput,
    ) -> error::Result<Option<common::Item>> {
        (**self).update_item(input).await
    }

    async fn delete_item(
        &self,
        input: write::delete_item::DeleteItemInput,
    ) -> error::Result<Option<common::Item>> {
        (**self).delete_item(input).await
    }

    async fn query(&self, input: read::query::QueryInput) -> error::Result<Vec<common::Item>> {
        (**self).query(input).await
    }
}
