//! The generic base service.
//!
//! [`BaseService`] pairs a table with an [`Entity`](schema::Entity) type and a
//! [`DocumentStore`](store::DocumentStore). Every record it hands back has been parsed and
//! checked against the entity; every store failure comes back as a transport error.
//!
//! Domain services add their own operations by wrapping a `BaseService` and calling its
//! generic ones:
//!
//! ```rust,no_run
//! use dynamodb_service::{common, error, schema, service};
//! use serde::{Deserialize, Serialize};
//! use serde_json::json;
//!
//! #[derive(Deserialize, Serialize)]
//! struct User {
//!     pk: String,
//!     sk: String,
//!     custom: Option<bool>,
//! }
//!
//! impl schema::Entity for User {}
//!
//! struct UserService {
//!     base: service::BaseService<User>,
//! }
//!
//! impl UserService {
//!     async fn custom_put(&self, pk: &str) -> error::Result<User> {
//!         let user = User { pk: pk.to_string(), sk: " ".to_string(), custom: Some(true) };
//!         self.base.put(user).await
//!     }
//! }
//! ```

use crate::{common, config, error, read, schema, store, write};

use aws_sdk_dynamodb::{Client, types};
use serde::Serialize;
use std::{fmt, marker};

/// Validated get / put / update / delete / query over one table.
pub struct BaseService<E, S = Client> {
    entity: marker::PhantomData<fn() -> E>,
    store: S,
    table: String,
}

impl<E, S: fmt::Debug> fmt::Debug for BaseService<E, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BaseService")
            .field("entity", &std::any::type_name::<E>())
            .field("store", &self.store)
            .field("table", &self.table)
            .finish()
    }
}

impl<E: schema::Entity> BaseService<E, Client> {
    /// Build a DynamoDB client from `config` and bind it to the configured table.
    pub async fn connect(config: &config::ServiceConfig) -> Self {
        let client = config.load_client().await;
        Self::new(config.table.clone(), client)
    }
}

impl<E: schema::Entity, S: store::DocumentStore> BaseService<E, S> {
    /// Bind `store` to `table`.
    pub fn new(table: impl Into<String>, store: S) -> Self {
        Self {
            entity: marker::PhantomData,
            store,
            table: table.into(),
        }
    }

    /// The table every operation targets.
    pub fn table(&self) -> &str {
        &self.table
    }

    /// The underlying store, for operations this service does not wrap.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Fetch the entity with the given key.
    ///
    /// A missing item is returned as `None` without validation.
    pub async fn get<T: Serialize>(&self, keys: common::key::Keys<T>) -> error::Result<Option<E>> {
        self.get_with(read::get_item::GetItem {
            consistent_read: None,
            keys,
        })
        .await
    }

    /// Fetch an entity with full control over the request.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(name = "dynamodb_service.get", skip_all, fields(table = %self.table), err)
    )]
    pub async fn get_with<T: Serialize>(
        &self,
        get_item: read::get_item::GetItem<T>,
    ) -> error::Result<Option<E>> {
        let input = get_item.into_input(&self.table)?;
        let item = self.store.get_item(input).await?;
        Ok(item.map(schema::parse_item).transpose()?)
    }

    /// Write the entity, replacing any item with the same key, and return it as stored.
    pub async fn put(&self, entity: E) -> error::Result<E> {
        let put_item = write::put_item::PutItem {
            item: entity,
            write_args: write::common::WriteArgs::<()>::default(),
        };
        let written = self.put_with(put_item).await?;
        written.ok_or_else(|| error::ValidationError::new::<E>("no record was written").into())
    }

    /// Write the entity with a condition or return values.
    ///
    /// Returns the written entity, or with `ReturnValue::AllOld` the item it replaced (if any).
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(name = "dynamodb_service.put", skip_all, fields(table = %self.table), err)
    )]
    pub async fn put_with<T: Serialize>(
        &self,
        put_item: write::put_item::PutItem<E, T>,
    ) -> error::Result<Option<E>> {
        schema::check(&put_item.item)?;
        let return_old = put_item.write_args.return_values == Some(types::ReturnValue::AllOld);
        let input = put_item.into_input(&self.table)?;
        let written = (!return_old).then(|| input.item.clone());
        let previous = self.store.put_item(input).await?;
        let item = match written {
            Some(written) => Some(written),
            None => previous,
        };
        Ok(item.map(schema::parse_item).transpose()?)
    }

    /// Apply the payload to the item with the given key and return the updated entity.
    ///
    /// See [`common::update::build`] for how the payload becomes an update expression.
    pub async fn update<T: Serialize>(
        &self,
        keys: common::key::Keys<T>,
        payload: common::update::UpdatePayload<T>,
    ) -> error::Result<E> {
        let updated = self
            .update_with(write::update_item::UpdateItem {
                keys,
                payload,
                write_args: write::common::WriteArgs::default(),
            })
            .await?;
        updated.ok_or_else(|| error::ValidationError::new::<E>("no record was returned").into())
    }

    /// Update an item with a condition or return values.
    ///
    /// Returns the updated entity unless other return values were requested.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(name = "dynamodb_service.update", skip_all, fields(table = %self.table), err)
    )]
    pub async fn update_with<T: Serialize>(
        &self,
        update_item: write::update_item::UpdateItem<T>,
    ) -> error::Result<Option<E>> {
        let input = update_item.into_input(&self.table)?;
        let attributes = self.store.update_item(input).await?;
        Ok(attributes.map(schema::parse_item).transpose()?)
    }

    /// Delete the item with the given key, returning it if it existed.
    pub async fn delete<T: Serialize>(
        &self,
        keys: common::key::Keys<T>,
    ) -> error::Result<Option<E>> {
        self.delete_with(write::delete_item::DeleteItem {
            keys,
            write_args: write::common::WriteArgs::default(),
        })
        .await
    }

    /// Delete an item with a condition or return values.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(name = "dynamodb_service.delete", skip_all, fields(table = %self.table), err)
    )]
    pub async fn delete_with<T: Serialize>(
        &self,
        delete_item: write::delete_item::DeleteItem<T>,
    ) -> error::Result<Option<E>> {
        let input = delete_item.into_input(&self.table)?;
        let attributes = self.store.delete_item(input).await?;
        Ok(attributes.map(schema::parse_item).transpose()?)
    }

    /// Query one page of entities by partition key and optional sort key condition.
    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(name = "dynamodb_service.query", skip_all, fields(table = %self.table), err)
    )]
    pub async fn query<T: Serialize>(&self, query: read::query::Query<T>) -> error::Result<Vec<E>> {
        let input = query.into_input(&self.table)?;
        let items = self.store.query(input).await?;
        Ok(schema::parse_items(items)?)
    }
}
