#![deny(warnings)]
#![deny(missing_docs)]

//! # DynamoDB Service
//!
//! A typed base service for Amazon DynamoDB tables.
//!
//! ## Overview
//!
//! This library wraps the DynamoDB client with a small set of generic operations that:
//! - Build update expressions from flat or dotted-key payloads
//! - Validate every record returned by the store against a declared entity type
//! - Default update and delete calls to returning the affected record
//! - Report transport failures and shape mismatches as distinct errors
//!
//! ## Quick Example
//!
//! Declare the entity shape once, then let the service check what comes back:
//!
//! ```no_run
//! use dynamodb_service::{common, config, schema, service};
//! use indexmap::IndexMap;
//! use serde::{Deserialize, Serialize};
//! use serde_json::{Value, json};
//!
//! #[derive(Debug, Deserialize, Serialize)]
//! struct User {
//!     pk: String,
//!     sk: String,
//!     name: Option<String>,
//! }
//!
//! impl schema::Entity for User {}
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = config::ServiceConfig::from_env("users");
//! let users: service::BaseService<User> = service::BaseService::connect(&config).await;
//!
//! let keys = common::key::Keys::composite("pk", json!("USER#1"), "sk", json!(" "));
//! let payload = IndexMap::from([
//!     ("name".to_string(), json!("Jane")),
//!     ("address.city".to_string(), json!("Lisbon")),
//!     ("nickname".to_string(), Value::Null),
//! ]);
//! // Sends "SET #name = :name, #address.#city = :city" and returns the updated user.
//! let user = users.update(keys, payload).await?;
//! # Ok(())
//! # }
//! ```
//!
//! ## Modules
//!
//! - [`mod@common`] - Update-expression builder, keys and conditions
//! - [`mod@read`] - Read requests (GetItem, Query)
//! - [`mod@write`] - Write requests (PutItem, UpdateItem, DeleteItem)
//! - [`mod@service`] - The validated base service
//! - [`mod@store`] - The document store seam and its DynamoDB client implementation

/// Common utilities for keys, conditions, and update expressions.
pub mod common;

/// Client configuration for connecting a service to a table.
pub mod config;

/// Error types returned by the service.
pub mod error;

/// Read requests for retrieving data from DynamoDB tables.
///
/// This module provides requests for:
/// - Getting individual items by key
/// - Querying a single page of items with key conditions
pub mod read;

/// Entity declaration and response validation.
pub mod schema;

/// The generic base service.
pub mod service;

/// The document store capability set.
pub mod store;

/// Write requests for modifying data in DynamoDB tables.
///
/// This module provides requests for:
/// - Putting new items or replacing existing ones
/// - Updating items from an update payload
/// - Deleting items by key
pub mod write;
