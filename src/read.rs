//! Read requests for retrieving data from DynamoDB tables.
//!
//! This module provides requests for reading data from DynamoDB:
//! - Getting individual items by primary key
//! - Querying a single page of items with key conditions

/// Get item request for retrieving a single item by primary key.
pub mod get_item;

/// Query request for retrieving items with key conditions.
pub mod query;
