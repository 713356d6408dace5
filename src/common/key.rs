use crate::common;

use serde::Serialize;
use serde_dynamo::{Result, to_attribute_value};

/// Key component.
///
/// ```rust
/// use dynamodb_service::common::key;
///
/// let key = key::Key::new("pk", "USER#1".to_string());
/// assert_eq!(key.name, "pk");
/// ```
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Key<T> {
    /// The attribute name of the key.
    pub name: String,
    /// The value of the key.
    pub value: T,
}

impl<T> Key<T> {
    /// Create a key component.
    pub fn new(name: impl Into<String>, value: T) -> Self {
        Self {
            name: name.into(),
            value,
        }
    }
}

/// Primary key (partition key and optional sort key).
///
/// ```rust
/// use dynamodb_service::common::key;
///
/// let keys = key::Keys::composite("pk", "USER#1", "sk", " ");
/// assert!(keys.sort_key.is_some());
/// ```
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Keys<T> {
    /// The partition key (required).
    pub partition_key: Key<T>,
    /// The sort key (only for tables with composite primary keys).
    pub sort_key: Option<Key<T>>,
}

impl<T> Keys<T> {
    /// Primary key of a table with a partition key only.
    pub fn partition(name: impl Into<String>, value: T) -> Self {
        Self {
            partition_key: Key::new(name, value),
            sort_key: None,
        }
    }

    /// Primary key of a table with a partition key and a sort key.
    pub fn composite(
        partition_name: impl Into<String>,
        partition_value: T,
        sort_name: impl Into<String>,
        sort_value: T,
    ) -> Self {
        Self {
            partition_key: Key::new(partition_name, partition_value),
            sort_key: Some(Key::new(sort_name, sort_value)),
        }
    }
}

impl<T: Serialize> Keys<T> {
    pub(crate) fn into_item(self) -> Result<common::Item> {
        let partition_key_value = to_attribute_value(self.partition_key.value)?;
        let mut item = common::Item::from([(self.partition_key.name, partition_key_value)]);
        if let Some(sort_key) = self.sort_key {
            let sort_key_value = to_attribute_value(sort_key.value)?;
            item.insert(sort_key.name, sort_key_value);
        }
        Ok(item)
    }
}
