//! Entity declaration and response validation.
//!
//! An entity's Rust type is its schema: serde derives describe the record shape, and
//! [`Entity::validate`] adds the refinements a type cannot express (prefixes, ranges, ...).
//! Every record read back from the store goes through [`parse_item`] before a caller sees it.

use crate::{common, error};

use serde::{Serialize, de::DeserializeOwned};
use serde_dynamo::from_item;

/// A record type stored in a table.
///
/// ```rust
/// use dynamodb_service::schema;
/// use serde::{Deserialize, Serialize};
///
/// #[derive(Deserialize, Serialize)]
/// struct User {
///     pk: String,
///     sk: String,
/// }
///
/// impl schema::Entity for User {
///     fn validate(&self) -> Result<(), String> {
///         match self.pk.strip_prefix("USER#") {
///             Some(id) if !id.is_empty() => Ok(()),
///             _ => Err(format!("pk `{}` is not a USER# key", self.pk)),
///         }
///     }
/// }
/// ```
pub trait Entity: Serialize + DeserializeOwned + Send + Sync {
    /// Check constraints beyond the record shape. Must be pure.
    fn validate(&self) -> Result<(), String> {
        Ok(())
    }
}

/// Check an entity's refinements.
pub fn check<E: Entity>(entity: &E) -> Result<(), error::ValidationError> {
    entity.validate().map_err(error::ValidationError::new::<E>)
}

/// Parse a raw item into `E`, checking both its shape and its refinements.
pub fn parse_item<E: Entity>(item: common::Item) -> Result<E, error::ValidationError> {
    let entity: E = from_item(item).map_err(error::ValidationError::new::<E>)?;
    check(&entity)?;
    Ok(entity)
}

/// Parse a page of raw items into `E`; the first failure names the offending position.
pub fn parse_items<E: Entity>(items: Vec<common::Item>) -> Result<Vec<E>, error::ValidationError> {
    items
        .into_iter()
        .enumerate()
        .map(|(index, item)| {
            parse_item(item).map_err(|error| error::ValidationError {
                reason: format!("item {index}: {}", error.reason),
                ..error
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    use aws_sdk_dynamodb::types;
    use rstest::rstest;
    use serde::Deserialize;

    #[derive(Debug, Deserialize, PartialEq, Serialize)]
    struct User {
        pk: String,
        sk: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        custom: Option<bool>,
    }

    impl Entity for User {
        fn validate(&self) -> Result<(), String> {
            match self.pk.strip_prefix("USER#") {
                Some(id) if !id.is_empty() => Ok(()),
                _ => Err(format!("pk `{}` is not a USER# key", self.pk)),
            }
        }
    }

    fn item(entries: &[(&str, types::AttributeValue)]) -> common::Item {
        entries
            .iter()
            .map(|(name, value)| (name.to_string(), value.clone()))
            .collect()
    }

    fn s(value: &str) -> types::AttributeValue {
        types::AttributeValue::S(value.to_string())
    }

    #[rstest]
    #[case::minimal(
        item(&[("pk", s("USER#1")), ("sk", s(" "))]),
        User { pk: "USER#1".to_string(), sk: " ".to_string(), custom: None }
    )]
    #[case::optional_field(
        item(&[("pk", s("USER#1")), ("sk", s(" ")), ("custom", types::AttributeValue::Bool(true))]),
        User { pk: "USER#1".to_string(), sk: " ".to_string(), custom: Some(true) }
    )]
    #[case::unknown_fields_ignored(
        item(&[("pk", s("USER#2")), ("sk", s(" ")), ("extra", s("x"))]),
        User { pk: "USER#2".to_string(), sk: " ".to_string(), custom: None }
    )]
    fn test_parse_item(#[case] item: common::Item, #[case] expected: User) {
        let actual: User = parse_item(item).unwrap();
        assert_eq!(actual, expected);
    }

    #[rstest]
    #[case::missing_field(item(&[("pk", s("USER#1"))]), "sk")]
    #[case::wrong_type(item(&[("pk", s("USER#1")), ("sk", types::AttributeValue::Bool(true))]), "Expected string")]
    #[case::refinement(item(&[("pk", s("BOOK#1")), ("sk", s(" "))]), "is not a USER# key")]
    #[case::empty_id(item(&[("pk", s("USER#")), ("sk", s(" "))]), "is not a USER# key")]
    fn test_parse_item_rejects(#[case] item: common::Item, #[case] reason: &str) {
        let error = parse_item::<User>(item).unwrap_err();
        assert!(error.entity.ends_with("User"));
        assert!(error.reason.contains(reason), "unexpected reason: {}", error.reason);
    }

    #[test]
    fn test_parse_items_names_position() {
        let items = vec![
            item(&[("pk", s("USER#1")), ("sk", s(" "))]),
            item(&[("pk", s("USER#2"))]),
        ];
        let error = parse_items::<User>(items).unwrap_err();
        assert!(error.reason.starts_with("item 1: "), "unexpected reason: {}", error.reason);
    }

    #[test]
    fn test_parse_items_empty_page() {
        let users: Vec<User> = parse_items(Vec::new()).unwrap();
        assert!(users.is_empty());
    }
}
