use crate::common::update::UpdateParamsError;

use aws_sdk_dynamodb::error::SdkError;
use std::{error, fmt};

/// Boxed source of a transport failure.
pub type BoxError = Box<dyn error::Error + Send + Sync>;

/// Result type returned by service operations.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// A record did not match the entity it was declared as.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
#[error("record does not match `{entity}`: {reason}")]
pub struct ValidationError {
    /// Type name of the entity the record was checked against.
    pub entity: &'static str,
    /// What was wrong with the record.
    pub reason: String,
}

impl ValidationError {
    /// Create a validation error for entity type `E`.
    pub fn new<E>(reason: impl fmt::Display) -> Self {
        Self {
            entity: std::any::type_name::<E>(),
            reason: reason.to_string(),
        }
    }
}

/// Errors returned by service operations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The update payload produced no assignments.
    #[error("update payload produced no assignments")]
    EmptyUpdate,
    /// Keys, items or condition values could not be converted to attribute values.
    #[error("failed to convert to attribute values: {0}")]
    Serialization(#[from] serde_dynamo::Error),
    /// The store call did not succeed.
    #[error("{operation} request failed: {source}")]
    Transport {
        /// The DynamoDB operation that failed, e.g. `UpdateItem`.
        operation: &'static str,
        /// HTTP status of the response, when one was received.
        status: Option<u16>,
        /// The underlying failure.
        #[source]
        source: BoxError,
    },
    /// Two merged expressions bound the same value placeholder to different values.
    #[error("placeholder `{placeholder}` is bound to different values")]
    PlaceholderConflict {
        /// The clashing value placeholder.
        placeholder: String,
    },
    /// The update payload was malformed.
    #[error(transparent)]
    UpdateParams(#[from] UpdateParamsError),
    /// A record did not match the declared entity.
    #[error(transparent)]
    Validation(#[from] ValidationError),
}

impl Error {
    /// Wrap an SDK failure for `operation`, keeping the response status if there was one.
    pub fn transport<E>(operation: &'static str, sdk_error: SdkError<E>) -> Self
    where
        E: error::Error + Send + Sync + 'static,
    {
        let status = sdk_error
            .raw_response()
            .map(|response| response.status().as_u16());
        Self::Transport {
            operation,
            status,
            source: Box::new(sdk_error),
        }
    }

    /// HTTP status of a failed store call, if the store answered.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Transport { status, .. } => *status,
            _ => None,
        }
    }

    /// Whether the error came from the record shape rather than the store.
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }
}
