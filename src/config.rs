//! Client configuration.

use aws_config::{BehaviorVersion, Region};
use aws_sdk_dynamodb::Client;
use std::env;

/// Environment variable holding a custom endpoint, e.g. a local DynamoDB.
pub const ENDPOINT_URL_VAR: &str = "AWS_ENDPOINT_URL";

/// Environment variable holding the AWS region.
pub const REGION_VAR: &str = "AWS_REGION";

/// Which table a service talks to, and how to reach it.
///
/// ```rust
/// use dynamodb_service::config;
///
/// let config = config::ServiceConfig::new("TestTable")
///     .with_region("us-east-1")
///     .with_endpoint_url("http://localhost:8000");
/// assert_eq!(config.endpoint_url.as_deref(), Some("http://localhost:8000"));
/// ```
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct ServiceConfig {
    /// Custom endpoint URL; `None` uses the regional AWS endpoint.
    pub endpoint_url: Option<String>,
    /// AWS region; `None` defers to the SDK's provider chain.
    pub region: Option<String>,
    /// The table every operation targets.
    pub table: String,
}

impl ServiceConfig {
    /// Configuration for `table` with SDK defaults for everything else.
    pub fn new(table: impl Into<String>) -> Self {
        Self {
            table: table.into(),
            ..Default::default()
        }
    }

    /// Configuration for `table`, taking the region and endpoint from the environment.
    pub fn from_env(table: impl Into<String>) -> Self {
        Self {
            endpoint_url: env::var(ENDPOINT_URL_VAR).ok(),
            region: env::var(REGION_VAR).ok(),
            table: table.into(),
        }
    }

    /// Set the region.
    pub fn with_region(mut self, region: impl Into<String>) -> Self {
        self.region = Some(region.into());
        self
    }

    /// Set a custom endpoint URL.
    pub fn with_endpoint_url(mut self, endpoint_url: impl Into<String>) -> Self {
        self.endpoint_url = Some(endpoint_url.into());
        self
    }

    /// Build a DynamoDB client from this configuration.
    pub async fn load_client(&self) -> Client {
        let mut loader = aws_config::defaults(BehaviorVersion::latest());
        if let Some(region) = &self.region {
            loader = loader.region(Region::new(region.clone()));
        }
        if let Some(endpoint_url) = &self.endpoint_url {
            loader = loader.endpoint_url(endpoint_url);
        }
        let sdk_config = loader.load().await;
        Client::new(&sdk_config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_uses_sdk_defaults() {
        let config = ServiceConfig::new("users");
        assert_eq!(config.table, "users");
        assert_eq!(config.region, None);
        assert_eq!(config.endpoint_url, None);
    }

    #[test]
    fn test_builders() {
        let config = ServiceConfig::new("users")
            .with_region("eu-west-1")
            .with_endpoint_url("http://localhost:8000");
        assert_eq!(
            config,
            ServiceConfig {
                endpoint_url: Some("http://localhost:8000".to_string()),
                region: Some("eu-west-1".to_string()),
                table: "users".to_string(),
            }
        );
    }
}
