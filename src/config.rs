use std::env;

pub const DEFAULT_ENVIRONMENT: &str = "dev";
pub const DEFAULT_REGION: &str = "us-east-1";

const TABLE_PREFIX: &str = "lunari-users-";

/// Runtime configuration, resolved once at startup and immutable afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub region: String,
    pub environment: String,
    pub table_name: String,
    /// Custom endpoint for DynamoDB Local / LocalStack.
    pub endpoint_url: Option<String>,
}

impl Config {
    pub fn new(environment: impl Into<String>, region: impl Into<String>) -> Self {
        let environment = environment.into();
        let table_name = format!("{TABLE_PREFIX}{environment}");

        Self {
            region: region.into(),
            environment,
            table_name,
            endpoint_url: None,
        }
    }

    pub fn with_endpoint_url(mut self, url: impl Into<String>) -> Self {
        self.endpoint_url = Some(url.into());
        self
    }

    /// Resolves from the process: the first positional argument selects the
    /// environment (default "dev"), `AWS_REGION` selects the region (default
    /// "us-east-1"), `DYNAMODB_ENDPOINT` optionally overrides the endpoint.
    pub fn resolve() -> Self {
        let environment =
            env::args().nth(1).unwrap_or_else(|| DEFAULT_ENVIRONMENT.to_string());
        let region =
            env::var("AWS_REGION").unwrap_or_else(|_| DEFAULT_REGION.to_string());

        let config = Self::new(environment, region);

        match env::var("DYNAMODB_ENDPOINT") {
            Ok(url) if !url.is_empty() => config.with_endpoint_url(url),
            _ => config,
        }
    }
}
