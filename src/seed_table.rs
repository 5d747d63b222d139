use std::collections::HashMap;

use aws_sdk_dynamodb::{operation::scan::ScanError, types::AttributeValue, Client};
use log::debug;
use thiserror::Error;

use crate::seed_data::UserRecord;

#[derive(Error, Debug)]
pub enum ProbeError {
    #[error("AwsError: {0}")]
    Aws(String),
}

#[derive(Error, Debug)]
pub enum PutError {
    #[error("AwsError: {0}")]
    Aws(String),
    #[error("ConversionError: {0}")]
    Conversion(#[from] serde_dynamo::Error),
}

/// Handle on the target table. Owns the client and the derived table name
/// for the lifetime of the run.
pub struct SeedTable {
    db: Client,
    table_name: String,
}

impl SeedTable {
    pub fn new(db: Client, table_name: impl Into<String>) -> Self {
        Self {
            db,
            table_name: table_name.into(),
        }
    }

    pub fn table_name(&self) -> &str {
        &self.table_name
    }

    /// Cheapest available existence probe: a scan capped at one item.
    /// "Not found" is a regular answer here, not an error; anything else
    /// (auth, network, throttling) is fatal to the run.
    pub async fn exists(&self) -> Result<bool, ProbeError> {
        let result = self
            .db
            .scan()
            .table_name(&self.table_name)
            .limit(1)
            .send()
            .await;

        match result {
            Ok(_) => Ok(true),
            Err(err)
                if err
                    .as_service_error()
                    .map(ScanError::is_resource_not_found_exception)
                    .unwrap_or(false) =>
            {
                Ok(false)
            }
            Err(err) => Err(ProbeError::Aws(err.to_string())),
        }
    }

    /// Unconditional insert-or-replace keyed by whatever key schema the
    /// table declares. Overwrites any existing item sharing the same key.
    pub async fn put(&self, record: &UserRecord) -> Result<(), PutError> {
        let item: HashMap<String, AttributeValue> = serde_dynamo::to_item(record)?;

        self.db
            .put_item()
            .table_name(&self.table_name)
            .set_item(Some(item))
            .send()
            .await
            .map_err(|e| PutError::Aws(e.to_string()))?;

        debug!("put item into {}", self.table_name);

        Ok(())
    }
}
