use std::fs;
use std::path::Path;
use std::sync::Arc;

use serde::de::DeserializeOwned;
use serde_json::value::RawValue;
use tracing::info;

use crate::config::DatasetConfig;
use crate::directory::CustomerDirectory;
use crate::domain::customer::Customer;
use crate::domain::order::Order;
use crate::errors::DatasetError;
use crate::facade::AnalyticsFacade;
use crate::ledger::OrderLedger;

/// Record-level checks that serde's shape validation cannot express.
pub trait DatasetRecord: DeserializeOwned {
    fn validate(&self) -> Result<(), String> {
        Ok(())
    }
}

impl DatasetRecord for Customer {
    fn validate(&self) -> Result<(), String> {
        if self.name.is_empty() {
            return Err("name must not be empty".to_string());
        }
        Ok(())
    }
}

impl DatasetRecord for Order {}

pub fn read_records<T: DatasetRecord>(path: &Path) -> Result<Vec<T>, DatasetError> {
    let raw = fs::read_to_string(path)
        .map_err(|source| DatasetError::ReadFile { path: path.to_path_buf(), source })?;
    parse_records(&raw, path)
}

/// Parses a JSON array of records. Any bad record rejects the whole batch.
///
/// Elements stay as raw JSON text until their own record is decoded, so
/// number literals reach field deserializers without an `f64` detour.
pub fn parse_records<T: DatasetRecord>(raw: &str, path: &Path) -> Result<Vec<T>, DatasetError> {
    let elements: Vec<Box<RawValue>> = serde_json::from_str(raw)
        .map_err(|source| DatasetError::Parse { path: path.to_path_buf(), source })?;

    elements
        .iter()
        .enumerate()
        .map(|(index, element)| {
            let record = serde_json::from_str::<T>(element.get()).map_err(|error| {
                DatasetError::InvalidRecord {
                    path: path.to_path_buf(),
                    index,
                    reason: error.to_string(),
                }
            })?;
            record.validate().map_err(|reason| DatasetError::InvalidRecord {
                path: path.to_path_buf(),
                index,
                reason,
            })?;
            Ok(record)
        })
        .collect()
}

/// Immutable snapshot of both collections, built once per process.
#[derive(Clone, Debug)]
pub struct Dataset {
    pub directory: Arc<CustomerDirectory>,
    pub ledger: Arc<OrderLedger>,
}

impl Dataset {
    pub fn load(config: &DatasetConfig) -> Result<Self, DatasetError> {
        let directory = CustomerDirectory::load(&config.customers_path)?;
        let ledger = OrderLedger::load(&config.orders_path)?;

        info!(
            event_name = "dataset.loaded",
            customers = directory.len(),
            orders = ledger.len(),
            "dataset snapshot loaded"
        );

        Ok(Self { directory: Arc::new(directory), ledger: Arc::new(ledger) })
    }

    pub fn facade(&self) -> AnalyticsFacade {
        AnalyticsFacade::new(Arc::clone(&self.directory), Arc::clone(&self.ledger))
    }
}
