//! Deterministic sample data shared by unit and integration tests.
//!
//! The JSON mirrors `data/customers.json` and `data/orders.json` at the
//! repository root. Orders carry their own `customerName`, which does not
//! match the directory's names for the same ids.

use std::path::Path;
use std::sync::Arc;

use crate::dataset::{parse_records, Dataset};
use crate::directory::CustomerDirectory;
use crate::errors::DatasetError;
use crate::facade::AnalyticsFacade;
use crate::ledger::OrderLedger;

pub const SAMPLE_CUSTOMERS_JSON: &str = r#"[
  { "id": 1, "name": "John Doe", "country": "USA", "joinedAt": "2024-01-15T10:30:00Z" },
  { "id": 2, "name": "Jane Smith", "country": "USA", "joinedAt": "2024-02-20T14:45:00Z" },
  { "id": 3, "name": "Carlos Rodriguez", "country": "Brazil", "joinedAt": "2024-03-05T09:15:00Z" },
  { "id": 4, "name": "Maria Silva", "country": "Brazil", "joinedAt": "2024-04-10T16:20:00Z" },
  { "id": 5, "name": "Ronaldinho Gaucho", "country": "Brazil", "joinedAt": "2024-05-11T16:20:00Z" },
  { "id": 6, "name": "Pierre Dupont", "country": "France", "joinedAt": "2024-05-12T11:00:00Z" },
  { "id": 7, "name": "Sophie Martin", "country": "France", "joinedAt": "2024-06-18T13:40:00Z" },
  { "id": 8, "name": "Hiroshi Tanaka", "country": "Japan", "joinedAt": "2024-07-22T08:50:00Z" }
]"#;

pub const SAMPLE_ORDERS_JSON: &str = r#"[
  { "id": 1, "customerId": 1, "customerName": "Vinicius Finger", "date": "2025-03-05T14:30:00Z", "amount": 350.25 },
  { "id": 2, "customerId": 1, "customerName": "Vinicius Finger", "date": "2025-03-18T09:45:00Z", "amount": 420.50 },
  { "id": 3, "customerId": 2, "customerName": "Cauê Finger", "date": "2025-02-15T11:15:00Z", "amount": 390.30 },
  { "id": 4, "customerId": 2, "customerName": "Cauê Finger", "date": "2025-04-02T13:50:00Z", "amount": 485.20 },
  { "id": 5, "customerId": 1, "customerName": "Vinicius Finger", "date": "2025-05-12T16:20:00Z", "amount": 275.75 }
]"#;

pub fn sample_directory() -> Result<CustomerDirectory, DatasetError> {
    parse_records(SAMPLE_CUSTOMERS_JSON, Path::new("fixtures/customers.json"))
        .map(CustomerDirectory::new)
}

pub fn sample_ledger() -> Result<OrderLedger, DatasetError> {
    parse_records(SAMPLE_ORDERS_JSON, Path::new("fixtures/orders.json")).map(OrderLedger::new)
}

pub fn sample_dataset() -> Result<Dataset, DatasetError> {
    Ok(Dataset { directory: Arc::new(sample_directory()?), ledger: Arc::new(sample_ledger()?) })
}

pub fn sample_facade() -> Result<AnalyticsFacade, DatasetError> {
    sample_dataset().map(|dataset| dataset.facade())
}
