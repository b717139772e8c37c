pub mod config;
pub mod dataset;
pub mod directory;
pub mod domain;
pub mod errors;
pub mod facade;
pub mod fixtures;
pub mod ledger;
pub mod query;

pub use config::{AppConfig, ConfigError, LoadOptions};
pub use dataset::Dataset;
pub use directory::CustomerDirectory;
pub use domain::customer::{Customer, CustomerId};
pub use domain::order::{Order, OrderId};
pub use errors::{ApplicationError, DatasetError};
pub use facade::{AnalyticsFacade, CustomerWithSpend};
pub use ledger::{CustomerSpend, OrderLedger};
