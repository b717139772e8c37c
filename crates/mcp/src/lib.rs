//! Orderlens MCP (Model Context Protocol) Server
//!
//! This crate exposes the Orderlens analytics engine to AI agents as MCP
//! tools: recent customers by country (with total spend), customer id by
//! name, monthly order counts, and multi-customer spend totals.
//!
//! ## Architecture
//!
//! - `OrderlensMcpServer`: Main server implementing MCP protocol
//! - `tools`: Transport-agnostic tool implementations and payload types
//! - `logging`: stderr tracing setup shared with the CLI
//!
//! ## Example Usage
//!
//! ```no_run
//! use orderlens_core::{AppConfig, Dataset, LoadOptions};
//! use orderlens_mcp::OrderlensMcpServer;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = AppConfig::load(LoadOptions::default())?;
//!     let dataset = Dataset::load(&config.dataset)?;
//!     OrderlensMcpServer::new(dataset.facade()).run_stdio().await
//! }
//! ```

pub mod logging;
mod server;
pub mod tools;

pub use logging::init_logging;
pub use server::{
    CustomerIdByNameInput, CustomerTotalSpendInput, ListRecentCustomersInput, OrderCountInput,
    OrderlensMcpServer,
};
pub use tools::{tool_catalog, AnalyticsTools, ToolResponse, ToolStatus, ALL_TOOL_NAMES};
