//! Orderlens MCP Server Binary
//!
//! ## Usage
//!
//! ```bash
//! # stdio transport with the bundled dataset
//! orderlens-mcp
//!
//! # streamable HTTP on 127.0.0.1:8000/mcp
//! ORDERLENS_SERVER_TRANSPORT=http orderlens-mcp
//!
//! # custom dataset location
//! ORDERLENS_DATASET_CUSTOMERS_PATH=/srv/customers.json \
//! ORDERLENS_DATASET_ORDERS_PATH=/srv/orders.json orderlens-mcp
//! ```

use anyhow::Result;
use orderlens_core::config::{AppConfig, LoadOptions, Transport};
use orderlens_core::Dataset;
use orderlens_mcp::{init_logging, OrderlensMcpServer};
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    let config = AppConfig::load(LoadOptions::default())?;
    init_logging(&config.logging);

    info!(
        event_name = "system.mcp.starting",
        customers_path = %config.dataset.customers_path.display(),
        orders_path = %config.dataset.orders_path.display(),
        "Starting Orderlens MCP Server"
    );

    // Loaded once; every tool call shares this snapshot
    let dataset = Dataset::load(&config.dataset)?;
    let server = OrderlensMcpServer::new(dataset.facade());

    match config.server.transport {
        Transport::Stdio => server.run_stdio().await?,
        Transport::Http => server.run_http(&config.server.bind_address, config.server.port).await?,
    }

    Ok(())
}
