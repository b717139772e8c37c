//! MCP Server Implementation
//!
//! Exposes the analytics tools over the Model Context Protocol. The server is
//! constructed once with an injected facade; tool calls only read from it.

use orderlens_core::AnalyticsFacade;
use rmcp::{
    handler::server::{router::tool::ToolRouter, wrapper::Parameters},
    model::{CallToolResult, Content, Implementation, ServerCapabilities, ServerInfo},
    schemars::{self, JsonSchema},
    tool, tool_handler, tool_router, ErrorData, ServerHandler, ServiceExt,
};
use serde::Deserialize;
use tracing::{debug, info};

use crate::tools::{tool_catalog, AnalyticsTools, ToolResponse, DEFAULT_RECENT_LIMIT};

/// Main MCP server for Orderlens
#[derive(Clone)]
pub struct OrderlensMcpServer {
    tools: AnalyticsTools,
    tool_router: ToolRouter<Self>,
}

#[derive(Debug, Deserialize, JsonSchema)]
pub struct ListRecentCustomersInput {
    #[schemars(
        description = "Country to list customers from (case sensitive, first letter uppercase, e.g. `Brazil`)"
    )]
    pub country: String,

    #[schemars(description = "Maximum number of customers to return (default: 10)")]
    #[serde(default = "default_recent_limit")]
    pub limit: i64,
}

#[derive(Debug, Deserialize, JsonSchema)]
pub struct CustomerTotalSpendInput {
    #[schemars(description = "Customer IDs to total; order and duplicates are preserved")]
    pub customer_ids: Vec<i64>,
}

#[derive(Debug, Deserialize, JsonSchema)]
pub struct CustomerIdByNameInput {
    #[schemars(
        description = "Full customer name (case sensitive, first letter of name and surname uppercase)"
    )]
    pub customer_name: String,
}

#[derive(Debug, Deserialize, JsonSchema)]
pub struct OrderCountInput {
    #[schemars(
        description = "Customer name as recorded on the orders (case sensitive, first letter of name and surname uppercase)"
    )]
    pub customer_name: String,

    #[schemars(description = "Calendar month in ISO 8601 `YYYY-MM` form")]
    pub month: String,
}

fn default_recent_limit() -> i64 {
    DEFAULT_RECENT_LIMIT
}

fn respond(response: ToolResponse) -> Result<CallToolResult, ErrorData> {
    let content =
        response.to_json().map_err(|e| ErrorData::internal_error(e.to_string(), None))?;
    Ok(CallToolResult::success(vec![Content::text(content)]))
}

#[tool_router]
impl OrderlensMcpServer {
    /// Create a new MCP server over an already loaded dataset
    pub fn new(facade: AnalyticsFacade) -> Self {
        info!("Initializing Orderlens MCP Server");
        Self { tools: AnalyticsTools::new(facade), tool_router: Self::tool_router() }
    }

    /// Names of every registered tool
    pub fn tool_names(&self) -> Vec<String> {
        self.tool_router.list_all().into_iter().map(|tool| tool.name.to_string()).collect()
    }

    #[tool(
        description = "List the top N (limit) most recent customers from a specific country, with id, name, joinedAt and totalSpend"
    )]
    pub async fn list_recent_customers_by_country(
        &self,
        Parameters(input): Parameters<ListRecentCustomersInput>,
    ) -> Result<CallToolResult, ErrorData> {
        debug!(country = %input.country, limit = input.limit, "list_recent_customers_by_country called");
        respond(self.tools.list_recent_customers_by_country(&input.country, input.limit))
    }

    #[tool(description = "Get the total spend for a list of customers, as customerId and spend pairs")]
    pub async fn get_customer_total_spend(
        &self,
        Parameters(input): Parameters<CustomerTotalSpendInput>,
    ) -> Result<CallToolResult, ErrorData> {
        debug!(ids = input.customer_ids.len(), "get_customer_total_spend called");
        respond(self.tools.get_customer_total_spend(&input.customer_ids))
    }

    #[tool(description = "Get a customer ID by the customer's exact name")]
    pub async fn get_customer_id_by_name(
        &self,
        Parameters(input): Parameters<CustomerIdByNameInput>,
    ) -> Result<CallToolResult, ErrorData> {
        debug!(customer_name = %input.customer_name, "get_customer_id_by_name called");
        respond(self.tools.get_customer_id_by_name(&input.customer_name))
    }

    #[tool(description = "Count orders for one customer in a specific calendar month (YYYY-MM)")]
    pub async fn get_order_count_by_customer_and_month(
        &self,
        Parameters(input): Parameters<OrderCountInput>,
    ) -> Result<CallToolResult, ErrorData> {
        debug!(customer_name = %input.customer_name, month = %input.month, "get_order_count_by_customer_and_month called");
        respond(self.tools.get_order_count_by_customer_and_month(&input.customer_name, &input.month))
    }
}

impl OrderlensMcpServer {
    /// Run the server with stdio transport
    pub async fn run_stdio(self) -> anyhow::Result<()> {
        info!("Starting MCP server with stdio transport");

        let service = self.serve(rmcp::transport::stdio()).await?;

        // Wait for shutdown
        let _quit = service.waiting().await?;

        info!("MCP server shutdown complete");
        Ok(())
    }

    /// Run the server with streamable HTTP transport mounted at `/mcp`
    pub async fn run_http(self, bind_address: &str, port: u16) -> anyhow::Result<()> {
        use rmcp::transport::streamable_http_server::{
            session::local::LocalSessionManager, StreamableHttpService,
        };

        let service = StreamableHttpService::new(
            move || Ok(self.clone()),
            LocalSessionManager::default().into(),
            Default::default(),
        );
        let router = axum::Router::new().nest_service("/mcp", service);
        let listener = tokio::net::TcpListener::bind((bind_address, port)).await?;

        info!(address = %listener.local_addr()?, "Starting MCP server with streamable HTTP transport");

        axum::serve(listener, router)
            .with_graceful_shutdown(async {
                let _ = tokio::signal::ctrl_c().await;
            })
            .await?;

        info!("MCP server shutdown complete");
        Ok(())
    }
}

#[tool_handler]
impl ServerHandler for OrderlensMcpServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation {
                name: "orderlens-mcp".to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
                ..Default::default()
            },
            instructions: Some(format!(
                "Orderlens MCP Server - customer and order analytics. Available {}.",
                tool_catalog()
            )),
            ..Default::default()
        }
    }
}
