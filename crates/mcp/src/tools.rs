//! Tool payloads for the Orderlens MCP server
//!
//! Each tool answers with a small JSON document. Query misses are regular
//! payloads (`count: 0`, `spend: 0`, `status: customer_not_found`), never
//! protocol errors. Tools are grouped into two categories:
//! - Customer: recency listing, name lookup, total spend
//! - Order: monthly order counts

use orderlens_core::{AnalyticsFacade, CustomerId, CustomerSpend, CustomerWithSpend};
use serde::Serialize;
use tracing::{info, warn};

/// Default page size for `list_recent_customers_by_country`.
pub const DEFAULT_RECENT_LIMIT: i64 = 10;

/// Tool category trait
pub trait ToolCategory {
    /// Category name
    fn category_name() -> &'static str
    where
        Self: Sized;
    /// List of tool names in this category
    fn tool_names() -> &'static [&'static str]
    where
        Self: Sized;
}

/// Customer tools category
pub struct CustomerTools;

/// Order tools category
pub struct OrderTools;

impl ToolCategory for CustomerTools {
    fn category_name() -> &'static str {
        "customer"
    }
    fn tool_names() -> &'static [&'static str] {
        &["list_recent_customers_by_country", "get_customer_total_spend", "get_customer_id_by_name"]
    }
}

impl ToolCategory for OrderTools {
    fn category_name() -> &'static str {
        "order"
    }
    fn tool_names() -> &'static [&'static str] {
        &["get_order_count_by_customer_and_month"]
    }
}

/// All tool names
pub const ALL_TOOL_NAMES: &[&str] = &[
    "list_recent_customers_by_country",
    "get_customer_total_spend",
    "get_customer_id_by_name",
    "get_order_count_by_customer_and_month",
];

fn describe_category<C: ToolCategory>() -> String {
    format!("{} tools: {}", C::category_name(), C::tool_names().join(", "))
}

/// One-line catalogue of every tool grouped by category, as advertised to clients.
pub fn tool_catalog() -> String {
    [describe_category::<CustomerTools>(), describe_category::<OrderTools>()].join("; ")
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ToolStatus {
    InvalidArguments,
    CustomerNotFound,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RecentCustomerRow {
    pub id: i64,
    pub name: String,
    pub joined_at: String,
    pub total_spend: f64,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SpendRow {
    pub customer_id: i64,
    pub spend: f64,
}

impl From<CustomerWithSpend> for RecentCustomerRow {
    fn from(customer: CustomerWithSpend) -> Self {
        let total_spend = CustomerSpend { customer_id: customer.id, spend: customer.total_spend }
            .spend_as_f64();
        Self {
            id: customer.id.0,
            name: customer.name,
            joined_at: customer.joined_at.to_rfc3339(),
            total_spend,
        }
    }
}

impl From<CustomerSpend> for SpendRow {
    fn from(spend: CustomerSpend) -> Self {
        Self { customer_id: spend.customer_id.0, spend: spend.spend_as_f64() }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ToolResponse {
    Customers {
        customers: Vec<RecentCustomerRow>,
    },
    Totals {
        totals: Vec<SpendRow>,
    },
    CustomerId {
        #[serde(rename = "customerId")]
        customer_id: i64,
    },
    Count {
        count: usize,
    },
    Status {
        status: ToolStatus,
    },
}

impl ToolResponse {
    fn status(status: ToolStatus) -> Self {
        Self::Status { status }
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}

/// Tool implementations over an injected facade; transport agnostic.
#[derive(Clone, Debug)]
pub struct AnalyticsTools {
    facade: AnalyticsFacade,
}

impl AnalyticsTools {
    pub fn new(facade: AnalyticsFacade) -> Self {
        Self { facade }
    }

    pub fn list_recent_customers_by_country(&self, country: &str, limit: i64) -> ToolResponse {
        info!(tool = "list_recent_customers_by_country", country, limit, "tool invoked");

        if country.is_empty() {
            warn!(tool = "list_recent_customers_by_country", "country is required");
            return ToolResponse::status(ToolStatus::InvalidArguments);
        }

        let customers: Vec<RecentCustomerRow> = self
            .facade
            .recent_customers_with_spend(country, limit)
            .into_iter()
            .map(RecentCustomerRow::from)
            .collect();

        info!(tool = "list_recent_customers_by_country", found = customers.len(), "customers listed");
        ToolResponse::Customers { customers }
    }

    pub fn get_customer_total_spend(&self, customer_ids: &[i64]) -> ToolResponse {
        info!(tool = "get_customer_total_spend", ?customer_ids, "tool invoked");

        if customer_ids.is_empty() {
            warn!(tool = "get_customer_total_spend", "no customer ids provided");
            return ToolResponse::status(ToolStatus::InvalidArguments);
        }

        let ids: Vec<CustomerId> = customer_ids.iter().copied().map(CustomerId).collect();
        let totals: Vec<SpendRow> =
            self.facade.aggregate_spend(&ids).into_iter().map(SpendRow::from).collect();

        info!(tool = "get_customer_total_spend", entries = totals.len(), "totals calculated");
        ToolResponse::Totals { totals }
    }

    pub fn get_customer_id_by_name(&self, customer_name: &str) -> ToolResponse {
        info!(tool = "get_customer_id_by_name", customer_name, "tool invoked");

        match self.facade.find_id_by_name(customer_name) {
            Some(id) => ToolResponse::CustomerId { customer_id: id.0 },
            None => ToolResponse::status(ToolStatus::CustomerNotFound),
        }
    }

    pub fn get_order_count_by_customer_and_month(
        &self,
        customer_name: &str,
        month: &str,
    ) -> ToolResponse {
        info!(tool = "get_order_count_by_customer_and_month", customer_name, month, "tool invoked");

        if customer_name.is_empty() || month.is_empty() {
            warn!(tool = "get_order_count_by_customer_and_month", "customer name and month are required");
            return ToolResponse::status(ToolStatus::InvalidArguments);
        }

        let count = self.facade.count_by_customer_and_month(customer_name, month);
        info!(tool = "get_order_count_by_customer_and_month", count, "orders counted");
        ToolResponse::Count { count }
    }
}
