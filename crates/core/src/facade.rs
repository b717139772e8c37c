use std::sync::Arc;

use chrono::{DateTime, FixedOffset};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::directory::CustomerDirectory;
use crate::domain::customer::{Customer, CustomerId};
use crate::ledger::{CustomerSpend, OrderLedger};

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomerWithSpend {
    pub id: CustomerId,
    pub name: String,
    pub country: String,
    pub joined_at: DateTime<FixedOffset>,
    pub total_spend: Decimal,
}

/// Single handle over the shared directory and ledger snapshots.
///
/// Cloning is cheap; every clone reads the same immutable collections.
#[derive(Clone, Debug)]
pub struct AnalyticsFacade {
    directory: Arc<CustomerDirectory>,
    ledger: Arc<OrderLedger>,
}

impl AnalyticsFacade {
    pub fn new(directory: Arc<CustomerDirectory>, ledger: Arc<OrderLedger>) -> Self {
        Self { directory, ledger }
    }

    pub fn directory(&self) -> &CustomerDirectory {
        &self.directory
    }

    pub fn ledger(&self) -> &OrderLedger {
        &self.ledger
    }

    pub fn list_recent_by_country(&self, country: &str, limit: i64) -> Vec<Customer> {
        self.directory.list_recent_by_country(country, limit)
    }

    pub fn find_id_by_name(&self, name: &str) -> Option<CustomerId> {
        self.directory.find_id_by_name(name)
    }

    pub fn count_by_customer_and_month(&self, customer_name: &str, iso_month: &str) -> usize {
        self.ledger.count_by_customer_and_month(customer_name, iso_month)
    }

    pub fn aggregate_spend(&self, customer_ids: &[CustomerId]) -> Vec<CustomerSpend> {
        self.ledger.aggregate_spend(customer_ids)
    }

    /// Recency listing for `country`, each customer paired with its total
    /// spend. Customers without orders report a zero total.
    pub fn recent_customers_with_spend(&self, country: &str, limit: i64) -> Vec<CustomerWithSpend> {
        let customers = self.directory.list_recent_by_country(country, limit);
        let ids: Vec<CustomerId> = customers.iter().map(|customer| customer.id).collect();
        let totals = self.ledger.aggregate_spend(&ids);

        customers
            .into_iter()
            .zip(totals)
            .map(|(customer, total)| CustomerWithSpend {
                id: customer.id,
                name: customer.name,
                country: customer.country,
                joined_at: customer.joined_at,
                total_spend: total.spend,
            })
            .collect()
    }
}
