mod spend;

use std::path::Path;

pub use spend::CustomerSpend;

use crate::dataset::read_records;
use crate::domain::customer::CustomerId;
use crate::domain::order::Order;
use crate::errors::DatasetError;
use crate::query::month_key;
use spend::SpendAccumulator;

/// Read-only order collection, kept in dataset order.
#[derive(Clone, Debug, Default)]
pub struct OrderLedger {
    orders: Vec<Order>,
}

impl OrderLedger {
    pub fn new(orders: Vec<Order>) -> Self {
        Self { orders }
    }

    pub fn load(path: &Path) -> Result<Self, DatasetError> {
        read_records(path).map(Self::new)
    }

    pub fn len(&self) -> usize {
        self.orders.len()
    }

    pub fn is_empty(&self) -> bool {
        self.orders.is_empty()
    }

    /// Orders placed under `customer_name` whose date falls in `iso_month`.
    ///
    /// `iso_month` is compared as text against each order's `YYYY-MM` key, so
    /// anything not shaped exactly like that (`2025-3`, `2025-03-01`) counts 0.
    pub fn count_by_customer_and_month(&self, customer_name: &str, iso_month: &str) -> usize {
        self.orders
            .iter()
            .filter(|order| order.customer_name == customer_name)
            .filter(|order| month_key(&order.date) == iso_month)
            .count()
    }

    /// Exact spend per requested id, one entry per input id in input order.
    ///
    /// Duplicate ids produce duplicate entries. Ids with no orders get a zero
    /// entry instead of being dropped.
    pub fn aggregate_spend(&self, customer_ids: &[CustomerId]) -> Vec<CustomerSpend> {
        if customer_ids.is_empty() {
            return Vec::new();
        }

        let mut accumulator = SpendAccumulator::for_customers(customer_ids);
        for order in &self.orders {
            accumulator.record(order);
        }

        customer_ids
            .iter()
            .map(|&customer_id| CustomerSpend {
                customer_id,
                spend: accumulator.total_for(customer_id),
            })
            .collect()
    }
}
