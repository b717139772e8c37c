use std::collections::HashMap;

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::domain::customer::CustomerId;
use crate::domain::order::Order;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomerSpend {
    pub customer_id: CustomerId,
    pub spend: Decimal,
}

impl CustomerSpend {
    /// Approximate value for display payloads. Never feed this back into a sum.
    pub fn spend_as_f64(&self) -> f64 {
        self.spend.to_f64().unwrap_or_default()
    }
}

/// Per-call running totals keyed by customer id.
#[derive(Debug, Default)]
pub(crate) struct SpendAccumulator {
    totals: HashMap<CustomerId, Decimal>,
}

impl SpendAccumulator {
    /// Starts a zero total for every requested id; only those ids accumulate.
    pub(crate) fn for_customers(customer_ids: &[CustomerId]) -> Self {
        let totals = customer_ids.iter().map(|id| (*id, Decimal::ZERO)).collect();
        Self { totals }
    }

    pub(crate) fn record(&mut self, order: &Order) {
        if let Some(total) = self.totals.get_mut(&order.customer_id) {
            *total += order.amount;
        }
    }

    pub(crate) fn total_for(&self, customer_id: CustomerId) -> Decimal {
        self.totals.get(&customer_id).copied().unwrap_or(Decimal::ZERO)
    }
}
