use std::path::Path;

use crate::dataset::read_records;
use crate::domain::customer::{Customer, CustomerId};
use crate::errors::DatasetError;
use crate::query::{sort_most_recent_first, truncate_to_limit};

/// Read-only customer collection, kept in dataset order.
#[derive(Clone, Debug, Default)]
pub struct CustomerDirectory {
    customers: Vec<Customer>,
}

impl CustomerDirectory {
    pub fn new(customers: Vec<Customer>) -> Self {
        Self { customers }
    }

    pub fn load(path: &Path) -> Result<Self, DatasetError> {
        read_records(path).map(Self::new)
    }

    pub fn len(&self) -> usize {
        self.customers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.customers.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Customer> {
        self.customers.iter()
    }

    /// Customers of `country` (exact, case-sensitive), most recently joined
    /// first. Equal join times keep dataset order.
    pub fn list_recent_by_country(&self, country: &str, limit: i64) -> Vec<Customer> {
        let mut matches: Vec<Customer> =
            self.customers.iter().filter(|customer| customer.country == country).cloned().collect();

        sort_most_recent_first(&mut matches, |customer| customer.joined_at);
        truncate_to_limit(matches, limit)
    }

    /// First customer in dataset order whose name matches exactly.
    pub fn find_id_by_name(&self, name: &str) -> Option<CustomerId> {
        self.customers.iter().find(|customer| customer.name == name).map(|customer| customer.id)
    }
}
