use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CustomerId(pub i64);

impl std::fmt::Display for CustomerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Customer {
    pub id: CustomerId,
    pub name: String,
    pub country: String,
    pub joined_at: DateTime<FixedOffset>,
}

#[cfg(test)]
mod tests {
    use super::{Customer, CustomerId};

    #[test]
    fn deserializes_camel_case_record_and_keeps_offset() {
        let customer: Customer = serde_json::from_str(
            r#"{"id":7,"name":"Sophie Martin","country":"France","joinedAt":"2024-06-18T13:40:00+02:00"}"#,
        )
        .expect("customer should parse");

        assert_eq!(customer.id, CustomerId(7));
        assert_eq!(customer.country, "France");
        assert_eq!(customer.joined_at.offset().local_minus_utc(), 7200);
    }

    #[test]
    fn rejects_record_without_join_timestamp() {
        let error = serde_json::from_str::<Customer>(
            r#"{"id":2,"name":"Jane Smith","country":"USA"}"#,
        )
        .expect_err("missing joinedAt must fail");

        assert!(error.to_string().contains("joinedAt"));
    }

    #[test]
    fn customer_id_serializes_as_bare_integer() {
        let json = serde_json::to_string(&CustomerId(42)).expect("serialize id");
        assert_eq!(json, "42");
    }
}
