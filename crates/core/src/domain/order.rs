use std::str::FromStr;

use chrono::{DateTime, FixedOffset};
use rust_decimal::Decimal;
use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::value::RawValue;

use crate::domain::customer::CustomerId;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct OrderId(pub i64);

/// A single order as it appears in the dataset.
///
/// `customer_name` is a copy of the customer's name taken when the order was
/// placed. It can drift from the directory, and name-based order queries
/// match on this field rather than joining through `customer_id`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub id: OrderId,
    pub customer_id: CustomerId,
    pub customer_name: String,
    pub date: DateTime<FixedOffset>,
    #[serde(deserialize_with = "exact_decimal")]
    pub amount: Decimal,
}

/// Reads a JSON number or numeric string straight from its source text.
fn exact_decimal<'de, D>(deserializer: D) -> Result<Decimal, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Box::<RawValue>::deserialize(deserializer)?;
    let text = raw.get().trim();

    let literal = if text.starts_with('"') {
        serde_json::from_str::<String>(text).map_err(D::Error::custom)?
    } else {
        text.to_string()
    };

    Decimal::from_str(&literal)
        .or_else(|_| Decimal::from_scientific(&literal))
        .map_err(|_| D::Error::custom(format!("amount `{literal}` is not a decimal number")))
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use rust_decimal::Decimal;

    use super::Order;
    use crate::domain::customer::CustomerId;

    #[test]
    fn numeric_amount_is_read_as_exact_decimal() {
        let order: Order = serde_json::from_str(
            r#"{"id":1,"customerId":1,"customerName":"Vinicius Finger","date":"2025-03-05T14:30:00Z","amount":350.25}"#,
        )
        .expect("order should parse");

        assert_eq!(order.customer_id, CustomerId(1));
        assert_eq!(order.amount, Decimal::from_str("350.25").expect("decimal literal"));
    }

    #[test]
    fn high_precision_amount_keeps_every_digit() {
        let order: Order = serde_json::from_str(
            r#"{"id":1,"customerId":1,"customerName":"Vinicius Finger","date":"2025-03-05T14:30:00Z","amount":1234567890123.123456}"#,
        )
        .expect("order should parse");

        assert_eq!(order.amount, Decimal::from_str("1234567890123.123456").expect("decimal literal"));
    }

    #[test]
    fn exponent_amount_is_expanded() {
        let order: Order = serde_json::from_str(
            r#"{"id":1,"customerId":1,"customerName":"Vinicius Finger","date":"2025-03-05T14:30:00Z","amount":1.5e2}"#,
        )
        .expect("order should parse");

        assert_eq!(order.amount, Decimal::from(150));
    }

    #[test]
    fn non_numeric_amount_is_rejected() {
        for amount in ["true", "null", r#""abc""#, "[1]"] {
            let raw = format!(
                r#"{{"id":1,"customerId":1,"customerName":"A","date":"2025-03-05T14:30:00Z","amount":{amount}}}"#
            );
            assert!(serde_json::from_str::<Order>(&raw).is_err(), "amount {amount} should fail");
        }
    }

    #[test]
    fn string_amount_is_accepted() {
        let order: Order = serde_json::from_str(
            r#"{"id":9,"customerId":3,"customerName":"Carlos Rodriguez","date":"2025-01-01T00:00:00Z","amount":"100.123456"}"#,
        )
        .expect("order should parse");

        assert_eq!(order.amount, Decimal::new(100_123_456, 6));
    }

    #[test]
    fn rejects_record_without_date() {
        let result = serde_json::from_str::<Order>(
            r#"{"id":2,"customerId":1,"customerName":"Joao Silva","amount":420.50}"#,
        );
        assert!(result.is_err());
    }
}
