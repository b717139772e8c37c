//! End-to-end contract of the directory and ledger over loaded dataset files.

use std::fs;
use std::str::FromStr;

use chrono::DateTime;
use orderlens_core::config::DatasetConfig;
use orderlens_core::fixtures::{SAMPLE_CUSTOMERS_JSON, SAMPLE_ORDERS_JSON};
use orderlens_core::{Customer, CustomerDirectory, CustomerId, Dataset, DatasetError};
use rust_decimal::Decimal;
use tempfile::TempDir;

fn load_sample() -> (TempDir, Dataset) {
    let dir = TempDir::new().expect("tempdir");
    let customers_path = dir.path().join("customers.json");
    let orders_path = dir.path().join("orders.json");
    fs::write(&customers_path, SAMPLE_CUSTOMERS_JSON).expect("write customers");
    fs::write(&orders_path, SAMPLE_ORDERS_JSON).expect("write orders");

    let dataset =
        Dataset::load(&DatasetConfig { customers_path, orders_path }).expect("dataset loads");
    (dir, dataset)
}

fn customer(id: i64, country: &str, joined_at: &str) -> Customer {
    Customer {
        id: CustomerId(id),
        name: format!("Customer {id}"),
        country: country.to_string(),
        joined_at: DateTime::parse_from_rfc3339(joined_at).expect("valid timestamp"),
    }
}

#[test]
fn brazil_scenario_returns_two_most_recent() {
    let (_dir, dataset) = load_sample();

    let brazil = dataset.directory.list_recent_by_country("Brazil", 2);
    let ids: Vec<i64> = brazil.iter().map(|customer| customer.id.0).collect();
    assert_eq!(ids, vec![5, 4]);

    assert!(dataset.directory.list_recent_by_country("brazil", 2).is_empty());
}

#[test]
fn country_counts_match_dataset() {
    let (_dir, dataset) = load_sample();

    for (country, expected) in [("USA", 2), ("Brazil", 3), ("France", 2), ("Japan", 1)] {
        assert_eq!(dataset.directory.list_recent_by_country(country, 100).len(), expected);
    }
}

#[test]
fn non_positive_limits_are_empty_for_every_country() {
    let (_dir, dataset) = load_sample();

    for country in ["USA", "Brazil", "France", "Japan", "Canada"] {
        for limit in [0, -1, -2, i64::MIN] {
            assert!(dataset.directory.list_recent_by_country(country, limit).is_empty());
        }
    }
}

#[test]
fn recency_output_is_a_sorted_stable_subsequence() {
    let directory = CustomerDirectory::new(vec![
        customer(1, "Peru", "2024-02-01T00:00:00Z"),
        customer(2, "Chile", "2024-05-01T00:00:00Z"),
        customer(3, "Peru", "2024-05-01T00:00:00Z"),
        customer(4, "Peru", "2024-02-01T00:00:00Z"),
        customer(5, "Peru", "2024-05-01T03:00:00+03:00"),
        customer(6, "Peru", "2023-12-31T23:59:59Z"),
    ]);

    let peru = directory.list_recent_by_country("Peru", 10);

    for pair in peru.windows(2) {
        assert!(pair[0].joined_at >= pair[1].joined_at);
    }
    let ids: Vec<i64> = peru.iter().map(|customer| customer.id.0).collect();
    // 3 and 5 are the same instant, as are 1 and 4
    assert_eq!(ids, vec![3, 5, 1, 4, 6]);
}

#[test]
fn spend_scenario_mirrors_input_with_zero_entry() {
    let (_dir, dataset) = load_sample();

    let totals = dataset.ledger.aggregate_spend(&[CustomerId(1), CustomerId(999), CustomerId(1)]);

    let expected = Decimal::from_str("1046.50").expect("decimal");
    assert_eq!(totals.len(), 3);
    assert_eq!((totals[0].customer_id, totals[0].spend), (CustomerId(1), expected));
    assert_eq!((totals[1].customer_id, totals[1].spend), (CustomerId(999), Decimal::ZERO));
    assert_eq!((totals[2].customer_id, totals[2].spend), (CustomerId(1), expected));
}

#[test]
fn malformed_months_count_zero_for_every_customer() {
    let (_dir, dataset) = load_sample();

    for name in ["Vinicius Finger", "Cauê Finger"] {
        for month in ["2025-3", "2025-03-01", "25-03", "2025-003"] {
            assert_eq!(dataset.ledger.count_by_customer_and_month(name, month), 0);
        }
    }
}

#[test]
fn missing_order_field_fails_construction() {
    let dir = TempDir::new().expect("tempdir");
    let customers_path = dir.path().join("customers.json");
    let orders_path = dir.path().join("orders.json");
    fs::write(&customers_path, SAMPLE_CUSTOMERS_JSON).expect("write customers");
    fs::write(
        &orders_path,
        r#"[{"id": 2, "customerId": 1, "customerName": "Joao Silva", "amount": 420.50}]"#,
    )
    .expect("write orders");

    let error = Dataset::load(&DatasetConfig { customers_path, orders_path })
        .expect_err("missing date must fail");

    assert!(matches!(error, DatasetError::InvalidRecord { index: 0, .. }));
}
