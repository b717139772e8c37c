//! Ordering, limiting, and bucketing helpers shared by the directory and ledger.

use chrono::{DateTime, Datelike, FixedOffset};

/// Sorts `items` newest first by `timestamp`.
///
/// `sort_by` is stable, so items with identical timestamps keep the relative
/// order they had in the input.
pub fn sort_most_recent_first<T, F>(items: &mut [T], timestamp: F)
where
    F: Fn(&T) -> DateTime<FixedOffset>,
{
    items.sort_by(|left, right| timestamp(right).cmp(&timestamp(left)));
}

/// Keeps at most `limit` leading items. A limit of zero or below keeps nothing.
pub fn truncate_to_limit<T>(mut items: Vec<T>, limit: i64) -> Vec<T> {
    match usize::try_from(limit) {
        Ok(max) => {
            items.truncate(max);
            items
        }
        Err(_) => Vec::new(),
    }
}

/// Calendar month of `timestamp` in its own offset, rendered `YYYY-MM`.
pub fn month_key(timestamp: &DateTime<FixedOffset>) -> String {
    format!("{:04}-{:02}", timestamp.year(), timestamp.month())
}

#[cfg(test)]
mod tests {
    use chrono::{DateTime, FixedOffset};

    use super::{month_key, sort_most_recent_first, truncate_to_limit};

    fn ts(raw: &str) -> DateTime<FixedOffset> {
        DateTime::parse_from_rfc3339(raw).expect("valid rfc3339")
    }

    #[test]
    fn sort_is_descending_and_stable_on_ties() {
        let mut items = vec![
            ("a", ts("2024-01-01T00:00:00Z")),
            ("b", ts("2024-03-01T00:00:00Z")),
            ("c", ts("2024-01-01T00:00:00Z")),
            ("d", ts("2024-03-01T00:00:00Z")),
        ];

        sort_most_recent_first(&mut items, |item| item.1);

        let order: Vec<&str> = items.iter().map(|item| item.0).collect();
        assert_eq!(order, vec!["b", "d", "a", "c"]);
    }

    #[test]
    fn sort_compares_instants_across_offsets() {
        let mut items = vec![
            ("utc", ts("2024-05-01T10:00:00Z")),
            ("plus_two", ts("2024-05-01T11:00:00+02:00")),
        ];

        sort_most_recent_first(&mut items, |item| item.1);

        assert_eq!(items[0].0, "utc");
    }

    #[test]
    fn non_positive_limits_yield_nothing() {
        assert!(truncate_to_limit(vec![1, 2, 3], 0).is_empty());
        assert!(truncate_to_limit(vec![1, 2, 3], -1).is_empty());
        assert!(truncate_to_limit(vec![1, 2, 3], i64::MIN).is_empty());
    }

    #[test]
    fn oversized_limit_keeps_everything() {
        assert_eq!(truncate_to_limit(vec![1, 2, 3], 2), vec![1, 2]);
        assert_eq!(truncate_to_limit(vec![1, 2, 3], 50), vec![1, 2, 3]);
    }

    #[test]
    fn month_key_is_zero_padded_in_record_offset() {
        assert_eq!(month_key(&ts("2025-03-05T14:30:00Z")), "2025-03");
        assert_eq!(month_key(&ts("2025-03-31T23:30:00-05:00")), "2025-03");
        assert_eq!(month_key(&ts("0987-11-02T00:00:00Z")), "0987-11");
    }
}
