use std::cmp::Reverse;
use std::collections::HashSet;

use chrono::{DateTime, FixedOffset};

use crate::domain::FeedItem;

/// Upper bound on the generated feed's item count.
pub const MAX_ITEMS: usize = 50;

pub struct MergeService;

impl MergeService {
    /// Collapse items sharing an identity key, keeping the first seen.
    /// Two items with the same URL but different ids collapse to one.
    pub fn dedupe(items: Vec<FeedItem>) -> Vec<FeedItem> {
        let mut seen: HashSet<String> = HashSet::new();
        items
            .into_iter()
            .filter(|item| seen.insert(item.identity_key().to_string()))
            .collect()
    }

    /// Deduplicate, sort by publication date descending, then truncate.
    /// Truncation happens after sorting so the most recent items survive
    /// regardless of insertion order.
    pub fn merge(items: Vec<FeedItem>) -> Vec<FeedItem> {
        let mut items = Self::dedupe(items);

        // Stable sort: ties and unparseable dates keep their pre-sort order,
        // with unparseable dates ordering last
        items.sort_by_key(|item| Reverse(parse_date(&item.date_published)));
        items.truncate(MAX_ITEMS);
        items
    }
}

fn parse_date(value: &str) -> Option<DateTime<FixedOffset>> {
    DateTime::parse_from_rfc3339(value).ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::FeedItem;

    fn item(id: &str, url: Option<&str>, date: &str) -> FeedItem {
        let mut item = FeedItem::new(id.to_string(), id.to_string(), "src".to_string());
        item.url = url.map(|u| u.to_string());
        item.date_published = date.to_string();
        item
    }

    fn date(day: u32) -> String {
        format!("2024-03-{:02}T12:00:00+00:00", day)
    }

    #[test]
    fn test_dedupe_same_url_different_ids() {
        let items = vec![
            item("a", Some("https://example.com/post"), &date(1)),
            item("b", Some("https://example.com/post"), &date(2)),
        ];

        let deduped = MergeService::dedupe(items);

        assert_eq!(deduped.len(), 1);
        assert_eq!(deduped[0].id, "a", "first encountered must survive");
    }

    #[test]
    fn test_dedupe_falls_back_to_id_without_url() {
        let items = vec![
            item("a", None, &date(1)),
            item("a", None, &date(2)),
            item("b", None, &date(3)),
        ];

        let deduped = MergeService::dedupe(items);
        assert_eq!(deduped.len(), 2);
    }

    #[test]
    fn test_sort_descending_by_date() {
        let items = vec![
            item("old", None, &date(1)),
            item("new", None, &date(20)),
            item("mid", None, &date(10)),
        ];

        let merged = MergeService::merge(items);
        let ids: Vec<&str> = merged.iter().map(|i| i.id.as_str()).collect();
        assert_eq!(ids, vec!["new", "mid", "old"]);
    }

    #[test]
    fn test_truncates_to_50_most_recent() {
        let mut items = Vec::new();
        for day in 1..=28 {
            items.push(item(&format!("mar-{}", day), None, &date(day)));
        }
        for day in 1..=28 {
            items.push(item(
                &format!("apr-{}", day),
                None,
                &format!("2024-04-{:02}T12:00:00+00:00", day),
            ));
        }

        let merged = MergeService::merge(items);

        assert_eq!(merged.len(), MAX_ITEMS);
        // All of April survives; only the 22 most recent March days remain
        assert!(merged.iter().filter(|i| i.id.starts_with("apr")).count() == 28);
        assert_eq!(merged[0].id, "apr-28");
        assert_eq!(merged.last().unwrap().id, "mar-7");
    }

    #[test]
    fn test_truncation_happens_after_sort() {
        // The 50 least-recent items are inserted first; a naive first-50 cut
        // would keep exactly the wrong half
        let mut items = Vec::new();
        for n in 0..50 {
            items.push(item(
                &format!("old-{}", n),
                None,
                &format!("2024-01-01T{:02}:{:02}:00+00:00", n / 60, n % 60),
            ));
        }
        for n in 0..10 {
            items.push(item(
                &format!("new-{}", n),
                None,
                &format!("2024-06-01T00:{:02}:00+00:00", n),
            ));
        }

        let merged = MergeService::merge(items);

        assert_eq!(merged.len(), MAX_ITEMS);
        assert_eq!(
            merged.iter().filter(|i| i.id.starts_with("new")).count(),
            10
        );
        assert!(merged.iter().take(10).all(|i| i.id.starts_with("new")));
    }

    #[test]
    fn test_unparseable_dates_sort_last() {
        let items = vec![
            item("bad", None, "not a date"),
            item("good", None, &date(5)),
        ];

        let merged = MergeService::merge(items);
        assert_eq!(merged[0].id, "good");
        assert_eq!(merged[1].id, "bad");
    }

    #[test]
    fn test_ties_keep_first_seen_order() {
        let items = vec![
            item("first", None, &date(5)),
            item("second", None, &date(5)),
        ];

        let merged = MergeService::merge(items);
        assert_eq!(merged[0].id, "first");
        assert_eq!(merged[1].id, "second");
    }
}
