//! Collapse records that resolve to the same canonical link.

use std::collections::HashMap;

use crate::record::Competition;

/// Group by trimmed link and keep the most complete record per group.
/// Ties keep the first-seen record; output preserves first-seen order.
/// Records with an empty link are dropped outright.
pub fn dedupe(records: Vec<Competition>) -> Vec<Competition> {
    let mut kept: Vec<Competition> = Vec::new();
    let mut index_by_link: HashMap<String, usize> = HashMap::new();

    for record in records {
        let key = record.link.trim().to_string();
        if key.is_empty() {
            continue;
        }
        match index_by_link.get(&key) {
            Some(&i) => {
                if record.completeness() > kept[i].completeness() {
                    kept[i] = record;
                }
            }
            None => {
                index_by_link.insert(key, kept.len());
                kept.push(record);
            }
        }
    }

    kept
}

// ── Tests ──

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classify::Category;

    fn record(link: &str, deadline: Option<&str>, description: Option<&str>) -> Competition {
        Competition {
            title: "Sample Competition".to_string(),
            category: Category::Other,
            eligibility: None,
            deadline: deadline.map(String::from),
            link: link.to_string(),
            description: description.map(String::from),
        }
    }

    #[test]
    fn distinct_links_all_survive() {
        let out = dedupe(vec![
            record("https://a.example/1", None, None),
            record("https://a.example/2", None, None),
        ]);
        assert_eq!(out.len(), 2);
    }

    #[test]
    fn most_complete_record_wins() {
        let out = dedupe(vec![
            record("https://a.example/1", None, None),
            record(
                "https://a.example/1",
                Some("2025-09-01"),
                Some("full description with details"),
            ),
        ]);
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].deadline.as_deref(), Some("2025-09-01"));
        assert!(out[0].description.is_some());
    }

    #[test]
    fn ties_keep_first_seen() {
        let mut first = record("https://a.example/1", Some("2025-01-01"), None);
        first.title = "First".to_string();
        let mut second = record("https://a.example/1", Some("2025-02-02"), None);
        second.title = "Second".to_string();

        let out = dedupe(vec![first, second]);
        assert_eq!(out[0].title, "First");
    }

    #[test]
    fn output_links_are_pairwise_distinct() {
        let out = dedupe(vec![
            record("https://a.example/1", None, None),
            record("https://a.example/2", Some("2025-09-01"), None),
            record("https://a.example/1  ", Some("2025-09-01"), None),
            record("https://a.example/3", None, None),
        ]);
        let mut links: Vec<&str> = out.iter().map(|r| r.link.trim()).collect();
        let before = links.len();
        links.sort();
        links.dedup();
        assert_eq!(links.len(), before);
    }

    #[test]
    fn preserves_first_seen_order() {
        let out = dedupe(vec![
            record("https://a.example/3", None, None),
            record("https://a.example/1", None, None),
            record("https://a.example/2", None, None),
        ]);
        let links: Vec<&str> = out.iter().map(|r| r.link.as_str()).collect();
        assert_eq!(
            links,
            [
                "https://a.example/3",
                "https://a.example/1",
                "https://a.example/2"
            ]
        );
    }

    #[test]
    fn empty_links_are_dropped() {
        let out = dedupe(vec![record("   ", Some("2025-09-01"), None)]);
        assert!(out.is_empty());
    }
}
