use pocketbrowser::stores::history_store::{HistoryStore, HistoryStoreTrait, DEFAULT_RECENT_LIMIT};
use pocketbrowser::types::history::HistoryEntry;

fn entry(id: &str, url: &str, visited_at: i64) -> HistoryEntry {
    HistoryEntry {
        id: id.to_string(),
        url: url.to_string(),
        title: id.to_string(),
        favicon: None,
        visited_at,
        count: 1,
    }
}

#[test]
fn test_add_entry_creates_with_count_one() {
    let mut store = HistoryStore::new();
    let id = store.add_entry("https://google.com", "Google", None);

    assert_eq!(store.entries().len(), 1);
    let entry = &store.entries()[0];
    assert_eq!(entry.id, id);
    assert_eq!(entry.count, 1);
    assert!(entry.visited_at > 0);
}

#[test]
fn test_repeat_visit_increments_in_place() {
    let mut store = HistoryStore::new();
    let first = store.add_entry("https://google.com", "Google", None);
    store.add_entry("https://other.example", "Other", None);
    let first_visit = store.entries()[0].visited_at;

    let second = store.add_entry("https://google.com", "Google", None);

    // Same entry: id and position preserved, count bumped, timestamp fresh
    assert_eq!(first, second);
    assert_eq!(store.entries().len(), 2);
    let entry = &store.entries()[0];
    assert_eq!(entry.url, "https://google.com");
    assert_eq!(entry.count, 2);
    assert!(entry.visited_at >= first_visit);
}

#[test]
fn test_repeat_visit_preserves_original_title() {
    let mut store = HistoryStore::new();
    store.add_entry("https://google.com", "Google", None);
    store.add_entry("https://google.com", "Google Search", None);
    assert_eq!(store.entries()[0].title, "Google");
}

#[test]
fn test_remove_entry_and_clear() {
    let mut store = HistoryStore::new();
    let id = store.add_entry("https://a.example", "A", None);
    store.add_entry("https://b.example", "B", None);

    store.remove_entry(&id);
    assert_eq!(store.entries().len(), 1);
    store.remove_entry("nonexistent"); // no-op
    assert_eq!(store.entries().len(), 1);

    store.clear_history();
    assert!(store.entries().is_empty());
}

#[test]
fn test_get_history_for_url() {
    let mut store = HistoryStore::new();
    store.add_entry("https://google.com", "Google", None);
    assert!(store.get_history_for_url("https://google.com").is_some());
    assert!(store.get_history_for_url("https://unknown.example").is_none());
}

#[test]
fn test_search_matches_title_or_url_case_insensitive() {
    let mut store = HistoryStore::new();
    store.add_entry("https://google.com", "Google", None);
    store.add_entry("https://github.com", "GitHub", None);

    let results = store.search_history("GOOGLE");
    assert_eq!(results.len(), 1);
    assert_eq!(results[0].title, "Google");

    let results = store.search_history("hub");
    assert_eq!(results.len(), 1);
    assert_eq!(results[0].url, "https://github.com");
}

#[test]
fn test_recent_history_orders_by_visited_at_descending() {
    let mut store = HistoryStore::new();
    store.hydrate(vec![
        entry("a", "https://a.example", 100),
        entry("b", "https://b.example", 300),
        entry("c", "https://c.example", 200),
    ]);

    let recent = store.get_recent_history(DEFAULT_RECENT_LIMIT);
    let ids: Vec<&str> = recent.iter().map(|e| e.id.as_str()).collect();
    assert_eq!(ids, vec!["b", "c", "a"]);
}

#[test]
fn test_recent_history_respects_limit() {
    let mut store = HistoryStore::new();
    let entries: Vec<HistoryEntry> = (0..10)
        .map(|i| entry(&format!("e{}", i), &format!("https://{}.example", i), i))
        .collect();
    store.hydrate(entries);

    assert_eq!(store.get_recent_history(4).len(), 4);
    assert_eq!(store.get_recent_history(100).len(), 10);
    assert!(store.get_recent_history(0).is_empty());
}

#[test]
fn test_recent_history_limit_and_tie_stability() {
    let mut store = HistoryStore::new();
    store.hydrate(vec![
        entry("a", "https://a.example", 200),
        entry("b", "https://b.example", 100),
        entry("c", "https://c.example", 100),
        entry("d", "https://d.example", 100),
    ]);

    let recent = store.get_recent_history(3);
    assert_eq!(recent.len(), 3);
    // Stable sort: entries tied at 100 keep their original relative order
    let ids: Vec<&str> = recent.iter().map(|e| e.id.as_str()).collect();
    assert_eq!(ids, vec!["a", "b", "c"]);
}

#[test]
fn test_recent_history_does_not_reorder_collection() {
    let mut store = HistoryStore::new();
    store.hydrate(vec![
        entry("a", "https://a.example", 100),
        entry("b", "https://b.example", 300),
    ]);

    let _ = store.get_recent_history(10);
    let ids: Vec<&str> = store.entries().iter().map(|e| e.id.as_str()).collect();
    assert_eq!(ids, vec!["a", "b"]);
}

#[test]
fn test_hydrate_replaces_collection() {
    let mut store = HistoryStore::new();
    store.add_entry("https://stale.example", "Stale", None);

    store.hydrate(vec![entry("r", "https://restored.example", 42)]);
    assert_eq!(store.entries().len(), 1);
    assert_eq!(store.entries()[0].id, "r");
}
