use pocketbrowser::utils::time::time_ago_at;
use pocketbrowser::utils::url::{extract_domain, is_valid_url, normalize_url, truncate_url};
use rstest::rstest;

// --- normalize_url ---

#[rstest]
#[case("https://google.com", "https://google.com")]
#[case("http://example.com", "http://example.com")]
#[case("about://settings", "about://settings")]
fn test_normalize_keeps_qualified_urls(#[case] input: &str, #[case] expected: &str) {
    assert_eq!(normalize_url(input), expected);
}

#[rstest]
#[case("google.com", "https://google.com")]
#[case("docs.rs/serde", "https://docs.rs/serde")]
#[case("localhost.dev:8080", "https://localhost.dev:8080")]
fn test_normalize_prefixes_scheme_for_domains(#[case] input: &str, #[case] expected: &str) {
    assert_eq!(normalize_url(input), expected);
}

#[test]
fn test_normalize_turns_plain_words_into_search() {
    let out = normalize_url("hello");
    assert!(out.contains("search?q="), "got {}", out);

    let out = normalize_url("how do browsers work");
    assert!(out.contains("search?q="), "got {}", out);
    assert!(out.contains("how%20do%20browsers%20work"));
}

// --- extract_domain ---

#[rstest]
#[case("https://www.google.com/search", "www.google.com")]
#[case("https://github.com/rust-lang/rust", "github.com")]
#[case("http://localhost:3000/page", "localhost")]
#[case("not a url", "not a url")]
fn test_extract_domain(#[case] input: &str, #[case] expected: &str) {
    assert_eq!(extract_domain(input), expected);
}

#[test]
fn test_extract_domain_without_host_falls_back() {
    // Parses as a URL but has no host
    assert_eq!(extract_domain("mailto:user@example.com"), "mailto:user@example.com");
}

// --- is_valid_url ---

#[rstest]
#[case("https://google.com", true)]
#[case("http://example.com/path?q=1", true)]
#[case("file:///tmp/page.html", true)]
#[case("not a url", false)]
#[case("google.com", false)]
#[case("", false)]
fn test_is_valid_url(#[case] input: &str, #[case] expected: bool) {
    assert_eq!(is_valid_url(input), expected);
}

// --- truncate_url ---

#[test]
fn test_truncate_to_exact_length_with_ellipsis() {
    let url = "https://example.com/a/really/long/path/with/segments";
    assert_eq!(url.len(), 52);

    let out = truncate_url(url, 20);
    assert_eq!(out.chars().count(), 20);
    assert!(out.ends_with("..."));
    assert_eq!(&out[..17], &url[..17]);
}

#[test]
fn test_truncate_leaves_short_urls_alone() {
    assert_eq!(truncate_url("https://a.com", 20), "https://a.com");
}

// --- time_ago ---

const NOW: i64 = 1_700_000_000_000;

#[rstest]
#[case(30_000, "just now")]
#[case(90_000, "1m ago")]
#[case(45 * 60_000, "45m ago")]
#[case(3 * 3_600_000, "3h ago")]
#[case(2 * 86_400_000, "2d ago")]
fn test_time_ago_relative_buckets(#[case] age_ms: i64, #[case] expected: &str) {
    assert_eq!(time_ago_at(NOW - age_ms, NOW), expected);
}

#[test]
fn test_time_ago_old_entries_show_a_date() {
    let label = time_ago_at(NOW - 30 * 86_400_000, NOW);
    assert!(!label.ends_with("ago"), "got {}", label);
    assert_ne!(label, "just now");
}
