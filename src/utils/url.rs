// Pure URL logic - no store or platform imports allowed.
// Turns free-text address-bar input into something navigable and formats
// URLs for display. Nothing here performs network I/O.

use url::Url;

use crate::types::settings::SearchEngine;

/// Normalizes address-bar input into a navigable URL.
///
/// Input with no scheme separator and no dot is treated as a search query
/// for the default engine; input with a dot but no scheme gets `https://`
/// prefixed; anything carrying a scheme separator passes through unchanged.
/// This never fails - worst case the input becomes a search query.
pub fn normalize_url(input: &str) -> String {
    let has_scheme = input.contains("://");

    if !has_scheme && !input.contains('.') && !input.trim().is_empty() {
        return SearchEngine::default().query_url(input);
    }

    if !has_scheme {
        return format!("https://{}", input);
    }

    input.to_string()
}

/// Hostname of `url`, or the input unchanged when it does not parse or has
/// no host. Lenient by design: display code calls this on partial input.
pub fn extract_domain(url: &str) -> String {
    match Url::parse(url) {
        Ok(parsed) => match parsed.host_str() {
            Some(host) if !host.is_empty() => host.to_string(),
            _ => url.to_string(),
        },
        Err(_) => url.to_string(),
    }
}

/// True iff the input parses as a well-formed absolute URL.
pub fn is_valid_url(url: &str) -> bool {
    Url::parse(url).is_ok()
}

/// Shortens `url` to exactly `max_length` characters, ending in `...`,
/// when it is longer; shorter input is returned unchanged.
pub fn truncate_url(url: &str, max_length: usize) -> String {
    if url.chars().count() <= max_length {
        return url.to_string();
    }
    let keep = max_length.saturating_sub(3);
    let prefix: String = url.chars().take(keep).collect();
    format!("{}...", prefix)
}
