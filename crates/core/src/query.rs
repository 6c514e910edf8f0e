//! Search-query normalization.
//!
//! Lives in `core` so both the catalog client (server side) and the
//! browsing client short-circuit empty queries the same way.

/// Normalize raw search input into a usable query string.
///
/// Trims surrounding whitespace and returns `None` when nothing
/// remains. An empty query must never reach the upstream catalog: its
/// "no results" and "no query" responses are indistinguishable, so
/// callers treat `None` as "zero matches, no round trip".
///
/// # Examples
///
/// ```
/// use mortydex_core::query::normalize_query;
/// assert_eq!(normalize_query("  rick "), Some("rick"));
/// assert_eq!(normalize_query("   "), None);
/// ```
pub fn normalize_query(raw: &str) -> Option<&str> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
