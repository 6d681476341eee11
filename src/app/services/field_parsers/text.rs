//! Whitespace normalization for free-text fields

use regex::Regex;
use std::sync::LazyLock;

static WHITESPACE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("Invalid whitespace regex"));

static NON_SLUG_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^a-z0-9]+").expect("Invalid slug regex"));

/// Trim a text value and collapse internal whitespace runs to one space.
///
/// Returns `None` when the input is absent or nothing is left after
/// trimming. Normalizing an already normalized value returns it unchanged.
pub fn normalize_text(value: Option<&str>) -> Option<String> {
    let trimmed = value?.trim();
    if trimmed.is_empty() {
        return None;
    }
    Some(WHITESPACE_RE.replace_all(trimmed, " ").into_owned())
}

/// URL-safe slug of a title: lowercase, runs of anything outside `[a-z0-9]`
/// replaced by `-`, no leading or trailing `-`.
pub fn slugify(title: Option<&str>) -> String {
    let lowered = title.unwrap_or_default().to_lowercase();
    NON_SLUG_RE
        .replace_all(&lowered, "-")
        .trim_matches('-')
        .to_string()
}

/// Snake-case a header name: trim, whitespace runs to `_`, lowercase.
/// A leading byte-order mark is dropped.
pub fn normalize_header(name: &str) -> String {
    let name = name.trim_start_matches('\u{feff}').trim();
    WHITESPACE_RE.replace_all(name, "_").to_lowercase()
}
