//! Comma-separated multi-value fields (`country`, `listed_in`)

/// Split on commas, trim each token and drop empty ones
pub fn split_list(value: &str) -> impl Iterator<Item = &str> {
    value
        .split(',')
        .map(str::trim)
        .filter(|token| !token.is_empty())
}

/// First non-empty token, e.g. `"United States, India"` -> `"United States"`
pub fn primary_value(value: Option<&str>) -> Option<String> {
    split_list(value?).next().map(str::to_string)
}
