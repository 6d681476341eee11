//! Tests for whitespace normalization, slugs and header names

use super::super::text::{normalize_header, normalize_text, slugify};
use proptest::prelude::*;

#[test]
fn test_normalize_text_trims_and_collapses() {
    assert_eq!(
        normalize_text(Some("  Dick   Johnson\tIs  Dead \n")),
        Some("Dick Johnson Is Dead".to_string())
    );
    assert_eq!(normalize_text(Some("PG-13")), Some("PG-13".to_string()));
}

#[test]
fn test_normalize_text_absent_values() {
    assert_eq!(normalize_text(None), None);
    assert_eq!(normalize_text(Some("")), None);
    assert_eq!(normalize_text(Some("   \t\n")), None);
}

#[test]
fn test_slugify() {
    assert_eq!(slugify(Some("Dick Johnson Is Dead")), "dick-johnson-is-dead");
    assert_eq!(slugify(Some("  --Blood & Water!!  ")), "blood-water");
    assert_eq!(slugify(Some("3%")), "3");
    assert_eq!(slugify(Some("Amélie")), "am-lie");
    assert_eq!(slugify(Some("!!!")), "");
    assert_eq!(slugify(None), "");
}

#[test]
fn test_normalize_header() {
    assert_eq!(normalize_header("Show ID"), "show_id");
    assert_eq!(normalize_header("  date   added "), "date_added");
    assert_eq!(normalize_header("\u{feff}show_id"), "show_id");
    assert_eq!(normalize_header("listed_in"), "listed_in");
}

proptest! {
    #[test]
    fn prop_normalize_text_is_idempotent(input in ".*") {
        let once = normalize_text(Some(&input));
        let twice = normalize_text(once.as_deref());
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn prop_normalize_text_whitespace_heavy_is_idempotent(input in "[ \t\r\na-zA-Z,]{0,40}") {
        let once = normalize_text(Some(&input));
        prop_assert_eq!(normalize_text(once.as_deref()), once.clone());
        if let Some(value) = once {
            prop_assert!(!value.contains("  "));
            prop_assert_eq!(value.trim(), value.as_str());
        }
    }

    #[test]
    fn prop_slug_is_url_safe(input in ".*") {
        let slug = slugify(Some(&input));
        prop_assert!(slug.chars().all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-'));
        prop_assert!(!slug.starts_with('-'));
        prop_assert!(!slug.ends_with('-'));
        prop_assert!(!slug.contains("--"));
    }
}
