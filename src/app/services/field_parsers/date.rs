//! Best-effort date parsing for `date_added` and `release_year`
//!
//! Scraped catalog exports mix long-form dates ("September 9, 2019"), ISO
//! dates and the odd timestamp. Anything that cannot be read as a calendar
//! date is downgraded to unknown rather than rejected.

use super::text::normalize_text;
use crate::constants::NULL_DATE_TOKENS;
use chrono::{DateTime, NaiveDate, NaiveDateTime};

/// Date-only formats, tried in order
const DATE_FORMATS: &[&str] = &[
    "%Y-%m-%d",
    "%B %d, %Y", // September 9, 2019 (also accepts Sep 9, 2019)
    "%d %B %Y",  // 9 September 2019
    "%d %B, %Y", // 9 September, 2019
    "%d-%b-%Y",  // 09-Sep-2019
    "%Y/%m/%d",  // 2019/09/09
    "%m/%d/%Y",  // US: 09/09/2019
];

/// Timestamp formats whose date part is kept
const DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d %H:%M",
];

/// Month-year formats; the first of the month is assumed
const MONTH_YEAR_FORMATS: &[&str] = &["%B %Y", "%B, %Y", "%Y-%m"];

/// Parse a free-form `date_added` value.
///
/// Returns `None` for absent input, for the null tokens `""`, `"nan"`,
/// `"none"` and `"null"` (any case), and for anything that is not a
/// calendar date.
pub fn parse_date_added(value: Option<&str>) -> Option<NaiveDate> {
    let value = normalize_text(value)?;
    if NULL_DATE_TOKENS.contains(&value.to_lowercase().as_str()) {
        return None;
    }

    try_parse_date(&value)
        .or_else(|| try_parse_datetime(&value))
        .or_else(|| try_parse_month_year(&value))
        .or_else(|| try_parse_year(&value))
}

fn try_parse_date(value: &str) -> Option<NaiveDate> {
    DATE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(value, fmt).ok())
}

fn try_parse_datetime(value: &str) -> Option<NaiveDate> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return Some(dt.date_naive());
    }

    DATETIME_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(value, fmt).ok())
        .map(|dt| dt.date())
}

fn try_parse_month_year(value: &str) -> Option<NaiveDate> {
    MONTH_YEAR_FORMATS.iter().find_map(|fmt| {
        NaiveDate::parse_from_str(&format!("{value} 01"), &format!("{fmt} %d")).ok()
    })
}

fn try_parse_year(value: &str) -> Option<NaiveDate> {
    if value.len() != 4 || !value.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    let year = value.parse::<i32>().ok()?;
    NaiveDate::from_ymd_opt(year, 1, 1)
}

/// Parse `release_year` as an integer; non-numeric input becomes `None`.
///
/// Whole-number floats such as `"2019.0"` are accepted since spreadsheet
/// round-trips often produce them.
pub fn parse_release_year(value: Option<&str>) -> Option<i32> {
    let value = value?.trim();
    if let Ok(year) = value.parse::<i32>() {
        return Some(year);
    }

    let float = value.parse::<f64>().ok()?;
    if float.is_finite() && float.fract() == 0.0 && float.abs() <= i32::MAX as f64 {
        Some(float as i32)
    } else {
        None
    }
}
