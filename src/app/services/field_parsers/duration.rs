//! Duration parsing: `"90 min"`, `"1 Season"`, `"3 Seasons"`

use crate::app::models::{DurationUnit, ParsedDuration};
use crate::config::DurationLimits;
use regex::Regex;
use std::sync::LazyLock;

static DIGITS_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[0-9]+").expect("Invalid digits regex"));

/// Duration as extracted from text, before any plausibility check
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawDuration {
    /// First digit run, verbatim
    pub digits: String,
    /// Numeric value of `digits`, saturating at `u64::MAX`
    pub magnitude: u64,
    /// Unit from the keyword, if one was recognised
    pub unit: Option<DurationUnit>,
}

impl RawDuration {
    /// Whether this duration passes the configured limits
    pub fn is_plausible(&self, limits: &DurationLimits) -> bool {
        limits.accepts(self.unit, self.magnitude)
    }
}

/// Extract magnitude and unit without judging them.
///
/// The magnitude is the first contiguous digit run. The unit is minutes when
/// the text contains `min`, seasons when it contains `season` (both case
/// insensitive), otherwise absent. Returns `None` for absent or blank input
/// and for text without digits.
pub fn extract_duration(value: Option<&str>) -> Option<RawDuration> {
    let value = value?.trim();
    if value.is_empty() {
        return None;
    }

    let digits = DIGITS_RE.find(value)?.as_str();
    let magnitude = digits.parse::<u64>().unwrap_or(u64::MAX);

    let lowered = value.to_lowercase();
    let unit = if lowered.contains("min") {
        Some(DurationUnit::Minutes)
    } else if lowered.contains("season") {
        Some(DurationUnit::Seasons)
    } else {
        None
    };

    Some(RawDuration {
        digits: digits.to_string(),
        magnitude,
        unit,
    })
}

/// Parse a duration and coerce implausible magnitudes to absent.
///
/// An implausible magnitude keeps its unit so the coercion stays
/// attributable. A digit run without a recognised unit keeps its magnitude
/// and has no unit, unlike text without digits, where both are absent.
pub fn parse_duration(value: Option<&str>, limits: &DurationLimits) -> ParsedDuration {
    let Some(raw) = extract_duration(value) else {
        return ParsedDuration::absent();
    };

    if raw.is_plausible(limits) {
        ParsedDuration::new(Some(raw.magnitude), raw.unit)
    } else {
        ParsedDuration::new(None, raw.unit)
    }
}
