//! Anomaly detection and collection
//!
//! Normalization silently coerces implausible values to absent. This pass
//! re-derives which coercions happened from the raw text kept on each
//! record, using the same predicates the parsers use, and reports them to
//! an [`AnomalySink`].

use crate::app::models::{AnomalyEntry, AnomalyField, TitleRecord};
use crate::app::services::field_parsers::{extract_duration, parse_date_added};
use crate::config::{DurationLimits, YearWindow};
use chrono::Datelike;
use tracing::warn;

/// Receiver for anomaly entries as they are discovered
pub trait AnomalySink {
    fn record(&mut self, entry: &AnomalyEntry);
}

/// Ordered in-memory collector
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AnomalyLog {
    entries: Vec<AnomalyEntry>,
}

impl AnomalyLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn entries(&self) -> &[AnomalyEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn into_entries(self) -> Vec<AnomalyEntry> {
        self.entries
    }
}

impl AnomalySink for AnomalyLog {
    fn record(&mut self, entry: &AnomalyEntry) {
        self.entries.push(entry.clone());
    }
}

/// Sink that reports each anomaly as a warning event
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl AnomalySink for TracingSink {
    fn record(&mut self, entry: &AnomalyEntry) {
        warn!(
            "Coerced {} to missing for {} (value: {})",
            entry.field, entry.show_id, entry.value
        );
    }
}

/// Duration anomaly for one record, if its duration was coerced
pub fn duration_anomaly(record: &TitleRecord, limits: &DurationLimits) -> Option<AnomalyEntry> {
    let raw = extract_duration(record.duration_raw.as_deref())?;
    if raw.is_plausible(limits) {
        return None;
    }
    Some(AnomalyEntry::new(
        record.show_id.as_str(),
        AnomalyField::DurationNum,
        raw.digits,
    ))
}

/// Added-year anomaly for one record, if its date was coerced
pub fn added_year_anomaly(record: &TitleRecord, window: &YearWindow) -> Option<AnomalyEntry> {
    let year = parse_date_added(record.date_added_raw.as_deref())?.year();
    if window.contains(year) {
        return None;
    }
    Some(AnomalyEntry::new(
        record.show_id.as_str(),
        AnomalyField::AddedYear,
        year.to_string(),
    ))
}

/// All anomalies in discovery order: duration anomalies in row order, then
/// added-year anomalies in row order
pub fn collect_anomalies(
    records: &[TitleRecord],
    limits: &DurationLimits,
    window: &YearWindow,
) -> Vec<AnomalyEntry> {
    let durations = records.iter().filter_map(|r| duration_anomaly(r, limits));
    let years = records.iter().filter_map(|r| added_year_anomaly(r, window));
    durations.chain(years).collect()
}
