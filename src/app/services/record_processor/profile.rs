//! Dataset profiling over normalized records
//!
//! Read-only: the profile describes the records, it never changes them.
//! Findings are advisory and reported as warnings.

use super::layout::CleanLayout;
use crate::app::models::{DataProfile, TitleRecord};
use crate::config::YearWindow;
use crate::constants::MISSING_TYPE_KEY;
use std::collections::{BTreeMap, HashSet};
use tracing::warn;

/// Compute the data profile of the clean table
pub fn profile_records(
    records: &[TitleRecord],
    layout: &CleanLayout,
    window: &YearWindow,
    anomaly_count: usize,
) -> DataProfile {
    let unique_show_id = records
        .iter()
        .map(|record| record.show_id.as_str())
        .collect::<HashSet<_>>()
        .len();

    let mut type_counts = BTreeMap::new();
    for record in records {
        let key = record.content_type.as_deref().unwrap_or(MISSING_TYPE_KEY);
        *type_counts.entry(key.to_string()).or_insert(0) += 1;
    }

    let mut null_counts: BTreeMap<String, usize> = layout
        .columns()
        .iter()
        .map(|column| (column.name().to_string(), 0))
        .collect();
    for record in records {
        for (column, cell) in layout.columns().iter().zip(layout.render(record)) {
            if cell.is_none()
                && let Some(count) = null_counts.get_mut(column.name())
            {
                *count += 1;
            }
        }
    }

    let added_years = records.iter().filter_map(TitleRecord::added_year);
    let added_year_min = added_years.clone().min();
    let added_year_max = added_years.max();

    let mut profile = DataProfile {
        raw_rows: records.len(),
        unique_show_id,
        duplicate_show_ids: records.len() - unique_show_id,
        type_counts,
        null_counts,
        added_year_min,
        added_year_max,
        anomaly_count,
        warnings: Vec::new(),
    };

    if profile.has_duplicate_ids() {
        profile.warnings.push(format!(
            "{} rows share a show_id with an earlier row",
            profile.duplicate_show_ids
        ));
    }

    let out_of_window = [added_year_min, added_year_max]
        .into_iter()
        .flatten()
        .any(|year| !window.contains(year));
    if out_of_window {
        profile.warnings.push(format!(
            "added_year range {}-{} falls outside the plausible window {}-{}",
            added_year_min.unwrap_or_default(),
            added_year_max.unwrap_or_default(),
            window.min_year,
            window.max_year
        ));
    }

    for warning in &profile.warnings {
        warn!("{}", warning);
    }

    profile
}
