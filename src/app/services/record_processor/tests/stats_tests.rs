//! Tests for processing statistics and result structures

use super::*;
use crate::app::services::record_processor::ProcessingStats;

#[test]
fn test_processing_stats_new() {
    let stats = ProcessingStats::new();

    assert_eq!(stats.total_input, 0);
    assert_eq!(stats.clean_rows, 0);
    assert_eq!(stats.category_rows, 0);
    assert_eq!(stats.anomaly_count(), 0);
    assert_eq!(stats, ProcessingStats::default());
}

#[test]
fn test_expansion_ratio() {
    let mut stats = ProcessingStats::new();
    assert_eq!(stats.expansion_ratio(), 0.0);

    stats.clean_rows = 4;
    stats.category_rows = 10;
    assert_eq!(stats.expansion_ratio(), 2.5);
}

#[test]
fn test_summary_format() {
    let mut stats = ProcessingStats::new();
    stats.total_input = 3;
    stats.clean_rows = 3;
    stats.category_rows = 7;
    stats.duration_anomalies = 1;
    stats.added_year_anomalies = 2;

    let summary = stats.summary();
    assert!(summary.contains("3 -> 3 records"));
    assert!(summary.contains("7 category rows (2.33 per record)"));
    assert!(summary.contains("1 duration, 2 added_year"));
    assert_eq!(stats.anomaly_count(), 3);
}

#[test]
fn test_result_summary_matches_stats() {
    let result = process(&catalog_table());

    assert_eq!(result.summary(), result.stats.summary());
    assert_eq!(result.record_count(), result.stats.clean_rows);
    assert_eq!(result.stats.anomaly_count(), result.anomalies.len());
    assert_eq!(result.stats.unknown_columns, 0);
}
