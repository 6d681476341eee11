//! Processing statistics and result structures for the catalog pipeline
//!
//! This module provides types for tracking how many rows went through each
//! stage and for handing the produced tables to the output layer.

use super::layout::CleanLayout;
use crate::app::models::{AnomalyEntry, CategoryTable, DataProfile, TitleRecord};

/// Statistics for one pipeline run
#[derive(Debug, Clone, PartialEq)]
pub struct ProcessingStats {
    /// Number of input rows
    pub total_input: usize,
    /// Number of records in the clean table
    pub clean_rows: usize,
    /// Number of rows in the category table
    pub category_rows: usize,
    /// Values coerced to absent as implausible durations
    pub duration_anomalies: usize,
    /// Values coerced to absent as implausible added years
    pub added_year_anomalies: usize,
    /// Rows without an identifier value
    pub empty_ids: usize,
    /// Source columns outside the known schema, passed through
    pub unknown_columns: usize,
}

impl ProcessingStats {
    /// Create new empty processing statistics
    pub fn new() -> Self {
        Self {
            total_input: 0,
            clean_rows: 0,
            category_rows: 0,
            duration_anomalies: 0,
            added_year_anomalies: 0,
            empty_ids: 0,
            unknown_columns: 0,
        }
    }

    pub fn anomaly_count(&self) -> usize {
        self.duration_anomalies + self.added_year_anomalies
    }

    /// Category rows per clean record
    pub fn expansion_ratio(&self) -> f64 {
        if self.clean_rows == 0 {
            0.0
        } else {
            self.category_rows as f64 / self.clean_rows as f64
        }
    }

    /// Get summary of processing pipeline statistics
    pub fn summary(&self) -> String {
        format!(
            "Processing Summary: {} -> {} records | {} category rows ({:.2} per record) | \
             Anomalies: {} duration, {} added_year | Empty ids: {} | Extra columns: {}",
            self.total_input,
            self.clean_rows,
            self.category_rows,
            self.expansion_ratio(),
            self.duration_anomalies,
            self.added_year_anomalies,
            self.empty_ids,
            self.unknown_columns
        )
    }
}

impl Default for ProcessingStats {
    fn default() -> Self {
        Self::new()
    }
}

/// Everything one run produces, ready to be written
#[derive(Debug, Clone)]
pub struct ProcessingResult {
    /// Column layout of the clean table
    pub layout: CleanLayout,
    /// Clean records, one per input row, in input order
    pub records: Vec<TitleRecord>,
    /// Long-form category table
    pub categories: CategoryTable,
    /// Anomaly log in discovery order
    pub anomalies: Vec<AnomalyEntry>,
    pub profile: DataProfile,
    pub stats: ProcessingStats,
}

impl ProcessingResult {
    pub fn record_count(&self) -> usize {
        self.records.len()
    }

    pub fn has_anomalies(&self) -> bool {
        !self.anomalies.is_empty()
    }

    /// Get summary string for logging
    pub fn summary(&self) -> String {
        self.stats.summary()
    }
}
