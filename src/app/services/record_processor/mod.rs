//! Record processing module for catalog exports
//!
//! This module turns a raw [`SourceTable`](crate::app::models::SourceTable)
//! into the clean title table, the long-form category table, the anomaly log
//! and the data profile. It is purely in-memory; writing the results is the
//! job of the filesystem adapter.
//!
//! # Architecture
//!
//! The module is organized into logical components:
//! - [`processor`] - Main RecordProcessor struct and pipeline orchestration
//! - [`column_mapping`] - Header normalization and lookup over the known schema
//! - [`layout`] - Column order of the clean table
//! - [`normalize`] - Row normalization into title records
//! - [`anomalies`] - Detection and collection of coerced values
//! - [`profile`] - Dataset-level quality summary
//! - [`expansion`] - Category explosion into a fact table
//! - [`stats`] - Processing statistics and result structures
//!
//! # Processing Pipeline
//!
//! 1. **Header check**: the `show_id` column must exist, otherwise the run fails
//! 2. **Normalization**: whitespace cleanup, slug, primary country, date and
//!    duration parsing with plausibility coercion
//! 3. **Anomaly pass**: every coerced value is logged, durations first
//! 4. **Profiling**: row and identifier counts, nulls, type distribution
//! 5. **Expansion**: one row per (title, category) pair
//!
//! Row-level problems never stop the run. Unparseable values become absent
//! silently; implausible values become absent and are logged.
//!
//! # Example Usage
//!
//! ```rust
//! use catalog_prep::app::models::SourceTable;
//! use catalog_prep::app::services::record_processor::{AnomalyLog, RecordProcessor};
//! use catalog_prep::config::Config;
//!
//! # fn example() -> catalog_prep::Result<()> {
//! let table = SourceTable::new(
//!     vec!["show_id".into(), "duration".into()],
//!     vec![vec!["s1".into(), "9999 min".into()]],
//! );
//!
//! let mut log = AnomalyLog::new();
//! let result = RecordProcessor::new(Config::default()).process_with_sink(&table, &mut log)?;
//!
//! println!("Processing summary: {}", result.summary());
//! assert_eq!(log.len(), 1);
//! assert_eq!(result.records[0].duration.magnitude, None);
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```

pub mod anomalies;
pub mod column_mapping;
pub mod expansion;
pub mod layout;
pub mod normalize;
pub mod processor;
pub mod profile;
pub mod stats;

#[cfg(test)]
pub mod tests;

// Re-export main types for easy access
pub use anomalies::{AnomalyLog, AnomalySink, TracingSink, collect_anomalies};
pub use column_mapping::ColumnMapping;
pub use expansion::explode_column;
pub use layout::{CleanLayout, LayoutColumn};
pub use normalize::{NormalizeContext, normalize_record};
pub use processor::RecordProcessor;
pub use profile::profile_records;
pub use stats::{ProcessingResult, ProcessingStats};
