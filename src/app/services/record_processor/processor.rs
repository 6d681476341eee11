//! Main record processor implementation and pipeline orchestration
//!
//! This module contains the RecordProcessor struct and runs the catalog
//! pipeline in its fixed order: header check, normalization, anomaly pass,
//! profiling and category explosion. Nothing here touches the filesystem.

use crate::app::models::{AnomalyField, SourceColumn, SourceTable};
use crate::config::{Config, YearWindow};
use crate::{Error, Result};
use chrono::Datelike;
use tracing::{debug, info, warn};

use super::{
    anomalies::{AnomalySink, TracingSink, collect_anomalies},
    column_mapping::ColumnMapping,
    expansion::{category_columns, explode_column},
    layout::CleanLayout,
    normalize::{NormalizeContext, normalize_record},
    profile::profile_records,
    stats::{ProcessingResult, ProcessingStats},
};

/// Record processor for catalog exports
///
/// # Example
///
/// ```rust
/// use catalog_prep::app::models::SourceTable;
/// use catalog_prep::app::services::record_processor::RecordProcessor;
/// use catalog_prep::config::Config;
///
/// # fn example() -> catalog_prep::Result<()> {
/// let table = SourceTable::new(
///     vec!["show_id".into(), "title".into(), "duration".into(), "listed_in".into()],
///     vec![vec!["s1".into(), "Dick Johnson".into(), "90 min".into(), "Documentaries".into()]],
/// );
///
/// let processor = RecordProcessor::new(Config::default());
/// let result = processor.process(&table)?;
/// assert_eq!(result.records[0].duration.magnitude, Some(90));
/// assert_eq!(result.categories.row_count(), 1);
/// # Ok(())
/// # }
/// # example().unwrap();
/// ```
#[derive(Debug, Clone)]
pub struct RecordProcessor {
    config: Config,
    /// Calendar year the added-year window is resolved against
    reference_year: i32,
}

impl RecordProcessor {
    /// Create a processor that resolves the added-year window against the
    /// current calendar year
    pub fn new(config: Config) -> Self {
        Self {
            config,
            reference_year: chrono::Local::now().year(),
        }
    }

    /// Resolve the added-year window against `year` instead of the clock
    pub fn with_reference_year(mut self, year: i32) -> Self {
        self.reference_year = year;
        self
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn year_window(&self) -> YearWindow {
        self.config.added_year.resolve(self.reference_year)
    }

    /// Run the pipeline, reporting anomalies as warnings
    pub fn process(&self, table: &SourceTable) -> Result<ProcessingResult> {
        self.process_with_sink(table, &mut TracingSink)
    }

    /// Run the pipeline, reporting every anomaly to `sink` in log order.
    ///
    /// Fails before doing any work when the identifier column is missing or
    /// the configured category column does not exist.
    pub fn process_with_sink(
        &self,
        table: &SourceTable,
        sink: &mut dyn AnomalySink,
    ) -> Result<ProcessingResult> {
        let mut stats = ProcessingStats::new();
        stats.total_input = table.row_count();

        info!(
            "Starting catalog pipeline for {} rows, {} columns",
            table.row_count(),
            table.headers.len()
        );

        // Step 1: Header check and layout
        let mapping = ColumnMapping::analyze(&table.headers)?;
        let (total, known, unknown) = mapping.stats();
        stats.unknown_columns = unknown;
        debug!(
            "Column mapping: {} total, {} known, {} passed through",
            total, known, unknown
        );

        for column in SourceColumn::ALL {
            if !mapping.has(column) {
                debug!("Source has no '{}' column", column.name());
            }
        }

        let layout = CleanLayout::from_mapping(&mapping);
        let expansion = &self.config.expansion;
        if !layout.has_column(&expansion.category_column) {
            return Err(Error::configuration(format!(
                "Category column '{}' is not in the clean table",
                expansion.category_column
            )));
        }
        category_columns(&layout, &expansion.value_column)?;

        // Step 2: Normalize, parse and derive
        let window = self.year_window();
        let ctx = NormalizeContext {
            mapping: &mapping,
            layout: &layout,
            duration_limits: self.config.duration,
            year_window: window,
        };
        let records: Vec<_> = table
            .rows
            .iter()
            .map(|row| normalize_record(row, &ctx))
            .collect();
        stats.clean_rows = records.len();

        stats.empty_ids = records.iter().filter(|r| r.show_id.is_empty()).count();
        if stats.empty_ids > 0 {
            warn!("{} rows have an empty show_id", stats.empty_ids);
        }

        // Step 3: Anomaly pass
        let anomalies = collect_anomalies(&records, &self.config.duration, &window);
        for entry in &anomalies {
            match entry.field {
                AnomalyField::DurationNum => stats.duration_anomalies += 1,
                AnomalyField::AddedYear => stats.added_year_anomalies += 1,
            }
            sink.record(entry);
        }
        debug!("Anomaly pass found {} coerced values", anomalies.len());

        // Step 4: Profile
        let profile = profile_records(&records, &layout, &window, anomalies.len());

        // Step 5: Category explosion
        let categories = explode_column(
            &records,
            &layout,
            &expansion.category_column,
            &expansion.value_column,
        )?;
        stats.category_rows = categories.row_count();

        info!("{}", stats.summary());

        Ok(ProcessingResult {
            layout,
            records,
            categories,
            anomalies,
            profile,
            stats,
        })
    }
}
