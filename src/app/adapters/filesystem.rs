//! Filesystem adapter: reading the catalog export and writing the outputs
//!
//! Every value is read as raw text; typing happens in the record processor.
//! Absent values are written as empty fields.

use crate::app::models::{AnomalyEntry, CategoryTable, DataProfile, SourceTable, TitleRecord};
use crate::app::services::record_processor::{CleanLayout, ProcessingResult};
use crate::config::OutputConfig;
use crate::constants::ANOMALY_LOG_HEADER;
use crate::{Error, Result};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Where one run wrote its files
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputPaths {
    pub clean_table: PathBuf,
    pub category_table: PathBuf,
    pub profile: PathBuf,
    /// Present only when at least one anomaly was logged
    pub anomaly_log: Option<PathBuf>,
}

impl OutputPaths {
    /// Written files in write order
    pub fn written(&self) -> Vec<&Path> {
        let mut paths = vec![
            self.clean_table.as_path(),
            self.category_table.as_path(),
            self.profile.as_path(),
        ];
        if let Some(log) = &self.anomaly_log {
            paths.push(log.as_path());
        }
        paths
    }
}

/// Read a delimited catalog export into memory.
///
/// The first line is the header. Rows may be shorter or longer than the
/// header; missing trailing fields read as absent.
pub fn read_source_table(path: &Path) -> Result<SourceTable> {
    let file_name = path.display().to_string();
    let file = fs::File::open(path)
        .map_err(|e| Error::io(format!("Failed to open input file: {}", file_name), e))?;

    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(file);

    let headers: Vec<String> = reader
        .headers()
        .map_err(|e| Error::csv_parsing(&file_name, "Failed to read CSV headers", Some(e)))?
        .iter()
        .map(str::to_string)
        .collect();

    let mut rows = Vec::new();
    for (index, result) in reader.records().enumerate() {
        let record = result.map_err(|e| {
            Error::csv_parsing(&file_name, format!("Failed to read row {}", index + 1), Some(e))
        })?;
        rows.push(record.iter().map(str::to_string).collect());
    }

    info!(
        "Read {} rows with {} columns from {}",
        rows.len(),
        headers.len(),
        file_name
    );

    Ok(SourceTable::new(headers, rows))
}

fn create_dir(dir: &Path) -> Result<()> {
    fs::create_dir_all(dir)
        .map_err(|e| Error::io(format!("Failed to create directory: {}", dir.display()), e))
}

fn csv_writer(path: &Path) -> Result<csv::Writer<fs::File>> {
    csv::Writer::from_path(path).map_err(|e| {
        Error::csv_parsing(
            path.display().to_string(),
            "Failed to create output file",
            Some(e),
        )
    })
}

fn finish(mut writer: csv::Writer<fs::File>, path: &Path) -> Result<()> {
    writer
        .flush()
        .map_err(|e| Error::io(format!("Failed to flush {}", path.display()), e))
}

/// Write the clean table in layout order
pub fn write_clean_table(path: &Path, layout: &CleanLayout, records: &[TitleRecord]) -> Result<()> {
    let mut writer = csv_writer(path)?;
    writer.write_record(layout.header())?;
    for record in records {
        let row = layout.render(record);
        writer.write_record(row.iter().map(|cell| cell.as_deref().unwrap_or_default()))?;
    }
    finish(writer, path)?;
    debug!("Wrote {} clean rows to {}", records.len(), path.display());
    Ok(())
}

/// Write the long-form category table
pub fn write_category_table(path: &Path, table: &CategoryTable) -> Result<()> {
    let mut writer = csv_writer(path)?;
    writer.write_record(table.header())?;
    for row in &table.rows {
        writer.write_record(table.render(row).into_iter().map(Option::unwrap_or_default))?;
    }
    finish(writer, path)?;
    debug!("Wrote {} category rows to {}", table.row_count(), path.display());
    Ok(())
}

/// Write the profile as pretty-printed JSON
pub fn write_profile(path: &Path, profile: &DataProfile) -> Result<()> {
    let json = serde_json::to_string_pretty(profile)
        .map_err(|e| Error::serialization("Failed to serialize data profile", e))?;
    fs::write(path, json)
        .map_err(|e| Error::io(format!("Failed to write profile: {}", path.display()), e))?;
    debug!("Wrote data profile to {}", path.display());
    Ok(())
}

/// Write the anomaly log as (show_id, field, value) rows
pub fn write_anomaly_log(path: &Path, anomalies: &[AnomalyEntry]) -> Result<()> {
    let mut writer = csv_writer(path)?;
    writer.write_record(ANOMALY_LOG_HEADER)?;
    for entry in anomalies {
        writer.write_record([entry.show_id.as_str(), entry.field.as_str(), entry.value.as_str()])?;
    }
    finish(writer, path)?;
    debug!("Wrote {} anomalies to {}", anomalies.len(), path.display());
    Ok(())
}

/// Write every output of a run.
///
/// Directories are created as needed. The logs directory is only touched
/// when there is at least one anomaly to log.
pub fn write_outputs(
    result: &ProcessingResult,
    out_dir: &Path,
    logs_dir: &Path,
    names: &OutputConfig,
) -> Result<OutputPaths> {
    create_dir(out_dir)?;

    let paths = OutputPaths {
        clean_table: out_dir.join(&names.clean_file),
        category_table: out_dir.join(&names.category_file),
        profile: out_dir.join(&names.profile_file),
        anomaly_log: result
            .has_anomalies()
            .then(|| logs_dir.join(&names.anomaly_file)),
    };

    write_clean_table(&paths.clean_table, &result.layout, &result.records)?;
    write_category_table(&paths.category_table, &result.categories)?;
    write_profile(&paths.profile, &result.profile)?;

    if let Some(log_path) = &paths.anomaly_log {
        create_dir(logs_dir)?;
        write_anomaly_log(log_path, &result.anomalies)?;
    }

    info!("Wrote {} output files to {}", paths.written().len(), out_dir.display());
    Ok(paths)
}
