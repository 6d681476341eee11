//! Command implementation for the catalog preparation CLI
//!
//! This module contains the run logic, configuration layering and the final
//! report printed after a run.

use crate::app::adapters::filesystem::{OutputPaths, read_source_table, write_outputs};
use crate::app::models::DataProfile;
use crate::app::services::record_processor::RecordProcessor;
use crate::cli::args::{Args, OutputFormat};
use crate::config::Config;
use crate::{Error, Result};
use colored::Colorize;
use std::path::PathBuf;
use std::time::{Duration, Instant};
use tracing::{debug, info};

/// Outcome of one run, used for reporting
#[derive(Debug, Clone)]
pub struct RunSummary {
    pub input: PathBuf,
    pub rows_read: usize,
    pub clean_rows: usize,
    pub category_rows: usize,
    pub anomaly_count: usize,
    pub profile: DataProfile,
    /// Files written; `None` for a dry run
    pub outputs: Option<OutputPaths>,
    pub processing_time: Duration,
}

impl RunSummary {
    pub fn is_dry_run(&self) -> bool {
        self.outputs.is_none()
    }

    /// Machine-readable form of the summary
    pub fn to_json(&self) -> serde_json::Value {
        let outputs = self.outputs.as_ref().map(|paths| {
            serde_json::json!({
                "clean_table": paths.clean_table,
                "category_table": paths.category_table,
                "profile": paths.profile,
                "anomaly_log": paths.anomaly_log,
            })
        });

        serde_json::json!({
            "input": self.input,
            "dry_run": self.is_dry_run(),
            "rows_read": self.rows_read,
            "clean_rows": self.clean_rows,
            "category_rows": self.category_rows,
            "anomaly_count": self.anomaly_count,
            "processing_time_seconds": self.processing_time.as_secs_f64(),
            "outputs": outputs,
            "profile": self.profile,
        })
    }
}

/// Main command runner
///
/// 1. Set up logging and configuration
/// 2. Read and process the input
/// 3. Write the outputs unless this is a dry run
/// 4. Print the report
pub fn run(args: Args) -> Result<RunSummary> {
    setup_logging(&args);

    info!("Starting catalog preparation");
    debug!("Command line arguments: {:?}", args);

    args.validate()?;

    let config = load_configuration(&args)?;
    debug!("Loaded configuration: {:?}", config);

    let summary = execute(&args, &config)?;
    generate_final_report(args.output_format, &summary)?;

    Ok(summary)
}

/// Run the pipeline for already validated arguments
pub fn execute(args: &Args, config: &Config) -> Result<RunSummary> {
    let start_time = Instant::now();

    let table = read_source_table(&args.input)?;
    let result = RecordProcessor::new(config.clone()).process(&table)?;

    let outputs = if args.dry_run {
        info!("Dry run - no files will be created");
        None
    } else {
        Some(write_outputs(
            &result,
            &args.out_dir,
            &args.logs_dir,
            &config.output,
        )?)
    };

    Ok(RunSummary {
        input: args.input.clone(),
        rows_read: table.row_count(),
        clean_rows: result.record_count(),
        category_rows: result.categories.row_count(),
        anomaly_count: result.anomalies.len(),
        profile: result.profile,
        outputs,
        processing_time: start_time.elapsed(),
    })
}

/// Set up structured logging based on CLI arguments
fn setup_logging(args: &Args) {
    use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

    let log_level = args.get_log_level();

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("catalog_prep={}", log_level)));

    let initialized = tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_target(false)
                .with_level(true)
                .with_timer(fmt::time::uptime())
                .with_writer(std::io::stderr),
        )
        .try_init();

    if initialized.is_ok() {
        debug!("Logging initialized at level: {}", log_level);
    }
}

/// Load configuration using layered approach (defaults -> file -> args)
pub fn load_configuration(args: &Args) -> Result<Config> {
    match &args.config_file {
        Some(path) => info!("Using config file: {}", path.display()),
        None => info!("No config file given, using defaults"),
    }

    let mut config = Config::load(args.config_file.as_deref())?;
    apply_cli_overrides(&mut config, args);
    config.validate()?;

    Ok(config)
}

/// Apply CLI argument overrides to configuration
fn apply_cli_overrides(config: &mut Config, args: &Args) {
    if let Some(max_minutes) = args.max_minutes {
        config.duration.max_minutes = max_minutes;
    }
    if let Some(max_seasons) = args.max_seasons {
        config.duration.max_seasons = max_seasons;
    }
    if let Some(min_year) = args.min_year {
        config.added_year.min_year = min_year;
    }
}

/// Print the final report
fn generate_final_report(format: OutputFormat, summary: &RunSummary) -> Result<()> {
    match format {
        OutputFormat::Human => {
            generate_human_report(summary);
            Ok(())
        }
        OutputFormat::Json => generate_json_report(summary),
    }
}

/// Generate human-readable report
fn generate_human_report(summary: &RunSummary) {
    let profile = &summary.profile;
    let title = if summary.is_dry_run() {
        "Catalog preparation dry run complete"
    } else {
        "Catalog preparation complete"
    };

    println!("\n{}", title.green().bold());
    println!("{}", "=".repeat(title.len()));
    println!("Input: {}", summary.input.display());
    println!(
        "Rows: {} read, {} clean, {} category rows",
        summary.rows_read, summary.clean_rows, summary.category_rows
    );
    println!(
        "Identifiers: {} unique, {} duplicated",
        profile.unique_show_id, profile.duplicate_show_ids
    );

    let years = match (profile.added_year_min, profile.added_year_max) {
        (Some(min), Some(max)) => format!("{min}-{max}"),
        _ => "n/a".to_string(),
    };
    println!("Added years: {}", years);

    println!("Types:");
    for (content_type, count) in &profile.type_counts {
        println!("   {}: {}", content_type, count);
    }

    let missing: Vec<String> = profile
        .null_counts
        .iter()
        .filter(|(_, count)| **count > 0)
        .map(|(column, count)| format!("{column}={count}"))
        .collect();
    if !missing.is_empty() {
        println!("Missing values: {}", missing.join(", "));
    }

    if summary.anomaly_count > 0 {
        println!(
            "{}",
            format!("Anomalies coerced to missing: {}", summary.anomaly_count).yellow()
        );
    }
    for warning in &profile.warnings {
        println!("{} {}", "warning:".yellow().bold(), warning);
    }

    match &summary.outputs {
        Some(paths) => {
            println!("\nOutput files:");
            for path in paths.written() {
                println!("   {}", path.display().to_string().cyan());
            }
        }
        None => println!("\n{}", "No files written (dry run)".dimmed()),
    }

    println!(
        "Processing time: {:.2}s\n",
        summary.processing_time.as_secs_f64()
    );
}

/// Generate JSON report for machine consumption
fn generate_json_report(summary: &RunSummary) -> Result<()> {
    let json = serde_json::to_string_pretty(&summary.to_json())
        .map_err(|e| Error::serialization("Failed to serialize run report", e))?;
    println!("{}", json);
    Ok(())
}
