//! Command-line argument definitions for the catalog preparation tool
//!
//! This module defines the CLI interface using the clap derive API.

use crate::constants::{DEFAULT_LOGS_DIR, DEFAULT_OUTPUT_DIR};
use crate::{Error, Result};
use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// CLI arguments for the catalog preparation pipeline
///
/// Cleans a titles catalog export and writes an analysis-ready table, a
/// long-form category table, a data profile and an anomaly log.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "catalog-prep",
    version,
    about = "Clean a titles catalog export into analysis-ready tables",
    long_about = "Reads a titles catalog export (CSV), normalizes text fields, parses dates and \
                  durations, coerces implausible values to missing while logging them, profiles \
                  the result and explodes the genre list into a long-form fact table."
)]
pub struct Args {
    /// Path to the raw catalog CSV
    #[arg(
        short = 'i',
        long = "input",
        value_name = "FILE",
        help = "Path to the raw catalog CSV"
    )]
    pub input: PathBuf,

    /// Directory for the clean table, category table and profile
    ///
    /// Created if it doesn't exist.
    #[arg(
        short = 'o',
        long = "out-dir",
        value_name = "DIR",
        default_value = DEFAULT_OUTPUT_DIR,
        help = "Directory for the processed outputs"
    )]
    pub out_dir: PathBuf,

    /// Directory for the anomaly log
    ///
    /// Only created when at least one value was coerced.
    #[arg(
        long = "logs-dir",
        value_name = "DIR",
        default_value = DEFAULT_LOGS_DIR,
        help = "Directory for the anomaly log"
    )]
    pub logs_dir: PathBuf,

    /// Path to configuration file
    ///
    /// TOML file overriding thresholds, the exploded column and output file
    /// names. Missing keys keep their defaults.
    #[arg(
        short = 'c',
        long = "config",
        value_name = "FILE",
        help = "Path to configuration file (TOML format)"
    )]
    pub config_file: Option<PathBuf>,

    /// Largest plausible runtime in minutes
    #[arg(
        long = "max-minutes",
        value_name = "N",
        help = "Largest plausible runtime in minutes"
    )]
    pub max_minutes: Option<u64>,

    /// Largest plausible number of seasons
    #[arg(
        long = "max-seasons",
        value_name = "N",
        help = "Largest plausible number of seasons"
    )]
    pub max_seasons: Option<u64>,

    /// Earliest plausible year a title was added
    #[arg(
        long = "min-year",
        value_name = "YEAR",
        help = "Earliest plausible year a title was added"
    )]
    pub min_year: Option<i32>,

    /// Run the whole pipeline without writing anything
    #[arg(
        long = "dry-run",
        help = "Process the input and report without creating output files"
    )]
    pub dry_run: bool,

    /// Logging verbosity level
    #[arg(
        short = 'v',
        long = "verbose",
        action = clap::ArgAction::Count,
        help = "Increase logging verbosity (-v: info, -vv: debug, -vvv: trace)"
    )]
    pub verbose: u8,

    /// Suppress output (quiet mode)
    ///
    /// Only show errors. Overrides verbose settings.
    #[arg(
        short = 'q',
        long = "quiet",
        help = "Suppress output except errors",
        conflicts_with = "verbose"
    )]
    pub quiet: bool,

    /// Output format for the run report
    #[arg(
        long = "output-format",
        value_enum,
        default_value = "human",
        help = "Output format for results"
    )]
    pub output_format: OutputFormat,
}

/// Output format options for the run report
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable output
    Human,
    /// JSON format for scripting
    Json,
}

impl Args {
    /// Validate the arguments for consistency
    pub fn validate(&self) -> Result<()> {
        if !self.input.exists() {
            return Err(Error::configuration(format!(
                "Input file does not exist: {}",
                self.input.display()
            )));
        }

        if !self.input.is_file() {
            return Err(Error::configuration(format!(
                "Input path is not a file: {}",
                self.input.display()
            )));
        }

        if let Some(config_file) = &self.config_file
            && !config_file.exists()
        {
            return Err(Error::configuration(format!(
                "Config file does not exist: {}",
                config_file.display()
            )));
        }

        if self.max_minutes == Some(0) {
            return Err(Error::configuration("--max-minutes must be greater than 0"));
        }

        if self.max_seasons == Some(0) {
            return Err(Error::configuration("--max-seasons must be greater than 0"));
        }

        Ok(())
    }

    /// Determine the appropriate log level based on verbosity flags
    pub fn get_log_level(&self) -> &'static str {
        if self.quiet {
            "error"
        } else {
            match self.verbose {
                0 => "warn",
                1 => "info",
                2 => "debug",
                _ => "trace",
            }
        }
    }
}
