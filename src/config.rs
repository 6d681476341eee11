//! Configuration management and validation.
//!
//! Configuration is layered: built-in defaults, then an optional TOML file,
//! then command-line overrides. The sanity thresholds used to decide when a
//! parsed value is implausible live here so they can be tuned per dataset.

use crate::app::models::DurationUnit;
use crate::constants::{
    ANOMALY_FILE_NAME, CATEGORY_FILE_NAME, CLEAN_FILE_NAME, DEFAULT_ADDED_YEARS_AHEAD,
    DEFAULT_CATEGORY_COLUMN, DEFAULT_CATEGORY_VALUE_COLUMN, DEFAULT_MAX_MINUTES,
    DEFAULT_MAX_SEASONS, DEFAULT_MIN_ADDED_YEAR, PROFILE_FILE_NAME,
};
use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::debug;

/// Plausible upper bounds for parsed durations. Lower bounds are fixed at
/// zero (exclusive): a runtime or season count of zero is never plausible.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DurationLimits {
    /// Largest accepted minutes value (inclusive)
    pub max_minutes: u64,
    /// Largest accepted seasons value (inclusive)
    pub max_seasons: u64,
}

impl Default for DurationLimits {
    fn default() -> Self {
        Self {
            max_minutes: DEFAULT_MAX_MINUTES,
            max_seasons: DEFAULT_MAX_SEASONS,
        }
    }
}

impl DurationLimits {
    /// Whether `magnitude` is plausible for `unit`.
    ///
    /// This is the single anomaly predicate for durations; both the parser
    /// and the pipeline's anomaly pass go through it. A magnitude without a
    /// recognised unit is never judged.
    pub fn accepts(&self, unit: Option<DurationUnit>, magnitude: u64) -> bool {
        match unit {
            Some(DurationUnit::Minutes) => magnitude > 0 && magnitude <= self.max_minutes,
            Some(DurationUnit::Seasons) => magnitude > 0 && magnitude <= self.max_seasons,
            None => true,
        }
    }
}

/// Plausible window for the year a title was added, as configured
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct YearWindowConfig {
    /// Earliest accepted year (inclusive)
    pub min_year: i32,
    /// Latest accepted year as an offset from the current calendar year
    pub years_ahead: i32,
}

impl Default for YearWindowConfig {
    fn default() -> Self {
        Self {
            min_year: DEFAULT_MIN_ADDED_YEAR,
            years_ahead: DEFAULT_ADDED_YEARS_AHEAD,
        }
    }
}

impl YearWindowConfig {
    /// Resolve the window against the calendar year the run happens in
    pub fn resolve(&self, current_year: i32) -> YearWindow {
        YearWindow {
            min_year: self.min_year,
            max_year: current_year + self.years_ahead,
        }
    }
}

/// Resolved inclusive year window
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct YearWindow {
    pub min_year: i32,
    pub max_year: i32,
}

impl YearWindow {
    /// Whether `year` lies inside the window
    pub fn contains(&self, year: i32) -> bool {
        (self.min_year..=self.max_year).contains(&year)
    }
}

/// Which column is exploded into the category fact table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExpansionConfig {
    /// Clean-table column holding the comma-separated list
    pub category_column: String,
    /// Name of the single-value column in the category table
    pub value_column: String,
}

impl Default for ExpansionConfig {
    fn default() -> Self {
        Self {
            category_column: DEFAULT_CATEGORY_COLUMN.to_string(),
            value_column: DEFAULT_CATEGORY_VALUE_COLUMN.to_string(),
        }
    }
}

/// Output file names
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub clean_file: String,
    pub category_file: String,
    pub profile_file: String,
    pub anomaly_file: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            clean_file: CLEAN_FILE_NAME.to_string(),
            category_file: CATEGORY_FILE_NAME.to_string(),
            profile_file: PROFILE_FILE_NAME.to_string(),
            anomaly_file: ANOMALY_FILE_NAME.to_string(),
        }
    }
}

/// Global configuration for catalog preparation
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Duration sanity thresholds
    pub duration: DurationLimits,

    /// Plausible added-year window
    pub added_year: YearWindowConfig,

    /// Category explosion settings
    pub expansion: ExpansionConfig,

    /// Output file names
    pub output: OutputConfig,
}

impl Config {
    /// Load configuration from a TOML file, falling back to defaults when no
    /// file is given
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let Some(path) = path else {
            debug!("No configuration file given, using defaults");
            return Ok(Self::default());
        };

        let content = std::fs::read_to_string(path).map_err(|e| {
            Error::io(
                format!("Failed to read configuration file {}", path.display()),
                e,
            )
        })?;
        let config = Self::from_toml_str(&content).map_err(|e| Error::config_file(path, e))?;
        debug!("Loaded configuration from {}", path.display());

        config.validate()?;
        Ok(config)
    }

    /// Parse configuration from TOML text; missing keys keep their defaults
    pub fn from_toml_str(content: &str) -> std::result::Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    /// Set the largest accepted minutes value
    pub fn with_max_minutes(mut self, max_minutes: u64) -> Self {
        self.duration.max_minutes = max_minutes;
        self
    }

    /// Set the largest accepted seasons value
    pub fn with_max_seasons(mut self, max_seasons: u64) -> Self {
        self.duration.max_seasons = max_seasons;
        self
    }

    /// Set the earliest accepted added year
    pub fn with_min_added_year(mut self, min_year: i32) -> Self {
        self.added_year.min_year = min_year;
        self
    }

    /// Validate configuration values for consistency
    pub fn validate(&self) -> Result<()> {
        if self.duration.max_minutes == 0 {
            return Err(Error::configuration(
                "duration.max_minutes must be greater than 0",
            ));
        }

        if self.duration.max_seasons == 0 {
            return Err(Error::configuration(
                "duration.max_seasons must be greater than 0",
            ));
        }

        if self.added_year.years_ahead < 0 {
            return Err(Error::configuration(
                "added_year.years_ahead cannot be negative",
            ));
        }

        if self.expansion.category_column.trim().is_empty()
            || self.expansion.value_column.trim().is_empty()
        {
            return Err(Error::configuration(
                "expansion column names cannot be empty",
            ));
        }

        let output = &self.output;
        for name in [
            &output.clean_file,
            &output.category_file,
            &output.profile_file,
            &output.anomaly_file,
        ] {
            if name.trim().is_empty() {
                return Err(Error::configuration("output file names cannot be empty"));
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_duration_limits_boundaries() {
        let limits = DurationLimits::default();

        assert!(limits.accepts(Some(DurationUnit::Minutes), 1));
        assert!(limits.accepts(Some(DurationUnit::Minutes), 600));
        assert!(!limits.accepts(Some(DurationUnit::Minutes), 601));
        assert!(!limits.accepts(Some(DurationUnit::Minutes), 0));

        assert!(limits.accepts(Some(DurationUnit::Seasons), 100));
        assert!(!limits.accepts(Some(DurationUnit::Seasons), 101));
        assert!(!limits.accepts(Some(DurationUnit::Seasons), 0));

        // Unknown units are passed through unjudged
        assert!(limits.accepts(None, 0));
        assert!(limits.accepts(None, 100_000));
    }

    #[test]
    fn test_year_window_resolution() {
        let window = YearWindowConfig::default().resolve(2024);

        assert_eq!(window.min_year, 1920);
        assert_eq!(window.max_year, 2025);
        assert!(window.contains(1920));
        assert!(window.contains(2025));
        assert!(!window.contains(1919));
        assert!(!window.contains(2026));
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config = Config::from_toml_str(
            r#"
            [duration]
            max_minutes = 300
            "#,
        )
        .unwrap();

        assert_eq!(config.duration.max_minutes, 300);
        assert_eq!(config.duration.max_seasons, DEFAULT_MAX_SEASONS);
        assert_eq!(config.expansion, ExpansionConfig::default());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_load_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(
            file,
            "[added_year]\nmin_year = 1990\n\n[expansion]\ncategory_column = \"country\"\nvalue_column = \"country_name\""
        )
        .unwrap();

        let config = Config::load(Some(file.path())).unwrap();
        assert_eq!(config.added_year.min_year, 1990);
        assert_eq!(config.expansion.category_column, "country");
        assert_eq!(config.expansion.value_column, "country_name");
    }

    #[test]
    fn test_load_rejects_malformed_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "[duration\nmax_minutes = ").unwrap();

        let error = Config::load(Some(file.path())).unwrap_err();
        assert!(matches!(error, Error::ConfigFile { .. }));
    }

    #[test]
    fn test_validation() {
        assert!(Config::default().validate().is_ok());
        assert!(Config::default().with_max_minutes(0).validate().is_err());
        assert!(Config::default().with_max_seasons(0).validate().is_err());

        let mut config = Config::default();
        config.expansion.value_column = "  ".to_string();
        assert!(config.validate().is_err());

        let mut config = Config::default();
        config.added_year.years_ahead = -1;
        assert!(config.validate().is_err());
    }
}
