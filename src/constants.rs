//! Application constants for catalog preparation
//!
//! Column names of the fixed catalog schema, default thresholds and
//! output file names used throughout the pipeline.

// =============================================================================
// Source Columns
// =============================================================================

/// Unique row identifier column; its absence aborts the run
pub const ID_COLUMN: &str = "show_id";

/// Text tokens treated as "no date" by the date parser (compared lowercase)
pub const NULL_DATE_TOKENS: &[&str] = &["", "nan", "none", "null"];

// =============================================================================
// Category Table
// =============================================================================

/// Columns projected onto every category row, in output order.
/// The category value column is inserted after `type`.
pub const CATEGORY_PROJECTION_HEAD: &[&str] = &["show_id", "title", "type"];
pub const CATEGORY_PROJECTION_TAIL: &[&str] = &[
    "primary_country",
    "added_year",
    "release_year",
    "rating",
    "duration_num",
    "duration_type",
];

/// Column alias holding the normalized category list
pub const DEFAULT_CATEGORY_COLUMN: &str = "genres";

/// Name of the exploded value column in the category table
pub const DEFAULT_CATEGORY_VALUE_COLUMN: &str = "genre";

// =============================================================================
// Sanity Thresholds
// =============================================================================

/// Longest plausible runtime in minutes
pub const DEFAULT_MAX_MINUTES: u64 = 600;

/// Largest plausible number of seasons
pub const DEFAULT_MAX_SEASONS: u64 = 100;

/// Earliest plausible year a title was added to the catalog
pub const DEFAULT_MIN_ADDED_YEAR: i32 = 1920;

/// Latest plausible added year, relative to the current calendar year
pub const DEFAULT_ADDED_YEARS_AHEAD: i32 = 1;

/// Key used in `type_counts` for records with no type
pub const MISSING_TYPE_KEY: &str = "<missing>";

// =============================================================================
// Output Files
// =============================================================================

pub const DEFAULT_OUTPUT_DIR: &str = "data/processed";
pub const DEFAULT_LOGS_DIR: &str = "logs";
pub const CLEAN_FILE_NAME: &str = "titles_clean.csv";
pub const CATEGORY_FILE_NAME: &str = "titles_genres_exploded.csv";
pub const PROFILE_FILE_NAME: &str = "data_profile.json";
pub const ANOMALY_FILE_NAME: &str = "parse_errors.csv";

/// Header of the anomaly log
pub const ANOMALY_LOG_HEADER: &[&str] = &["show_id", "field", "value"];
