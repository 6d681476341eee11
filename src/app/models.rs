//! Data models for catalog preparation
//!
//! This module contains the data structures for the raw source table, the
//! normalized title records derived from it, the category fact table, the
//! anomaly log and the data profile. Every structure is produced by one
//! pipeline stage and never mutated by a later one.

use chrono::{Datelike, NaiveDate};
use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt;

// =============================================================================
// Source Schema
// =============================================================================

/// Known columns of the catalog export.
///
/// Any of them may be missing from a given file except [`SourceColumn::ShowId`];
/// consumers look them up through `ColumnMapping::value` and state whether they
/// require or tolerate a missing column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SourceColumn {
    ShowId,
    Type,
    Title,
    Director,
    Cast,
    Country,
    DateAdded,
    ReleaseYear,
    Rating,
    Duration,
    ListedIn,
    Description,
}

impl SourceColumn {
    pub const ALL: [SourceColumn; 12] = [
        SourceColumn::ShowId,
        SourceColumn::Type,
        SourceColumn::Title,
        SourceColumn::Director,
        SourceColumn::Cast,
        SourceColumn::Country,
        SourceColumn::DateAdded,
        SourceColumn::ReleaseYear,
        SourceColumn::Rating,
        SourceColumn::Duration,
        SourceColumn::ListedIn,
        SourceColumn::Description,
    ];

    /// Snake-cased header name
    pub fn name(&self) -> &'static str {
        match self {
            SourceColumn::ShowId => "show_id",
            SourceColumn::Type => "type",
            SourceColumn::Title => "title",
            SourceColumn::Director => "director",
            SourceColumn::Cast => "cast",
            SourceColumn::Country => "country",
            SourceColumn::DateAdded => "date_added",
            SourceColumn::ReleaseYear => "release_year",
            SourceColumn::Rating => "rating",
            SourceColumn::Duration => "duration",
            SourceColumn::ListedIn => "listed_in",
            SourceColumn::Description => "description",
        }
    }

    /// Look up a known column by its snake-cased header name
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|column| column.name() == name)
    }

    /// Free-text columns that get whitespace normalization
    pub fn is_normalized_text(&self) -> bool {
        matches!(
            self,
            SourceColumn::Title
                | SourceColumn::Director
                | SourceColumn::Cast
                | SourceColumn::Country
                | SourceColumn::ListedIn
                | SourceColumn::Rating
                | SourceColumn::Description
                | SourceColumn::Duration
        )
    }
}

/// Raw input table: headers as read plus every row as raw text
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SourceTable {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl SourceTable {
    pub fn new(headers: Vec<String>, rows: Vec<Vec<String>>) -> Self {
        Self { headers, rows }
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }
}

// =============================================================================
// Clean Table Columns
// =============================================================================

/// Columns of the clean table in their preferred output order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CleanField {
    ShowId,
    Title,
    TitleSlug,
    Type,
    Director,
    Cast,
    Country,
    PrimaryCountry,
    Genres,
    ReleaseYear,
    DateAdded,
    AddedYear,
    AddedMonth,
    AddedQuarter,
    Rating,
    DurationNum,
    DurationType,
    Description,
}

impl CleanField {
    pub const ALL: [CleanField; 18] = [
        CleanField::ShowId,
        CleanField::Title,
        CleanField::TitleSlug,
        CleanField::Type,
        CleanField::Director,
        CleanField::Cast,
        CleanField::Country,
        CleanField::PrimaryCountry,
        CleanField::Genres,
        CleanField::ReleaseYear,
        CleanField::DateAdded,
        CleanField::AddedYear,
        CleanField::AddedMonth,
        CleanField::AddedQuarter,
        CleanField::Rating,
        CleanField::DurationNum,
        CleanField::DurationType,
        CleanField::Description,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            CleanField::ShowId => "show_id",
            CleanField::Title => "title",
            CleanField::TitleSlug => "title_slug",
            CleanField::Type => "type",
            CleanField::Director => "director",
            CleanField::Cast => "cast",
            CleanField::Country => "country",
            CleanField::PrimaryCountry => "primary_country",
            CleanField::Genres => "genres",
            CleanField::ReleaseYear => "release_year",
            CleanField::DateAdded => "date_added",
            CleanField::AddedYear => "added_year",
            CleanField::AddedMonth => "added_month",
            CleanField::AddedQuarter => "added_quarter",
            CleanField::Rating => "rating",
            CleanField::DurationNum => "duration_num",
            CleanField::DurationType => "duration_type",
            CleanField::Description => "description",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|field| field.name() == name)
    }

    /// Source column this field is copied from, for fields that only exist
    /// when the source has them. Derived fields return `None` and are always
    /// present in the clean table.
    pub fn source_column(&self) -> Option<SourceColumn> {
        match self {
            CleanField::Title => Some(SourceColumn::Title),
            CleanField::Type => Some(SourceColumn::Type),
            CleanField::Director => Some(SourceColumn::Director),
            CleanField::Cast => Some(SourceColumn::Cast),
            CleanField::Country => Some(SourceColumn::Country),
            CleanField::Rating => Some(SourceColumn::Rating),
            CleanField::Description => Some(SourceColumn::Description),
            _ => None,
        }
    }
}

// =============================================================================
// Parsed Values
// =============================================================================

/// Unit of a parsed duration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DurationUnit {
    Minutes,
    Seasons,
}

impl DurationUnit {
    pub fn as_str(&self) -> &'static str {
        match self {
            DurationUnit::Minutes => "minutes",
            DurationUnit::Seasons => "seasons",
        }
    }
}

impl fmt::Display for DurationUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Duration after plausibility coercion
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ParsedDuration {
    /// Magnitude, absent when missing or coerced as implausible
    pub magnitude: Option<u64>,
    /// Unit, kept even when the magnitude was coerced
    pub unit: Option<DurationUnit>,
}

impl ParsedDuration {
    pub fn new(magnitude: Option<u64>, unit: Option<DurationUnit>) -> Self {
        Self { magnitude, unit }
    }

    /// Neither magnitude nor unit could be extracted
    pub fn absent() -> Self {
        Self::default()
    }
}

/// Calendar parts derived from the date a title was added
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateParts {
    pub year: i32,
    pub month: u32,
    pub quarter: u32,
}

impl DateParts {
    pub fn from_date(date: NaiveDate) -> Self {
        let month = date.month();
        Self {
            year: date.year(),
            month,
            quarter: (month - 1) / 3 + 1,
        }
    }

    /// Quarter label such as `2019Q3`
    pub fn quarter_label(&self) -> String {
        format!("{}Q{}", self.year, self.quarter)
    }
}

// =============================================================================
// Normalized Records
// =============================================================================

/// One source row after normalization, parsing and coercion
#[derive(Debug, Clone, PartialEq)]
pub struct TitleRecord {
    pub show_id: String,
    pub title: Option<String>,
    pub title_slug: String,
    pub content_type: Option<String>,
    pub director: Option<String>,
    pub cast: Option<String>,
    pub country: Option<String>,
    pub primary_country: Option<String>,
    /// Normalized `listed_in` value
    pub genres: Option<String>,
    pub release_year: Option<i32>,
    /// Parsed date, absent when unparseable or outside the plausible window
    pub date_added: Option<NaiveDate>,
    pub rating: Option<String>,
    pub duration: ParsedDuration,
    pub description: Option<String>,
    /// Normalized duration text as read, kept for anomaly detection
    pub duration_raw: Option<String>,
    /// Normalized date text as read, kept for anomaly detection
    pub date_added_raw: Option<String>,
    /// Values of source columns outside the preferred layout, in layout order
    pub extras: Vec<Option<String>>,
}

impl TitleRecord {
    /// Calendar parts of `date_added`; absent with it
    pub fn added_parts(&self) -> Option<DateParts> {
        self.date_added.map(DateParts::from_date)
    }

    pub fn added_year(&self) -> Option<i32> {
        self.added_parts().map(|parts| parts.year)
    }

    /// Rendered value of a clean-table field, `None` when absent
    pub fn field_value(&self, field: CleanField) -> Option<String> {
        match field {
            CleanField::ShowId => Some(self.show_id.clone()),
            CleanField::Title => self.title.clone(),
            CleanField::TitleSlug => Some(self.title_slug.clone()).filter(|s| !s.is_empty()),
            CleanField::Type => self.content_type.clone(),
            CleanField::Director => self.director.clone(),
            CleanField::Cast => self.cast.clone(),
            CleanField::Country => self.country.clone(),
            CleanField::PrimaryCountry => self.primary_country.clone(),
            CleanField::Genres => self.genres.clone(),
            CleanField::ReleaseYear => self.release_year.map(|year| year.to_string()),
            CleanField::DateAdded => self
                .date_added
                .map(|date| date.format("%Y-%m-%d").to_string()),
            CleanField::AddedYear => self.added_parts().map(|p| p.year.to_string()),
            CleanField::AddedMonth => self.added_parts().map(|p| p.month.to_string()),
            CleanField::AddedQuarter => self.added_parts().map(|p| p.quarter_label()),
            CleanField::Rating => self.rating.clone(),
            CleanField::DurationNum => self.duration.magnitude.map(|m| m.to_string()),
            CleanField::DurationType => self.duration.unit.map(|u| u.as_str().to_string()),
            CleanField::Description => self.description.clone(),
        }
    }
}

// =============================================================================
// Category Fact Table
// =============================================================================

/// Column of the category table
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CategoryColumn {
    /// The record identifier
    Id,
    /// The single exploded value
    Value(String),
    /// A clean-table column carried forward from the record
    Carried { name: String, slot: usize },
}

impl CategoryColumn {
    pub fn name(&self) -> &str {
        match self {
            CategoryColumn::Id => SourceColumn::ShowId.name(),
            CategoryColumn::Value(name) => name,
            CategoryColumn::Carried { name, .. } => name,
        }
    }
}

/// One (identifier, value) pair with the carried projection
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryRow {
    pub show_id: String,
    pub value: String,
    /// Carried values, indexed by `CategoryColumn::Carried::slot`
    pub carried: Vec<Option<String>>,
}

/// Output of category explosion
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CategoryTable {
    pub columns: Vec<CategoryColumn>,
    pub rows: Vec<CategoryRow>,
}

impl CategoryTable {
    /// Header names in output order
    pub fn header(&self) -> Vec<&str> {
        self.columns.iter().map(CategoryColumn::name).collect()
    }

    pub fn has_column(&self, name: &str) -> bool {
        self.columns.iter().any(|column| column.name() == name)
    }

    /// Value of `column` on `row`, `None` when absent or unknown
    pub fn get<'a>(&self, row: &'a CategoryRow, column: &str) -> Option<&'a str> {
        let column = self.columns.iter().find(|c| c.name() == column)?;
        Self::cell(row, column)
    }

    /// Render `row` into output order
    pub fn render<'a>(&self, row: &'a CategoryRow) -> Vec<Option<&'a str>> {
        self.columns
            .iter()
            .map(|column| Self::cell(row, column))
            .collect()
    }

    fn cell<'a>(row: &'a CategoryRow, column: &CategoryColumn) -> Option<&'a str> {
        match column {
            CategoryColumn::Id => Some(row.show_id.as_str()),
            CategoryColumn::Value(_) => Some(row.value.as_str()),
            CategoryColumn::Carried { slot, .. } => {
                row.carried.get(*slot).and_then(|value| value.as_deref())
            }
        }
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }
}

// =============================================================================
// Anomalies
// =============================================================================

/// Field whose value was coerced to absent by a sanity check
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum AnomalyField {
    #[serde(rename = "duration_num")]
    DurationNum,
    #[serde(rename = "added_year")]
    AddedYear,
}

impl AnomalyField {
    pub fn as_str(&self) -> &'static str {
        match self {
            AnomalyField::DurationNum => "duration_num",
            AnomalyField::AddedYear => "added_year",
        }
    }
}

impl fmt::Display for AnomalyField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One logged coercion: (identifier, field, offending value)
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AnomalyEntry {
    pub show_id: String,
    pub field: AnomalyField,
    pub value: String,
}

impl AnomalyEntry {
    pub fn new(show_id: impl Into<String>, field: AnomalyField, value: impl Into<String>) -> Self {
        Self {
            show_id: show_id.into(),
            field,
            value: value.into(),
        }
    }
}

// =============================================================================
// Data Profile
// =============================================================================

/// Dataset-level quality summary, computed once per run
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct DataProfile {
    /// Number of rows in the clean table
    pub raw_rows: usize,
    /// Number of distinct identifiers
    pub unique_show_id: usize,
    /// Rows sharing an identifier with an earlier row
    pub duplicate_show_ids: usize,
    /// Rows per `type`, absent types under `MISSING_TYPE_KEY`
    pub type_counts: BTreeMap<String, usize>,
    /// Absent values per clean-table column
    pub null_counts: BTreeMap<String, usize>,
    pub added_year_min: Option<i32>,
    pub added_year_max: Option<i32>,
    /// Values coerced to absent during parsing
    pub anomaly_count: usize,
    /// Advisory findings; never block the run
    pub warnings: Vec<String>,
}

impl DataProfile {
    pub fn has_duplicate_ids(&self) -> bool {
        self.unique_show_id != self.raw_rows
    }
}
