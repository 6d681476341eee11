//! Column mapping over the fixed catalog schema
//!
//! Headers are snake-cased and indexed once. Every consumer then asks for a
//! [`SourceColumn`] explicitly and gets `None` when the file lacks it; only
//! the identifier column is required.

use crate::app::models::SourceColumn;
use crate::app::services::field_parsers::normalize_header;
use crate::{Error, Result};
use std::collections::HashMap;

/// Header analysis for one input table
#[derive(Debug, Clone, PartialEq)]
pub struct ColumnMapping {
    /// Snake-cased headers in source order
    pub headers: Vec<String>,

    /// Column name to index mapping (first occurrence wins)
    pub name_to_index: HashMap<String, usize>,
}

impl ColumnMapping {
    /// Normalize and index the headers, failing when the identifier column
    /// is missing
    pub fn analyze(raw_headers: &[String]) -> Result<Self> {
        let headers: Vec<String> = raw_headers.iter().map(|h| normalize_header(h)).collect();

        let mut name_to_index = HashMap::new();
        for (index, header) in headers.iter().enumerate() {
            name_to_index.entry(header.clone()).or_insert(index);
        }

        let mapping = Self {
            headers,
            name_to_index,
        };

        if !mapping.has(SourceColumn::ShowId) {
            return Err(Error::missing_id_column(
                SourceColumn::ShowId.name(),
                &mapping.headers,
            ));
        }

        Ok(mapping)
    }

    /// Get the index for a given column name
    pub fn get_index(&self, column_name: &str) -> Option<usize> {
        self.name_to_index.get(column_name).copied()
    }

    /// Check if a column exists in the mapping
    pub fn has_column(&self, column_name: &str) -> bool {
        self.name_to_index.contains_key(column_name)
    }

    /// Check if a known column exists in the mapping
    pub fn has(&self, column: SourceColumn) -> bool {
        self.has_column(column.name())
    }

    /// Raw value of a known column on `row`; `None` when the column is not
    /// in the file or the row is short
    pub fn value<'a>(&self, row: &'a [String], column: SourceColumn) -> Option<&'a str> {
        self.get_index(column.name())
            .and_then(|index| row.get(index))
            .map(String::as_str)
    }

    /// Get statistics about the mapping: (total, known, unknown) columns
    pub fn stats(&self) -> (usize, usize, usize) {
        let known = self
            .headers
            .iter()
            .filter(|h| SourceColumn::from_name(h).is_some())
            .count();
        (self.headers.len(), known, self.headers.len() - known)
    }
}
