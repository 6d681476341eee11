//! Column layout of the clean table
//!
//! Preferred columns come first, in fixed order; source-only columns are
//! skipped when the file lacks them while derived columns are always
//! present. Every remaining source column follows in its original order.

use super::column_mapping::ColumnMapping;
use crate::app::models::{CleanField, SourceColumn, TitleRecord};

/// One column of the clean table
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LayoutColumn {
    /// A column of the preferred order
    Field(CleanField),
    /// A source column outside the preferred order, passed through
    Extra {
        name: String,
        /// Index in the source row
        source_index: usize,
        /// Index in `TitleRecord::extras`
        slot: usize,
        /// Whether the value gets whitespace normalization
        normalize: bool,
    },
}

impl LayoutColumn {
    pub fn name(&self) -> &str {
        match self {
            LayoutColumn::Field(field) => field.name(),
            LayoutColumn::Extra { name, .. } => name,
        }
    }
}

/// Ordered columns of the clean table
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CleanLayout {
    columns: Vec<LayoutColumn>,
}

impl CleanLayout {
    pub fn from_mapping(mapping: &ColumnMapping) -> Self {
        let mut columns: Vec<LayoutColumn> = CleanField::ALL
            .into_iter()
            .filter(|field| field.source_column().is_none_or(|c| mapping.has(c)))
            .map(LayoutColumn::Field)
            .collect();

        let mut slot = 0;
        for (source_index, name) in mapping.headers.iter().enumerate() {
            let is_preferred = CleanField::from_name(name).is_some();
            let is_duplicate = mapping.get_index(name) != Some(source_index);
            if is_preferred || is_duplicate {
                continue;
            }

            columns.push(LayoutColumn::Extra {
                name: name.clone(),
                source_index,
                slot,
                normalize: SourceColumn::from_name(name).is_some_and(|c| c.is_normalized_text()),
            });
            slot += 1;
        }

        Self { columns }
    }

    pub fn columns(&self) -> &[LayoutColumn] {
        &self.columns
    }

    /// Header names in output order
    pub fn header(&self) -> Vec<&str> {
        self.columns.iter().map(LayoutColumn::name).collect()
    }

    pub fn has_column(&self, name: &str) -> bool {
        self.find(name).is_some()
    }

    pub fn find(&self, name: &str) -> Option<&LayoutColumn> {
        self.columns.iter().find(|column| column.name() == name)
    }

    /// Pass-through columns in slot order
    pub fn extra_columns(&self) -> impl Iterator<Item = &LayoutColumn> {
        self.columns
            .iter()
            .filter(|column| matches!(column, LayoutColumn::Extra { .. }))
    }

    /// Value of `column` on `record`, `None` when absent
    pub fn cell(&self, record: &TitleRecord, column: &LayoutColumn) -> Option<String> {
        match column {
            LayoutColumn::Field(field) => record.field_value(*field),
            LayoutColumn::Extra { slot, .. } => record.extras.get(*slot).cloned().flatten(),
        }
    }

    /// Value of the column called `name`; `None` when the column is unknown
    /// or the value absent
    pub fn value(&self, record: &TitleRecord, name: &str) -> Option<String> {
        self.find(name).and_then(|column| self.cell(record, column))
    }

    /// Render `record` into output order
    pub fn render(&self, record: &TitleRecord) -> Vec<Option<String>> {
        self.columns
            .iter()
            .map(|column| self.cell(record, column))
            .collect()
    }
}
