//! Category explosion into a long-form fact table
//!
//! One output row per (record, category token) pair. Record order is kept,
//! and within a record the tokens keep their order in the field.

use super::layout::CleanLayout;
use crate::app::models::{CategoryColumn, CategoryRow, CategoryTable, TitleRecord};
use crate::app::services::field_parsers::split_list;
use crate::constants::{CATEGORY_PROJECTION_HEAD, CATEGORY_PROJECTION_TAIL, ID_COLUMN};
use crate::{Error, Result};
use tracing::debug;

/// Build the category table columns for `layout`.
///
/// Carried columns missing from the clean layout are left out.
pub fn category_columns(layout: &CleanLayout, value_column: &str) -> Result<Vec<CategoryColumn>> {
    let collides = CATEGORY_PROJECTION_HEAD
        .iter()
        .chain(CATEGORY_PROJECTION_TAIL)
        .any(|name| *name == value_column);
    if collides {
        return Err(Error::configuration(format!(
            "Category value column '{value_column}' collides with a carried column"
        )));
    }

    let mut columns = Vec::new();
    let mut slot = 0;
    let mut carry = |columns: &mut Vec<CategoryColumn>, name: &str| {
        if name == ID_COLUMN {
            columns.push(CategoryColumn::Id);
        } else if layout.has_column(name) {
            columns.push(CategoryColumn::Carried {
                name: name.to_string(),
                slot,
            });
            slot += 1;
        }
    };

    for name in CATEGORY_PROJECTION_HEAD {
        carry(&mut columns, name);
    }
    columns.push(CategoryColumn::Value(value_column.to_string()));
    for name in CATEGORY_PROJECTION_TAIL {
        carry(&mut columns, name);
    }

    Ok(columns)
}

/// Explode the comma-separated `column` of every record.
///
/// Records whose value is absent or holds no non-empty token contribute no
/// rows. Fails when `column` is not part of the clean layout.
pub fn explode_column(
    records: &[TitleRecord],
    layout: &CleanLayout,
    column: &str,
    value_column: &str,
) -> Result<CategoryTable> {
    if !layout.has_column(column) {
        return Err(Error::configuration(format!(
            "Category column '{column}' is not in the clean table (available: {})",
            layout.header().join(", ")
        )));
    }

    let columns = category_columns(layout, value_column)?;
    let carried: Vec<&str> = columns
        .iter()
        .filter_map(|c| match c {
            CategoryColumn::Carried { name, .. } => Some(name.as_str()),
            _ => None,
        })
        .collect();

    let mut rows = Vec::new();
    for record in records {
        let Some(list) = layout.value(record, column) else {
            continue;
        };

        let projection: Vec<Option<String>> = carried
            .iter()
            .map(|name| layout.value(record, name))
            .collect();

        for token in split_list(&list) {
            rows.push(CategoryRow {
                show_id: record.show_id.clone(),
                value: token.to_string(),
                carried: projection.clone(),
            });
        }
    }

    debug!(
        "Exploded '{}' of {} records into {} rows",
        column,
        records.len(),
        rows.len()
    );

    Ok(CategoryTable { columns, rows })
}
