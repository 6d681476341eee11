//! Row normalization: raw source row into a [`TitleRecord`]

use super::column_mapping::ColumnMapping;
use super::layout::{CleanLayout, LayoutColumn};
use crate::app::models::{SourceColumn, TitleRecord};
use crate::app::services::field_parsers::{
    normalize_text, parse_date_added, parse_duration, parse_release_year, primary_value, slugify,
};
use crate::config::{DurationLimits, YearWindow};
use chrono::Datelike;

/// Everything row normalization needs besides the row itself
#[derive(Debug, Clone, Copy)]
pub struct NormalizeContext<'a> {
    pub mapping: &'a ColumnMapping,
    pub layout: &'a CleanLayout,
    pub duration_limits: DurationLimits,
    pub year_window: YearWindow,
}

impl NormalizeContext<'_> {
    /// Value of a known column after the column's text treatment
    fn text(&self, row: &[String], column: SourceColumn) -> Option<String> {
        let raw = self.mapping.value(row, column);
        if column.is_normalized_text() {
            normalize_text(raw)
        } else {
            raw.filter(|value| !value.is_empty()).map(str::to_string)
        }
    }
}

/// Normalize one source row.
///
/// Never fails: unparseable and implausible values end up absent. The
/// identifier is copied verbatim so the record maps back to its source row.
pub fn normalize_record(row: &[String], ctx: &NormalizeContext<'_>) -> TitleRecord {
    let show_id = ctx
        .mapping
        .value(row, SourceColumn::ShowId)
        .unwrap_or_default()
        .to_string();

    let title = ctx.text(row, SourceColumn::Title);
    let country = ctx.text(row, SourceColumn::Country);

    let date_added_raw = normalize_text(ctx.mapping.value(row, SourceColumn::DateAdded));
    let date_added = parse_date_added(date_added_raw.as_deref())
        .filter(|date| ctx.year_window.contains(date.year()));

    let duration_raw = ctx.text(row, SourceColumn::Duration);
    let duration = parse_duration(duration_raw.as_deref(), &ctx.duration_limits);

    let extras = ctx
        .layout
        .extra_columns()
        .map(|column| match column {
            LayoutColumn::Extra {
                source_index,
                normalize,
                ..
            } => {
                let raw = row.get(*source_index).map(String::as_str);
                if *normalize {
                    normalize_text(raw)
                } else {
                    raw.filter(|value| !value.is_empty()).map(str::to_string)
                }
            }
            LayoutColumn::Field(_) => None,
        })
        .collect();

    TitleRecord {
        show_id,
        title_slug: slugify(title.as_deref()),
        title,
        content_type: ctx.text(row, SourceColumn::Type),
        director: ctx.text(row, SourceColumn::Director),
        cast: ctx.text(row, SourceColumn::Cast),
        primary_country: primary_value(country.as_deref()),
        country,
        genres: ctx.text(row, SourceColumn::ListedIn),
        release_year: parse_release_year(ctx.mapping.value(row, SourceColumn::ReleaseYear)),
        date_added,
        rating: ctx.text(row, SourceColumn::Rating),
        duration,
        description: ctx.text(row, SourceColumn::Description),
        duration_raw,
        date_added_raw,
        extras,
    }
}
