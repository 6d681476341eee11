//! Tests for column mapping and the clean table layout

use super::*;
use crate::app::models::CleanField;
use crate::app::services::record_processor::{ColumnMapping, CleanLayout, LayoutColumn};

fn headers(names: &[&str]) -> Vec<String> {
    names.iter().map(|name| name.to_string()).collect()
}

#[test]
fn test_mapping_requires_id_column() {
    assert!(ColumnMapping::analyze(&headers(&["title", "type"])).is_err());
    assert!(ColumnMapping::analyze(&headers(&["Show_ID"])).is_ok());
}

#[test]
fn test_mapping_first_occurrence_wins() {
    let mapping = ColumnMapping::analyze(&headers(&["show_id", "title", "Title"])).unwrap();

    assert_eq!(mapping.headers, vec!["show_id", "title", "title"]);
    assert_eq!(mapping.get_index("title"), Some(1));
    assert!(mapping.has_column("title"));
    assert!(!mapping.has_column("director"));

    let row = headers(&["s1", "First", "Second"]);
    assert_eq!(
        mapping.value(&row, crate::app::models::SourceColumn::Title),
        Some("First")
    );
}

#[test]
fn test_mapping_stats() {
    let mapping =
        ColumnMapping::analyze(&headers(&["show_id", "title", "imdb_score", "source_url"]))
            .unwrap();
    assert_eq!(mapping.stats(), (4, 2, 2));
}

#[test]
fn test_full_layout_order() {
    let mapping = ColumnMapping::analyze(&headers(&CATALOG_HEADERS)).unwrap();
    let layout = CleanLayout::from_mapping(&mapping);

    // Known columns without a clean-table counterpart follow in source order
    let mut expected: Vec<&str> = CleanField::ALL.iter().map(|field| field.name()).collect();
    expected.extend(["duration", "listed_in"]);
    assert_eq!(layout.header(), expected);
}

#[test]
fn test_layout_skips_missing_source_columns() {
    let mapping = ColumnMapping::analyze(&headers(&["show_id", "title"])).unwrap();
    let layout = CleanLayout::from_mapping(&mapping);

    assert_eq!(
        layout.header(),
        vec![
            "show_id",
            "title",
            "title_slug",
            "primary_country",
            "genres",
            "release_year",
            "date_added",
            "added_year",
            "added_month",
            "added_quarter",
            "duration_num",
            "duration_type",
        ]
    );
}

#[test]
fn test_layout_appends_unknown_columns_in_source_order() {
    let mut names = vec!["imdb_score", "show_id"];
    names.extend_from_slice(&CATALOG_HEADERS[1..]);
    names.push("Source URL");
    names.push("imdb_score");

    let mapping = ColumnMapping::analyze(&headers(&names)).unwrap();
    let layout = CleanLayout::from_mapping(&mapping);
    let header = layout.header();

    assert_eq!(header.len(), CleanField::ALL.len() + 4);
    assert_eq!(
        &header[CleanField::ALL.len()..],
        &["imdb_score", "duration", "listed_in", "source_url"]
    );

    match layout.find("source_url") {
        Some(LayoutColumn::Extra {
            source_index, slot, ..
        }) => {
            assert_eq!(*source_index, 13);
            assert_eq!(*slot, 3);
        }
        other => panic!("unexpected column: {other:?}"),
    }
}

#[test]
fn test_extra_columns_are_passed_through() {
    let table = source_table(
        &["show_id", "title", "imdb_score", "notes"],
        &[&["s1", "Sankofa", "7.1", "  restored   print "], &["s2", "Ganglands", "", ""]],
    );
    let result = process(&table);
    let layout = &result.layout;

    let first = layout.render(&result.records[0]);
    assert_eq!(first.len(), layout.columns().len());
    assert_eq!(
        layout.value(&result.records[0], "imdb_score").as_deref(),
        Some("7.1")
    );
    assert_eq!(
        layout.value(&result.records[0], "notes").as_deref(),
        Some("  restored   print ")
    );
    assert_eq!(layout.value(&result.records[1], "imdb_score"), None);
    assert_eq!(layout.value(&result.records[1], "notes"), None);
}

#[test]
fn test_rendered_derived_fields() {
    let result = process(&catalog_table());
    let record = &result.records[0];
    let layout = &result.layout;

    assert_eq!(layout.value(record, "date_added").as_deref(), Some("2021-09-25"));
    assert_eq!(layout.value(record, "added_year").as_deref(), Some("2021"));
    assert_eq!(layout.value(record, "added_month").as_deref(), Some("9"));
    assert_eq!(layout.value(record, "added_quarter").as_deref(), Some("2021Q3"));
    assert_eq!(layout.value(record, "duration_num").as_deref(), Some("90"));
    assert_eq!(layout.value(record, "duration_type").as_deref(), Some("minutes"));
    assert_eq!(layout.value(record, "title_slug").as_deref(), Some("dick-johnson-is-dead"));
    assert_eq!(layout.value(record, "cast"), None);
    assert_eq!(layout.value(record, "duration").as_deref(), Some("90 min"));
    assert_eq!(layout.value(record, "no_such_column"), None);
}
