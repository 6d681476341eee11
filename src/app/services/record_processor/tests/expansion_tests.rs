//! Tests for category explosion

use super::*;
use crate::Error;
use crate::app::services::record_processor::expansion::{category_columns, explode_column};

fn pairs(result: &ProcessingResult) -> Vec<(String, String)> {
    result
        .categories
        .rows
        .iter()
        .map(|row| (row.show_id.clone(), row.value.clone()))
        .collect()
}

#[test]
fn test_explode_three_records() {
    let table = source_table(
        &["show_id", "title", "listed_in"],
        &[
            &["s1", "A", "Dramas, International Movies"],
            &["s2", "B", "Comedies"],
            &["s3", "C", ""],
        ],
    );

    let result = process(&table);

    assert_eq!(
        pairs(&result),
        vec![
            ("s1".to_string(), "Dramas".to_string()),
            ("s1".to_string(), "International Movies".to_string()),
            ("s2".to_string(), "Comedies".to_string()),
        ]
    );
}

#[test]
fn test_empty_and_blank_lists_produce_no_rows() {
    let table = source_table(
        &["show_id", "listed_in"],
        &[&["s1", ""], &["s2", " , ,"], &["s3", "   "]],
    );

    let result = process(&table);
    assert_eq!(result.categories.row_count(), 0);
}

#[test]
fn test_tokens_are_trimmed_and_order_preserved() {
    let table = source_table(
        &["show_id", "listed_in"],
        &[
            &["s9", "  Thrillers ,Horror Movies,, Cult Movies "],
            &["s2", "Anime Features"],
        ],
    );

    let values: Vec<String> = process(&table)
        .categories
        .rows
        .iter()
        .map(|row| format!("{}:{}", row.show_id, row.value))
        .collect();

    assert_eq!(
        values,
        vec![
            "s9:Thrillers",
            "s9:Horror Movies",
            "s9:Cult Movies",
            "s2:Anime Features"
        ]
    );
}

#[test]
fn test_projection_is_carried() {
    let result = process(&catalog_table());
    let table = &result.categories;

    assert_eq!(
        table.header(),
        vec![
            "show_id",
            "title",
            "type",
            "genre",
            "primary_country",
            "added_year",
            "release_year",
            "rating",
            "duration_num",
            "duration_type",
        ]
    );

    let sankofa_rows: Vec<_> = table.rows.iter().filter(|r| r.show_id == "s3").collect();
    assert_eq!(sankofa_rows.len(), 3);
    for row in sankofa_rows {
        assert_eq!(table.get(row, "title"), Some("Sankofa"));
        assert_eq!(table.get(row, "type"), Some("Movie"));
        assert_eq!(table.get(row, "primary_country"), Some("United States"));
        assert_eq!(table.get(row, "added_year"), Some("2021"));
        assert_eq!(table.get(row, "release_year"), Some("1993"));
        assert_eq!(table.get(row, "rating"), Some("TV-MA"));
        assert_eq!(table.get(row, "duration_num"), Some("125"));
        assert_eq!(table.get(row, "duration_type"), Some("minutes"));
    }
}

#[test]
fn test_projection_skips_columns_missing_from_source() {
    let table = source_table(&["show_id", "listed_in"], &[&["s1", "Dramas"]]);
    let result = process(&table);

    assert_eq!(
        result.categories.header(),
        vec![
            "show_id",
            "genre",
            "primary_country",
            "added_year",
            "release_year",
            "duration_num",
            "duration_type",
        ]
    );

    let row = &result.categories.rows[0];
    assert_eq!(
        result.categories.render(row),
        vec![Some("s1"), Some("Dramas"), None, None, None, None, None]
    );
}

#[test]
fn test_explode_rejects_unknown_column() {
    let result = process(&catalog_table());

    let error = explode_column(&result.records, &result.layout, "keywords", "keyword").unwrap_err();
    assert!(matches!(error, Error::Configuration { .. }));
}

#[test]
fn test_category_columns_reject_collisions() {
    let result = process(&catalog_table());

    for name in ["show_id", "title", "rating", "duration_type"] {
        assert!(
            category_columns(&result.layout, name).is_err(),
            "{name} should collide"
        );
    }
    assert!(category_columns(&result.layout, "genre").is_ok());
}

#[test]
fn test_genres_alias_matches_listed_in() {
    let result = process(&catalog_table());

    for record in &result.records {
        assert_eq!(
            result.layout.value(record, "genres"),
            record.genres.clone(),
            "{}",
            record.show_id
        );
    }
    assert_eq!(
        result.records[1].genres.as_deref(),
        Some("International TV Shows, TV Dramas, TV Mysteries")
    );
}
