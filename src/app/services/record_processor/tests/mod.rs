//! Tests for the record processor module
//!
//! Fixtures build small in-memory source tables; every test resolves the
//! added-year window against a fixed year so results do not depend on the
//! clock.

pub mod expansion_tests;
pub mod layout_tests;
pub mod stats_tests;

use crate::app::models::SourceTable;
use crate::app::services::record_processor::{ProcessingResult, RecordProcessor};
use crate::config::Config;

/// Year the added-year window is resolved against in tests
pub const TEST_YEAR: i32 = 2024;

/// Full header row of a catalog export
pub const CATALOG_HEADERS: [&str; 12] = [
    "show_id",
    "type",
    "title",
    "director",
    "cast",
    "country",
    "date_added",
    "release_year",
    "rating",
    "duration",
    "listed_in",
    "description",
];

/// Build a source table from string slices
pub fn source_table(headers: &[&str], rows: &[&[&str]]) -> SourceTable {
    SourceTable::new(
        headers.iter().map(|h| h.to_string()).collect(),
        rows.iter()
            .map(|row| row.iter().map(|v| v.to_string()).collect())
            .collect(),
    )
}

/// Three titles with every known column filled in the usual export format
pub fn catalog_table() -> SourceTable {
    source_table(
        &CATALOG_HEADERS,
        &[
            &[
                "s1",
                "Movie",
                "Dick Johnson Is Dead",
                "Kirsten Johnson",
                "",
                "United States",
                "September 25, 2021",
                "2020",
                "PG-13",
                "90 min",
                "Documentaries",
                "As her father nears the end of his life, filmmaker Kirsten Johnson stages his death.",
            ],
            &[
                "s2",
                "TV Show",
                "Blood & Water",
                "",
                "Ama Qamata, Khosi Ngema",
                "South Africa",
                "September 24, 2021",
                "2021",
                "TV-MA",
                "2 Seasons",
                "International TV Shows, TV Dramas, TV Mysteries",
                "After crossing paths at a party, a Cape Town teen sets out to prove something.",
            ],
            &[
                "s3",
                "Movie",
                "  Sankofa ",
                "Haile Gerima",
                "Kofi Ghanaba,   Oyafunmike Ogunlano",
                "United States, Ghana, Burkina Faso",
                " September 24, 2021",
                "1993",
                "TV-MA",
                "125 min",
                "Dramas, Independent Movies, International Movies",
                "On a photo shoot in Ghana,   an American model slips back in time.",
            ],
        ],
    )
}

pub fn test_processor(config: Config) -> RecordProcessor {
    RecordProcessor::new(config).with_reference_year(TEST_YEAR)
}

/// Run the default pipeline over `table`
pub fn process(table: &SourceTable) -> ProcessingResult {
    test_processor(Config::default())
        .process(table)
        .expect("pipeline should succeed")
}
