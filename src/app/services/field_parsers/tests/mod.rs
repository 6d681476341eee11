//! Tests for the field parsers
//!
//! Each parser gets its own module; the property tests for the text
//! normalizer live with the other text tests.

mod date_tests;
mod text_tests;
