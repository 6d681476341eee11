//! Field parsers for catalog records
//!
//! Pure, stateless functions turning human-entered text into typed values.
//! None of them fail: anything they cannot interpret becomes an absent
//! value. Deciding whether a coercion is worth logging is left to the
//! record processor, which shares the same plausibility predicates.
//!
//! ## Components
//!
//! - [`text`] - whitespace normalization, slugs and header names
//! - [`date`] - best-effort parsing of `date_added`
//! - [`duration`] - `"90 min"` / `"3 Seasons"` into magnitude and unit
//! - [`list`] - comma-separated multi-value fields

pub mod date;
pub mod duration;
pub mod list;
pub mod text;

#[cfg(test)]
pub mod tests;

pub use date::{parse_date_added, parse_release_year};
pub use duration::{RawDuration, extract_duration, parse_duration};
pub use list::{primary_value, split_list};
pub use text::{normalize_header, normalize_text, slugify};
