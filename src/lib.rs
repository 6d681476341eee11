//! Catalog Prep Library
//!
//! A Rust library for turning a raw titles catalog export (one row per movie
//! or TV show) into analysis-ready tables.
//!
//! This library provides tools for:
//! - Normalizing free-text fields and snake-casing headers
//! - Best-effort parsing of dates, release years and durations
//! - Coercing implausible values to missing while logging each coercion
//! - Profiling the cleaned dataset
//! - Exploding multi-valued category fields into a long-form fact table
//! - Writing CSV and JSON outputs

pub mod config;
pub mod constants;
pub mod error;

// Core application modules
pub mod app {
    pub mod models;
    pub mod services {
        pub mod field_parsers;
        pub mod record_processor;
    }
    pub mod adapters {
        pub mod filesystem;
    }
}

// CLI modules
pub mod cli {
    pub mod args;
    pub mod commands;
}

// Re-export commonly used types
pub use app::models::{AnomalyEntry, CategoryTable, DataProfile, SourceTable, TitleRecord};
pub use app::services::record_processor::{ProcessingResult, RecordProcessor};
pub use config::Config;
pub use error::{Error, Result};
