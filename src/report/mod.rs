//! Report generation module - statistics and non-spreadsheet artifacts.
//!
//! This module handles:
//! - Aggregating testcase results per sub-suite and per product
//! - Naming artifacts after their source document
//! - Writing JSON artifacts
//! - Printing the statistics summary to the console
//!
//! # Module Organization
//!
//! - `stats` - Statistics records and the single-pass aggregator
//! - `export` - Destination naming and JSON export
//! - `table` - Console statistics table

mod export;
mod stats;
mod table;

// Re-export stats types and functions
pub use stats::{ProductReport, aggregate_products};

// Re-export export functions
pub use export::{ArtifactKind, destination_path, ensure_not_source, remove_existing, write_json_file};

// Re-export table functions
pub use table::print_statistics_tables;
