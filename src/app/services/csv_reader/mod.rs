//! CSV reader for reading-log spreadsheets
//!
//! This module turns the CSV export of a hand-edited reading log into typed
//! [`BookRecord`](crate::app::models::BookRecord)s. It targets one informal
//! schema with known column-name variants and rating notations rather than
//! CSV in general.
//!
//! ## Architecture
//!
//! - [`tokenizer`] - Quote-aware line splitting and delimiter detection
//! - [`header`] - Header row location below any preamble lines
//! - [`column_mapping`] - Header synonyms resolved to column positions
//! - [`field_parsers`] - Cell normalizers (numbers, ratings, flags, formats, years)
//! - [`series`] - Series-name canonicalization rules
//! - [`record_parser`] - Individual row processing
//! - [`parser`] - Parsing orchestration
//! - [`stats`] - Parsing statistics and result structures
//!
//! ## Usage
//!
//! ```rust
//! use reading_recap::app::services::csv_reader::BookCsvParser;
//! use reading_recap::config::RecapConfig;
//!
//! # fn example() -> reading_recap::Result<()> {
//! let csv = "Título,Autor,Notas\nDuna,Frank Herbert,⭐⭐⭐⭐🧦\n";
//! let result = BookCsvParser::new(RecapConfig::default()).parse_str(csv)?;
//!
//! assert_eq!(result.records.len(), 1);
//! assert_eq!(result.records[0].rating.map(f64::from), Some(4.5));
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```

pub mod column_mapping;
pub mod field_parsers;
pub mod header;
pub mod parser;
pub mod record_parser;
pub mod series;
pub mod stats;
pub mod tokenizer;

#[cfg(test)]
mod tests;

pub use column_mapping::{Column, ColumnMapping, Field};
pub use parser::BookCsvParser;
pub use series::{canonical_series_key, series_display_name};
pub use stats::{ParseResult, ParseStats};
pub use tokenizer::{detect_delimiter, tokenize};
