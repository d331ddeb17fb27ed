//! Statistics aggregation for reading-log records
//!
//! Turns the record sequence produced by the CSV reader into a single
//! [`StatsSummary`](crate::app::models::StatsSummary). Aggregation is a pure
//! function of its input: no I/O, no shared state, and the same records always
//! produce the same summary.
//!
//! # Architecture
//!
//! - [`summary`] - Orchestration and the totals, rating and list aggregates
//! - [`rankings`] - First-seen-order counters and mean-rating accumulators
//! - [`formats`] - Series membership, format classification and the dominant format
//!
//! Only completed books feed totals, rankings, series and formats. Abandoned
//! books are listed on their own, and favorites include both.
//!
//! # Example Usage
//!
//! ```rust
//! use reading_recap::app::services::aggregator::compute_stats;
//! use reading_recap::app::services::csv_reader::BookCsvParser;
//! use reading_recap::config::RecapConfig;
//!
//! # fn example() -> reading_recap::Result<()> {
//! let config = RecapConfig::default();
//! let csv = "Título,Autor,Páginas,Notas\nDuna,Frank Herbert,680,5\nTorto Arado,Itamar,264,4\n";
//! let parsed = BookCsvParser::new(config.clone()).parse_str(csv)?;
//!
//! let summary = compute_stats(&parsed.records, &config);
//! assert_eq!(summary.completed_count, 2);
//! assert_eq!(summary.total_pages, 944);
//! assert_eq!(summary.rating_average, Some(4.5));
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```

pub mod formats;
pub mod rankings;
pub mod summary;

#[cfg(test)]
pub mod tests;

pub use formats::{decide_dominant_format, series_membership};
pub use rankings::{RankingCounter, RatingAccumulator};
pub use summary::compute_stats;
