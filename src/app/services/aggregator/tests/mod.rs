//! Tests for the statistics aggregator
//!
//! Fixtures build records directly so each aggregate can be exercised
//! without going through CSV text.

pub mod formats_tests;
pub mod rankings_tests;

use crate::app::models::{BookRecord, Rating};
use crate::app::services::csv_reader::canonical_series_key;

/// Rating from a value known to be valid
pub fn stars(value: f64) -> Option<Rating> {
    Rating::from_value(value)
}

/// Completed, unrated book with no format or series information
pub fn create_test_book(title: &str, author: &str) -> BookRecord {
    BookRecord {
        title: title.to_string(),
        author: author.to_string(),
        publisher: String::new(),
        page_count: None,
        rating: None,
        did_not_finish: false,
        is_favorite: false,
        format_label: String::new(),
        series_raw_name: String::new(),
        series_key: canonical_series_key(title),
        volume_number: None,
        year: None,
    }
}

/// Completed, rated book belonging to a series
pub fn create_series_book(title: &str, series: &str, format: &str, rating: f64) -> BookRecord {
    BookRecord {
        rating: stars(rating),
        format_label: format.to_string(),
        series_raw_name: series.to_string(),
        series_key: canonical_series_key(series),
        ..create_test_book(title, "Autora")
    }
}

/// Abandoned book
pub fn create_abandoned_book(title: &str, author: &str) -> BookRecord {
    BookRecord {
        did_not_finish: true,
        ..create_test_book(title, author)
    }
}
