//! Record filtering for the reading recap
//!
//! Narrows a record sequence before aggregation. Text criteria match folded
//! substrings, so "evaristo" finds "Conceição Evaristo". Rating bounds only
//! exclude books that have a rating; unrated and abandoned books pass them.

use crate::app::models::BookRecord;
use crate::app::services::csv_reader::field_parsers::comparison_key;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Criteria a record must meet to be aggregated
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RecordFilter {
    /// Exact reading year
    pub year: Option<i32>,

    /// Folded substring of the author name
    pub author: Option<String>,

    /// Folded substring of the publisher name
    pub publisher: Option<String>,

    /// Lowest accepted rating (inclusive)
    pub min_rating: Option<f64>,

    /// Highest accepted rating (inclusive)
    pub max_rating: Option<f64>,
}

impl RecordFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_year(mut self, year: i32) -> Self {
        self.year = Some(year);
        self
    }

    pub fn with_author(mut self, author: impl Into<String>) -> Self {
        self.author = Some(author.into());
        self
    }

    pub fn with_publisher(mut self, publisher: impl Into<String>) -> Self {
        self.publisher = Some(publisher.into());
        self
    }

    pub fn with_rating_range(mut self, min_rating: Option<f64>, max_rating: Option<f64>) -> Self {
        self.min_rating = min_rating;
        self.max_rating = max_rating;
        self
    }

    /// Whether no criterion is set
    pub fn is_empty(&self) -> bool {
        self.year.is_none()
            && query(&self.author).is_none()
            && query(&self.publisher).is_none()
            && self.min_rating.is_none()
            && self.max_rating.is_none()
    }

    /// Check a single record against every criterion
    pub fn matches(&self, record: &BookRecord) -> bool {
        if let Some(year) = self.year {
            if record.year != Some(year) {
                return false;
            }
        }

        if let Some(author) = query(&self.author) {
            if !comparison_key(&record.author).contains(&author) {
                return false;
            }
        }

        if let Some(publisher) = query(&self.publisher) {
            if !comparison_key(&record.publisher).contains(&publisher) {
                return false;
            }
        }

        if let Some(rating) = record.rating.map(f64::from) {
            if self.min_rating.is_some_and(|min| rating < min) {
                return false;
            }
            if self.max_rating.is_some_and(|max| rating > max) {
                return false;
            }
        }

        true
    }

    /// Records that pass the filter, in their original order
    pub fn apply(&self, records: &[BookRecord]) -> Vec<BookRecord> {
        let filtered: Vec<BookRecord> = records
            .iter()
            .filter(|record| self.matches(record))
            .cloned()
            .collect();

        debug!(
            "Filter kept {} of {} records ({:?})",
            filtered.len(),
            records.len(),
            self
        );
        filtered
    }
}

/// Folded query text, `None` when blank
fn query(text: &Option<String>) -> Option<String> {
    text.as_deref()
        .map(comparison_key)
        .filter(|folded| !folded.is_empty())
}
