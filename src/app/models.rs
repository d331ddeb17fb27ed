//! Data models for reading-log processing
//!
//! This module contains the typed book record produced by the CSV reader and
//! the aggregate summary derived from a record sequence.

use crate::constants::MAX_RATING;
use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

// =============================================================================
// Rating
// =============================================================================

/// A rating on the five-star scale in half-star steps
///
/// Stored as a count of half stars (0..=10) so every value lies in
/// {0, 0.5, 1, ..., 5} by construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(into = "f64", try_from = "f64")]
pub struct Rating(u8);

impl Rating {
    /// Highest possible rating (five stars)
    pub const MAX: Rating = Rating(10);

    /// Build a rating from a count of half stars, saturating at five stars
    pub fn from_half_stars(half_stars: u32) -> Self {
        Rating(half_stars.min(u32::from(Self::MAX.0)) as u8)
    }

    /// Round a value to the nearest half star, rejecting values outside [0, 5]
    pub fn from_value(value: f64) -> Option<Self> {
        if !value.is_finite() || !(0.0..=MAX_RATING).contains(&value) {
            return None;
        }
        Some(Rating((value * 2.0).round() as u8))
    }

    /// Numeric value of the rating
    pub fn value(self) -> f64 {
        f64::from(self.0) / 2.0
    }

    /// Number of half stars
    pub fn half_stars(self) -> u8 {
        self.0
    }
}

impl From<Rating> for f64 {
    fn from(rating: Rating) -> Self {
        rating.value()
    }
}

impl TryFrom<f64> for Rating {
    type Error = Error;

    fn try_from(value: f64) -> Result<Self> {
        Rating::from_value(value).ok_or_else(|| Error::invalid_rating(value))
    }
}

impl fmt::Display for Rating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0 % 2 == 0 {
            write!(f, "{}", self.0 / 2)
        } else {
            write!(f, "{:.1}", self.value())
        }
    }
}

// =============================================================================
// Reading Formats
// =============================================================================

/// Reading-format category derived from a free-text format label
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FormatCategory {
    Standalone,
    Duology,
    Trilogy,
    Tetralogy,
    Saga,
    SeriesGeneric,
    Other,
}

impl FormatCategory {
    /// Categories that describe a book belonging to several volumes
    pub fn is_multi_volume(self) -> bool {
        matches!(
            self,
            FormatCategory::Duology
                | FormatCategory::Trilogy
                | FormatCategory::Tetralogy
                | FormatCategory::Saga
                | FormatCategory::SeriesGeneric
        )
    }

    /// Label used for chart data
    pub fn chart_label(self) -> &'static str {
        match self {
            FormatCategory::Standalone => "Livros únicos",
            FormatCategory::Duology => "Duologias",
            FormatCategory::Trilogy => "Trilogias",
            FormatCategory::Tetralogy => "Tetralogias",
            FormatCategory::Saga => "Sagas",
            FormatCategory::SeriesGeneric => "Séries",
            FormatCategory::Other => "Outros formatos",
        }
    }

    /// All categories in display order
    pub fn all_values() -> [FormatCategory; 7] {
        [
            FormatCategory::Standalone,
            FormatCategory::Duology,
            FormatCategory::Trilogy,
            FormatCategory::Tetralogy,
            FormatCategory::Saga,
            FormatCategory::SeriesGeneric,
            FormatCategory::Other,
        ]
    }
}

/// The reading format that prevails across completed books
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DominantFormat {
    Duologies,
    Trilogies,
    Standalones,
    Series,
    /// Two or more categories share the top count
    Balanced,
}

impl DominantFormat {
    pub fn label(self) -> &'static str {
        match self {
            DominantFormat::Duologies => "Duologias",
            DominantFormat::Trilogies => "Trilogias",
            DominantFormat::Standalones => "Livros únicos",
            DominantFormat::Series => "Séries",
            DominantFormat::Balanced => "Equilíbrio",
        }
    }
}

impl fmt::Display for DominantFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

// =============================================================================
// Book Record
// =============================================================================

/// One book from the reading log
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BookRecord {
    /// Book title (never empty)
    pub title: String,

    pub author: String,

    pub publisher: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_count: Option<u32>,

    /// Rating, always `None` when the book was abandoned
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rating: Option<Rating>,

    /// Abandoned before completion
    pub did_not_finish: bool,

    pub is_favorite: bool,

    /// Raw format label as typed by the reader (e.g. "Trilogia")
    pub format_label: String,

    /// Raw series name as typed by the reader
    pub series_raw_name: String,

    /// Grouping key derived from the series name (or title); never displayed
    pub series_key: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub volume_number: Option<u32>,

    /// Year the book was read, explicit or inferred from the row text
    #[serde(skip_serializing_if = "Option::is_none")]
    pub year: Option<i32>,
}

impl BookRecord {
    /// Whether the book was read to the end
    pub fn is_completed(&self) -> bool {
        !self.did_not_finish
    }

    /// Rating of a completed book, if any
    pub fn completed_rating(&self) -> Option<Rating> {
        if self.is_completed() { self.rating } else { None }
    }
}

// =============================================================================
// Statistics Summary
// =============================================================================

/// A name with its occurrence count
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RankingEntry {
    pub name: String,
    pub count: usize,
}

/// Number of completed books with a given rating
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RatingBucket {
    pub rating: Rating,
    pub count: usize,
}

/// A group (author or series) ranked by its mean rating
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RatedGroup {
    pub name: String,
    pub average: f64,
    /// Number of rated books in the group
    pub count: usize,
}

/// A (label, count) pair for bar charts
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChartEntry {
    pub label: String,
    pub count: usize,
}

/// Aggregate statistics for a record sequence
///
/// Derived data: recomputed in full whenever the records change.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatsSummary {
    /// Books read to the end
    pub completed_count: usize,

    /// Pages across completed books with a known page count
    pub total_pages: u64,

    /// Mean page count over completed books with a known page count
    pub average_pages: Option<f64>,

    pub rating_average: Option<f64>,
    pub rating_max: Option<Rating>,
    pub rating_min: Option<Rating>,

    /// Rating distribution, ascending by rating
    pub rating_histogram: Vec<RatingBucket>,

    pub author_ranking: Vec<RankingEntry>,
    pub publisher_ranking: Vec<RankingEntry>,
    pub top_publisher: Option<String>,
    pub best_author: Option<RatedGroup>,

    /// Completed books per non-empty series key
    pub series_membership: BTreeMap<String, usize>,

    pub format_counts: BTreeMap<FormatCategory, usize>,
    pub dominant_format: Option<DominantFormat>,
    pub best_series: Option<RatedGroup>,

    /// Non-zero format counts with display labels
    pub format_chart: Vec<ChartEntry>,

    pub favorites: Vec<BookRecord>,
    pub abandoned: Vec<BookRecord>,
    pub highlights: Vec<BookRecord>,
}

impl StatsSummary {
    /// Whether any completed book was classified into a format
    pub fn has_format_counts(&self) -> bool {
        self.format_counts.values().any(|&count| count > 0)
    }

    /// Rating distribution as chart data ("4.5 estrelas", count)
    pub fn rating_chart(&self) -> Vec<ChartEntry> {
        self.rating_histogram
            .iter()
            .map(|bucket| ChartEntry {
                label: format!("{} estrelas", bucket.rating),
                count: bucket.count,
            })
            .collect()
    }
}
