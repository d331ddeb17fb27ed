//! Field parsing utilities for reading-log cells
//!
//! Every function here is total: malformed input degrades to `None`/`false`
//! instead of an error, so a bad cell never costs the whole row.

use crate::app::models::{FormatCategory, Rating};
use crate::constants::{
    DNF_SUBSTRINGS, DNF_WORDS, FAVORITE_TOKENS, FULL_STAR_GLYPHS, HALF_STAR_GLYPHS,
    MAX_READING_YEAR, MIN_READING_YEAR, formats,
};
use once_cell::sync::Lazy;
use regex::Regex;
use unicode_normalization::{UnicodeNormalization, char::is_combining_mark};

static LEADING_FLOAT: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[+-]?(?:\d+(?:\.\d*)?|\.\d+)").expect("Invalid regex: leading float")
});

static LEADING_INTEGER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[+-]?\d+").expect("Invalid regex: leading integer"));

static YEAR_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\b(19\d{2}|20\d{2}|2100)\b").expect("Invalid regex: year"));

// =============================================================================
// Text Folding
// =============================================================================

/// Lowercase and strip diacritics ("Título" -> "titulo")
pub fn fold(text: &str) -> String {
    text.nfd()
        .filter(|c| !is_combining_mark(*c))
        .flat_map(char::to_lowercase)
        .collect()
}

/// Folded text with internal whitespace collapsed, for comparisons
pub fn comparison_key(text: &str) -> String {
    fold(text).split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Folded text with all whitespace removed, for header matching
pub fn header_key(text: &str) -> String {
    fold(text).chars().filter(|c| !c.is_whitespace()).collect()
}

// =============================================================================
// Numbers
// =============================================================================

/// Read the decimal number at the start of a string (dot as decimal point)
fn parse_leading_float(text: &str) -> Option<f64> {
    LEADING_FLOAT
        .find(text.trim())
        .and_then(|m| m.as_str().parse::<f64>().ok())
}

/// Parse a locale-aware number: "." groups thousands, "," is the decimal point
///
/// "1.234,56" -> 1234.56, "300 págs" -> 300, "" -> None
pub fn parse_number(raw: &str) -> Option<f64> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }

    let normalized = trimmed.replace('.', "").replacen(',', ".", 1);
    parse_leading_float(&normalized)
}

/// Parse a page count, rejecting negative values
pub fn parse_page_count(raw: &str) -> Option<u32> {
    parse_number(raw)
        .filter(|pages| *pages >= 0.0)
        .map(|pages| pages.round().min(f64::from(u32::MAX)) as u32)
}

/// Parse the leading integer of a volume cell ("3" -> 3, "Vol. 3" -> None)
pub fn parse_volume(raw: &str) -> Option<u32> {
    LEADING_INTEGER
        .find(raw.trim())
        .and_then(|m| m.as_str().parse::<u32>().ok())
}

// =============================================================================
// Ratings
// =============================================================================

/// Outcome of rating normalization
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParsedRating {
    pub rating: Option<Rating>,
    pub did_not_finish: bool,
}

impl ParsedRating {
    const ABANDONED: ParsedRating = ParsedRating {
        rating: None,
        did_not_finish: true,
    };

    const UNRATED: ParsedRating = ParsedRating {
        rating: None,
        did_not_finish: false,
    };

    fn rated(rating: Rating) -> Self {
        Self {
            rating: Some(rating),
            did_not_finish: false,
        }
    }
}

/// Whether a cell marks the book as abandoned ("Abandonado", "DNF", "quit")
pub fn is_dnf_marker(raw: &str) -> bool {
    let folded = fold(raw.trim());
    if folded.is_empty() {
        return false;
    }

    DNF_SUBSTRINGS.iter().any(|marker| folded.contains(marker))
        || folded
            .split(|c: char| !c.is_alphanumeric())
            .any(|word| DNF_WORDS.contains(&word))
}

/// Count star glyphs: full stars count 1, half stars 0.5, capped at 5
fn parse_star_glyphs(raw: &str) -> Option<Rating> {
    let full = raw.chars().filter(|c| FULL_STAR_GLYPHS.contains(c)).count() as u32;
    let half = raw.chars().filter(|c| HALF_STAR_GLYPHS.contains(c)).count() as u32;

    let half_stars = full * 2 + half;
    (half_stars > 0).then(|| Rating::from_half_stars(half_stars))
}

/// Normalize a rating cell, consulting the status cell for abandonment
///
/// Numeric ratings outside [0, 5] are rejected; star glyphs are clamped to 5.
pub fn parse_rating(rating_cell: &str, status_cell: &str) -> ParsedRating {
    if is_dnf_marker(rating_cell) || is_dnf_marker(status_cell) {
        return ParsedRating::ABANDONED;
    }

    let raw = rating_cell.trim();
    if raw.is_empty() {
        return ParsedRating::UNRATED;
    }

    if let Some(rating) = parse_leading_float(&raw.replacen(',', ".", 1)).and_then(Rating::from_value)
    {
        return ParsedRating::rated(rating);
    }

    match parse_star_glyphs(raw) {
        Some(rating) => ParsedRating::rated(rating),
        None => ParsedRating::UNRATED,
    }
}

// =============================================================================
// Flags and Categories
// =============================================================================

/// Whether a favorite cell is truthy ("Sim", "x", "❤ fav", "1")
pub fn parse_favorite(raw: &str) -> bool {
    let folded = fold(raw.trim());
    !folded.is_empty() && FAVORITE_TOKENS.iter().any(|token| folded.contains(token))
}

/// Map a free-text format label to its category
///
/// Standalone keywords are checked first, so "único (não é série)" is standalone.
pub fn categorize_format(label: &str) -> Option<FormatCategory> {
    let folded = fold(label.trim());
    if folded.is_empty() {
        return None;
    }

    let matches = |keywords: &[&str]| keywords.iter().any(|keyword| folded.contains(keyword));

    let category = if matches(formats::STANDALONE) {
        FormatCategory::Standalone
    } else if matches(formats::DUOLOGY) {
        FormatCategory::Duology
    } else if matches(formats::TRILOGY) {
        FormatCategory::Trilogy
    } else if matches(formats::TETRALOGY) {
        FormatCategory::Tetralogy
    } else if matches(formats::SAGA) {
        FormatCategory::Saga
    } else if matches(formats::SERIES) {
        FormatCategory::SeriesGeneric
    } else {
        FormatCategory::Other
    };

    Some(category)
}

// =============================================================================
// Reading Year
// =============================================================================

fn year_in_range(year: i32) -> bool {
    (MIN_READING_YEAR..=MAX_READING_YEAR).contains(&year)
}

/// Reading year from an explicit year cell, else the first year found in `fallbacks`
pub fn infer_year(explicit: &str, fallbacks: &[&str]) -> Option<i32> {
    let explicit_year = parse_number(explicit)
        .filter(|year| year.fract() == 0.0)
        .map(|year| year as i32)
        .filter(|year| year_in_range(*year));

    explicit_year.or_else(|| {
        fallbacks.iter().find_map(|text| {
            YEAR_PATTERN
                .captures(text)
                .and_then(|caps| caps[1].parse::<i32>().ok())
        })
    })
}
