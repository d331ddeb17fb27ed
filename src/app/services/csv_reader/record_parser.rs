//! Individual row parsing for reading-log CSV files
//!
//! Turns one tokenized row into a [`BookRecord`], applying every field
//! normalizer to its resolved column.

use super::column_mapping::{Column, ColumnMapping};
use super::field_parsers::{
    infer_year, parse_favorite, parse_page_count, parse_rating, parse_volume,
};
use super::series::canonical_series_key;
use crate::app::models::BookRecord;

/// What became of a single data row
#[derive(Debug, Clone, PartialEq)]
pub enum RowOutcome {
    Book(BookRecord),
    /// Every cell empty
    Empty,
    /// Too few cells to reach the title and author columns
    TooShort,
    /// Title cell empty; treated as a separator row
    Untitled,
}

/// Parse a tokenized data row
pub fn parse_book_row(cells: &[String], mapping: &ColumnMapping) -> RowOutcome {
    if cells.iter().all(|cell| cell.trim().is_empty()) {
        return RowOutcome::Empty;
    }

    if cells.len() < mapping.required_width() {
        return RowOutcome::TooShort;
    }

    let title = Column::Present(mapping.title).cell(cells).trim();
    if title.is_empty() {
        return RowOutcome::Untitled;
    }

    let rating_cell = mapping.rating.cell(cells);
    let parsed_rating = parse_rating(rating_cell, mapping.status.cell(cells));

    let publisher = mapping.publisher.cell(cells).trim();
    let series_raw_name = mapping.series.cell(cells).trim();

    let mut series_key = canonical_series_key(series_raw_name);
    if series_key.is_empty() {
        series_key = canonical_series_key(title);
    }

    // the format category is derived by the aggregator from the raw label
    let format_label = mapping.format.cell(cells).trim();

    RowOutcome::Book(BookRecord {
        title: title.to_string(),
        author: Column::Present(mapping.author).cell(cells).trim().to_string(),
        publisher: publisher.to_string(),
        page_count: parse_page_count(mapping.pages.cell(cells)),
        rating: parsed_rating.rating,
        did_not_finish: parsed_rating.did_not_finish,
        is_favorite: parse_favorite(mapping.favorite.cell(cells)),
        format_label: format_label.to_string(),
        series_raw_name: series_raw_name.to_string(),
        series_key,
        volume_number: parse_volume(mapping.volume.cell(cells)),
        year: infer_year(mapping.year.cell(cells), &[title, publisher, rating_cell]),
    })
}
