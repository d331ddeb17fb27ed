//! Column mapping for reading-log headers
//!
//! Resolves each semantic field to a column once, up front. Required fields
//! become plain indices; optional fields become [`Column`] values, so nothing
//! downstream needs to re-check for absent columns.

use super::field_parsers::header_key;
use crate::constants::columns;
use crate::{Error, Result};
use std::fmt;

/// Semantic fields of a reading-log row
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Title,
    Author,
    Publisher,
    Pages,
    Rating,
    Favorite,
    Status,
    Format,
    Series,
    Volume,
    Year,
}

impl Field {
    /// Every field, in resolution order
    pub const ALL: [Field; 11] = [
        Field::Title,
        Field::Author,
        Field::Publisher,
        Field::Pages,
        Field::Rating,
        Field::Favorite,
        Field::Status,
        Field::Format,
        Field::Series,
        Field::Volume,
        Field::Year,
    ];

    /// Accepted header fragments, highest priority first
    pub fn fragments(self) -> &'static [&'static str] {
        match self {
            Field::Title => columns::TITLE,
            Field::Author => columns::AUTHOR,
            Field::Publisher => columns::PUBLISHER,
            Field::Pages => columns::PAGES,
            Field::Rating => columns::RATING,
            Field::Favorite => columns::FAVORITE,
            Field::Status => columns::STATUS,
            Field::Format => columns::FORMAT,
            Field::Series => columns::SERIES,
            Field::Volume => columns::VOLUME,
            Field::Year => columns::YEAR,
        }
    }

    pub fn is_required(self) -> bool {
        matches!(self, Field::Title | Field::Author)
    }

    pub fn name(self) -> &'static str {
        match self {
            Field::Title => "title",
            Field::Author => "author",
            Field::Publisher => "publisher",
            Field::Pages => "pages",
            Field::Rating => "rating",
            Field::Favorite => "favorite",
            Field::Status => "status",
            Field::Format => "format",
            Field::Series => "series",
            Field::Volume => "volume",
            Field::Year => "year",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Where an optional field lives in a row
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Column {
    Present(usize),
    Absent,
}

impl Column {
    pub fn index(self) -> Option<usize> {
        match self {
            Column::Present(index) => Some(index),
            Column::Absent => None,
        }
    }

    pub fn is_present(self) -> bool {
        matches!(self, Column::Present(_))
    }

    /// Cell text for this column, empty when absent or past the end of the row
    pub fn cell(self, cells: &[String]) -> &str {
        self.index()
            .and_then(|index| cells.get(index))
            .map_or("", String::as_str)
    }
}

/// Find the first header cell containing any fragment, fragments in priority order
pub fn find_column(normalized_headers: &[String], fragments: &[&str]) -> Column {
    fragments
        .iter()
        .map(|fragment| header_key(fragment))
        .find_map(|fragment| {
            normalized_headers
                .iter()
                .position(|header| header.contains(&fragment))
        })
        .map_or(Column::Absent, Column::Present)
}

/// Resolved column positions for one header row
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnMapping {
    pub title: usize,
    pub author: usize,
    pub publisher: Column,
    pub pages: Column,
    pub rating: Column,
    pub favorite: Column,
    pub status: Column,
    pub format: Column,
    pub series: Column,
    pub volume: Column,
    pub year: Column,
}

impl ColumnMapping {
    /// Resolve every field against a tokenized header row
    ///
    /// Fails with a schema error naming every missing required field.
    pub fn resolve(header: &[String]) -> Result<Self> {
        let normalized: Vec<String> = header.iter().map(|cell| header_key(cell)).collect();
        let locate = |field: Field| find_column(&normalized, field.fragments());

        let title = locate(Field::Title);
        let author = locate(Field::Author);

        let (title, author) = match (title.index(), author.index()) {
            (Some(title), Some(author)) => (title, author),
            _ => {
                let missing = [(Field::Title, title), (Field::Author, author)]
                    .into_iter()
                    .filter(|(_, column)| !column.is_present())
                    .map(|(field, _)| field.name());
                return Err(Error::schema(missing));
            }
        };

        Ok(ColumnMapping {
            title,
            author,
            publisher: locate(Field::Publisher),
            pages: locate(Field::Pages),
            rating: locate(Field::Rating),
            favorite: locate(Field::Favorite),
            status: locate(Field::Status),
            format: locate(Field::Format),
            series: locate(Field::Series),
            volume: locate(Field::Volume),
            year: locate(Field::Year),
        })
    }

    /// Column for any field
    pub fn column(&self, field: Field) -> Column {
        match field {
            Field::Title => Column::Present(self.title),
            Field::Author => Column::Present(self.author),
            Field::Publisher => self.publisher,
            Field::Pages => self.pages,
            Field::Rating => self.rating,
            Field::Favorite => self.favorite,
            Field::Status => self.status,
            Field::Format => self.format,
            Field::Series => self.series,
            Field::Volume => self.volume,
            Field::Year => self.year,
        }
    }

    /// Minimum number of cells a row needs to carry the required fields
    pub fn required_width(&self) -> usize {
        self.title.max(self.author) + 1
    }

    /// Optional fields that resolved to no column
    pub fn absent_fields(&self) -> Vec<Field> {
        Field::ALL
            .into_iter()
            .filter(|field| !self.column(*field).is_present())
            .collect()
    }
}
