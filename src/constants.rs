//! Application constants for the reading recap
//!
//! This module contains the column-name vocabularies, rating notations,
//! keyword sets and default values used throughout the ingestion pipeline.
//! Every keyword is stored in folded form (lowercase, no diacritics) and is
//! compared against folded input.

// =============================================================================
// Tokenizer Defaults
// =============================================================================

/// Number of leading characters inspected when auto-detecting the delimiter
pub const DELIMITER_SAMPLE_CHARS: usize = 2000;

/// Default field delimiter
pub const COMMA: char = ',';

/// Alternative delimiter used by spreadsheet exports in comma-decimal locales
pub const SEMICOLON: char = ';';

/// Byte-order mark that some spreadsheet tools prepend to UTF-8 exports
pub const BYTE_ORDER_MARK: char = '\u{feff}';

// =============================================================================
// Header Vocabulary
// =============================================================================

/// Column name fragments, in priority order, for each semantic field
pub mod columns {
    pub const TITLE: &[&str] = &["titulo", "title", "livro"];
    pub const AUTHOR: &[&str] = &["autor", "autora", "author"];
    pub const PUBLISHER: &[&str] = &["editora", "publisher"];
    pub const PAGES: &[&str] = &["paginas", "pages", "pag"];
    pub const RATING: &[&str] = &["nota", "rating", "avaliacao", "estrelas"];
    pub const FAVORITE: &[&str] = &["favorito", "favorite", "fav"];
    pub const STATUS: &[&str] = &["status", "estado"];
    pub const FORMAT: &[&str] = &["tipo", "tipo de livro", "formato", "format"];
    pub const SERIES: &[&str] = &[
        "serie",
        "saga",
        "franquia",
        "nome da serie",
        "titulo da serie",
        "series",
    ];
    pub const VOLUME: &[&str] = &["vol", "volume"];
    pub const YEAR: &[&str] = &["ano", "year"];

    /// Tokens that mark a line as the header row (title-like and author-like)
    pub const HEADER_TITLE_TOKENS: &[&str] = &["titulo", "title"];
    pub const HEADER_AUTHOR_TOKENS: &[&str] = &["autor", "author"];
}

// =============================================================================
// Rating Notation
// =============================================================================

/// Highest rating on the five-star scale
pub const MAX_RATING: f64 = 5.0;

/// Substrings that mark a rating or status cell as "did not finish"
pub const DNF_SUBSTRINGS: &[&str] = &["abandon", "desist"];

/// Whole words that mark a rating or status cell as "did not finish"
pub const DNF_WORDS: &[&str] = &["dnf", "quit"];

/// Glyphs counted as one full star (the emoji variation selector is ignored)
pub const FULL_STAR_GLYPHS: &[char] = &['⭐', '★', '🌟'];

/// Glyphs counted as half a star
pub const HALF_STAR_GLYPHS: &[char] = &['🧦', '½', '☆'];

/// Substrings that mark a favorite flag cell as true
pub const FAVORITE_TOKENS: &[&str] = &["favorito", "favorita", "fav", "sim", "yes", "true", "1", "x"];

// =============================================================================
// Reading Formats
// =============================================================================

/// Format label keywords, checked in this order (standalone first)
pub mod formats {
    pub const STANDALONE: &[&str] = &["unico", "avulso", "standalone", "single"];
    pub const DUOLOGY: &[&str] = &["duologia", "duology"];
    pub const TRILOGY: &[&str] = &["trilogia", "trilogy"];
    pub const TETRALOGY: &[&str] = &["tetralogia", "quadrilogia", "tetralogy"];
    pub const SAGA: &[&str] = &["saga", "franquia", "franchise"];
    pub const SERIES: &[&str] = &["serie", "series"];
}

/// Minimum number of completed books sharing a series key for a true series
pub const MIN_SERIES_VOLUMES: usize = 2;

// =============================================================================
// Aggregation Defaults
// =============================================================================

/// Default number of entries in author and publisher rankings
pub const DEFAULT_RANKING_SIZE: usize = 5;

/// Default number of highlighted books
pub const DEFAULT_HIGHLIGHT_COUNT: usize = 6;

/// Earliest and latest years recognised when inferring a reading year
pub const MIN_READING_YEAR: i32 = 1900;
pub const MAX_READING_YEAR: i32 = 2100;
