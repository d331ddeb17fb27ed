//! Header row detection
//!
//! Spreadsheet exports often carry a title row or notes above the real header,
//! so the header is the first line with a title column and a separate author
//! column.

use super::field_parsers::fold;
use super::tokenizer::tokenize;
use crate::constants::columns::{HEADER_AUTHOR_TOKENS, HEADER_TITLE_TOKENS};
use tracing::debug;

/// Check whether tokenized cells look like the header row
///
/// Title and author tokens must sit in different cells, so a free-text note
/// mentioning both words in one cell is not a header.
pub fn is_header_row(cells: &[String]) -> bool {
    let folded: Vec<String> = cells.iter().map(|cell| fold(cell)).collect();
    let has_token =
        |cell: &str, tokens: &[&str]| tokens.iter().any(|token| cell.contains(token));

    folded.iter().enumerate().any(|(title_index, title_cell)| {
        has_token(title_cell, HEADER_TITLE_TOKENS)
            && folded.iter().enumerate().any(|(author_index, author_cell)| {
                author_index != title_index && has_token(author_cell, HEADER_AUTHOR_TOKENS)
            })
    })
}

/// Index of the header among non-blank `lines`
///
/// Falls back to the first line when no line qualifies, so the schema
/// resolver can report which columns are missing. `None` only for no lines.
pub fn locate_header(lines: &[&str], delimiter: char) -> Option<usize> {
    if lines.is_empty() {
        return None;
    }

    match lines
        .iter()
        .position(|line| is_header_row(&tokenize(line, delimiter)))
    {
        Some(index) => {
            debug!("Header row found at line {}", index + 1);
            Some(index)
        }
        None => {
            debug!("No line has separate title and author columns, using first line as header");
            Some(0)
        }
    }
}
