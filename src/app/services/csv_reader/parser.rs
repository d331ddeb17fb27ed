//! Core reading-log CSV parser
//!
//! Orchestrates text cleanup, delimiter choice, header location, column
//! resolution and row parsing. Works on fully materialized text only.

use tracing::{debug, info, warn};

use super::column_mapping::ColumnMapping;
use super::header::locate_header;
use super::record_parser::{RowOutcome, parse_book_row};
use super::stats::{ParseResult, ParseStats};
use super::tokenizer::tokenize;
use crate::Result;
use crate::config::RecapConfig;
use crate::constants::BYTE_ORDER_MARK;

/// Reading-log CSV parser
#[derive(Debug, Clone, Default)]
pub struct BookCsvParser {
    config: RecapConfig,
}

impl BookCsvParser {
    pub fn new(config: RecapConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &RecapConfig {
        &self.config
    }

    /// Parse CSV text into book records in source row order
    ///
    /// Only an unresolvable header is an error. Text without any non-blank
    /// line yields an empty result.
    pub fn parse_str(&self, text: &str) -> Result<ParseResult> {
        let cleaned = normalize_text(text);
        let lines: Vec<&str> = cleaned
            .split('\n')
            .filter(|line| !line.trim().is_empty())
            .collect();

        let mut stats = ParseStats::new();
        let mut records = Vec::new();

        let delimiter = self
            .config
            .delimiter
            .resolve(&cleaned, self.config.delimiter_sample_chars);

        let Some(header_index) = locate_header(&lines, delimiter) else {
            warn!("CSV text contains no non-blank lines");
            return Ok(ParseResult { records, stats });
        };

        stats.delimiter = Some(delimiter);
        stats.preamble_lines = header_index;

        let header = tokenize(lines[header_index], delimiter);
        let mapping = ColumnMapping::resolve(&header)?;
        debug!(
            "Column mapping: title={}, author={}, absent={:?}",
            mapping.title,
            mapping.author,
            mapping.absent_fields()
        );

        for (offset, line) in lines[header_index + 1..].iter().enumerate() {
            stats.total_rows += 1;
            let cells = tokenize(line, delimiter);

            match parse_book_row(&cells, &mapping) {
                RowOutcome::Book(record) => {
                    records.push(record);
                    stats.records_parsed += 1;
                }
                RowOutcome::Empty => stats.empty_rows += 1,
                RowOutcome::TooShort => {
                    stats.short_rows += 1;
                    debug!(
                        "Skipped data row {}: {} cells, need {}",
                        offset + 1,
                        cells.len(),
                        mapping.required_width()
                    );
                }
                RowOutcome::Untitled => stats.untitled_rows += 1,
            }
        }

        info!(
            "Parsed {} books from {} rows ({} skipped, {:.1}% success)",
            stats.records_parsed,
            stats.total_rows,
            stats.rows_skipped(),
            stats.success_rate()
        );

        Ok(ParseResult { records, stats })
    }
}

/// Strip a leading byte-order mark and normalize CRLF/CR line endings to LF
pub fn normalize_text(text: &str) -> String {
    text.strip_prefix(BYTE_ORDER_MARK)
        .unwrap_or(text)
        .replace("\r\n", "\n")
        .replace('\r', "\n")
}
