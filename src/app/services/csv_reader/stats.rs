//! Parsing statistics and result structures for reading-log CSV processing

use crate::app::models::BookRecord;
use serde::{Deserialize, Serialize};

/// Parsing result with records and basic statistics
#[derive(Debug, Clone)]
pub struct ParseResult {
    /// Book records in source row order
    pub records: Vec<BookRecord>,

    /// Basic parsing statistics
    pub stats: ParseStats,
}

impl ParseResult {
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

/// Row-level counters collected while building records
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParseStats {
    /// Non-blank lines above the header row
    pub preamble_lines: usize,

    /// Non-blank data lines after the header row
    pub total_rows: usize,

    /// Rows turned into book records
    pub records_parsed: usize,

    /// Rows whose cells were all empty
    pub empty_rows: usize,

    /// Rows too short to reach the title and author columns
    pub short_rows: usize,

    /// Rows dropped for an empty title
    pub untitled_rows: usize,

    /// Delimiter used to split the text
    pub delimiter: Option<char>,
}

impl ParseStats {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rows that produced no record
    pub fn rows_skipped(&self) -> usize {
        self.empty_rows + self.short_rows + self.untitled_rows
    }

    /// Percentage of data rows that became records
    pub fn success_rate(&self) -> f64 {
        if self.total_rows == 0 {
            0.0
        } else {
            (self.records_parsed as f64 / self.total_rows as f64) * 100.0
        }
    }
}
