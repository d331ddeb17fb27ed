//! Reading session state
//!
//! The session owns the current records, the active filter and the summary
//! derived from them. The pipeline itself stays a pure function of its input
//! ([`ingest`]); the session only decides when to replace its state.

use crate::app::models::{BookRecord, StatsSummary};
use crate::app::services::aggregator::compute_stats;
use crate::app::services::csv_reader::{BookCsvParser, ParseStats};
use crate::app::services::filter::RecordFilter;
use crate::config::RecapConfig;
use crate::Result;
use std::collections::BTreeSet;
use tracing::{info, warn};

/// Records and summary produced from one CSV text
#[derive(Debug, Clone)]
pub struct Ingested {
    pub records: Vec<BookRecord>,
    pub summary: StatsSummary,
    pub stats: ParseStats,
}

/// Parse and summarize CSV text without touching any state
pub fn ingest(text: &str, config: &RecapConfig) -> Result<Ingested> {
    let parsed = BookCsvParser::new(config.clone()).parse_str(text)?;
    let summary = compute_stats(&parsed.records, config);

    Ok(Ingested {
        records: parsed.records,
        summary,
        stats: parsed.stats,
    })
}

/// What an ingest did to the session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IngestOutcome {
    /// Session state replaced with this many records
    Loaded { count: usize },
    /// No valid records; previous state kept
    Empty,
}

/// Application state for one reader's recap
#[derive(Debug, Clone, Default)]
pub struct ReadingSession {
    config: RecapConfig,
    records: Vec<BookRecord>,
    filter: RecordFilter,
    summary: Option<StatsSummary>,
    parse_stats: Option<ParseStats>,
}

impl ReadingSession {
    pub fn new(config: RecapConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    /// Replace the session contents with the books in `text`
    ///
    /// On a schema error or when no valid record is found the previous
    /// records, filter and summary are kept. A successful ingest clears the
    /// filter.
    pub fn ingest(&mut self, text: &str) -> Result<IngestOutcome> {
        let ingested = ingest(text, &self.config)?;

        if ingested.records.is_empty() {
            warn!("No valid books found, keeping the previous data");
            return Ok(IngestOutcome::Empty);
        }

        let count = ingested.records.len();
        self.records = ingested.records;
        self.filter = RecordFilter::default();
        self.summary = Some(ingested.summary);
        self.parse_stats = Some(ingested.stats);

        info!("Session loaded {} books", count);
        Ok(IngestOutcome::Loaded { count })
    }

    /// Recompute the summary over the records that pass `filter`
    pub fn apply_filter(&mut self, filter: RecordFilter) -> &StatsSummary {
        let filtered = filter.apply(&self.records);
        self.filter = filter;
        self.summary.insert(compute_stats(&filtered, &self.config))
    }

    /// Drop the filter and summarize every record again
    pub fn clear_filter(&mut self) -> &StatsSummary {
        self.apply_filter(RecordFilter::default())
    }

    /// Records that pass the active filter
    pub fn filtered_records(&self) -> Vec<BookRecord> {
        self.filter.apply(&self.records)
    }

    /// Distinct reading years among the loaded records, ascending
    pub fn available_years(&self) -> Vec<i32> {
        self.records
            .iter()
            .filter_map(|record| record.year)
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    pub fn records(&self) -> &[BookRecord] {
        &self.records
    }

    pub fn filter(&self) -> &RecordFilter {
        &self.filter
    }

    /// Summary for the active filter, `None` before the first successful ingest
    pub fn summary(&self) -> Option<&StatsSummary> {
        self.summary.as_ref()
    }

    pub fn parse_stats(&self) -> Option<&ParseStats> {
        self.parse_stats.as_ref()
    }

    pub fn config(&self) -> &RecapConfig {
        &self.config
    }

    pub fn is_loaded(&self) -> bool {
        !self.records.is_empty()
    }
}
