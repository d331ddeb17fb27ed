//! Command-line argument definitions for the reading recap
//!
//! This module defines the CLI interface using the clap derive API.

use crate::app::services::filter::RecordFilter;
use crate::config::{DelimiterPolicy, RecapConfig};
use crate::constants::MAX_RATING;
use crate::{Error, Result};
use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// CLI arguments for the reading recap
///
/// Reads the CSV export of a reading-log spreadsheet and prints a summary of
/// the books read: totals, ratings, rankings and reading formats.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "reading-recap",
    version,
    about = "Summarize a reading-log spreadsheet (CSV export) into reading statistics",
    long_about = "Reads the CSV export of a personal reading log and prints year-in-review \
                  statistics: books and pages read, rating distribution, favorite authors and \
                  publishers, abandoned books and the reading format that prevails. Column \
                  names may be in Portuguese or English and in any order."
)]
pub struct Args {
    /// Path to the reading-log CSV file
    #[arg(value_name = "CSV_PATH")]
    pub csv_path: PathBuf,

    /// Field delimiter
    ///
    /// `auto` compares comma and semicolon counts in the start of the file.
    #[arg(
        short = 'd',
        long = "delimiter",
        value_name = "DELIMITER",
        help = "Field delimiter: auto, comma, semicolon or tab"
    )]
    pub delimiter: Option<DelimiterPolicy>,

    /// Number of entries in the author and publisher rankings
    #[arg(long = "top", value_name = "N", help = "Entries in author and publisher rankings")]
    pub top: Option<usize>,

    /// Number of top-rated books to highlight
    #[arg(long = "highlights", value_name = "K", help = "Number of highlighted books")]
    pub highlights: Option<usize>,

    /// Only include books read in this year
    #[arg(long = "year", value_name = "YEAR")]
    pub year: Option<i32>,

    /// Only include authors whose name contains this text
    #[arg(long = "author", value_name = "TEXT")]
    pub author: Option<String>,

    /// Only include publishers whose name contains this text
    #[arg(long = "publisher", value_name = "TEXT")]
    pub publisher: Option<String>,

    /// Lowest rating to include (unrated books are always included)
    #[arg(long = "min-rating", value_name = "RATING")]
    pub min_rating: Option<f64>,

    /// Highest rating to include (unrated books are always included)
    #[arg(long = "max-rating", value_name = "RATING")]
    pub max_rating: Option<f64>,

    /// Output format for the report
    #[arg(
        short = 'f',
        long = "format",
        value_enum,
        default_value = "human",
        help = "Output format for the report"
    )]
    pub output_format: OutputFormat,

    /// Path to a JSON configuration file
    ///
    /// Command-line flags override values from the file.
    #[arg(
        short = 'c',
        long = "config",
        value_name = "FILE",
        help = "Path to configuration file (JSON format)"
    )]
    pub config_file: Option<PathBuf>,

    /// Logging verbosity level
    #[arg(
        short = 'v',
        long = "verbose",
        action = clap::ArgAction::Count,
        help = "Increase logging verbosity (-v: info, -vv: debug, -vvv: trace)"
    )]
    pub verbose: u8,

    /// Only show errors
    #[arg(
        short = 'q',
        long = "quiet",
        help = "Suppress output except errors",
        conflicts_with = "verbose"
    )]
    pub quiet: bool,
}

/// Output format options for the report
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable output
    Human,
    /// JSON format for scripting
    Json,
    /// CSV format for spreadsheets
    Csv,
}

impl Args {
    /// Validate the arguments for consistency
    pub fn validate(&self) -> Result<()> {
        for (flag, value) in [("--min-rating", self.min_rating), ("--max-rating", self.max_rating)] {
            if let Some(rating) = value {
                if !(0.0..=MAX_RATING).contains(&rating) {
                    return Err(Error::configuration(format!(
                        "{} must lie between 0 and {}, got {}",
                        flag, MAX_RATING, rating
                    )));
                }
            }
        }

        if let (Some(min), Some(max)) = (self.min_rating, self.max_rating) {
            if min > max {
                return Err(Error::configuration(format!(
                    "--min-rating ({}) cannot exceed --max-rating ({})",
                    min, max
                )));
            }
        }

        if self.top == Some(0) {
            return Err(Error::configuration("--top must be greater than 0"));
        }

        Ok(())
    }

    /// Apply command-line overrides on top of a loaded configuration
    pub fn apply_overrides(&self, mut config: RecapConfig) -> RecapConfig {
        if let Some(delimiter) = self.delimiter {
            config = config.with_delimiter(delimiter);
        }
        if let Some(top) = self.top {
            config = config.with_ranking_size(top);
        }
        if let Some(highlights) = self.highlights {
            config = config.with_highlight_count(highlights);
        }
        config
    }

    /// Record filter described by the filter flags
    pub fn record_filter(&self) -> RecordFilter {
        let mut filter = RecordFilter::new().with_rating_range(self.min_rating, self.max_rating);
        if let Some(year) = self.year {
            filter = filter.with_year(year);
        }
        if let Some(author) = &self.author {
            filter = filter.with_author(author.clone());
        }
        if let Some(publisher) = &self.publisher {
            filter = filter.with_publisher(publisher.clone());
        }
        filter
    }

    /// Determine the appropriate log level based on verbosity flags
    pub fn get_log_level(&self) -> &'static str {
        if self.quiet {
            "error"
        } else {
            match self.verbose {
                0 => "warn",
                1 => "info",
                2 => "debug",
                _ => "trace",
            }
        }
    }
}
