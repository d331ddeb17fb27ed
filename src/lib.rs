//! Reading Recap Library
//!
//! A Rust library for turning the CSV export of a personal reading log into
//! typed book records and a yearly reading summary.
//!
//! This library provides tools for:
//! - Tokenizing comma- or semicolon-delimited spreadsheet exports
//! - Resolving header synonyms (Portuguese and English) to semantic fields
//! - Normalizing numbers, star ratings, favorite flags and series names
//! - Aggregating totals, rankings, rating distribution and reading formats
//! - Filtering by year, author, publisher and rating range

pub mod config;
pub mod constants;
pub mod error;

// Core application modules
pub mod app {
    pub mod models;
    pub mod session;
    pub mod services {
        pub mod aggregator;
        pub mod csv_reader;
        pub mod filter;
    }
}

// CLI modules
pub mod cli {
    pub mod args;
    pub mod commands;
    pub mod report;
}

// Re-export commonly used types
pub use app::models::{BookRecord, Rating, StatsSummary};
pub use app::session::{IngestOutcome, ReadingSession};
pub use config::RecapConfig;
pub use error::{Error, Result};
