//! Summary computation over a record sequence

use super::formats::{best_series, decide_dominant_format, format_chart, format_counts, series_membership};
use super::rankings::{RankingCounter, RatingAccumulator};
use crate::app::models::{BookRecord, Rating, RatingBucket, StatsSummary};
use crate::config::RecapConfig;
use std::collections::BTreeMap;
use tracing::{debug, info};

/// Compute every aggregate for `records`
///
/// Pure and deterministic; record order only matters for tie-breaking and for
/// the order of the favorites, abandoned and highlights lists.
pub fn compute_stats(records: &[BookRecord], config: &RecapConfig) -> StatsSummary {
    let completed: Vec<&BookRecord> = records.iter().filter(|r| r.is_completed()).collect();
    let rated: Vec<(&BookRecord, Rating)> = completed
        .iter()
        .filter_map(|record| record.rating.map(|rating| (*record, rating)))
        .collect();

    // Pages
    let known_pages: Vec<u64> = completed
        .iter()
        .filter_map(|record| record.page_count)
        .map(u64::from)
        .collect();
    let total_pages: u64 = known_pages.iter().sum();
    let average_pages =
        (!known_pages.is_empty()).then(|| total_pages as f64 / known_pages.len() as f64);

    // Ratings
    let rating_average = (!rated.is_empty()).then(|| {
        rated.iter().map(|(_, rating)| rating.value()).sum::<f64>() / rated.len() as f64
    });
    let rating_max = rated.iter().map(|(_, rating)| *rating).max();
    let rating_min = rated.iter().map(|(_, rating)| *rating).min();
    let rating_histogram = rating_histogram(rated.iter().map(|(_, rating)| *rating));

    // Authors and publishers
    let mut authors = RankingCounter::new();
    let mut publishers = RankingCounter::new();
    for record in &completed {
        authors.add(&record.author);
        publishers.add(&record.publisher);
    }
    debug!(
        "{} distinct authors, {} distinct publishers",
        authors.len(),
        publishers.len()
    );
    let author_ranking = authors.top(config.ranking_size);
    let publisher_ranking = publishers.top(config.ranking_size);
    let top_publisher = publisher_ranking.first().map(|entry| entry.name.clone());

    let mut author_ratings = RatingAccumulator::new();
    for (record, rating) in &rated {
        author_ratings.add_named(&record.author, *rating);
    }

    // Series and formats
    let series_membership = series_membership(completed.iter().copied());
    let format_counts = format_counts(completed.iter().copied(), &series_membership);
    let dominant_format = decide_dominant_format(&format_counts);
    let best_series = best_series(completed.iter().copied(), &series_membership);
    let format_chart = format_chart(&format_counts);
    debug!(
        "Format counts: {:?}, dominant: {:?}",
        format_counts, dominant_format
    );

    // Lists
    let favorites: Vec<BookRecord> = records.iter().filter(|r| r.is_favorite).cloned().collect();
    let abandoned: Vec<BookRecord> = records.iter().filter(|r| r.did_not_finish).cloned().collect();

    let mut highlights: Vec<(&BookRecord, Rating)> = rated.clone();
    highlights.sort_by(|a, b| b.1.cmp(&a.1));
    let highlights: Vec<BookRecord> = highlights
        .into_iter()
        .take(config.highlight_count)
        .map(|(record, _)| record.clone())
        .collect();

    info!(
        "Summarized {} books: {} completed, {} abandoned, {} favorites",
        records.len(),
        completed.len(),
        abandoned.len(),
        favorites.len()
    );

    StatsSummary {
        completed_count: completed.len(),
        total_pages,
        average_pages,
        rating_average,
        rating_max,
        rating_min,
        rating_histogram,
        author_ranking,
        publisher_ranking,
        top_publisher,
        best_author: author_ratings.best(),
        series_membership,
        format_counts,
        dominant_format,
        best_series,
        format_chart,
        favorites,
        abandoned,
        highlights,
    }
}

/// Count ratings per value, ascending by rating
fn rating_histogram(ratings: impl Iterator<Item = Rating>) -> Vec<RatingBucket> {
    let mut buckets: BTreeMap<Rating, usize> = BTreeMap::new();
    for rating in ratings {
        *buckets.entry(rating).or_insert(0) += 1;
    }

    buckets
        .into_iter()
        .map(|(rating, count)| RatingBucket { rating, count })
        .collect()
}
