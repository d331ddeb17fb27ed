//! Ranking primitives shared by the author, publisher and series aggregates
//!
//! Names are grouped by their folded comparison key, so "Conceição Evaristo"
//! and "conceicao evaristo" count together. The spelling seen first is the one
//! displayed, and ties always resolve to first-seen order.

use crate::app::models::{RankingEntry, RatedGroup, Rating};
use crate::app::services::csv_reader::field_parsers::comparison_key;
use std::cmp::Ordering;
use std::collections::HashMap;

/// Occurrence counter that remembers first-seen order and spelling
#[derive(Debug, Clone, Default)]
pub struct RankingCounter {
    positions: HashMap<String, usize>,
    entries: Vec<RankingEntry>,
}

impl RankingCounter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Count one occurrence of `name`; blank names are ignored
    pub fn add(&mut self, name: &str) {
        let key = comparison_key(name);
        if key.is_empty() {
            return;
        }

        match self.positions.get(&key) {
            Some(&position) => self.entries[position].count += 1,
            None => {
                self.positions.insert(key, self.entries.len());
                self.entries.push(RankingEntry {
                    name: name.trim().to_string(),
                    count: 1,
                });
            }
        }
    }

    /// Number of distinct names
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The `n` most frequent names, descending by count, ties in first-seen order
    pub fn top(&self, n: usize) -> Vec<RankingEntry> {
        let mut ranked = self.entries.clone();
        // sort_by is stable, which keeps first-seen order among equal counts
        ranked.sort_by(|a, b| b.count.cmp(&a.count));
        ranked.truncate(n);
        ranked
    }
}

#[derive(Debug, Clone)]
struct RatingTally {
    name: String,
    half_star_sum: u64,
    count: usize,
}

impl RatingTally {
    fn average(&self) -> f64 {
        self.half_star_sum as f64 / 2.0 / self.count as f64
    }

    /// Compare mean ratings exactly, without going through floats
    fn cmp_average(&self, other: &RatingTally) -> Ordering {
        let lhs = u128::from(self.half_star_sum) * other.count as u128;
        let rhs = u128::from(other.half_star_sum) * self.count as u128;
        lhs.cmp(&rhs)
    }

    /// Higher mean wins, then the larger sample
    fn beats(&self, other: &RatingTally) -> bool {
        match self.cmp_average(other) {
            Ordering::Greater => true,
            Ordering::Less => false,
            Ordering::Equal => self.count > other.count,
        }
    }
}

/// Mean-rating accumulator over named groups
#[derive(Debug, Clone, Default)]
pub struct RatingAccumulator {
    positions: HashMap<String, usize>,
    tallies: Vec<RatingTally>,
}

impl RatingAccumulator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a rating to the group identified by `key`
    ///
    /// `display_name` is only called the first time a key is seen.
    pub fn add<F>(&mut self, key: &str, display_name: F, rating: Rating)
    where
        F: FnOnce() -> String,
    {
        if key.is_empty() {
            return;
        }

        let position = match self.positions.get(key) {
            Some(&position) => position,
            None => {
                self.positions.insert(key.to_string(), self.tallies.len());
                self.tallies.push(RatingTally {
                    name: display_name(),
                    half_star_sum: 0,
                    count: 0,
                });
                self.tallies.len() - 1
            }
        };

        let tally = &mut self.tallies[position];
        tally.half_star_sum += u64::from(rating.half_stars());
        tally.count += 1;
    }

    /// Add a rating to a group keyed by the folded form of `name`
    pub fn add_named(&mut self, name: &str, rating: Rating) {
        let key = comparison_key(name);
        self.add(&key, || name.trim().to_string(), rating);
    }

    pub fn is_empty(&self) -> bool {
        self.tallies.is_empty()
    }

    /// Group with the highest mean; equal means go to the larger sample, then
    /// to the group seen first
    pub fn best(&self) -> Option<RatedGroup> {
        let mut best: Option<&RatingTally> = None;
        for tally in &self.tallies {
            if best.is_none_or(|current| tally.beats(current)) {
                best = Some(tally);
            }
        }

        best.map(|tally| RatedGroup {
            name: tally.name.clone(),
            average: tally.average(),
            count: tally.count,
        })
    }
}
