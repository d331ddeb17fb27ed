//! Reading-format aggregates
//!
//! A format label only counts toward a multi-volume category when the reader
//! actually finished at least two books of that series. Labels the categorizer
//! cannot place ("other") never count.

use super::rankings::RatingAccumulator;
use crate::app::models::{BookRecord, ChartEntry, DominantFormat, FormatCategory, RatedGroup};
use crate::app::services::csv_reader::field_parsers::categorize_format;
use crate::app::services::csv_reader::series_display_name;
use crate::constants::MIN_SERIES_VOLUMES;
use std::collections::BTreeMap;
use tracing::debug;

/// Completed books per non-empty series key
pub fn series_membership<'a, I>(completed: I) -> BTreeMap<String, usize>
where
    I: IntoIterator<Item = &'a BookRecord>,
{
    let mut membership = BTreeMap::new();
    for record in completed {
        if !record.series_key.is_empty() {
            *membership.entry(record.series_key.clone()).or_insert(0) += 1;
        }
    }
    membership
}

/// Whether the record's series has enough completed volumes to be a real series
fn has_multiple_volumes(record: &BookRecord, membership: &BTreeMap<String, usize>) -> bool {
    !record.series_key.is_empty()
        && membership.get(&record.series_key).copied().unwrap_or(0) >= MIN_SERIES_VOLUMES
}

/// Format category a completed record contributes to, if any
///
/// - standalone labels always count;
/// - multi-volume labels count only for a real series;
/// - an unlabeled book in a real series counts as a generic series.
pub fn classify_record(
    record: &BookRecord,
    membership: &BTreeMap<String, usize>,
) -> Option<FormatCategory> {
    let multi_volume = has_multiple_volumes(record, membership);

    match categorize_format(&record.format_label) {
        Some(FormatCategory::Standalone) => Some(FormatCategory::Standalone),
        Some(category) if category.is_multi_volume() && multi_volume => Some(category),
        None if multi_volume => Some(FormatCategory::SeriesGeneric),
        _ => None,
    }
}

/// Whether a completed record counts as an entry of a multi-volume series
pub fn is_series_entry(record: &BookRecord, membership: &BTreeMap<String, usize>) -> bool {
    classify_record(record, membership).is_some_and(FormatCategory::is_multi_volume)
}

/// Count completed records per contributing format category
pub fn format_counts<'a, I>(
    completed: I,
    membership: &BTreeMap<String, usize>,
) -> BTreeMap<FormatCategory, usize>
where
    I: IntoIterator<Item = &'a BookRecord>,
{
    let mut counts = BTreeMap::new();
    for record in completed {
        if let Some(category) = classify_record(record, membership) {
            *counts.entry(category).or_insert(0) += 1;
        }
    }
    counts
}

/// Decide which reading format prevails
///
/// Rules are tried in order and the first match wins. `family` is the sum of
/// every multi-volume category and `top` the largest of standalone, duology,
/// trilogy and family. When duology and trilogy tie at the top of the
/// multi-volume counts, the single-category rules are skipped and the result
/// comes from tie detection over the raw counts.
pub fn decide_dominant_format(counts: &BTreeMap<FormatCategory, usize>) -> Option<DominantFormat> {
    let count = |category: FormatCategory| counts.get(&category).copied().unwrap_or(0);

    let standalone = count(FormatCategory::Standalone);
    let duology = count(FormatCategory::Duology);
    let trilogy = count(FormatCategory::Trilogy);
    let tetralogy = count(FormatCategory::Tetralogy);
    let saga = count(FormatCategory::Saga);
    let series = count(FormatCategory::SeriesGeneric);

    let family = duology + trilogy + tetralogy + saga + series;
    if standalone + family == 0 {
        return None;
    }
    let top = standalone.max(duology).max(trilogy).max(family);

    if duology == top
        && duology > 0
        && duology > trilogy
        && duology > standalone
        && duology > family - duology
    {
        return Some(DominantFormat::Duologies);
    }

    if trilogy == top
        && trilogy > 0
        && trilogy > duology
        && trilogy > standalone
        && trilogy > family - trilogy
    {
        return Some(DominantFormat::Trilogies);
    }

    let duology_trilogy_tie = duology == trilogy
        && duology > 0
        && duology >= standalone
        && duology >= family - duology - trilogy;

    if !duology_trilogy_tie {
        if standalone == top && standalone > family {
            return Some(DominantFormat::Standalones);
        }
        if family == top && family > 0 && family > standalone {
            return Some(DominantFormat::Series);
        }
    }

    let raw = [standalone, duology, trilogy, tetralogy, saga, series];
    let max = raw.iter().copied().max().unwrap_or(0);
    let ties = raw.iter().filter(|&&c| c == max && c > 0).count();
    debug!("No single dominant format, {} categories tied at {}", ties, max);

    (ties > 1).then_some(DominantFormat::Balanced)
}

/// Display name for a series: the cleaned series name, else the cleaned title, else the key
fn series_label(record: &BookRecord) -> String {
    [record.series_raw_name.as_str(), record.title.as_str()]
        .into_iter()
        .map(series_display_name)
        .find(|name| !name.is_empty())
        .unwrap_or_else(|| record.series_key.clone())
}

/// Best-rated multi-volume series among completed, rated records
pub fn best_series<'a, I>(completed: I, membership: &BTreeMap<String, usize>) -> Option<RatedGroup>
where
    I: IntoIterator<Item = &'a BookRecord>,
{
    let mut accumulator = RatingAccumulator::new();
    for record in completed {
        let Some(rating) = record.completed_rating() else {
            continue;
        };
        if is_series_entry(record, membership) {
            accumulator.add(&record.series_key, || series_label(record), rating);
        }
    }
    accumulator.best()
}

/// Chart data for non-zero format counts, in category display order
pub fn format_chart(counts: &BTreeMap<FormatCategory, usize>) -> Vec<ChartEntry> {
    FormatCategory::all_values()
        .into_iter()
        .filter_map(|category| {
            let count = counts.get(&category).copied().unwrap_or(0);
            (count > 0).then(|| ChartEntry {
                label: category.chart_label().to_string(),
                count,
            })
        })
        .collect()
}
