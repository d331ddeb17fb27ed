//! Tests for ranking counters and rating accumulators

use crate::app::models::RankingEntry;
use crate::app::services::aggregator::rankings::{RankingCounter, RatingAccumulator};
use crate::app::services::aggregator::tests::stars;
use pretty_assertions::assert_eq;

fn entry(name: &str, count: usize) -> RankingEntry {
    RankingEntry {
        name: name.to_string(),
        count,
    }
}

#[test]
fn test_counter_orders_by_count_then_first_seen() {
    let mut counter = RankingCounter::new();
    for name in ["Rocco", "Aleph", "Todavia", "Aleph", "Rocco", "Intrínseca"] {
        counter.add(name);
    }

    assert_eq!(
        counter.top(5),
        vec![
            entry("Rocco", 2),
            entry("Aleph", 2),
            entry("Todavia", 1),
            entry("Intrínseca", 1),
        ]
    );
    assert_eq!(counter.top(1), vec![entry("Rocco", 2)]);
}

#[test]
fn test_counter_groups_spelling_variants() {
    let mut counter = RankingCounter::new();
    counter.add("Conceição Evaristo");
    counter.add("conceicao  evaristo ");
    counter.add("CONCEIÇÃO EVARISTO");

    assert_eq!(counter.len(), 1);
    assert_eq!(counter.top(5), vec![entry("Conceição Evaristo", 3)]);
}

#[test]
fn test_counter_ignores_blank_names() {
    let mut counter = RankingCounter::new();
    counter.add("");
    counter.add("   ");
    assert!(counter.is_empty());
}

#[test]
fn test_best_prefers_higher_average() {
    let mut accumulator = RatingAccumulator::new();
    accumulator.add_named("Ana", stars(4.0).unwrap());
    accumulator.add_named("Bia", stars(5.0).unwrap());
    accumulator.add_named("Ana", stars(5.0).unwrap());

    let best = accumulator.best().unwrap();
    assert_eq!(best.name, "Bia");
    assert_eq!(best.average, 5.0);
    assert_eq!(best.count, 1);
}

#[test]
fn test_best_breaks_ties_by_count_then_order() {
    let mut accumulator = RatingAccumulator::new();
    accumulator.add_named("Ana", stars(4.0).unwrap());
    accumulator.add_named("Bia", stars(4.0).unwrap());
    accumulator.add_named("Bia", stars(4.0).unwrap());
    assert_eq!(accumulator.best().unwrap().name, "Bia");

    let mut accumulator = RatingAccumulator::new();
    accumulator.add_named("Ana", stars(3.5).unwrap());
    accumulator.add_named("Bia", stars(3.5).unwrap());
    assert_eq!(accumulator.best().unwrap().name, "Ana");
}

#[test]
fn test_average_is_exact_for_half_stars() {
    let mut accumulator = RatingAccumulator::new();
    accumulator.add_named("Ana", stars(4.5).unwrap());
    accumulator.add_named("Ana", stars(3.0).unwrap());
    accumulator.add_named("Ana", stars(4.0).unwrap());

    let best = accumulator.best().unwrap();
    assert!((best.average - 23.0 / 6.0).abs() < 1e-12);
    assert_eq!(best.count, 3);
}

#[test]
fn test_empty_accumulator_has_no_best() {
    let accumulator = RatingAccumulator::new();
    assert!(accumulator.is_empty());
    assert_eq!(accumulator.best(), None);
}

#[test]
fn test_display_name_is_first_seen() {
    let mut accumulator = RatingAccumulator::new();
    accumulator.add("duna", || "Duna".to_string(), stars(5.0).unwrap());
    accumulator.add("duna", || "DUNA Vol. 2".to_string(), stars(4.0).unwrap());

    let best = accumulator.best().unwrap();
    assert_eq!(best.name, "Duna");
    assert_eq!(best.count, 2);
}
