//! Tests for format classification and the dominant format

use super::{create_series_book, create_test_book};
use crate::app::models::{BookRecord, DominantFormat, FormatCategory};
use crate::app::services::aggregator::formats::*;
use std::collections::BTreeMap;

fn counts(pairs: &[(FormatCategory, usize)]) -> BTreeMap<FormatCategory, usize> {
    pairs.iter().copied().collect()
}

fn standalone(title: &str) -> BookRecord {
    BookRecord {
        format_label: "Único".to_string(),
        ..create_test_book(title, "Autora")
    }
}

#[test]
fn test_series_membership_counts_keys() {
    let books = vec![
        create_series_book("O Nome do Vento", "Crônica do Matador do Rei #1", "Trilogia", 5.0),
        create_series_book("O Temor do Sábio", "Crônica do Matador do Rei Vol. 2", "Trilogia", 4.5),
        create_test_book("Torto Arado", "Itamar"),
    ];

    let membership = series_membership(&books);
    assert_eq!(membership.get("cronica do matador do rei"), Some(&2));
    assert_eq!(membership.get("torto arado"), Some(&1));
}

#[test]
fn test_multi_volume_label_needs_two_completed_volumes() {
    let lonely = vec![create_series_book("Livro 1", "Saga Única", "Trilogia", 4.0)];
    let membership = series_membership(&lonely);
    assert_eq!(classify_record(&lonely[0], &membership), None);

    let pair = vec![
        create_series_book("Livro 1", "Saga Dupla", "Duologia", 4.0),
        create_series_book("Livro 2", "Saga Dupla", "Duologia", 4.0),
    ];
    let membership = series_membership(&pair);
    assert_eq!(
        classify_record(&pair[0], &membership),
        Some(FormatCategory::Duology)
    );
}

#[test]
fn test_standalone_always_counts_and_other_never_does() {
    let books = vec![
        standalone("Torto Arado"),
        BookRecord {
            format_label: "HQ".to_string(),
            ..create_test_book("Persépolis", "Marjane")
        },
    ];
    let membership = series_membership(&books);
    let counts = format_counts(&books, &membership);

    assert_eq!(counts.get(&FormatCategory::Standalone), Some(&1));
    assert_eq!(counts.get(&FormatCategory::Other), None);
}

#[test]
fn test_unlabeled_series_is_inferred() {
    let books = vec![
        create_series_book("Duna", "Duna", "", 5.0),
        create_series_book("O Messias de Duna", "Duna #2", "", 4.0),
    ];
    let membership = series_membership(&books);

    assert_eq!(
        classify_record(&books[0], &membership),
        Some(FormatCategory::SeriesGeneric)
    );
    assert!(is_series_entry(&books[1], &membership));
}

#[test]
fn test_dominant_single_categories() {
    use FormatCategory::*;

    assert_eq!(
        decide_dominant_format(&counts(&[(Duology, 3), (Standalone, 1)])),
        Some(DominantFormat::Duologies)
    );
    assert_eq!(
        decide_dominant_format(&counts(&[(Trilogy, 4), (Standalone, 1)])),
        Some(DominantFormat::Trilogies)
    );
    assert_eq!(
        decide_dominant_format(&counts(&[(Standalone, 5), (Trilogy, 2)])),
        Some(DominantFormat::Standalones)
    );
    assert_eq!(
        decide_dominant_format(&counts(&[(Trilogy, 4), (Saga, 2)])),
        Some(DominantFormat::Series)
    );
    assert_eq!(
        decide_dominant_format(&counts(&[(Saga, 2)])),
        Some(DominantFormat::Series)
    );
    // family total outweighs the trilogy count alone
    assert_eq!(
        decide_dominant_format(&counts(&[(Trilogy, 4), (Duology, 1)])),
        Some(DominantFormat::Series)
    );
}

#[test]
fn test_duology_trilogy_tie_is_balanced() {
    use FormatCategory::*;

    assert_eq!(
        decide_dominant_format(&counts(&[(Duology, 3), (Trilogy, 3)])),
        Some(DominantFormat::Balanced)
    );
}

#[test]
fn test_duology_trilogy_tie_boundaries() {
    use FormatCategory::*;

    // the tie outweighs a smaller standalone count
    assert_eq!(
        decide_dominant_format(&counts(&[(Duology, 2), (Trilogy, 2), (Standalone, 1)])),
        Some(DominantFormat::Balanced)
    );
    assert_eq!(
        decide_dominant_format(&counts(&[(Duology, 2), (Trilogy, 2), (Standalone, 2)])),
        Some(DominantFormat::Balanced)
    );

    // a larger standalone or remaining-family count falls through to the family rule
    assert_eq!(
        decide_dominant_format(&counts(&[(Duology, 2), (Trilogy, 2), (Standalone, 3)])),
        Some(DominantFormat::Series)
    );
    assert_eq!(
        decide_dominant_format(&counts(&[(Duology, 2), (Trilogy, 2), (Saga, 3)])),
        Some(DominantFormat::Series)
    );
}

#[test]
fn test_standalone_and_family_tie_is_balanced() {
    use FormatCategory::*;

    assert_eq!(
        decide_dominant_format(&counts(&[(Standalone, 3), (Duology, 3)])),
        Some(DominantFormat::Balanced)
    );
}

#[test]
fn test_no_dominant_format_without_counts() {
    assert_eq!(decide_dominant_format(&BTreeMap::new()), None);
    assert_eq!(
        decide_dominant_format(&counts(&[(FormatCategory::Other, 4)])),
        None
    );
}

#[test]
fn test_best_series_uses_display_name() {
    let books = vec![
        create_series_book("O Nome do Vento", "A Crônica do Matador do Rei #1", "Trilogia", 5.0),
        create_series_book("O Temor do Sábio", "A Crônica do Matador do Rei #2", "Trilogia", 4.0),
        create_series_book("Duna", "Duna Vol. 1", "Saga", 4.0),
        create_series_book("O Messias de Duna", "Duna Vol. 2", "Saga", 4.0),
        create_series_book("Sozinho", "Série Solitária", "Série", 5.0),
    ];
    let membership = series_membership(&books);
    let best = best_series(&books, &membership).unwrap();

    assert_eq!(best.name, "A Crônica do Matador do Rei");
    assert_eq!(best.average, 4.5);
    assert_eq!(best.count, 2);
}

#[test]
fn test_best_series_none_without_series() {
    let books = vec![standalone("Torto Arado")];
    let membership = series_membership(&books);
    assert_eq!(best_series(&books, &membership), None);
}

#[test]
fn test_format_chart_labels_in_display_order() {
    use FormatCategory::*;

    let chart = format_chart(&counts(&[(SeriesGeneric, 2), (Standalone, 4), (Duology, 0)]));
    let labels: Vec<(&str, usize)> = chart.iter().map(|e| (e.label.as_str(), e.count)).collect();
    assert_eq!(labels, vec![("Livros únicos", 4), ("Séries", 2)]);
}
