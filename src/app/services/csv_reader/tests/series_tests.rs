//! Tests for series-name canonicalization

use crate::app::services::csv_reader::series::{
    canonical_series_key, series_display_name, series_rules,
};

#[test]
fn test_volume_markers_share_a_key() {
    let expected = canonical_series_key("Trilogy Name");
    assert_eq!(expected, "trilogy name");
    assert_eq!(canonical_series_key("Trilogy Name Vol. 2"), expected);
    assert_eq!(canonical_series_key("Trilogy Name - 3"), expected);
    assert_eq!(canonical_series_key("Trilogy Name #1"), expected);
    assert_eq!(canonical_series_key("trilogy  name, volume 4"), expected);
    assert_eq!(canonical_series_key("TRILOGY NAME – 2"), expected);
}

#[test]
fn test_key_folds_accents() {
    assert_eq!(
        canonical_series_key("A Crônica do Matador do Rei #2"),
        "a cronica do matador do rei"
    );
}

#[test]
fn test_blank_name_has_empty_key() {
    assert_eq!(canonical_series_key(""), "");
    assert_eq!(canonical_series_key("   "), "");
}

#[test]
fn test_canonicalization_is_idempotent() {
    let samples = [
        "Trilogy Name Vol. 2",
        "Foo - 2 - 3",
        "Saga #1 - 2",
        "Duna",
        "Vol. 3",
        "Série – ",
        "As Crônicas de Nárnia volume 7",
    ];

    for sample in samples {
        let once = canonical_series_key(sample);
        assert_eq!(canonical_series_key(&once), once, "sample: {:?}", sample);

        let display = series_display_name(sample);
        assert_eq!(series_display_name(&display), display, "sample: {:?}", sample);
    }
}

#[test]
fn test_repeated_trailing_numbers_are_all_removed() {
    assert_eq!(canonical_series_key("Foo - 2 - 3"), "foo");
}

#[test]
fn test_display_name_keeps_case() {
    assert_eq!(
        series_display_name("A Crônica do Matador do Rei #2"),
        "A Crônica do Matador do Rei"
    );
    assert_eq!(series_display_name("Duna  Vol. 1"), "Duna");
}

#[test]
fn test_rules_are_ordered_and_named() {
    let names: Vec<&str> = series_rules().iter().map(|rule| rule.name).collect();
    assert_eq!(
        names,
        vec![
            "volume-word",
            "volume-abbreviation",
            "hash-number",
            "trailing-dash-number",
            "trailing-dash",
        ]
    );
}

#[test]
fn test_each_rule_in_isolation() {
    let rules = series_rules();
    assert_eq!(rules[0].apply("Saga Volume 3"), "Saga ");
    assert_eq!(rules[1].apply("Saga vol.3"), "Saga ");
    assert_eq!(rules[2].apply("Saga # 3"), "Saga ");
    assert_eq!(rules[3].apply("Saga - 3 "), "Saga ");
    assert_eq!(rules[4].apply("Saga -"), "Saga ");
}
