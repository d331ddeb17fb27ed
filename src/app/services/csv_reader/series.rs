//! Series-name canonicalization
//!
//! Volume markers are removed by an ordered list of named rules, each applied
//! once per pass. Passes repeat until the text stops changing, which makes
//! both [`canonical_series_key`] and [`series_display_name`] idempotent.

use super::field_parsers::comparison_key;
use once_cell::sync::Lazy;
use regex::Regex;

/// Characters trimmed from the end of a name once markers are removed
const TRAILING_SEPARATORS: &[char] = &['-', '–', '—', ':', ',', ';', '/', '|'];

/// A single (pattern, replacement) substitution
#[derive(Debug)]
pub struct SeriesRule {
    pub name: &'static str,
    pattern: Regex,
    replacement: &'static str,
}

impl SeriesRule {
    fn new(name: &'static str, pattern: &str, replacement: &'static str) -> Self {
        Self {
            name,
            pattern: Regex::new(pattern).expect("Invalid regex: series rule"),
            replacement,
        }
    }

    /// Apply this rule to every match in `text`
    pub fn apply(&self, text: &str) -> String {
        self.pattern.replace_all(text, self.replacement).into_owned()
    }
}

static SERIES_RULES: Lazy<Vec<SeriesRule>> = Lazy::new(|| {
    vec![
        // "Volume 3", "volume3"
        SeriesRule::new("volume-word", r"(?i)volume\s*\d+", ""),
        // "Vol. 3", "vol 3", "vol3"
        SeriesRule::new("volume-abbreviation", r"(?i)vol\.?\s*\d+", ""),
        // "#3", "# 3"
        SeriesRule::new("hash-number", r"#\s*\d+", ""),
        // "Name - 3", "Name – 3"
        SeriesRule::new("trailing-dash-number", r"[-–—]\s*\d+\s*$", ""),
        // dangling dash left behind by an earlier rule
        SeriesRule::new("trailing-dash", r"[-–—]\s*$", ""),
    ]
});

/// The ordered canonicalization rules
pub fn series_rules() -> &'static [SeriesRule] {
    &SERIES_RULES
}

/// One pass: every rule in order, then trailing separators and whitespace
fn strip_volume_markers(text: &str) -> String {
    let stripped = series_rules()
        .iter()
        .fold(text.to_string(), |acc, rule| rule.apply(&acc));

    stripped
        .trim_end_matches(|c: char| c.is_whitespace() || TRAILING_SEPARATORS.contains(&c))
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

fn strip_until_stable(mut text: String) -> String {
    loop {
        let next = strip_volume_markers(&text);
        // every change shortens the text, so this terminates
        if next == text {
            return text;
        }
        text = next;
    }
}

/// Grouping key for a series name: folded, volume markers removed
///
/// `canonical_series_key("Trilogy Name Vol. 2") == canonical_series_key("Trilogy Name - 3")`
pub fn canonical_series_key(name: &str) -> String {
    if name.trim().is_empty() {
        return String::new();
    }
    strip_until_stable(comparison_key(name))
}

/// Series name for display: volume markers removed, original case kept
pub fn series_display_name(name: &str) -> String {
    let collapsed = name.split_whitespace().collect::<Vec<_>>().join(" ");
    strip_until_stable(collapsed)
}
