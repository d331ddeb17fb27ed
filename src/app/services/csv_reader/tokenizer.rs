//! Line tokenizer for reading-log CSV text
//!
//! Deliberately permissive: malformed quoting never fails, it degrades to a
//! best-effort split.

use crate::constants::{COMMA, SEMICOLON};
use tracing::debug;

/// Split one line into trimmed fields on `delimiter`, honoring double quotes
///
/// Inside a quoted span `""` decodes to a literal quote and the delimiter is
/// ordinary text. An unterminated quote is closed at end of line.
pub fn tokenize(line: &str, delimiter: char) -> Vec<String> {
    let mut fields = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;
    let mut chars = line.chars().peekable();

    while let Some(ch) = chars.next() {
        if ch == '"' {
            if in_quotes && chars.peek() == Some(&'"') {
                current.push('"');
                chars.next();
            } else {
                in_quotes = !in_quotes;
            }
        } else if ch == delimiter && !in_quotes {
            fields.push(current.trim().to_string());
            current.clear();
        } else {
            current.push(ch);
        }
    }

    fields.push(current.trim().to_string());
    fields
}

/// Pick `;` over `,` only when it is strictly more frequent in the sample
pub fn detect_delimiter(text: &str, sample_chars: usize) -> char {
    let (commas, semicolons) =
        text.chars()
            .take(sample_chars)
            .fold((0usize, 0usize), |(commas, semicolons), ch| match ch {
                COMMA => (commas + 1, semicolons),
                SEMICOLON => (commas, semicolons + 1),
                _ => (commas, semicolons),
            });

    let delimiter = if semicolons > commas { SEMICOLON } else { COMMA };
    debug!(
        "Delimiter detection: {} commas, {} semicolons -> {:?}",
        commas, semicolons, delimiter
    );
    delimiter
}
