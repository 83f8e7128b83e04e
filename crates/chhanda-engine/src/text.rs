// Input normalization and line cleaning
//
// All positions reported by the engine are character offsets into text that
// has passed through `normalize` (and, for stanza lines, `clean_line`).

use unicode_normalization::UnicodeNormalization;

use chhanda_core::character::{is_strippable, is_syllabic};

/// Canonically compose the text (NFC).
pub fn normalize(text: &str) -> String {
    text.nfc().collect()
}

/// Normalize a line and strip dandas, digits and punctuation.
///
/// Runs of whitespace left behind are collapsed to a single space and the
/// result is trimmed. Word breaks survive so that the segmenter still sees
/// them.
pub fn clean_line(line: &str) -> String {
    let normalized = normalize(line);
    let mut out = String::with_capacity(normalized.len());
    let mut pending_space = false;
    for c in normalized.chars() {
        // A removed danda still separates words: "राम।सीता" -> "राम सीता".
        if is_strippable(c) || c.is_whitespace() {
            pending_space = true;
            continue;
        }
        if pending_space && !out.is_empty() {
            out.push(' ');
        }
        pending_space = false;
        out.push(c);
    }
    out
}

/// Normalize a line without stripping anything except surrounding space.
pub fn normalize_line(line: &str) -> String {
    normalize(line.trim())
}

/// Split a stanza into its non-empty lines, trimmed.
pub fn stanza_lines(text: &str) -> impl Iterator<Item = &str> {
    text.lines().map(str::trim).filter(|l| !l.is_empty())
}

/// Whether a (cleaned) line has anything left that could form a syllable.
pub fn has_syllabic_content(line: &str) -> bool {
    line.chars().any(is_syllabic)
}
