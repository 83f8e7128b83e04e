// Akshara segmentation
//
// Splits Devanagari text into orthographic syllables. The scan is greedy
// and left to right; at each position one of two shapes is tried:
//
//   vowel:     independent-vowel modifier*
//   consonant: consonant nukta? (virama joiner* consonant nukta?)*
//              vowel-sign* (virama joiner*)? modifier*
//
// Anything else (whitespace, Latin letters, stray marks) becomes a
// single-character token, so the tokens always cover the input exactly.

use chhanda_core::akshara::Akshara;
use chhanda_core::character::{
    NUKTA, VIRAMA, is_consonant, is_independent_vowel, is_joiner, is_modifier, is_vowel_sign,
};

use crate::text::normalize;

/// Segment text into aksharas.
///
/// The input is NFC-normalized first; token positions are character
/// offsets into the normalized text.
pub fn split_aksharas(text: &str) -> Vec<Akshara> {
    let normalized = normalize(text);
    let chars: Vec<char> = normalized.chars().collect();
    let mut result = Vec::new();
    let mut pos = 0;
    while let Some(len) = next_akshara(&chars, pos) {
        let token: String = chars[pos..pos + len].iter().collect();
        result.push(Akshara::new(token, pos));
        pos += len;
    }
    log::trace!("segmented {} chars into {} aksharas", chars.len(), result.len());
    result
}

/// Length (in chars, at least 1) of the akshara starting at `pos`, or
/// `None` when `pos` is past the end of `text`.
pub fn next_akshara(text: &[char], pos: usize) -> Option<usize> {
    let first = *text.get(pos)?;
    let end = if is_independent_vowel(first) {
        skip_while(text, pos + 1, is_modifier)
    } else if is_consonant(first) {
        consonant_akshara_end(text, pos)
    } else {
        pos + 1
    };
    Some(end - pos)
}

fn consonant_akshara_end(text: &[char], pos: usize) -> usize {
    let mut i = skip_nukta(text, pos + 1);

    // Conjunct: virama (joiners) consonant (nukta), repeated.
    loop {
        if text.get(i) != Some(&VIRAMA) {
            break;
        }
        let after_joiners = skip_while(text, i + 1, is_joiner);
        match text.get(after_joiners) {
            Some(&c) if is_consonant(c) => i = skip_nukta(text, after_joiners + 1),
            _ => break,
        }
    }

    i = skip_while(text, i, is_vowel_sign);

    // Word-final halanta.
    if text.get(i) == Some(&VIRAMA) {
        i = skip_while(text, i + 1, is_joiner);
    }

    skip_while(text, i, is_modifier)
}

fn skip_nukta(text: &[char], i: usize) -> usize {
    if text.get(i) == Some(&NUKTA) { i + 1 } else { i }
}

fn skip_while(text: &[char], mut i: usize, pred: impl Fn(char) -> bool) -> usize {
    while i < text.len() && pred(text[i]) {
        i += 1;
    }
    i
}
