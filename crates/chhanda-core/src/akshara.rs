// Akshara: one orthographic syllable unit produced by the segmenter

use crate::character::{
    NUKTA, VIRAMA, is_consonant, is_independent_vowel, is_joiner, is_long_independent_vowel,
    is_long_vowel_sign, is_vowel_sign, is_weight_modifier,
};
use crate::enums::AksharaKind;

/// An akshara token: a non-empty substring of the (normalized) input.
///
/// Tokens are value types; the segmenter produces a fresh list for every
/// call and nothing refers back into the input string.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct Akshara {
    /// The token text.
    pub text: String,

    /// What the token contributes to the syllable sequence.
    pub kind: AksharaKind,

    /// Offset of the first character within the normalized input
    /// (in characters, not bytes).
    pub pos: usize,

    /// Length in characters.
    pub len: usize,
}

impl Akshara {
    /// Create a token, deriving its kind from the text.
    pub fn new(text: impl Into<String>, pos: usize) -> Self {
        let text = text.into();
        let len = text.chars().count();
        let kind = kind_of(&text);
        Self {
            text,
            kind,
            pos,
            len,
        }
    }

    /// Character offset one past the end of this token.
    pub fn end(&self) -> usize {
        self.pos + self.len
    }

    /// Whether this token is a consonant cluster ending in virama with no
    /// vowel of its own (e.g. the `म्` of `कम्`).
    pub fn is_closing_consonant(&self) -> bool {
        self.kind == AksharaKind::ClosingConsonant
    }

    /// Whether this token forms a syllable of its own.
    pub fn is_syllable(&self) -> bool {
        self.kind.is_syllable()
    }

    /// Whether the token is a lone independent vowel letter (no marks).
    pub fn is_bare_vowel(&self) -> bool {
        self.kind == AksharaKind::Vowel && self.len == 1
    }

    /// Whether the token starts with a long independent vowel letter.
    pub fn has_long_independent_vowel(&self) -> bool {
        self.text
            .chars()
            .next()
            .is_some_and(is_long_independent_vowel)
    }

    /// Whether the token contains a long dependent vowel sign.
    pub fn has_long_vowel_sign(&self) -> bool {
        self.text.chars().any(is_long_vowel_sign)
    }

    /// Whether the token carries anusvara, chandrabindu or visarga.
    pub fn has_weight_modifier(&self) -> bool {
        self.text.chars().any(is_weight_modifier)
    }

    /// Whether the token begins with a conjunct of two or more consonants.
    pub fn starts_with_cluster(&self) -> bool {
        let mut chars = self.text.chars().peekable();
        match chars.next() {
            Some(c) if is_consonant(c) => {}
            _ => return false,
        }
        if chars.peek() == Some(&NUKTA) {
            chars.next();
        }
        if chars.next() != Some(VIRAMA) {
            return false;
        }
        while chars.peek().is_some_and(|&c| is_joiner(c)) {
            chars.next();
        }
        chars.next().is_some_and(is_consonant)
    }
}

/// Classify a token's text.
///
/// A closing consonant starts with a consonant, ends in virama (optionally
/// followed by a zero-width joiner) and has no vowel sign.
pub fn kind_of(text: &str) -> AksharaKind {
    let Some(first) = text.chars().next() else {
        return AksharaKind::Other;
    };
    if is_independent_vowel(first) {
        return AksharaKind::Vowel;
    }
    if !is_consonant(first) {
        return AksharaKind::Other;
    }
    let trimmed = text.trim_end_matches(is_joiner);
    if trimmed.ends_with(VIRAMA) && !text.chars().any(is_vowel_sign) {
        AksharaKind::ClosingConsonant
    } else {
        AksharaKind::Consonant
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn akshara_new_counts_chars() {
        let a = Akshara::new("क्षे", 3);
        assert_eq!(a.len, 4);
        assert_eq!(a.pos, 3);
        assert_eq!(a.end(), 7);
        assert_eq!(a.kind, AksharaKind::Consonant);
    }

    #[test]
    fn kinds() {
        assert_eq!(kind_of("अ"), AksharaKind::Vowel);
        assert_eq!(kind_of("आं"), AksharaKind::Vowel);
        assert_eq!(kind_of("क"), AksharaKind::Consonant);
        assert_eq!(kind_of("म्"), AksharaKind::ClosingConsonant);
        assert_eq!(kind_of("न्\u{200D}"), AksharaKind::ClosingConsonant);
        assert_eq!(kind_of("स्त"), AksharaKind::Consonant);
        assert_eq!(kind_of(" "), AksharaKind::Other);
        assert_eq!(kind_of("।"), AksharaKind::Other);
        assert_eq!(kind_of(""), AksharaKind::Other);
    }

    #[test]
    fn closing_consonant_requires_no_vowel_sign() {
        // A vowel sign before a virama is malformed, but it is not closing.
        assert_eq!(kind_of("कि्"), AksharaKind::Consonant);
    }

    #[test]
    fn cluster_detection() {
        assert!(Akshara::new("स्त", 0).starts_with_cluster());
        assert!(Akshara::new("क्ष", 0).starts_with_cluster());
        assert!(Akshara::new("ज़्य", 0).starts_with_cluster());
        assert!(Akshara::new("क्\u{200D}ष", 0).starts_with_cluster());
        assert!(!Akshara::new("त", 0).starts_with_cluster());
        assert!(!Akshara::new("म्", 0).starts_with_cluster());
        assert!(!Akshara::new("अ", 0).starts_with_cluster());
    }

    #[test]
    fn vowel_properties() {
        assert!(Akshara::new("आ", 0).has_long_independent_vowel());
        assert!(Akshara::new("अ", 0).is_bare_vowel());
        assert!(!Akshara::new("अं", 0).is_bare_vowel());
        assert!(Akshara::new("अं", 0).has_weight_modifier());
        assert!(Akshara::new("की", 0).has_long_vowel_sign());
        assert!(!Akshara::new("कि", 0).has_long_vowel_sign());
    }
}
