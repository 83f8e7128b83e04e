// Shared enums: syllable weight, akshara kind, stanza input format

use std::fmt;

/// Metrical weight of one syllable.
///
/// The symbolic form follows the usual prosody notation: `I` for laghu
/// (light) and `S` for guru (heavy).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Weight {
    /// Laghu: a short open syllable.
    #[cfg_attr(feature = "serde", serde(rename = "I"))]
    Light,
    /// Guru: a long, nasalized, or closed syllable.
    #[cfg_attr(feature = "serde", serde(rename = "S"))]
    Heavy,
}

impl Weight {
    /// The prosody symbol for this weight (`'I'` or `'S'`).
    pub fn symbol(self) -> char {
        match self {
            Weight::Light => 'I',
            Weight::Heavy => 'S',
        }
    }

    /// Parse a prosody symbol. Accepts `I`/`S` and the common `L`/`G`
    /// (laghu/guru) spellings, case-insensitively.
    pub fn from_symbol(c: char) -> Option<Self> {
        match c.to_ascii_uppercase() {
            'I' | 'L' => Some(Weight::Light),
            'S' | 'G' => Some(Weight::Heavy),
            _ => None,
        }
    }

    /// Length of the syllable in matras: 1 for light, 2 for heavy.
    pub fn matras(self) -> u32 {
        match self {
            Weight::Light => 1,
            Weight::Heavy => 2,
        }
    }

    pub fn is_heavy(self) -> bool {
        self == Weight::Heavy
    }
}

impl fmt::Display for Weight {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// Render a weight sequence as its symbol string, e.g. `"ISS"`.
pub fn weights_to_string(weights: &[Weight]) -> String {
    weights.iter().map(|w| w.symbol()).collect()
}

/// Parse a symbol string into weights. Returns `None` if any character is
/// not a weight symbol.
pub fn parse_weights(s: &str) -> Option<Vec<Weight>> {
    s.chars().map(Weight::from_symbol).collect()
}

/// What an akshara token contributes to the syllable sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub enum AksharaKind {
    /// Independent vowel letter, optionally with a trailing mark.
    Vowel,
    /// Consonant cluster carrying a vowel (inherent or written).
    Consonant,
    /// Consonant cluster ending in virama with no vowel of its own. It
    /// closes the preceding syllable instead of forming one.
    ClosingConsonant,
    /// Whitespace, punctuation, digits or non-Devanagari text.
    Other,
}

impl AksharaKind {
    /// Whether this kind produces its own syllable.
    pub fn is_syllable(self) -> bool {
        matches!(self, AksharaKind::Vowel | AksharaKind::Consonant)
    }
}

/// How the lines of a stanza were laid out for Anustubh pada recovery.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum InputFormat {
    /// Four lines, one pada per line.
    #[cfg_attr(feature = "serde", serde(rename = "4-line"))]
    FourLine,
    /// Two lines of two padas each, or one line holding all four padas.
    #[cfg_attr(feature = "serde", serde(rename = "2-line"))]
    TwoLine,
    /// Any other layout; every line is taken as its own pada.
    #[cfg_attr(feature = "serde", serde(rename = "other"))]
    Other,
}

impl InputFormat {
    pub fn as_str(self) -> &'static str {
        match self {
            InputFormat::FourLine => "4-line",
            InputFormat::TwoLine => "2-line",
            InputFormat::Other => "other",
        }
    }
}

impl fmt::Display for InputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
