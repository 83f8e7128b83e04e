// Meter conformance check results and correction suggestions

use std::fmt;

use crate::enums::Weight;
use crate::gana::Gana;

/// A syllable whose weight differs from the meter's expectation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WeightMismatch {
    pub position: usize,
    pub expected: Weight,
    pub actual: Weight,
}

/// A gana position where the line differs from the meter.
///
/// `None` on either side means the position does not exist there (the
/// line is shorter or longer than the pattern).
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GanaMismatch {
    pub position: usize,
    pub expected: Option<Gana>,
    pub actual: Option<Gana>,
}

/// Conformance of one line against a meter.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct LineCheck {
    pub line_index: usize,
    pub line: String,
    pub syllables: Vec<Weight>,
    #[cfg_attr(feature = "serde", serde(rename = "ganaSeq"))]
    pub ganas: Vec<Gana>,
    #[cfg_attr(feature = "serde", serde(rename = "expectedGanaSeq"))]
    pub expected_ganas: Vec<Gana>,
    pub weight_errors: Vec<WeightMismatch>,
    pub gana_errors: Vec<GanaMismatch>,
    /// Syllables that match their expected weight or lie past the end of
    /// the pattern.
    pub correct_syllables: usize,
    /// Correct syllables as a percentage of the line's syllables.
    pub match_percentage: f64,
    /// Gana sequence equals the meter pattern exactly.
    pub is_correct: bool,
}

/// Conformance of a whole text against a meter.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct MeterCheck {
    pub meter: String,
    pub lines: Vec<LineCheck>,
    pub total_syllables: usize,
    pub correct_syllables: usize,
    pub total_ganas: usize,
    pub correct_ganas: usize,
    pub overall_match_percentage: f64,
    /// At least one line was checked and no line has a gana mismatch.
    pub is_correct: bool,
}

/// A suggested edit to bring a line closer to its meter.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Suggestion {
    /// Zero-based line index.
    pub line: usize,
    /// Zero-based gana position.
    pub position: usize,
    pub actual: Option<Gana>,
    /// `None` when the gana at `position` is extra and should be removed.
    pub expected: Option<Gana>,
}

impl fmt::Display for Suggestion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "line {}, gana {}: ", self.line + 1, self.position + 1)?;
        let actual = self.actual.as_ref().map(Gana::code).unwrap_or_default();
        match &self.expected {
            Some(expected) if actual.is_empty() => {
                write!(f, "add {} ({})", expected, expected.display_name())
            }
            Some(expected) => write!(
                f,
                "use {} ({}) instead of {}",
                expected,
                expected.display_name(),
                actual
            ),
            None => write!(f, "remove extra gana {actual}"),
        }
    }
}
