// Analysis result types returned by the engine

use crate::akshara::Akshara;
use crate::enums::{InputFormat, Weight};
use crate::gana::Gana;

/// Result of running one line through segmentation, weighting, packing and
/// meter matching.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct LineAnalysis {
    /// The line as given (trimmed, before punctuation stripping).
    pub line: String,

    /// One weight per syllable.
    pub syllables: Vec<Weight>,

    /// Akshara tokens of the cleaned, normalized line.
    pub aksharas: Vec<Akshara>,

    /// For every akshara, the index into `syllables` it produced, or `None`
    /// for closing consonants and non-syllabic tokens.
    #[cfg_attr(feature = "serde", serde(rename = "aksharaToSyllableMap"))]
    pub akshara_map: Vec<Option<usize>>,

    /// The packed gana sequence.
    #[cfg_attr(feature = "serde", serde(rename = "ganaSeq"))]
    pub ganas: Vec<Gana>,

    /// Name of the fixed-pattern meter this line matches exactly.
    pub chhanda: Option<String>,
}

/// Positional analysis of one Anustubh quarter.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct PadaAnalysis {
    /// Zero-based pada index within the stanza.
    pub index: usize,

    pub syllable_count: usize,
    pub syllables: Vec<Weight>,
    pub aksharas: Vec<Akshara>,

    /// Mandatory rule: the 8th syllable is heavy. `false` when missing.
    pub eighth_heavy: bool,

    /// Soft rule: the 5th syllable is light. `false` when missing.
    pub fifth_light: bool,

    /// Soft rule for the 2nd and 4th pada: the 6th syllable is heavy.
    /// `None` for odd padas.
    pub sixth_heavy: Option<bool>,

    /// Violations of the hard rules, as user-facing messages.
    pub errors: Vec<String>,
}

impl PadaAnalysis {
    /// Whether the pada has exactly the expected number of syllables.
    pub fn has_syllable_count(&self, expected: usize) -> bool {
        self.syllable_count == expected
    }
}

/// Verdict of the Anustubh analyzer for a whole stanza.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct AnustubhAnalysis {
    pub is_anustubh: bool,

    /// Confidence score, 0 to 100.
    pub confidence: u8,

    #[cfg_attr(feature = "serde", serde(rename = "padaAnalysis"))]
    pub padas: Vec<PadaAnalysis>,

    pub total_syllables: usize,

    /// Every pada error plus format-level errors.
    #[cfg_attr(feature = "serde", serde(rename = "overallErrors"))]
    pub errors: Vec<String>,

    pub input_format: InputFormat,
}

/// Full analysis of a stanza.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct StanzaAnalysis {
    /// One entry per non-empty line.
    pub results: Vec<LineAnalysis>,

    /// The meter every line matches, if they all match the same one.
    pub overall_chhanda: Option<String>,

    #[cfg_attr(feature = "serde", serde(rename = "anustubhResult"))]
    pub anustubh: AnustubhAnalysis,
}

impl StanzaAnalysis {
    /// All syllable weights of the stanza, line by line.
    pub fn syllables(&self) -> impl Iterator<Item = Weight> + '_ {
        self.results.iter().flat_map(|r| r.syllables.iter().copied())
    }

    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }
}

/// Summary counts over a weighted text.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct WeightStats {
    /// Devanagari aksharas, closing consonants included (whitespace and
    /// punctuation excluded).
    pub total_aksharas: usize,
    pub total_syllables: usize,
    pub heavy_count: usize,
    pub light_count: usize,
    pub heavy_percentage: f64,
    pub light_percentage: f64,
    pub total_ganas: usize,
    /// Sum of matras: 1 per light, 2 per heavy syllable.
    pub total_matras: u32,
}

/// Per-line pattern difference between two stanzas.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct LineDifference {
    pub line_index: usize,
    /// Space-joined gana codes of the first stanza's line.
    pub first_pattern: String,
    /// Space-joined gana codes of the second stanza's line (empty if absent).
    pub second_pattern: String,
    #[cfg_attr(feature = "serde", serde(rename = "match"))]
    pub matches: bool,
}

/// Comparison of the metrical patterns of two stanzas.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct StanzaComparison {
    pub first: StanzaAnalysis,
    pub second: StanzaAnalysis,
    pub same_chhanda: bool,
    pub same_pattern: bool,
    pub similarity_percentage: f64,
    pub differences: Vec<LineDifference>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pada(count: usize) -> PadaAnalysis {
        PadaAnalysis {
            index: 0,
            syllable_count: count,
            syllables: vec![Weight::Heavy; count],
            aksharas: Vec::new(),
            eighth_heavy: count >= 8,
            fifth_light: false,
            sixth_heavy: None,
            errors: Vec::new(),
        }
    }

    #[test]
    fn pada_syllable_count_check() {
        assert!(pada(8).has_syllable_count(8));
        assert!(!pada(9).has_syllable_count(8));
    }

    #[test]
    fn stanza_syllables_iterate_in_line_order() {
        let line = |w: Vec<Weight>| LineAnalysis {
            line: String::new(),
            syllables: w,
            aksharas: Vec::new(),
            akshara_map: Vec::new(),
            ganas: Vec::new(),
            chhanda: None,
        };
        let stanza = StanzaAnalysis {
            results: vec![
                line(vec![Weight::Light]),
                line(vec![Weight::Heavy, Weight::Light]),
            ],
            overall_chhanda: None,
            anustubh: AnustubhAnalysis {
                is_anustubh: false,
                confidence: 0,
                padas: Vec::new(),
                total_syllables: 0,
                errors: Vec::new(),
                input_format: InputFormat::Other,
            },
        };
        let all: Vec<Weight> = stanza.syllables().collect();
        assert_eq!(all, vec![Weight::Light, Weight::Heavy, Weight::Light]);
        assert!(!stanza.is_empty());
    }
}
