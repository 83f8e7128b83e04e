// Stanza processing: per-line analysis and the overall meter verdict

pub mod compare;

use chhanda_core::analysis::{LineAnalysis, StanzaAnalysis};
use chhanda_core::gana::pack_weights;
use chhanda_core::meter::MeterTable;

use crate::anustubh::{AnustubhOptions, analyze_anustubh};
use crate::prosody::{classify, match_meter};
use crate::segmenter::split_aksharas;
use crate::text::{clean_line, has_syllabic_content, normalize_line, stanza_lines};

/// Options for line and stanza analysis.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase", default))]
pub struct AnalysisOptions {
    /// Remove dandas, digits and punctuation before segmenting a line.
    ///
    /// Default: true
    pub strip_punctuation: bool,

    /// Thresholds for the Anustubh pass that runs on every stanza.
    pub anustubh: AnustubhOptions,
}

impl Default for AnalysisOptions {
    fn default() -> Self {
        Self {
            strip_punctuation: true,
            anustubh: AnustubhOptions::default(),
        }
    }
}

impl AnalysisOptions {
    /// Prepare a raw line for segmentation.
    pub(crate) fn prepare(&self, line: &str) -> String {
        if self.strip_punctuation {
            clean_line(line)
        } else {
            normalize_line(line)
        }
    }

    /// Non-empty lines of a stanza, paired with their prepared form.
    /// Lines left with nothing to segment are dropped.
    pub(crate) fn lines<'a>(&self, text: &'a str) -> Vec<(&'a str, String)> {
        stanza_lines(text)
            .map(|line| (line, self.prepare(line)))
            .filter(|(_, prepared)| has_syllabic_content(prepared))
            .collect()
    }
}

fn analyze_prepared(line: &str, prepared: &str, table: &MeterTable) -> LineAnalysis {
    let aksharas = split_aksharas(prepared);
    let syl = classify(&aksharas);
    let ganas = pack_weights(&syl.weights);
    let chhanda = match_meter(&ganas, table).map(|m| m.name().to_string());
    log::trace!(
        "line {:?}: {} aksharas, {} syllables, meter {:?}",
        prepared,
        aksharas.len(),
        syl.weights.len(),
        chhanda
    );
    LineAnalysis {
        line: line.to_string(),
        syllables: syl.weights,
        aksharas,
        akshara_map: syl.akshara_map,
        ganas,
        chhanda,
    }
}

/// Analyze a single line: segment, weigh, pack and match.
pub fn analyze_line(line: &str, table: &MeterTable, options: &AnalysisOptions) -> LineAnalysis {
    let trimmed = line.trim();
    analyze_prepared(trimmed, &options.prepare(trimmed), table)
}

/// Analyze every line of a stanza, decide the overall meter, and run the
/// Anustubh analyzer over the whole text.
///
/// The overall meter is set only when there is at least one line and every
/// line matched the same meter.
pub fn analyze_stanza(text: &str, table: &MeterTable, options: &AnalysisOptions) -> StanzaAnalysis {
    let results: Vec<LineAnalysis> = options
        .lines(text)
        .into_iter()
        .map(|(line, prepared)| analyze_prepared(line, &prepared, table))
        .collect();

    let overall_chhanda = overall_meter(&results);
    let anustubh = analyze_anustubh(text, &options.anustubh);
    log::debug!(
        "stanza: {} lines, overall {:?}, anustubh {} ({}%)",
        results.len(),
        overall_chhanda,
        anustubh.is_anustubh,
        anustubh.confidence
    );

    StanzaAnalysis {
        results,
        overall_chhanda,
        anustubh,
    }
}

fn overall_meter(results: &[LineAnalysis]) -> Option<String> {
    let first = results.first()?.chhanda.as_ref()?;
    results
        .iter()
        .all(|r| r.chhanda.as_ref() == Some(first))
        .then(|| first.clone())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chhanda_core::enums::weights_to_string;
    use chhanda_core::gana::ganas_to_string;

    const INDRAVAJRA: &str = "स्यादिन्द्रवज्रा यदि तौ जगौ गः";
    const UPENDRAVAJRA: &str = "उपेन्द्रवज्रा जतजास्ततो गौ";

    #[test]
    fn line_matches_indravajra() {
        let table = MeterTable::builtin();
        let r = analyze_line(INDRAVAJRA, &table, &AnalysisOptions::default());
        assert_eq!(weights_to_string(&r.syllables), "SSISSIISISS");
        assert_eq!(ganas_to_string(&r.ganas), "SSI SSI ISI SS");
        assert_eq!(r.chhanda.as_deref(), Some("Indravajra"));
    }

    #[test]
    fn line_matches_upendravajra() {
        let table = MeterTable::builtin();
        let r = analyze_line(UPENDRAVAJRA, &table, &AnalysisOptions::default());
        assert_eq!(r.chhanda.as_deref(), Some("Upendravajra"));
    }

    #[test]
    fn line_keeps_original_text() {
        let table = MeterTable::builtin();
        let r = analyze_line("  रामः ।  ", &table, &AnalysisOptions::default());
        assert_eq!(r.line, "रामः ।");
        assert_eq!(weights_to_string(&r.syllables), "SS");
    }

    #[test]
    fn mnemonic_matches_no_meter() {
        let table = MeterTable::builtin();
        let r = analyze_line("यमाताराजभानसलगम्", &table, &AnalysisOptions::default());
        assert_eq!(ganas_to_string(&r.ganas), "ISS SIS III S");
        assert!(r.chhanda.is_none());
        assert_eq!(r.akshara_map.len(), r.aksharas.len());
        assert_eq!(r.akshara_map.last(), Some(&None));
    }

    #[test]
    fn stanza_of_same_meter() {
        let table = MeterTable::builtin();
        let text = [INDRAVAJRA; 4].join("\n");
        let r = analyze_stanza(&text, &table, &AnalysisOptions::default());
        assert_eq!(r.results.len(), 4);
        assert_eq!(r.overall_chhanda.as_deref(), Some("Indravajra"));
    }

    #[test]
    fn stanza_of_mixed_meters() {
        let table = MeterTable::builtin();
        let text = [INDRAVAJRA, INDRAVAJRA, UPENDRAVAJRA, INDRAVAJRA].join("\n");
        let r = analyze_stanza(&text, &table, &AnalysisOptions::default());
        assert_eq!(r.results[2].chhanda.as_deref(), Some("Upendravajra"));
        assert!(r.overall_chhanda.is_none());
    }

    #[test]
    fn empty_stanza() {
        let table = MeterTable::builtin();
        let r = analyze_stanza("\n  \n", &table, &AnalysisOptions::default());
        assert!(r.is_empty());
        assert!(r.overall_chhanda.is_none());
        assert!(!r.anustubh.is_anustubh);
    }

    #[test]
    fn punctuation_kept_when_not_stripping() {
        let table = MeterTable::builtin();
        let opts = AnalysisOptions {
            strip_punctuation: false,
            ..AnalysisOptions::default()
        };
        let r = analyze_line("राम।", &table, &opts);
        assert_eq!(r.aksharas.last().map(|a| a.text.as_str()), Some("।"));
        assert_eq!(r.akshara_map.last(), Some(&None));
        assert_eq!(r.syllables.len(), 2);
    }
}
