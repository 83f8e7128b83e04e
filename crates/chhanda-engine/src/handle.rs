// ChhandaHandle: one object owning the meter table and analysis options
//
// The CLI, WASM and FFI front ends all go through this type so that they
// share option handling and meter-table loading.

use chhanda_core::akshara::Akshara;
use chhanda_core::analysis::{
    AnustubhAnalysis, LineAnalysis, StanzaAnalysis, StanzaComparison, WeightStats,
};
use chhanda_core::check::{MeterCheck, Suggestion};
use chhanda_core::enums::{Weight, parse_weights};
use chhanda_core::gana::pack_weights;
use chhanda_core::meter::{Meter, MeterDefinition, MeterTable};

use crate::ChhandaError;
use crate::anustubh::analyze_anustubh;
use crate::check::check_meter;
use crate::check::suggest::{DEFAULT_MAX_SUGGESTIONS, suggest_corrections};
use crate::prosody::match_meter;
use crate::segmenter::split_aksharas;
use crate::stanza::compare::compare_stanzas;
use crate::stanza::{AnalysisOptions, analyze_line, analyze_stanza};
use crate::stats::weight_stats;

/// Meter table plus options, with one method per analysis.
#[derive(Debug, Clone)]
pub struct ChhandaHandle {
    table: MeterTable,
    options: AnalysisOptions,
    max_suggestions: usize,
}

impl ChhandaHandle {
    /// Create a handle using the built-in meter table.
    pub fn new() -> Self {
        Self::with_table(MeterTable::builtin())
    }

    pub fn with_table(table: MeterTable) -> Self {
        Self {
            table,
            options: AnalysisOptions::default(),
            max_suggestions: DEFAULT_MAX_SUGGESTIONS,
        }
    }

    /// Create a handle from a JSON array of meter definitions:
    ///
    /// ```json
    /// [{ "name": "Indravajra", "devanagari": "इन्द्रवज्रा",
    ///    "pattern": ["SSI", "SSI", "ISI", "SS"] }]
    /// ```
    pub fn from_json(json: &str) -> Result<Self, ChhandaError> {
        let defs: Vec<MeterDefinition> = serde_json::from_str(json).inspect_err(|e| {
            log::warn!("meter table is not valid JSON: {e}");
        })?;
        let table = MeterTable::from_definitions(defs).inspect_err(|e| {
            log::warn!("rejected meter table: {e}");
        })?;
        log::debug!("loaded meter table with {} meters", table.len());
        Ok(Self::with_table(table))
    }

    pub fn table(&self) -> &MeterTable {
        &self.table
    }

    pub fn options(&self) -> &AnalysisOptions {
        &self.options
    }

    // =========================================================================
    // Analysis
    // =========================================================================

    /// Segment text into aksharas without cleaning it.
    pub fn aksharas(&self, text: &str) -> Vec<Akshara> {
        split_aksharas(text)
    }

    /// Syllable weights of one line.
    pub fn syllables(&self, line: &str) -> Vec<Weight> {
        self.analyze_line(line).syllables
    }

    pub fn analyze_line(&self, line: &str) -> LineAnalysis {
        analyze_line(line, &self.table, &self.options)
    }

    /// Full stanza analysis: every line, the overall meter, and Anustubh.
    pub fn analyze(&self, text: &str) -> StanzaAnalysis {
        analyze_stanza(text, &self.table, &self.options)
    }

    pub fn anustubh(&self, text: &str) -> AnustubhAnalysis {
        analyze_anustubh(text, &self.options.anustubh)
    }

    pub fn stats(&self, text: &str) -> WeightStats {
        weight_stats(&self.analyze(text))
    }

    /// Check a text against a named meter.
    pub fn check(&self, text: &str, meter: &str) -> Result<MeterCheck, ChhandaError> {
        check_meter(text, meter, &self.table, &self.options)
    }

    /// Suggestions for bringing a text closer to a named meter, at most
    /// `max_suggestions` of them.
    pub fn suggest(&self, text: &str, meter: &str) -> Result<Vec<Suggestion>, ChhandaError> {
        let check = self.check(text, meter)?;
        Ok(suggest_corrections(&check, self.max_suggestions))
    }

    pub fn compare(&self, first: &str, second: &str) -> StanzaComparison {
        compare_stanzas(first, second, &self.table, &self.options)
    }

    /// Find the meter for a weight pattern written as `I`/`S` symbols
    /// (`L`/`G` also accepted; spaces ignored). `None` when the pattern is
    /// malformed or matches no meter.
    pub fn meter_for_pattern(&self, pattern: &str) -> Option<&Meter> {
        let compact: String = pattern.chars().filter(|c| !c.is_whitespace()).collect();
        let weights = parse_weights(&compact)?;
        match_meter(&pack_weights(&weights), &self.table)
    }

    // =========================================================================
    // Option setters
    // =========================================================================

    /// Set whether dandas, digits and punctuation are removed from lines.
    pub fn set_strip_punctuation(&mut self, value: bool) {
        self.options.strip_punctuation = value;
    }

    /// Set how many padas must end in a heavy syllable for an Anustubh
    /// verdict.
    pub fn set_required_heavy_eighth(&mut self, value: usize) {
        self.options.anustubh.required_heavy_eighth = value;
    }

    /// Set the syllable range in which a single line counts as a packed
    /// stanza.
    pub fn set_packed_line_range(&mut self, min: usize, max: usize) {
        self.options.anustubh.packed_line_range = (min.min(max), min.max(max));
    }

    /// Set the maximum number of correction suggestions.
    pub fn set_max_suggestions(&mut self, value: usize) {
        self.max_suggestions = value;
    }
}

impl Default for ChhandaHandle {
    fn default() -> Self {
        Self::new()
    }
}
