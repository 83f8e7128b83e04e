// Line-by-line comparison of the metrical patterns of two stanzas

use chhanda_core::analysis::{LineDifference, StanzaComparison};
use chhanda_core::gana::ganas_to_string;
use chhanda_core::meter::MeterTable;

use super::{AnalysisOptions, analyze_stanza};

/// Analyze both stanzas and compare their per-line gana patterns.
///
/// Every line of the first stanza is compared with the line at the same
/// index in the second; a missing line compares as an empty pattern.
/// Similarity is the share of matching lines over the longer stanza.
pub fn compare_stanzas(
    first: &str,
    second: &str,
    table: &MeterTable,
    options: &AnalysisOptions,
) -> StanzaComparison {
    let first = analyze_stanza(first, table, options);
    let second = analyze_stanza(second, table, options);

    let second_patterns: Vec<String> = second
        .results
        .iter()
        .map(|r| ganas_to_string(&r.ganas))
        .collect();

    let differences: Vec<LineDifference> = first
        .results
        .iter()
        .enumerate()
        .map(|(i, r)| {
            let first_pattern = ganas_to_string(&r.ganas);
            let second_pattern = second_patterns.get(i).cloned().unwrap_or_default();
            LineDifference {
                line_index: i,
                matches: first_pattern == second_pattern,
                first_pattern,
                second_pattern,
            }
        })
        .collect();

    let same_pattern = differences.iter().all(|d| d.matches);
    let same_chhanda =
        first.overall_chhanda.is_some() && first.overall_chhanda == second.overall_chhanda;

    let total_lines = first.results.len().max(second.results.len());
    let matching = differences.iter().filter(|d| d.matches).count();
    let similarity_percentage = if total_lines > 0 {
        matching as f64 / total_lines as f64 * 100.0
    } else {
        0.0
    };

    StanzaComparison {
        first,
        second,
        same_chhanda,
        same_pattern,
        similarity_percentage,
        differences,
    }
}
