// Syllable statistics over an analyzed stanza

use chhanda_core::analysis::{StanzaAnalysis, WeightStats};
use chhanda_core::enums::{AksharaKind, Weight};

/// Count aksharas, syllables, weights, ganas and matras in a stanza.
///
/// Percentages are 0.0 when there are no syllables.
pub fn weight_stats(analysis: &StanzaAnalysis) -> WeightStats {
    let mut stats = WeightStats {
        total_aksharas: 0,
        total_syllables: 0,
        heavy_count: 0,
        light_count: 0,
        heavy_percentage: 0.0,
        light_percentage: 0.0,
        total_ganas: 0,
        total_matras: 0,
    };

    for line in &analysis.results {
        stats.total_aksharas += line
            .aksharas
            .iter()
            .filter(|a| a.kind != AksharaKind::Other)
            .count();
        stats.total_ganas += line.ganas.len();
        for &w in &line.syllables {
            stats.total_syllables += 1;
            stats.total_matras += w.matras();
            match w {
                Weight::Heavy => stats.heavy_count += 1,
                Weight::Light => stats.light_count += 1,
            }
        }
    }

    if stats.total_syllables > 0 {
        let total = stats.total_syllables as f64;
        stats.heavy_percentage = stats.heavy_count as f64 / total * 100.0;
        stats.light_percentage = stats.light_count as f64 / total * 100.0;
    }
    stats
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stanza::{AnalysisOptions, analyze_stanza};
    use chhanda_core::meter::MeterTable;

    fn stats(text: &str) -> WeightStats {
        weight_stats(&analyze_stanza(
            text,
            &MeterTable::builtin(),
            &AnalysisOptions::default(),
        ))
    }

    #[test]
    fn counts_single_line() {
        // यमाताराजभानसलगम्: ISSSISIIIS
        let s = stats("यमाताराजभानसलगम्");
        assert_eq!(s.total_syllables, 10);
        assert_eq!(s.heavy_count, 5);
        assert_eq!(s.light_count, 5);
        assert_eq!(s.heavy_percentage, 50.0);
        assert_eq!(s.total_ganas, 4);
        assert_eq!(s.total_matras, 15);
        // The closing म् is an akshara but forms no syllable of its own.
        assert_eq!(s.total_aksharas, 11);
    }

    #[test]
    fn whitespace_is_not_counted() {
        let s = stats("क ख\nग");
        assert_eq!(s.total_aksharas, 3);
        assert_eq!(s.total_syllables, 3);
        assert_eq!(s.light_percentage, 100.0);
    }

    #[test]
    fn empty_text() {
        let s = stats("");
        assert_eq!(s.total_syllables, 0);
        assert_eq!(s.heavy_percentage, 0.0);
        assert_eq!(s.light_percentage, 0.0);
    }
}
