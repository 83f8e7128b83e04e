// Anustubh (shloka) analysis
//
// Anustubh has no fixed gana pattern. A stanza is four padas of eight
// syllables; the rules checked here are positional:
//
//   - 8th syllable heavy (mandatory, reported as an error)
//   - 5th syllable light (soft)
//   - 6th syllable heavy in the 2nd and 4th pada (soft)
//
// Input may be four lines (one pada each), two lines (two padas each), or
// a single line holding the whole stanza.

use chhanda_core::akshara::Akshara;
use chhanda_core::analysis::{AnustubhAnalysis, PadaAnalysis};
use chhanda_core::enums::{InputFormat, Weight};

use crate::prosody::classify;
use crate::segmenter::split_aksharas;
use crate::text::{clean_line, has_syllabic_content, stanza_lines};

/// Syllables in a regular pada.
pub const PADA_SYLLABLES: usize = 8;

/// Padas in a complete stanza.
pub const STANZA_PADAS: usize = 4;

// ---------------------------------------------------------------------------
// Options
// ---------------------------------------------------------------------------

/// Thresholds for the Anustubh verdict.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase", default))]
pub struct AnustubhOptions {
    /// How many of the four padas must end in a heavy syllable.
    ///
    /// Default: 2. Odd padas of classical shlokas often end light.
    pub required_heavy_eighth: usize,

    /// Inclusive syllable range in which a single line is read as a whole
    /// stanza packed onto one line.
    ///
    /// Default: 28..=36.
    pub packed_line_range: (usize, usize),
}

impl Default for AnustubhOptions {
    fn default() -> Self {
        Self {
            required_heavy_eighth: 2,
            packed_line_range: (28, 36),
        }
    }
}

impl AnustubhOptions {
    fn is_packed_line(&self, syllables: usize) -> bool {
        let (lo, hi) = self.packed_line_range;
        (lo..=hi).contains(&syllables)
    }
}

// ---------------------------------------------------------------------------
// Analysis
// ---------------------------------------------------------------------------

/// A stanza segmented and weighted as one unit, with each source line's
/// syllable range.
struct Stanza {
    aksharas: Vec<Akshara>,
    weights: Vec<Weight>,
    /// Owning syllable of every akshara (see `Syllabification::owners`).
    owners: Vec<Option<usize>>,
    /// Half-open syllable range of each line.
    lines: Vec<(usize, usize)>,
}

impl Stanza {
    fn build(text: &str) -> Self {
        let lines: Vec<String> = stanza_lines(text)
            .map(clean_line)
            .filter(|l| has_syllabic_content(l))
            .collect();

        // Lines are joined with a space so that a conjunct at the start of
        // one line still closes the last syllable of the previous one.
        let mut joined = String::new();
        let mut char_ranges = Vec::with_capacity(lines.len());
        let mut offset = 0;
        for (i, line) in lines.iter().enumerate() {
            if i > 0 {
                joined.push(' ');
                offset += 1;
            }
            let len = line.chars().count();
            joined.push_str(line);
            char_ranges.push((offset, offset + len));
            offset += len;
        }

        let aksharas = split_aksharas(&joined);
        let syl = classify(&aksharas);
        let owners = syl.owners(&aksharas);

        let mut syllable_ranges = Vec::with_capacity(char_ranges.len());
        let mut next = 0;
        for &(start, end) in &char_ranges {
            let count = aksharas
                .iter()
                .zip(&syl.akshara_map)
                .filter(|(ak, slot)| slot.is_some() && ak.pos >= start && ak.pos < end)
                .count();
            syllable_ranges.push((next, next + count));
            next += count;
        }

        Self {
            aksharas,
            weights: syl.weights,
            owners,
            lines: syllable_ranges,
        }
    }

    fn total_syllables(&self) -> usize {
        self.weights.len()
    }

    /// Aksharas belonging to the syllables in `range`, in text order.
    fn aksharas_in(&self, (start, end): (usize, usize)) -> Vec<Akshara> {
        self.aksharas
            .iter()
            .zip(&self.owners)
            .filter(|(_, owner)| owner.is_some_and(|o| o >= start && o < end))
            .map(|(ak, _)| ak.clone())
            .collect()
    }

    /// Decide the input format and the syllable range of every pada.
    fn padas(&self, options: &AnustubhOptions) -> (InputFormat, Vec<(usize, usize)>) {
        match self.lines.len() {
            4 => (InputFormat::FourLine, self.lines.clone()),
            2 => {
                let ranges = self
                    .lines
                    .iter()
                    .flat_map(|&(start, end)| {
                        let mid = (start + PADA_SYLLABLES).min(end);
                        [(start, mid), (mid, end)]
                    })
                    .collect();
                (InputFormat::TwoLine, ranges)
            }
            1 if options.is_packed_line(self.total_syllables()) => {
                let total = self.total_syllables();
                let ranges = (0..STANZA_PADAS)
                    .map(|i| {
                        let start = (i * PADA_SYLLABLES).min(total);
                        let end = if i + 1 == STANZA_PADAS {
                            total
                        } else {
                            ((i + 1) * PADA_SYLLABLES).min(total)
                        };
                        (start, end)
                    })
                    .collect();
                (InputFormat::TwoLine, ranges)
            }
            _ => (InputFormat::Other, self.lines.clone()),
        }
    }
}

fn analyze_pada(index: usize, weights: &[Weight], aksharas: Vec<Akshara>) -> PadaAnalysis {
    let number = index + 1;
    let count = weights.len();
    let mut errors = Vec::new();

    if count != PADA_SYLLABLES {
        errors.push(format!(
            "Pada {number}: expected {PADA_SYLLABLES} syllables, found {count}"
        ));
    }

    let eighth = weights.get(7).copied();
    let eighth_heavy = eighth == Some(Weight::Heavy);
    if eighth == Some(Weight::Light) {
        errors.push(format!(
            "Pada {number}: 8th syllable should be guru (heavy) but is laghu (light)"
        ));
    }

    let fifth_light = weights.get(4) == Some(&Weight::Light);
    let sixth_heavy = (index % 2 == 1).then(|| weights.get(5) == Some(&Weight::Heavy));

    PadaAnalysis {
        index,
        syllable_count: count,
        syllables: weights.to_vec(),
        aksharas,
        eighth_heavy,
        fifth_light,
        sixth_heavy,
        errors,
    }
}

/// Confidence score in 0..=100.
///
/// 30 points for having exactly four padas, 30 scaled by the share of
/// padas with eight syllables, 30 scaled by the share with a heavy 8th
/// syllable, and 10 scaled by the share of satisfied soft-rule checks.
/// The shares are taken over at least four padas.
fn confidence(padas: &[PadaAnalysis]) -> u8 {
    let denom = padas.len().max(STANZA_PADAS) as f64;
    let mut score = 0.0;
    if padas.len() == STANZA_PADAS {
        score += 30.0;
    }
    let full = padas
        .iter()
        .filter(|p| p.has_syllable_count(PADA_SYLLABLES))
        .count();
    score += 30.0 * full as f64 / denom;
    let heavy = padas.iter().filter(|p| p.eighth_heavy).count();
    score += 30.0 * heavy as f64 / denom;

    let mut checks = 0;
    let mut satisfied = 0;
    for pada in padas {
        checks += 1;
        satisfied += usize::from(pada.fifth_light);
        if let Some(sixth) = pada.sixth_heavy {
            checks += 1;
            satisfied += usize::from(sixth);
        }
    }
    if checks > 0 {
        score += 10.0 * satisfied as f64 / checks as f64;
    }

    score.round().clamp(0.0, 100.0) as u8
}

/// Analyze a stanza as Anustubh.
///
/// Lines are always cleaned of dandas, digits and punctuation here,
/// whatever the stanza options say.
pub fn analyze_anustubh(text: &str, options: &AnustubhOptions) -> AnustubhAnalysis {
    let stanza = Stanza::build(text);
    let (input_format, ranges) = stanza.padas(options);
    log::debug!(
        "anustubh: {} lines, {} syllables, format {}",
        stanza.lines.len(),
        stanza.total_syllables(),
        input_format
    );

    let padas: Vec<PadaAnalysis> = ranges
        .iter()
        .enumerate()
        .map(|(i, &(start, end))| {
            analyze_pada(i, &stanza.weights[start..end], stanza.aksharas_in((start, end)))
        })
        .collect();

    let mut errors = Vec::new();
    if padas.len() != STANZA_PADAS {
        errors.push(format!(
            "Expected {STANZA_PADAS} padas, found {}",
            padas.len()
        ));
    }
    errors.extend(padas.iter().flat_map(|p| p.errors.iter().cloned()));

    let heavy_eighth = padas.iter().filter(|p| p.eighth_heavy).count();
    let is_anustubh = padas.len() == STANZA_PADAS
        && padas.iter().all(|p| p.has_syllable_count(PADA_SYLLABLES))
        && heavy_eighth >= options.required_heavy_eighth;

    AnustubhAnalysis {
        is_anustubh,
        confidence: confidence(&padas),
        total_syllables: stanza.total_syllables(),
        padas,
        errors,
        input_format,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chhanda_core::enums::weights_to_string;

    /// Build a line from a weight pattern: `I` -> न, `S` -> मा.
    fn line(pattern: &str) -> String {
        pattern
            .chars()
            .map(|c| if c == 'S' { "मा" } else { "न" })
            .collect()
    }

    // 5th light, 6th heavy, 8th heavy.
    const GOOD: &str = "SSSSISIS";

    fn four(p: [&str; 4]) -> String {
        p.iter().map(|s| line(s)).collect::<Vec<_>>().join("\n")
    }

    #[test]
    fn four_lines_perfect() {
        let r = analyze_anustubh(&four([GOOD; 4]), &AnustubhOptions::default());
        assert!(r.is_anustubh);
        assert_eq!(r.confidence, 100);
        assert_eq!(r.input_format, InputFormat::FourLine);
        assert_eq!(r.total_syllables, 32);
        assert!(r.errors.is_empty());
        assert_eq!(r.padas[1].sixth_heavy, Some(true));
        assert_eq!(r.padas[0].sixth_heavy, None);
    }

    #[test]
    fn light_eighth_reduces_confidence() {
        let r = analyze_anustubh(
            &four([GOOD, GOOD, GOOD, "SSSSISII"]),
            &AnustubhOptions::default(),
        );
        assert!(r.is_anustubh);
        assert!(r.confidence < 100);
        assert_eq!(r.confidence, 93);
        assert_eq!(
            r.errors,
            vec!["Pada 4: 8th syllable should be guru (heavy) but is laghu (light)"]
        );
    }

    #[test]
    fn heavy_eighth_threshold_boundary() {
        let opts = AnustubhOptions::default();
        let two = analyze_anustubh(&four([GOOD, GOOD, "SSSSISII", "SSSSISII"]), &opts);
        assert!(two.is_anustubh);
        let one = analyze_anustubh(&four([GOOD, "SSSSISII", "SSSSISII", "SSSSISII"]), &opts);
        assert!(!one.is_anustubh);

        let strict = AnustubhOptions {
            required_heavy_eighth: 3,
            ..opts
        };
        let two_strict = analyze_anustubh(&four([GOOD, GOOD, "SSSSISII", "SSSSISII"]), &strict);
        assert!(!two_strict.is_anustubh);
    }

    #[test]
    fn wrong_syllable_count_fails() {
        let r = analyze_anustubh(
            &four([GOOD, GOOD, GOOD, "SSSSISISS"]),
            &AnustubhOptions::default(),
        );
        assert!(!r.is_anustubh);
        assert!(r.errors.contains(&"Pada 4: expected 8 syllables, found 9".to_string()));
        assert_eq!(r.padas[3].syllable_count, 9);
    }

    #[test]
    fn two_lines_split_into_padas() {
        let text = format!("{}{}\n{}{}", line(GOOD), line(GOOD), line(GOOD), line(GOOD));
        let r = analyze_anustubh(&text, &AnustubhOptions::default());
        assert_eq!(r.input_format, InputFormat::TwoLine);
        assert_eq!(r.padas.len(), 4);
        assert!(r.padas.iter().all(|p| p.syllable_count == 8));
        assert!(r.is_anustubh);
    }

    #[test]
    fn single_packed_line() {
        let text = line(&GOOD.repeat(4));
        let r = analyze_anustubh(&text, &AnustubhOptions::default());
        assert_eq!(r.input_format, InputFormat::TwoLine);
        assert_eq!(r.padas.len(), 4);
        assert!(r.is_anustubh);
    }

    #[test]
    fn packed_line_range_edges() {
        let opts = AnustubhOptions::default();
        let format = |n: usize| analyze_anustubh(&line(&"S".repeat(n)), &opts).input_format;
        assert_eq!(format(27), InputFormat::Other);
        assert_eq!(format(28), InputFormat::TwoLine);
        assert_eq!(format(36), InputFormat::TwoLine);
        assert_eq!(format(37), InputFormat::Other);

        let r = analyze_anustubh(&line(&"S".repeat(28)), &opts);
        let counts: Vec<usize> = r.padas.iter().map(|p| p.syllable_count).collect();
        assert_eq!(counts, vec![8, 8, 8, 4]);
        let r = analyze_anustubh(&line(&"S".repeat(36)), &opts);
        let counts: Vec<usize> = r.padas.iter().map(|p| p.syllable_count).collect();
        assert_eq!(counts, vec![8, 8, 8, 12]);
    }

    #[test]
    fn single_short_line_is_other() {
        let r = analyze_anustubh(&line(GOOD), &AnustubhOptions::default());
        assert_eq!(r.input_format, InputFormat::Other);
        assert!(!r.is_anustubh);
        assert_eq!(r.padas.len(), 1);
        assert_eq!(r.errors[0], "Expected 4 padas, found 1");
    }

    #[test]
    fn three_lines_is_other() {
        let text = [line(GOOD), line(GOOD), line(GOOD)].join("\n");
        let r = analyze_anustubh(&text, &AnustubhOptions::default());
        assert_eq!(r.input_format, InputFormat::Other);
        assert!(!r.is_anustubh);
        assert!(r.confidence < 100);
    }

    #[test]
    fn empty_input() {
        let r = analyze_anustubh("", &AnustubhOptions::default());
        assert!(!r.is_anustubh);
        assert_eq!(r.confidence, 0);
        assert_eq!(r.total_syllables, 0);
        assert_eq!(r.input_format, InputFormat::Other);
    }

    #[test]
    fn verse_number_line_is_ignored() {
        let text = format!("{}\n॥ १ ॥", four([GOOD; 4]));
        let r = analyze_anustubh(&text, &AnustubhOptions::default());
        assert_eq!(r.input_format, InputFormat::FourLine);
        assert!(r.is_anustubh);
    }

    #[test]
    fn pada_aksharas_include_closing_consonant() {
        let text = "ननननमामानकम्\n".to_string() + &[line(GOOD), line(GOOD), line(GOOD)].join("\n");
        let r = analyze_anustubh(&text, &AnustubhOptions::default());
        let first = &r.padas[0];
        assert_eq!(first.syllable_count, 8);
        assert_eq!(first.aksharas.last().map(|a| a.text.as_str()), Some("म्"));
        assert!(first.eighth_heavy);
    }

    #[test]
    fn conjunct_after_line_break_closes_eighth() {
        let rest = [line(GOOD), line(GOOD)].join("\n");
        let opts = AnustubhOptions::default();

        let text = format!("{}न\nस्त{}\n{rest}", line("SSSSSSS"), line("SSSSSSS"));
        let r = analyze_anustubh(&text, &opts);
        assert_eq!(r.input_format, InputFormat::FourLine);
        assert_eq!(r.padas[0].syllable_count, 8);
        assert_eq!(weights_to_string(&r.padas[0].syllables), "SSSSSSSS");
        assert!(r.padas[0].eighth_heavy);
        assert_eq!(r.padas[1].syllable_count, 8);
        assert_eq!(r.padas[1].syllables[0], Weight::Light);

        // Without the cluster the same syllable stays light.
        let text = format!("{}न\nत{}\n{rest}", line("SSSSSSS"), line("SSSSSSS"));
        let r = analyze_anustubh(&text, &opts);
        assert!(!r.padas[0].eighth_heavy);
    }

    #[test]
    fn gita_opening_verse() {
        let text = "धर्मक्षेत्रे कुरुक्षेत्रे समवेता युयुत्सवः ।\n\
                    मामकाः पाण्डवाश्चैव किमकुर्वत सञ्जय ॥१॥";
        let r = analyze_anustubh(text, &AnustubhOptions::default());
        assert_eq!(r.input_format, InputFormat::TwoLine);
        assert!(r.padas.iter().all(|p| p.syllable_count == 8));
        let eighth: Vec<bool> = r.padas.iter().map(|p| p.eighth_heavy).collect();
        assert_eq!(eighth, vec![true, true, false, false]);
        assert!(r.is_anustubh);
        assert_eq!(r.confidence, 85);
    }
}
