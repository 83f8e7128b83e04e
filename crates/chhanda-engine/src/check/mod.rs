// Meter conformance: compare each line of a text against a chosen meter

pub mod suggest;

use chhanda_core::analysis::LineAnalysis;
use chhanda_core::check::{GanaMismatch, LineCheck, MeterCheck, WeightMismatch};
use chhanda_core::meter::{Meter, MeterTable};

use crate::ChhandaError;
use crate::stanza::{AnalysisOptions, analyze_line};

/// Check every non-empty line of `text` against the meter named
/// `meter_name` (Latin or Devanagari).
///
/// Fails when the meter is unknown or has no fixed gana pattern.
pub fn check_meter(
    text: &str,
    meter_name: &str,
    table: &MeterTable,
    options: &AnalysisOptions,
) -> Result<MeterCheck, ChhandaError> {
    let meter = table
        .get(meter_name)
        .ok_or_else(|| ChhandaError::UnknownMeter(meter_name.trim().to_string()))?;
    if meter.is_positional() {
        return Err(ChhandaError::PositionalMeter(meter.name().to_string()));
    }

    let lines: Vec<LineCheck> = options
        .lines(text)
        .into_iter()
        .enumerate()
        .map(|(i, (line, _))| check_line(i, &analyze_line(line, table, options), meter))
        .collect();

    let total_syllables = lines.iter().map(|l| l.syllables.len()).sum();
    let correct_syllables = lines.iter().map(|l| l.correct_syllables).sum();
    let total_ganas = lines.iter().map(|l| l.ganas.len()).sum();
    let correct_ganas = lines
        .iter()
        .map(|l| {
            l.ganas
                .iter()
                .enumerate()
                .filter(|&(i, actual)| l.expected_ganas.get(i).is_none_or(|e| e == actual))
                .count()
        })
        .sum();
    let is_correct = !lines.is_empty() && lines.iter().all(|l| l.gana_errors.is_empty());

    log::debug!(
        "check {}: {} lines, {}/{} syllables correct",
        meter.name(),
        lines.len(),
        correct_syllables,
        total_syllables
    );

    Ok(MeterCheck {
        meter: meter.name().to_string(),
        overall_match_percentage: percentage(correct_syllables, total_syllables),
        lines,
        total_syllables,
        correct_syllables,
        total_ganas,
        correct_ganas,
        is_correct,
    })
}

fn check_line(line_index: usize, analysis: &LineAnalysis, meter: &Meter) -> LineCheck {
    let expected_weights = meter.weights();
    let expected_ganas = meter.canonical_pattern().to_vec();

    let mut weight_errors = Vec::new();
    let mut correct_syllables = 0;
    // Syllables past the end of the pattern have no expectation.
    for (position, &actual) in analysis.syllables.iter().enumerate() {
        match expected_weights.get(position) {
            Some(&expected) if expected != actual => weight_errors.push(WeightMismatch {
                position,
                expected,
                actual,
            }),
            _ => correct_syllables += 1,
        }
    }

    let positions = analysis.ganas.len().max(expected_ganas.len());
    let gana_errors: Vec<GanaMismatch> = (0..positions)
        .filter_map(|position| {
            let actual = analysis.ganas.get(position);
            let expected = expected_ganas.get(position);
            (actual != expected).then(|| GanaMismatch {
                position,
                expected: expected.cloned(),
                actual: actual.cloned(),
            })
        })
        .collect();

    LineCheck {
        line_index,
        line: analysis.line.clone(),
        syllables: analysis.syllables.clone(),
        ganas: analysis.ganas.clone(),
        is_correct: gana_errors.is_empty(),
        expected_ganas,
        weight_errors,
        gana_errors,
        correct_syllables,
        match_percentage: percentage(correct_syllables, analysis.syllables.len()),
    }
}

fn percentage(part: usize, total: usize) -> f64 {
    if total == 0 {
        0.0
    } else {
        part as f64 / total as f64 * 100.0
    }
}
