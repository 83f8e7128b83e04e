// Correction suggestions derived from a conformance check

use chhanda_core::check::{MeterCheck, Suggestion};

/// Default cap on the number of suggestions.
pub const DEFAULT_MAX_SUGGESTIONS: usize = 5;

/// Turn the gana mismatches of every non-conforming line into suggestions,
/// in line and position order, keeping at most `limit`.
pub fn suggest_corrections(check: &MeterCheck, limit: usize) -> Vec<Suggestion> {
    check
        .lines
        .iter()
        .filter(|line| !line.is_correct)
        .flat_map(|line| {
            line.gana_errors.iter().map(move |err| Suggestion {
                line: line.line_index,
                position: err.position,
                actual: err.actual.clone(),
                expected: err.expected.clone(),
            })
        })
        .take(limit)
        .collect()
}
