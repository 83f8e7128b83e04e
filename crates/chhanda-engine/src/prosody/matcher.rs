// Meter matching: exact comparison of a gana sequence against the table

use chhanda_core::gana::Gana;
use chhanda_core::meter::{Meter, MeterTable};

/// Find the first fixed-pattern meter whose packed pattern equals `ganas`.
///
/// Positional meters (empty pattern) never match, and an empty sequence
/// matches nothing.
pub fn match_meter<'a>(ganas: &[Gana], table: &'a MeterTable) -> Option<&'a Meter> {
    if ganas.is_empty() {
        return None;
    }
    table.fixed().find(|m| m.canonical_pattern() == ganas)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chhanda_core::enums::parse_weights;
    use chhanda_core::gana::pack_weights;
    use chhanda_core::meter::MeterDefinition;

    fn ganas(pattern: &str) -> Vec<Gana> {
        pack_weights(&parse_weights(pattern).unwrap())
    }

    #[test]
    fn matches_indravajra() {
        let table = MeterTable::builtin();
        let m = match_meter(&ganas("SSISSIISISS"), &table).unwrap();
        assert_eq!(m.name(), "Indravajra");
    }

    #[test]
    fn matches_split_tail_meter() {
        let table = MeterTable::builtin();
        let m = match_meter(&ganas("SSSSIIIIISSISSISS"), &table).unwrap();
        assert_eq!(m.name(), "Mandakranta");
    }

    #[test]
    fn one_flipped_syllable_breaks_match() {
        let table = MeterTable::builtin();
        assert!(match_meter(&ganas("SSISSIISISI"), &table).is_none());
    }

    #[test]
    fn empty_never_matches() {
        let table = MeterTable::builtin();
        assert!(match_meter(&[], &table).is_none());
    }

    #[test]
    fn positional_meter_is_skipped() {
        let table = MeterTable::from_definitions(vec![MeterDefinition {
            name: "Free".to_string(),
            devanagari: None,
            pattern: Vec::new(),
        }])
        .unwrap();
        assert!(match_meter(&ganas("ISS"), &table).is_none());
    }

    #[test]
    fn first_match_in_table_order_wins() {
        let def = |name: &str| MeterDefinition {
            name: name.to_string(),
            devanagari: None,
            pattern: vec!["ISS".to_string()],
        };
        let table = MeterTable::from_definitions(vec![def("First"), def("Second")]).unwrap();
        assert_eq!(match_meter(&ganas("ISS"), &table).unwrap().name(), "First");
    }
}
