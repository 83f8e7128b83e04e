//! End-to-end scenarios: raw stanza text in, verdicts out.
//!
//! Run: cargo test -p chhanda-engine --test stanza_scenarios

use chhanda_core::enums::{InputFormat, Weight, weights_to_string};
use chhanda_core::gana::ganas_to_string;
use chhanda_core::meter::MeterTable;
use chhanda_engine::{
    AnalysisOptions, AnustubhOptions, analyze_anustubh, analyze_line, analyze_stanza,
    check_meter, compare_stanzas, suggest_corrections, weight_stats,
};

// ---------------------------------------------------------------------------
// Fixtures
// ---------------------------------------------------------------------------

/// Definition lines of classical meters, each written in its own meter.
const INDRAVAJRA: &str = "स्यादिन्द्रवज्रा यदि तौ जगौ गः";
const UPENDRAVAJRA: &str = "उपेन्द्रवज्रा जतजास्ततो गौ";
const BHUJANGAPRAYATA: &str = "भुजङ्गप्रयातं भवेद्यैश्चतुर्भिः";

/// Bhagavad Gita 1.1, written as two lines with dandas and verse number.
const GITA_1_1: &str = "धर्मक्षेत्रे कुरुक्षेत्रे समवेता युयुत्सवः ।\n\
                        मामकाः पाण्डवाश्चैव किमकुर्वत सञ्जय ॥१॥";

/// Build a line from a weight pattern using only open syllables:
/// `I` -> न, `S` -> मा.
fn synthetic(pattern: &str) -> String {
    pattern
        .chars()
        .map(|c| if c == 'S' { "मा" } else { "न" })
        .collect()
}

fn defaults() -> (MeterTable, AnalysisOptions) {
    (MeterTable::builtin(), AnalysisOptions::default())
}

// ---------------------------------------------------------------------------
// Line pipeline
// ---------------------------------------------------------------------------

#[test]
fn mnemonic_line_packs_without_meter() {
    let (table, opts) = defaults();
    let r = analyze_line("यमाताराजभानसलगम्", &table, &opts);
    assert_eq!(weights_to_string(&r.syllables), "ISSSISIIIS");
    assert_eq!(ganas_to_string(&r.ganas), "ISS SIS III S");
    assert!(r.chhanda.is_none());
    assert_eq!(r.aksharas.len(), 11);
    assert_eq!(r.akshara_map.len(), 11);
}

#[test]
fn closing_consonant_word() {
    let (table, opts) = defaults();
    let r = analyze_line("कम्", &table, &opts);
    assert_eq!(r.syllables, vec![Weight::Heavy]);
    assert_eq!(r.akshara_map, vec![Some(0), None]);
}

#[test]
fn bhujangaprayata_definition_line() {
    let (table, opts) = defaults();
    let r = analyze_line(BHUJANGAPRAYATA, &table, &opts);
    assert_eq!(ganas_to_string(&r.ganas), "ISS ISS ISS ISS");
    assert_eq!(r.chhanda.as_deref(), Some("Bhujangaprayata"));
}

#[test]
fn danda_does_not_change_weights() {
    let (table, opts) = defaults();
    let with = analyze_line(&format!("{INDRAVAJRA} ॥"), &table, &opts);
    let without = analyze_line(INDRAVAJRA, &table, &opts);
    assert_eq!(with.syllables, without.syllables);
    assert_eq!(with.chhanda, without.chhanda);
}

// ---------------------------------------------------------------------------
// Stanzas
// ---------------------------------------------------------------------------

#[test]
fn uniform_stanza_gets_overall_meter() {
    let (table, opts) = defaults();
    let text = [INDRAVAJRA; 4].join("\n");
    let r = analyze_stanza(&text, &table, &opts);
    assert_eq!(r.overall_chhanda.as_deref(), Some("Indravajra"));
    assert!(r.results.iter().all(|l| l.chhanda.as_deref() == Some("Indravajra")));
}

#[test]
fn one_changed_line_clears_overall_meter() {
    let (table, opts) = defaults();
    let text = [INDRAVAJRA, UPENDRAVAJRA, INDRAVAJRA, INDRAVAJRA].join("\n");
    let r = analyze_stanza(&text, &table, &opts);
    assert!(r.overall_chhanda.is_none());
    assert_eq!(r.results.len(), 4);
}

#[test]
fn blank_lines_are_ignored() {
    let (table, opts) = defaults();
    let text = format!("\n{INDRAVAJRA}\n\n   \n{INDRAVAJRA}\n");
    let r = analyze_stanza(&text, &table, &opts);
    assert_eq!(r.results.len(), 2);
    assert_eq!(r.overall_chhanda.as_deref(), Some("Indravajra"));
}

#[test]
fn stats_over_stanza() {
    let (table, opts) = defaults();
    let r = analyze_stanza(&[INDRAVAJRA; 2].join("\n"), &table, &opts);
    let s = weight_stats(&r);
    assert_eq!(s.total_syllables, 22);
    assert_eq!(s.heavy_count, 14);
    assert_eq!(s.light_count, 8);
    assert_eq!(s.total_ganas, 8);
    assert_eq!(s.total_matras, 36);
}

// ---------------------------------------------------------------------------
// Anustubh
// ---------------------------------------------------------------------------

#[test]
fn gita_verse_is_anustubh() {
    let r = analyze_anustubh(GITA_1_1, &AnustubhOptions::default());
    assert_eq!(r.input_format, InputFormat::TwoLine);
    assert_eq!(r.total_syllables, 32);
    assert!(r.is_anustubh);
    assert_eq!(r.confidence, 85);
    assert_eq!(weights_to_string(&r.padas[0].syllables), "SSSSISSS");
    assert_eq!(weights_to_string(&r.padas[1].syllables), "IISSISIS");
}

#[test]
fn gita_verse_fails_strict_threshold() {
    let strict = AnustubhOptions {
        required_heavy_eighth: 3,
        ..AnustubhOptions::default()
    };
    let r = analyze_anustubh(GITA_1_1, &strict);
    assert!(!r.is_anustubh);
    assert_eq!(r.errors.len(), 2);
}

#[test]
fn stanza_carries_anustubh_result() {
    let (table, opts) = defaults();
    let r = analyze_stanza(GITA_1_1, &table, &opts);
    assert!(r.anustubh.is_anustubh);
    assert!(r.overall_chhanda.is_none());
    assert_eq!(r.results.len(), 2);
}

#[test]
fn two_line_synthetic_stanza() {
    let half = synthetic("SSSSISIS");
    let text = format!("{half}{half}\n{half}{half}");
    let r = analyze_anustubh(&text, &AnustubhOptions::default());
    assert_eq!(r.input_format, InputFormat::TwoLine);
    assert!(r.is_anustubh);
    assert_eq!(r.confidence, 100);
}

#[test]
fn flipping_an_eighth_syllable_lowers_confidence() {
    let good = synthetic("SSSSISIS");
    let bad = synthetic("SSSSISII");
    let perfect = analyze_anustubh(&[good.as_str(); 4].join("\n"), &AnustubhOptions::default());
    let flipped = analyze_anustubh(
        &[good.as_str(), good.as_str(), bad.as_str(), good.as_str()].join("\n"),
        &AnustubhOptions::default(),
    );
    assert_eq!(perfect.confidence, 100);
    assert!(flipped.confidence < 100);
    assert!(flipped.is_anustubh);
}

// ---------------------------------------------------------------------------
// Checking and comparison
// ---------------------------------------------------------------------------

#[test]
fn check_and_suggest() {
    let (table, opts) = defaults();
    let text = [INDRAVAJRA, UPENDRAVAJRA].join("\n");
    let check = check_meter(&text, "Indravajra", &table, &opts).unwrap();
    assert!(check.lines[0].is_correct);
    assert!(!check.lines[1].is_correct);
    assert_eq!(check.total_syllables, 22);
    assert_eq!(check.correct_syllables, 21);
    let suggestions = suggest_corrections(&check, 5);
    assert_eq!(suggestions.len(), 1);
    assert_eq!(suggestions[0].line, 1);
    assert_eq!(
        suggestions[0].to_string(),
        "line 2, gana 1: use SSI (Ta (त)) instead of ISI"
    );
}

#[test]
fn compare_meter_definitions() {
    let (table, opts) = defaults();
    let a = [INDRAVAJRA; 2].join("\n");
    let b = [UPENDRAVAJRA; 2].join("\n");
    let c = compare_stanzas(&a, &b, &table, &opts);
    assert!(!c.same_chhanda);
    assert!(!c.same_pattern);
    assert_eq!(c.similarity_percentage, 0.0);
    assert_eq!(c.first.overall_chhanda.as_deref(), Some("Indravajra"));
    assert_eq!(c.second.overall_chhanda.as_deref(), Some("Upendravajra"));
}
