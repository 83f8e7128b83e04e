//! Prosody engine for Devanagari (Nepali and Sanskrit) poetry.
//!
//! Text flows through a fixed pipeline:
//!
//! 1. [`text`] -- NFC normalization and line cleaning
//! 2. [`segmenter`] -- split a line into aksharas
//! 3. [`prosody`] -- laghu/guru weights, gana packing, meter matching
//! 4. [`stanza`] -- per-line results and the overall meter of a stanza
//! 5. [`anustubh`] -- positional analysis for the Anustubh meter
//!
//! On top of that, [`check`] compares a text against a chosen meter and
//! proposes corrections, [`stats`] summarizes weights, and
//! [`stanza::compare`] compares two stanzas line by line.
//!
//! With the `handle` feature, [`handle::ChhandaHandle`] bundles a meter
//! table and options behind one object, which the CLI, WASM and FFI crates
//! build on.

pub mod anustubh;
pub mod check;
pub mod prosody;
pub mod segmenter;
pub mod stanza;
pub mod stats;
pub mod text;

#[cfg(feature = "handle")]
pub mod handle;

pub use anustubh::{AnustubhOptions, analyze_anustubh};
pub use check::check_meter;
pub use check::suggest::suggest_corrections;
pub use prosody::{Syllabification, classify, match_meter, pack_weights};
pub use segmenter::split_aksharas;
pub use stanza::compare::compare_stanzas;
pub use stanza::{AnalysisOptions, analyze_line, analyze_stanza};
pub use stats::weight_stats;

use chhanda_core::meter::MeterTableError;

/// Errors returned by the engine.
#[derive(Debug, thiserror::Error)]
pub enum ChhandaError {
    /// No meter with this Latin or Devanagari name.
    #[error("unknown meter: {0}")]
    UnknownMeter(String),

    /// The meter has no fixed gana pattern to check against.
    #[error("meter {0} is governed by positional rules and has no fixed pattern")]
    PositionalMeter(String),

    /// A meter table failed validation.
    #[error("invalid meter table: {0}")]
    MeterTable(#[from] MeterTableError),

    /// A meter table could not be parsed as JSON.
    #[cfg(feature = "handle")]
    #[error("failed to parse meter table: {0}")]
    MeterTableJson(#[from] serde_json::Error),
}
