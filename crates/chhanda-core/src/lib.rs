//! Shared types for Chhanda, a Devanagari prosody analyzer.
//!
//! This crate holds the data model used by every other crate in the
//! workspace. It contains no analysis logic beyond gana packing, which the
//! meter table needs to canonicalize its patterns.
//!
//! # Modules
//!
//! - [`character`] -- Devanagari character classes and marks
//! - [`enums`] -- [`Weight`](enums::Weight), akshara kinds, stanza input formats
//! - [`akshara`] -- The akshara token type
//! - [`gana`] -- Gana codes, display names, and the gana packer
//! - [`meter`] -- Meter definitions and the meter table
//! - [`analysis`] -- Line, stanza, pada and Anustubh results
//! - [`check`] -- Meter conformance results and suggestions
//!
//! Enable the `serde` feature to derive `Serialize`/`Deserialize` on the
//! public data types. Field names are camelCase.

pub mod akshara;
pub mod analysis;
pub mod character;
pub mod check;
pub mod enums;
pub mod gana;
pub mod meter;

pub use akshara::Akshara;
pub use enums::{AksharaKind, InputFormat, Weight};
pub use gana::{Gana, GanaName};
pub use meter::{Meter, MeterDefinition, MeterTable, MeterTableError};
