// WASM bindings for the Devanagari meter analyzer.
//
// Provides a `WasmChhanda` class exported via wasm-bindgen that wraps
// the `ChhandaHandle` from chhanda-engine. Analysis results are serialized
// to JavaScript values using serde-wasm-bindgen, with camelCase fields.
//
// Usage from JavaScript:
//
//   const chhanda = new WasmChhanda();             // built-in meters
//   const custom = new WasmChhanda(metersJson);    // custom meter table
//   chhanda.analyze("...");          // => { results: [...], overallChhanda, anustubhResult }
//   chhanda.syllables("...");        // => "SSISSIISISS"
//   chhanda.check("...", "Indravajra");     // => { isCorrect, lines: [...], ... }
//   chhanda.suggest("...", "Indravajra");   // => ["line 2, gana 1: ...", ...]
//   chhanda.meterForPattern("ISS ISS ISS ISS"); // => "Bhujangaprayata"
//   chhanda.terminate();             // optional cleanup

use serde::Serialize;
use wasm_bindgen::prelude::*;

use chhanda_core::enums::weights_to_string;
use chhanda_core::gana::ganas_to_string;
use chhanda_core::meter::Meter;
use chhanda_engine::ChhandaError;
use chhanda_engine::handle::ChhandaHandle;

// ============================================================================
// Serde-serializable DTO types for JS interop
// ============================================================================

/// Serializable representation of a table entry.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct JsMeter {
    name: String,
    devanagari: Option<String>,
    pattern: String,
    syllable_count: usize,
    positional: bool,
}

impl From<&Meter> for JsMeter {
    fn from(m: &Meter) -> Self {
        JsMeter {
            name: m.name().to_string(),
            devanagari: m.devanagari().map(str::to_string),
            pattern: ganas_to_string(m.pattern()),
            syllable_count: m.syllable_count(),
            positional: m.is_positional(),
        }
    }
}

// ============================================================================
// Conversion helpers
// ============================================================================

fn chhanda_error_to_js(e: ChhandaError) -> JsError {
    JsError::new(&e.to_string())
}

fn to_js<T: Serialize>(value: &T) -> Result<JsValue, JsError> {
    serde_wasm_bindgen::to_value(value).map_err(|e| JsError::new(&e.to_string()))
}

// ============================================================================
// WasmChhanda
// ============================================================================

/// Meter analyzer for Devanagari verse.
#[wasm_bindgen]
pub struct WasmChhanda {
    handle: ChhandaHandle,
}

#[wasm_bindgen]
impl WasmChhanda {
    /// Create a new analyzer.
    ///
    /// - `meters_json`: a JSON array of meter definitions
    ///   (`[{ "name": ..., "devanagari": ..., "pattern": ["SSI", ...] }]`).
    ///   When omitted, the built-in table is used.
    #[wasm_bindgen(constructor)]
    pub fn new(meters_json: Option<String>) -> Result<WasmChhanda, JsError> {
        let handle = match meters_json {
            Some(json) => ChhandaHandle::from_json(&json).map_err(chhanda_error_to_js)?,
            None => ChhandaHandle::new(),
        };
        Ok(WasmChhanda { handle })
    }

    /// Analyze a stanza: every line, the overall meter and the Anustubh
    /// result.
    pub fn analyze(&self, text: &str) -> Result<JsValue, JsError> {
        to_js(&self.handle.analyze(text))
    }

    /// Analyze one line.
    #[wasm_bindgen(js_name = "analyzeLine")]
    pub fn analyze_line(&self, line: &str) -> Result<JsValue, JsError> {
        to_js(&self.handle.analyze_line(line))
    }

    /// Syllable weights of one line as an `I`/`S` string.
    pub fn syllables(&self, line: &str) -> String {
        weights_to_string(&self.handle.syllables(line))
    }

    /// Segment text into aksharas.
    ///
    /// Returns an array of `{ text, pos, len, kind }` objects.
    pub fn aksharas(&self, text: &str) -> Result<JsValue, JsError> {
        to_js(&self.handle.aksharas(text))
    }

    /// Run the Anustubh analysis on a stanza.
    pub fn anustubh(&self, text: &str) -> Result<JsValue, JsError> {
        to_js(&self.handle.anustubh(text))
    }

    /// Weight and gana counts for a stanza.
    pub fn stats(&self, text: &str) -> Result<JsValue, JsError> {
        to_js(&self.handle.stats(text))
    }

    /// Check a text against a named meter.
    ///
    /// Throws when the meter is unknown or has no fixed gana pattern.
    pub fn check(&self, text: &str, meter: &str) -> Result<JsValue, JsError> {
        let check = self.handle.check(text, meter).map_err(chhanda_error_to_js)?;
        to_js(&check)
    }

    /// Correction suggestions as human-readable strings.
    pub fn suggest(&self, text: &str, meter: &str) -> Result<js_sys::Array, JsError> {
        let suggestions = self.handle.suggest(text, meter).map_err(chhanda_error_to_js)?;
        let arr = js_sys::Array::new();
        for s in &suggestions {
            arr.push(&JsValue::from_str(&s.to_string()));
        }
        Ok(arr)
    }

    /// Correction suggestions as structured objects
    /// (`{ line, position, actual, expected }`).
    #[wasm_bindgen(js_name = "suggestDetailed")]
    pub fn suggest_detailed(&self, text: &str, meter: &str) -> Result<JsValue, JsError> {
        let suggestions = self.handle.suggest(text, meter).map_err(chhanda_error_to_js)?;
        to_js(&suggestions)
    }

    /// Compare two stanzas line by line.
    pub fn compare(&self, first: &str, second: &str) -> Result<JsValue, JsError> {
        to_js(&self.handle.compare(first, second))
    }

    /// The meter table as an array of
    /// `{ name, devanagari, pattern, syllableCount, positional }` objects.
    pub fn meters(&self) -> Result<JsValue, JsError> {
        let rows: Vec<JsMeter> = self.handle.table().iter().map(JsMeter::from).collect();
        to_js(&rows)
    }

    /// Name of the meter whose pattern equals the given `I`/`S` pattern,
    /// or `undefined`.
    #[wasm_bindgen(js_name = "meterForPattern")]
    pub fn meter_for_pattern(&self, pattern: &str) -> Option<String> {
        self.handle
            .meter_for_pattern(pattern)
            .map(|m| m.name().to_string())
    }

    /// Release resources held by this instance.
    ///
    /// After calling this method, the instance should not be used.
    pub fn terminate(self) {}

    // =========================================================================
    // Option setters
    // =========================================================================

    /// Set whether dandas, digits and punctuation are removed from lines.
    #[wasm_bindgen(js_name = "setStripPunctuation")]
    pub fn set_strip_punctuation(&mut self, value: bool) {
        self.handle.set_strip_punctuation(value);
    }

    /// Set how many padas must end in a heavy syllable for an Anustubh
    /// verdict.
    #[wasm_bindgen(js_name = "setRequiredHeavyEighth")]
    pub fn set_required_heavy_eighth(&mut self, value: usize) {
        self.handle.set_required_heavy_eighth(value);
    }

    /// Set the syllable range in which a single line is split into padas.
    #[wasm_bindgen(js_name = "setPackedLineRange")]
    pub fn set_packed_line_range(&mut self, min: usize, max: usize) {
        self.handle.set_packed_line_range(min, max);
    }

    #[wasm_bindgen(js_name = "setMaxSuggestions")]
    pub fn set_max_suggestions(&mut self, value: usize) {
        self.handle.set_max_suggestions(value);
    }
}
