// FFI functions are inherently unsafe; callers must ensure pointer validity.
// Safety contracts are documented per-function in the public API comments.
#![allow(clippy::missing_safety_doc)]

// chhanda-ffi: C-compatible FFI layer for ChhandaHandle.
//
// Structured results (stanza analysis, checks, comparisons) cross the
// boundary as JSON strings with the same camelCase fields the WASM build
// produces.
//
// Memory management rules:
// - Opaque `ChhandaHandle` pointer: created by `chhanda_new`, freed by `chhanda_free`.
// - Returned strings: caller must free with `chhanda_free_str`.
// - Returned string arrays: caller must free with `chhanda_free_str_array`.
// - All input strings are UTF-8 encoded, null-terminated C strings.

use std::ffi::{CStr, CString, c_char, c_int};
use std::ptr;

use serde::Serialize;

use chhanda_core::enums::weights_to_string;
use chhanda_core::gana::ganas_to_string;
use chhanda_engine::handle::ChhandaHandle;

// ── Handle lifecycle ─────────────────────────────────────────────

/// Create a new analyzer handle.
///
/// - `meters_json`: JSON array of meter definitions, or NULL for the
///   built-in table.
///
/// Returns an opaque pointer on success, NULL on failure.
/// On failure, if `error_out` is non-NULL, it receives a heap-allocated error string
/// that the caller must free with `chhanda_free_str`.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn chhanda_new(
    meters_json: *const c_char,
    error_out: *mut *mut c_char,
) -> *mut ChhandaHandle {
    if meters_json.is_null() {
        return Box::into_raw(Box::new(ChhandaHandle::new()));
    }
    let Some(json) = cstr_to_str(meters_json) else {
        set_error(error_out, "meters_json is not valid UTF-8");
        return ptr::null_mut();
    };
    match ChhandaHandle::from_json(json) {
        Ok(handle) => Box::into_raw(Box::new(handle)),
        Err(e) => {
            set_error(error_out, &e.to_string());
            ptr::null_mut()
        }
    }
}

/// Free a handle created by `chhanda_new`. NULL is ignored.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn chhanda_free(handle: *mut ChhandaHandle) {
    if !handle.is_null() {
        drop(unsafe { Box::from_raw(handle) });
    }
}

// ── Analysis ────────────────────────────────────────────────────

/// Analyze a stanza. Returns the result as a JSON object
/// (`results`, `overallChhanda`, `anustubhResult`).
///
/// Returns a heap-allocated C string. Caller must free with `chhanda_free_str`.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn chhanda_analyze_json(
    handle: *const ChhandaHandle,
    text: *const c_char,
) -> *mut c_char {
    let Some(handle) = (unsafe { handle.as_ref() }) else { return ptr::null_mut(); };
    let Some(text) = cstr_to_str(text) else { return ptr::null_mut(); };
    json_to_c(&handle.analyze(text))
}

/// Analyze one line. Returns a JSON object.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn chhanda_analyze_line_json(
    handle: *const ChhandaHandle,
    line: *const c_char,
) -> *mut c_char {
    let Some(handle) = (unsafe { handle.as_ref() }) else { return ptr::null_mut(); };
    let Some(line) = cstr_to_str(line) else { return ptr::null_mut(); };
    json_to_c(&handle.analyze_line(line))
}

/// Syllable weights of one line as a string of `I` (light) and `S` (heavy).
///
/// Returns a heap-allocated C string. Caller must free with `chhanda_free_str`.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn chhanda_syllables(
    handle: *const ChhandaHandle,
    line: *const c_char,
) -> *mut c_char {
    let Some(handle) = (unsafe { handle.as_ref() }) else { return ptr::null_mut(); };
    let Some(line) = cstr_to_str(line) else { return ptr::null_mut(); };
    str_to_c(&weights_to_string(&handle.syllables(line)))
}

/// Run the Anustubh analysis on a stanza. Returns a JSON object.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn chhanda_anustubh_json(
    handle: *const ChhandaHandle,
    text: *const c_char,
) -> *mut c_char {
    let Some(handle) = (unsafe { handle.as_ref() }) else { return ptr::null_mut(); };
    let Some(text) = cstr_to_str(text) else { return ptr::null_mut(); };
    json_to_c(&handle.anustubh(text))
}

/// Weight and gana counts for a stanza. Returns a JSON object.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn chhanda_stats_json(
    handle: *const ChhandaHandle,
    text: *const c_char,
) -> *mut c_char {
    let Some(handle) = (unsafe { handle.as_ref() }) else { return ptr::null_mut(); };
    let Some(text) = cstr_to_str(text) else { return ptr::null_mut(); };
    json_to_c(&handle.stats(text))
}

/// Compare two stanzas. Returns a JSON object.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn chhanda_compare_json(
    handle: *const ChhandaHandle,
    first: *const c_char,
    second: *const c_char,
) -> *mut c_char {
    let Some(handle) = (unsafe { handle.as_ref() }) else { return ptr::null_mut(); };
    let Some(first) = cstr_to_str(first) else { return ptr::null_mut(); };
    let Some(second) = cstr_to_str(second) else { return ptr::null_mut(); };
    json_to_c(&handle.compare(first, second))
}

// ── Meter checking ──────────────────────────────────────────────

/// Check a text against a named meter. Returns a JSON object.
///
/// Returns NULL when the meter is unknown or positional; if `error_out`
/// is non-NULL it then receives the error message.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn chhanda_check_json(
    handle: *const ChhandaHandle,
    text: *const c_char,
    meter: *const c_char,
    error_out: *mut *mut c_char,
) -> *mut c_char {
    let Some(handle) = (unsafe { handle.as_ref() }) else { return ptr::null_mut(); };
    let Some(text) = cstr_to_str(text) else { return ptr::null_mut(); };
    let Some(meter) = cstr_to_str(meter) else { return ptr::null_mut(); };
    match handle.check(text, meter) {
        Ok(check) => json_to_c(&check),
        Err(e) => {
            set_error(error_out, &e.to_string());
            ptr::null_mut()
        }
    }
}

/// Correction suggestions for a text against a named meter.
///
/// Returns a NULL-terminated array of C strings.
/// Caller must free with `chhanda_free_str_array`.
/// Returns NULL on error, with the message in `error_out` if non-NULL.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn chhanda_suggest(
    handle: *const ChhandaHandle,
    text: *const c_char,
    meter: *const c_char,
    error_out: *mut *mut c_char,
) -> *mut *mut c_char {
    let Some(handle) = (unsafe { handle.as_ref() }) else { return ptr::null_mut(); };
    let Some(text) = cstr_to_str(text) else { return ptr::null_mut(); };
    let Some(meter) = cstr_to_str(meter) else { return ptr::null_mut(); };
    match handle.suggest(text, meter) {
        Ok(suggestions) => {
            let lines: Vec<String> = suggestions.iter().map(ToString::to_string).collect();
            strings_to_c_array(&lines)
        }
        Err(e) => {
            set_error(error_out, &e.to_string());
            ptr::null_mut()
        }
    }
}

// ── Meter table ─────────────────────────────────────────────────

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct MeterEntry<'a> {
    name: &'a str,
    devanagari: Option<&'a str>,
    pattern: String,
    syllable_count: usize,
    positional: bool,
}

/// The meter table as a JSON array of
/// `{ name, devanagari, pattern, syllableCount, positional }` objects.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn chhanda_meters_json(handle: *const ChhandaHandle) -> *mut c_char {
    let Some(handle) = (unsafe { handle.as_ref() }) else { return ptr::null_mut(); };
    let entries: Vec<MeterEntry<'_>> = handle
        .table()
        .iter()
        .map(|m| MeterEntry {
            name: m.name(),
            devanagari: m.devanagari(),
            pattern: ganas_to_string(m.pattern()),
            syllable_count: m.syllable_count(),
            positional: m.is_positional(),
        })
        .collect();
    json_to_c(&entries)
}

/// Name of the meter matching an `I`/`S` pattern, or NULL if none does.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn chhanda_meter_for_pattern(
    handle: *const ChhandaHandle,
    pattern: *const c_char,
) -> *mut c_char {
    let Some(handle) = (unsafe { handle.as_ref() }) else { return ptr::null_mut(); };
    let Some(pattern) = cstr_to_str(pattern) else { return ptr::null_mut(); };
    match handle.meter_for_pattern(pattern) {
        Some(meter) => str_to_c(meter.name()),
        None => ptr::null_mut(),
    }
}

// ── Option setters ──────────────────────────────────────────────

#[unsafe(no_mangle)]
pub unsafe extern "C" fn chhanda_set_strip_punctuation(handle: *mut ChhandaHandle, value: c_int) {
    if let Some(handle) = unsafe { handle.as_mut() } {
        handle.set_strip_punctuation(value != 0);
    }
}

#[unsafe(no_mangle)]
pub unsafe extern "C" fn chhanda_set_required_heavy_eighth(
    handle: *mut ChhandaHandle,
    value: c_int,
) {
    if let Some(handle) = unsafe { handle.as_mut() } {
        handle.set_required_heavy_eighth(value.max(0) as usize);
    }
}

#[unsafe(no_mangle)]
pub unsafe extern "C" fn chhanda_set_packed_line_range(
    handle: *mut ChhandaHandle,
    min: c_int,
    max: c_int,
) {
    if let Some(handle) = unsafe { handle.as_mut() } {
        handle.set_packed_line_range(min.max(0) as usize, max.max(0) as usize);
    }
}

#[unsafe(no_mangle)]
pub unsafe extern "C" fn chhanda_set_max_suggestions(handle: *mut ChhandaHandle, value: c_int) {
    if let Some(handle) = unsafe { handle.as_mut() } {
        handle.set_max_suggestions(value.max(0) as usize);
    }
}

// ── Memory management ───────────────────────────────────────────

/// Free a string returned by any `chhanda_*` function. NULL is ignored.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn chhanda_free_str(s: *mut c_char) {
    free_c_str(s);
}

/// Free a NULL-terminated array of C strings.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn chhanda_free_str_array(arr: *mut *mut c_char) {
    free_null_terminated_array(arr);
}

// ── Internal helpers ────────────────────────────────────────────

fn cstr_to_str<'a>(s: *const c_char) -> Option<&'a str> {
    if s.is_null() {
        return None;
    }
    unsafe { CStr::from_ptr(s) }.to_str().ok()
}

fn str_to_c(s: &str) -> *mut c_char {
    CString::new(s).unwrap_or_default().into_raw()
}

fn json_to_c<T: Serialize>(value: &T) -> *mut c_char {
    match serde_json::to_string(value) {
        Ok(json) => str_to_c(&json),
        Err(_) => ptr::null_mut(),
    }
}

fn set_error(out: *mut *mut c_char, msg: &str) {
    if !out.is_null() {
        unsafe { *out = str_to_c(msg); }
    }
}

fn free_c_str(s: *mut c_char) {
    if !s.is_null() {
        drop(unsafe { CString::from_raw(s) });
    }
}

fn strings_to_c_array(strings: &[String]) -> *mut *mut c_char {
    let mut ptrs: Vec<*mut c_char> = strings.iter().map(|s| str_to_c(s)).collect();
    ptrs.push(ptr::null_mut());
    Box::into_raw(ptrs.into_boxed_slice()) as *mut *mut c_char
}

fn free_null_terminated_array(arr: *mut *mut c_char) {
    if arr.is_null() {
        return;
    }
    let mut i = 0;
    loop {
        let p = unsafe { *arr.add(i) };
        if p.is_null() {
            break;
        }
        free_c_str(p);
        i += 1;
    }
    drop(unsafe { Box::from_raw(ptr::slice_from_raw_parts_mut(arr, i + 1)) });
}
