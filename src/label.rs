//! Two-decimal formatting of combinations.
//!
//! value string: `"0.50 1.00 "`  (every value followed by one space)
//! label:        `"050100"`      (same text, spaces and dots removed)

use std::fmt::Write;

/// Space-separated two-decimal values, with a trailing space.
pub fn value_string(combo: &[f64]) -> String {
    let mut out = String::with_capacity(combo.len() * 6);
    for v in combo {
        // Writing into a String cannot fail.
        let _ = write!(out, "{v:.2} ");
    }
    out
}

/// Deterministic key for a combination.
pub fn label(combo: &[f64]) -> String {
    label_from_value_string(&value_string(combo))
}

pub(crate) fn label_from_value_string(value: &str) -> String {
    value.chars().filter(|&c| c != ' ' && c != '.').collect()
}

/// Label and value string in one pass.
pub fn format_combination(combo: &[f64]) -> (String, String) {
    let value = value_string(combo);
    (label_from_value_string(&value), value)
}
