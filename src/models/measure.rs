//! Height and weight measurements stored as text ("0.71 m", "6.9 kg")

use regex::Regex;

use crate::error::{PokedexError, Result};

lazy_static::lazy_static! {
    static ref LEADING_NUMBER: Regex = Regex::new(r"^\s*([+-]?\d+(?:\.\d+)?)").unwrap();
}

/// Parse the numeric value of a measurement text.
///
/// Only the leading decimal number is read, so both `"0.71 m"` and the
/// unit-less `"0.71"` found in exported CSV files give `0.71`.
pub fn parse_measure(text: &str) -> Result<f64> {
    let caps = LEADING_NUMBER
        .captures(text)
        .ok_or_else(|| PokedexError::measure(text))?;

    caps[1]
        .parse::<f64>()
        .map_err(|_| PokedexError::measure(text))
}

/// Strip the unit from a measurement text, keeping everything before the
/// first space. Text without a space is returned unchanged.
pub fn strip_unit(text: &str) -> &str {
    match text.find(' ') {
        Some(pos) => &text[..pos],
        None => text,
    }
}
