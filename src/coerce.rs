//! Value coercion: raw trimmed text to a typed [`ConfigValue`].
//!
//! Coercion is total. The stages run in a fixed priority order, each one
//! short-circuiting on first match:
//!
//! 1. Quoted string (`"..."` or `'...'`) — quotes are the explicit escape
//!    hatch that forces string typing.
//! 2. Numeric — integer first, then float.
//! 3. Boolean — `yes`/`no`/`true`/`false`/`1`/`0`, case-insensitive.
//! 4. Comma-separated list, each element coerced recursively.
//! 5. The trimmed raw string, unchanged.
//!
//! The numeric stage runs before the boolean stage, so `1` and `0` always
//! coerce to integers. The boolean vocabulary keeps those entries anyway,
//! for compatibility with the format as originally defined.

use crate::config_value::ConfigValue;

/// Coerce a raw setting value into its typed form. Never fails; the
/// fallback is the trimmed input as a plain string.
pub fn coerce(raw: &str) -> ConfigValue {
    let value = raw.trim();

    if let Some(inner) = quoted_string(value) {
        return ConfigValue::String(inner.to_string());
    }

    if is_numeric(value) {
        if let Some(i) = get_int(value) {
            return ConfigValue::Integer(i);
        }
        if let Some(f) = get_float(value) {
            return ConfigValue::Float(f);
        }
    }

    if let Some(b) = get_boolean(value) {
        return ConfigValue::Bool(b);
    }

    if let Some(items) = get_list(value) {
        return ConfigValue::List(items);
    }

    ConfigValue::String(value.to_string())
}

/// Return the inner content of a value wrapped in a matching pair of
/// single or double quotes. No escape processing; the content is taken
/// verbatim. Empty quote pairs do not count as quoted strings.
fn quoted_string(s: &str) -> Option<&str> {
    let mut chars = s.chars();
    let first = chars.next()?;
    let last = chars.next_back()?;
    if first != last || (first != '"' && first != '\'') {
        return None;
    }
    let inner = &s[1..s.len() - 1];
    if inner.is_empty() {
        return None;
    }
    Some(inner)
}

/// Whether the value has a numeric shape: only digits and at most one
/// decimal point, with at least one digit. Gatekeeps the numeric parses
/// so that values like `.` or `1.2.3` never reach them.
fn is_numeric(s: &str) -> bool {
    let mut dots = 0;
    let mut digits = 0;
    for c in s.chars() {
        match c {
            '0'..='9' => digits += 1,
            '.' => dots += 1,
            _ => return false,
        }
    }
    digits > 0 && dots <= 1
}

/// Parse an integer, if the value is a valid one.
fn get_int(s: &str) -> Option<i64> {
    s.parse().ok()
}

/// Parse a float, if the value is a valid one.
fn get_float(s: &str) -> Option<f64> {
    s.parse().ok()
}

/// Look the value up in the permitted boolean vocabulary,
/// case-insensitively.
fn get_boolean(s: &str) -> Option<bool> {
    match s.to_ascii_lowercase().as_str() {
        "yes" | "true" | "1" => Some(true),
        "no" | "false" | "0" => Some(false),
        _ => None,
    }
}

/// Split a comma-separated value into recursively coerced elements.
/// A value without a comma is never a list.
fn get_list(s: &str) -> Option<Vec<ConfigValue>> {
    if !s.contains(',') {
        return None;
    }
    Some(s.split(',').map(|element| coerce(element.trim())).collect())
}
