//! Line classification for the config format.
//!
//! Each recognized line shape has its own compiled pattern, and each
//! classifier is a pure function from a line to optional capture groups.
//! The patterns are compiled once, process-wide, and never mutated.
//!
//! The setting pattern's key capture is greedy on purpose: an override
//! line like `path<staging> = /srv/` first matches as a plain setting
//! with key `path<staging>`, and only the separate override pattern
//! splits that into the base key and the override name. The parser
//! relies on running both passes.

use std::borrow::Cow;

use once_cell::sync::Lazy;
use regex::Regex;

/// Group header: `[name]`, full line.
static GROUP_LINE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\[(.+)\]$").unwrap());

/// Setting: `key = value`, at most one space tolerated on each side of `=`.
static SETTING_LINE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^(.+)\s?=\s?(.+)$").unwrap());

/// Override setting: `key<override> = value`.
static OVERRIDE_LINE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(.+)<(.+)>\s?=\s?(.+)$").unwrap());

/// Comment: everything from the first run of `;` characters to end of line.
static COMMENT: Lazy<Regex> = Lazy::new(|| Regex::new(r";+.*$").unwrap());

/// Remove any comment from the line and trim surrounding whitespace.
/// A line that is a comment in its entirety becomes empty.
pub(crate) fn strip_comment(line: &str) -> Cow<'_, str> {
    match COMMENT.replace(line, "") {
        Cow::Borrowed(s) => Cow::Borrowed(s.trim()),
        Cow::Owned(s) => Cow::Owned(s.trim().to_string()),
    }
}

/// Parse a group name out of a `[name]` line. The captured name is
/// trimmed and must be non-empty; an empty bracket pair is not a group
/// header.
pub(crate) fn group_name(line: &str) -> Option<&str> {
    let captures = GROUP_LINE.captures(line)?;
    let name = captures.get(1)?.as_str().trim();
    if name.is_empty() {
        return None;
    }
    Some(name)
}

/// Parse a `key = value` line into trimmed `(key, raw_value)` captures.
/// The key capture is greedy and may still contain an override marker.
pub(crate) fn setting(line: &str) -> Option<(&str, &str)> {
    let captures = SETTING_LINE.captures(line)?;
    Some((
        captures.get(1)?.as_str().trim(),
        captures.get(2)?.as_str().trim(),
    ))
}

/// Parse a `key<override> = value` line into trimmed
/// `(key, override_name, raw_value)` captures.
pub(crate) fn setting_override(line: &str) -> Option<(&str, &str, &str)> {
    let captures = OVERRIDE_LINE.captures(line)?;
    Some((
        captures.get(1)?.as_str().trim(),
        captures.get(2)?.as_str().trim(),
        captures.get(3)?.as_str().trim(),
    ))
}
