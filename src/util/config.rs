//! Configuration file parsing utilities.
//!
//! This module provides helpers for parsing configuration files with common
//! patterns like comment skipping and key-value parsing.

/// What: Check if a line should be skipped (empty or comment).
///
/// Inputs:
/// - `line`: Line to check
///
/// Output:
/// - `true` if the line should be skipped, `false` otherwise
///
/// Details:
/// - Skips empty lines and lines starting with `#`, `//`, or `;`
#[must_use]
pub fn skip_comment_or_empty(line: &str) -> bool {
    let trimmed = line.trim();
    trimmed.is_empty()
        || trimmed.starts_with('#')
        || trimmed.starts_with("//")
        || trimmed.starts_with(';')
}

/// What: Parse a key-value pair from a line.
///
/// Inputs:
/// - `line`: Line containing key=value format
///
/// Output:
/// - `Some((key, value))` if parsing succeeds, `None` otherwise
///
/// Details:
/// - Splits on the first `=` character
/// - Key is lower-cased with `.`, `-` and spaces folded to `_`
/// - A trailing ` #` comment is removed from the value
#[must_use]
pub fn parse_key_value(line: &str) -> Option<(String, String)> {
    let trimmed = line.trim();
    let (raw_key, raw_val) = trimmed.split_once('=')?;
    let key = raw_key.trim().to_lowercase().replace(['.', '-', ' '], "_");
    if key.is_empty() {
        return None;
    }
    Some((key, strip_inline_comment(raw_val.trim()).to_string()))
}

/// Remove a ` #...` trailing comment; a `#` glued to text (e.g. `a#b`) is kept.
#[must_use]
pub fn strip_inline_comment(s: &str) -> &str {
    s.find(" #").map_or(s, |i| &s[..i]).trim()
}

/// What: Interpret a settings value as a boolean.
///
/// Inputs:
/// - `val`: Raw value text.
///
/// Output:
/// - `true` for `true`, `1`, `yes`, `on` (any case); `false` otherwise.
#[must_use]
pub fn parse_bool(val: &str) -> bool {
    let lv = val.trim().to_ascii_lowercase();
    lv == "true" || lv == "1" || lv == "yes" || lv == "on"
}
