//! The line-break escaping codec shared by both on-disk representations.
//!
//! Per-language text files and the sheet both store one value per record
//! line; literal newlines inside a value are replaced by the [`LINE_BREAK`]
//! token on write and restored on read.

/// Sentinel token substituted for a literal newline in single-line storage.
///
/// Must be identical in the text files and the sheet for round trips to be
/// correct; existing localization data already uses this exact token, so it
/// cannot be changed without a migration.
pub const LINE_BREAK: &str = "<line_break>";

/// Replaces every literal newline in `value` with the [`LINE_BREAK`] token.
///
/// The result contains no literal newline; no other character is altered.
/// Inverse of [`decode`] for values that do not contain the token as
/// ordinary text (a known limitation of the token scheme).
pub fn encode(value: &str) -> String {
    value.replace('\n', LINE_BREAK)
}

/// Replaces every occurrence of the [`LINE_BREAK`] token in `line` with a
/// literal newline.
pub fn decode(line: &str) -> String {
    line.replace(LINE_BREAK, "\n")
}
