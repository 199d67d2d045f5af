//! PARAM-VALUE escaping and identifier validation.

use std::borrow::Cow;

use super::NILVALUE;

/// Lowest printable code point (`!`).
pub const PRINTABLE_MIN: u32 = 33;
/// Highest printable code point (`~`).
pub const PRINTABLE_MAX: u32 = 126;

/// True when every char is visible 7-bit ASCII. Absent is vacuously printable.
pub fn is_printable(value: Option<&str>) -> bool {
    match value {
        None => true,
        Some(s) => s
            .chars()
            .all(|c| (PRINTABLE_MIN..=PRINTABLE_MAX).contains(&(c as u32))),
    }
}

/// Absent or whitespace-only.
pub fn is_blank(value: Option<&str>) -> bool {
    value.map_or(true, |s| s.chars().all(char::is_whitespace))
}

/// Substitute the NIL sentinel for an absent or blank field.
pub fn nil_protect(value: Option<&str>) -> &str {
    match value {
        Some(s) if !is_blank(Some(s)) => s,
        _ => NILVALUE,
    }
}

/// Append `value` to `out`, backslash-escaping `"`, `\` and `]`.
pub fn escape_into(out: &mut String, value: &str) {
    for c in value.chars() {
        if matches!(c, '"' | '\\' | ']') {
            out.push('\\');
        }
        out.push(c);
    }
}

pub fn escape_value(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    escape_into(&mut out, value);
    out
}

/// Drop every backslash.
///
/// This is not the inverse of [`escape_value`]: a backslash that was never an
/// escape is removed too. Receivers in the field depend on this behavior.
pub fn unescape_value(raw: &str) -> Cow<'_, str> {
    if !raw.contains('\\') {
        return Cow::Borrowed(raw);
    }
    Cow::Owned(raw.chars().filter(|&c| c != '\\').collect())
}
