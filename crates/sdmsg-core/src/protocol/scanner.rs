//! Escape-aware delimiter scanner for the STRUCTURED-DATA span.
//!
//! The scanner works on bytes. Every delimiter is ASCII and UTF-8 continuation
//! bytes never collide with ASCII, so each position it reports is a char
//! boundary and slicing the source `&str` there cannot panic.

use super::escape::unescape_value;
use super::message::{SdParams, StructuredData};
use super::EMPTY_VALUE;
use crate::error::{Result, SdError};

/// Find the first position at or after `start` holding one of `targets`.
///
/// A backslash moves the cursor one extra step, but the byte it lands on is
/// still tested against `targets`. So `\"` is skipped when looking for `]`,
/// while `\]` is reported as a `]`. Decoders in the field share this
/// behavior, and values holding `]` do not survive a decode.
pub fn scan_for(data: &[u8], start: usize, targets: &[u8]) -> Option<usize> {
    let mut pos = start;
    loop {
        if data.get(pos) == Some(&b'\\') {
            pos += 1;
        }
        let c = data.get(pos)?;
        if targets.contains(c) {
            return Some(pos);
        }
        pos += 1;
    }
}

fn invalid(data: &str) -> SdError {
    SdError::InvalidFormat(format!("invalid structured data in syslog message '{data}'"))
}

/// Parse one or more adjacent `[SD-ID PARAM*]` elements.
///
/// The EMPTY-VALUE sentinel yields an empty map. Any structural violation
/// fails the whole span.
pub fn parse_structured_data(data: &str) -> Result<StructuredData> {
    let mut out = StructuredData::new();
    if data == EMPTY_VALUE {
        return Ok(out);
    }

    let bytes = data.as_bytes();
    let mut start = 0;

    while start < bytes.len() {
        if bytes.get(start) != Some(&b'[') {
            return Err(invalid(data));
        }
        let end = scan_for(bytes, start, b"]").ok_or_else(|| invalid(data))?;

        let mut sd_id: Option<&str> = None;
        let mut params = SdParams::new();

        while start < end {
            // Step over `[` or the previous boundary.
            start += 1;
            let boundary = scan_for(bytes, start, b"] ").ok_or_else(|| invalid(data))?;

            if sd_id.is_none() {
                sd_id = Some(&data[start..boundary]);
            } else {
                let (name, value) = split_param(data, start, boundary)?;
                params.insert(name.to_string(), Some(unescape_value(value).into_owned()));
            }
            start = boundary;
        }

        start += 1;
        out.insert(sd_id.unwrap_or_default().to_string(), params);
    }

    Ok(out)
}

/// Split `name="value"` occupying `[start, boundary)` into raw name and value.
fn split_param(data: &str, start: usize, boundary: usize) -> Result<(&str, &str)> {
    let bytes = data.as_bytes();

    let eq = bytes[start..]
        .iter()
        .position(|&b| b == b'=')
        .map(|i| start + i)
        .filter(|&i| i < boundary)
        .ok_or_else(|| invalid(data))?;

    let open = eq + 1;
    let close = boundary - 1;
    if bytes.get(open) != Some(&b'"') || bytes.get(close) != Some(&b'"') || open >= close {
        return Err(invalid(data));
    }

    Ok((&data[start..eq], &data[open + 1..close]))
}
