//! Wire text -> message.
//!
//! The caller strips PRI, VERSION, TIMESTAMP, HOSTNAME and APP-NAME before
//! handing text over; the only header token left is MSGID.

use bytes::Bytes;

use super::message::{StructuredData, StructuredMessage};
use super::scanner::parse_structured_data;
use super::{EMPTY_VALUE, NILVALUE};
use crate::error::{Result, SdError};

/// Parse `MSGID SP STRUCTURED-DATA [SP MSG]`. All or nothing.
pub fn decode(text: &str) -> Result<StructuredMessage> {
    let out = parse(text);
    if let Err(e) = &out {
        tracing::debug!(code = e.code().as_str(), reason = %e, "structured message rejected");
    }
    out
}

/// [`decode`] a transport buffer. Non-UTF-8 input is `InvalidFormat`.
pub fn decode_bytes(buf: Bytes) -> Result<StructuredMessage> {
    let text = std::str::from_utf8(&buf)
        .map_err(|e| SdError::InvalidFormat(format!("message is not valid UTF-8: {e}")))?;
    decode(text)
}

fn invalid(text: &str) -> SdError {
    SdError::InvalidFormat(text.to_string())
}

fn parse(text: &str) -> Result<StructuredMessage> {
    if let Some(msg) = parse_without_elements(text) {
        return Ok(msg);
    }

    let open = text.find('[').filter(|&i| i > 0).ok_or_else(|| invalid(text))?;
    let close = text.rfind(']').filter(|&i| i > open).ok_or_else(|| invalid(text))?;

    let message_id = header_token(&text[..open]).ok_or_else(|| invalid(text))?;

    // One separator char follows the last `]`.
    let mut rest = text[close + 1..].chars();
    rest.next();
    let message = rest.as_str();

    let structured_data = parse_structured_data(&text[open..=close])?;

    Ok(StructuredMessage::new(
        nil_to_none(message_id),
        None,
        structured_data,
        message,
    ))
}

/// `MSGID SP "-" [SP MSG]`: what the encoder emits for empty structured data.
fn parse_without_elements(text: &str) -> Option<StructuredMessage> {
    let (header, rest) = text.split_once(' ')?;
    if header.is_empty() || header.contains('[') {
        return None;
    }
    let message = match rest.strip_prefix(EMPTY_VALUE)? {
        "" => "",
        tail => tail.strip_prefix(' ')?,
    };
    Some(StructuredMessage::new(
        nil_to_none(header),
        None,
        StructuredData::new(),
        message,
    ))
}

/// The single space-separated token of the header. Trailing separators are
/// tolerated, anything else is not.
fn header_token(header: &str) -> Option<&str> {
    let mut tokens: Vec<&str> = header.split(' ').collect();
    while tokens.last() == Some(&"") {
        tokens.pop();
    }
    match tokens.as_slice() {
        [token] => Some(*token),
        _ => None,
    }
}

fn nil_to_none(token: &str) -> Option<String> {
    (token != NILVALUE).then(|| token.to_string())
}
