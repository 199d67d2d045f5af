//! Message -> wire text.

use bytes::Bytes;

use super::escape::{escape_into, is_blank, is_printable, nil_protect};
use super::message::StructuredMessage;
use super::EMPTY_VALUE;
use crate::error::{Result, SdError};

/// Render `MSGID SP STRUCTURED-DATA [SP MSG]`.
///
/// Validation runs while rendering; on failure nothing is returned.
pub fn encode(msg: &StructuredMessage) -> Result<String> {
    let out = render(msg);
    if let Err(e) = &out {
        tracing::debug!(code = e.code().as_str(), reason = %e, "structured message rejected");
    }
    out
}

/// [`encode`] into a transport buffer.
pub fn encode_bytes(msg: &StructuredMessage) -> Result<Bytes> {
    encode(msg).map(Bytes::from)
}

fn render(msg: &StructuredMessage) -> Result<String> {
    if !is_printable(msg.message_id()) {
        return Err(SdError::InvalidIdentifier(
            msg.message_id().unwrap_or_default().to_string(),
        ));
    }

    let mut sb = String::with_capacity(64 + msg.message().len());
    sb.push_str(nil_protect(msg.message_id()));
    sb.push(' ');

    if msg.structured_data().is_empty() {
        sb.push_str(EMPTY_VALUE);
    } else {
        for (sd_id, params) in msg.structured_data() {
            if is_blank(Some(sd_id)) || !is_printable(Some(sd_id)) {
                return Err(SdError::InvalidStructuredDataId(sd_id.clone()));
            }
            sb.push('[');
            sb.push_str(sd_id);

            for (name, value) in params {
                if is_blank(Some(name)) || !is_printable(Some(name)) {
                    return Err(SdError::InvalidParameterName(name.clone()));
                }
                let value = value
                    .as_deref()
                    .ok_or_else(|| SdError::NullParameterValue(name.clone()))?;

                sb.push(' ');
                sb.push_str(name);
                sb.push_str("=\"");
                escape_into(&mut sb, value);
                sb.push('"');
            }
            sb.push(']');
        }
    }

    if !msg.message().is_empty() {
        sb.push(' ');
        sb.push_str(nil_protect(Some(msg.message())));
    }

    Ok(sb)
}
