//! Error surface of the structured-data codec.

use thiserror::Error;

/// Stable error codes (used in logs and test vectors).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    /// MSGID contains a non-printable character.
    InvalidIdentifier,
    /// SD-ID is blank or non-printable.
    InvalidStructuredDataId,
    /// PARAM-NAME is blank or non-printable.
    InvalidParameterName,
    /// PARAM-VALUE is absent.
    NullParameterValue,
    /// Wire text does not follow the structured-data grammar.
    InvalidFormat,
}

impl ErrorCode {
    /// String representation used in logs and vectors.
    pub fn as_str(self) -> &'static str {
        match self {
            ErrorCode::InvalidIdentifier => "INVALID_IDENTIFIER",
            ErrorCode::InvalidStructuredDataId => "INVALID_SD_ID",
            ErrorCode::InvalidParameterName => "INVALID_PARAM_NAME",
            ErrorCode::NullParameterValue => "NULL_PARAM_VALUE",
            ErrorCode::InvalidFormat => "INVALID_FORMAT",
        }
    }
}

/// Shared result type.
pub type Result<T> = std::result::Result<T, SdError>;

/// Codec failure. Every variant aborts the whole encode/decode call.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SdError {
    #[error("invalid message id: {0}")]
    InvalidIdentifier(String),
    #[error("illegal structured data id: {0:?}")]
    InvalidStructuredDataId(String),
    #[error("illegal structured data parameter name: {0:?}")]
    InvalidParameterName(String),
    #[error("null structured data parameter value for parameter name: {0}")]
    NullParameterValue(String),
    #[error("invalid syslog string format: {0}")]
    InvalidFormat(String),
}

impl SdError {
    /// Map the error to its stable code.
    pub fn code(&self) -> ErrorCode {
        match self {
            SdError::InvalidIdentifier(_) => ErrorCode::InvalidIdentifier,
            SdError::InvalidStructuredDataId(_) => ErrorCode::InvalidStructuredDataId,
            SdError::InvalidParameterName(_) => ErrorCode::InvalidParameterName,
            SdError::NullParameterValue(_) => ErrorCode::NullParameterValue,
            SdError::InvalidFormat(_) => ErrorCode::InvalidFormat,
        }
    }
}
