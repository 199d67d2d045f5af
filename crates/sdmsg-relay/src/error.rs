use sdmsg_core::SdError;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, RelayError>;

#[derive(Debug, Error)]
pub enum RelayError {
    #[error("invalid config: {0}")]
    Config(String),

    #[error("unsupported config version: {0}")]
    UnsupportedVersion(u32),

    #[error("line too long: {len} bytes (max {max})")]
    LineTooLong { len: usize, max: usize },

    #[error(transparent)]
    Codec(#[from] SdError),

    #[error("invalid json: {0}")]
    Json(#[from] serde_json::Error),

    #[error("io: {0}")]
    Io(#[from] std::io::Error),
}

impl RelayError {
    /// Stable code for logs.
    pub fn code(&self) -> &'static str {
        match self {
            RelayError::Config(_) => "CONFIG",
            RelayError::UnsupportedVersion(_) => "UNSUPPORTED_VERSION",
            RelayError::LineTooLong { .. } => "LINE_TOO_LONG",
            RelayError::Codec(e) => e.code().as_str(),
            RelayError::Json(_) => "INVALID_JSON",
            RelayError::Io(_) => "IO",
        }
    }
}
