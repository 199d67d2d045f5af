use serde::Deserialize;

use crate::error::{RelayError, Result};

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RelayConfig {
    pub version: u32,

    #[serde(default)]
    pub relay: RelaySection,
}

impl RelayConfig {
    pub fn validate(&self) -> Result<()> {
        if self.version != 1 {
            return Err(RelayError::UnsupportedVersion(self.version));
        }

        self.relay.validate()?;

        Ok(())
    }
}

/// Direction of the relay.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Mode {
    /// Wire text in, JSON out.
    #[default]
    Decode,
    /// JSON in, wire text out.
    Encode,
}

/// What happens to a line the codec rejects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OnError {
    /// Log and skip the line.
    #[default]
    Drop,
    /// Stop the run with the error.
    Abort,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RelaySection {
    #[serde(default)]
    pub mode: Mode,

    #[serde(default)]
    pub on_error: OnError,

    #[serde(default = "default_max_line_bytes")]
    pub max_line_bytes: usize,
}

impl Default for RelaySection {
    fn default() -> Self {
        Self {
            mode: Mode::default(),
            on_error: OnError::default(),
            max_line_bytes: default_max_line_bytes(),
        }
    }
}

impl RelaySection {
    pub fn validate(&self) -> Result<()> {
        if !(64..=1_048_576).contains(&self.max_line_bytes) {
            return Err(RelayError::Config(
                "relay.max_line_bytes must be between 64 and 1048576".into(),
            ));
        }
        Ok(())
    }
}

fn default_max_line_bytes() -> usize {
    8192
}
