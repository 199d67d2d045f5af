//! Relay config loader (strict parsing).

pub mod schema;

use std::fs;

use crate::error::{RelayError, Result};

pub use schema::{Mode, OnError, RelayConfig, RelaySection};

/// Used by the binary when no path is given.
pub const DEFAULT_CONFIG_PATH: &str = "sdmsg-relay.yaml";

pub fn load_from_file(path: &str) -> Result<RelayConfig> {
    let s = fs::read_to_string(path)
        .map_err(|e| RelayError::Config(format!("read config failed: {e}")))?;
    load_from_str(&s)
}

pub fn load_from_str(s: &str) -> Result<RelayConfig> {
    let cfg: RelayConfig = serde_yaml::from_str(s)
        .map_err(|e| RelayError::Config(format!("invalid yaml: {e}")))?;
    cfg.validate()?;
    Ok(cfg)
}
