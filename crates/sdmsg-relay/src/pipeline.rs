//! Line relay: one message per input line.
//!
//! - Decode mode: wire text -> one JSON object per line.
//! - Encode mode: one JSON object per line -> wire text.
//!
//! A rejected line is fatal for that message only under `on_error: drop`.

use std::io::{BufRead, Write};

use bytes::Bytes;
use sdmsg_core::{decode_bytes, StructuredMessage};

use crate::config::{Mode, OnError, RelaySection};
use crate::error::{RelayError, Result};

/// Per-run counters.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct RelayStats {
    pub processed: u64,
    pub dropped: u64,
}

pub fn run<R: BufRead, W: Write>(cfg: &RelaySection, mut input: R, mut output: W) -> Result<RelayStats> {
    tracing::info!(mode = ?cfg.mode, on_error = ?cfg.on_error, "relay starting");

    let mut stats = RelayStats::default();
    let mut buf = Vec::new();
    let mut line_no: u64 = 0;

    loop {
        buf.clear();
        if input.read_until(b'\n', &mut buf)? == 0 {
            break;
        }
        line_no += 1;

        let line = trim_line_end(&buf);
        if line.is_empty() {
            continue;
        }

        let res = if line.len() > cfg.max_line_bytes {
            Err(RelayError::LineTooLong { len: line.len(), max: cfg.max_line_bytes })
        } else {
            convert(cfg.mode, line)
        };

        match res {
            Ok(out) => {
                output.write_all(out.as_bytes())?;
                output.write_all(b"\n")?;
                stats.processed += 1;
            }
            Err(e) if cfg.on_error == OnError::Drop => {
                tracing::warn!(line = line_no, code = e.code(), error = %e, "dropping message");
                stats.dropped += 1;
            }
            Err(e) => return Err(e),
        }
    }

    output.flush()?;
    tracing::info!(processed = stats.processed, dropped = stats.dropped, "relay finished");
    Ok(stats)
}

fn convert(mode: Mode, line: &[u8]) -> Result<String> {
    match mode {
        Mode::Decode => {
            let msg = decode_bytes(Bytes::copy_from_slice(line))?;
            Ok(serde_json::to_string(&msg)?)
        }
        Mode::Encode => {
            let msg: StructuredMessage = serde_json::from_slice(line)?;
            Ok(msg.encode()?)
        }
    }
}

fn trim_line_end(line: &[u8]) -> &[u8] {
    let line = line.strip_suffix(b"\n").unwrap_or(line);
    line.strip_suffix(b"\r").unwrap_or(line)
}
