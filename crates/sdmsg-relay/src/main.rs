//! sdmsg relay
//!
//! Streams stdin to stdout through the structured-data codec.
//! - Config path: first argument, else `sdmsg-relay.yaml`
//! - Logs go to stderr, filtered by `RUST_LOG`

use std::io::{self, BufWriter};
use std::process::ExitCode;

use tracing_subscriber::{fmt, EnvFilter};

use sdmsg_relay::{config, pipeline};

fn main() -> ExitCode {
    fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| config::DEFAULT_CONFIG_PATH.to_string());

    let cfg = match config::load_from_file(&path) {
        Ok(cfg) => cfg,
        Err(e) => {
            tracing::error!(%path, error = %e, "config load failed");
            return ExitCode::FAILURE;
        }
    };

    let stdin = io::stdin().lock();
    let stdout = BufWriter::new(io::stdout().lock());

    match pipeline::run(&cfg.relay, stdin, stdout) {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(code = e.code(), error = %e, "relay aborted");
            ExitCode::FAILURE
        }
    }
}
