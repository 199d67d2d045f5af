#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use sdmsg_relay::config::{self, Mode, OnError};

#[test]
fn deny_unknown_fields_nested() {
    let bad = r#"
version: 1
relay:
  mode: decode
  on_eror: drop # typo should fail
"#;

    let err = config::load_from_str(bad).expect_err("must fail");
    assert_eq!(err.code(), "CONFIG");
}

#[test]
fn ok_minimal_config() {
    let ok = "version: 1\n";
    let cfg = config::load_from_str(ok).expect("must parse");
    assert_eq!(cfg.version, 1);
    assert_eq!(cfg.relay.mode, Mode::Decode);
    assert_eq!(cfg.relay.on_error, OnError::Drop);
    assert_eq!(cfg.relay.max_line_bytes, 8192);
}

#[test]
fn ok_full_config() {
    let ok = r#"
version: 1
relay:
  mode: encode
  on_error: abort
  max_line_bytes: 65536
"#;
    let cfg = config::load_from_str(ok).expect("must parse");
    assert_eq!(cfg.relay.mode, Mode::Encode);
    assert_eq!(cfg.relay.on_error, OnError::Abort);
    assert_eq!(cfg.relay.max_line_bytes, 65536);
}

#[test]
fn unknown_mode_rejected() {
    let bad = "version: 1\nrelay:\n  mode: transcode\n";
    let err = config::load_from_str(bad).expect_err("must fail");
    assert_eq!(err.code(), "CONFIG");
}

#[test]
fn version_must_be_one() {
    let err = config::load_from_str("version: 2\n").expect_err("must fail");
    assert_eq!(err.code(), "UNSUPPORTED_VERSION");
}

#[test]
fn max_line_bytes_range() {
    let err = config::load_from_str("version: 1\nrelay:\n  max_line_bytes: 10\n").expect_err("must fail");
    assert_eq!(err.code(), "CONFIG");
}

#[test]
fn missing_file() {
    let err = config::load_from_file("does/not/exist.yaml").expect_err("must fail");
    assert_eq!(err.code(), "CONFIG");
}
