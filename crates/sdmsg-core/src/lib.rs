//! sdmsg core: syslog STRUCTURED-DATA codec, error types, and wire constants.
//!
//! This crate renders and parses the `MSGID STRUCTURED-DATA MSG` portion of a
//! syslog body (draft-ietf-syslog-protocol-23, section 6). It carries no
//! transport, priority or modifier logic so it can be called from any socket
//! writer or receiver.
//!
//! # Defensive guarantees
//! Panics, `unwrap`, and `expect` are compile-denied here
//! (`#![deny(clippy::panic, clippy::unwrap_used, clippy::expect_used)]`).
//! Every malformed message surfaces as `SdError`/`Result` so a receiver never
//! crashes on hostile traffic.

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]

pub mod error;
pub mod protocol;

/// Shared error and result types.
pub use error::{ErrorCode, Result, SdError};
pub use protocol::decoder::{decode, decode_bytes};
pub use protocol::encoder::{encode, encode_bytes};
pub use protocol::message::{SdParams, StructuredData, StructuredMessage};
