//! sdmsg relay library entry.
//!
//! A line-oriented bridge between syslog STRUCTURED-DATA wire text and JSON,
//! standing where a transport would call the codec. It is consumed by the
//! binary (`main.rs`) and by integration tests.

pub mod config;
pub mod error;
pub mod pipeline;
