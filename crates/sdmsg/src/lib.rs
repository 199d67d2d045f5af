//! Top-level facade crate for sdmsg.
//!
//! Re-exports the codec and the relay library so users can depend on a single crate.

pub mod core {
    pub use sdmsg_core::*;
}

pub mod relay {
    pub use sdmsg_relay::*;
}
