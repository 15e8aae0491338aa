//! Hex-encoded, newline-framed message transport over stdio or TCP.
//!
//! hexline lets two cooperating processes (e.g. an attestation client and
//! service) exchange discrete, variable-length binary messages. Every
//! message travels as one line of ASCII hex, so a conversation can be
//! watched, logged, or replayed with ordinary line tools.
//!
//! # Crate Structure
//!
//! - [`transport`] — wire streams: TCP bind/accept/connect plumbing
//! - [`frame`] — the hex line codec: growable-buffer reader, mirroring writer
//! - [`channel`] — stdio and socket channels with a shared
//!   receive/send/send_partial contract

/// Re-export transport types.
pub mod transport {
    pub use hexline_transport::*;
}

/// Re-export frame codec types.
pub mod frame {
    pub use hexline_frame::*;
}

/// Re-export channel types.
pub mod channel {
    pub use hexline_channel::*;
}
