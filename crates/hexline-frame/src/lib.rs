//! Newline-terminated hex frame codec.
//!
//! This is the core value-add layer of hexline. Every message travels as one
//! line of ASCII hex:
//!
//! ```text
//! ┌───────────────────────────────┬──────┐
//! │ hex text (2 chars per byte)   │ "\n" │
//! └───────────────────────────────┴──────┘
//! ```
//!
//! An optional `\r` before the `\n` is tolerated on receive but never
//! emitted. No other whitespace may appear inside a frame. The hex text for
//! an empty payload is empty, so an empty message is a bare newline.
//!
//! Messages have no length prefix and no size cap: [`LineReader`] accumulates
//! a line into a scratch buffer that grows by fixed increments until the
//! terminating newline arrives.

pub mod codec;
pub mod error;
pub mod reader;
pub mod writer;

pub use codec::{decode_line, encode_line, FrameConfig, DEFAULT_BUFFER_CAPACITY};
pub use error::{FrameError, Result};
pub use reader::LineReader;
pub use writer::LineWriter;
