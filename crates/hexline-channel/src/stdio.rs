use std::io::{IsTerminal, Stdin, Stdout};

use bytes::Bytes;
use hexline_frame::{FrameConfig, LineReader, LineWriter};

use crate::error::Result;
use crate::link::Link;

/// A channel over the process's standard streams.
///
/// Frames are read from stdin and written to stdout. When stdout is not an
/// interactive terminal (redirected to a file or pipe), every byte written
/// to stdout is also mirrored to stderr so an operator watching the
/// terminal still sees the traffic. The duplication is intentional.
pub struct StdioChannel {
    link: Link<Stdin, Stdout>,
}

impl StdioChannel {
    /// Create a stdio channel with default frame configuration.
    pub fn new() -> Self {
        Self::with_config(FrameConfig::default())
    }

    /// Create a stdio channel with explicit frame configuration.
    pub fn with_config(config: FrameConfig) -> Self {
        let stdout = std::io::stdout();
        let writer = if stdout.is_terminal() {
            LineWriter::new(stdout)
        } else {
            LineWriter::with_mirror(stdout, Box::new(std::io::stderr()))
        };

        Self {
            link: Link::new(LineReader::with_config(std::io::stdin(), config), writer),
        }
    }

    /// Receive the next message (blocking). `Ok(None)` at stdin EOF.
    pub fn receive(&mut self) -> Result<Option<Bytes>> {
        self.link.receive()
    }

    /// Send one complete frame.
    pub fn send(&mut self, payload: &[u8]) -> Result<()> {
        self.link.send(payload)
    }

    /// Send part of a frame (no newline, no flush).
    pub fn send_partial(&mut self, payload: &[u8]) -> Result<()> {
        self.link.send_partial(payload)
    }

    /// Close the channel. Subsequent operations fail.
    pub fn close(&mut self) {
        self.link.close();
    }

    /// Whether the channel has been closed.
    pub fn is_closed(&self) -> bool {
        self.link.is_closed()
    }

    /// Whether stdout output is being mirrored to stderr.
    pub fn mirrors_to_stderr(&self) -> bool {
        self.link.writer().has_mirror()
    }
}

impl Default for StdioChannel {
    fn default() -> Self {
        Self::new()
    }
}
