use std::net::SocketAddr;

use bytes::Bytes;
use hexline_frame::{FrameConfig, LineReader, LineWriter};
use hexline_transport::WireStream;

use crate::error::Result;
use crate::link::Link;

/// A channel over an established socket connection.
///
/// The connection is split with `try_clone` into a read half and a write
/// half; both refer to the same socket. No diagnostic mirror is attached by
/// default — a socket is never an interactive terminal, and mirroring wire
/// traffic is the stdio channel's concern.
pub struct SocketChannel {
    link: Link<WireStream, WireStream>,
    peer: Option<SocketAddr>,
}

impl SocketChannel {
    /// Connect to a serving peer as a client.
    pub fn connect(host: &str, port: u16) -> Result<Self> {
        Self::connect_with_config(host, port, FrameConfig::default())
    }

    /// Connect with explicit frame configuration.
    pub fn connect_with_config(host: &str, port: u16, config: FrameConfig) -> Result<Self> {
        let stream = hexline_transport::connect(host, port)?;
        Self::from_stream(stream, config)
    }

    /// Wrap an already-established connection in a channel.
    pub fn from_stream(stream: WireStream, config: FrameConfig) -> Result<Self> {
        let peer = stream.peer_addr().ok();
        let read_half = stream.try_clone()?;

        Ok(Self {
            link: Link::new(
                LineReader::with_config(read_half, config),
                LineWriter::new(stream),
            ),
            peer,
        })
    }

    /// Receive the next message (blocking). `Ok(None)` when the peer
    /// closes the connection.
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

    /// Close the channel and shut down the connection. Subsequent
    /// operations fail.
    pub fn close(&mut self) {
        if !self.link.is_closed() {
            self.link.close();
            let _ = self.link.writer().get_ref().shutdown();
        }
    }

    /// Whether the channel has been closed.
    pub fn is_closed(&self) -> bool {
        self.link.is_closed()
    }

    /// The address of the connected peer, when known.
    pub fn peer_addr(&self) -> Option<SocketAddr> {
        self.peer
    }
}

impl Drop for SocketChannel {
    fn drop(&mut self) {
        self.close();
    }
}
