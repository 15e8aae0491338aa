use bytes::Bytes;
use hexline_frame::FrameConfig;

use crate::error::Result;
use crate::listener::ChannelListener;
use crate::socket::SocketChannel;
use crate::stdio::StdioChannel;

/// A message channel: one end of a framed conversation.
///
/// The variant is fixed at construction and never changes. Both variants
/// implement the same contract:
///
/// - `receive` blocks until a full frame arrives (`Ok(None)` at end of
///   stream)
/// - `send` writes one complete newline-terminated frame and flushes
/// - `send_partial` writes frame content without the newline, for payloads
///   assembled across several calls
///
/// After `close` or a fatal I/O error every operation fails with
/// [`ChannelError::Closed`](crate::ChannelError::Closed).
pub enum Channel {
    /// Stdin/stdout with stderr mirroring.
    Stdio(StdioChannel),
    /// An established TCP connection.
    Socket(SocketChannel),
}

impl Channel {
    /// A channel over the process's standard streams.
    pub fn stdio() -> Self {
        Channel::Stdio(StdioChannel::new())
    }

    /// Connect to a serving peer as a client.
    pub fn connect(host: &str, port: u16) -> Result<Self> {
        Ok(Channel::Socket(SocketChannel::connect(host, port)?))
    }

    /// Serve one peer: bind the port, accept a single connection, and
    /// speak the protocol over it.
    pub fn serve(port: u16) -> Result<Self> {
        Self::serve_with_config(port, FrameConfig::default())
    }

    /// Serve one peer with explicit frame configuration.
    pub fn serve_with_config(port: u16, config: FrameConfig) -> Result<Self> {
        let listener = ChannelListener::bind_with_config(port, config)?;
        Ok(Channel::Socket(listener.accept()?))
    }

    /// Receive the next message (blocking).
    pub fn receive(&mut self) -> Result<Option<Bytes>> {
        match self {
            Channel::Stdio(c) => c.receive(),
            Channel::Socket(c) => c.receive(),
        }
    }

    /// Send one complete frame.
    pub fn send(&mut self, payload: &[u8]) -> Result<()> {
        match self {
            Channel::Stdio(c) => c.send(payload),
            Channel::Socket(c) => c.send(payload),
        }
    }

    /// Send part of a frame (no newline, no flush).
    pub fn send_partial(&mut self, payload: &[u8]) -> Result<()> {
        match self {
            Channel::Stdio(c) => c.send_partial(payload),
            Channel::Socket(c) => c.send_partial(payload),
        }
    }

    /// Close the channel. Subsequent operations fail.
    pub fn close(&mut self) {
        match self {
            Channel::Stdio(c) => c.close(),
            Channel::Socket(c) => c.close(),
        }
    }

    /// Whether the channel has been closed.
    pub fn is_closed(&self) -> bool {
        match self {
            Channel::Stdio(c) => c.is_closed(),
            Channel::Socket(c) => c.is_closed(),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::thread;

    use super::*;

    #[test]
    fn connect_variant_talks_to_listener() {
        let listener = ChannelListener::bind(0).unwrap();
        let port = listener.local_addr().unwrap().port();

        let server = thread::spawn(move || {
            let mut channel = listener.accept().unwrap();
            let msg = channel.receive().unwrap().unwrap();
            channel.send(msg.as_ref()).unwrap();
        });

        let mut channel = Channel::connect("127.0.0.1", port).unwrap();
        assert!(matches!(channel, Channel::Socket(_)));

        channel.send(&[0xca, 0xfe]).unwrap();
        let reply = channel.receive().unwrap().unwrap();
        assert_eq!(reply.as_ref(), &[0xca, 0xfe]);

        channel.close();
        assert!(channel.is_closed());
        server.join().unwrap();
    }

    #[test]
    fn stdio_constructor_yields_stdio_variant() {
        let channel = Channel::stdio();
        assert!(matches!(channel, Channel::Stdio(_)));
    }
}
