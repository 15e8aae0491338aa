use std::io::{Read, Write};
use std::net::{Shutdown, SocketAddr, TcpStream};

use crate::error::Result;

/// A connected wire stream — implements Read + Write.
///
/// This is the fundamental I/O type returned by transport operations.
/// Currently it wraps a TCP stream; the inner enum leaves room for other
/// connection-oriented transports.
pub struct WireStream {
    inner: WireStreamInner,
}

enum WireStreamInner {
    Tcp(TcpStream),
}

impl Read for WireStream {
    fn read(&mut self, buf: &mut [u8]) -> std::io::Result<usize> {
        match &mut self.inner {
            WireStreamInner::Tcp(stream) => stream.read(buf),
        }
    }
}

impl Write for WireStream {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        match &mut self.inner {
            WireStreamInner::Tcp(stream) => stream.write(buf),
        }
    }

    fn flush(&mut self) -> std::io::Result<()> {
        match &mut self.inner {
            WireStreamInner::Tcp(stream) => stream.flush(),
        }
    }
}

impl WireStream {
    /// Create a WireStream from a connected TCP stream.
    pub(crate) fn from_tcp(stream: TcpStream) -> Self {
        Self {
            inner: WireStreamInner::Tcp(stream),
        }
    }

    /// The address of the connected peer.
    pub fn peer_addr(&self) -> Result<SocketAddr> {
        match &self.inner {
            WireStreamInner::Tcp(stream) => stream.peer_addr().map_err(Into::into),
        }
    }

    /// Try to clone this stream (creates a new file descriptor).
    ///
    /// Both clones refer to the same connection; one can be used for
    /// reading while the other writes.
    pub fn try_clone(&self) -> Result<Self> {
        match &self.inner {
            WireStreamInner::Tcp(stream) => {
                let cloned = stream.try_clone()?;
                Ok(Self::from_tcp(cloned))
            }
        }
    }

    /// Shut down both halves of the connection.
    ///
    /// A `NotConnected` error is ignored: the peer may already be gone.
    pub fn shutdown(&self) -> Result<()> {
        match &self.inner {
            WireStreamInner::Tcp(stream) => match stream.shutdown(Shutdown::Both) {
                Ok(()) => Ok(()),
                Err(err) if err.kind() == std::io::ErrorKind::NotConnected => Ok(()),
                Err(err) => Err(err.into()),
            },
        }
    }
}

impl std::fmt::Debug for WireStream {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.inner {
            WireStreamInner::Tcp(stream) => f
                .debug_struct("WireStream")
                .field("type", &"tcp")
                .field("peer", &stream.peer_addr().ok())
                .finish(),
        }
    }
}
