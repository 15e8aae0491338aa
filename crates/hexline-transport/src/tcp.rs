use std::net::{Ipv4Addr, SocketAddr, TcpListener, ToSocketAddrs};

use tracing::{debug, info};

use crate::error::{Result, TransportError};
use crate::stream::WireStream;

/// TCP server endpoint.
///
/// Binds a listening port and hands out connected [`WireStream`]s.
pub struct TcpEndpoint {
    listener: TcpListener,
}

impl TcpEndpoint {
    /// Bind and listen on the given port, on all interfaces.
    pub fn bind(port: u16) -> Result<Self> {
        let listener = TcpListener::bind((Ipv4Addr::UNSPECIFIED, port))
            .map_err(|source| TransportError::Bind { port, source })?;
        info!(port, "listening");
        Ok(Self { listener })
    }

    /// The local address the endpoint is bound to.
    ///
    /// Useful when binding port 0 and letting the OS pick.
    pub fn local_addr(&self) -> Result<SocketAddr> {
        self.listener.local_addr().map_err(Into::into)
    }

    /// Accept an incoming connection (blocking).
    pub fn accept(&self) -> Result<WireStream> {
        let (stream, addr) = self.listener.accept().map_err(TransportError::Accept)?;
        debug!(%addr, "accepted connection");
        Ok(WireStream::from_tcp(stream))
    }
}

/// Resolve `host:port` and connect to the first address that answers
/// (blocking).
pub fn connect(host: &str, port: u16) -> Result<WireStream> {
    let addrs: Vec<SocketAddr> =
        (host, port)
            .to_socket_addrs()
            .map_err(|source| TransportError::Resolve {
                host: host.to_string(),
                port,
                source,
            })?
            .collect();

    let mut last_err = None;
    for addr in addrs {
        debug!(%addr, "connecting");
        match std::net::TcpStream::connect(addr) {
            Ok(stream) => {
                info!(%addr, "connected");
                return Ok(WireStream::from_tcp(stream));
            }
            Err(err) => last_err = Some(err),
        }
    }

    Err(TransportError::Connect {
        host: host.to_string(),
        port,
        source: last_err.unwrap_or_else(|| {
            std::io::Error::new(std::io::ErrorKind::NotFound, "no addresses resolved")
        }),
    })
}
