use std::net::SocketAddr;

use hexline_frame::FrameConfig;
use hexline_transport::TcpEndpoint;

use crate::error::Result;
use crate::socket::SocketChannel;

/// Accepts incoming connections and wraps each in a [`SocketChannel`].
pub struct ChannelListener {
    endpoint: TcpEndpoint,
    config: FrameConfig,
}

impl ChannelListener {
    /// Bind and listen on the given port.
    pub fn bind(port: u16) -> Result<Self> {
        Self::bind_with_config(port, FrameConfig::default())
    }

    /// Bind with explicit frame configuration, applied to every accepted
    /// channel.
    pub fn bind_with_config(port: u16, config: FrameConfig) -> Result<Self> {
        Ok(Self {
            endpoint: TcpEndpoint::bind(port)?,
            config,
        })
    }

    /// The bound local address (useful when binding port 0).
    pub fn local_addr(&self) -> Result<SocketAddr> {
        Ok(self.endpoint.local_addr()?)
    }

    /// Accept the next peer (blocking).
    pub fn accept(&self) -> Result<SocketChannel> {
        let stream = self.endpoint.accept()?;
        SocketChannel::from_stream(stream, self.config.clone())
    }
}
