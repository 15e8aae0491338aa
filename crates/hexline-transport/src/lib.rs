//! Socket transport plumbing for hexline.
//!
//! Provides the connected [`WireStream`] type plus the bind/accept/connect
//! mechanics around it:
//! - [`TcpEndpoint`] — server side: bind a port, accept peers
//! - [`connect`] — client side: resolve an address and connect
//!
//! This is the lowest layer of hexline. The frame codec and channel layers
//! build on the [`WireStream`] type provided here.

pub mod error;
pub mod stream;
pub mod tcp;

pub use error::{Result, TransportError};
pub use stream::WireStream;
pub use tcp::{connect, TcpEndpoint};
