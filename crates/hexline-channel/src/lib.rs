//! Message channels speaking the hexline frame protocol.
//!
//! A [`Channel`] is one end of a conversation between two cooperating
//! processes. Two concrete variants implement the same
//! receive/send/send_partial contract:
//!
//! - [`StdioChannel`] — reads frames from stdin, writes them to stdout,
//!   mirroring output to stderr when stdout is redirected
//! - [`SocketChannel`] — reads and writes frames over an established TCP
//!   connection, client or server role
//!
//! Channels are strictly synchronous and single-conversation: one request/
//! response exchange (or one direction) at a time. There is no timeout or
//! cancellation at this layer; callers needing deadlines wrap the channel.

pub mod channel;
pub mod error;
pub mod link;
pub mod listener;
pub mod socket;
pub mod stdio;

pub use channel::Channel;
pub use error::{ChannelError, Result};
pub use link::Link;
pub use listener::ChannelListener;
pub use socket::SocketChannel;
pub use stdio::StdioChannel;
