use hexline_frame::FrameError;
use hexline_transport::TransportError;

/// Errors that can occur on a message channel.
#[derive(Debug, thiserror::Error)]
pub enum ChannelError {
    /// Connection establishment or socket-level failure.
    #[error("transport error: {0}")]
    Transport(#[from] TransportError),

    /// Frame codec or frame-level I/O failure.
    #[error("frame error: {0}")]
    Frame(#[from] FrameError),

    /// Operation attempted on a channel that has been closed, either
    /// explicitly or by a fatal I/O error.
    #[error("channel is closed")]
    Closed,
}

impl ChannelError {
    /// Whether this error represents a recoverable malformed frame.
    ///
    /// Recoverable errors leave the channel usable: the offending line has
    /// been consumed and the next frame decodes normally.
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            ChannelError::Frame(FrameError::OddLength { .. }) | ChannelError::Frame(FrameError::Hex(_))
        )
    }
}

pub type Result<T> = std::result::Result<T, ChannelError>;
