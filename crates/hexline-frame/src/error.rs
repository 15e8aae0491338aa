/// Errors that can occur during frame encoding/decoding.
#[derive(Debug, thiserror::Error)]
pub enum FrameError {
    /// The received line has an odd number of hex characters.
    ///
    /// Recoverable: the malformed line has already been consumed, so the
    /// next read starts at a fresh frame boundary.
    #[error("frame has odd hex length ({chars} chars)")]
    OddLength { chars: usize },

    /// The received line contains a non-hex character.
    #[error("invalid hex in frame: {0}")]
    Hex(#[from] hex::FromHexError),

    /// An I/O error occurred while reading or writing frames.
    #[error("frame I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The sink stopped accepting bytes mid-frame.
    #[error("connection closed (incomplete frame write)")]
    ConnectionClosed,
}

pub type Result<T> = std::result::Result<T, FrameError>;
