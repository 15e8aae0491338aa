use bytes::Bytes;

use crate::error::{FrameError, Result};

/// Default scratch buffer capacity: 1 MiB.
///
/// Also the fixed increment the buffer grows by when a line does not fit.
pub const DEFAULT_BUFFER_CAPACITY: usize = 1024 * 1024;

/// Configuration for the frame codec.
#[derive(Debug, Clone)]
pub struct FrameConfig {
    /// Scratch buffer capacity allocated on first receive. Default: 1 MiB.
    pub initial_capacity: usize,
    /// How much the scratch buffer grows when a line exceeds it.
    /// Default: same as `initial_capacity`.
    pub growth_step: usize,
}

impl Default for FrameConfig {
    fn default() -> Self {
        Self {
            initial_capacity: DEFAULT_BUFFER_CAPACITY,
            growth_step: DEFAULT_BUFFER_CAPACITY,
        }
    }
}

/// Encode a payload as hex text, without the terminating newline.
pub fn encode_line(payload: &[u8]) -> String {
    hex::encode(payload)
}

/// Decode one hex line (newline and carriage return already stripped)
/// into the payload bytes.
///
/// The character count must be even — two hex digits per output byte. The
/// odd-length check runs before any allocation, so a malformed line never
/// costs a destination buffer.
pub fn decode_line(line: &[u8]) -> Result<Bytes> {
    if line.len() % 2 != 0 {
        return Err(FrameError::OddLength { chars: line.len() });
    }
    let decoded = hex::decode(line)?;
    Ok(Bytes::from(decoded))
}
