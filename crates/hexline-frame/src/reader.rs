use std::io::{ErrorKind, Read};

use bytes::{Bytes, BytesMut};
use tracing::{debug, warn};

use crate::codec::{decode_line, FrameConfig};
use crate::error::{FrameError, Result};

/// Reads complete hex frames from any `Read` stream.
///
/// Messages are unbounded: the scratch buffer starts at
/// [`FrameConfig::initial_capacity`] and grows by [`FrameConfig::growth_step`]
/// whenever a line does not fit. Capacity is retained across calls, so
/// repeated messages of similar size amortize to zero reallocations. Each
/// reader owns its own scratch buffer; concurrent readers never share state.
pub struct LineReader<T> {
    inner: T,
    buf: BytesMut,
    config: FrameConfig,
}

impl<T: Read> LineReader<T> {
    /// Create a new line reader with default configuration.
    pub fn new(inner: T) -> Self {
        Self::with_config(inner, FrameConfig::default())
    }

    /// Create a new line reader with explicit configuration.
    ///
    /// The scratch buffer is allocated lazily on the first read.
    pub fn with_config(inner: T, config: FrameConfig) -> Self {
        Self {
            inner,
            buf: BytesMut::new(),
            config,
        }
    }

    /// Read the next complete message (blocking).
    ///
    /// Returns `Ok(None)` at end of stream — the peer closed or stdin hit
    /// EOF before a new frame arrived. An unterminated tail at EOF is
    /// discarded (with a warning) rather than surfaced as a truncated
    /// message.
    ///
    /// `Err(FrameError::OddLength { .. })` is recoverable: the malformed
    /// line has been consumed and the next call starts at a fresh frame.
    pub fn read_message(&mut self) -> Result<Option<Bytes>> {
        loop {
            if let Some(pos) = self.buf.iter().position(|&b| b == b'\n') {
                let mut line = self.buf.split_to(pos + 1);
                line.truncate(pos); // drop '\n'
                if line.last() == Some(&b'\r') {
                    line.truncate(line.len() - 1);
                }
                debug!(chars = line.len(), line = %String::from_utf8_lossy(&line), "frame line");
                return decode_line(&line).map(Some);
            }

            if self.fill()? == 0 {
                if !self.buf.is_empty() {
                    warn!(
                        pending = self.buf.len(),
                        "end of stream with unterminated frame; discarding"
                    );
                    self.buf.clear();
                }
                return Ok(None);
            }
        }
    }

    /// Read more bytes into the scratch buffer, growing it first if full.
    ///
    /// Returns the number of bytes read; 0 means end of input.
    fn fill(&mut self) -> Result<usize> {
        if self.buf.capacity() == 0 {
            self.buf.reserve(self.config.initial_capacity);
        } else if self.buf.len() == self.buf.capacity() {
            self.buf.reserve(self.config.growth_step);
        }

        let len = self.buf.len();
        let cap = self.buf.capacity();
        self.buf.resize(cap, 0);

        let read = loop {
            match self.inner.read(&mut self.buf[len..]) {
                Ok(n) => break n,
                Err(err) if err.kind() == ErrorKind::Interrupted => continue,
                Err(err) => {
                    self.buf.truncate(len);
                    return Err(FrameError::Io(err));
                }
            }
        };

        self.buf.truncate(len + read);
        Ok(read)
    }

    /// Borrow the underlying stream.
    pub fn get_ref(&self) -> &T {
        &self.inner
    }

    /// Mutably borrow the underlying stream.
    pub fn get_mut(&mut self) -> &mut T {
        &mut self.inner
    }

    /// Consume the reader and return the inner stream.
    pub fn into_inner(self) -> T {
        self.inner
    }

    /// Current reader configuration.
    pub fn config(&self) -> &FrameConfig {
        &self.config
    }
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use super::*;

    fn small_config() -> FrameConfig {
        FrameConfig {
            initial_capacity: 16,
            growth_step: 16,
        }
    }

    #[test]
    fn read_single_frame() {
        let mut reader = LineReader::new(Cursor::new(b"0102\n".to_vec()));
        let msg = reader.read_message().unwrap().unwrap();
        assert_eq!(msg.as_ref(), &[0x01, 0x02]);
    }

    #[test]
    fn read_multiple_frames() {
        let mut reader = LineReader::new(Cursor::new(b"01\n0203\n040506\n".to_vec()));

        assert_eq!(reader.read_message().unwrap().unwrap().as_ref(), &[0x01]);
        assert_eq!(
            reader.read_message().unwrap().unwrap().as_ref(),
            &[0x02, 0x03]
        );
        assert_eq!(
            reader.read_message().unwrap().unwrap().as_ref(),
            &[0x04, 0x05, 0x06]
        );
        assert!(reader.read_message().unwrap().is_none());
    }

    #[test]
    fn empty_frame_is_empty_message() {
        let mut reader = LineReader::new(Cursor::new(b"\n".to_vec()));
        let msg = reader.read_message().unwrap().unwrap();
        assert!(msg.is_empty());
    }

    #[test]
    fn crlf_decodes_same_as_lf() {
        let mut lf = LineReader::new(Cursor::new(b"deadbeef\n".to_vec()));
        let mut crlf = LineReader::new(Cursor::new(b"deadbeef\r\n".to_vec()));

        let a = lf.read_message().unwrap().unwrap();
        let b = crlf.read_message().unwrap().unwrap();
        assert_eq!(a, b);
        assert_eq!(a.as_ref(), &[0xde, 0xad, 0xbe, 0xef]);
    }

    #[test]
    fn bare_cr_strips_to_empty() {
        let mut reader = LineReader::new(Cursor::new(b"\r\n".to_vec()));
        let msg = reader.read_message().unwrap().unwrap();
        assert!(msg.is_empty());
    }

    #[test]
    fn end_of_stream_before_any_byte() {
        let mut reader = LineReader::new(Cursor::new(Vec::<u8>::new()));
        assert!(reader.read_message().unwrap().is_none());
    }

    #[test]
    fn end_of_stream_mid_frame_discards_tail() {
        let mut reader = LineReader::new(Cursor::new(b"0102".to_vec()));
        assert!(reader.read_message().unwrap().is_none());
        // Subsequent calls stay at end of stream.
        assert!(reader.read_message().unwrap().is_none());
    }

    #[test]
    fn grows_past_initial_capacity() {
        // 64 payload bytes = 128 hex chars, several 16-byte growth steps.
        let payload: Vec<u8> = (0u8..64).collect();
        let mut wire = hex::encode(&payload).into_bytes();
        wire.push(b'\n');

        let mut reader = LineReader::with_config(Cursor::new(wire), small_config());
        let msg = reader.read_message().unwrap().unwrap();
        assert_eq!(msg.as_ref(), payload.as_slice());
    }

    #[test]
    fn grows_across_many_increments() {
        let payload = vec![0xAB; 10 * 1024];
        let mut wire = hex::encode(&payload).into_bytes();
        wire.push(b'\n');

        let config = FrameConfig {
            initial_capacity: 1024,
            growth_step: 1024,
        };
        let mut reader = LineReader::with_config(Cursor::new(wire), config);
        let msg = reader.read_message().unwrap().unwrap();
        assert_eq!(msg.len(), payload.len());
        assert_eq!(msg.as_ref(), payload.as_slice());
    }

    #[test]
    fn odd_length_frame_is_recoverable() {
        let mut reader = LineReader::new(Cursor::new(b"0a1\n0102\n".to_vec()));

        let err = reader.read_message().unwrap_err();
        assert!(matches!(err, FrameError::OddLength { chars: 3 }));

        // The malformed line was consumed; the next frame decodes fine.
        let msg = reader.read_message().unwrap().unwrap();
        assert_eq!(msg.as_ref(), &[0x01, 0x02]);
    }

    #[test]
    fn partial_reads_accumulate() {
        let byte_reader = ByteByByteReader {
            bytes: b"c0ffee\n".to_vec(),
            pos: 0,
        };
        let mut reader = LineReader::new(byte_reader);
        let msg = reader.read_message().unwrap().unwrap();
        assert_eq!(msg.as_ref(), &[0xc0, 0xff, 0xee]);
    }

    #[derive(Debug)]
    struct ByteByByteReader {
        bytes: Vec<u8>,
        pos: usize,
    }

    impl Read for ByteByByteReader {
        fn read(&mut self, buf: &mut [u8]) -> std::io::Result<usize> {
            if self.pos >= self.bytes.len() || buf.is_empty() {
                return Ok(0);
            }
            buf[0] = self.bytes[self.pos];
            self.pos += 1;
            Ok(1)
        }
    }

    #[test]
    fn interrupted_read_retries() {
        let reader = InterruptedThenData {
            state: 0,
            bytes: b"0badf00d\n".to_vec(),
            pos: 0,
        };
        let mut framed = LineReader::new(reader);
        let msg = framed.read_message().unwrap().unwrap();
        assert_eq!(msg.as_ref(), &[0x0b, 0xad, 0xf0, 0x0d]);
    }

    struct InterruptedThenData {
        state: u8,
        bytes: Vec<u8>,
        pos: usize,
    }

    impl Read for InterruptedThenData {
        fn read(&mut self, buf: &mut [u8]) -> std::io::Result<usize> {
            if self.state == 0 {
                self.state = 1;
                return Err(std::io::Error::from(ErrorKind::Interrupted));
            }
            if self.pos >= self.bytes.len() {
                return Ok(0);
            }
            let n = (self.bytes.len() - self.pos).min(buf.len());
            buf[..n].copy_from_slice(&self.bytes[self.pos..self.pos + n]);
            self.pos += n;
            Ok(n)
        }
    }

    #[test]
    fn read_error_propagates() {
        struct FailingReader;

        impl Read for FailingReader {
            fn read(&mut self, _buf: &mut [u8]) -> std::io::Result<usize> {
                Err(std::io::Error::from(ErrorKind::BrokenPipe))
            }
        }

        let mut reader = LineReader::new(FailingReader);
        let err = reader.read_message().unwrap_err();
        assert!(matches!(err, FrameError::Io(e) if e.kind() == ErrorKind::BrokenPipe));
    }

    #[test]
    fn leftover_bytes_carry_to_next_call() {
        // Both frames arrive in one read; the second must survive the first
        // call untouched.
        let mut reader = LineReader::with_config(Cursor::new(b"aa\nbb\n".to_vec()), small_config());
        assert_eq!(reader.read_message().unwrap().unwrap().as_ref(), &[0xaa]);
        assert_eq!(reader.read_message().unwrap().unwrap().as_ref(), &[0xbb]);
    }

    #[test]
    fn writer_reader_roundtrip() {
        let payloads: [&[u8]; 4] = [b"", &[0x00], &[0x01, 0x02], &[0xff; 33]];

        for payload in payloads {
            let mut writer = crate::writer::LineWriter::new(Cursor::new(Vec::<u8>::new()));
            writer.send(payload).unwrap();
            let wire = writer.into_inner().into_inner();

            let mut reader = LineReader::new(Cursor::new(wire));
            let msg = reader.read_message().unwrap().unwrap();
            assert_eq!(msg.as_ref(), payload);
        }
    }

    #[test]
    fn accessors_and_into_inner() {
        let cursor = Cursor::new(Vec::<u8>::new());
        let mut reader = LineReader::new(cursor);

        let _ = reader.get_ref();
        let _ = reader.get_mut();
        assert_eq!(
            reader.config().initial_capacity,
            crate::codec::DEFAULT_BUFFER_CAPACITY
        );
        let _inner = reader.into_inner();
    }
}
