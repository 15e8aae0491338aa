use std::io::{ErrorKind, Write};

use crate::codec::encode_line;
use crate::error::{FrameError, Result};

/// Writes hex frames to any `Write` stream.
///
/// An optional diagnostic mirror sink receives a byte-identical copy of
/// everything written to the primary sink. The stdio channel attaches stderr
/// as the mirror when stdout is redirected, so an operator can still watch
/// the traffic; tests can inject an in-memory sink.
pub struct LineWriter<W> {
    inner: W,
    mirror: Option<Box<dyn Write + Send>>,
}

impl<W: Write> LineWriter<W> {
    /// Create a new line writer with no diagnostic mirror.
    pub fn new(inner: W) -> Self {
        Self {
            inner,
            mirror: None,
        }
    }

    /// Create a new line writer that mirrors all output to `mirror`.
    pub fn with_mirror(inner: W, mirror: Box<dyn Write + Send>) -> Self {
        Self {
            inner,
            mirror: Some(mirror),
        }
    }

    /// Encode and write one complete frame: hex text plus the terminating
    /// newline, followed by a flush of the primary sink.
    ///
    /// An empty payload produces a bare newline (still flushed).
    pub fn send(&mut self, payload: &[u8]) -> Result<()> {
        if !payload.is_empty() {
            let text = encode_line(payload);
            self.write_all(text.as_bytes())?;
            self.mirror(text.as_bytes());
        }
        self.write_all(b"\n")?;
        self.mirror(b"\n");
        self.flush()
    }

    /// Encode and write part of a frame: hex text with no newline and no
    /// flush. The line is completed by a later `send` (or extended by
    /// further `send_partial` calls).
    ///
    /// An empty payload is a complete no-op.
    pub fn send_partial(&mut self, payload: &[u8]) -> Result<()> {
        if payload.is_empty() {
            return Ok(());
        }
        let text = encode_line(payload);
        self.write_all(text.as_bytes())?;
        self.mirror(text.as_bytes());
        Ok(())
    }

    fn write_all(&mut self, mut buf: &[u8]) -> Result<()> {
        while !buf.is_empty() {
            match self.inner.write(buf) {
                Ok(0) => return Err(FrameError::ConnectionClosed),
                Ok(n) => buf = &buf[n..],
                Err(err) if err.kind() == ErrorKind::Interrupted => continue,
                Err(err) if err.kind() == ErrorKind::WouldBlock => continue,
                Err(err) => return Err(FrameError::Io(err)),
            }
        }
        Ok(())
    }

    /// Mirror writes are best-effort: a broken diagnostic sink must not
    /// disturb the primary channel.
    fn mirror(&mut self, buf: &[u8]) {
        if let Some(mirror) = &mut self.mirror {
            let _ = mirror.write_all(buf);
        }
    }

    /// Flush the primary sink.
    pub fn flush(&mut self) -> Result<()> {
        loop {
            match self.inner.flush() {
                Ok(()) => return Ok(()),
                Err(err) if err.kind() == ErrorKind::Interrupted => continue,
                Err(err) if err.kind() == ErrorKind::WouldBlock => continue,
                Err(err) => return Err(FrameError::Io(err)),
            }
        }
    }

    /// Whether a diagnostic mirror is attached.
    pub fn has_mirror(&self) -> bool {
        self.mirror.is_some()
    }

    /// Borrow the underlying stream.
    pub fn get_ref(&self) -> &W {
        &self.inner
    }

    /// Mutably borrow the underlying stream.
    pub fn get_mut(&mut self) -> &mut W {
        &mut self.inner
    }

    /// Consume the writer and return the inner stream.
    pub fn into_inner(self) -> W {
        self.inner
    }
}
