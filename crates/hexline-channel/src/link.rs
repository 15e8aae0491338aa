use std::io::{Read, Write};

use bytes::Bytes;
use hexline_frame::{FrameError, LineReader, LineWriter};
use tracing::debug;

use crate::error::{ChannelError, Result};

/// One end of a framed conversation over arbitrary Read/Write halves.
///
/// Pairs a [`LineReader`] with a [`LineWriter`] and tracks closed state:
/// after [`Link::close`] or a fatal I/O error, every operation returns
/// [`ChannelError::Closed`]. Recoverable frame errors (odd hex length,
/// bad hex character) leave the link usable.
///
/// The concrete channel types wrap this with their own construction and
/// teardown; the type is public so callers with unusual stream pairs can
/// still speak the protocol.
pub struct Link<R, W> {
    reader: LineReader<R>,
    writer: LineWriter<W>,
    closed: bool,
}

impl<R: Read, W: Write> Link<R, W> {
    /// Pair a reader and writer into a link.
    pub fn new(reader: LineReader<R>, writer: LineWriter<W>) -> Self {
        Self {
            reader,
            writer,
            closed: false,
        }
    }

    /// Receive the next message (blocking).
    ///
    /// `Ok(None)` means the peer is done: end of stream before a new frame.
    pub fn receive(&mut self) -> Result<Option<Bytes>> {
        if self.closed {
            return Err(ChannelError::Closed);
        }
        match self.reader.read_message() {
            Ok(msg) => Ok(msg),
            Err(err) => Err(self.note_failure(err)),
        }
    }

    /// Encode and send one complete frame (hex text, newline, flush).
    pub fn send(&mut self, payload: &[u8]) -> Result<()> {
        if self.closed {
            return Err(ChannelError::Closed);
        }
        self.writer
            .send(payload)
            .map_err(|err| self.note_failure(err))
    }

    /// Encode and send part of a frame: no newline, no flush. A later
    /// `send` completes the line.
    pub fn send_partial(&mut self, payload: &[u8]) -> Result<()> {
        if self.closed {
            return Err(ChannelError::Closed);
        }
        self.writer
            .send_partial(payload)
            .map_err(|err| self.note_failure(err))
    }

    /// Mark the link closed. Pending output is flushed best-effort.
    pub fn close(&mut self) {
        if !self.closed {
            let _ = self.writer.flush();
            self.closed = true;
            debug!("link closed");
        }
    }

    /// Whether the link has been closed.
    pub fn is_closed(&self) -> bool {
        self.closed
    }

    /// Borrow the writer (e.g. to reach the underlying sink).
    pub fn writer(&self) -> &LineWriter<W> {
        &self.writer
    }

    /// Borrow the reader.
    pub fn reader(&self) -> &LineReader<R> {
        &self.reader
    }

    fn note_failure(&mut self, err: FrameError) -> ChannelError {
        if is_fatal(&err) {
            self.closed = true;
        }
        ChannelError::Frame(err)
    }
}

fn is_fatal(err: &FrameError) -> bool {
    matches!(err, FrameError::Io(_) | FrameError::ConnectionClosed)
}
