//! Line-oriented NNTP framing (RFC 3977 §3.1.1)
//!
//! This module provides the I/O primitives every session command is built on:
//! - CRLF-terminated command lines
//! - Status line reads
//! - Dot-terminated blocks in both directions, with dot-stuffing
//!
//! A [`BlockReader`] or [`BlockWriter`] borrows the codec mutably, so no
//! other command can be issued while one is alive. Dropping either before
//! the terminator has been crossed leaves the stream mid-block; the codec
//! records that in [`LineCodec::is_broken`].

use crate::commands;
use crate::error::{NntpError, Result};
use crate::response::NntpResponse;
use std::borrow::Cow;
use tokio::io::{AsyncBufReadExt, AsyncRead, AsyncWrite, AsyncWriteExt, BufReader};
use tracing::{trace, warn};

/// BufReader capacity; article bodies are read line by line through it
const BUFREADER_CAPACITY: usize = 64 * 1024;
const LINE_INITIAL_CAPACITY: usize = 512;
/// Outgoing block bytes are batched up to this size before hitting the transport
const WRITE_BATCH_SIZE: usize = 64 * 1024;

const CRLF: &[u8] = b"\r\n";
const TERMINATOR: &[u8] = b".\r\n";

/// Prefix a line beginning with "." with a second "."
pub fn stuff_line(line: &[u8]) -> Cow<'_, [u8]> {
    if line.first() == Some(&b'.') {
        let mut stuffed = Vec::with_capacity(line.len() + 1);
        stuffed.push(b'.');
        stuffed.extend_from_slice(line);
        Cow::Owned(stuffed)
    } else {
        Cow::Borrowed(line)
    }
}

/// Remove exactly one leading "." from a received block line
///
/// Must not be applied to the terminator line itself.
pub fn unstuff_line(line: &[u8]) -> &[u8] {
    line.strip_prefix(b".").unwrap_or(line)
}

/// Strip a trailing LF and then a trailing CR, if present
fn strip_line_ending(line: &[u8]) -> &[u8] {
    let line = line.strip_suffix(b"\n").unwrap_or(line);
    line.strip_suffix(b"\r").unwrap_or(line)
}

fn is_terminator(line: &[u8]) -> bool {
    line == b"."
}

fn push_stuffed_line(out: &mut Vec<u8>, line: &[u8]) {
    out.extend_from_slice(&stuff_line(line));
    out.extend_from_slice(CRLF);
}

/// Keep credentials out of trace output
fn loggable(line: &str) -> &str {
    match line.get(..13) {
        Some(prefix) if prefix.eq_ignore_ascii_case("AUTHINFO PASS") => "AUTHINFO PASS ****",
        _ => line,
    }
}

/// CRLF line codec over a byte stream
pub struct LineCodec<S> {
    stream: BufReader<S>,
    line: Vec<u8>,
    broken: bool,
}

impl<S> LineCodec<S> {
    /// Whether the stream is known to be out of sync with the protocol
    ///
    /// Set after a transport failure or when a block was abandoned midway.
    pub fn is_broken(&self) -> bool {
        self.broken
    }

    pub(crate) fn mark_broken(&mut self) {
        self.broken = true;
    }
}

impl<S: AsyncRead + AsyncWrite + Unpin> LineCodec<S> {
    /// Wrap a connected stream
    pub fn new(stream: S) -> Self {
        Self {
            stream: BufReader::with_capacity(BUFREADER_CAPACITY, stream),
            line: Vec::with_capacity(LINE_INITIAL_CAPACITY),
            broken: false,
        }
    }

    /// The wrapped stream
    pub fn get_ref(&self) -> &S {
        self.stream.get_ref()
    }

    /// Bytes received but not yet consumed
    pub fn buffered(&self) -> &[u8] {
        self.stream.buffer()
    }

    /// Give back the stream, discarding anything still buffered
    pub fn into_inner(self) -> S {
        self.stream.into_inner()
    }

    /// Send one line followed by CRLF and flush
    pub async fn write_line(&mut self, line: &str) -> Result<()> {
        trace!("Sending: {}", loggable(line));
        let mut bytes = Vec::with_capacity(line.len() + CRLF.len());
        bytes.extend_from_slice(line.as_bytes());
        bytes.extend_from_slice(CRLF);
        self.write_raw(&bytes).await
    }

    async fn write_raw(&mut self, bytes: &[u8]) -> Result<()> {
        let result = async {
            let stream = self.stream.get_mut();
            stream.write_all(bytes).await?;
            stream.flush().await
        }
        .await;
        if result.is_err() {
            self.mark_broken();
        }
        Ok(result?)
    }

    /// Read one raw line (terminator included) into the line buffer
    async fn read_raw_line(&mut self) -> Result<()> {
        self.line.clear();
        let result = self.stream.read_until(b'\n', &mut self.line).await;
        match result {
            Ok(_) if self.line.ends_with(b"\n") => Ok(()),
            // EOF, possibly after a partial line
            Ok(_) => {
                self.mark_broken();
                Err(NntpError::ConnectionClosed)
            }
            Err(e) => {
                self.mark_broken();
                Err(e.into())
            }
        }
    }

    /// Read and parse one status line
    ///
    /// # Errors
    ///
    /// - [`NntpError::ConnectionClosed`] / [`NntpError::Io`] on stream failure
    /// - [`NntpError::MalformedResponse`] if the line is not `ddd SP message`
    pub async fn read_status_line(&mut self) -> Result<NntpResponse> {
        self.read_raw_line().await?;
        let line = String::from_utf8_lossy(strip_line_ending(&self.line));
        trace!("Received: {}", line);
        commands::parse_single_response(&line)
    }

    /// Lazily read the dot-terminated block that follows a status line
    pub fn read_block(&mut self) -> BlockReader<'_, S> {
        BlockReader {
            codec: self,
            finished: false,
        }
    }

    /// Start sending a dot-terminated block
    pub fn open_block_writer(&mut self) -> BlockWriter<'_, S> {
        BlockWriter {
            codec: self,
            pending: Vec::new(),
            out: Vec::with_capacity(LINE_INITIAL_CAPACITY),
            finished: false,
        }
    }

    /// Shut down the write side of the transport
    pub async fn shutdown(&mut self) -> Result<()> {
        self.stream.get_mut().shutdown().await?;
        Ok(())
    }
}

/// Lazy reader over one dot-terminated block
///
/// Yields each line with its terminator removed and dot-stuffing undone.
/// The terminating "." line is consumed and never yielded.
pub struct BlockReader<'a, S> {
    codec: &'a mut LineCodec<S>,
    finished: bool,
}

impl<S: AsyncRead + AsyncWrite + Unpin> BlockReader<'_, S> {
    /// Next line of the block, or `None` once the terminator has been read
    pub async fn next_line(&mut self) -> Result<Option<&[u8]>> {
        if self.finished {
            return Ok(None);
        }
        self.codec.read_raw_line().await?;
        if is_terminator(strip_line_ending(&self.codec.line)) {
            self.finished = true;
            return Ok(None);
        }
        Ok(Some(unstuff_line(strip_line_ending(&self.codec.line))))
    }

    /// Read the remaining block, each line re-terminated with CRLF
    pub async fn read_to_end(mut self) -> Result<Vec<u8>> {
        let mut data = Vec::new();
        while let Some(line) = self.next_line().await? {
            data.extend_from_slice(line);
            data.extend_from_slice(CRLF);
        }
        Ok(data)
    }

    /// Read the remaining block as text lines (lossy UTF-8)
    pub async fn read_lines(mut self) -> Result<Vec<String>> {
        let mut lines = Vec::new();
        while let Some(line) = self.next_line().await? {
            lines.push(String::from_utf8_lossy(line).into_owned());
        }
        Ok(lines)
    }

    /// Whether the terminator has been consumed
    pub fn is_finished(&self) -> bool {
        self.finished
    }
}

impl<S> Drop for BlockReader<'_, S> {
    fn drop(&mut self) {
        if !self.finished {
            warn!("Block reader dropped before terminator, connection is out of sync");
            self.codec.mark_broken();
        }
    }
}

/// Writer for one outgoing dot-terminated block
///
/// Input may arrive in arbitrary chunks; it is split on LF, a trailing CR
/// is dropped, and every line goes out dot-stuffed and CRLF-terminated.
/// [`finish`](Self::finish) sends the terminator; it consumes the writer,
/// so the terminator goes out once.
pub struct BlockWriter<'a, S> {
    codec: &'a mut LineCodec<S>,
    /// Bytes of a line whose LF has not arrived yet
    pending: Vec<u8>,
    /// Encoded lines waiting to be written
    out: Vec<u8>,
    finished: bool,
}

impl<S: AsyncRead + AsyncWrite + Unpin> BlockWriter<'_, S> {
    /// Write one complete line (without terminator)
    ///
    /// A partial line still held from [`write`](Self::write) is ended first.
    pub async fn write_line(&mut self, line: &[u8]) -> Result<()> {
        self.end_pending_line();
        push_stuffed_line(&mut self.out, line);
        self.write_batch_if_full().await
    }

    /// Write an arbitrary chunk of the block
    pub async fn write(&mut self, data: &[u8]) -> Result<()> {
        self.pending.extend_from_slice(data);

        let mut start = 0;
        while let Some(offset) = self.pending[start..].iter().position(|&b| b == b'\n') {
            let end = start + offset + 1;
            push_stuffed_line(&mut self.out, strip_line_ending(&self.pending[start..end]));
            start = end;
        }
        self.pending.drain(..start);

        self.write_batch_if_full().await
    }

    async fn write_batch_if_full(&mut self) -> Result<()> {
        if self.out.len() >= WRITE_BATCH_SIZE {
            let out = std::mem::take(&mut self.out);
            self.codec.write_raw(&out).await?;
        }
        Ok(())
    }

    fn end_pending_line(&mut self) {
        if !self.pending.is_empty() {
            let rest = std::mem::take(&mut self.pending);
            push_stuffed_line(&mut self.out, strip_line_ending(&rest));
        }
    }

    /// Flush a trailing partial line, then send the terminating "."
    pub async fn finish(mut self) -> Result<()> {
        self.end_pending_line();
        self.out.extend_from_slice(TERMINATOR);

        let out = std::mem::take(&mut self.out);
        self.codec.write_raw(&out).await?;
        self.finished = true;
        trace!("Sent block terminator");
        Ok(())
    }
}

impl<S> Drop for BlockWriter<'_, S> {
    fn drop(&mut self) {
        if !self.finished {
            warn!("Block writer dropped before terminator, connection is out of sync");
            self.codec.mark_broken();
        }
    }
}
