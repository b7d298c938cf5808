use bytes::BytesMut;
use tokio::io::{AsyncRead, AsyncReadExt};

/// Cap on buffered bytes while waiting for a newline.
const MAX_LINE_BYTES: usize = 64 * 1024;

/// Reads newline-delimited text lines from a byte stream.
///
/// The source may deliver bytes in arbitrary chunks; `next_line` suspends
/// until a full line is buffered or the stream ends. Lines are handed out
/// without their terminator (a trailing `\r` is stripped too). The
/// sequence is forward-only and finite: once `None` is returned, the
/// reader is exhausted.
pub struct LineReader<R> {
    source: R,
    buffer: BytesMut,
    done: bool,
}

impl<R: AsyncRead + Unpin> LineReader<R> {
    pub fn new(source: R) -> Self {
        Self {
            source,
            buffer: BytesMut::with_capacity(4096),
            done: false,
        }
    }

    /// Returns the next full line, or `None` at end of stream.
    ///
    /// Stream closure, an I/O fault, and a line exceeding the buffer cap
    /// all end the sequence; a partial line pending at closure is
    /// discarded, not returned. Bytes that are not valid UTF-8 are
    /// replaced rather than treated as a fault.
    pub async fn next_line(&mut self) -> Option<String> {
        loop {
            if let Some(pos) = self.buffer.iter().position(|&b| b == b'\n') {
                let mut line = self.buffer.split_to(pos + 1);
                line.truncate(pos);

                if line.last() == Some(&b'\r') {
                    line.truncate(line.len() - 1);
                }

                return Some(String::from_utf8_lossy(&line).into_owned());
            }

            if self.done {
                return None;
            }

            // Prevent unbounded growth while no newline arrives
            if self.buffer.len() > MAX_LINE_BYTES {
                tracing::warn!(buffered = self.buffer.len(), "Request line too long, giving up");
                self.done = true;
                return None;
            }

            match self.source.read_buf(&mut self.buffer).await {
                Ok(0) => {
                    self.done = true;
                    return None;
                }

                Ok(_) => continue,

                Err(e) => {
                    tracing::debug!("Read error, treating as end of stream: {}", e);
                    self.done = true;
                    return None;
                }
            }
        }
    }
}
