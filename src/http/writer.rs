use chrono::Utc;
use tokio::io::{AsyncWrite, AsyncWriteExt};

use crate::http::response::ResponseHead;

const HTTP_VERSION: &str = "HTTP/1.1";

/// Serializes the head: status line, headers in fixed order, blank line.
///
/// Header order is part of the wire contract; the fields are written out
/// explicitly, never through a map.
fn serialize_head(head: &ResponseHead) -> Vec<u8> {
    let mut buf = Vec::new();

    let status_line = format!(
        "{} {} {}\r\n",
        HTTP_VERSION,
        head.status.as_u16(),
        head.status.reason_phrase()
    );
    buf.extend_from_slice(status_line.as_bytes());

    let date = Utc::now().format("%a, %d %b %Y %H:%M:%S GMT");
    buf.extend_from_slice(format!("Date: {}\r\n", date).as_bytes());
    buf.extend_from_slice(format!("Server: {}\r\n", head.server).as_bytes());
    buf.extend_from_slice(b"Connection: close\r\n");
    buf.extend_from_slice(format!("Content-Type: {}\r\n", head.content_type).as_bytes());

    // Head ends with a blank line
    buf.extend_from_slice(b"\r\n");

    buf
}

/// Writes a serialized response head to a stream.
pub struct HeadWriter {
    buffer: Vec<u8>,
    written: usize,
}

impl HeadWriter {
    pub fn new(head: &ResponseHead) -> Self {
        Self {
            buffer: serialize_head(head),
            written: 0,
        }
    }

    /// The serialized bytes, as they will appear on the wire.
    pub fn as_bytes(&self) -> &[u8] {
        &self.buffer
    }

    pub async fn write_to_stream<W>(&mut self, stream: &mut W) -> anyhow::Result<()>
    where
        W: AsyncWrite + Unpin,
    {
        while self.written < self.buffer.len() {
            let n = stream.write(&self.buffer[self.written..]).await?;

            if n == 0 {
                return Err(anyhow::anyhow!("connection closed while writing head"));
            }

            self.written += n;
        }

        Ok(())
    }
}
