use crate::http::reader::LineReader;
use crate::http::request::{RequestLine, RequestTarget};
use tokio::io::AsyncRead;

/// Consumes one request's header block and extracts the target.
///
/// Lines are read until the blank line ending the header block or until
/// the stream ends. The first line recognized by [`RequestLine::parse`]
/// supplies the target; later GET lines and all other header lines are
/// read and discarded. If the block ends with no GET line seen (blank
/// line first, early stream end, or a read fault), the target is `Home`.
pub async fn parse_request<R>(reader: &mut LineReader<R>) -> RequestTarget
where
    R: AsyncRead + Unpin,
{
    let mut target = RequestTarget::Home;
    let mut seen_get = false;

    while let Some(line) = reader.next_line().await {
        if line.is_empty() {
            break;
        }

        tracing::debug!(line = %line, "Request line");

        if !seen_get {
            if let Some(request_line) = RequestLine::parse(&line) {
                target = RequestTarget::Path(request_line.raw_path);
                seen_get = true;
            }
        }
    }

    target
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn parse_simple_get() {
        let input = b"GET /index.html HTTP/1.1\r\nHost: example.com\r\n\r\n";
        let mut reader = LineReader::new(std::io::Cursor::new(&input[..]));

        let target = parse_request(&mut reader).await;

        assert_eq!(target, RequestTarget::Path("index.html".to_string()));
    }
}
