use std::io::Cursor;
use tagserve::http::reader::LineReader;
use tokio::io::AsyncWriteExt;

#[tokio::test]
async fn test_reads_newline_terminated_lines() {
    let input = b"first\nsecond\n";
    let mut reader = LineReader::new(Cursor::new(&input[..]));

    assert_eq!(reader.next_line().await.as_deref(), Some("first"));
    assert_eq!(reader.next_line().await.as_deref(), Some("second"));
    assert_eq!(reader.next_line().await, None);
}

#[tokio::test]
async fn test_strips_carriage_return() {
    let input = b"GET / HTTP/1.1\r\nHost: x\r\n\r\n";
    let mut reader = LineReader::new(Cursor::new(&input[..]));

    assert_eq!(reader.next_line().await.as_deref(), Some("GET / HTTP/1.1"));
    assert_eq!(reader.next_line().await.as_deref(), Some("Host: x"));
    assert_eq!(reader.next_line().await.as_deref(), Some(""));
    assert_eq!(reader.next_line().await, None);
}

#[tokio::test]
async fn test_empty_stream_is_end_of_stream() {
    let mut reader = LineReader::new(Cursor::new(&b""[..]));

    assert_eq!(reader.next_line().await, None);
}

#[tokio::test]
async fn test_partial_line_at_close_is_not_a_line() {
    let input = b"complete\nincomplete without newline";
    let mut reader = LineReader::new(Cursor::new(&input[..]));

    assert_eq!(reader.next_line().await.as_deref(), Some("complete"));
    assert_eq!(reader.next_line().await, None);
}

#[tokio::test]
async fn test_exhausted_reader_stays_exhausted() {
    let mut reader = LineReader::new(Cursor::new(&b"one\n"[..]));

    assert_eq!(reader.next_line().await.as_deref(), Some("one"));
    assert_eq!(reader.next_line().await, None);
    assert_eq!(reader.next_line().await, None);
}

#[tokio::test]
async fn test_line_arriving_in_pieces() {
    let (mut client, server) = tokio::io::duplex(64);
    let mut reader = LineReader::new(server);

    let writer = tokio::spawn(async move {
        client.write_all(b"GET /ind").await.unwrap();
        tokio::time::sleep(std::time::Duration::from_millis(10)).await;
        client.write_all(b"ex.html HTTP/1.1\r\n").await.unwrap();
        client.shutdown().await.unwrap();
    });

    assert_eq!(
        reader.next_line().await.as_deref(),
        Some("GET /index.html HTTP/1.1")
    );
    assert_eq!(reader.next_line().await, None);

    writer.await.unwrap();
}

#[tokio::test]
async fn test_blank_lines_are_returned_empty() {
    let input = b"\n\nGET / HTTP/1.1\n";
    let mut reader = LineReader::new(Cursor::new(&input[..]));

    assert_eq!(reader.next_line().await.as_deref(), Some(""));
    assert_eq!(reader.next_line().await.as_deref(), Some(""));
    assert_eq!(reader.next_line().await.as_deref(), Some("GET / HTTP/1.1"));
}
