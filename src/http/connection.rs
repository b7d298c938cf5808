use tokio::io::{AsyncRead, AsyncWrite, AsyncWriteExt};

use crate::config::Config;
use crate::content::render::Renderer;
use crate::content::resolve::{Outcome, Resolver};
use crate::http::parser::parse_request;
use crate::http::reader::LineReader;
use crate::http::response::{ResponseHead, StatusCode};
use crate::http::writer::HeadWriter;

/// Every response carries the same fixed content type.
const CONTENT_TYPE: &str = "text/html";

/// Handles exactly one request-then-respond cycle on one stream.
///
/// The stream is generic so tests can drive a connection over an in-memory
/// pipe; the listener hands it a `TcpStream`. The connection owns the
/// stream for its whole lifetime and releases it on every exit path:
/// `run` consumes `self`, so the stream is dropped (closed) whether the
/// exchange completed or a fault aborted it.
pub struct Connection<S> {
    stream: S,
    server_name: String,
    resolver: Resolver,
}

impl<S: AsyncRead + AsyncWrite + Unpin> Connection<S> {
    pub fn new(stream: S, config: &Config) -> Self {
        Self {
            stream,
            server_name: config.server_name.clone(),
            resolver: Resolver::new(config.web_root.clone()),
        }
    }

    /// Runs the connection to completion: parse, resolve, head, body.
    ///
    /// The outcome is decided once, after parsing, and threaded through
    /// head and body generation unchanged, so status line and body cannot
    /// disagree. The head is fully written before any body byte. Faults
    /// from the stream or from reading a resolved file propagate out; the
    /// caller logs them and the stream is dropped either way.
    pub async fn run(self) -> anyhow::Result<()> {
        let Self {
            stream,
            server_name,
            resolver,
        } = self;

        let (read_half, mut write_half) = tokio::io::split(stream);

        let mut reader = LineReader::new(read_half);
        let target = parse_request(&mut reader).await;

        let outcome = resolver.resolve(&target).await;
        tracing::debug!(?target, ?outcome, "Request resolved");

        let status = match &outcome {
            Outcome::NotFound => StatusCode::NotFound,
            Outcome::Home | Outcome::FileFound(_) => StatusCode::Ok,
        };

        let head = ResponseHead::new(status, CONTENT_TYPE, &server_name);
        HeadWriter::new(&head).write_to_stream(&mut write_half).await?;

        let renderer = Renderer::new(&server_name);
        renderer.render(&outcome, &mut write_half).await?;

        write_half.flush().await?;
        write_half.shutdown().await?;

        Ok(())
    }
}
