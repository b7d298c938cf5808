//! Response body generation
//!
//! Writes the body matching a committed [`Outcome`]: the 404 page, the
//! built-in home page, or a file's contents with tag substitution applied
//! line by line.

use crate::content::resolve::Outcome;
use crate::content::tags;
use anyhow::Context;
use tokio::fs::File;
use tokio::io::{AsyncBufReadExt, AsyncWrite, AsyncWriteExt, BufReader};

const NOT_FOUND_PAGE: &str = "<html><head></head><body>\n<h3>ERROR 404</h3>\n</body></html>\n";

const HOME_PAGE: &str = "<html><head></head><body>\n<h3>My web server works!</h3>\n</body></html>\n";

/// Renders response bodies for one server identity.
#[derive(Debug, Clone)]
pub struct Renderer {
    server_name: String,
}

impl Renderer {
    pub fn new(server_name: impl Into<String>) -> Self {
        Self {
            server_name: server_name.into(),
        }
    }

    /// Writes the body for `outcome` to `out`.
    ///
    /// For `FileFound`, the file is read line by line in text mode and
    /// every line passes through tag substitution before being written, in
    /// file order. A file that vanished between resolution and here is
    /// a fault, not a 404: resolution already committed the status line,
    /// so the error propagates and the connection is aborted.
    pub async fn render<W>(&self, outcome: &Outcome, out: &mut W) -> anyhow::Result<()>
    where
        W: AsyncWrite + Unpin,
    {
        match outcome {
            Outcome::NotFound => {
                out.write_all(NOT_FOUND_PAGE.as_bytes()).await?;
            }

            Outcome::Home => {
                out.write_all(HOME_PAGE.as_bytes()).await?;
            }

            Outcome::FileFound(path) => {
                let file = File::open(path)
                    .await
                    .with_context(|| format!("Failed to open {}", path.display()))?;

                let mut lines = BufReader::new(file).lines();

                while let Some(line) = lines
                    .next_line()
                    .await
                    .with_context(|| format!("Failed to read {}", path.display()))?
                {
                    let rendered = tags::substitute(&line, &self.server_name);
                    out.write_all(rendered.as_bytes()).await?;
                    out.write_all(b"\n").await?;
                }
            }
        }

        Ok(())
    }
}
