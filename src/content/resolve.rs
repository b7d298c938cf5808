//! Request target resolution
//!
//! This module decides what one connection will be served: the built-in
//! home page, an existing file, or a 404 page.

use crate::http::request::RequestTarget;
use std::path::PathBuf;

/// The committed decision for one connection.
///
/// Decided exactly once, during resolution, and immutable afterwards: the
/// status line and the body are both derived from it and must agree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// No (usable) path requested; serve the built-in home page.
    Home,
    /// The requested path exists on disk; serve its contents.
    FileFound(PathBuf),
    /// The requested path does not exist; serve the 404 page.
    NotFound,
}

/// Resolves request targets against a web root directory.
#[derive(Debug, Clone)]
pub struct Resolver {
    web_root: PathBuf,
}

impl Resolver {
    pub fn new(web_root: PathBuf) -> Self {
        Self { web_root }
    }

    /// Maps a parsed target to the outcome served on this connection.
    ///
    /// Rules, in order:
    /// 1. `Home` target stays `Home`.
    /// 2. A path naming an existing entry under the web root is `FileFound`.
    /// 3. A missing path that is empty, or contains `"favicon.ico"`
    ///    anywhere in it, is `Home` rather than `NotFound`. The check is a
    ///    substring match on the whole path, not an exact match.
    /// 4. Everything else is `NotFound`.
    pub async fn resolve(&self, target: &RequestTarget) -> Outcome {
        let raw = match target {
            RequestTarget::Home => return Outcome::Home,
            RequestTarget::Path(raw) => raw,
        };

        let candidate = self.web_root.join(raw);

        if tokio::fs::try_exists(&candidate).await.unwrap_or(false) {
            tracing::debug!(path = %candidate.display(), "Resolved to existing file");
            return Outcome::FileFound(candidate);
        }

        if raw.is_empty() || raw.contains("favicon.ico") {
            return Outcome::Home;
        }

        tracing::debug!(path = %raw, "Requested path does not exist");
        Outcome::NotFound
    }
}
