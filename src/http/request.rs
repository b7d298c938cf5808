/// The target a client asked for, extracted from the request line.
///
/// `Home` means no usable GET line arrived before the end of the header
/// block; the server answers with its built-in page. `Path` carries the raw
/// path text exactly as it appeared on the wire, with only the literal
/// `"GET /"` prefix and `" HTTP/1.1"` suffix stripped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RequestTarget {
    /// No path was requested; serve the built-in page.
    Home,
    /// A path was requested; raw text, not decoded or sanitized.
    Path(String),
}

/// A recognized GET request line, before resolution.
///
/// Ephemeral: built from the first qualifying header line, consumed to
/// produce a [`RequestTarget`], never stored past that.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestLine {
    /// Requested path with the method prefix and protocol suffix removed.
    pub raw_path: String,
}

impl RequestLine {
    /// Recognizes a request line of the form `GET /<path> HTTP/1.1`.
    ///
    /// Extraction is purely textual: the literal substrings `"GET /"` and
    /// `" HTTP/1.1"` are removed and whatever remains is the raw path. No
    /// percent-decoding, no query-string separation, no traversal
    /// sanitization. Lines not starting with `"GET "` are not request
    /// lines and yield `None`.
    pub fn parse(line: &str) -> Option<Self> {
        if !line.starts_with("GET ") {
            return None;
        }

        let raw_path = line.replace("GET /", "").replace(" HTTP/1.1", "");

        Some(Self { raw_path })
    }
}
