/// HTTP status codes the server can answer with.
///
/// The server only ever answers 200 or 404: every connection is committed
/// to exactly one outcome, and the outcome maps onto one of these.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusCode {
    /// 200 OK
    Ok,
    /// 404 NOT FOUND
    NotFound,
}

impl StatusCode {
    /// Returns the numeric HTTP status code.
    pub fn as_u16(&self) -> u16 {
        match self {
            StatusCode::Ok => 200,
            StatusCode::NotFound => 404,
        }
    }

    /// Returns the reason phrase as written on the wire.
    ///
    /// `NOT FOUND` is uppercase: the phrase is part of the wire contract,
    /// not display text.
    pub fn reason_phrase(&self) -> &'static str {
        match self {
            StatusCode::Ok => "OK",
            StatusCode::NotFound => "NOT FOUND",
        }
    }
}

/// The response head: status line plus the fixed header set.
///
/// Body length is never part of the head: the end of the body is signaled
/// by closing the connection, so there is no `Content-Length`.
#[derive(Debug, Clone)]
pub struct ResponseHead {
    /// Status code for the status line.
    pub status: StatusCode,
    /// Value of the `Content-Type` header.
    pub content_type: String,
    /// Value of the `Server` header.
    pub server: String,
}

impl ResponseHead {
    pub fn new(
        status: StatusCode,
        content_type: impl Into<String>,
        server: impl Into<String>,
    ) -> Self {
        Self {
            status,
            content_type: content_type.into(),
            server: server.into(),
        }
    }
}
