use crate::http::error::RequestError;
use crate::http::request::Version;

/// HTTP status codes the server can answer with.
///
/// - `Ok` (200): file served
/// - `BadRequest` (400): malformed or oversized request head
/// - `Forbidden` (403): traversal attempt or unreadable file
/// - `NotFound` (404): no such file, or a directory without an index
/// - `MethodNotAllowed` (405): anything but GET
/// - `HttpVersionNotSupported` (505): not HTTP/1.0 or HTTP/1.1
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusCode {
    Ok,
    BadRequest,
    Forbidden,
    NotFound,
    MethodNotAllowed,
    HttpVersionNotSupported,
}

impl StatusCode {
    /// Returns the numeric HTTP status code.
    ///
    /// ```
    /// # use filehost::http::response::StatusCode;
    /// assert_eq!(StatusCode::Ok.as_u16(), 200);
    /// assert_eq!(StatusCode::NotFound.as_u16(), 404);
    /// ```
    pub fn as_u16(&self) -> u16 {
        match self {
            StatusCode::Ok => 200,
            StatusCode::BadRequest => 400,
            StatusCode::Forbidden => 403,
            StatusCode::NotFound => 404,
            StatusCode::MethodNotAllowed => 405,
            StatusCode::HttpVersionNotSupported => 505,
        }
    }

    /// Returns the reason phrase sent on the status line.
    pub fn reason_phrase(&self) -> &'static str {
        match self {
            StatusCode::Ok => "OK",
            StatusCode::BadRequest => "Bad Request",
            StatusCode::Forbidden => "Forbidden",
            StatusCode::NotFound => "Not Found",
            StatusCode::MethodNotAllowed => "Method Not Allowed",
            StatusCode::HttpVersionNotSupported => "HTTP Version Not Supported",
        }
    }
}

/// Everything that goes into a response header block.
///
/// Built in full before anything is written and never changed afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResponseHead {
    pub version: Version,
    pub status: StatusCode,
    pub content_type: &'static str,
    /// Exact number of body bytes that follow the header block
    pub content_length: u64,
}

impl ResponseHead {
    /// Head for a successfully resolved file.
    pub fn ok(version: Version, content_type: &'static str, content_length: u64) -> Self {
        Self {
            version,
            status: StatusCode::Ok,
            content_type,
            content_length,
        }
    }

    /// Head for an error response with a plain-text body.
    ///
    /// Returns `None` for errors that cannot be answered (`RequestError::Io`).
    pub fn error(version: Version, err: &RequestError) -> Option<Self> {
        let status = err.status()?;
        Some(Self {
            version,
            status,
            content_type: "text/plain",
            content_length: err.body().len() as u64,
        })
    }

    /// Serializes the status line and headers, including the blank line.
    pub fn to_bytes(&self) -> Vec<u8> {
        format!(
            "{} {} {}\r\nContent-Type: {}\r\nContent-Length: {}\r\nConnection: Close\r\n\r\n",
            self.version,
            self.status.as_u16(),
            self.status.reason_phrase(),
            self.content_type,
            self.content_length,
        )
        .into_bytes()
    }
}
