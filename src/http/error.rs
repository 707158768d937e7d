use std::fmt;
use std::io;

use crate::http::response::StatusCode;

const BAD_REQUEST_BODY: &str = "The request could not be parsed or is malformed\n";
const METHOD_NOT_ALLOWED_BODY: &str = "Only GET supported\n";
const VERSION_NOT_SUPPORTED_BODY: &str = "Use HTTP/1.0 or HTTP/1.1\n";
const FORBIDDEN_BODY: &str =
    "404 The requested file can not be accessed due to a file permission issue\n";
const NOT_FOUND_BODY: &str = "404 The requested file can not be found in the document tree\n";

/// Every way handling a single request can fail.
///
/// Each variant except `Io` maps to exactly one status line and plain-text
/// body. `Io` means the connection itself is unusable and nothing is sent.
#[derive(Debug)]
pub enum RequestError {
    Io(io::Error),
    HeaderTooLarge,
    MalformedRequest,
    MethodNotAllowed,
    VersionNotSupported,
    Forbidden,
    NotFound,
}

impl RequestError {
    /// Status to answer with, or `None` when no response can be sent.
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            RequestError::Io(_) => None,
            RequestError::HeaderTooLarge | RequestError::MalformedRequest => {
                Some(StatusCode::BadRequest)
            }
            RequestError::MethodNotAllowed => Some(StatusCode::MethodNotAllowed),
            RequestError::VersionNotSupported => Some(StatusCode::HttpVersionNotSupported),
            RequestError::Forbidden => Some(StatusCode::Forbidden),
            RequestError::NotFound => Some(StatusCode::NotFound),
        }
    }

    pub fn body(&self) -> &'static str {
        match self {
            RequestError::Io(_) => "",
            RequestError::HeaderTooLarge | RequestError::MalformedRequest => BAD_REQUEST_BODY,
            RequestError::MethodNotAllowed => METHOD_NOT_ALLOWED_BODY,
            RequestError::VersionNotSupported => VERSION_NOT_SUPPORTED_BODY,
            RequestError::Forbidden => FORBIDDEN_BODY,
            RequestError::NotFound => NOT_FOUND_BODY,
        }
    }
}

impl fmt::Display for RequestError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RequestError::Io(e) => write!(f, "connection I/O error: {}", e),
            RequestError::HeaderTooLarge => f.write_str("request header block too large"),
            RequestError::MalformedRequest => f.write_str("malformed request"),
            RequestError::MethodNotAllowed => f.write_str("method not allowed"),
            RequestError::VersionNotSupported => f.write_str("HTTP version not supported"),
            RequestError::Forbidden => f.write_str("forbidden"),
            RequestError::NotFound => f.write_str("not found"),
        }
    }
}

impl std::error::Error for RequestError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            RequestError::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<io::Error> for RequestError {
    fn from(e: io::Error) -> Self {
        RequestError::Io(e)
    }
}
