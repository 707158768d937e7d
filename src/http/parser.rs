use crate::http::error::RequestError;
use crate::http::request::{Method, Request, Version};

/// Why a request line was rejected, plus the version to frame the answer with.
#[derive(Debug)]
pub struct ParseFailure {
    pub error: RequestError,
    pub version: Version,
}

impl ParseFailure {
    fn new(error: RequestError, version: Version) -> Self {
        Self { error, version }
    }

    fn malformed() -> Self {
        Self::new(RequestError::MalformedRequest, Version::Http11)
    }
}

/// Parses the request line out of a complete request head.
///
/// The line must hold exactly three whitespace-separated tokens. The method
/// is checked before the version, so `POST / HTTP/9.9` is a 405, and the
/// 405 echoes the client's version only when it is one we speak.
pub fn parse_request_line(head: &[u8]) -> Result<Request, ParseFailure> {
    let line_end = find_line_end(head).ok_or_else(ParseFailure::malformed)?;
    let line = &head[..line_end];

    let mut tokens = Tokens::new(line);
    let (Some(method), Some(target), Some(version), None) =
        (tokens.next(), tokens.next(), tokens.next(), tokens.next())
    else {
        return Err(ParseFailure::malformed());
    };

    let method = std::str::from_utf8(method).map_err(|_| ParseFailure::malformed())?;
    let target = std::str::from_utf8(target).map_err(|_| ParseFailure::malformed())?;
    let version = std::str::from_utf8(version).map_err(|_| ParseFailure::malformed())?;

    let parsed_version = Version::from_str(version);

    if Method::from_str(method) != Some(Method::GET) {
        return Err(ParseFailure::new(
            RequestError::MethodNotAllowed,
            parsed_version.unwrap_or_default(),
        ));
    }

    let Some(version) = parsed_version else {
        return Err(ParseFailure::new(
            RequestError::VersionNotSupported,
            Version::Http11,
        ));
    };

    Ok(Request {
        method: Method::GET,
        target: target.to_string(),
        version,
    })
}

fn find_line_end(buf: &[u8]) -> Option<usize> {
    buf.windows(2).position(|w| w == b"\r\n")
}

/// Splits a line into runs of non-whitespace bytes.
struct Tokens<'a> {
    rest: &'a [u8],
}

impl<'a> Tokens<'a> {
    fn new(line: &'a [u8]) -> Self {
        Self { rest: line }
    }
}

impl<'a> Iterator for Tokens<'a> {
    type Item = &'a [u8];

    fn next(&mut self) -> Option<&'a [u8]> {
        let start = self.rest.iter().position(|b| !is_space(*b))?;
        let rest = &self.rest[start..];
        let len = rest.iter().position(|b| is_space(*b)).unwrap_or(rest.len());
        let (token, tail) = rest.split_at(len);
        self.rest = tail;
        Some(token)
    }
}

// ASCII whitespace, vertical tab included.
fn is_space(b: u8) -> bool {
    matches!(b, b' ' | b'\t' | b'\n' | b'\x0b' | b'\x0c' | b'\r')
}
