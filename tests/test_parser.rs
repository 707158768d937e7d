use filehost::http::error::RequestError;
use filehost::http::parser::parse_request_line;
use filehost::http::request::{Method, Version};

#[test]
fn test_parse_simple_get_request() {
    let req = parse_request_line(b"GET / HTTP/1.1\r\nHost: example.com\r\n\r\n").unwrap();

    assert_eq!(req.method, Method::GET);
    assert_eq!(req.target, "/");
    assert_eq!(req.version, Version::Http11);
}

#[test]
fn test_parse_http10_request() {
    let req = parse_request_line(b"GET /index.html HTTP/1.0\r\n\r\n").unwrap();

    assert_eq!(req.target, "/index.html");
    assert_eq!(req.version, Version::Http10);
}

#[test]
fn test_parse_headers_are_not_interpreted() {
    let req =
        parse_request_line(b"GET /path HTTP/1.1\r\nBrokenHeader\r\nContent-Length: nope\r\n\r\n")
            .unwrap();

    assert_eq!(req.target, "/path");
}

#[test]
fn test_parse_query_string_kept_in_target() {
    let req = parse_request_line(b"GET /search?q=rust HTTP/1.1\r\n\r\n").unwrap();

    assert_eq!(req.target, "/search?q=rust");
}

#[test]
fn test_parse_extra_whitespace_between_tokens() {
    let req = parse_request_line(b"GET   /a.txt \t HTTP/1.1  \r\n\r\n").unwrap();

    assert_eq!(req.target, "/a.txt");
    assert_eq!(req.version, Version::Http11);
}

#[test]
fn test_parse_missing_line_terminator() {
    let err = parse_request_line(b"GET / HTTP/1.1").unwrap_err();

    assert!(matches!(err.error, RequestError::MalformedRequest));
    assert_eq!(err.version, Version::Http11);
}

#[test]
fn test_parse_too_few_tokens() {
    for line in [&b"GET /\r\n\r\n"[..], b"GET\r\n\r\n", b"\r\n\r\n", b"   \r\n\r\n"] {
        let err = parse_request_line(line).unwrap_err();
        assert!(matches!(err.error, RequestError::MalformedRequest));
    }
}

#[test]
fn test_parse_too_many_tokens() {
    let err = parse_request_line(b"GET / HTTP/1.1 extra\r\n\r\n").unwrap_err();

    assert!(matches!(err.error, RequestError::MalformedRequest));
}

#[test]
fn test_parse_non_get_methods_rejected() {
    for method in ["POST", "PUT", "DELETE", "HEAD", "OPTIONS", "PATCH", "BREW", "get"] {
        let req = format!("{} / HTTP/1.1\r\n\r\n", method);
        let err = parse_request_line(req.as_bytes()).unwrap_err();
        assert!(
            matches!(err.error, RequestError::MethodNotAllowed),
            "{} should be rejected",
            method
        );
        assert_eq!(err.version, Version::Http11);
    }
}

#[test]
fn test_parse_method_rejection_echoes_supported_version() {
    let err = parse_request_line(b"POST / HTTP/1.0\r\n\r\n").unwrap_err();

    assert!(matches!(err.error, RequestError::MethodNotAllowed));
    assert_eq!(err.version, Version::Http10);
}

#[test]
fn test_parse_method_checked_before_version() {
    let err = parse_request_line(b"POST / HTTP/2.0\r\n\r\n").unwrap_err();

    assert!(matches!(err.error, RequestError::MethodNotAllowed));
    assert_eq!(err.version, Version::Http11);
}

#[test]
fn test_parse_unsupported_versions() {
    for version in ["HTTP/2.0", "HTTP/0.9", "http/1.1", "HTTP/1.10"] {
        let req = format!("GET / {}\r\n\r\n", version);
        let err = parse_request_line(req.as_bytes()).unwrap_err();
        assert!(matches!(err.error, RequestError::VersionNotSupported));
        assert_eq!(err.version, Version::Http11);
    }
}

#[test]
fn test_parse_target_not_checked_by_parser() {
    // leading '/' is the resolver's job
    let req = parse_request_line(b"GET index.html HTTP/1.1\r\n\r\n").unwrap();

    assert_eq!(req.target, "index.html");
}

#[test]
fn test_method_from_str_is_case_sensitive() {
    assert_eq!(Method::from_str("GET"), Some(Method::GET));
    assert_eq!(Method::from_str("POST"), Some(Method::POST));
    assert_eq!(Method::from_str("INVALID"), None);
    assert_eq!(Method::from_str("get"), None);
}

#[test]
fn test_version_round_trip_strings() {
    assert_eq!(Version::from_str("HTTP/1.0"), Some(Version::Http10));
    assert_eq!(Version::from_str("HTTP/1.1"), Some(Version::Http11));
    assert_eq!(Version::Http10.as_str(), "HTTP/1.0");
    assert_eq!(Version::default(), Version::Http11);
}
