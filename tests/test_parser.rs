use typhoon::http::parser::{parse_request_line, ParseError};
use typhoon::http::request::Method;

#[test]
fn test_parse_get_with_version() {
    let req = parse_request_line(b"GET /index.html HTTP/1.1").unwrap();

    assert_eq!(req.method, Method::GET);
    assert_eq!(req.target, "/index.html");
    assert!(req.is_get());
}

#[test]
fn test_parse_get_without_version() {
    let req = parse_request_line(b"GET /hello.py?name=world").unwrap();

    assert_eq!(req.target, "/hello.py?name=world");
}

#[test]
fn test_parse_other_methods_are_kept_but_not_get() {
    for method in ["POST", "PUT", "DELETE", "HEAD", "get"] {
        let line = format!("{} /x.css HTTP/1.1", method);
        let req = parse_request_line(line.as_bytes()).unwrap();

        assert_eq!(req.method, Method::Other(method.to_string()));
        assert!(!req.is_get());
    }
}

#[test]
fn test_parse_header_line_is_not_get() {
    let req = parse_request_line(b"Host: example.com").unwrap();

    assert!(!req.is_get());
}

#[test]
fn test_parse_empty_line() {
    assert_eq!(parse_request_line(b""), Err(ParseError::Empty));
}

#[test]
fn test_parse_single_token() {
    assert_eq!(parse_request_line(b"GET"), Err(ParseError::MissingTarget));
}

#[test]
fn test_parse_invalid_utf8() {
    assert_eq!(
        parse_request_line(b"GET /\xff\xfe.css"),
        Err(ParseError::InvalidUtf8)
    );
}

#[test]
fn test_parse_splits_on_single_space() {
    // Two spaces leave an empty target, which routes nowhere useful but parses.
    let req = parse_request_line(b"GET  /a.css").unwrap();

    assert_eq!(req.target, "");
}

#[test]
fn test_request_line_segments_and_query() {
    let req = parse_request_line(b"GET /cgi/hello.py?name=world HTTP/1.1").unwrap();

    assert_eq!(req.segments(), vec!["", "cgi", "hello.py?name=world"]);

    let args = req.query_args();
    assert_eq!(args.script, "/cgi/hello.py");
    assert_eq!(args.query, Some("name=world"));
}
