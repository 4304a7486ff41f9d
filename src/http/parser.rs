use crate::http::request::{Method, RequestLine};

#[derive(Debug, PartialEq, Eq)]
pub enum ParseError {
    Empty,
    MissingTarget,
    InvalidUtf8,
}

/// Parses one request line with its terminator already removed.
///
/// Tokens are separated by a single space; anything after the target
/// (typically the HTTP version) is ignored.
pub fn parse_request_line(line: &[u8]) -> Result<RequestLine, ParseError> {
    if line.is_empty() {
        return Err(ParseError::Empty);
    }

    let line = std::str::from_utf8(line).map_err(|_| ParseError::InvalidUtf8)?;

    let mut parts = line.split(' ');
    let method = parts.next().ok_or(ParseError::Empty)?;
    let target = parts.next().ok_or(ParseError::MissingTarget)?;

    Ok(RequestLine::new(Method::from_token(method), target))
}

/// Drops a trailing `\n` or `\r\n`.
pub fn trim_line_ending(line: &[u8]) -> &[u8] {
    let line = line.strip_suffix(b"\n").unwrap_or(line);
    line.strip_suffix(b"\r").unwrap_or(line)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_simple_get() {
        let req = parse_request_line(b"GET /index.html HTTP/1.1").unwrap();

        assert_eq!(req.method, Method::GET);
        assert_eq!(req.target, "/index.html");
    }

    #[test]
    fn single_token_is_rejected() {
        assert_eq!(parse_request_line(b"GET"), Err(ParseError::MissingTarget));
    }

    #[test]
    fn line_endings() {
        assert_eq!(trim_line_ending(b"GET /\r\n"), b"GET /");
        assert_eq!(trim_line_ending(b"GET /\n"), b"GET /");
        assert_eq!(trim_line_ending(b"GET /"), b"GET /");
    }
}
