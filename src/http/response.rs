use bytes::Bytes;
use tokio::fs::File;

/// Value of the `Server` header on every response.
pub const SERVER_NAME: &str = "Typhoon";

/// HTTP status codes the server emits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusCode {
    /// 200 OK
    Ok,
    /// 404 Not Found
    NotFound,
}

impl StatusCode {
    /// Returns the numeric HTTP status code.
    ///
    /// # Example
    ///
    /// ```
    /// # use typhoon::http::response::StatusCode;
    /// assert_eq!(StatusCode::Ok.as_u16(), 200);
    /// assert_eq!(StatusCode::NotFound.as_u16(), 404);
    /// ```
    pub fn as_u16(&self) -> u16 {
        match self {
            StatusCode::Ok => 200,
            StatusCode::NotFound => 404,
        }
    }

    /// Returns the standard HTTP reason phrase for this status code.
    pub fn reason_phrase(&self) -> &'static str {
        match self {
            StatusCode::Ok => "OK",
            StatusCode::NotFound => "Not Found",
        }
    }
}

/// What follows the header block.
#[derive(Debug)]
pub enum Body {
    /// Headers only.
    Empty,
    /// A fully buffered body, e.g. captured script output.
    Full(Bytes),
    /// An open file streamed in chunks by the writer. The handle is closed
    /// when the response is dropped.
    File(File),
}

/// A complete HTTP response ready to be written to a client.
///
/// Headers keep insertion order so they go out on the wire exactly as built.
#[derive(Debug)]
pub struct Response {
    /// The HTTP status code
    pub status: StatusCode,
    /// Headers in wire order
    pub headers: Vec<(String, String)>,
    pub body: Body,
}

/// Builder for constructing HTTP responses in a fluent style.
///
/// # Example
///
/// ```ignore
/// let response = ResponseBuilder::new(StatusCode::Ok)
///     .content_length(body.len() as u64)
///     .header("Content-Type", "text/html")
///     .body(Body::Full(body))
///     .build();
/// ```
pub struct ResponseBuilder {
    status: StatusCode,
    headers: Vec<(String, String)>,
    body: Body,
}

impl ResponseBuilder {
    /// Creates a builder with the `Server` header already set.
    pub fn new(status: StatusCode) -> Self {
        Self {
            status,
            headers: vec![("Server".to_string(), SERVER_NAME.to_string())],
            body: Body::Empty,
        }
    }

    /// Adds a header, or replaces the value of an existing one in place.
    pub fn header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        let key = key.into();
        let value = value.into();

        match self.headers.iter_mut().find(|(k, _)| k.eq_ignore_ascii_case(&key)) {
            Some(existing) => existing.1 = value,
            None => self.headers.push((key, value)),
        }
        self
    }

    pub fn content_length(self, len: u64) -> Self {
        self.header("Content-Length", len.to_string())
    }

    pub fn body(mut self, body: Body) -> Self {
        self.body = body;
        self
    }

    pub fn build(self) -> Response {
        Response {
            status: self.status,
            headers: self.headers,
            body: self.body,
        }
    }
}

impl Response {
    /// A 200 response around a buffered body.
    pub fn ok(content_type: &str, body: impl Into<Bytes>) -> Self {
        let body = body.into();
        ResponseBuilder::new(StatusCode::Ok)
            .content_length(body.len() as u64)
            .header("Content-Type", content_type)
            .header("Connection", "keep-alive")
            .body(Body::Full(body))
            .build()
    }

    /// A 200 response that streams `file`, `len` bytes long.
    pub fn file(content_type: &str, file: File, len: u64) -> Self {
        ResponseBuilder::new(StatusCode::Ok)
            .content_length(len)
            .header("Content-Type", content_type)
            .header("Connection", "keep-alive")
            .body(Body::File(file))
            .build()
    }

    /// The headers-only 404 used for every recoverable request failure.
    pub fn not_found() -> Self {
        ResponseBuilder::new(StatusCode::NotFound)
            .header("Connection", "close")
            .build()
    }

    /// Retrieves a header value by name, ignoring ASCII case.
    pub fn header(&self, key: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(key))
            .map(|(_, v)| v.as_str())
    }
}
