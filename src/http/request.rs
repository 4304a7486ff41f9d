/// HTTP request methods.
///
/// Only GET is dispatched; every other token on a request line is kept as
/// `Other` so the connection can skip it without answering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Method {
    /// GET - Retrieve a resource
    GET,
    /// Any other token in method position (POST, header names, ...)
    Other(String),
}

impl Method {
    /// Parses a method token. Matching is exact and case-sensitive.
    ///
    /// # Example
    ///
    /// ```
    /// # use typhoon::http::request::Method;
    /// assert_eq!(Method::from_token("GET"), Method::GET);
    /// assert_eq!(Method::from_token("get"), Method::Other("get".into()));
    /// ```
    pub fn from_token(s: &str) -> Self {
        match s {
            "GET" => Method::GET,
            other => Method::Other(other.to_string()),
        }
    }
}

/// One parsed request line: `METHOD SP TARGET [SP ...]`.
///
/// Lives for a single request cycle only.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestLine {
    /// The method token
    pub method: Method,
    /// The raw target, query string included (e.g. "/hello.py?name=world")
    pub target: String,
}

impl RequestLine {
    pub fn new(method: Method, target: impl Into<String>) -> Self {
        Self {
            method,
            target: target.into(),
        }
    }

    pub fn is_get(&self) -> bool {
        self.method == Method::GET
    }

    /// Segments of the target split on `/`.
    pub fn segments(&self) -> Vec<&str> {
        path_segments(&self.target)
    }

    /// The final path segment, the one routing looks at.
    pub fn file_name(&self) -> &str {
        self.segments().last().copied().unwrap_or_default()
    }

    /// The script path and optional query string of the target.
    pub fn query_args(&self) -> QueryArgs<'_> {
        QueryArgs::split(&self.target)
    }
}

/// Splits a target on `/`. A leading `/` yields an empty first segment,
/// so the result is never empty.
pub fn path_segments(target: &str) -> Vec<&str> {
    target.split('/').collect()
}

/// A target split on the first `?`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QueryArgs<'a> {
    pub script: &'a str,
    pub query: Option<&'a str>,
}

impl<'a> QueryArgs<'a> {
    pub fn split(target: &'a str) -> Self {
        match target.split_once('?') {
            Some((script, query)) => Self {
                script,
                query: Some(query),
            },
            None => Self {
                script: target,
                query: None,
            },
        }
    }
}
