//! Request dispatch.
//!
//! A GET target is routed on the extension of its final path segment: a
//! match in the static allow-list goes to [`static_files`], anything else
//! goes to [`dynamic`]. Both responders turn every failure into the same
//! headers-only 404; the error itself only reaches the log.

pub mod dynamic;
pub mod static_files;

use std::path::{Component, Path, PathBuf};

use crate::config::{Config, InterpreterConfig};
use crate::http::request::RequestLine;
use crate::http::response::Response;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    Static,
    Dynamic,
}

/// Routes a final path segment by the text after its last `.`.
/// Matching is exact and case-sensitive; no `.` always means dynamic.
pub fn classify<S: AsRef<str>>(file_name: &str, static_extensions: &[S]) -> Route {
    match file_name.rsplit_once('.') {
        Some((_, ext)) if static_extensions.iter().any(|s| s.as_ref() == ext) => Route::Static,
        _ => Route::Dynamic,
    }
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
#[error("target {0:?} escapes the document root")]
pub struct ResolveError(pub String);

/// Maps a target onto a path under `root`.
///
/// The leading `/` is dropped; `..` or any absolute component is refused
/// before the filesystem is touched.
pub fn resolve(root: &Path, target: &str) -> Result<PathBuf, ResolveError> {
    let relative = Path::new(target.trim_start_matches('/'));

    let escapes = relative
        .components()
        .any(|c| matches!(c, Component::ParentDir | Component::RootDir | Component::Prefix(_)));
    if escapes {
        return Err(ResolveError(target.to_string()));
    }

    Ok(root.join(relative))
}

/// Everything a connection needs to answer a request. Shared read-only
/// between connection tasks.
#[derive(Debug, Clone)]
pub struct Dispatcher {
    root: PathBuf,
    static_extensions: Vec<String>,
    interpreters: Vec<InterpreterConfig>,
}

impl Dispatcher {
    pub fn new(cfg: &Config) -> Self {
        Self {
            root: cfg.server.root.clone(),
            static_extensions: cfg.routing.static_extensions.clone(),
            interpreters: cfg.routing.interpreters.clone(),
        }
    }

    pub fn route(&self, req: &RequestLine) -> Route {
        classify(req.file_name(), &self.static_extensions)
    }

    /// Answers a GET request line.
    pub async fn respond(&self, req: &RequestLine) -> Response {
        match self.route(req) {
            Route::Static => static_files::serve(&self.root, &req.target).await,
            Route::Dynamic => dynamic::serve(&self.root, &self.interpreters, req).await,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EXTS: &[&str] = &["css", "js", "png"];

    #[test]
    fn classify_uses_last_dot() {
        assert_eq!(classify("jquery.min.js", EXTS), Route::Static);
        assert_eq!(classify("archive.js.php", EXTS), Route::Dynamic);
    }

    #[test]
    fn classify_is_case_sensitive() {
        assert_eq!(classify("LOGO.PNG", EXTS), Route::Dynamic);
    }

    #[test]
    fn dot_in_directory_does_not_count() {
        let dispatcher = Dispatcher::new(&Config::default());
        let req = RequestLine::new(crate::http::request::Method::GET, "/v1.css/run");

        assert_eq!(dispatcher.route(&req), Route::Dynamic);
    }

    #[test]
    fn resolve_refuses_parent_dirs() {
        let root = Path::new("/srv");
        assert!(resolve(root, "/../etc/passwd").is_err());
        assert!(resolve(root, "/a/../../b").is_err());
        assert_eq!(resolve(root, "/a/b.css").unwrap(), PathBuf::from("/srv/a/b.css"));
    }

    #[test]
    fn resolve_strips_every_leading_slash() {
        assert_eq!(resolve(Path::new("/srv"), "//x.css").unwrap(), PathBuf::from("/srv/x.css"));
    }
}
