//! Content-type inference for static responses.

const DEFAULT_TYPE: &str = "text/plain";

// Checked in order by substring containment, so "/a.css.map" is text/css.
const TYPES: &[(&str, &str)] = &[
    (".html", "text/html"),
    (".css", "text/css"),
    (".js", "text/javascript"),
    (".gif", "image/gif"),
    (".png", "image/png"),
    (".jpg", "image/jpeg"),
];

/// Content type for a request target, `text/plain` when nothing matches.
pub fn content_type(target: &str) -> &'static str {
    TYPES
        .iter()
        .find(|(needle, _)| target.contains(needle))
        .map(|(_, ty)| *ty)
        .unwrap_or(DEFAULT_TYPE)
}
