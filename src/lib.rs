//! Typhoon - a small static file and CGI-style script server.
//!
//! Requests for allow-listed static extensions are streamed from disk;
//! every other GET target runs an interpreter over the named script and
//! returns its output.

pub mod config;
pub mod handler;
pub mod http;
pub mod server;
