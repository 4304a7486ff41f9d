//! HTTP protocol handling.
//!
//! This is a line-oriented subset of HTTP/1.1: each line a client sends is
//! examined on its own, and only `GET <target>` lines are answered. Headers
//! sent by real clients are read as lines too and skipped, so browsers and
//! `curl` work without a header parser.
//!
//! # Architecture
//!
//! - **`connection`**: The per-connection loop implementing the state machine below
//! - **`parser`**: Parses one request line into method and target
//! - **`request`**: Request line representation, path segments and query split
//! - **`response`**: HTTP response representation with builder pattern
//! - **`writer`**: Serializes responses and streams file bodies in chunks
//! - **`mime`**: Content type detection for static files
//!
//! # Connection State Machine
//!
//! ```text
//!        ┌─────────────┐
//!        │   Reading   │ ← Wait for the next GET line
//!        └──────┬──────┘
//!               │ Request line received        EOF / read error
//!               ▼                              ─────────────────→ Closed
//!        ┌──────────────────┐
//!        │   Dispatching    │ ← Route, respond, write
//!        └──────┬───────────┘
//!               │ Response written
//!               └─ back to Reading (same connection)
//! ```
//!
//! The loop itself is the keep-alive mechanism: nothing in a request can
//! ask for the connection to be closed, and a 404 does not close it either.

pub mod connection;
pub mod mime;
pub mod parser;
pub mod request;
pub mod response;
pub mod writer;
