use std::sync::Arc;

use tokio::io::{AsyncBufReadExt, AsyncRead, AsyncWrite, BufStream};

use crate::handler::Dispatcher;
use crate::http::parser::{parse_request_line, trim_line_ending};
use crate::http::request::RequestLine;
use crate::http::writer::ResponseWriter;

pub struct Connection<S> {
    stream: BufStream<S>,
    dispatcher: Arc<Dispatcher>,
    line: Vec<u8>,
    state: ConnectionState,
}

pub enum ConnectionState {
    Reading,
    Dispatching(RequestLine),
    Closed,
}

impl<S> Connection<S>
where
    S: AsyncRead + AsyncWrite + Unpin,
{
    pub fn new(stream: S, dispatcher: Arc<Dispatcher>) -> Self {
        Self {
            stream: BufStream::new(stream),
            dispatcher,
            line: Vec::with_capacity(1024),
            state: ConnectionState::Reading,
        }
    }

    /// Serves requests until the peer closes the stream.
    ///
    /// Only socket errors end the loop early; request failures have already
    /// been turned into responses by the dispatcher.
    pub async fn run(&mut self) -> anyhow::Result<()> {
        loop {
            let state = std::mem::replace(&mut self.state, ConnectionState::Closed);

            self.state = match state {
                ConnectionState::Reading => match self.read_request().await? {
                    Some(req) => ConnectionState::Dispatching(req),
                    // Client closed connection
                    None => ConnectionState::Closed,
                },

                ConnectionState::Dispatching(req) => {
                    tracing::debug!(uri = %req.target, "Dispatching request");
                    let response = self.dispatcher.respond(&req).await;
                    ResponseWriter::new(response)
                        .write_to_stream(&mut self.stream)
                        .await?;
                    ConnectionState::Reading
                }

                ConnectionState::Closed => break,
            };
        }

        Ok(())
    }

    /// Reads lines until one is a well-formed GET request line.
    ///
    /// Other methods, header lines, blank lines and malformed lines are
    /// skipped without a response. Returns `None` at end of stream.
    pub async fn read_request(&mut self) -> anyhow::Result<Option<RequestLine>> {
        loop {
            self.line.clear();
            let n = self.stream.read_until(b'\n', &mut self.line).await?;

            if n == 0 {
                return Ok(None);
            }

            match parse_request_line(trim_line_ending(&self.line)) {
                Ok(req) if req.is_get() => return Ok(Some(req)),
                Ok(req) => tracing::debug!(method = ?req.method, "Ignoring non-GET line"),
                Err(e) => tracing::debug!(error = ?e, "Skipping malformed line"),
            }
        }
    }
}
