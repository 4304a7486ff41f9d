use tokio::io::{AsyncRead, AsyncReadExt, AsyncWrite, AsyncWriteExt};

use crate::http::response::{Body, Response};

const HTTP_VERSION: &str = "HTTP/1.1";

/// Read size used when streaming a file body.
pub const CHUNK_SIZE: usize = 1024;

/// Written after every body, as the wire format has always done.
const BODY_TERMINATOR: &[u8] = b"\r\n";

/// Serializes the status line and headers, including the blank separator line.
pub fn serialize_head(resp: &Response) -> Vec<u8> {
    let mut buf = Vec::new();

    let status_line = format!(
        "{} {} {}\r\n",
        HTTP_VERSION,
        resp.status.as_u16(),
        resp.status.reason_phrase()
    );
    buf.extend_from_slice(status_line.as_bytes());

    for (k, v) in &resp.headers {
        buf.extend_from_slice(k.as_bytes());
        buf.extend_from_slice(b": ");
        buf.extend_from_slice(v.as_bytes());
        buf.extend_from_slice(b"\r\n");
    }

    buf.extend_from_slice(b"\r\n");
    buf
}

pub struct ResponseWriter {
    head: Vec<u8>,
    body: Body,
}

impl ResponseWriter {
    pub fn new(response: Response) -> Self {
        Self {
            head: serialize_head(&response),
            body: response.body,
        }
    }

    /// Writes the whole response and flushes the stream.
    ///
    /// A file read that fails partway leaves the body shorter than its
    /// Content-Length, so it is returned as an error without the terminator
    /// and the connection must not be reused.
    pub async fn write_to_stream<W>(self, stream: &mut W) -> anyhow::Result<()>
    where
        W: AsyncWrite + Unpin,
    {
        stream.write_all(&self.head).await?;

        match self.body {
            Body::Empty => {}
            Body::Full(bytes) => {
                stream.write_all(&bytes).await?;
                stream.write_all(BODY_TERMINATOR).await?;
            }
            Body::File(mut file) => {
                copy_chunks(&mut file, stream).await?;
                stream.write_all(BODY_TERMINATOR).await?;
            }
        }

        stream.flush().await?;
        Ok(())
    }
}

/// Copies `src` to `dst` in `CHUNK_SIZE` reads, writing only the bytes each
/// read actually filled. Returns the number of bytes copied.
///
/// A read error is logged and returned once the bytes before it are written.
pub async fn copy_chunks<R, W>(src: &mut R, dst: &mut W) -> anyhow::Result<u64>
where
    R: AsyncRead + Unpin,
    W: AsyncWrite + Unpin,
{
    let mut buf = [0u8; CHUNK_SIZE];
    let mut total = 0u64;

    loop {
        let n = match src.read(&mut buf).await {
            Ok(0) => break,
            Ok(n) => n,
            Err(e) => {
                tracing::warn!(copied = total, error = %e, "Body read failed");
                dst.flush().await?;
                return Err(anyhow::Error::new(e)
                    .context(format!("body read failed after {} bytes", total)));
            }
        };

        dst.write_all(&buf[..n]).await?;
        total += n as u64;
    }

    Ok(total)
}
