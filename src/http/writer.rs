use tokio::io::{AsyncReadExt, AsyncWrite, AsyncWriteExt};

use crate::http::response::{Body, Response};

const HTTP_VERSION: &str = "HTTP/1.1";

/// Size of each chunk read from a file and written to the client.
pub const CHUNK_SIZE: usize = 4096;

/// Status line, headers and the blank line that ends them.
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

    /// Writes the head, then the body. A file body is streamed in
    /// [`CHUNK_SIZE`] pieces until EOF and closed when this returns.
    ///
    /// Returns the number of body bytes written.
    pub async fn write_to_stream<W>(self, stream: &mut W) -> anyhow::Result<u64>
    where
        W: AsyncWrite + Unpin,
    {
        stream.write_all(&self.head).await?;

        let sent = match self.body {
            Body::Empty => 0,
            Body::Static(page) => {
                stream.write_all(page.as_bytes()).await?;
                page.len() as u64
            }
            Body::File(mut file) => {
                let mut chunk = [0u8; CHUNK_SIZE];
                let mut sent = 0u64;
                loop {
                    let n = file.read(&mut chunk).await?;
                    if n == 0 {
                        break;
                    }
                    stream.write_all(&chunk[..n]).await?;
                    sent += n as u64;
                }
                sent
            }
        };

        stream.flush().await?;
        Ok(sent)
    }
}
