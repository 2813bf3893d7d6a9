use std::path::{Path, PathBuf};
use std::time::Duration;

use bytes::BytesMut;
use tokio::io::{AsyncRead, AsyncReadExt, AsyncWrite, AsyncWriteExt};

use crate::http::handler::build_response;
use crate::http::parser::{MAX_REQUEST_SIZE, find_line_end, parse_request_line};
use crate::http::request::Request;
use crate::http::writer::ResponseWriter;

/// Most bytes read and discarded from the client after the response.
const LINGER_LIMIT: usize = 1 << 20;

/// How long to wait for the client to close after the response.
const LINGER_TIMEOUT: Duration = Duration::from_secs(5);

pub struct Connection<S> {
    stream: S,
    root: PathBuf,
    buffer: BytesMut,
    state: ConnectionState,
}

pub enum ConnectionState {
    Reading,
    Processing(Request),
    Writing(Request, ResponseWriter),
    Closed,
}

impl<S> Connection<S>
where
    S: AsyncRead + AsyncWrite + Unpin,
{
    pub fn new(stream: S, root: impl AsRef<Path>) -> Self {
        Self {
            stream,
            root: root.as_ref().to_path_buf(),
            buffer: BytesMut::with_capacity(MAX_REQUEST_SIZE),
            state: ConnectionState::Reading,
        }
    }

    /// Serves exactly one request, then shuts the stream down.
    ///
    /// A malformed request line closes the connection without a response.
    /// Before the stream is dropped, unread request bytes are drained so the
    /// close does not reset the connection and discard unsent body bytes.
    pub async fn run(&mut self) -> anyhow::Result<()> {
        loop {
            match std::mem::replace(&mut self.state, ConnectionState::Closed) {
                ConnectionState::Reading => {
                    self.state = match self.read_request().await? {
                        Some(req) => ConnectionState::Processing(req),
                        None => ConnectionState::Closed,
                    };
                }

                ConnectionState::Processing(req) => {
                    let response = build_response(&req, &self.root).await?;
                    tracing::info!(
                        method = %req.method,
                        path = %req.path_lossy(),
                        status = response.status.as_u16(),
                        "Responding"
                    );
                    self.state = ConnectionState::Writing(req, ResponseWriter::new(response));
                }

                ConnectionState::Writing(req, writer) => {
                    let sent = writer.write_to_stream(&mut self.stream).await?;
                    tracing::debug!(path = %req.path_lossy(), bytes = sent, "Response sent");
                    self.state = ConnectionState::Closed;
                }

                ConnectionState::Closed => {
                    break;
                }
            }
        }

        if let Err(e) = self.stream.shutdown().await {
            tracing::debug!(error = %e, "Shutdown after response failed");
            return Ok(());
        }

        self.linger().await;

        Ok(())
    }

    /// Reads and discards input until the client closes its side, up to
    /// [`LINGER_LIMIT`] bytes or [`LINGER_TIMEOUT`].
    async fn linger(&mut self) {
        let stream = &mut self.stream;
        let drain = async {
            let mut temp = [0u8; 1024];
            let mut drained = 0usize;
            while drained < LINGER_LIMIT {
                match stream.read(&mut temp).await {
                    Ok(0) | Err(_) => break,
                    Ok(n) => drained += n,
                }
            }
            drained
        };

        match tokio::time::timeout(LINGER_TIMEOUT, drain).await {
            Ok(drained) if drained > 0 => {
                tracing::debug!(bytes = drained, "Discarded unread request bytes");
            }
            Ok(_) => {}
            Err(_) => tracing::debug!("Client did not close in time"),
        }
    }

    /// Reads until the request line is complete, the size cap is hit, or the
    /// client stops sending. Returns `None` for a client that sent nothing
    /// or a request line that cannot be parsed.
    pub async fn read_request(&mut self) -> anyhow::Result<Option<Request>> {
        loop {
            if find_line_end(&self.buffer).is_some() || self.buffer.len() >= MAX_REQUEST_SIZE {
                break;
            }

            let mut temp = [0u8; 1024];
            let want = temp.len().min(MAX_REQUEST_SIZE - self.buffer.len());
            let n = self.stream.read(&mut temp[..want]).await?;

            if n == 0 {
                // Client closed its side
                break;
            }

            self.buffer.extend_from_slice(&temp[..n]);
        }

        if self.buffer.is_empty() {
            return Ok(None);
        }

        tracing::debug!(
            raw = %String::from_utf8_lossy(&self.buffer),
            "Received HTTP request"
        );

        match parse_request_line(&self.buffer) {
            Ok(request) => Ok(Some(request)),
            Err(e) => {
                tracing::warn!(error = %e, "Dropping connection");
                Ok(None)
            }
        }
    }
}
