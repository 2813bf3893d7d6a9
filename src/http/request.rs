use std::borrow::Cow;

use bytes::Bytes;

/// The only method the server answers with a file.
pub const GET: &str = "GET";

/// Represents the request line sent by a client.
///
/// Only the method and path tokens are kept; the version token, headers and
/// any body are ignored by the server. The path is kept as raw bytes since
/// filenames need not be UTF-8.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Request {
    /// The method token (e.g. "GET", "POST"), lossily decoded
    pub method: String,
    /// The request path exactly as sent (e.g. "/index.html")
    pub path: Bytes,
}

impl Request {
    pub fn new(method: impl Into<String>, path: impl AsRef<[u8]>) -> Self {
        Self {
            method: method.into(),
            path: Bytes::copy_from_slice(path.as_ref()),
        }
    }

    /// Returns `true` for the GET method. The comparison is case-sensitive,
    /// so `get` is not treated as GET.
    pub fn is_get(&self) -> bool {
        self.method == GET
    }

    /// The path for logging.
    pub fn path_lossy(&self) -> Cow<'_, str> {
        String::from_utf8_lossy(&self.path)
    }
}
