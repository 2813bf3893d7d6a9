//! Turns a parsed request into a response.
//!
//! Outcomes are terminal: a request either gets the file (200), the 404 page,
//! or a bare 501. Nothing is retried.

use std::fmt;
use std::path::{Path, PathBuf};

use anyhow::Context;
use tokio::fs::File;

use crate::http::mime::content_type;
use crate::http::request::Request;
use crate::http::response::Response;

/// Served when the request path is `/`.
pub const DEFAULT_DOCUMENT: &str = "index.html";

/// Requests the server refuses with an error status.
#[derive(Debug)]
pub enum Rejection {
    /// Any method other than GET.
    UnsupportedMethod(String),
    /// The resolved file could not be opened, or is a directory.
    ResourceNotFound(PathBuf),
}

impl Rejection {
    pub fn into_response(self) -> Response {
        match self {
            Rejection::UnsupportedMethod(_) => Response::not_implemented(),
            Rejection::ResourceNotFound(_) => Response::not_found(),
        }
    }
}

impl fmt::Display for Rejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Rejection::UnsupportedMethod(m) => write!(f, "unsupported method {m}"),
            Rejection::ResourceNotFound(p) => write!(f, "no such file {}", p.display()),
        }
    }
}

impl std::error::Error for Rejection {}

/// Maps the request path to a filename relative to the document root.
///
/// A single leading `/` is removed and an empty result becomes
/// [`DEFAULT_DOCUMENT`]. No other normalization happens, so `..` segments
/// are passed through to the filesystem untouched.
pub fn resolve_path(path: &[u8]) -> &[u8] {
    let name = path.strip_prefix(b"/").unwrap_or(path);
    if name.is_empty() {
        DEFAULT_DOCUMENT.as_bytes()
    } else {
        name
    }
}

/// Turns filename bytes into a path without re-encoding them.
#[cfg(unix)]
fn filename_to_path(name: &[u8]) -> PathBuf {
    use std::os::unix::ffi::OsStrExt;
    PathBuf::from(std::ffi::OsStr::from_bytes(name))
}

#[cfg(not(unix))]
fn filename_to_path(name: &[u8]) -> PathBuf {
    PathBuf::from(String::from_utf8_lossy(name).into_owned())
}

/// Decides the outcome for `request`, serving files from under `root`.
///
/// Rejections are turned into their error responses. The returned error is
/// reserved for failures after the file was opened (e.g. stat failing), which
/// leave the connection without a well-formed response.
pub async fn build_response(request: &Request, root: &Path) -> anyhow::Result<Response> {
    match open_file(request, root).await? {
        Ok(response) => Ok(response),
        Err(rejection) => {
            tracing::debug!(reason = %rejection, "Request rejected");
            Ok(rejection.into_response())
        }
    }
}

async fn open_file(
    request: &Request,
    root: &Path,
) -> anyhow::Result<Result<Response, Rejection>> {
    if !request.is_get() {
        return Ok(Err(Rejection::UnsupportedMethod(request.method.clone())));
    }

    let filename = resolve_path(&request.path);
    let full_path = root.join(filename_to_path(filename));

    let file = match File::open(&full_path).await {
        Ok(file) => file,
        Err(_) => return Ok(Err(Rejection::ResourceNotFound(full_path))),
    };

    let metadata = file
        .metadata()
        .await
        .with_context(|| format!("stat {}", full_path.display()))?;

    if metadata.is_dir() {
        return Ok(Err(Rejection::ResourceNotFound(full_path)));
    }

    Ok(Ok(Response::file(file, content_type(filename), metadata.len())))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn root_maps_to_default_document() {
        assert_eq!(resolve_path(b"/"), b"index.html");
        assert_eq!(resolve_path(b""), b"index.html");
    }

    #[test]
    fn only_one_slash_is_stripped() {
        assert_eq!(resolve_path(b"/a/b.html"), b"a/b.html");
        assert_eq!(resolve_path(b"//etc/hosts"), b"/etc/hosts");
        assert_eq!(resolve_path(b"/../secret"), b"../secret");
    }
}
