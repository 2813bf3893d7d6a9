//! Content-Type inference from file extensions.

pub const DEFAULT_CONTENT_TYPE: &str = "application/octet-stream";

/// Returns the Content-Type for `filename`.
///
/// The extension is everything from the last `.` in the name, and it must
/// match exactly (case-sensitive). Names without a known extension are served
/// as `application/octet-stream`. The name is looked at as bytes, so it does
/// not have to be UTF-8.
///
/// # Example
///
/// ```
/// # use filecast::http::mime::content_type;
/// assert_eq!(content_type("index.html"), "text/html");
/// assert_eq!(content_type("song.mp3"), "audio/mpeg");
/// assert_eq!(content_type("README"), "application/octet-stream");
/// ```
pub fn content_type(filename: impl AsRef<[u8]>) -> &'static str {
    let filename = filename.as_ref();
    let Some(dot) = filename.iter().rposition(|&b| b == b'.') else {
        return DEFAULT_CONTENT_TYPE;
    };

    match &filename[dot..] {
        b".html" | b".htm" => "text/html",
        b".jpg" | b".jpeg" => "image/jpeg",
        b".gif" => "image/gif",
        b".mp3" => "audio/mpeg",
        b".pdf" => "application/pdf",
        _ => DEFAULT_CONTENT_TYPE,
    }
}
