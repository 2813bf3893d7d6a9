use std::fmt;

use crate::http::request::Request;

/// Upper bound on the bytes read for a single request. Anything past this is
/// never read and never looked at.
pub const MAX_REQUEST_SIZE: usize = 2048;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// The request line has fewer than two tokens.
    MalformedRequest,
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseError::MalformedRequest => f.write_str("malformed request line"),
        }
    }
}

impl std::error::Error for ParseError {}

/// Extracts the method and path from the first line of `buf`.
///
/// Tokens are split on ASCII whitespace at the byte level and are not
/// otherwise validated, so a path cut short by [`MAX_REQUEST_SIZE`] or one
/// that is not UTF-8 is passed on as-is. Everything after the first line is
/// ignored.
pub fn parse_request_line(buf: &[u8]) -> Result<Request, ParseError> {
    let buf = &buf[..buf.len().min(MAX_REQUEST_SIZE)];

    let line_end = find_line_end(buf).unwrap_or(buf.len());
    let mut parts = buf[..line_end]
        .split(|&b| is_separator(b))
        .filter(|token| !token.is_empty());

    let method = parts.next().ok_or(ParseError::MalformedRequest)?;
    let path = parts.next().ok_or(ParseError::MalformedRequest)?;

    Ok(Request::new(String::from_utf8_lossy(method), path))
}

/// Position of the first `\n`, if the request line is complete.
pub fn find_line_end(buf: &[u8]) -> Option<usize> {
    buf.iter().position(|&b| b == b'\n')
}

// Same set as C's isspace(), vertical tab included.
fn is_separator(b: u8) -> bool {
    matches!(b, b' ' | b'\t' | b'\n' | b'\r' | 0x0b | 0x0c)
}
