//! Status line parsing

use crate::error::{NntpError, Result};
use crate::response::NntpResponse;

/// Longest slice of an offending line echoed back in an error
const ERROR_EXCERPT_CHARS: usize = 100;

fn malformed(line: &str) -> NntpError {
    NntpError::MalformedResponse(line.chars().take(ERROR_EXCERPT_CHARS).collect())
}

/// Parse an NNTP status line into code and message
///
/// Grammar: three ASCII digits, a single space, then the message (possibly
/// empty). The line terminator must already be stripped.
pub fn parse_response_line(line: &str) -> Result<(u16, String)> {
    // Strip UTF-8 BOM if present (some broken servers/proxies add it)
    let line = line.trim_start_matches('\u{FEFF}');

    let bytes = line.as_bytes();
    if bytes.len() < 4 || !bytes[..3].iter().all(u8::is_ascii_digit) || bytes[3] != b' ' {
        return Err(malformed(line));
    }

    let code = line[..3].parse::<u16>().map_err(|_| malformed(line))?;
    Ok((code, line[4..].to_string()))
}

/// Parse a status line into an [`NntpResponse`]
pub fn parse_single_response(line: &str) -> Result<NntpResponse> {
    let (code, message) = parse_response_line(line)?;
    Ok(NntpResponse { code, message })
}
