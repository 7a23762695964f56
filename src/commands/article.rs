//! ARTICLE, HEAD and BODY commands (RFC 3977 §6.2)

use crate::error::{NntpError, Result};
use crate::response::codes;

/// Build ARTICLE command
pub fn article(specifier: &str) -> String {
    format!("ARTICLE {}", specifier)
}

/// Build HEAD command
pub fn head(specifier: &str) -> String {
    format!("HEAD {}", specifier)
}

/// Build BODY command
pub fn body(specifier: &str) -> String {
    format!("BODY {}", specifier)
}

/// Which part of an article a retrieval command asks for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArticlePart {
    /// Headers, blank line and body
    Full,
    /// Headers only
    Head,
    /// Body only
    Body,
}

impl ArticlePart {
    /// Command line for this part
    pub fn command(self, specifier: &str) -> String {
        match self {
            ArticlePart::Full => article(specifier),
            ArticlePart::Head => head(specifier),
            ArticlePart::Body => body(specifier),
        }
    }

    /// Status code the server sends before the block
    pub fn success_code(self) -> u16 {
        match self {
            ArticlePart::Full => codes::ARTICLE_FOLLOWS,
            ArticlePart::Head => codes::HEAD_FOLLOWS,
            ArticlePart::Body => codes::BODY_FOLLOWS,
        }
    }
}

/// Split the message of a 220/221/222 response into article number and
/// the rest (normally the message-id)
///
/// Format: `n message-id`. A message without a space yields an empty
/// remainder.
pub fn parse_article_response(message: &str) -> Result<(i64, String)> {
    let (number, remainder) = message.split_once(' ').unwrap_or((message, ""));
    let number = number
        .parse()
        .map_err(|_| NntpError::InvalidArticleNumber(message.to_string()))?;
    Ok((number, remainder.to_string()))
}
