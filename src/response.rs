//! NNTP response types, status-code matching and status codes

use crate::error::{NntpError, Result};
use std::fmt;

/// NNTP status line: 3-digit code and message
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NntpResponse {
    /// 3-digit NNTP response code
    pub code: u16,
    /// Status message from server (may be empty)
    pub message: String,
}

impl NntpResponse {
    /// Check if response indicates success (2xx)
    pub fn is_success(&self) -> bool {
        self.code >= 200 && self.code < 300
    }

    /// Check if response indicates continuation (3xx)
    pub fn is_continuation(&self) -> bool {
        self.code >= 300 && self.code < 400
    }

    /// Check if response indicates error (4xx or 5xx)
    pub fn is_error(&self) -> bool {
        self.code >= 400
    }

    /// Validate the code against `expect`, consuming the response.
    ///
    /// # Errors
    ///
    /// [`NntpError::UnexpectedResponseCode`] if the code is outside what
    /// `expect` accepts.
    pub fn expect(self, expect: Expect) -> Result<Self> {
        if expect.matches(self.code) {
            Ok(self)
        } else {
            Err(NntpError::UnexpectedResponseCode {
                got: self.code,
                expected: expect,
                message: self.message,
            })
        }
    }
}

/// Accepted status code(s) for a command.
///
/// Prefix matching lets a caller require either an exact code or a whole
/// code family:
///
/// | Variant | Accepts |
/// |---|---|
/// | `Any` | every code |
/// | `Class(2)` | `200..300` |
/// | `Family(22)` | `220..230` |
/// | `Exact(220)` | `220` only |
///
/// `From<u16>` picks the variant by digit count, so `Expect::from(2)`,
/// `Expect::from(22)` and `Expect::from(220)` give the three rows above.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Expect {
    /// No validation
    Any,
    /// First digit of the code
    Class(u16),
    /// First two digits of the code
    Family(u16),
    /// Exact 3-digit code
    Exact(u16),
}

impl Expect {
    /// Whether `code` satisfies this expectation
    #[must_use]
    pub fn matches(self, code: u16) -> bool {
        match self {
            Expect::Any => true,
            Expect::Class(digit) => code / 100 == digit,
            Expect::Family(prefix) => code / 10 == prefix,
            Expect::Exact(expected) => code == expected,
        }
    }
}

impl From<u16> for Expect {
    fn from(code: u16) -> Self {
        match code {
            0..=9 => Expect::Class(code),
            10..=99 => Expect::Family(code),
            _ => Expect::Exact(code),
        }
    }
}

impl fmt::Display for Expect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expect::Any => f.write_str("any"),
            Expect::Class(digit) => write!(f, "{digit}xx"),
            Expect::Family(prefix) => write!(f, "{prefix}x"),
            Expect::Exact(code) => write!(f, "{code}"),
        }
    }
}

/// NNTP response codes (RFC 3977, RFC 4642, RFC 4643)
#[allow(dead_code)]
pub mod codes {
    // 1xx - Informational
    /// Capability list follows (RFC 3977 Section 5.2)
    pub const CAPABILITY_LIST: u16 = 101;

    // 2xx - Success
    /// Server ready, posting allowed
    pub const READY_POSTING_ALLOWED: u16 = 200;
    /// Server ready, no posting
    pub const READY_NO_POSTING: u16 = 201;
    /// Closing connection
    pub const CLOSING_CONNECTION: u16 = 205;
    /// Group selected
    pub const GROUP_SELECTED: u16 = 211;
    /// Information follows (RFC 3977 Section 7.6)
    pub const LIST_INFORMATION_FOLLOWS: u16 = 215;
    /// Article follows
    pub const ARTICLE_FOLLOWS: u16 = 220;
    /// Head follows
    pub const HEAD_FOLLOWS: u16 = 221;
    /// Body follows
    pub const BODY_FOLLOWS: u16 = 222;
    /// Overview information follows
    pub const OVERVIEW_INFO_FOLLOWS: u16 = 224;
    /// Article posted successfully (RFC 3977 Section 6.3.1)
    pub const ARTICLE_POSTED: u16 = 240;
    /// Authentication accepted (RFC 4643)
    pub const AUTH_ACCEPTED: u16 = 281;

    // 3xx - Continuation
    /// Send article to be posted
    pub const SEND_ARTICLE: u16 = 340;
    /// Password required (RFC 4643)
    pub const AUTH_CONTINUE: u16 = 381;
    /// Continue with TLS negotiation (RFC 4642)
    pub const CONTINUE_WITH_TLS: u16 = 382;

    // 4xx - Temporary errors
    /// Service temporarily unavailable
    pub const SERVICE_UNAVAILABLE: u16 = 400;
    /// No such newsgroup
    pub const NO_SUCH_GROUP: u16 = 411;
    /// No newsgroup selected
    pub const NO_GROUP_SELECTED: u16 = 412;
    /// No article with that number
    pub const NO_SUCH_ARTICLE_NUMBER: u16 = 423;
    /// No article with that message-id
    pub const NO_SUCH_ARTICLE_ID: u16 = 430;
    /// Posting not permitted (RFC 3977 Section 6.3.1)
    pub const POSTING_NOT_PERMITTED: u16 = 440;
    /// Posting failed (RFC 3977 Section 6.3.1)
    pub const POSTING_FAILED: u16 = 441;
    /// Authentication required (RFC 4643)
    pub const AUTH_REQUIRED: u16 = 480;
    /// Authentication rejected
    pub const AUTH_REJECTED: u16 = 481;
    /// Authentication out of sequence
    pub const AUTH_OUT_OF_SEQUENCE: u16 = 482;
    /// Encryption or authentication required (RFC 4643)
    pub const ENCRYPTION_REQUIRED: u16 = 483;

    // 5xx - Permanent errors
    /// Command not recognized
    pub const COMMAND_NOT_RECOGNIZED: u16 = 500;
    /// Command syntax error
    pub const COMMAND_SYNTAX_ERROR: u16 = 501;
    /// Access denied / command unavailable
    pub const ACCESS_DENIED: u16 = 502;
    /// TLS negotiation not possible (RFC 4642)
    pub const TLS_NOT_POSSIBLE: u16 = 580;
}
