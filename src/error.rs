//! NNTP error types

use crate::response::Expect;
use thiserror::Error;

/// NNTP protocol and connection errors
#[derive(Error, Debug)]
pub enum NntpError {
    /// IO error on the underlying transport
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Connection closed before a complete line was received
    #[error("Connection closed")]
    ConnectionClosed,

    /// TLS error during handshake
    #[error("TLS error: {0}")]
    Tls(String),

    /// Connection establishment timed out (only raised while dialing)
    #[error("Connection timeout")]
    Timeout,

    /// Status line did not match `ddd SP message`
    #[error("Malformed response: {0}")]
    MalformedResponse(String),

    /// GROUP response message did not match `count low high name`
    #[error("Invalid GROUP response: {0}")]
    InvalidGroupResponse(String),

    /// ARTICLE/HEAD/BODY response message did not start with an article number
    #[error("Invalid article number in response: {0}")]
    InvalidArticleNumber(String),

    /// Server returned a well-formed status outside the accepted code range
    #[error("Unexpected response code {got} (expected {expected}): {message}")]
    UnexpectedResponseCode {
        /// Code received from the server
        got: u16,
        /// What the command accepted
        expected: Expect,
        /// Status message from the server
        message: String,
    },

    /// STARTTLS requested on a session that is already encrypted
    #[error("TLS already active")]
    TlsAlreadyActive,

    /// Capability lookup before CAPABILITIES was issued
    #[error("Capabilities not populated")]
    CapabilitiesNotPopulated,

    /// Capability label absent from the cached list
    #[error("No such capability: {0}")]
    CapabilityNotFound(String),
}

impl NntpError {
    /// Whether this error came from the transport itself.
    ///
    /// Transport failures are fatal to the session; the stream position is
    /// unknown afterwards and the connection must be discarded.
    pub fn is_transport(&self) -> bool {
        matches!(
            self,
            NntpError::Io(_) | NntpError::ConnectionClosed | NntpError::Tls(_) | NntpError::Timeout
        )
    }
}

/// Result type alias using NntpError
pub type Result<T> = std::result::Result<T, NntpError>;
