//! NNTP authentication support (AUTHINFO USER/PASS, RFC 4643)

use super::NntpSession;
use crate::commands;
use crate::error::Result;
use crate::response::codes;
use tokio::io::{AsyncRead, AsyncWrite};
use tracing::debug;

impl<S: AsyncRead + AsyncWrite + Unpin> NntpSession<S> {
    /// Authenticate with username and password (AUTHINFO USER/PASS)
    ///
    /// Sends AUTHINFO USER and requires 381, then AUTHINFO PASS and requires
    /// 281. Returns the message of the 281 response. Nothing is retried.
    ///
    /// RFC 4643 asks clients not to send a password over an unencrypted
    /// link; call [`start_tls`](Self::start_tls) first on plain connections.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - [`NntpError::UnexpectedResponseCode`](crate::NntpError::UnexpectedResponseCode) -
    ///   either step was rejected (e.g. 481 bad credentials, 482 out of
    ///   sequence, 483 encryption required)
    /// - [`NntpError::ConnectionClosed`](crate::NntpError::ConnectionClosed) - Server closed the connection
    pub async fn authenticate(&mut self, username: &str, password: &str) -> Result<String> {
        debug!("Authenticating as {}", username);
        if !self.is_tls() {
            debug!("Sending credentials over an unencrypted connection");
        }

        self.command(&commands::authinfo_user(username), codes::AUTH_CONTINUE)
            .await?;
        let response = self
            .command(&commands::authinfo_pass(password), codes::AUTH_ACCEPTED)
            .await?;

        debug!("Authentication successful");
        Ok(response.message)
    }
}
