//! NNTP session engine
//!
//! One [`NntpSession`] owns one transport. Commands are strictly one at a
//! time: every method writes its command, reads the status line, and either
//! drains the following block or hands it to the caller as a
//! [`BlockReader`](crate::BlockReader) that borrows the session until dropped.

mod articles;
mod auth;
mod connection;
mod io;
mod listing;
mod negotiation;
mod posting;
mod tls;
mod transport;

pub use articles::ArticleResponse;
pub use transport::Transport;

use crate::capabilities::Capabilities;
use crate::codec::LineCodec;
use tokio::io::{AsyncRead, AsyncWrite};
use tracing::debug;

/// Async NNTP client session over any byte stream
///
/// # Example
///
/// ```no_run
/// use nntp_session::{NntpSession, ServerConfig};
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let config = ServerConfig::plain("news.example.com", "user", "pass");
/// let mut session = NntpSession::dial(&config).await?;
///
/// // Upgrade before sending credentials
/// session
///     .start_tls(&config.tls_connector(), config.server_name()?)
///     .await?;
/// session.authenticate(&config.username, &config.password).await?;
///
/// let group = session.group("alt.test").await?;
/// println!("{} has about {} articles", group.name, group.count);
/// # Ok(())
/// # }
/// ```
#[must_use]
pub struct NntpSession<S> {
    /// Line codec bound to the current transport
    codec: LineCodec<Transport<S>>,
    /// Greeting message captured at connect time
    banner: String,
    /// Result of the last successful CAPABILITIES, if any
    capabilities: Option<Capabilities>,
}

impl<S> NntpSession<S> {
    /// Greeting message sent by the server on connect
    pub fn banner(&self) -> &str {
        &self.banner
    }

    /// Check if this connection is out of sync and should be discarded
    pub fn is_broken(&self) -> bool {
        self.codec.is_broken()
    }
}

impl<S: AsyncRead + AsyncWrite + Unpin> NntpSession<S> {
    /// Whether the transport is encrypted (implicit TLS or after STARTTLS)
    pub fn is_tls(&self) -> bool {
        self.codec.get_ref().is_tls()
    }
}

impl<S> Drop for NntpSession<S> {
    fn drop(&mut self) {
        debug!("NntpSession dropped");
    }
}
