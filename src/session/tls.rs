//! STARTTLS upgrade (RFC 4642)
//!
//! The only place the session's transport is swapped. A plain session moves
//! to encrypted at most once and never back.

use super::{NntpSession, Transport, transport};
use crate::codec::LineCodec;
use crate::commands;
use crate::error::{NntpError, Result};
use crate::response::codes;
use tokio::io::{AsyncRead, AsyncWrite};
use tokio_rustls::TlsConnector;
use tokio_rustls::rustls::pki_types::ServerName;
use tracing::{debug, warn};

impl<S: AsyncRead + AsyncWrite + Unpin> NntpSession<S> {
    /// Upgrade the connection to TLS and refresh capabilities
    ///
    /// Sends STARTTLS and requires 382, runs the TLS handshake over the same
    /// stream, rebinds the codec to the encrypted stream, then issues
    /// CAPABILITIES again: capabilities learned before the upgrade are not
    /// trusted afterwards and are dropped from the cache.
    ///
    /// # Errors
    ///
    /// - [`NntpError::TlsAlreadyActive`] - already encrypted; nothing is sent
    /// - [`NntpError::Io`] - the transport was lost to an earlier failed upgrade; nothing is sent
    /// - [`NntpError::UnexpectedResponseCode`] - server refused (e.g. 580); the session stays plain and usable
    /// - [`NntpError::Tls`] - handshake failed; the session is broken
    ///
    /// A failure during the handshake or the capability refresh is not
    /// retried and leaves the session in an undefined state.
    pub async fn start_tls(
        &mut self,
        connector: &TlsConnector,
        server_name: ServerName<'static>,
    ) -> Result<()> {
        match self.codec.get_ref() {
            Transport::Plain(_) => {}
            Transport::Tls(_) => return Err(NntpError::TlsAlreadyActive),
            Transport::Detached => return Err(NntpError::Io(transport::detached())),
        }

        self.command(commands::starttls(), codes::CONTINUE_WITH_TLS)
            .await?;
        self.upgrade(connector, server_name).await?;
        self.capabilities().await?;
        Ok(())
    }

    async fn upgrade(
        &mut self,
        connector: &TlsConnector,
        server_name: ServerName<'static>,
    ) -> Result<()> {
        // Until the handshake succeeds the session has no usable transport
        let mut detached = LineCodec::new(Transport::Detached);
        detached.mark_broken();
        let codec = std::mem::replace(&mut self.codec, detached);
        self.capabilities = None;

        if !codec.buffered().is_empty() {
            // Anything sent before the handshake is unauthenticated plaintext
            warn!(
                "Discarding {} bytes received ahead of TLS handshake",
                codec.buffered().len()
            );
        }

        // start_tls only gets here with a plain transport
        let Transport::Plain(stream) = codec.into_inner() else {
            return Err(NntpError::Tls(
                "STARTTLS accepted on a transport that is not plaintext".to_string(),
            ));
        };

        let tls_stream = connector
            .connect(server_name, stream)
            .await
            .map_err(|e| NntpError::Tls(format!("TLS handshake failed: {}", e)))?;

        self.codec = LineCodec::new(Transport::Tls(Box::new(tls_stream)));
        debug!("TLS negotiated via STARTTLS");
        Ok(())
    }
}
