//! Session establishment and teardown
//!
//! A session starts by reading the server greeting from an already-connected
//! stream. [`NntpSession::dial`] additionally opens the TCP connection and,
//! for implicit TLS, performs the handshake first.

use super::{NntpSession, Transport};
use crate::codec::LineCodec;
use crate::commands;
use crate::config::ServerConfig;
use crate::error::{NntpError, Result};
use crate::response::{Expect, codes};
use std::time::Duration;
use tokio::io::{AsyncRead, AsyncWrite};
use tokio::net::TcpStream;
use tokio::time::timeout;
use tokio_rustls::client::TlsStream;
use tracing::debug;

/// TCP connection timeout in seconds
const TCP_CONNECT_TIMEOUT_SECS: u64 = 120;

/// TLS handshake timeout in seconds
const TLS_HANDSHAKE_TIMEOUT_SECS: u64 = 60;

impl<S: AsyncRead + AsyncWrite + Unpin> NntpSession<S> {
    /// Start a session over a connected, unencrypted stream
    ///
    /// Reads the greeting (any status code is accepted) and keeps its
    /// message as the banner.
    ///
    /// # Errors
    ///
    /// Whatever reading the greeting reports: a transport error or
    /// [`NntpError::MalformedResponse`].
    pub async fn connect(stream: S) -> Result<Self> {
        Self::greet(Transport::Plain(stream)).await
    }

    /// Start a session over a stream that is already TLS-wrapped
    ///
    /// The session counts as encrypted, so [`start_tls`](Self::start_tls)
    /// is rejected.
    pub async fn connect_tls(stream: TlsStream<S>) -> Result<Self> {
        Self::greet(Transport::Tls(Box::new(stream))).await
    }

    async fn greet(transport: Transport<S>) -> Result<Self> {
        let mut codec = LineCodec::new(transport);
        let greeting = codec.read_status_line().await?.expect(Expect::Any)?;
        debug!("Server greeting: {} {}", greeting.code, greeting.message);

        Ok(Self {
            codec,
            banner: greeting.message,
            capabilities: None,
        })
    }

    /// Close the transport without saying goodbye
    ///
    /// # Errors
    ///
    /// [`NntpError::Io`] if the transport fails to shut down.
    pub async fn close(mut self) -> Result<()> {
        debug!("Closing NNTP session");
        self.codec.shutdown().await
    }

    /// Send QUIT (expects 205), then close the transport
    ///
    /// Returns the server's farewell message. A shutdown failure after the
    /// 205 is ignored; the server closes its side on QUIT anyway.
    pub async fn quit(mut self) -> Result<String> {
        let response = self
            .command(commands::quit(), codes::CLOSING_CONNECTION)
            .await?;
        if let Err(e) = self.codec.shutdown().await {
            debug!("Shutdown after QUIT failed: {}", e);
        }
        Ok(response.message)
    }
}

impl NntpSession<TcpStream> {
    /// Connect to the server described by `config`
    ///
    /// Opens the TCP connection, wraps it in TLS when `config.tls` is set,
    /// and reads the greeting. Does not authenticate - call
    /// [`authenticate`](Self::authenticate) afterwards.
    ///
    /// # Errors
    ///
    /// - [`NntpError::Io`] - TCP connection fails
    /// - [`NntpError::Tls`] - TLS handshake fails or `host` is not a valid server name
    /// - [`NntpError::Timeout`] - Connection or handshake times out
    ///
    /// # Timeouts
    /// - TCP connection: `TCP_CONNECT_TIMEOUT_SECS` seconds
    /// - TLS handshake: `TLS_HANDSHAKE_TIMEOUT_SECS` seconds
    ///
    /// Once connected no timeouts apply.
    pub async fn dial(config: &ServerConfig) -> Result<Self> {
        debug!("Connecting to NNTP server {}:{}", config.host, config.port);

        let tcp_stream = timeout(
            Duration::from_secs(TCP_CONNECT_TIMEOUT_SECS),
            TcpStream::connect((config.host.as_str(), config.port)),
        )
        .await
        .map_err(|_| NntpError::Timeout)??;

        // Request/response traffic: don't let Nagle hold back command lines
        tcp_stream.set_nodelay(true)?;

        if !config.tls {
            return Self::connect(tcp_stream).await;
        }

        let connector = config.tls_connector();
        let server_name = config.server_name()?;
        let tls_stream = timeout(
            Duration::from_secs(TLS_HANDSHAKE_TIMEOUT_SECS),
            connector.connect(server_name, tcp_stream),
        )
        .await
        .map_err(|_| NntpError::Timeout)?
        .map_err(|e| NntpError::Tls(format!("TLS handshake failed: {}", e)))?;

        Self::connect_tls(tls_stream).await
    }
}
