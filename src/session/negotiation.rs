//! Capability negotiation (RFC 3977 §5.2)
//!
//! CAPABILITIES is the only network call here. Lookups run against the
//! cached result of the last successful fetch and never touch the stream.

use super::NntpSession;
use crate::capabilities::Capabilities;
use crate::commands;
use crate::error::{NntpError, Result};
use crate::response::codes;
use tokio::io::{AsyncRead, AsyncWrite};
use tracing::debug;

impl<S: AsyncRead + AsyncWrite + Unpin> NntpSession<S> {
    /// Fetch the server's capabilities and replace the cache with them
    ///
    /// Lines are uppercased. The cache is only replaced once the whole
    /// block has been read.
    pub async fn capabilities(&mut self) -> Result<&Capabilities> {
        let lines = self
            .command_lines(commands::capabilities(), codes::CAPABILITY_LIST)
            .await?;
        let capabilities = &*self.capabilities.insert(Capabilities::parse(&lines));
        debug!("Server advertised {} capabilities", capabilities.len());
        Ok(capabilities)
    }
}

impl<S> NntpSession<S> {
    /// Cached capabilities, if [`capabilities`](Self::capabilities) has run
    pub fn cached_capabilities(&self) -> Option<&Capabilities> {
        self.capabilities.as_ref()
    }

    /// Full cached capability line for `label` (case-insensitive)
    ///
    /// `None` when nothing is cached or the label was not advertised.
    pub fn get_capability(&self, label: &str) -> Option<&str> {
        self.capabilities.as_ref()?.get(label)
    }

    /// Whether cached capability `label` lists `argument`
    ///
    /// # Errors
    ///
    /// - [`NntpError::CapabilitiesNotPopulated`] - no successful CAPABILITIES yet
    /// - [`NntpError::CapabilityNotFound`] - `label` was not advertised
    pub fn has_capability_argument(&self, label: &str, argument: &str) -> Result<bool> {
        self.capabilities
            .as_ref()
            .ok_or(NntpError::CapabilitiesNotPopulated)?
            .has_argument(label, argument)
    }
}
