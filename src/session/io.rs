//! Command/response exchange primitives shared by every session operation

use super::{NntpSession, Transport};
use crate::codec::BlockReader;
use crate::error::Result;
use crate::response::{Expect, NntpResponse};
use tokio::io::{AsyncRead, AsyncWrite};

impl<S: AsyncRead + AsyncWrite + Unpin> NntpSession<S> {
    /// Read one status line and validate its code
    pub(super) async fn read_response(&mut self, expect: Expect) -> Result<NntpResponse> {
        self.codec.read_status_line().await?.expect(expect)
    }

    /// Send a low-level command and read its status line
    ///
    /// `expect` follows the prefix rule of [`Expect`]: pass `215` to require
    /// exactly 215, `2` to accept any 2xx, or [`Expect::Any`] to accept
    /// whatever the server sends.
    ///
    /// # Errors
    ///
    /// - [`NntpError::UnexpectedResponseCode`](crate::NntpError::UnexpectedResponseCode) - code outside `expect`
    /// - [`NntpError::MalformedResponse`](crate::NntpError::MalformedResponse) - status line unparseable
    /// - [`NntpError::Io`](crate::NntpError::Io) / [`NntpError::ConnectionClosed`](crate::NntpError::ConnectionClosed) - transport failure
    pub async fn command(
        &mut self,
        command: &str,
        expect: impl Into<Expect>,
    ) -> Result<NntpResponse> {
        self.codec.write_line(command).await?;
        self.read_response(expect.into()).await
    }

    /// Send a low-level command whose success response is followed by a block
    ///
    /// The block must be consumed (or the session discarded) before the next
    /// command.
    pub async fn command_block(
        &mut self,
        command: &str,
        expect: impl Into<Expect>,
    ) -> Result<(NntpResponse, BlockReader<'_, Transport<S>>)> {
        let response = self.command(command, expect).await?;
        Ok((response, self.codec.read_block()))
    }

    /// Send a command and collect its block as text lines
    pub(super) async fn command_lines(
        &mut self,
        command: &str,
        expect: impl Into<Expect>,
    ) -> Result<Vec<String>> {
        let (_, block) = self.command_block(command, expect).await?;
        block.read_lines().await
    }
}
