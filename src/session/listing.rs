//! Group listing, selection and overview commands

use super::NntpSession;
use crate::commands::{self, Group};
use crate::error::Result;
use crate::response::codes;
use tokio::io::{AsyncRead, AsyncWrite};
use tracing::{debug, trace};

impl<S: AsyncRead + AsyncWrite + Unpin> NntpSession<S> {
    /// List newsgroups (RFC 3977 §7.6.3)
    ///
    /// `subcommand` is appended to `LIST`; pass `""` for the default
    /// `ACTIVE` listing. Lines that do not parse as `name high low status`
    /// are skipped (see [`commands::parse_list_response`]). Groups from
    /// LIST carry `count == 0`.
    ///
    /// # Errors
    ///
    /// [`NntpError::UnexpectedResponseCode`](crate::NntpError::UnexpectedResponseCode)
    /// unless the server answers 215, or a transport error.
    pub async fn list(&mut self, subcommand: &str) -> Result<Vec<Group>> {
        let lines = self
            .command_lines(&commands::list(subcommand), codes::LIST_INFORMATION_FOLLOWS)
            .await?;
        let groups = commands::parse_list_response(&lines);
        debug!("LIST returned {} groups ({} lines)", groups.len(), lines.len());
        Ok(groups)
    }

    /// Select a newsgroup (RFC 3977 §6.1.1)
    ///
    /// # Errors
    ///
    /// - [`NntpError::UnexpectedResponseCode`](crate::NntpError::UnexpectedResponseCode) - not 211 (411 for unknown groups)
    /// - [`NntpError::InvalidGroupResponse`](crate::NntpError::InvalidGroupResponse) - message is not `count low high name`
    pub async fn group(&mut self, name: &str) -> Result<Group> {
        let response = self
            .command(&commands::group(name), codes::GROUP_SELECTED)
            .await?;
        let group = commands::parse_group_response(&response.message)?;
        trace!(
            "Selected {}: {} articles ({}-{})",
            group.name, group.count, group.low, group.high
        );
        Ok(group)
    }

    /// Fetch the overview field names (LIST OVERVIEW.FMT, RFC 3977 §8.4)
    ///
    /// An OVER capability implies this LIST variant, so there is no need to
    /// check the LIST keywords first.
    pub async fn list_overview_fmt(&mut self) -> Result<Vec<String>> {
        self.command_lines(commands::list_overview_fmt(), codes::LIST_INFORMATION_FOLLOWS)
            .await
    }

    /// Fetch raw tab-separated overview lines (OVER, RFC 3977 §8.3)
    ///
    /// `specifier` is a range (`100-200`, `100-`), an article number or a
    /// message-id. Lines are returned as sent, without interpretation.
    pub async fn over(&mut self, specifier: &str) -> Result<Vec<String>> {
        self.command_lines(&commands::over(specifier), codes::OVERVIEW_INFO_FOLLOWS)
            .await
    }
}
