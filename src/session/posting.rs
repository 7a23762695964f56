//! Article posting (RFC 3977 Section 6.3.1)

use super::NntpSession;
use crate::commands;
use crate::error::Result;
use crate::response::codes;
use tokio::io::{AsyncRead, AsyncReadExt, AsyncWrite};
use tracing::debug;

/// Read size when copying an article into the outgoing block
const POST_CHUNK_SIZE: usize = 16 * 1024;

impl<S: AsyncRead + AsyncWrite + Unpin> NntpSession<S> {
    /// Post a new article
    ///
    /// `article` must already be a complete article: headers, a blank line,
    /// then the body. It is sent as-is apart from line-ending
    /// normalization to CRLF and dot-stuffing.
    ///
    /// # Two-Phase Protocol
    ///
    /// 1. Client sends POST, server answers 340 (or 440 if posting is not allowed)
    /// 2. Client sends the article followed by "."
    /// 3. Server answers 240 (or 441 if the article was rejected)
    ///
    /// # Errors
    ///
    /// - [`NntpError::UnexpectedResponseCode`](crate::NntpError::UnexpectedResponseCode) - 440 before or 441 after the article
    /// - [`NntpError::Io`](crate::NntpError::Io) - reading `article` or writing to the server failed
    ///
    /// If copying the article fails the terminator may or may not have been
    /// sent; the session must be treated as unusable rather than retried.
    pub async fn post<R: AsyncRead + Unpin>(&mut self, mut article: R) -> Result<()> {
        self.command(commands::post(), codes::SEND_ARTICLE).await?;

        let mut writer = self.codec.open_block_writer();
        let mut chunk = vec![0u8; POST_CHUNK_SIZE];
        let mut total = 0usize;
        loop {
            let n = article.read(&mut chunk).await?;
            if n == 0 {
                break;
            }
            writer.write(&chunk[..n]).await?;
            total += n;
        }
        writer.finish().await?;
        debug!("Sent article ({} bytes)", total);

        self.read_response(codes::ARTICLE_POSTED.into()).await?;
        debug!("Article posted successfully");
        Ok(())
    }
}
